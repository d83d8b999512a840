#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Combat statistics collected from tick deltas.
//!
//! [`CombatStats`] is a [`TickObserver`]: the engine hands it every delta and
//! it keeps running totals of kills by type, gold by source, leaks and
//! perfect waves.

use std::collections::BTreeMap;

use elemental_defence_core::{EnemyKind, GoldSource, TickDelta, TickObserver};
use serde::Serialize;

/// Running combat totals.
#[derive(Clone, Debug, Default)]
pub struct CombatStats {
    ticks: u64,
    kills: BTreeMap<EnemyKind, u32>,
    leaks: BTreeMap<EnemyKind, u32>,
    gold: BTreeMap<GoldSource, u64>,
    lives_lost: u64,
    waves_completed: u32,
    perfect_waves: u32,
    perfect_streak: u32,
}

impl CombatStats {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Kills of `kind` so far.
    #[must_use]
    pub fn kills_of(&self, kind: EnemyKind) -> u32 {
        self.kills.get(&kind).copied().unwrap_or(0)
    }

    /// Total kills so far.
    #[must_use]
    pub fn total_kills(&self) -> u32 {
        self.kills.values().sum()
    }

    /// Gold earned from `source` so far.
    #[must_use]
    pub fn gold_from(&self, source: GoldSource) -> u64 {
        self.gold.get(&source).copied().unwrap_or(0)
    }

    /// Lives lost to leaks so far.
    #[must_use]
    pub const fn lives_lost(&self) -> u64 {
        self.lives_lost
    }

    /// Waves finished without losing a life.
    #[must_use]
    pub const fn perfect_waves(&self) -> u32 {
        self.perfect_waves
    }

    /// Consecutive perfect waves ending with the latest one.
    #[must_use]
    pub const fn perfect_streak(&self) -> u32 {
        self.perfect_streak
    }

    /// Snapshot of every total in a serialisable form.
    #[must_use]
    pub fn report(&self) -> StatsReport {
        StatsReport {
            ticks: self.ticks,
            kills: self.kills.clone(),
            leaks: self.leaks.clone(),
            gold: self.gold.clone(),
            total_kills: self.total_kills(),
            lives_lost: self.lives_lost,
            waves_completed: self.waves_completed,
            perfect_waves: self.perfect_waves,
            perfect_streak: self.perfect_streak,
        }
    }
}

impl TickObserver for CombatStats {
    fn on_tick(&mut self, delta: &TickDelta) {
        self.ticks += 1;
        for kill in &delta.kills {
            *self.kills.entry(kill.kind).or_insert(0) += 1;
            *self.gold.entry(kill.source).or_insert(0) += u64::from(kill.gold);
        }
        for leak in &delta.leaks {
            *self.leaks.entry(leak.kind).or_insert(0) += 1;
        }
        self.lives_lost += u64::from(delta.lives_lost);

        if let Some(summary) = delta.wave_completed {
            self.waves_completed += 1;
            if summary.perfect {
                self.perfect_waves += 1;
                self.perfect_streak += 1;
            } else {
                self.perfect_streak = 0;
            }
        }
    }
}

/// Serialisable snapshot of [`CombatStats`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    /// Ticks observed.
    pub ticks: u64,
    /// Kills per enemy type.
    pub kills: BTreeMap<EnemyKind, u32>,
    /// Leaks per enemy type.
    pub leaks: BTreeMap<EnemyKind, u32>,
    /// Gold per source.
    pub gold: BTreeMap<GoldSource, u64>,
    /// Kills across every type.
    pub total_kills: u32,
    /// Lives lost to leaks.
    pub lives_lost: u64,
    /// Waves finished.
    pub waves_completed: u32,
    /// Waves finished without losing a life.
    pub perfect_waves: u32,
    /// Current perfect-wave streak.
    pub perfect_streak: u32,
}
