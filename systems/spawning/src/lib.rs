#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Wave planning and the spawn cadence that feeds enemies into the engine.
//!
//! The spawner runs on its own cadence, independent of the combat tick. The
//! engine drains its orders between ticks, so spawning never interleaves
//! with a tick's phases.

use std::{collections::VecDeque, time::Duration};

use elemental_defence_balance::WaveTable;
use elemental_defence_core::{EnemyKind, PathId};
use elemental_defence_system_enemies::{determine_type, SpawnSlot, WaveLevel};
use rand::Rng;

/// Configuration parameters required to construct the spawner.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    spawn_interval: Duration,
}

impl Config {
    /// Creates a new configuration using the provided spawn cadence.
    #[must_use]
    pub const fn new(spawn_interval: Duration) -> Self {
        Self { spawn_interval }
    }

    /// Reads the cadence from the wave balance table.
    #[must_use]
    pub fn from_table(table: &WaveTable) -> Self {
        Self::new(table.spawn_interval())
    }
}

/// Enemy types of one wave, rolled up front in spawn order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WavePlan {
    level: WaveLevel,
    kinds: Vec<EnemyKind>,
}

impl WavePlan {
    /// Rolls the type of every enemy in the wave.
    pub fn roll<R: Rng + ?Sized>(level: WaveLevel, table: &WaveTable, rng: &mut R) -> Self {
        let total = table.enemy_count(level.wave);
        let kinds = (0..total)
            .map(|index| determine_type(SpawnSlot::new(index, total, level), rng))
            .collect();
        Self { level, kinds }
    }

    /// Creates a plan from explicit types.
    #[must_use]
    pub fn from_kinds(level: WaveLevel, kinds: Vec<EnemyKind>) -> Self {
        Self { level, kinds }
    }

    /// Wave and stage of the plan.
    #[must_use]
    pub const fn level(&self) -> WaveLevel {
        self.level
    }

    /// Types in spawn order.
    #[must_use]
    pub fn kinds(&self) -> &[EnemyKind] {
        &self.kinds
    }

    /// Number of enemies in the wave.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Reports whether the wave has no enemies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Request to append one enemy to the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnOrder {
    /// Type of the enemy.
    pub kind: EnemyKind,
    /// Path it enters on.
    pub path: PathId,
    /// Wave and stage it belongs to.
    pub level: WaveLevel,
}

/// Releases a loaded wave one enemy per interval, cycling across paths.
#[derive(Debug)]
pub struct WaveSpawner {
    spawn_interval: Duration,
    accumulator: Duration,
    level: Option<WaveLevel>,
    queue: VecDeque<EnemyKind>,
    path_cursor: usize,
}

impl WaveSpawner {
    /// Creates an idle spawner using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            spawn_interval: config.spawn_interval,
            accumulator: Duration::ZERO,
            level: None,
            queue: VecDeque::new(),
            path_cursor: 0,
        }
    }

    /// Queues every enemy of `plan`, replacing anything still pending.
    ///
    /// The first enemy is released on the next call to [`WaveSpawner::release`].
    pub fn load(&mut self, plan: WavePlan) {
        self.level = Some(plan.level);
        self.queue = plan.kinds.into();
        self.accumulator = self.spawn_interval;
        self.path_cursor = 0;
    }

    /// Drops every pending enemy.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.level = None;
        self.accumulator = Duration::ZERO;
    }

    /// Number of enemies not yet released.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Reports whether every loaded enemy has been released.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.queue.is_empty()
    }

    /// Advances the cadence by `dt` and emits the orders that came due.
    ///
    /// Paths are assigned round-robin. Nothing is released while `paths` is
    /// empty; the time still accumulates.
    pub fn release(&mut self, dt: Duration, paths: &[PathId], out: &mut Vec<SpawnOrder>) {
        let Some(level) = self.level else {
            return;
        };
        if self.queue.is_empty() {
            return;
        }

        self.accumulator = self.accumulator.saturating_add(dt);
        if paths.is_empty() {
            return;
        }

        while self.accumulator >= self.spawn_interval {
            let Some(kind) = self.queue.pop_front() else {
                break;
            };
            self.accumulator -= self.spawn_interval;
            let path = paths[self.path_cursor % paths.len()];
            self.path_cursor = (self.path_cursor + 1) % paths.len();
            out.push(SpawnOrder { kind, path, level });
        }
    }
}
