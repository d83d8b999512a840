//! Construction of enemies from the balance tables.

use std::time::Duration;

use elemental_defence_balance::Balance;
use elemental_defence_core::{Enemy, EnemyId, EnemyKind, EnemyProfile, Path};
use rand::Rng;

use crate::{
    health::{calc_base_health, calc_boss_health},
    rules::WaveLevel,
};

/// Builds fully initialised enemies for a given balance.
#[derive(Clone, Copy, Debug)]
pub struct EnemyFactory<'a> {
    balance: &'a Balance,
}

impl<'a> EnemyFactory<'a> {
    /// Creates a factory reading from `balance`.
    #[must_use]
    pub const fn new(balance: &'a Balance) -> Self {
        Self { balance }
    }

    /// Profile of an enemy of `kind` at `level`; speed is rolled within the type's range.
    pub fn profile<R: Rng + ?Sized>(
        &self,
        kind: EnemyKind,
        level: WaveLevel,
        rng: &mut R,
    ) -> EnemyProfile {
        let stats = self.balance.enemies.get(kind);
        let max_health = if kind == EnemyKind::Boss {
            calc_boss_health(level.stage, &self.balance.waves)
        } else {
            let base = calc_base_health(level.stage, level.wave, &self.balance.waves);
            (base as f32 * stats.health_multiplier).floor() as u32
        };
        let speed = if stats.speed_max > stats.speed_min && stats.speed_max.is_finite() {
            rng.gen_range(stats.speed_min..=stats.speed_max)
        } else {
            stats.speed_min
        };
        EnemyProfile {
            max_health: max_health.max(1),
            speed,
            gold: stats.gold,
            lives_cost: stats.lives_cost,
            aura: self.balance.aura_for(kind),
        }
    }

    /// Creates an enemy at the start of `path`.
    ///
    /// Aura carriers start their cooldown at `now` so a freshly spawned
    /// healer does not pulse on its first tick.
    pub fn create<R: Rng + ?Sized>(
        &self,
        id: EnemyId,
        kind: EnemyKind,
        level: WaveLevel,
        path: &Path,
        now: Duration,
        rng: &mut R,
    ) -> Enemy {
        let profile = self.profile(kind, level, rng);
        let mut enemy = Enemy::new(id, kind, path, profile);
        if enemy.aura.is_some() {
            enemy.last_aura_at = Some(now);
        }
        enemy
    }
}
