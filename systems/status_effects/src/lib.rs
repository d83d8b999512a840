#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure status-effect engine that attaches, ticks and expires timed modifiers.
//!
//! The engine never touches shared collections. It mutates the single enemy
//! it is handed and reports instantaneous results (burn damage, healing,
//! expirations) back to the caller, which decides how to apply them.

use std::time::Duration;

use elemental_defence_balance::CombatTable;
use elemental_defence_core::{
    Burn, Enemy, Freeze, Path, Regeneration, Slow, StatusEffects, StatusKind, StatusRequest,
};

mod displacement;

/// Timing and clamping parameters of the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusConfig {
    burn_tick: Duration,
    regen_tick: Duration,
    min_slow_factor: f32,
}

impl StatusConfig {
    /// Creates a configuration; zero cadences are raised to one millisecond.
    #[must_use]
    pub fn new(burn_tick: Duration, regen_tick: Duration, min_slow_factor: f32) -> Self {
        let floor = Duration::from_millis(1);
        Self {
            burn_tick: burn_tick.max(floor),
            regen_tick: regen_tick.max(floor),
            min_slow_factor: min_slow_factor.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Derives the configuration from the combat balance table.
    #[must_use]
    pub fn from_table(table: &CombatTable) -> Self {
        Self::new(table.burn_tick(), table.regen_tick(), table.min_slow_factor)
    }

    /// Lowest speed factor slows can produce.
    #[must_use]
    pub const fn min_slow_factor(&self) -> f32 {
        self.min_slow_factor
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self::from_table(&CombatTable::default())
    }
}

/// Instantaneous results of ticking one enemy's effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusTick {
    /// Burn damage due this tick, not yet applied to the enemy.
    pub burn_damage: u32,
    /// Health restored by regeneration, already applied.
    pub healed: u32,
    /// Effect kinds that ended during the tick.
    pub expired: Vec<StatusKind>,
}

/// Status-effect engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatusEngine {
    config: StatusConfig,
}

impl StatusEngine {
    /// Creates an engine with the provided configuration.
    #[must_use]
    pub const fn new(config: StatusConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// Attaches or triggers `request` on `enemy`.
    ///
    /// Knockback and pull are resolved immediately against `path` and are
    /// never stored. Requests with a zero duration or zero magnitude are
    /// ignored.
    pub fn apply(&self, enemy: &mut Enemy, request: &StatusRequest, path: &Path, now: Duration) {
        match *request {
            StatusRequest::Burn {
                source,
                damage,
                duration,
                max_stacks,
            } => {
                if damage == 0 || duration.is_zero() {
                    return;
                }
                let expires_at = now + duration;
                let burns = &mut enemy.status.burns;
                match burns.iter_mut().find(|burn| burn.source == source) {
                    Some(burn) => {
                        burn.expires_at = burn.expires_at.max(expires_at);
                        if max_stacks > 1 {
                            if burn.stacks < max_stacks {
                                burn.damage = burn.damage.saturating_add(damage);
                                burn.stacks += 1;
                            }
                        } else {
                            burn.damage = burn.damage.max(damage);
                        }
                    }
                    None => burns.push(Burn {
                        source,
                        damage,
                        stacks: 1,
                        expires_at,
                        next_tick_at: now + self.config.burn_tick,
                    }),
                }
            }
            StatusRequest::Slow {
                source,
                percent,
                duration,
            } => {
                let percent = percent.clamp(0.0, 1.0);
                if percent <= 0.0 || duration.is_zero() {
                    return;
                }
                let expires_at = now + duration;
                let slows = &mut enemy.status.slows;
                match slows.iter_mut().find(|slow| slow.source == source) {
                    Some(slow) => {
                        slow.expires_at = slow.expires_at.max(expires_at);
                        slow.percent = slow.percent.max(percent);
                    }
                    None => slows.push(Slow {
                        source,
                        percent,
                        expires_at,
                    }),
                }
            }
            StatusRequest::Freeze { duration } => {
                if duration.is_zero() {
                    return;
                }
                let expires_at = now + duration;
                let freeze = enemy.status.freeze.get_or_insert(Freeze { expires_at });
                freeze.expires_at = freeze.expires_at.max(expires_at);
            }
            StatusRequest::Knockback { distance } => {
                displacement::knock_back(enemy, path, distance);
            }
            StatusRequest::Pull { toward, distance } => {
                displacement::pull(enemy, path, toward, distance);
            }
            StatusRequest::Regeneration { percent, duration } => {
                let percent = percent.clamp(0.0, 1.0);
                if percent <= 0.0 || duration.is_zero() {
                    return;
                }
                let expires_at = now + duration;
                let next_tick_at = now + self.config.regen_tick;
                let regeneration = enemy.status.regeneration.get_or_insert(Regeneration {
                    percent,
                    expires_at,
                    next_tick_at,
                });
                regeneration.percent = regeneration.percent.max(percent);
                regeneration.expires_at = regeneration.expires_at.max(expires_at);
            }
        }
    }

    /// Advances every effect on `enemy` to `now`.
    ///
    /// Burn damage that came due is returned, not applied, so the caller can
    /// attribute any resulting kill. Regeneration is applied directly and
    /// clamped to max health. Effects whose duration elapsed are removed.
    pub fn tick(&self, enemy: &mut Enemy, now: Duration) -> StatusTick {
        let mut result = StatusTick::default();

        for burn in &mut enemy.status.burns {
            while burn.next_tick_at <= now && burn.next_tick_at <= burn.expires_at {
                result.burn_damage = result.burn_damage.saturating_add(burn.damage);
                burn.next_tick_at += self.config.burn_tick;
            }
        }

        let mut heal = 0u32;
        let max_health = enemy.max_health();
        if let Some(regeneration) = enemy.status.regeneration.as_mut() {
            let per_tick = ((max_health as f32 * regeneration.percent).floor() as u32).max(1);
            while regeneration.next_tick_at <= now
                && regeneration.next_tick_at <= regeneration.expires_at
            {
                heal = heal.saturating_add(per_tick);
                regeneration.next_tick_at += self.config.regen_tick;
            }
        }
        if heal > 0 && enemy.is_alive() {
            result.healed = enemy.heal(heal);
        }

        expire(&mut enemy.status, now, &mut result.expired);
        result
    }

    /// Product of active slow factors, clamped to `[min_slow_factor, 1]`.
    #[must_use]
    pub fn slow_factor(&self, status: &StatusEffects, now: Duration) -> f32 {
        let product: f32 = status
            .slows
            .iter()
            .filter(|slow| slow.expires_at > now)
            .map(|slow| 1.0 - slow.percent.clamp(0.0, 1.0))
            .product();
        product.clamp(self.config.min_slow_factor, 1.0)
    }

    /// Multiplier applied to base speed: zero while frozen, the slow factor otherwise.
    #[must_use]
    pub fn speed_multiplier(&self, status: &StatusEffects, now: Duration) -> f32 {
        if status.is_frozen(now) {
            0.0
        } else {
            self.slow_factor(status, now)
        }
    }
}

fn expire(status: &mut StatusEffects, now: Duration, expired: &mut Vec<StatusKind>) {
    let had_burns = !status.burns.is_empty();
    status.burns.retain(|burn| burn.expires_at > now);
    if had_burns && status.burns.is_empty() {
        expired.push(StatusKind::Burn);
    }

    let had_slows = !status.slows.is_empty();
    status.slows.retain(|slow| slow.expires_at > now);
    if had_slows && status.slows.is_empty() {
        expired.push(StatusKind::Slow);
    }

    if status.freeze.is_some_and(|freeze| freeze.expires_at <= now) {
        status.freeze = None;
        expired.push(StatusKind::Freeze);
    }

    if status
        .regeneration
        .is_some_and(|regeneration| regeneration.expires_at <= now)
    {
        status.regeneration = None;
        expired.push(StatusKind::Regeneration);
    }
}
