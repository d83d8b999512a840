//! Permanent-buff modifiers owned by the meta-progression collaborator.

use serde::{Deserialize, Serialize};

/// Named multipliers read by the combat core at tick time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermanentBuffs {
    /// Multiplier applied to every burn duration.
    pub burn_duration: f32,
    /// Multiplier applied to every slow percent.
    pub slow_power: f32,
    /// Hops added to every chain-lightning traversal.
    pub chain_bonus: i32,
    /// Multiplier applied to kill rewards.
    pub gold_multiplier: f32,
    /// Discount on tower draws; carried for the economy, unused by combat.
    pub draw_discount: f32,
}

impl Default for PermanentBuffs {
    fn default() -> Self {
        Self {
            burn_duration: 1.0,
            slow_power: 1.0,
            chain_bonus: 0,
            gold_multiplier: 1.0,
            draw_discount: 0.0,
        }
    }
}

/// Source of permanent-buff modifiers, queried once per tick.
pub trait PermanentBuffSource {
    /// Current modifiers.
    fn permanent_buffs(&self) -> PermanentBuffs;
}

impl PermanentBuffSource for PermanentBuffs {
    fn permanent_buffs(&self) -> PermanentBuffs {
        *self
    }
}
