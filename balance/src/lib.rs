#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Static balance tables consumed by the Elemental Defence combat systems.
//!
//! Every tunable lives here rather than in the systems themselves. The
//! [`Default`] tables are the shipped game values; a TOML document loaded with
//! [`Balance::from_toml_str`] may override any subset of them.

use std::time::Duration;

use elemental_defence_core::{
    Aura, DebuffTarget, Element, EnemyKind, SupportKind, Tier, TowerStats,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod tables;

pub use tables::{
    AbilityTable, CombatTable, EnemyStats, EnemyTable, SupportStats, SupportTable, TierStats,
    TowerTable, WaveTable,
};

/// Reasons a balance document may be rejected.
#[derive(Debug, Error)]
pub enum BalanceError {
    /// The document is not valid TOML or does not match the table layout.
    #[error("could not parse balance document: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is outside the range the simulation can handle.
    #[error("balance value `{field}` is invalid: {reason}")]
    Invalid {
        /// Dotted path of the offending value.
        field: String,
        /// Human readable constraint that was violated.
        reason: &'static str,
    },
}

/// Complete set of balance tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    /// Per enemy type statistics.
    pub enemies: EnemyTable,
    /// Per element and tier tower statistics.
    pub towers: TowerTable,
    /// Per tier ability parameters.
    pub abilities: AbilityTable,
    /// Support tower parameters.
    pub support: SupportTable,
    /// Wave size and health growth.
    pub waves: WaveTable,
    /// Engine-wide combat constants.
    pub combat: CombatTable,
}

impl Balance {
    /// Parses a TOML document layered over the default tables and validates it.
    pub fn from_toml_str(source: &str) -> Result<Self, BalanceError> {
        let balance: Balance = toml::from_str(source)?;
        balance.validate()?;
        Ok(balance)
    }

    /// Checks every value against the ranges the simulation relies on.
    pub fn validate(&self) -> Result<(), BalanceError> {
        for kind in EnemyKind::ALL {
            self.enemies.get(kind).validate(kind)?;
        }
        for element in Element::ALL {
            for (index, stats) in self.towers.get(element).iter().enumerate() {
                stats.validate(element, index)?;
            }
        }
        self.abilities.validate()?;
        self.support.validate()?;
        self.waves.validate()?;
        self.combat.validate()
    }

    /// Combat statistics of a tower of `element` at `tier`.
    #[must_use]
    pub fn tower_stats(&self, element: Element, tier: Tier) -> TowerStats {
        self.towers.get(element)[tier.index()].to_tower_stats()
    }

    /// Aura projected by enemies of `kind`, if any.
    #[must_use]
    pub fn aura_for(&self, kind: EnemyKind) -> Option<Aura> {
        let stats = self.enemies.get(kind);
        if stats.aura_radius <= 0.0 {
            return None;
        }
        match kind {
            EnemyKind::Healer => Some(Aura::Heal {
                radius: stats.aura_radius,
                percent: stats.aura_strength,
                cooldown: Duration::from_millis(stats.aura_cooldown_ms),
            }),
            EnemyKind::Jammer => Some(Aura::Debuff {
                radius: stats.aura_radius,
                target: DebuffTarget::AttackSpeed,
                factor: stats.aura_strength,
            }),
            EnemyKind::Suppressor => Some(Aura::Debuff {
                radius: stats.aura_radius,
                target: DebuffTarget::Damage,
                factor: stats.aura_strength,
            }),
            _ => None,
        }
    }

    /// Radius and magnitude of a support tower of `kind` at `tier`.
    #[must_use]
    pub fn support_stats(&self, kind: SupportKind, tier: Tier) -> (f32, f32) {
        let stats = self.support.get(kind);
        let index = tier.index().min(stats.radius.len() - 1);
        (stats.radius[index], stats.magnitude[index])
    }
}

pub(crate) fn invalid(field: impl Into<String>, reason: &'static str) -> BalanceError {
    BalanceError::Invalid {
        field: field.into(),
        reason,
    }
}

pub(crate) fn check_fraction(field: &str, value: f32) -> Result<(), BalanceError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, "must lie within [0, 1]"))
    }
}

pub(crate) fn check_non_negative(field: &str, value: f32) -> Result<(), BalanceError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite and not negative"))
    }
}

pub(crate) fn check_positive(field: &str, value: f32) -> Result<(), BalanceError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be positive"))
    }
}
