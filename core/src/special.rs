//! Tier-4 special-ability payloads baked into a tower when its role is chosen.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Role};

/// Parameterised tier-4 mechanic carried from the tower through its
/// projectiles into every [`Hit`](crate::Hit) it produces.
///
/// Each variant corresponds to exactly one [`Role`]; the constants are fixed
/// at tower creation so later balance changes never alter a placed tower.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SpecialAbility {
    /// Burns from the same tower stack up to `max_stacks` times.
    Inferno {
        /// Maximum number of additive burn stacks per source tower.
        max_stacks: u8,
    },
    /// The target's burn also ignites enemies around it.
    Wildfire {
        /// Spread radius around the impact point in pixels.
        radius: f32,
        /// Fraction of the burn damage applied to neighbours.
        spread_fraction: f32,
    },
    /// Bonus damage against fast enemies.
    Flashpoint {
        /// Additional damage fraction against fast enemies.
        fast_bonus: f32,
    },
    /// Chance to freeze the target in addition to the slow.
    Glacier {
        /// Probability of freezing on hit.
        freeze_chance: f32,
        /// Length of the freeze.
        freeze_duration: Duration,
    },
    /// The slow lands on every enemy around the impact.
    Deluge {
        /// Slow radius around the impact point in pixels.
        radius: f32,
    },
    /// Knocks the target back along its path.
    Riptide {
        /// Knockback distance in pixels.
        knockback: f32,
    },
    /// Longer and wider chains.
    Storm {
        /// Hops added to the chain count.
        extra_chains: u32,
        /// Fractional bonus to chain range.
        range_bonus: f32,
    },
    /// Every enemy touched by the chain is stunned.
    Thunderlock {
        /// Length of the stun.
        stun: Duration,
    },
    /// Heavy first strike with a shorter chain.
    Overload {
        /// Damage multiplier applied to the primary target.
        burst: f32,
        /// Hops removed from the chain count.
        chain_penalty: u32,
    },
    /// Splash damage around the impact.
    Cyclone {
        /// Splash radius in pixels.
        radius: f32,
        /// Fraction of the hit damage dealt as splash.
        splash_fraction: f32,
    },
    /// Pulls nearby enemies toward the impact instead of knocking back.
    Vortex {
        /// Pull radius in pixels.
        radius: f32,
        /// Maximum pull distance in pixels.
        pull: f32,
    },
    /// Stronger knockback and bonus damage against bosses.
    Tempest {
        /// Knockback added to the tier distance.
        extra_knockback: f32,
        /// Additional damage fraction against bosses.
        boss_bonus: f32,
    },
    /// Empowers allied attack towers near the impact.
    Catalyst {
        /// Radius around the impact in which towers are empowered.
        radius: f32,
        /// Damage fraction granted to empowered towers.
        damage_bonus: f32,
        /// Length of the empowerment.
        duration: Duration,
    },
    /// Pierces more enemies over a wider radius.
    Rift {
        /// Targets added to the pierce count.
        extra_pierce: u32,
        /// Radius added to the pierce radius in pixels.
        radius_bonus: f32,
    },
    /// Base void behaviour.
    Balanced,
    /// Critical strikes.
    Radiant {
        /// Probability that a shot is critical.
        crit_chance: f32,
        /// Damage multiplier of a critical shot.
        crit_multiplier: f32,
    },
    /// Knockback and slow on every hit.
    Judgement {
        /// Knockback distance in pixels.
        knockback: f32,
        /// Slow strength.
        slow_percent: f32,
        /// Slow length.
        slow_duration: Duration,
    },
    /// Bonus damage against fast enemies.
    Dawnbreaker {
        /// Additional damage fraction against fast enemies.
        fast_bonus: f32,
    },
}

impl SpecialAbility {
    /// Bakes the fixed parameters for the provided role.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Inferno => SpecialAbility::Inferno { max_stacks: 5 },
            Role::Wildfire => SpecialAbility::Wildfire {
                radius: 60.0,
                spread_fraction: 0.5,
            },
            Role::Flashpoint => SpecialAbility::Flashpoint { fast_bonus: 0.5 },
            Role::Glacier => SpecialAbility::Glacier {
                freeze_chance: 0.25,
                freeze_duration: Duration::from_millis(1_000),
            },
            Role::Deluge => SpecialAbility::Deluge { radius: 70.0 },
            Role::Riptide => SpecialAbility::Riptide { knockback: 30.0 },
            Role::Storm => SpecialAbility::Storm {
                extra_chains: 2,
                range_bonus: 0.3,
            },
            Role::Thunderlock => SpecialAbility::Thunderlock {
                stun: Duration::from_millis(400),
            },
            Role::Overload => SpecialAbility::Overload {
                burst: 1.8,
                chain_penalty: 2,
            },
            Role::Cyclone => SpecialAbility::Cyclone {
                radius: 60.0,
                splash_fraction: 0.5,
            },
            Role::Vortex => SpecialAbility::Vortex {
                radius: 90.0,
                pull: 25.0,
            },
            Role::Tempest => SpecialAbility::Tempest {
                extra_knockback: 20.0,
                boss_bonus: 0.5,
            },
            Role::Catalyst => SpecialAbility::Catalyst {
                radius: 120.0,
                damage_bonus: 0.25,
                duration: Duration::from_millis(3_000),
            },
            Role::Rift => SpecialAbility::Rift {
                extra_pierce: 2,
                radius_bonus: 30.0,
            },
            Role::Balanced => SpecialAbility::Balanced,
            Role::Radiant => SpecialAbility::Radiant {
                crit_chance: 0.25,
                crit_multiplier: 2.0,
            },
            Role::Judgement => SpecialAbility::Judgement {
                knockback: 20.0,
                slow_percent: 0.3,
                slow_duration: Duration::from_millis(1_500),
            },
            Role::Dawnbreaker => SpecialAbility::Dawnbreaker { fast_bonus: 0.6 },
        }
    }

    /// Role the payload was baked from.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            SpecialAbility::Inferno { .. } => Role::Inferno,
            SpecialAbility::Wildfire { .. } => Role::Wildfire,
            SpecialAbility::Flashpoint { .. } => Role::Flashpoint,
            SpecialAbility::Glacier { .. } => Role::Glacier,
            SpecialAbility::Deluge { .. } => Role::Deluge,
            SpecialAbility::Riptide { .. } => Role::Riptide,
            SpecialAbility::Storm { .. } => Role::Storm,
            SpecialAbility::Thunderlock { .. } => Role::Thunderlock,
            SpecialAbility::Overload { .. } => Role::Overload,
            SpecialAbility::Cyclone { .. } => Role::Cyclone,
            SpecialAbility::Vortex { .. } => Role::Vortex,
            SpecialAbility::Tempest { .. } => Role::Tempest,
            SpecialAbility::Catalyst { .. } => Role::Catalyst,
            SpecialAbility::Rift { .. } => Role::Rift,
            SpecialAbility::Balanced => Role::Balanced,
            SpecialAbility::Radiant { .. } => Role::Radiant,
            SpecialAbility::Judgement { .. } => Role::Judgement,
            SpecialAbility::Dawnbreaker { .. } => Role::Dawnbreaker,
        }
    }

    /// Element whose base behaviour the payload modifies.
    #[must_use]
    pub const fn element(&self) -> Element {
        self.role().element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baked_payload_reports_the_role_it_came_from() {
        for element in Element::ALL {
            for role in element.roles() {
                assert_eq!(SpecialAbility::for_role(role).role(), role);
            }
        }
    }
}
