//! Elements, tiers and tier-4 roles that key ability resolution.

use serde::{Deserialize, Serialize};

/// Elemental affinity of an attack tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// Burns targets over time.
    Fire,
    /// Slows targets.
    Water,
    /// Chains lightning between nearby targets.
    Electric,
    /// Hits harder and knocks targets back along their path.
    Wind,
    /// Pierces through to nearby targets.
    Void,
    /// Executes targets at low health.
    Light,
}

impl Element {
    /// Every element in declaration order.
    pub const ALL: [Element; 6] = [
        Element::Fire,
        Element::Water,
        Element::Electric,
        Element::Wind,
        Element::Void,
        Element::Light,
    ];

    /// The three tier-4 roles available to towers of this element.
    #[must_use]
    pub const fn roles(self) -> [Role; 3] {
        match self {
            Element::Fire => [Role::Inferno, Role::Wildfire, Role::Flashpoint],
            Element::Water => [Role::Glacier, Role::Deluge, Role::Riptide],
            Element::Electric => [Role::Storm, Role::Thunderlock, Role::Overload],
            Element::Wind => [Role::Cyclone, Role::Vortex, Role::Tempest],
            Element::Void => [Role::Catalyst, Role::Rift, Role::Balanced],
            Element::Light => [Role::Radiant, Role::Judgement, Role::Dawnbreaker],
        }
    }
}

/// Upgrade tier of a tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Freshly drawn tower.
    One,
    /// First merge.
    Two,
    /// Second merge.
    Three,
    /// Final tier; the only tier where a role applies.
    Four,
}

impl Tier {
    /// Converts a 1-based level into a tier.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Tier::One),
            2 => Some(Tier::Two),
            3 => Some(Tier::Three),
            4 => Some(Tier::Four),
            _ => None,
        }
    }

    /// 1-based level of the tier.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
            Tier::Four => 4,
        }
    }

    /// Zero-based index into per-tier configuration tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.level() as usize - 1
    }
}

/// Tier-4 specialisation, chosen once when the tower reaches tier 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fire: burns from the same tower stack instead of refreshing.
    Inferno,
    /// Fire: burns spread to enemies around the target.
    Wildfire,
    /// Fire: bonus damage against fast enemies.
    Flashpoint,
    /// Water: chance to freeze the target solid.
    Glacier,
    /// Water: slows every enemy around the impact.
    Deluge,
    /// Water: knocks the target back along its path.
    Riptide,
    /// Electric: longer, wider chains.
    Storm,
    /// Electric: every chained enemy is briefly stunned.
    Thunderlock,
    /// Electric: a heavy first strike with a shorter chain.
    Overload,
    /// Wind: splash damage around the impact.
    Cyclone,
    /// Wind: pulls nearby enemies toward the impact.
    Vortex,
    /// Wind: stronger knockback and bonus damage against bosses.
    Tempest,
    /// Void: empowers allied towers near the impact.
    Catalyst,
    /// Void: pierces more enemies over a wider radius.
    Rift,
    /// Void: keeps the base pierce behaviour.
    Balanced,
    /// Light: critical strikes.
    Radiant,
    /// Light: knocks back and slows the target.
    Judgement,
    /// Light: bonus damage against fast enemies.
    Dawnbreaker,
}

impl Role {
    /// Element the role belongs to.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            Role::Inferno | Role::Wildfire | Role::Flashpoint => Element::Fire,
            Role::Glacier | Role::Deluge | Role::Riptide => Element::Water,
            Role::Storm | Role::Thunderlock | Role::Overload => Element::Electric,
            Role::Cyclone | Role::Vortex | Role::Tempest => Element::Wind,
            Role::Catalyst | Role::Rift | Role::Balanced => Element::Void,
            Role::Radiant | Role::Judgement | Role::Dawnbreaker => Element::Light,
        }
    }
}

/// Buff category provided by a support tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportKind {
    /// Raises damage of attack towers in range.
    Damage,
    /// Raises attack speed of attack towers in range.
    AttackSpeed,
    /// Makes enemies in range take more damage.
    ArmorShred,
    /// Raises range of attack towers in range.
    Range,
}
