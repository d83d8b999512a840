//! Support tower bonuses, summed per kind and capped.

use elemental_defence_balance::SupportTable;
use elemental_defence_core::{SupportKind, SupportTower, Vec2};

/// Upper bounds on the summed contribution of each support kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SupportCaps {
    /// Cap on the damage bonus.
    pub damage: f32,
    /// Cap on the attack-speed bonus.
    pub attack_speed: f32,
    /// Cap on the enemy vulnerability bonus.
    pub armor_shred: f32,
    /// Cap on the range bonus.
    pub range: f32,
}

impl SupportCaps {
    /// Reads the caps from the support balance table.
    #[must_use]
    pub fn from_table(table: &SupportTable) -> Self {
        Self {
            damage: table.damage.cap,
            attack_speed: table.attack_speed.cap,
            armor_shred: table.armor_shred.cap,
            range: table.range.cap,
        }
    }

    fn cap(&self, kind: SupportKind) -> f32 {
        match kind {
            SupportKind::Damage => self.damage,
            SupportKind::AttackSpeed => self.attack_speed,
            SupportKind::ArmorShred => self.armor_shred,
            SupportKind::Range => self.range,
        }
    }
}

impl Default for SupportCaps {
    fn default() -> Self {
        Self::from_table(&SupportTable::default())
    }
}

/// Fractional bonuses an attack tower receives from nearby support towers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SupportBuffs {
    /// Added to the damage multiplier.
    pub damage: f32,
    /// Added to the attack-speed multiplier.
    pub attack_speed: f32,
    /// Added to the range multiplier.
    pub range: f32,
}

/// Sums the tower-facing support bonuses covering `position`.
#[must_use]
pub fn support_buffs(position: Vec2, supports: &[SupportTower], caps: &SupportCaps) -> SupportBuffs {
    SupportBuffs {
        damage: summed(position, supports, SupportKind::Damage, caps),
        attack_speed: summed(position, supports, SupportKind::AttackSpeed, caps),
        range: summed(position, supports, SupportKind::Range, caps),
    }
}

/// Damage multiplier an enemy at `position` suffers from armor shred.
#[must_use]
pub fn vulnerability(position: Vec2, supports: &[SupportTower], caps: &SupportCaps) -> f32 {
    1.0 + summed(position, supports, SupportKind::ArmorShred, caps)
}

fn summed(position: Vec2, supports: &[SupportTower], kind: SupportKind, caps: &SupportCaps) -> f32 {
    let total: f32 = supports
        .iter()
        .filter(|support| support.kind == kind)
        .filter(|support| support.position.distance(position) <= support.radius)
        .map(|support| support.magnitude.max(0.0))
        .sum();
    total.min(caps.cap(kind).max(0.0))
}
