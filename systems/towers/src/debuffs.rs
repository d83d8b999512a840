//! Enemy auras that weaken nearby towers.

use elemental_defence_core::{Aura, DebuffTarget, Enemy, Vec2};

/// Multipliers imposed on a tower by enemy debuff auras.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerDebuffs {
    /// Attack-speed factor in `[min_factor, 1]`.
    pub attack_speed: f32,
    /// Damage factor in `[min_factor, 1]`.
    pub damage: f32,
}

impl TowerDebuffs {
    /// Factors of an unaffected tower.
    pub const NONE: Self = Self {
        attack_speed: 1.0,
        damage: 1.0,
    };

    /// Reports whether any aura weakened the tower.
    #[must_use]
    pub fn is_debuffed(&self) -> bool {
        self.attack_speed < 1.0 || self.damage < 1.0
    }
}

impl Default for TowerDebuffs {
    fn default() -> Self {
        Self::NONE
    }
}

/// Combines every debuff aura covering `tower_position`.
///
/// Overlapping auras multiply; each factor is floored at `min_factor`.
#[must_use]
pub fn calc_debuffs(tower_position: Vec2, enemies: &[Enemy], min_factor: f32) -> TowerDebuffs {
    let mut debuffs = TowerDebuffs::NONE;
    for enemy in enemies.iter().filter(|enemy| enemy.is_alive()) {
        let Some(Aura::Debuff {
            radius,
            target,
            factor,
        }) = enemy.aura
        else {
            continue;
        };
        if enemy.position.distance(tower_position) > radius {
            continue;
        }
        let factor = factor.clamp(0.0, 1.0);
        match target {
            DebuffTarget::AttackSpeed => debuffs.attack_speed *= factor,
            DebuffTarget::Damage => debuffs.damage *= factor,
        }
    }
    let floor = min_factor.clamp(0.0, 1.0);
    debuffs.attack_speed = debuffs.attack_speed.max(floor);
    debuffs.damage = debuffs.damage.max(floor);
    debuffs
}
