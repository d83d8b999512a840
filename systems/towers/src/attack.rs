//! Per-tower attack step: cooldown, target choice and shot construction.
//!
//! Each tower folds enemy debuff auras, support bonuses and any catalyst
//! empowerment into one shot, then hands it back as a projectile request.

use std::time::Duration;

use elemental_defence_core::{
    Enemy, EnemyId, Projectile, ProjectileId, SpecialAbility, SupportTower, Tower, Vec2,
};
use rand::Rng;

use crate::{
    debuffs::{calc_debuffs, TowerDebuffs},
    support::{support_buffs, SupportBuffs, SupportCaps},
};

/// Read-only view of the battlefield handed to every tower in the attack pass.
#[derive(Clone, Copy, Debug)]
pub struct AttackContext<'a> {
    /// Current simulation time.
    pub now: Duration,
    /// Global game-speed multiplier.
    pub game_speed: f32,
    /// Enemies after movement and healing.
    pub enemies: &'a [Enemy],
    /// Every placed support tower.
    pub supports: &'a [SupportTower],
    /// Caps on summed support bonuses.
    pub caps: SupportCaps,
    /// Floor applied to enemy debuff factors.
    pub debuff_min_factor: f32,
}

/// Shot fired by a tower, not yet materialised as a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shot {
    /// Enemy the shot homes on.
    pub target: EnemyId,
    /// Damage after debuffs, support bonuses, catalyst and crit.
    pub damage: u32,
    /// Whether the shot rolled a critical strike.
    pub crit: bool,
}

impl Shot {
    /// Builds the projectile carrying this shot from `tower`.
    #[must_use]
    pub fn into_projectile(self, id: ProjectileId, tower: &Tower) -> Projectile {
        Projectile {
            id,
            source: tower.id,
            origin: tower.position,
            position: tower.position,
            target: self.target,
            damage: self.damage,
            element: tower.element,
            tier: tower.tier,
            special: tower.special(),
            speed: tower.stats.projectile_speed,
            color: tower.projectile_color(),
            crit: self.crit,
        }
    }
}

/// Result of one tower's attack step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackOutcome {
    /// Debuff factors imposed on the tower this tick.
    pub debuffs: TowerDebuffs,
    /// Shot fired, if the tower was ready and found a target.
    pub shot: Option<Shot>,
}

/// Runs the attack step of a single tower.
///
/// The debuffed flag and catalyst expiry are refreshed even when the tower
/// does not fire. A shot resets the tower's fire timestamp.
pub fn process_attack<R: Rng + ?Sized>(
    tower: &mut Tower,
    context: &AttackContext<'_>,
    rng: &mut R,
) -> AttackOutcome {
    let debuffs = calc_debuffs(tower.position, context.enemies, context.debuff_min_factor);
    tower.debuffed = debuffs.is_debuffed();
    if tower
        .catalyst
        .is_some_and(|buff| buff.expires_at <= context.now)
    {
        tower.catalyst = None;
    }

    let mut outcome = AttackOutcome {
        debuffs,
        shot: None,
    };
    let buffs = support_buffs(tower.position, context.supports, &context.caps);
    if !is_ready(tower, debuffs, buffs, context) {
        return outcome;
    }

    let range = tower.stats.range * (1.0 + buffs.range);
    let Some(target) = nearest_target(tower.position, range, context.enemies) else {
        return outcome;
    };

    let catalyst = tower.catalyst.map_or(0.0, |buff| buff.damage_bonus);
    let mut damage = tower.stats.damage as f32
        * debuffs.damage
        * (1.0 + buffs.damage)
        * (1.0 + catalyst);
    let crit_multiplier = match tower.special() {
        Some(SpecialAbility::Radiant {
            crit_chance,
            crit_multiplier,
        }) if rng.gen::<f32>() < crit_chance => Some(crit_multiplier),
        _ => None,
    };
    if let Some(multiplier) = crit_multiplier {
        damage *= multiplier;
    }

    tower.last_fired = Some(context.now);
    outcome.shot = Some(Shot {
        target: target.id,
        damage: damage.max(0.0).floor() as u32,
        crit: crit_multiplier.is_some(),
    });
    outcome
}

fn is_ready(
    tower: &Tower,
    debuffs: TowerDebuffs,
    buffs: SupportBuffs,
    context: &AttackContext<'_>,
) -> bool {
    if context.game_speed <= 0.0 {
        return false;
    }
    let Some(last_fired) = tower.last_fired else {
        return true;
    };
    let rate = f64::from(debuffs.attack_speed * (1.0 + buffs.attack_speed) * context.game_speed);
    let interval = tower.stats.attack_interval.as_secs_f64() / rate;
    context.now.saturating_sub(last_fired).as_secs_f64() >= interval
}

/// Nearest live enemy within `range`; ties keep the earliest in `enemies`.
fn nearest_target(origin: Vec2, range: f32, enemies: &[Enemy]) -> Option<&Enemy> {
    let mut best: Option<(&Enemy, f32)> = None;
    for enemy in enemies.iter().filter(|enemy| enemy.is_alive()) {
        let distance = enemy.position.distance(origin);
        if distance > range {
            continue;
        }
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((enemy, distance));
        }
    }
    best.map(|(enemy, _)| enemy)
}
