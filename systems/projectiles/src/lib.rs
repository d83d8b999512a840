#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Projectile flight and collision.
//!
//! Projectiles home on a single enemy. A projectile whose target died is
//! redirected to the nearest live enemy, or dropped when none remain.

use std::collections::BTreeMap;

use elemental_defence_core::{Enemy, EnemyId, Hit, Projectile, Vec2};

/// Projectiles still in flight and the hits registered this tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectilePass {
    /// Projectiles that neither hit nor lost every possible target.
    pub remaining: Vec<Projectile>,
    /// Impacts in projectile order.
    pub hits: Vec<Hit>,
}

/// Advances every projectile by one tick.
///
/// A projectile hits when its target lies within `collision_radius` plus
/// the distance it would travel this tick, which keeps fast projectiles
/// from tunnelling past their target. Otherwise it moves straight toward
/// the target without passing it.
#[must_use]
pub fn advance_projectiles(
    projectiles: Vec<Projectile>,
    enemies: &[Enemy],
    collision_radius: f32,
    game_speed: f32,
) -> ProjectilePass {
    let live: BTreeMap<EnemyId, &Enemy> = enemies
        .iter()
        .filter(|enemy| enemy.is_alive())
        .map(|enemy| (enemy.id, enemy))
        .collect();

    let mut pass = ProjectilePass::default();
    for mut projectile in projectiles {
        let target = match live.get(&projectile.target) {
            Some(enemy) => *enemy,
            None => match nearest(projectile.position, enemies) {
                Some(enemy) => {
                    projectile.target = enemy.id;
                    enemy
                }
                None => continue,
            },
        };

        let step = projectile.speed * game_speed.max(0.0);
        let offset = target.position - projectile.position;
        let distance = offset.length();
        if distance <= collision_radius + step {
            pass.hits
                .push(Hit::from_projectile(&projectile, target.id, target.position));
            continue;
        }

        projectile.position += offset / distance * step.min(distance);
        pass.remaining.push(projectile);
    }
    pass
}

fn nearest(position: Vec2, enemies: &[Enemy]) -> Option<&Enemy> {
    let mut best: Option<(&Enemy, f32)> = None;
    for enemy in enemies.iter().filter(|enemy| enemy.is_alive()) {
        let distance = enemy.position.distance(position);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((enemy, distance));
        }
    }
    best.map(|(enemy, _)| enemy)
}
