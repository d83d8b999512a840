//! Splitter death behaviour.

use elemental_defence_balance::{CombatTable, EnemyStats};
use elemental_defence_core::{Enemy, EnemyId, EnemyKind, EnemyProfile, Path, Vec2};
use rand::Rng;

/// Children spawned when `parent` dies, or nothing if it cannot split.
///
/// Children keep the parent's path progress, start near its position with a
/// small random jitter and can never split again. Ids are drawn from
/// `next_id` in order.
pub fn split_children<R: Rng + ?Sized>(
    parent: &Enemy,
    path: &Path,
    combat: &CombatTable,
    child: &EnemyStats,
    mut next_id: impl FnMut() -> EnemyId,
    rng: &mut R,
) -> Vec<Enemy> {
    if !parent.splittable {
        return Vec::new();
    }

    let max_health = (parent.max_health() as f32 * combat.split_health_multiplier).floor() as u32;
    let profile = EnemyProfile {
        max_health: max_health.max(1),
        speed: parent.base_speed * combat.split_speed_multiplier,
        gold: child.gold,
        lives_cost: child.lives_cost,
        aura: None,
    };
    let jitter = combat.split_jitter.max(0.0);

    (0..combat.split_count)
        .map(|_| {
            let mut enemy = Enemy::new(next_id(), EnemyKind::SplitChild, path, profile);
            let offset = if jitter > 0.0 && jitter.is_finite() {
                Vec2::new(
                    rng.gen_range(-jitter..=jitter),
                    rng.gen_range(-jitter..=jitter),
                )
            } else {
                Vec2::ZERO
            };
            enemy.position = parent.position + offset;
            enemy.path_index = parent.path_index;
            enemy.splittable = false;
            enemy
        })
        .collect()
}
