//! Waypoint following.

use std::time::Duration;

use elemental_defence_core::{Enemy, Path};
use elemental_defence_system_status_effects::StatusEngine;

/// Result of moving an enemy for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The enemy is still travelling.
    Moving,
    /// The enemy arrived at the final waypoint and costs `lives`.
    ReachedEnd {
        /// Lives the leak costs.
        lives: u32,
    },
}

/// Moves `enemy` along `path` for one tick.
///
/// Speed is recomputed from the enemy's status effects before moving. When
/// the next waypoint lies within one step the enemy snaps onto it and its
/// path index advances, so it never overshoots.
pub fn move_enemy(
    enemy: &mut Enemy,
    path: &Path,
    status: &StatusEngine,
    game_speed: f32,
    now: Duration,
) -> MoveOutcome {
    enemy.speed = enemy.base_speed * status.speed_multiplier(&enemy.status, now);

    let reached_end = MoveOutcome::ReachedEnd {
        lives: enemy.lives_cost,
    };
    if enemy.path_index >= path.last_index() {
        return reached_end;
    }
    let Some(target) = path.waypoint(enemy.path_index + 1) else {
        return reached_end;
    };

    let step = enemy.speed * game_speed.max(0.0);
    if step <= 0.0 {
        return MoveOutcome::Moving;
    }

    let offset = target - enemy.position;
    let distance = offset.length();
    if distance <= step {
        enemy.position = target;
        enemy.path_index += 1;
        if enemy.path_index >= path.last_index() {
            return reached_end;
        }
    } else {
        enemy.position += offset / distance * step;
    }
    MoveOutcome::Moving
}

/// Returns a leaked enemy to the start of its path for looping play.
pub fn restart_path(enemy: &mut Enemy, path: &Path) {
    enemy.path_index = 0;
    enemy.position = path.start();
}
