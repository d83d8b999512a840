//! Instantaneous positional effects constrained to the enemy's path segment.

use elemental_defence_core::{Enemy, Path, Vec2};

/// Pushes `enemy` back toward the last waypoint it reached, never past it.
pub(crate) fn knock_back(enemy: &mut Enemy, path: &Path, distance: f32) {
    if distance <= 0.0 {
        return;
    }
    let Some(anchor) = path.waypoint(enemy.path_index) else {
        return;
    };
    enemy.position = step_toward(enemy.position, anchor, distance);
}

/// Draws `enemy` toward the projection of `toward` onto its current segment.
pub(crate) fn pull(enemy: &mut Enemy, path: &Path, toward: Vec2, distance: f32) {
    if distance <= 0.0 {
        return;
    }
    let Some(start) = path.waypoint(enemy.path_index) else {
        return;
    };
    let end = path.waypoint(enemy.path_index + 1).unwrap_or(start);
    let target = project_onto_segment(toward, start, end);
    enemy.position = step_toward(enemy.position, target, distance);
}

fn step_toward(from: Vec2, to: Vec2, distance: f32) -> Vec2 {
    let offset = to - from;
    let length = offset.length();
    if length <= distance || length <= f32::EPSILON {
        return to;
    }
    from + offset / length * distance
}

fn project_onto_segment(point: Vec2, start: Vec2, end: Vec2) -> Vec2 {
    let segment = end - start;
    let length_sq = segment.length_squared();
    if length_sq <= f32::EPSILON {
        return start;
    }
    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    start + segment * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_clamps_to_segment_endpoints() {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(10.0, 0.0);
        assert_eq!(project_onto_segment(Vec2::new(-5.0, 3.0), start, end), start);
        assert_eq!(project_onto_segment(Vec2::new(15.0, -3.0), start, end), end);
        assert_eq!(
            project_onto_segment(Vec2::new(4.0, 9.0), start, end),
            Vec2::new(4.0, 0.0)
        );
    }

    #[test]
    fn step_toward_never_overshoots() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(3.0, 4.0);
        assert_eq!(step_toward(from, to, 10.0), to);
        assert_eq!(step_toward(from, to, 2.5), Vec2::new(1.5, 2.0));
    }
}
