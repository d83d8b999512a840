//! Chain-lightning traversal.

use elemental_defence_core::{Enemy, EnemyId, Vec2};

/// Shape of one chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainParams {
    /// Maximum number of enemies struck, the first target included.
    pub count: u32,
    /// Maximum hop length in pixels.
    pub range: f32,
    /// Damage multiplier applied on every hop.
    pub decay: f32,
}

/// Result of walking one chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChainTraversal {
    /// Enemies struck in order, the first target included.
    pub visited: Vec<EnemyId>,
    /// Damage dealt by each hop after the first target.
    pub hop_damage: Vec<(EnemyId, u32)>,
    /// Bolt endpoints, starting with the tower-to-target bolt.
    pub segments: Vec<(Vec2, Vec2)>,
}

/// Walks a chain starting at `first`, which was struck from `origin`.
///
/// Each hop jumps to the nearest live enemy not yet struck that lies within
/// range of the previous one. Damage decays per hop and the chain stops once
/// it would drop below one point or no enemy is in range. The first target's
/// damage is dealt by the hit itself and is not part of `hop_damage`.
#[must_use]
pub fn traverse_chain(
    origin: Vec2,
    first: &Enemy,
    damage: u32,
    enemies: &[Enemy],
    params: ChainParams,
) -> ChainTraversal {
    let mut traversal = ChainTraversal {
        visited: vec![first.id],
        hop_damage: Vec::new(),
        segments: vec![(origin, first.position)],
    };

    let mut current = first.position;
    let mut hop_damage = damage as f32;
    for _ in 1..params.count.max(1) {
        hop_damage *= params.decay;
        if hop_damage < 1.0 {
            break;
        }
        let Some(next) = nearest_unvisited(current, params.range, enemies, &traversal.visited)
        else {
            break;
        };
        traversal.visited.push(next.id);
        traversal.hop_damage.push((next.id, hop_damage.floor() as u32));
        traversal.segments.push((current, next.position));
        current = next.position;
    }
    traversal
}

fn nearest_unvisited<'a>(
    from: Vec2,
    range: f32,
    enemies: &'a [Enemy],
    visited: &[EnemyId],
) -> Option<&'a Enemy> {
    let mut best: Option<(&Enemy, f32)> = None;
    for enemy in enemies
        .iter()
        .filter(|enemy| enemy.is_alive() && !visited.contains(&enemy.id))
    {
        let distance = enemy.position.distance(from);
        if distance > range {
            continue;
        }
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((enemy, distance));
        }
    }
    best.map(|(enemy, _)| enemy)
}
