use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    time::Duration,
};

use elemental_defence_balance::WaveTable;
use elemental_defence_core::{EnemyKind, PathId};
use elemental_defence_system_enemies::WaveLevel;
use elemental_defence_system_spawning::{Config, SpawnOrder, WavePlan, WaveSpawner};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn plan(count: usize) -> WavePlan {
    WavePlan::from_kinds(WaveLevel::new(1, 1), vec![EnemyKind::Normal; count])
}

#[test]
fn first_enemy_is_released_immediately_then_one_per_interval() {
    let mut spawner = WaveSpawner::new(Config::new(Duration::from_millis(500)));
    spawner.load(plan(4));
    let paths = [PathId::new(0)];
    let mut orders = Vec::new();

    spawner.release(Duration::ZERO, &paths, &mut orders);
    assert_eq!(orders.len(), 1);

    spawner.release(Duration::from_millis(250), &paths, &mut orders);
    assert_eq!(orders.len(), 1, "no spawn before full interval");

    spawner.release(Duration::from_millis(250), &paths, &mut orders);
    assert_eq!(orders.len(), 2);
}

#[test]
fn large_dt_releases_one_enemy_per_elapsed_interval() {
    let mut spawner = WaveSpawner::new(Config::new(Duration::from_millis(500)));
    spawner.load(plan(10));
    let mut orders = Vec::new();

    spawner.release(Duration::from_secs(2), &[PathId::new(0)], &mut orders);
    assert_eq!(orders.len(), 5);
    assert_eq!(spawner.pending(), 5);
}

#[test]
fn paths_are_assigned_round_robin() {
    let mut spawner = WaveSpawner::new(Config::new(Duration::from_millis(100)));
    spawner.load(plan(5));
    let paths = [PathId::new(3), PathId::new(7)];
    let mut orders = Vec::new();

    spawner.release(Duration::from_secs(1), &paths, &mut orders);
    let assigned: Vec<PathId> = orders.iter().map(|order| order.path).collect();
    assert_eq!(
        assigned,
        vec![
            PathId::new(3),
            PathId::new(7),
            PathId::new(3),
            PathId::new(7),
            PathId::new(3)
        ]
    );
    assert!(spawner.is_drained());
}

#[test]
fn spawning_waits_for_paths() {
    let mut spawner = WaveSpawner::new(Config::new(Duration::from_millis(100)));
    spawner.load(plan(2));
    let mut orders = Vec::new();

    spawner.release(Duration::from_millis(100), &[], &mut orders);
    assert!(orders.is_empty());
    spawner.release(Duration::ZERO, &[PathId::new(0)], &mut orders);
    assert_eq!(orders.len(), 2);
}

#[test]
fn wave_plan_size_follows_the_table() {
    let table = WaveTable::default();
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let plan = WavePlan::roll(WaveLevel::new(10, 1), &table, &mut rng);

    assert_eq!(plan.len(), table.enemy_count(10) as usize);
    assert_eq!(plan.kinds().last(), Some(&EnemyKind::Boss));
}

#[test]
fn same_seed_rolls_identical_spawn_sequences() {
    fn fingerprint(seed: u64) -> u64 {
        let table = WaveTable::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut spawner = WaveSpawner::new(Config::from_table(&table));
        spawner.load(WavePlan::roll(WaveLevel::new(9, 2), &table, &mut rng));
        let paths = [PathId::new(0), PathId::new(1)];
        let mut orders: Vec<SpawnOrder> = Vec::new();
        while !spawner.is_drained() {
            spawner.release(Duration::from_millis(16), &paths, &mut orders);
        }

        let mut hasher = DefaultHasher::new();
        for order in &orders {
            order.kind.hash(&mut hasher);
            order.path.hash(&mut hasher);
        }
        hasher.finish()
    }

    assert_eq!(fingerprint(77), fingerprint(77));
}
