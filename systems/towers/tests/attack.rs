use std::time::Duration;

use elemental_defence_balance::Balance;
use elemental_defence_core::{
    Aura, CatalystBuff, Color, DebuffTarget, Element, Enemy, EnemyId, EnemyKind, EnemyProfile,
    GridCoord, Path, PathId, ProjectileId, Role, SupportKind, SupportTower, SupportTowerId, Tier,
    Tower, TowerId, Vec2,
};
use elemental_defence_system_towers::{process_attack, AttackContext, SupportCaps};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn enemy_at(id: u32, position: Vec2, aura: Option<Aura>) -> Enemy {
    let path = Path::from_points(PathId::new(0), vec![position], Color::from_rgb(0, 0, 0));
    Enemy::new(
        EnemyId::new(id),
        EnemyKind::Normal,
        &path,
        EnemyProfile {
            max_health: 50,
            speed: 1.0,
            gold: 5,
            lives_cost: 1,
            aura,
        },
    )
}

fn tower(element: Element, tier: Tier, role: Option<Role>) -> Tower {
    let balance = Balance::default();
    Tower::new(
        TowerId::new(1),
        element,
        tier,
        role,
        balance.tower_stats(element, tier),
        GridCoord::new(0, 0),
    )
}

fn context<'a>(now: Duration, enemies: &'a [Enemy], supports: &'a [SupportTower]) -> AttackContext<'a> {
    AttackContext {
        now,
        game_speed: 1.0,
        enemies,
        supports,
        caps: SupportCaps::default(),
        debuff_min_factor: 0.3,
    }
}

#[test]
fn tower_fires_at_the_nearest_enemy_and_respects_its_cooldown() {
    let mut tower = tower(Element::Fire, Tier::One, None);
    let enemies = [
        enemy_at(1, Vec2::new(100.0, 20.0), None),
        enemy_at(2, Vec2::new(60.0, 20.0), None),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let first = process_attack(&mut tower, &context(Duration::ZERO, &enemies, &[]), &mut rng);
    let shot = first.shot.expect("ready tower fires");
    assert_eq!(shot.target, EnemyId::new(2));
    assert_eq!(shot.damage, tower.stats.damage);
    assert_eq!(tower.last_fired, Some(Duration::ZERO));

    let early = tower.stats.attack_interval / 2;
    let second = process_attack(&mut tower, &context(early, &enemies, &[]), &mut rng);
    assert!(second.shot.is_none());

    let ready = tower.stats.attack_interval;
    let third = process_attack(&mut tower, &context(ready, &enemies, &[]), &mut rng);
    assert!(third.shot.is_some());
}

#[test]
fn equidistant_targets_resolve_to_the_first_enumerated() {
    let mut tower = tower(Element::Water, Tier::One, None);
    let enemies = [
        enemy_at(7, Vec2::new(60.0, 20.0), None),
        enemy_at(3, Vec2::new(-20.0, 20.0), None),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let outcome = process_attack(&mut tower, &context(Duration::ZERO, &enemies, &[]), &mut rng);
    assert_eq!(outcome.shot.map(|shot| shot.target), Some(EnemyId::new(7)));
}

#[test]
fn tower_without_target_still_reports_debuff() {
    let mut tower = tower(Element::Fire, Tier::One, None);
    let jammer = enemy_at(
        1,
        Vec2::new(20.0, 400.0),
        Some(Aura::Debuff {
            radius: 500.0,
            target: DebuffTarget::AttackSpeed,
            factor: 0.6,
        }),
    );
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let outcome = process_attack(&mut tower, &context(Duration::ZERO, &[jammer], &[]), &mut rng);
    assert!(outcome.shot.is_none());
    assert!(tower.debuffed);
    assert_eq!(tower.last_fired, None);
}

#[test]
fn damage_debuff_support_and_catalyst_combine_then_floor() {
    let mut tower = tower(Element::Fire, Tier::One, None);
    tower.catalyst = Some(CatalystBuff {
        damage_bonus: 0.25,
        expires_at: Duration::from_secs(5),
    });
    let suppressor = enemy_at(
        1,
        Vec2::new(60.0, 20.0),
        Some(Aura::Debuff {
            radius: 100.0,
            target: DebuffTarget::Damage,
            factor: 0.7,
        }),
    );
    let supports = [SupportTower::new(
        SupportTowerId::new(1),
        SupportKind::Damage,
        Tier::One,
        GridCoord::new(1, 0),
        100.0,
        0.5,
    )];
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let outcome = process_attack(
        &mut tower,
        &context(Duration::ZERO, &[suppressor], &supports),
        &mut rng,
    );
    let expected = (tower.stats.damage as f32 * 0.7 * 1.5 * 1.25).floor() as u32;
    assert_eq!(outcome.shot.map(|shot| shot.damage), Some(expected));
}

#[test]
fn expired_catalyst_is_cleared() {
    let mut tower = tower(Element::Fire, Tier::One, None);
    tower.catalyst = Some(CatalystBuff {
        damage_bonus: 0.25,
        expires_at: Duration::from_secs(1),
    });
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let _ = process_attack(&mut tower, &context(Duration::from_secs(2), &[], &[]), &mut rng);
    assert!(tower.catalyst.is_none());
}

#[test]
fn game_speed_shortens_the_cooldown() {
    let mut tower = tower(Element::Fire, Tier::One, None);
    let enemies = [enemy_at(1, Vec2::new(60.0, 20.0), None)];
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let _ = process_attack(&mut tower, &context(Duration::ZERO, &enemies, &[]), &mut rng);

    let mut fast = context(tower.stats.attack_interval / 2, &enemies, &[]);
    fast.game_speed = 2.0;
    assert!(process_attack(&mut tower, &fast, &mut rng).shot.is_some());
}

#[test]
fn radiant_crits_double_damage() {
    let mut tower = tower(Element::Light, Tier::Four, Some(Role::Radiant));
    let enemies = [enemy_at(1, Vec2::new(60.0, 20.0), None)];
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut crits = 0;

    for step in 0..200u64 {
        tower.last_fired = None;
        let now = Duration::from_millis(step);
        let shot = process_attack(&mut tower, &context(now, &enemies, &[]), &mut rng)
            .shot
            .expect("target in range");
        if shot.crit {
            crits += 1;
            assert_eq!(shot.damage, tower.stats.damage * 2);
        } else {
            assert_eq!(shot.damage, tower.stats.damage);
        }
    }
    assert!(crits > 20 && crits < 100, "crit count {crits}");
}

#[test]
fn shot_becomes_a_projectile_carrying_the_tower_payload() {
    let mut tower = tower(Element::Void, Tier::Four, Some(Role::Rift));
    let enemies = [enemy_at(1, Vec2::new(60.0, 20.0), None)];
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let shot = process_attack(&mut tower, &context(Duration::ZERO, &enemies, &[]), &mut rng)
        .shot
        .expect("fires");

    let projectile = shot.into_projectile(ProjectileId::new(5), &tower);
    assert_eq!(projectile.source, tower.id);
    assert_eq!(projectile.position, tower.position);
    assert_eq!(projectile.special, tower.special());
    assert_eq!(projectile.speed, tower.stats.projectile_speed);
}
