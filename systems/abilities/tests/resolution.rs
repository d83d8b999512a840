use std::time::Duration;

use elemental_defence_balance::AbilityTable;
use elemental_defence_core::{
    Color, Element, Enemy, EnemyId, EnemyKind, EnemyProfile, Hit, Path, PathId, PermanentBuffs,
    Role, SpecialAbility, StatusRequest, Tier, TowerId, Vec2, VisualKind,
};
use elemental_defence_system_abilities::{AbilityResolver, Resolution};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn enemy(id: u32, kind: EnemyKind, position: Vec2, max_health: u32) -> Enemy {
    let path = Path::from_points(PathId::new(0), vec![position], Color::from_rgb(0, 0, 0));
    Enemy::new(
        EnemyId::new(id),
        kind,
        &path,
        EnemyProfile {
            max_health,
            speed: 1.0,
            gold: 5,
            lives_cost: 1,
            aura: None,
        },
    )
}

fn hit(target: &Enemy, element: Element, tier: Tier, role: Option<Role>, damage: u32) -> Hit {
    Hit {
        target: target.id,
        source: TowerId::new(1),
        damage,
        element,
        tier,
        special: role.map(SpecialAbility::for_role),
        impact: target.position,
        origin: Vec2::ZERO,
        crit: false,
    }
}

fn resolve(hits: &[Hit], enemies: &[Enemy], buffs: PermanentBuffs) -> Resolution {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    AbilityResolver::default().resolve_all_hits(hits, enemies, &buffs, Duration::ZERO, &mut rng)
}

#[test]
fn fire_tier_one_hit_deals_damage_and_applies_scaled_burn() {
    let table = AbilityTable::default();
    let target = enemy(1, EnemyKind::Normal, Vec2::new(50.0, 0.0), 100);
    let buffs = PermanentBuffs {
        burn_duration: 1.5,
        ..PermanentBuffs::default()
    };

    let resolution = resolve(
        &[hit(&target, Element::Fire, Tier::One, None, 10)],
        &[target.clone()],
        buffs,
    );

    assert_eq!(resolution.damage.get(&target.id), Some(&10));
    assert_eq!(resolution.statuses.len(), 1);
    assert_eq!(resolution.statuses[0].target, target.id);
    match resolution.statuses[0].request {
        StatusRequest::Burn {
            damage, duration, ..
        } => {
            assert_eq!(damage, (10.0 * table.burn_damage_percent[0]).floor() as u32);
            assert_eq!(duration, table.burn_duration(0).mul_f32(1.5));
        }
        other => panic!("expected burn, got {other:?}"),
    }
    assert_eq!(resolution.visuals.len(), 1);
    assert_eq!(resolution.visuals[0].kind, VisualKind::Hit);
}

#[test]
fn empty_hit_list_resolves_to_nothing() {
    let enemies = [enemy(1, EnemyKind::Normal, Vec2::ZERO, 10)];
    assert!(resolve(&[], &enemies, PermanentBuffs::default()).is_empty());
}

#[test]
fn hits_on_dead_or_missing_enemies_are_skipped() {
    let mut dead = enemy(1, EnemyKind::Normal, Vec2::ZERO, 10);
    let _ = dead.take_damage(10);
    let ghost = enemy(9, EnemyKind::Normal, Vec2::ZERO, 10);

    let resolution = resolve(
        &[
            hit(&dead, Element::Fire, Tier::One, None, 10),
            hit(&ghost, Element::Water, Tier::Two, None, 10),
        ],
        &[dead.clone()],
        PermanentBuffs::default(),
    );
    assert!(resolution.is_empty());
}

#[test]
fn damage_from_several_hits_accumulates() {
    let target = enemy(1, EnemyKind::Normal, Vec2::ZERO, 100);
    let hits = [
        hit(&target, Element::Water, Tier::One, None, 7),
        hit(&target, Element::Water, Tier::One, None, 8),
    ];
    let resolution = resolve(&hits, &[target.clone()], PermanentBuffs::default());
    assert_eq!(resolution.damage.get(&target.id), Some(&15));
    assert_eq!(resolution.visuals.len(), 2);
}

#[test]
fn chain_lightning_visits_each_enemy_once_within_the_count() {
    let table = AbilityTable::default();
    let enemies: Vec<Enemy> = (0..8)
        .map(|index| {
            enemy(
                index + 1,
                EnemyKind::Normal,
                Vec2::new(100.0 + index as f32 * 30.0, 0.0),
                500,
            )
        })
        .collect();
    let buffs = PermanentBuffs {
        chain_bonus: 1,
        ..PermanentBuffs::default()
    };

    let resolution = resolve(
        &[hit(&enemies[3], Element::Electric, Tier::Two, None, 100)],
        &enemies,
        buffs,
    );

    let limit = (table.chain_count[1] as i32 + buffs.chain_bonus) as usize;
    assert!(resolution.damage.len() <= limit);
    assert_eq!(resolution.chain_segments.len(), resolution.damage.len());
    assert_eq!(resolution.damage.get(&enemies[3].id), Some(&100));
    let hop = (100.0 * table.chain_decay[1]).floor() as u32;
    assert!(resolution.damage.values().filter(|&&amount| amount == hop).count() >= 1);
}

#[test]
fn chain_damage_is_merged_after_direct_hits() {
    let first = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let second = enemy(2, EnemyKind::Normal, Vec2::new(130.0, 0.0), 500);
    let hits = [
        hit(&first, Element::Electric, Tier::One, None, 50),
        hit(&second, Element::Fire, Tier::One, None, 10),
    ];

    let resolution = resolve(&hits, &[first.clone(), second.clone()], PermanentBuffs::default());
    let chained = (50.0 * AbilityTable::default().chain_decay[0]).floor() as u32;
    assert_eq!(resolution.damage.get(&second.id), Some(&(10 + chained)));
}

#[test]
fn balanced_void_tower_still_pierces() {
    let table = AbilityTable::default();
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let near = enemy(2, EnemyKind::Normal, Vec2::new(110.0, 0.0), 500);
    let far = enemy(3, EnemyKind::Normal, Vec2::new(100.0, 500.0), 500);

    let resolution = resolve(
        &[hit(&target, Element::Void, Tier::Four, Some(Role::Balanced), 100)],
        &[target.clone(), near.clone(), far.clone()],
        PermanentBuffs::default(),
    );

    let pierce = (100.0 * table.pierce_decay[3]).floor() as u32;
    assert_eq!(resolution.damage.get(&near.id), Some(&pierce));
    assert!(!resolution.damage.contains_key(&far.id));
    assert_eq!(resolution.visuals[0].kind, VisualKind::Empowered);
}

#[test]
fn pierce_prefers_the_nearest_neighbours() {
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let close = enemy(2, EnemyKind::Normal, Vec2::new(120.0, 0.0), 500);
    let closer = enemy(3, EnemyKind::Normal, Vec2::new(105.0, 0.0), 500);

    let resolution = resolve(
        &[hit(&target, Element::Void, Tier::One, None, 100)],
        &[target.clone(), close.clone(), closer.clone()],
        PermanentBuffs::default(),
    );
    assert!(resolution.damage.contains_key(&closer.id));
    assert!(!resolution.damage.contains_key(&close.id));
}

#[test]
fn light_executes_wounded_targets() {
    let table = AbilityTable::default();
    let mut target = enemy(1, EnemyKind::Normal, Vec2::ZERO, 100);
    let _ = target.take_damage(95);

    let resolution = resolve(
        &[hit(&target, Element::Light, Tier::One, None, 10)],
        &[target.clone()],
        PermanentBuffs::default(),
    );
    let expected = (10.0 * table.execute_bonus[0]).floor() as u32;
    assert_eq!(resolution.damage.get(&target.id), Some(&expected));
    assert_eq!(resolution.visuals[0].kind, VisualKind::Execute);
}

#[test]
fn every_hit_produces_exactly_one_marker() {
    let target = enemy(1, EnemyKind::Fast, Vec2::new(100.0, 0.0), 500);
    let bystander = enemy(2, EnemyKind::Boss, Vec2::new(120.0, 0.0), 500);
    let mut hits = Vec::new();
    for element in Element::ALL {
        for tier in [Tier::One, Tier::Two, Tier::Three, Tier::Four] {
            hits.push(hit(&target, element, tier, None, 40));
        }
        for role in element.roles() {
            hits.push(hit(&target, element, Tier::Four, Some(role), 40));
        }
    }

    let resolution = resolve(
        &hits,
        &[target.clone(), bystander],
        PermanentBuffs::default(),
    );
    assert_eq!(resolution.visuals.len(), hits.len());

    for (hit, visual) in hits.iter().zip(&resolution.visuals) {
        match (hit.tier, hit.special) {
            (Tier::Four, None | Some(SpecialAbility::Balanced)) => {
                assert_eq!(visual.kind, VisualKind::Empowered);
            }
            (Tier::Four, Some(special)) => {
                assert_eq!(visual.kind, VisualKind::Role(special.role()));
            }
            _ => assert_eq!(visual.kind, VisualKind::Hit),
        }
    }
}

#[test]
fn radiant_crit_uses_the_crit_marker() {
    let target = enemy(1, EnemyKind::Normal, Vec2::ZERO, 500);
    let mut crit = hit(&target, Element::Light, Tier::Four, Some(Role::Radiant), 40);
    crit.crit = true;

    let resolution = resolve(&[crit], &[target.clone()], PermanentBuffs::default());
    assert_eq!(resolution.visuals[0].kind, VisualKind::Crit);
    assert_eq!(resolution.damage.get(&target.id), Some(&40));
}

#[test]
fn thunderlock_stuns_every_enemy_in_the_chain() {
    let first = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let second = enemy(2, EnemyKind::Normal, Vec2::new(140.0, 0.0), 500);

    let resolution = resolve(
        &[hit(&first, Element::Electric, Tier::Four, Some(Role::Thunderlock), 60)],
        &[first.clone(), second.clone()],
        PermanentBuffs::default(),
    );
    let frozen: Vec<EnemyId> = resolution
        .statuses
        .iter()
        .filter(|application| matches!(application.request, StatusRequest::Freeze { .. }))
        .map(|application| application.target)
        .collect();
    assert_eq!(frozen, vec![first.id, second.id]);
}

#[test]
fn overload_bursts_the_first_target() {
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let resolution = resolve(
        &[hit(&target, Element::Electric, Tier::Four, Some(Role::Overload), 50)],
        &[target.clone()],
        PermanentBuffs::default(),
    );
    assert_eq!(resolution.damage.get(&target.id), Some(&90));
}

#[test]
fn catalyst_requests_a_tower_empowerment() {
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let resolution = resolve(
        &[hit(&target, Element::Void, Tier::Four, Some(Role::Catalyst), 50)],
        &[target.clone()],
        PermanentBuffs::default(),
    );
    assert_eq!(resolution.tower_buffs.len(), 1);
    let request = resolution.tower_buffs[0];
    assert_eq!(request.center, target.position);
    assert_eq!(request.buff.expires_at, Duration::from_millis(3_000));
}

#[test]
fn vortex_pulls_neighbours_instead_of_knocking_back() {
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let neighbour = enemy(2, EnemyKind::Normal, Vec2::new(150.0, 0.0), 500);
    let resolution = resolve(
        &[hit(&target, Element::Wind, Tier::Four, Some(Role::Vortex), 50)],
        &[target.clone(), neighbour.clone()],
        PermanentBuffs::default(),
    );

    assert_eq!(resolution.statuses.len(), 1);
    assert_eq!(resolution.statuses[0].target, neighbour.id);
    assert!(matches!(
        resolution.statuses[0].request,
        StatusRequest::Pull { .. }
    ));
}

#[test]
fn deluge_slows_every_enemy_around_the_impact() {
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let neighbour = enemy(2, EnemyKind::Normal, Vec2::new(150.0, 0.0), 500);
    let resolution = resolve(
        &[hit(&target, Element::Water, Tier::Four, Some(Role::Deluge), 50)],
        &[target.clone(), neighbour.clone()],
        PermanentBuffs::default(),
    );
    let slowed: Vec<EnemyId> = resolution
        .statuses
        .iter()
        .map(|application| application.target)
        .collect();
    assert_eq!(slowed, vec![target.id, neighbour.id]);
}

#[test]
fn tempest_hits_bosses_harder() {
    let table = AbilityTable::default();
    let boss = enemy(1, EnemyKind::Boss, Vec2::ZERO, 500);
    let resolution = resolve(
        &[hit(&boss, Element::Wind, Tier::Four, Some(Role::Tempest), 100)],
        &[boss.clone()],
        PermanentBuffs::default(),
    );
    let base = (100.0 * table.wind_damage_multiplier[3]).floor() as u32;
    let expected = (base as f32 * 1.5).floor() as u32;
    assert_eq!(resolution.damage.get(&boss.id), Some(&expected));
}

fn burn_of(resolution: &Resolution, target: EnemyId) -> Option<(u32, u8)> {
    resolution
        .statuses
        .iter()
        .filter(|application| application.target == target)
        .find_map(|application| match application.request {
            StatusRequest::Burn {
                damage, max_stacks, ..
            } => Some((damage, max_stacks)),
            _ => None,
        })
}

fn knockback_of(resolution: &Resolution, target: EnemyId) -> Option<f32> {
    resolution
        .statuses
        .iter()
        .filter(|application| application.target == target)
        .find_map(|application| match application.request {
            StatusRequest::Knockback { distance } => Some(distance),
            _ => None,
        })
}

fn slow_of(resolution: &Resolution, target: EnemyId) -> Option<(f32, Duration)> {
    resolution
        .statuses
        .iter()
        .filter(|application| application.target == target)
        .find_map(|application| match application.request {
            StatusRequest::Slow {
                percent, duration, ..
            } => Some((percent, duration)),
            _ => None,
        })
}

#[test]
fn inferno_burn_stacks_where_a_plain_fire_burn_does_not() {
    let table = AbilityTable::default();
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);

    let inferno = resolve(
        &[hit(&target, Element::Fire, Tier::Four, Some(Role::Inferno), 100)],
        &[target.clone()],
        PermanentBuffs::default(),
    );
    let plain = resolve(
        &[hit(&target, Element::Fire, Tier::Four, None, 100)],
        &[target.clone()],
        PermanentBuffs::default(),
    );

    let burn = (100.0 * table.burn_damage_percent[3]).floor() as u32;
    assert_eq!(inferno.damage.get(&target.id), Some(&100));
    assert_eq!(burn_of(&inferno, target.id), Some((burn, 5)));
    assert_eq!(burn_of(&plain, target.id), Some((burn, 1)));
    assert_eq!(inferno.visuals[0].kind, VisualKind::Role(Role::Inferno));
}

#[test]
fn wildfire_spreads_a_weaker_burn_to_neighbours() {
    let table = AbilityTable::default();
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let neighbour = enemy(2, EnemyKind::Normal, Vec2::new(140.0, 0.0), 500);
    let far = enemy(3, EnemyKind::Normal, Vec2::new(300.0, 0.0), 500);

    let resolution = resolve(
        &[hit(&target, Element::Fire, Tier::Four, Some(Role::Wildfire), 100)],
        &[target.clone(), neighbour.clone(), far.clone()],
        PermanentBuffs::default(),
    );

    let burn = (100.0 * table.burn_damage_percent[3]).floor() as u32;
    let spread = (burn as f32 * 0.5).floor() as u32;
    assert_eq!(burn_of(&resolution, target.id), Some((burn, 1)));
    assert_eq!(burn_of(&resolution, neighbour.id), Some((spread, 1)));
    assert_eq!(burn_of(&resolution, far.id), None);
    assert!(!resolution.damage.contains_key(&neighbour.id));
    assert_eq!(resolution.visuals[0].kind, VisualKind::Role(Role::Wildfire));
}

#[test]
fn flashpoint_punishes_fast_enemies_only() {
    let fast = enemy(1, EnemyKind::Fast, Vec2::new(100.0, 0.0), 500);
    let normal = enemy(2, EnemyKind::Normal, Vec2::new(400.0, 0.0), 500);

    let resolution = resolve(
        &[
            hit(&fast, Element::Fire, Tier::Four, Some(Role::Flashpoint), 100),
            hit(&normal, Element::Fire, Tier::Four, Some(Role::Flashpoint), 100),
        ],
        &[fast.clone(), normal.clone()],
        PermanentBuffs::default(),
    );

    assert_eq!(resolution.damage.get(&fast.id), Some(&150));
    assert_eq!(resolution.damage.get(&normal.id), Some(&100));
    assert!(resolution
        .visuals
        .iter()
        .all(|visual| visual.kind == VisualKind::Role(Role::Flashpoint)));
}

#[test]
fn glacier_freezes_on_some_hits_and_always_slows() {
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 100_000);
    let hits: Vec<Hit> = (0..40)
        .map(|_| hit(&target, Element::Water, Tier::Four, Some(Role::Glacier), 10))
        .collect();

    let resolution = resolve(&hits, &[target.clone()], PermanentBuffs::default());

    let freezes: Vec<Duration> = resolution
        .statuses
        .iter()
        .filter_map(|application| match application.request {
            StatusRequest::Freeze { duration } => Some(duration),
            _ => None,
        })
        .collect();
    let slows = resolution
        .statuses
        .iter()
        .filter(|application| matches!(application.request, StatusRequest::Slow { .. }))
        .count();
    assert_eq!(slows, hits.len());
    assert!(!freezes.is_empty() && freezes.len() < hits.len());
    assert!(freezes
        .iter()
        .all(|&duration| duration == Duration::from_millis(1_000)));
    assert!(resolution
        .visuals
        .iter()
        .all(|visual| visual.kind == VisualKind::Role(Role::Glacier)));
}

#[test]
fn riptide_knocks_the_target_back_on_top_of_the_slow() {
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let resolution = resolve(
        &[hit(&target, Element::Water, Tier::Four, Some(Role::Riptide), 40)],
        &[target.clone()],
        PermanentBuffs::default(),
    );

    assert_eq!(knockback_of(&resolution, target.id), Some(30.0));
    assert!(slow_of(&resolution, target.id).is_some());
    assert_eq!(resolution.damage.get(&target.id), Some(&40));
    assert_eq!(resolution.visuals[0].kind, VisualKind::Role(Role::Riptide));
}

#[test]
fn storm_chains_further_than_a_plain_bolt() {
    let table = AbilityTable::default();
    let enemies: Vec<Enemy> = (0..3)
        .map(|index| {
            enemy(
                index + 1,
                EnemyKind::Normal,
                Vec2::new(100.0 + index as f32 * 160.0, 0.0),
                500,
            )
        })
        .collect();

    let plain = resolve(
        &[hit(&enemies[0], Element::Electric, Tier::Four, None, 100)],
        &enemies,
        PermanentBuffs::default(),
    );
    let storm = resolve(
        &[hit(&enemies[0], Element::Electric, Tier::Four, Some(Role::Storm), 100)],
        &enemies,
        PermanentBuffs::default(),
    );

    assert_eq!(plain.damage.len(), 1);
    let decay = table.chain_decay[3];
    let first_hop = 100.0 * decay;
    let second_hop = first_hop * decay;
    assert_eq!(storm.damage.get(&enemies[1].id), Some(&(first_hop.floor() as u32)));
    assert_eq!(storm.damage.get(&enemies[2].id), Some(&(second_hop.floor() as u32)));
    assert_eq!(storm.chain_segments.len(), 3);
    assert_eq!(storm.visuals[0].kind, VisualKind::Role(Role::Storm));
}

#[test]
fn cyclone_splashes_neighbours_and_still_knocks_back() {
    let table = AbilityTable::default();
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let neighbour = enemy(2, EnemyKind::Normal, Vec2::new(140.0, 0.0), 500);
    let far = enemy(3, EnemyKind::Normal, Vec2::new(300.0, 0.0), 500);

    let resolution = resolve(
        &[hit(&target, Element::Wind, Tier::Four, Some(Role::Cyclone), 100)],
        &[target.clone(), neighbour.clone(), far.clone()],
        PermanentBuffs::default(),
    );

    let direct = (100.0 * table.wind_damage_multiplier[3]).floor() as u32;
    let splash = (direct as f32 * 0.5).floor() as u32;
    assert_eq!(resolution.damage.get(&target.id), Some(&direct));
    assert_eq!(resolution.damage.get(&neighbour.id), Some(&splash));
    assert!(!resolution.damage.contains_key(&far.id));
    assert_eq!(
        knockback_of(&resolution, target.id),
        Some(table.knockback_distance[3])
    );
    assert_eq!(resolution.visuals[0].kind, VisualKind::Role(Role::Cyclone));
}

#[test]
fn rift_pierces_wider_and_more_often() {
    let table = AbilityTable::default();
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 100.0), 500);
    let reach = table.pierce_radius[3] + 15.0;
    let ring: Vec<Enemy> = [
        Vec2::new(reach, 0.0),
        Vec2::new(-reach, 0.0),
        Vec2::new(0.0, reach),
        Vec2::new(0.0, -reach),
        Vec2::new(reach * 0.6, reach * 0.8),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, offset)| {
        enemy(index as u32 + 2, EnemyKind::Normal, target.position + offset, 500)
    })
    .collect();
    let mut enemies = vec![target.clone()];
    enemies.extend(ring.iter().cloned());

    let plain = resolve(
        &[hit(&target, Element::Void, Tier::Four, None, 100)],
        &enemies,
        PermanentBuffs::default(),
    );
    let rift = resolve(
        &[hit(&target, Element::Void, Tier::Four, Some(Role::Rift), 100)],
        &enemies,
        PermanentBuffs::default(),
    );

    let pierce = (100.0 * table.pierce_decay[3]).floor() as u32;
    assert_eq!(plain.damage.len(), 1);
    assert_eq!(rift.damage.len(), 1 + ring.len());
    assert!(ring
        .iter()
        .all(|enemy| rift.damage.get(&enemy.id) == Some(&pierce)));
    assert_eq!(rift.visuals[0].kind, VisualKind::Role(Role::Rift));
}

#[test]
fn judgement_knocks_back_and_slows_with_the_permanent_slow_power() {
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let buffs = PermanentBuffs {
        slow_power: 2.0,
        ..PermanentBuffs::default()
    };

    let resolution = resolve(
        &[hit(&target, Element::Light, Tier::Four, Some(Role::Judgement), 50)],
        &[target.clone()],
        buffs,
    );

    assert_eq!(resolution.damage.get(&target.id), Some(&50));
    assert_eq!(knockback_of(&resolution, target.id), Some(20.0));
    let (percent, duration) = slow_of(&resolution, target.id).expect("judgement slows");
    assert!((percent - 0.6).abs() < 1e-6);
    assert_eq!(duration, Duration::from_millis(1_500));
    assert_eq!(resolution.visuals[0].kind, VisualKind::Role(Role::Judgement));
}

#[test]
fn dawnbreaker_bonus_applies_to_fast_enemies_only() {
    let fast = enemy(1, EnemyKind::SplitChild, Vec2::new(100.0, 0.0), 500);
    let boss = enemy(2, EnemyKind::Boss, Vec2::new(400.0, 0.0), 500);

    let resolution = resolve(
        &[
            hit(&fast, Element::Light, Tier::Four, Some(Role::Dawnbreaker), 100),
            hit(&boss, Element::Light, Tier::Four, Some(Role::Dawnbreaker), 100),
        ],
        &[fast.clone(), boss.clone()],
        PermanentBuffs::default(),
    );

    assert_eq!(resolution.damage.get(&fast.id), Some(&160));
    assert_eq!(resolution.damage.get(&boss.id), Some(&100));
    assert!(resolution
        .visuals
        .iter()
        .all(|visual| visual.kind == VisualKind::Role(Role::Dawnbreaker)));
}

#[test]
fn water_slow_scales_with_slow_power_and_caps_at_a_full_stop() {
    let table = AbilityTable::default();
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);

    let boosted = resolve(
        &[hit(&target, Element::Water, Tier::Two, None, 20)],
        &[target.clone()],
        PermanentBuffs {
            slow_power: 1.5,
            ..PermanentBuffs::default()
        },
    );
    let (percent, duration) = slow_of(&boosted, target.id).expect("water slows");
    assert!((percent - table.slow_percent[1] * 1.5).abs() < 1e-6);
    assert_eq!(duration, table.slow_duration(1));
    assert_eq!(boosted.damage.get(&target.id), Some(&20));
    assert_eq!(boosted.visuals[0].kind, VisualKind::Hit);

    let capped = resolve(
        &[hit(&target, Element::Water, Tier::Three, None, 20)],
        &[target.clone()],
        PermanentBuffs {
            slow_power: 5.0,
            ..PermanentBuffs::default()
        },
    );
    let (percent, _) = slow_of(&capped, target.id).expect("water slows");
    assert!((percent - 1.0).abs() < f32::EPSILON);
}

#[test]
fn wind_multiplies_damage_and_requests_a_knockback() {
    let table = AbilityTable::default();
    let target = enemy(1, EnemyKind::Normal, Vec2::new(100.0, 0.0), 500);
    let resolution = resolve(
        &[hit(&target, Element::Wind, Tier::Two, None, 100)],
        &[target.clone()],
        PermanentBuffs::default(),
    );

    let expected = (100.0 * table.wind_damage_multiplier[1]).floor() as u32;
    assert_eq!(resolution.damage.get(&target.id), Some(&expected));
    assert_eq!(
        knockback_of(&resolution, target.id),
        Some(table.knockback_distance[1])
    );
    assert_eq!(resolution.statuses.len(), 1);
    assert_eq!(resolution.visuals[0].kind, VisualKind::Hit);
}
