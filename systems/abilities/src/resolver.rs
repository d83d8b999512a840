//! Per-hit dispatch and batch resolution.

use std::{collections::BTreeMap, time::Duration};

use elemental_defence_balance::AbilityTable;
use elemental_defence_core::{
    CatalystBuff, ChainSegment, Element, Enemy, EnemyId, EnemyKind, Hit, PermanentBuffs,
    SoundEvent, SpecialAbility, StatusApplication, StatusRequest, Tier, VisualEffect, VisualKind,
};
use rand::Rng;
use tracing::trace;

use crate::{
    add_to,
    chain::{traverse_chain, ChainParams},
    scale_duration, Ability, Resolution, TowerBuffRequest,
};

/// Maps hits to their outcomes using the per-tier ability table.
#[derive(Clone, Debug, Default)]
pub struct AbilityResolver {
    table: AbilityTable,
}

impl AbilityResolver {
    /// Creates a resolver reading from `table`.
    #[must_use]
    pub const fn new(table: AbilityTable) -> Self {
        Self { table }
    }

    /// Ability table in use.
    #[must_use]
    pub const fn table(&self) -> &AbilityTable {
        &self.table
    }

    /// Resolves every hit of a tick against the current enemy set.
    ///
    /// Hits on enemies that are missing or already dead are skipped. Damage
    /// from several hits on one enemy accumulates; chain-lightning damage is
    /// merged after every hit has been resolved.
    pub fn resolve_all_hits<R: Rng + ?Sized>(
        &self,
        hits: &[Hit],
        enemies: &[Enemy],
        buffs: &PermanentBuffs,
        now: Duration,
        rng: &mut R,
    ) -> Resolution {
        let mut resolution = Resolution::default();
        if hits.is_empty() {
            return resolution;
        }

        let live: BTreeMap<EnemyId, &Enemy> = enemies
            .iter()
            .filter(|enemy| enemy.is_alive())
            .map(|enemy| (enemy.id, enemy))
            .collect();
        let mut chain_damage = BTreeMap::new();

        for hit in hits {
            let Some(target) = live.get(&hit.target).copied() else {
                trace!(enemy = hit.target.get(), "hit on missing enemy skipped");
                continue;
            };
            let scope = HitScope {
                hit,
                target,
                enemies,
                buffs: *buffs,
                now,
                index: hit.tier.index(),
            };
            self.resolve_hit(&scope, &mut resolution, &mut chain_damage, rng);
        }

        for (enemy, amount) in chain_damage {
            resolution.add_damage(enemy, amount);
        }
        resolution
    }

    fn resolve_hit<R: Rng + ?Sized>(
        &self,
        scope: &HitScope<'_>,
        out: &mut Resolution,
        chain_damage: &mut BTreeMap<EnemyId, u32>,
        rng: &mut R,
    ) {
        let hit = scope.hit;
        let ability = Ability::select(hit.element, hit.tier, hit.special);
        let effect = match ability {
            Ability::Base(Element::Fire) => self.fire(scope, out, FireMode::default()),
            Ability::Special(SpecialAbility::Inferno { max_stacks }) => self.fire(
                scope,
                out,
                FireMode {
                    max_stacks,
                    ..FireMode::default()
                },
            ),
            Ability::Special(SpecialAbility::Wildfire {
                radius,
                spread_fraction,
            }) => self.fire(
                scope,
                out,
                FireMode {
                    spread: Some((radius, spread_fraction)),
                    ..FireMode::default()
                },
            ),
            Ability::Special(SpecialAbility::Flashpoint { fast_bonus }) => self.fire(
                scope,
                out,
                FireMode {
                    fast_bonus,
                    ..FireMode::default()
                },
            ),
            Ability::Base(Element::Water) => self.water(scope, out, WaterMode::default(), rng),
            Ability::Special(SpecialAbility::Glacier {
                freeze_chance,
                freeze_duration,
            }) => self.water(
                scope,
                out,
                WaterMode {
                    freeze: Some((freeze_chance, freeze_duration)),
                    ..WaterMode::default()
                },
                rng,
            ),
            Ability::Special(SpecialAbility::Deluge { radius }) => self.water(
                scope,
                out,
                WaterMode {
                    area: Some(radius),
                    ..WaterMode::default()
                },
                rng,
            ),
            Ability::Special(SpecialAbility::Riptide { knockback }) => self.water(
                scope,
                out,
                WaterMode {
                    knockback,
                    ..WaterMode::default()
                },
                rng,
            ),
            Ability::Base(Element::Electric) => {
                self.electric(scope, out, chain_damage, ElectricMode::default())
            }
            Ability::Special(SpecialAbility::Storm {
                extra_chains,
                range_bonus,
            }) => self.electric(
                scope,
                out,
                chain_damage,
                ElectricMode {
                    extra_chains: i64::from(extra_chains),
                    range_bonus,
                    ..ElectricMode::default()
                },
            ),
            Ability::Special(SpecialAbility::Thunderlock { stun }) => self.electric(
                scope,
                out,
                chain_damage,
                ElectricMode {
                    stun: Some(stun),
                    ..ElectricMode::default()
                },
            ),
            Ability::Special(SpecialAbility::Overload {
                burst,
                chain_penalty,
            }) => self.electric(
                scope,
                out,
                chain_damage,
                ElectricMode {
                    burst,
                    extra_chains: -i64::from(chain_penalty),
                    ..ElectricMode::default()
                },
            ),
            Ability::Base(Element::Wind) => self.wind(scope, out, WindMode::default()),
            Ability::Special(SpecialAbility::Cyclone {
                radius,
                splash_fraction,
            }) => self.wind(
                scope,
                out,
                WindMode {
                    splash: Some((radius, splash_fraction)),
                    ..WindMode::default()
                },
            ),
            Ability::Special(SpecialAbility::Vortex { radius, pull }) => self.wind(
                scope,
                out,
                WindMode {
                    pull: Some((radius, pull)),
                    ..WindMode::default()
                },
            ),
            Ability::Special(SpecialAbility::Tempest {
                extra_knockback,
                boss_bonus,
            }) => self.wind(
                scope,
                out,
                WindMode {
                    extra_knockback,
                    boss_bonus,
                    ..WindMode::default()
                },
            ),
            Ability::Base(Element::Void) | Ability::Special(SpecialAbility::Balanced) => {
                self.void(scope, out, VoidMode::default())
            }
            Ability::Special(SpecialAbility::Catalyst {
                radius,
                damage_bonus,
                duration,
            }) => self.void(
                scope,
                out,
                VoidMode {
                    catalyst: Some(CatalystArea {
                        radius,
                        damage_bonus,
                        duration,
                    }),
                    ..VoidMode::default()
                },
            ),
            Ability::Special(SpecialAbility::Rift {
                extra_pierce,
                radius_bonus,
            }) => self.void(
                scope,
                out,
                VoidMode {
                    extra_pierce,
                    radius_bonus,
                    ..VoidMode::default()
                },
            ),
            Ability::Base(Element::Light) | Ability::Special(SpecialAbility::Radiant { .. }) => {
                self.light(scope, out, LightMode::default())
            }
            Ability::Special(SpecialAbility::Judgement {
                knockback,
                slow_percent,
                slow_duration,
            }) => self.light(
                scope,
                out,
                LightMode {
                    judgement: Some((knockback, slow_percent, slow_duration)),
                    ..LightMode::default()
                },
            ),
            Ability::Special(SpecialAbility::Dawnbreaker { fast_bonus }) => self.light(
                scope,
                out,
                LightMode {
                    fast_bonus,
                    ..LightMode::default()
                },
            ),
        };

        let kind = marker(ability, hit, effect.executed);
        out.visuals.push(VisualEffect {
            kind,
            position: hit.impact,
            created_at: scope.now,
        });
        let sound = match kind {
            VisualKind::Crit => "crit",
            VisualKind::Execute => "execute",
            _ => hit_sound(hit.element),
        };
        out.sounds
            .push(SoundEvent::new(sound, vec![effect.damage as f32]));
    }

    fn fire(&self, scope: &HitScope<'_>, out: &mut Resolution, mode: FireMode) -> HitEffect {
        let mut damage = scope.hit.damage;
        if scope.target.kind.is_fast() {
            damage = boosted(damage, mode.fast_bonus);
        }
        out.add_damage(scope.target.id, damage);

        let burn = (damage as f32 * self.table.burn_damage_percent[scope.index]).floor() as u32;
        let duration = scale_duration(
            self.table.burn_duration(scope.index),
            scope.buffs.burn_duration,
        );
        scope.status(
            out,
            scope.target.id,
            StatusRequest::Burn {
                source: scope.hit.source,
                damage: burn,
                duration,
                max_stacks: mode.max_stacks,
            },
        );

        if let Some((radius, fraction)) = mode.spread {
            let spread = (burn as f32 * fraction).floor() as u32;
            if burn > 0 {
                for neighbour in scope.neighbours(radius) {
                    scope.status(
                        out,
                        neighbour.id,
                        StatusRequest::Burn {
                            source: scope.hit.source,
                            damage: spread.max(1),
                            duration,
                            max_stacks: 1,
                        },
                    );
                }
            }
        }
        HitEffect::dealt(damage)
    }

    fn water<R: Rng + ?Sized>(
        &self,
        scope: &HitScope<'_>,
        out: &mut Resolution,
        mode: WaterMode,
        rng: &mut R,
    ) -> HitEffect {
        let damage = scope.hit.damage;
        out.add_damage(scope.target.id, damage);

        let slow = StatusRequest::Slow {
            source: scope.hit.source,
            percent: (self.table.slow_percent[scope.index] * scope.buffs.slow_power).clamp(0.0, 1.0),
            duration: self.table.slow_duration(scope.index),
        };
        scope.status(out, scope.target.id, slow);
        if let Some(radius) = mode.area {
            for neighbour in scope.neighbours(radius) {
                scope.status(out, neighbour.id, slow);
            }
        }

        if let Some((chance, duration)) = mode.freeze {
            if rng.gen::<f32>() < chance {
                scope.status(out, scope.target.id, StatusRequest::Freeze { duration });
            }
        }
        if mode.knockback > 0.0 {
            scope.status(
                out,
                scope.target.id,
                StatusRequest::Knockback {
                    distance: mode.knockback,
                },
            );
        }
        HitEffect::dealt(damage)
    }

    fn electric(
        &self,
        scope: &HitScope<'_>,
        out: &mut Resolution,
        chain_damage: &mut BTreeMap<EnemyId, u32>,
        mode: ElectricMode,
    ) -> HitEffect {
        let damage = (scope.hit.damage as f32 * mode.burst).floor() as u32;
        out.add_damage(scope.target.id, damage);

        let count = i64::from(self.table.chain_count[scope.index])
            + i64::from(scope.buffs.chain_bonus)
            + mode.extra_chains;
        let params = ChainParams {
            count: count.clamp(1, i64::from(u32::MAX)) as u32,
            range: self.table.chain_range[scope.index] * (1.0 + mode.range_bonus),
            decay: self.table.chain_decay[scope.index],
        };
        let chain = traverse_chain(
            scope.hit.origin,
            scope.target,
            scope.hit.damage,
            scope.enemies,
            params,
        );

        for &(enemy, amount) in &chain.hop_damage {
            add_to(chain_damage, enemy, amount);
        }
        out.chain_segments
            .extend(chain.segments.iter().map(|&(from, to)| ChainSegment {
                from,
                to,
                created_at: scope.now,
            }));
        if let Some(stun) = mode.stun {
            for &enemy in &chain.visited {
                scope.status(out, enemy, StatusRequest::Freeze { duration: stun });
            }
        }
        out.sounds.push(SoundEvent::new(
            "chain_lightning",
            vec![chain.visited.len() as f32],
        ));
        HitEffect::dealt(damage)
    }

    fn wind(&self, scope: &HitScope<'_>, out: &mut Resolution, mode: WindMode) -> HitEffect {
        let multiplier = self.table.wind_damage_multiplier[scope.index];
        let mut damage = (scope.hit.damage as f32 * multiplier).floor() as u32;
        if scope.target.kind == EnemyKind::Boss {
            damage = boosted(damage, mode.boss_bonus);
        }
        out.add_damage(scope.target.id, damage);

        if let Some((radius, fraction)) = mode.splash {
            let splash = (damage as f32 * fraction).floor() as u32;
            for neighbour in scope.neighbours(radius) {
                out.add_damage(neighbour.id, splash);
            }
        }

        match mode.pull {
            Some((radius, distance)) => {
                for neighbour in scope.neighbours(radius) {
                    scope.status(
                        out,
                        neighbour.id,
                        StatusRequest::Pull {
                            toward: scope.hit.impact,
                            distance,
                        },
                    );
                }
            }
            None => {
                let distance = self.table.knockback_distance[scope.index] + mode.extra_knockback;
                scope.status(out, scope.target.id, StatusRequest::Knockback { distance });
            }
        }
        HitEffect::dealt(damage)
    }

    fn void(&self, scope: &HitScope<'_>, out: &mut Resolution, mode: VoidMode) -> HitEffect {
        let damage = scope.hit.damage;
        out.add_damage(scope.target.id, damage);

        let mut count = self.table.pierce_count[scope.index].saturating_add(mode.extra_pierce);
        if scope.hit.tier == Tier::Four {
            count = count.max(1);
        }
        let radius = self.table.pierce_radius[scope.index] + mode.radius_bonus;
        let pierce = (damage as f32 * self.table.pierce_decay[scope.index]).floor() as u32;

        let mut candidates: Vec<(&Enemy, f32)> = scope
            .neighbours(radius)
            .map(|enemy| (enemy, enemy.position.distance(scope.hit.impact)))
            .collect();
        candidates.sort_by(|left, right| left.1.total_cmp(&right.1));
        for (enemy, _) in candidates.into_iter().take(count as usize) {
            out.add_damage(enemy.id, pierce);
        }

        if let Some(area) = mode.catalyst {
            out.tower_buffs.push(TowerBuffRequest {
                source: scope.hit.source,
                center: scope.hit.impact,
                radius: area.radius,
                buff: CatalystBuff {
                    damage_bonus: area.damage_bonus,
                    expires_at: scope.now + area.duration,
                },
            });
            out.sounds
                .push(SoundEvent::new("catalyst", vec![area.damage_bonus]));
        }
        HitEffect::dealt(damage)
    }

    fn light(&self, scope: &HitScope<'_>, out: &mut Resolution, mode: LightMode) -> HitEffect {
        let mut damage = scope.hit.damage;
        if scope.target.kind.is_fast() {
            damage = boosted(damage, mode.fast_bonus);
        }
        let executed = scope.target.health_ratio() <= self.table.execute_threshold[scope.index];
        if executed {
            damage = (damage as f32 * self.table.execute_bonus[scope.index]).floor() as u32;
        }
        out.add_damage(scope.target.id, damage);

        if let Some((knockback, percent, duration)) = mode.judgement {
            scope.status(
                out,
                scope.target.id,
                StatusRequest::Knockback {
                    distance: knockback,
                },
            );
            scope.status(
                out,
                scope.target.id,
                StatusRequest::Slow {
                    source: scope.hit.source,
                    percent: (percent * scope.buffs.slow_power).clamp(0.0, 1.0),
                    duration,
                },
            );
        }
        HitEffect { damage, executed }
    }
}

struct HitScope<'a> {
    hit: &'a Hit,
    target: &'a Enemy,
    enemies: &'a [Enemy],
    buffs: PermanentBuffs,
    now: Duration,
    index: usize,
}

impl<'a> HitScope<'a> {
    /// Live enemies other than the target within `radius` of the impact.
    fn neighbours(&self, radius: f32) -> impl Iterator<Item = &'a Enemy> + 'a {
        let target = self.target.id;
        let impact = self.hit.impact;
        self.enemies.iter().filter(move |enemy| {
            enemy.is_alive() && enemy.id != target && enemy.position.distance(impact) <= radius
        })
    }

    fn status(&self, out: &mut Resolution, target: EnemyId, request: StatusRequest) {
        out.statuses.push(StatusApplication { target, request });
    }
}

#[derive(Clone, Copy, Debug)]
struct HitEffect {
    damage: u32,
    executed: bool,
}

impl HitEffect {
    const fn dealt(damage: u32) -> Self {
        Self {
            damage,
            executed: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct FireMode {
    max_stacks: u8,
    spread: Option<(f32, f32)>,
    fast_bonus: f32,
}

impl Default for FireMode {
    fn default() -> Self {
        Self {
            max_stacks: 1,
            spread: None,
            fast_bonus: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct WaterMode {
    freeze: Option<(f32, Duration)>,
    area: Option<f32>,
    knockback: f32,
}

#[derive(Clone, Copy, Debug)]
struct ElectricMode {
    extra_chains: i64,
    range_bonus: f32,
    stun: Option<Duration>,
    burst: f32,
}

impl Default for ElectricMode {
    fn default() -> Self {
        Self {
            extra_chains: 0,
            range_bonus: 0.0,
            stun: None,
            burst: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct WindMode {
    splash: Option<(f32, f32)>,
    pull: Option<(f32, f32)>,
    extra_knockback: f32,
    boss_bonus: f32,
}

#[derive(Clone, Copy, Debug)]
struct CatalystArea {
    radius: f32,
    damage_bonus: f32,
    duration: Duration,
}

#[derive(Clone, Copy, Debug, Default)]
struct VoidMode {
    extra_pierce: u32,
    radius_bonus: f32,
    catalyst: Option<CatalystArea>,
}

#[derive(Clone, Copy, Debug, Default)]
struct LightMode {
    judgement: Option<(f32, f32, Duration)>,
    fast_bonus: f32,
}

fn boosted(damage: u32, bonus: f32) -> u32 {
    if bonus <= 0.0 {
        return damage;
    }
    (damage as f32 * (1.0 + bonus)).floor() as u32
}

/// Exactly one marker per hit; tier-4 hits never use the generic marker.
fn marker(ability: Ability, hit: &Hit, executed: bool) -> VisualKind {
    match ability {
        Ability::Special(SpecialAbility::Radiant { .. }) if hit.crit => VisualKind::Crit,
        Ability::Special(special) => VisualKind::Role(special.role()),
        Ability::Base(_) if hit.tier == Tier::Four => VisualKind::Empowered,
        Ability::Base(_) if hit.crit => VisualKind::Crit,
        Ability::Base(_) if executed => VisualKind::Execute,
        Ability::Base(_) => VisualKind::Hit,
    }
}

const fn hit_sound(element: Element) -> &'static str {
    match element {
        Element::Fire => "fire_hit",
        Element::Water => "water_hit",
        Element::Electric => "electric_hit",
        Element::Wind => "wind_hit",
        Element::Void => "void_hit",
        Element::Light => "light_hit",
    }
}
