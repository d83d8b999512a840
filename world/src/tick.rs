//! Phase sequence of a single combat tick.

use std::{collections::BTreeSet, time::Duration};

use elemental_defence_core::{
    EnemyId, EnemyKind, GoldSource, Hit, KillRecord, LeakRecord, Path, PathId,
    PermanentBuffSource, PermanentBuffs, SoundEvent, StatusKind, StatusRequest, TickDelta,
    TickObserver,
    VisualEffect, VisualKind, WaveSummary,
};
use elemental_defence_system_abilities::Resolution;
use elemental_defence_system_enemies::{
    healer_pass, move_enemy, restart_path, split_children, EnemyFactory, MoveOutcome,
};
use elemental_defence_system_projectiles::advance_projectiles;
use elemental_defence_system_towers::{process_attack, vulnerability, AttackContext};
use tracing::{debug, trace};

use crate::{EngineMode, GameEngine, PathMode};

fn find_path(paths: &[Path], id: PathId) -> Option<&Path> {
    paths.iter().find(|path| path.id() == id)
}

impl GameEngine {
    /// Runs one tick and reports what changed.
    ///
    /// Outside combat nothing advances and the returned delta is empty. In
    /// combat the clock moves forward by one tick interval, the spawner
    /// releases due enemies, and the phases run in order: movement and burns,
    /// healer auras, tower attacks, projectile flight, hit resolution, then
    /// effect expiry and wave bookkeeping. `observer` sees the delta before
    /// it is returned.
    pub fn step(
        &mut self,
        buffs: &dyn PermanentBuffSource,
        observer: &mut dyn TickObserver,
    ) -> TickDelta {
        if self.mode != EngineMode::Combat {
            return TickDelta {
                tick: self.tick,
                ..TickDelta::default()
            };
        }

        self.tick += 1;
        self.now += self.config.tick_interval();
        let buffs = buffs.permanent_buffs();
        let mut delta = TickDelta {
            tick: self.tick,
            ..TickDelta::default()
        };

        self.release_spawns(&mut delta);
        self.advance_enemies(&buffs, &mut delta);
        self.pulse_healers(&mut delta);
        self.fire_towers(&mut delta);
        let hits = self.fly_projectiles();
        let hit_count = hits.len();
        self.resolve_hits(&hits, &buffs, &mut delta);
        self.expire_effects(&delta);
        self.finish_tick(&mut delta);

        trace!(
            tick = self.tick,
            enemies = self.enemies.len(),
            projectiles = self.projectiles.len(),
            hits = hit_count,
            kills = delta.kill_count(),
            leaks = delta.leaks.len(),
            "tick complete"
        );
        observer.on_tick(&delta);
        delta
    }

    fn release_spawns(&mut self, delta: &mut TickDelta) {
        let dt = self
            .config
            .tick_interval()
            .mul_f32(self.config.game_speed());
        let path_ids: Vec<PathId> = self.paths.iter().map(Path::id).collect();
        let mut orders = Vec::new();
        self.spawner.release(dt, &path_ids, &mut orders);

        let factory = EnemyFactory::new(&self.balance);
        for order in orders {
            let Some(path) = find_path(&self.paths, order.path) else {
                continue;
            };
            let id = self.ids.next_enemy();
            let enemy = factory.create(id, order.kind, order.level, path, self.now, &mut self.rng);
            delta.spawned.push(id);
            self.enemies.push(enemy);
        }
    }

    fn advance_enemies(&mut self, buffs: &PermanentBuffs, delta: &mut TickDelta) {
        let game_speed = self.config.game_speed();
        let looping = self.config.path_mode() == PathMode::Looping;
        let mut leaked = BTreeSet::new();
        let mut burned = Vec::new();

        for enemy in &mut self.enemies {
            let Some(path) = find_path(&self.paths, enemy.path) else {
                continue;
            };
            if let MoveOutcome::ReachedEnd { lives } =
                move_enemy(enemy, path, &self.status, game_speed, self.now)
            {
                debug!(
                    enemy = enemy.id.get(),
                    kind = ?enemy.kind,
                    lives,
                    statuses = ?enemy.status.kinds(),
                    "enemy leaked"
                );
                delta.leaks.push(LeakRecord {
                    enemy: enemy.id,
                    kind: enemy.kind,
                    lives,
                });
                delta.lives_lost = delta.lives_lost.saturating_add(lives);
                delta.sounds.push(SoundEvent::new("life_lost", vec![lives as f32]));
                if looping {
                    restart_path(enemy, path);
                } else {
                    let _ = leaked.insert(enemy.id);
                    continue;
                }
            }

            let status = self.status.tick(enemy, self.now);
            if !status.expired.is_empty() {
                trace!(enemy = enemy.id.get(), expired = ?status.expired, "status effects ended");
            }
            if status.burn_damage > 0 && enemy.is_alive() {
                let _ = enemy.take_damage(status.burn_damage);
                if !enemy.is_alive() {
                    burned.push(enemy.id);
                }
            }
        }

        if !leaked.is_empty() {
            self.enemies.retain(|enemy| !leaked.contains(&enemy.id));
        }
        self.lose_lives(delta.lives_lost);
        self.remove_kills(&burned, GoldSource::Burn, buffs, delta);
    }

    fn lose_lives(&mut self, lives: u32) {
        if lives == 0 {
            return;
        }
        self.lives = self.lives.saturating_sub(lives);
        if let Some(wave) = self.wave.as_mut() {
            wave.lives_lost = wave.lives_lost.saturating_add(lives);
        }
    }

    fn pulse_healers(&mut self, delta: &mut TickDelta) {
        let now = self.now;
        for pulse in healer_pass(&self.enemies, now) {
            let mut healed = 0u32;
            for enemy in &mut self.enemies {
                if enemy.id == pulse.healer {
                    enemy.last_aura_at = Some(now);
                } else if let Some((_, amount)) =
                    pulse.heals.iter().find(|(id, _)| *id == enemy.id)
                {
                    healed = healed.saturating_add(enemy.heal(*amount));
                }
            }
            if healed > 0 {
                delta.visual_effects.push(VisualEffect {
                    kind: VisualKind::Heal,
                    position: pulse.position,
                    created_at: now,
                });
                delta.sounds.push(SoundEvent::new("heal", vec![healed as f32]));
            }
        }
    }

    fn fire_towers(&mut self, delta: &mut TickDelta) {
        let context = AttackContext {
            now: self.now,
            game_speed: self.config.game_speed(),
            enemies: &self.enemies,
            supports: &self.towers.supports,
            caps: self.caps,
            debuff_min_factor: self.balance.combat.debuff_min_factor,
        };
        for tower in self.towers.towers.values_mut() {
            let outcome = process_attack(tower, &context, &mut self.rng);
            if let Some(shot) = outcome.shot {
                let id = self.ids.next_projectile();
                self.projectiles.push(shot.into_projectile(id, tower));
                delta.sounds.push(SoundEvent::new(
                    "tower_fire",
                    vec![tower.id.get() as f32],
                ));
            }
        }
    }

    fn fly_projectiles(&mut self) -> Vec<Hit> {
        let in_flight = std::mem::take(&mut self.projectiles);
        let pass = advance_projectiles(
            in_flight,
            &self.enemies,
            self.balance.combat.collision_radius,
            self.config.game_speed(),
        );
        self.projectiles = pass.remaining;
        pass.hits
    }

    fn resolve_hits(&mut self, hits: &[Hit], buffs: &PermanentBuffs, delta: &mut TickDelta) {
        if hits.is_empty() {
            return;
        }
        let Resolution {
            damage,
            statuses,
            visuals,
            chain_segments,
            tower_buffs,
            sounds,
        } = self
            .resolver
            .resolve_all_hits(hits, &self.enemies, buffs, self.now, &mut self.rng);
        delta.visual_effects.extend(visuals);
        delta.chain_segments.extend(chain_segments);
        delta.sounds.extend(sounds);

        for application in &statuses {
            let Some(enemy) = self
                .enemies
                .iter_mut()
                .find(|enemy| enemy.id == application.target && enemy.is_alive())
            else {
                trace!(
                    enemy = application.target.get(),
                    kind = ?application.request.kind(),
                    "status on missing enemy dropped"
                );
                continue;
            };
            let Some(path) = find_path(&self.paths, enemy.path) else {
                continue;
            };
            self.status
                .apply(enemy, &application.request, path, self.now);
            if application.request.kind() == StatusKind::Freeze {
                delta.sounds.push(SoundEvent::new("freeze", Vec::new()));
            }
        }

        for request in &tower_buffs {
            for tower in self.towers.towers.values_mut() {
                if tower.position.distance(request.center) > request.radius {
                    continue;
                }
                let merged = match tower.catalyst {
                    Some(mut current) => {
                        current.damage_bonus = current.damage_bonus.max(request.buff.damage_bonus);
                        current.expires_at = current.expires_at.max(request.buff.expires_at);
                        current
                    }
                    None => request.buff,
                };
                tower.catalyst = Some(merged);
            }
        }

        let combat = &self.balance.combat;
        let mut killed = Vec::new();
        for (id, amount) in damage {
            let Some(enemy) = self
                .enemies
                .iter_mut()
                .find(|enemy| enemy.id == id && enemy.is_alive())
            else {
                continue;
            };
            let multiplier = vulnerability(enemy.position, &self.towers.supports, &self.caps);
            let _ = enemy.take_damage((amount as f32 * multiplier).floor() as u32);
            if !enemy.is_alive() {
                killed.push(id);
                continue;
            }
            if enemy.kind == EnemyKind::Boss
                && !enemy.second_wind_used
                && enemy.health_ratio() < combat.second_wind_threshold
            {
                enemy.second_wind_used = true;
                let request = StatusRequest::Regeneration {
                    percent: combat.second_wind_percent,
                    duration: Duration::from_millis(combat.second_wind_ms),
                };
                if let Some(path) = find_path(&self.paths, enemy.path) {
                    self.status.apply(enemy, &request, path, self.now);
                }
                debug!(enemy = id.get(), "boss second wind");
            }
        }
        self.remove_kills(&killed, GoldSource::Attack, buffs, delta);
    }

    fn remove_kills(
        &mut self,
        killed: &[EnemyId],
        source: GoldSource,
        buffs: &PermanentBuffs,
        delta: &mut TickDelta,
    ) {
        if killed.is_empty() {
            return;
        }
        let multiplier = buffs.gold_multiplier.max(0.0);
        let child_stats = self.balance.enemies.get(EnemyKind::SplitChild);
        let mut children = Vec::new();

        for enemy in self.enemies.iter().filter(|enemy| killed.contains(&enemy.id)) {
            let gold = (enemy.gold as f32 * multiplier).floor() as u32;
            delta.kills.push(KillRecord {
                enemy: enemy.id,
                kind: enemy.kind,
                gold,
                source,
            });
            delta.gold_earned = delta.gold_earned.saturating_add(gold);
            self.gold = self.gold.saturating_add(u64::from(gold));
            delta.visual_effects.push(VisualEffect {
                kind: VisualKind::Death,
                position: enemy.position,
                created_at: self.now,
            });
            if enemy.kind == EnemyKind::Boss {
                debug!(enemy = enemy.id.get(), gold, "boss killed");
                delta.sounds.push(SoundEvent::new("boss_death", Vec::new()));
            } else {
                delta.sounds.push(SoundEvent::new("enemy_death", Vec::new()));
            }

            let Some(path) = find_path(&self.paths, enemy.path) else {
                continue;
            };
            let ids = &mut self.ids;
            let spawned = split_children(
                enemy,
                path,
                &self.balance.combat,
                child_stats,
                || ids.next_enemy(),
                &mut self.rng,
            );
            if !spawned.is_empty() {
                delta.visual_effects.push(VisualEffect {
                    kind: VisualKind::Split,
                    position: enemy.position,
                    created_at: self.now,
                });
                delta
                    .sounds
                    .push(SoundEvent::new("split", vec![spawned.len() as f32]));
                children.extend(spawned);
            }
        }

        self.enemies.retain(|enemy| !killed.contains(&enemy.id));
        self.enemies.extend(children);
    }

    fn expire_effects(&mut self, delta: &TickDelta) {
        let visual_ttl = self
            .config
            .visual_duration()
            .unwrap_or_else(|| Duration::from_millis(self.balance.combat.visual_effect_ms));
        let chain_ttl = Duration::from_millis(self.balance.combat.chain_segment_ms);
        let now = self.now;

        self.visuals.extend(delta.visual_effects.iter().copied());
        self.visuals
            .retain(|effect| now.saturating_sub(effect.created_at) < visual_ttl);
        self.chain_segments
            .extend(delta.chain_segments.iter().copied());
        self.chain_segments
            .retain(|segment| now.saturating_sub(segment.created_at) < chain_ttl);
    }

    fn finish_tick(&mut self, delta: &mut TickDelta) {
        if self.lives == 0 {
            debug!(tick = self.tick, "game over");
            self.mode = EngineMode::GameOver;
            self.spawner.clear();
            self.wave = None;
            return;
        }

        if !self.spawner.is_drained() || !self.enemies.is_empty() {
            return;
        }
        let Some(wave) = self.wave.take() else {
            return;
        };
        let summary = WaveSummary {
            wave: wave.level.wave,
            stage: wave.level.stage,
            perfect: wave.lives_lost == 0,
        };
        debug!(
            wave = summary.wave,
            stage = summary.stage,
            perfect = summary.perfect,
            "wave complete"
        );
        delta.wave_completed = Some(summary);
        delta
            .sounds
            .push(SoundEvent::new("wave_complete", vec![summary.wave as f32]));
        self.projectiles.clear();
        self.mode = EngineMode::Idle;
    }
}
