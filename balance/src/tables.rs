//! Individual balance tables and their shipped defaults.

use std::time::Duration;

use elemental_defence_core::{Element, EnemyKind, SupportKind, TowerStats};
use serde::{Deserialize, Serialize};

use crate::{check_fraction, check_non_negative, check_positive, invalid, BalanceError};

/// Static attributes of one enemy type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    /// Multiplier applied to the wave's base health.
    pub health_multiplier: f32,
    /// Lower bound of the rolled speed in pixels per tick.
    pub speed_min: f32,
    /// Upper bound of the rolled speed in pixels per tick.
    pub speed_max: f32,
    /// Gold awarded on kill.
    pub gold: u32,
    /// Lives lost when the enemy leaks; zero for harmless types.
    pub lives_cost: u32,
    /// Aura radius in pixels; zero when the type has no aura.
    pub aura_radius: f32,
    /// Heal fraction for healers, tower multiplier for debuffers.
    pub aura_strength: f32,
    /// Milliseconds between aura pulses.
    pub aura_cooldown_ms: u64,
}

impl EnemyStats {
    fn plain(health_multiplier: f32, speed: (f32, f32), gold: u32, lives_cost: u32) -> Self {
        Self {
            health_multiplier,
            speed_min: speed.0,
            speed_max: speed.1,
            gold,
            lives_cost,
            aura_radius: 0.0,
            aura_strength: 0.0,
            aura_cooldown_ms: 0,
        }
    }

    fn with_aura(mut self, radius: f32, strength: f32, cooldown_ms: u64) -> Self {
        self.aura_radius = radius;
        self.aura_strength = strength;
        self.aura_cooldown_ms = cooldown_ms;
        self
    }

    pub(crate) fn validate(&self, kind: EnemyKind) -> Result<(), BalanceError> {
        let prefix = format!("enemies.{kind:?}").to_lowercase();
        check_positive(&format!("{prefix}.health_multiplier"), self.health_multiplier)?;
        check_positive(&format!("{prefix}.speed_min"), self.speed_min)?;
        check_positive(&format!("{prefix}.speed_max"), self.speed_max)?;
        if self.speed_max < self.speed_min {
            return Err(invalid(
                format!("{prefix}.speed_max"),
                "must not be below speed_min",
            ));
        }
        check_non_negative(&format!("{prefix}.aura_radius"), self.aura_radius)?;
        check_fraction(&format!("{prefix}.aura_strength"), self.aura_strength)
    }
}

/// Statistics of every enemy type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTable {
    /// Baseline enemy.
    pub normal: EnemyStats,
    /// Quick enemy.
    pub fast: EnemyStats,
    /// Tough enemy.
    pub elite: EnemyStats,
    /// Wave boss; health comes from the boss formula.
    pub boss: EnemyStats,
    /// Attack-speed debuffer.
    pub jammer: EnemyStats,
    /// Damage debuffer.
    pub suppressor: EnemyStats,
    /// Healer.
    pub healer: EnemyStats,
    /// Splitter.
    pub splitter: EnemyStats,
    /// Splitter child; health and speed derive from the parent.
    pub split_child: EnemyStats,
}

impl EnemyTable {
    /// Statistics of `kind`.
    #[must_use]
    pub const fn get(&self, kind: EnemyKind) -> &EnemyStats {
        match kind {
            EnemyKind::Normal => &self.normal,
            EnemyKind::Fast => &self.fast,
            EnemyKind::Elite => &self.elite,
            EnemyKind::Boss => &self.boss,
            EnemyKind::Jammer => &self.jammer,
            EnemyKind::Suppressor => &self.suppressor,
            EnemyKind::Healer => &self.healer,
            EnemyKind::Splitter => &self.splitter,
            EnemyKind::SplitChild => &self.split_child,
        }
    }
}

impl Default for EnemyTable {
    fn default() -> Self {
        Self {
            normal: EnemyStats::plain(1.0, (1.0, 1.2), 5, 1),
            fast: EnemyStats::plain(0.6, (1.8, 2.2), 6, 1),
            elite: EnemyStats::plain(2.5, (0.8, 1.0), 15, 2),
            boss: EnemyStats::plain(1.0, (0.5, 0.6), 100, 10),
            jammer: EnemyStats::plain(1.2, (0.9, 1.1), 10, 1).with_aura(100.0, 0.6, 0),
            suppressor: EnemyStats::plain(1.2, (0.9, 1.1), 10, 1).with_aura(100.0, 0.7, 0),
            healer: EnemyStats::plain(1.0, (0.9, 1.0), 10, 1).with_aura(90.0, 0.05, 2_000),
            splitter: EnemyStats::plain(1.5, (0.9, 1.0), 8, 1),
            split_child: EnemyStats::plain(1.0, (1.0, 1.0), 2, 1),
        }
    }
}

/// Combat statistics of one element at one tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierStats {
    /// Projectile damage.
    pub damage: u32,
    /// Targeting range in pixels.
    pub range: f32,
    /// Milliseconds between shots at 1x game speed.
    pub attack_interval_ms: u64,
    /// Projectile speed in pixels per tick.
    pub projectile_speed: f32,
}

impl TierStats {
    fn new(damage: u32, range: f32, attack_interval_ms: u64, projectile_speed: f32) -> Self {
        Self {
            damage,
            range,
            attack_interval_ms,
            projectile_speed,
        }
    }

    /// Converts the table row into the statistics a tower is created with.
    #[must_use]
    pub fn to_tower_stats(&self) -> TowerStats {
        TowerStats {
            damage: self.damage,
            range: self.range,
            attack_interval: Duration::from_millis(self.attack_interval_ms),
            projectile_speed: self.projectile_speed,
        }
    }

    pub(crate) fn validate(&self, element: Element, index: usize) -> Result<(), BalanceError> {
        let prefix = format!("towers.{element:?}[{index}]").to_lowercase();
        check_positive(&format!("{prefix}.range"), self.range)?;
        check_positive(&format!("{prefix}.projectile_speed"), self.projectile_speed)?;
        if self.attack_interval_ms == 0 {
            return Err(invalid(
                format!("{prefix}.attack_interval_ms"),
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Tier 1-4 statistics of every element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerTable {
    /// Fire towers.
    pub fire: [TierStats; 4],
    /// Water towers.
    pub water: [TierStats; 4],
    /// Electric towers.
    pub electric: [TierStats; 4],
    /// Wind towers.
    pub wind: [TierStats; 4],
    /// Void towers.
    pub void: [TierStats; 4],
    /// Light towers.
    pub light: [TierStats; 4],
}

impl TowerTable {
    /// Tier rows of `element`.
    #[must_use]
    pub const fn get(&self, element: Element) -> &[TierStats; 4] {
        match element {
            Element::Fire => &self.fire,
            Element::Water => &self.water,
            Element::Electric => &self.electric,
            Element::Wind => &self.wind,
            Element::Void => &self.void,
            Element::Light => &self.light,
        }
    }
}

impl Default for TowerTable {
    fn default() -> Self {
        Self {
            fire: [
                TierStats::new(10, 120.0, 1_000, 8.0),
                TierStats::new(22, 130.0, 900, 9.0),
                TierStats::new(45, 140.0, 800, 10.0),
                TierStats::new(90, 160.0, 700, 12.0),
            ],
            water: [
                TierStats::new(8, 120.0, 1_100, 8.0),
                TierStats::new(18, 130.0, 1_000, 9.0),
                TierStats::new(36, 140.0, 900, 10.0),
                TierStats::new(72, 160.0, 800, 12.0),
            ],
            electric: [
                TierStats::new(9, 110.0, 1_000, 10.0),
                TierStats::new(20, 120.0, 900, 11.0),
                TierStats::new(40, 130.0, 800, 12.0),
                TierStats::new(80, 150.0, 700, 14.0),
            ],
            wind: [
                TierStats::new(12, 100.0, 1_200, 9.0),
                TierStats::new(26, 110.0, 1_100, 10.0),
                TierStats::new(50, 120.0, 1_000, 11.0),
                TierStats::new(100, 140.0, 900, 13.0),
            ],
            void: [
                TierStats::new(11, 130.0, 1_100, 8.0),
                TierStats::new(24, 140.0, 1_000, 9.0),
                TierStats::new(48, 150.0, 900, 10.0),
                TierStats::new(95, 170.0, 800, 12.0),
            ],
            light: [
                TierStats::new(14, 150.0, 1_300, 12.0),
                TierStats::new(30, 160.0, 1_200, 13.0),
                TierStats::new(60, 170.0, 1_100, 14.0),
                TierStats::new(120, 190.0, 1_000, 16.0),
            ],
        }
    }
}

/// Per-tier parameters of every element's base ability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityTable {
    /// Fire: burn damage per tick as a fraction of hit damage.
    pub burn_damage_percent: [f32; 4],
    /// Fire: burn length in milliseconds.
    pub burn_duration_ms: [u64; 4],
    /// Water: slow strength.
    pub slow_percent: [f32; 4],
    /// Water: slow length in milliseconds.
    pub slow_duration_ms: [u64; 4],
    /// Electric: enemies struck by one chain, including the first target.
    pub chain_count: [u32; 4],
    /// Electric: maximum hop distance in pixels.
    pub chain_range: [f32; 4],
    /// Electric: damage multiplier applied per hop.
    pub chain_decay: [f32; 4],
    /// Wind: hit damage multiplier.
    pub wind_damage_multiplier: [f32; 4],
    /// Wind: knockback distance in pixels.
    pub knockback_distance: [f32; 4],
    /// Void: additional enemies pierced.
    pub pierce_count: [u32; 4],
    /// Void: pierce search radius in pixels.
    pub pierce_radius: [f32; 4],
    /// Void: damage fraction dealt to pierced enemies.
    pub pierce_decay: [f32; 4],
    /// Light: health ratio at or below which execute triggers.
    pub execute_threshold: [f32; 4],
    /// Light: damage multiplier of an execute.
    pub execute_bonus: [f32; 4],
}

impl AbilityTable {
    /// Burn length at `index` before permanent multipliers.
    #[must_use]
    pub fn burn_duration(&self, index: usize) -> Duration {
        Duration::from_millis(self.burn_duration_ms[index])
    }

    /// Slow length at `index`.
    #[must_use]
    pub fn slow_duration(&self, index: usize) -> Duration {
        Duration::from_millis(self.slow_duration_ms[index])
    }

    pub(crate) fn validate(&self) -> Result<(), BalanceError> {
        for index in 0..4 {
            let field = |name: &str| format!("abilities.{name}[{index}]");
            check_fraction(&field("burn_damage_percent"), self.burn_damage_percent[index])?;
            check_fraction(&field("slow_percent"), self.slow_percent[index])?;
            check_fraction(&field("chain_decay"), self.chain_decay[index])?;
            check_fraction(&field("pierce_decay"), self.pierce_decay[index])?;
            check_fraction(&field("execute_threshold"), self.execute_threshold[index])?;
            check_positive(&field("chain_range"), self.chain_range[index])?;
            check_positive(&field("pierce_radius"), self.pierce_radius[index])?;
            check_positive(
                &field("wind_damage_multiplier"),
                self.wind_damage_multiplier[index],
            )?;
            check_positive(&field("execute_bonus"), self.execute_bonus[index])?;
            check_non_negative(&field("knockback_distance"), self.knockback_distance[index])?;
        }
        Ok(())
    }
}

impl Default for AbilityTable {
    fn default() -> Self {
        Self {
            burn_damage_percent: [0.2, 0.25, 0.3, 0.35],
            burn_duration_ms: [2_000, 2_500, 3_000, 3_500],
            slow_percent: [0.2, 0.3, 0.4, 0.5],
            slow_duration_ms: [1_500, 2_000, 2_500, 3_000],
            chain_count: [2, 3, 4, 5],
            chain_range: [80.0, 100.0, 120.0, 140.0],
            chain_decay: [0.6, 0.65, 0.7, 0.75],
            wind_damage_multiplier: [1.1, 1.2, 1.3, 1.5],
            knockback_distance: [10.0, 15.0, 20.0, 25.0],
            pierce_count: [1, 2, 3, 4],
            pierce_radius: [50.0, 60.0, 70.0, 80.0],
            pierce_decay: [0.5, 0.55, 0.6, 0.65],
            execute_threshold: [0.1, 0.15, 0.2, 0.25],
            execute_bonus: [1.5, 2.0, 2.5, 3.0],
        }
    }
}

/// Tier 1-3 parameters of one support kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportStats {
    /// Buff radius in pixels per tier.
    pub radius: [f32; 3],
    /// Fractional buff per tier.
    pub magnitude: [f32; 3],
    /// Upper bound of the summed buff across overlapping towers.
    pub cap: f32,
}

impl SupportStats {
    fn validate(&self, kind: SupportKind) -> Result<(), BalanceError> {
        let prefix = format!("support.{kind:?}").to_lowercase();
        for index in 0..3 {
            check_positive(&format!("{prefix}.radius[{index}]"), self.radius[index])?;
            check_non_negative(&format!("{prefix}.magnitude[{index}]"), self.magnitude[index])?;
        }
        check_non_negative(&format!("{prefix}.cap"), self.cap)
    }
}

/// Parameters of every support kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportTable {
    /// Damage support.
    pub damage: SupportStats,
    /// Attack-speed support.
    pub attack_speed: SupportStats,
    /// Armor-shred support.
    pub armor_shred: SupportStats,
    /// Range support.
    pub range: SupportStats,
}

impl SupportTable {
    /// Parameters of `kind`.
    #[must_use]
    pub const fn get(&self, kind: SupportKind) -> &SupportStats {
        match kind {
            SupportKind::Damage => &self.damage,
            SupportKind::AttackSpeed => &self.attack_speed,
            SupportKind::ArmorShred => &self.armor_shred,
            SupportKind::Range => &self.range,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), BalanceError> {
        for kind in [
            SupportKind::Damage,
            SupportKind::AttackSpeed,
            SupportKind::ArmorShred,
            SupportKind::Range,
        ] {
            self.get(kind).validate(kind)?;
        }
        Ok(())
    }
}

impl Default for SupportTable {
    fn default() -> Self {
        Self {
            damage: SupportStats {
                radius: [100.0, 120.0, 140.0],
                magnitude: [0.15, 0.25, 0.4],
                cap: 1.0,
            },
            attack_speed: SupportStats {
                radius: [100.0, 120.0, 140.0],
                magnitude: [0.1, 0.2, 0.3],
                cap: 1.0,
            },
            armor_shred: SupportStats {
                radius: [90.0, 110.0, 130.0],
                magnitude: [0.1, 0.15, 0.25],
                cap: 0.5,
            },
            range: SupportStats {
                radius: [100.0, 120.0, 140.0],
                magnitude: [0.1, 0.2, 0.3],
                cap: 0.5,
            },
        }
    }
}

/// Wave size and health growth constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTable {
    /// Health of a normal enemy on stage 1, wave 1.
    pub base_health: f32,
    /// Health growth per stage after the first.
    pub stage_growth: f32,
    /// Health growth per wave after the first.
    pub wave_growth: f32,
    /// First wave that receives the late-wave bonus.
    pub late_wave_threshold: u32,
    /// Health multiplier from the late-wave threshold onward.
    pub late_wave_bonus: f32,
    /// Boss health on stage 1.
    pub boss_base_health: f32,
    /// Boss health growth per stage after the first.
    pub boss_stage_growth: f32,
    /// Enemies in wave 1.
    pub base_count: u32,
    /// Enemies added per wave.
    pub count_per_wave: u32,
    /// Milliseconds between spawns.
    pub spawn_interval_ms: u64,
}

impl WaveTable {
    /// Number of enemies spawned in `wave`.
    #[must_use]
    pub fn enemy_count(&self, wave: u32) -> u32 {
        self.base_count + wave.saturating_sub(1) * self.count_per_wave
    }

    /// Time between spawns.
    #[must_use]
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), BalanceError> {
        check_positive("waves.base_health", self.base_health)?;
        check_positive("waves.boss_base_health", self.boss_base_health)?;
        check_positive("waves.late_wave_bonus", self.late_wave_bonus)?;
        check_non_negative("waves.stage_growth", self.stage_growth)?;
        check_non_negative("waves.wave_growth", self.wave_growth)?;
        check_non_negative("waves.boss_stage_growth", self.boss_stage_growth)?;
        if self.spawn_interval_ms == 0 {
            return Err(invalid("waves.spawn_interval_ms", "must be positive"));
        }
        Ok(())
    }
}

impl Default for WaveTable {
    fn default() -> Self {
        Self {
            base_health: 30.0,
            stage_growth: 0.5,
            wave_growth: 0.15,
            late_wave_threshold: 15,
            late_wave_bonus: 1.25,
            boss_base_health: 600.0,
            boss_stage_growth: 0.8,
            base_count: 8,
            count_per_wave: 2,
            spawn_interval_ms: 800,
        }
    }
}

/// Engine-wide combat constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTable {
    /// Distance at which a projectile registers a hit, in pixels.
    pub collision_radius: f32,
    /// Lowest speed factor slows can reduce an enemy to.
    pub min_slow_factor: f32,
    /// Lowest factor enemy debuff auras can reduce a tower statistic to.
    pub debuff_min_factor: f32,
    /// Milliseconds between burn damage ticks.
    pub burn_tick_ms: u64,
    /// Milliseconds between regeneration ticks.
    pub regen_tick_ms: u64,
    /// Milliseconds a visual marker stays on screen.
    pub visual_effect_ms: u64,
    /// Milliseconds a chain-lightning bolt stays on screen.
    pub chain_segment_ms: u64,
    /// Children spawned when a splitter dies.
    pub split_count: u32,
    /// Child health as a fraction of the parent's max health.
    pub split_health_multiplier: f32,
    /// Child speed as a fraction of the parent's base speed.
    pub split_speed_multiplier: f32,
    /// Maximum positional jitter of split children in pixels.
    pub split_jitter: f32,
    /// Health ratio below which a boss gains its second wind.
    pub second_wind_threshold: f32,
    /// Fraction of max health the second wind restores per tick.
    pub second_wind_percent: f32,
    /// Milliseconds the second wind lasts.
    pub second_wind_ms: u64,
}

impl CombatTable {
    /// Time between burn damage ticks.
    #[must_use]
    pub fn burn_tick(&self) -> Duration {
        Duration::from_millis(self.burn_tick_ms)
    }

    /// Time between regeneration ticks.
    #[must_use]
    pub fn regen_tick(&self) -> Duration {
        Duration::from_millis(self.regen_tick_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), BalanceError> {
        check_positive("combat.collision_radius", self.collision_radius)?;
        check_fraction("combat.min_slow_factor", self.min_slow_factor)?;
        check_positive("combat.min_slow_factor", self.min_slow_factor)?;
        check_fraction("combat.debuff_min_factor", self.debuff_min_factor)?;
        check_positive("combat.debuff_min_factor", self.debuff_min_factor)?;
        check_fraction("combat.split_health_multiplier", self.split_health_multiplier)?;
        check_positive("combat.split_speed_multiplier", self.split_speed_multiplier)?;
        check_fraction("combat.second_wind_threshold", self.second_wind_threshold)?;
        check_fraction("combat.second_wind_percent", self.second_wind_percent)?;
        if self.burn_tick_ms == 0 || self.regen_tick_ms == 0 {
            return Err(invalid("combat.*_tick_ms", "must be positive"));
        }
        check_non_negative("combat.split_jitter", self.split_jitter)
    }
}

impl Default for CombatTable {
    fn default() -> Self {
        Self {
            collision_radius: 10.0,
            min_slow_factor: 0.2,
            debuff_min_factor: 0.3,
            burn_tick_ms: 500,
            regen_tick_ms: 500,
            visual_effect_ms: 500,
            chain_segment_ms: 200,
            split_count: 2,
            split_health_multiplier: 0.4,
            split_speed_multiplier: 0.9,
            split_jitter: 8.0,
            second_wind_threshold: 0.5,
            second_wind_percent: 0.03,
            second_wind_ms: 3_000,
        }
    }
}
