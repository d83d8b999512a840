//! Authoritative entities owned by the engine and the ephemeral hit record.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{
    element::{Element, Role, SupportKind, Tier},
    geometry::{Color, GridCoord, Path, TILE_SIZE},
    ids::{EnemyId, PathId, ProjectileId, SupportTowerId, TowerId},
    special::SpecialAbility,
    status::StatusEffects,
};

/// Type tag of an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Baseline enemy.
    Normal,
    /// Fragile, quick enemy.
    Fast,
    /// Tough enemy with a larger reward.
    Elite,
    /// Wave boss.
    Boss,
    /// Slows the attack speed of nearby towers.
    Jammer,
    /// Lowers the damage of nearby towers.
    Suppressor,
    /// Periodically heals nearby enemies.
    Healer,
    /// Splits into children on death.
    Splitter,
    /// Child spawned by a splitter; never splits again.
    SplitChild,
}

impl EnemyKind {
    /// Every enemy kind in declaration order.
    pub const ALL: [EnemyKind; 9] = [
        EnemyKind::Normal,
        EnemyKind::Fast,
        EnemyKind::Elite,
        EnemyKind::Boss,
        EnemyKind::Jammer,
        EnemyKind::Suppressor,
        EnemyKind::Healer,
        EnemyKind::Splitter,
        EnemyKind::SplitChild,
    ];

    /// Reports whether fast-hunting abilities treat the kind as fast.
    #[must_use]
    pub const fn is_fast(self) -> bool {
        matches!(self, EnemyKind::Fast | EnemyKind::SplitChild)
    }
}

/// Tower statistic an enemy debuff aura weakens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebuffTarget {
    /// Attack interval is stretched.
    AttackSpeed,
    /// Projectile damage is reduced.
    Damage,
}

/// Radius-based passive effect projected by an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Aura {
    /// Heals enemies in range on a fixed cooldown.
    Heal {
        /// Aura radius in pixels.
        radius: f32,
        /// Fraction of each target's max health restored per pulse.
        percent: f32,
        /// Time between pulses.
        cooldown: Duration,
    },
    /// Weakens towers in range; read by towers every tick.
    Debuff {
        /// Aura radius in pixels.
        radius: f32,
        /// Statistic that is weakened.
        target: DebuffTarget,
        /// Multiplier applied to the statistic, in `(0, 1]`.
        factor: f32,
    },
}

impl Aura {
    /// Radius of the aura in pixels.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        match self {
            Aura::Heal { radius, .. } | Aura::Debuff { radius, .. } => *radius,
        }
    }
}

/// Static attributes an enemy is created with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    /// Starting and maximum health.
    pub max_health: u32,
    /// Movement speed in pixels per tick at 1x game speed.
    pub speed: f32,
    /// Gold awarded on kill before permanent multipliers.
    pub gold: u32,
    /// Lives lost when the enemy reaches the end of its path.
    pub lives_cost: u32,
    /// Passive aura, if the type projects one.
    pub aura: Option<Aura>,
}

/// Enemy travelling along a path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique identifier.
    pub id: EnemyId,
    /// Type tag.
    pub kind: EnemyKind,
    health: u32,
    max_health: u32,
    /// Current pixel position.
    pub position: Vec2,
    /// Path the enemy follows.
    pub path: PathId,
    /// Index of the last waypoint reached.
    pub path_index: usize,
    /// Unmodified movement speed.
    pub base_speed: f32,
    /// Speed after slows and freezes, recomputed on every move.
    pub speed: f32,
    /// Gold awarded on kill before permanent multipliers.
    pub gold: u32,
    /// Lives lost when the enemy leaks.
    pub lives_cost: u32,
    /// Passive aura, if any.
    pub aura: Option<Aura>,
    /// Active timed status effects.
    pub status: StatusEffects,
    /// Simulation time of the last aura pulse.
    pub last_aura_at: Option<Duration>,
    /// Whether death spawns split children.
    pub splittable: bool,
    /// Whether the one-off boss regeneration already triggered.
    pub second_wind_used: bool,
}

impl Enemy {
    /// Creates an enemy at the start of `path` with full health.
    #[must_use]
    pub fn new(id: EnemyId, kind: EnemyKind, path: &Path, profile: EnemyProfile) -> Self {
        let max_health = profile.max_health.max(1);
        Self {
            id,
            kind,
            health: max_health,
            max_health,
            position: path.start(),
            path: path.id(),
            path_index: 0,
            base_speed: profile.speed,
            speed: profile.speed,
            gold: profile.gold,
            lives_cost: profile.lives_cost,
            aura: profile.aura,
            status: StatusEffects::default(),
            last_aura_at: None,
            splittable: kind == EnemyKind::Splitter,
            second_wind_used: false,
        }
    }

    /// Current health, never above [`Enemy::max_health`].
    #[must_use]
    pub const fn health(&self) -> u32 {
        self.health
    }

    /// Maximum health.
    #[must_use]
    pub const fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Reports whether the enemy still has health left.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Fraction of health remaining in `[0, 1]`.
    #[must_use]
    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    /// Subtracts damage, saturating at zero. Returns the damage actually dealt.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        dealt
    }

    /// Restores health, clamped to max health. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }
}

/// Per-tier combat statistics of an attack tower.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TowerStats {
    /// Damage carried by each projectile.
    pub damage: u32,
    /// Targeting range in pixels.
    pub range: f32,
    /// Time between shots at 1x game speed.
    pub attack_interval: Duration,
    /// Projectile speed in pixels per tick.
    pub projectile_speed: f32,
}

/// Temporary damage bonus granted by a void catalyst hit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalystBuff {
    /// Fractional damage bonus.
    pub damage_bonus: f32,
    /// Simulation time at which the bonus lapses.
    pub expires_at: Duration,
}

/// Attack tower placed on the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    /// Unique identifier.
    pub id: TowerId,
    /// Elemental affinity.
    pub element: Element,
    /// Upgrade tier.
    pub tier: Tier,
    role: Option<Role>,
    special: Option<SpecialAbility>,
    /// Base combat statistics.
    pub stats: TowerStats,
    /// Grid tile the tower occupies.
    pub grid: GridCoord,
    /// Pixel centre of the tower.
    pub position: Vec2,
    /// Simulation time of the last shot.
    pub last_fired: Option<Duration>,
    /// Whether an enemy aura weakened the tower this tick; rendering only.
    pub debuffed: bool,
    /// Active catalyst empowerment.
    pub catalyst: Option<CatalystBuff>,
}

impl Tower {
    /// Creates a tower on `grid`.
    ///
    /// The role is kept only for tier-4 towers whose element owns it; any
    /// other combination falls back to the element's base behaviour.
    #[must_use]
    pub fn new(
        id: TowerId,
        element: Element,
        tier: Tier,
        role: Option<Role>,
        stats: TowerStats,
        grid: GridCoord,
    ) -> Self {
        let role = role.filter(|role| tier == Tier::Four && role.element() == element);
        Self {
            id,
            element,
            tier,
            role,
            special: role.map(SpecialAbility::for_role),
            stats,
            grid,
            position: grid.center(TILE_SIZE),
            last_fired: None,
            debuffed: false,
            catalyst: None,
        }
    }

    /// Tier-4 role, fixed for the lifetime of the tower.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// Special-ability payload baked from the role.
    #[must_use]
    pub const fn special(&self) -> Option<SpecialAbility> {
        self.special
    }

    /// Cosmetic projectile colour for the tower's element.
    #[must_use]
    pub const fn projectile_color(&self) -> Color {
        match self.element {
            Element::Fire => Color::from_rgb(0xff, 0x6b, 0x1a),
            Element::Water => Color::from_rgb(0x3a, 0x9b, 0xff),
            Element::Electric => Color::from_rgb(0xff, 0xe1, 0x3b),
            Element::Wind => Color::from_rgb(0x9b, 0xf0, 0xc0),
            Element::Void => Color::from_rgb(0x8a, 0x2b, 0xe2),
            Element::Light => Color::from_rgb(0xff, 0xf6, 0xd5),
        }
    }
}

/// Support tower that buffs attack towers or weakens enemies around it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportTower {
    /// Unique identifier.
    pub id: SupportTowerId,
    /// Buff category.
    pub kind: SupportKind,
    /// Upgrade tier; support towers stop at tier 3.
    pub tier: Tier,
    /// Grid tile the tower occupies.
    pub grid: GridCoord,
    /// Pixel centre of the tower.
    pub position: Vec2,
    /// Buff radius in pixels.
    pub radius: f32,
    /// Fractional buff contributed by this tower.
    pub magnitude: f32,
}

impl SupportTower {
    /// Creates a support tower, clamping the tier to tier 3.
    #[must_use]
    pub fn new(
        id: SupportTowerId,
        kind: SupportKind,
        tier: Tier,
        grid: GridCoord,
        radius: f32,
        magnitude: f32,
    ) -> Self {
        Self {
            id,
            kind,
            tier: tier.min(Tier::Three),
            grid,
            position: grid.center(TILE_SIZE),
            radius,
            magnitude,
        }
    }
}

/// Projectile in flight toward an enemy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Unique identifier.
    pub id: ProjectileId,
    /// Tower that fired the projectile.
    pub source: TowerId,
    /// Position of the firing tower.
    pub origin: Vec2,
    /// Current position.
    pub position: Vec2,
    /// Enemy the projectile is homing on.
    pub target: EnemyId,
    /// Damage delivered on impact.
    pub damage: u32,
    /// Element of the firing tower.
    pub element: Element,
    /// Tier of the firing tower.
    pub tier: Tier,
    /// Tier-4 payload of the firing tower.
    pub special: Option<SpecialAbility>,
    /// Travel speed in pixels per tick.
    pub speed: f32,
    /// Cosmetic colour.
    pub color: Color,
    /// Whether the shot rolled a critical strike.
    pub crit: bool,
}

/// Projectile impact, consumed within the tick that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Enemy that was struck.
    pub target: EnemyId,
    /// Tower that fired the projectile.
    pub source: TowerId,
    /// Damage carried by the projectile.
    pub damage: u32,
    /// Element of the firing tower.
    pub element: Element,
    /// Tier of the firing tower.
    pub tier: Tier,
    /// Tier-4 payload of the firing tower.
    pub special: Option<SpecialAbility>,
    /// Target position at impact.
    pub impact: Vec2,
    /// Position of the firing tower.
    pub origin: Vec2,
    /// Whether the shot is a critical strike.
    pub crit: bool,
}

impl Hit {
    /// Builds the hit a projectile produces when striking at `impact`.
    #[must_use]
    pub fn from_projectile(projectile: &Projectile, target: EnemyId, impact: Vec2) -> Self {
        Self {
            target,
            source: projectile.source,
            damage: projectile.damage,
            element: projectile.element,
            tier: projectile.tier,
            special: projectile.special,
            impact,
            origin: projectile.origin,
            crit: projectile.crit,
        }
    }
}
