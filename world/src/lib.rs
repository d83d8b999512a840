#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative engine state and the tick orchestrator for Elemental Defence.
//!
//! [`GameEngine`] owns every enemy, tower, projectile and effect. A host
//! drives it by calling [`GameEngine::step`] from whatever loop it runs:
//! a real-time clock, a headless harness or a fixed-step replay. Each step
//! advances the simulated clock by one tick interval and runs the combat
//! phases in a fixed order; the pure systems borrow read-only views and the
//! engine applies the deltas they return.

use std::time::Duration;

use elemental_defence_balance::Balance;
use elemental_defence_core::{
    ChainSegment, Element, Enemy, EnemyId, EnemyKind, GridCoord, Path, PathId, Projectile, Role,
    SupportKind, SupportTower, SupportTowerId, Tier, Tower, TowerId, VisualEffect,
};
use elemental_defence_system_abilities::AbilityResolver;
use elemental_defence_system_enemies::{EnemyFactory, WaveLevel};
use elemental_defence_system_spawning::{Config as SpawnConfig, WavePlan, WaveSpawner};
use elemental_defence_system_status_effects::{StatusConfig, StatusEngine};
use elemental_defence_system_towers::SupportCaps;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

mod config;
mod ids;
mod tick;
mod towers;

pub use config::{EngineConfig, PathMode};

use ids::IdAllocator;
use towers::TowerRegistry;

/// Lifecycle state of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineMode {
    /// No wave is running; steps are no-ops.
    Idle,
    /// A wave is running and steps advance the simulation.
    Combat,
    /// Lives ran out; only a new engine can continue.
    GameOver,
}

/// Commands the engine refuses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The tile already holds a tower.
    #[error("tile ({}, {}) is already occupied", .0.column(), .0.row())]
    TileOccupied(GridCoord),
    /// No attack tower with the id exists.
    #[error("unknown tower {0:?}")]
    UnknownTower(TowerId),
    /// No support tower with the id exists.
    #[error("unknown support tower {0:?}")]
    UnknownSupport(SupportTowerId),
    /// No path with the id exists.
    #[error("unknown path {0:?}")]
    UnknownPath(PathId),
    /// Waves need at least one path.
    #[error("no paths are loaded")]
    NoPaths,
    /// The game is over.
    #[error("the game is over")]
    GameOver,
}

#[derive(Clone, Copy, Debug)]
struct ActiveWave {
    level: WaveLevel,
    lives_lost: u32,
}

/// Tick orchestrator owning the authoritative collections.
#[derive(Debug)]
pub struct GameEngine {
    balance: Balance,
    config: EngineConfig,
    status: StatusEngine,
    resolver: AbilityResolver,
    caps: SupportCaps,
    mode: EngineMode,
    tick: u64,
    now: Duration,
    paths: Vec<Path>,
    enemies: Vec<Enemy>,
    towers: TowerRegistry,
    projectiles: Vec<Projectile>,
    visuals: Vec<VisualEffect>,
    chain_segments: Vec<ChainSegment>,
    ids: IdAllocator,
    rng: ChaCha8Rng,
    lives: u32,
    gold: u64,
    wave: Option<ActiveWave>,
    spawner: WaveSpawner,
}

impl GameEngine {
    /// Creates an idle engine over `paths`.
    #[must_use]
    pub fn new(balance: Balance, config: EngineConfig, paths: Vec<Path>) -> Self {
        Self {
            status: StatusEngine::new(StatusConfig::from_table(&balance.combat)),
            resolver: AbilityResolver::new(balance.abilities.clone()),
            caps: SupportCaps::from_table(&balance.support),
            spawner: WaveSpawner::new(SpawnConfig::from_table(&balance.waves)),
            mode: EngineMode::Idle,
            tick: 0,
            now: Duration::ZERO,
            paths,
            enemies: Vec::new(),
            towers: TowerRegistry::new(),
            projectiles: Vec::new(),
            visuals: Vec::new(),
            chain_segments: Vec::new(),
            ids: IdAllocator::default(),
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed()),
            lives: config.starting_lives(),
            gold: 0,
            wave: None,
            balance,
            config,
        }
    }

    /// Reports whether steps currently advance the simulation.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.mode == EngineMode::Combat
    }

    /// Rolls the roster of `wave` in `stage` and starts releasing it.
    pub fn start_wave(&mut self, wave: u32, stage: u32) -> Result<WaveLevel, EngineError> {
        let level = WaveLevel::new(wave, stage);
        let plan = WavePlan::roll(level, &self.balance.waves, &mut self.rng);
        self.start_planned_wave(plan)
    }

    /// Starts releasing an explicit roster.
    pub fn start_planned_wave(&mut self, plan: WavePlan) -> Result<WaveLevel, EngineError> {
        if self.mode == EngineMode::GameOver {
            return Err(EngineError::GameOver);
        }
        if self.paths.is_empty() {
            return Err(EngineError::NoPaths);
        }
        let level = plan.level();
        debug!(
            wave = level.wave,
            stage = level.stage,
            enemies = plan.len(),
            "wave started"
        );
        self.spawner.load(plan);
        self.wave = Some(ActiveWave {
            level,
            lives_lost: 0,
        });
        self.mode = EngineMode::Combat;
        Ok(level)
    }

    /// Halts the tick loop at a tick boundary.
    ///
    /// Pending spawns are dropped; enemies already on the field stay until
    /// [`GameEngine::clear_battlefield`] is called.
    pub fn stop(&mut self) {
        if self.mode == EngineMode::Combat {
            debug!(tick = self.tick, "engine stopped");
            self.mode = EngineMode::Idle;
        }
        self.spawner.clear();
        self.wave = None;
    }

    /// Removes every enemy, projectile and effect, e.g. on a stage transition.
    pub fn clear_battlefield(&mut self) {
        self.enemies.clear();
        self.projectiles.clear();
        self.visuals.clear();
        self.chain_segments.clear();
    }

    /// Replaces the paths, e.g. when a new stage loads.
    pub fn set_paths(&mut self, paths: Vec<Path>) {
        self.paths = paths;
    }

    /// Places an attack tower on `grid`.
    pub fn place_tower(
        &mut self,
        element: Element,
        tier: Tier,
        role: Option<Role>,
        grid: GridCoord,
    ) -> Result<TowerId, EngineError> {
        if self.towers.is_occupied(grid) {
            return Err(EngineError::TileOccupied(grid));
        }
        let id = self.ids.next_tower();
        let stats = self.balance.tower_stats(element, tier);
        self.towers
            .insert_tower(Tower::new(id, element, tier, role, stats, grid));
        debug!(tower = id.get(), ?element, ?tier, ?role, "tower placed");
        Ok(id)
    }

    /// Places a support tower on `grid`; tiers above 3 are clamped.
    pub fn place_support(
        &mut self,
        kind: SupportKind,
        tier: Tier,
        grid: GridCoord,
    ) -> Result<SupportTowerId, EngineError> {
        if self.towers.is_occupied(grid) {
            return Err(EngineError::TileOccupied(grid));
        }
        let id = self.ids.next_support();
        let (radius, magnitude) = self.balance.support_stats(kind, tier);
        self.towers
            .insert_support(SupportTower::new(id, kind, tier, grid, radius, magnitude));
        debug!(support = id.get(), ?kind, ?tier, "support tower placed");
        Ok(id)
    }

    /// Removes an attack tower. Its projectiles already in flight still land.
    pub fn remove_tower(&mut self, id: TowerId) -> Result<Tower, EngineError> {
        self.towers
            .remove_tower(id)
            .ok_or(EngineError::UnknownTower(id))
    }

    /// Removes a support tower.
    pub fn remove_support(&mut self, id: SupportTowerId) -> Result<SupportTower, EngineError> {
        self.towers
            .remove_support(id)
            .ok_or(EngineError::UnknownSupport(id))
    }

    /// Appends one enemy at the start of `path`, outside any wave roster.
    pub fn spawn_enemy(
        &mut self,
        kind: EnemyKind,
        path: PathId,
        level: WaveLevel,
    ) -> Result<EnemyId, EngineError> {
        let path = self
            .paths
            .iter()
            .find(|candidate| candidate.id() == path)
            .ok_or(EngineError::UnknownPath(path))?;
        let id = self.ids.next_enemy();
        let enemy = EnemyFactory::new(&self.balance).create(
            id,
            kind,
            level,
            path,
            self.now,
            &mut self.rng,
        );
        self.enemies.push(enemy);
        Ok(id)
    }

    /// Mutable access to an enemy, for hosts and tests that script scenarios.
    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }
}

/// Query functions that provide read-only views into the engine.
pub mod query {
    use std::time::Duration;

    use elemental_defence_balance::Balance;
    use elemental_defence_core::{
        ChainSegment, Enemy, Path, Projectile, SupportTower, Tower, VisualEffect,
    };

    use super::{EngineMode, GameEngine};

    /// Current lifecycle state.
    #[must_use]
    pub fn mode(engine: &GameEngine) -> EngineMode {
        engine.mode
    }

    /// Number of completed ticks.
    #[must_use]
    pub fn tick(engine: &GameEngine) -> u64 {
        engine.tick
    }

    /// Simulated time elapsed.
    #[must_use]
    pub fn now(engine: &GameEngine) -> Duration {
        engine.now
    }

    /// Lives left.
    #[must_use]
    pub fn lives(engine: &GameEngine) -> u32 {
        engine.lives
    }

    /// Gold earned since the engine was created.
    #[must_use]
    pub fn gold(engine: &GameEngine) -> u64 {
        engine.gold
    }

    /// Balance tables in use.
    #[must_use]
    pub fn balance(engine: &GameEngine) -> &Balance {
        &engine.balance
    }

    /// Paths enemies follow.
    #[must_use]
    pub fn paths(engine: &GameEngine) -> &[Path] {
        &engine.paths
    }

    /// Live enemies in spawn order.
    #[must_use]
    pub fn enemies(engine: &GameEngine) -> &[Enemy] {
        &engine.enemies
    }

    /// Attack towers ordered by id.
    pub fn towers(engine: &GameEngine) -> impl Iterator<Item = &Tower> {
        engine.towers.towers.values()
    }

    /// Support towers ordered by id.
    #[must_use]
    pub fn supports(engine: &GameEngine) -> &[SupportTower] {
        &engine.towers.supports
    }

    /// Projectiles in flight.
    #[must_use]
    pub fn projectiles(engine: &GameEngine) -> &[Projectile] {
        &engine.projectiles
    }

    /// Visual markers that have not expired.
    #[must_use]
    pub fn visual_effects(engine: &GameEngine) -> &[VisualEffect] {
        &engine.visuals
    }

    /// Chain-lightning bolts that have not expired.
    #[must_use]
    pub fn chain_segments(engine: &GameEngine) -> &[ChainSegment] {
        &engine.chain_segments
    }

    /// Enemies not yet released by the spawner.
    #[must_use]
    pub fn pending_spawns(engine: &GameEngine) -> usize {
        engine.spawner.pending()
    }
}
