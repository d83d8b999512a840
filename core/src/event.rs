//! Per-tick outputs consumed by rendering, audio and stats collaborators.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{element::Role, entity::EnemyKind, ids::EnemyId};

/// Kind of transient visual marker requested from the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    /// Generic impact of a tier 1-3 hit.
    Hit,
    /// Critical strike.
    Crit,
    /// Tier-4 hit without a role-specific marker.
    Empowered,
    /// Light execute triggered.
    Execute,
    /// Marker supplied by a tier-4 role.
    Role(Role),
    /// Enemy died.
    Death,
    /// Splitter broke into children.
    Split,
    /// Healer pulse.
    Heal,
}

/// Visual marker with its creation time, expired by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualEffect {
    /// Marker kind.
    pub kind: VisualKind,
    /// Pixel position of the marker.
    pub position: Vec2,
    /// Simulation time the marker was created.
    pub created_at: Duration,
}

/// One hop of a chain-lightning traversal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainSegment {
    /// Start of the bolt.
    pub from: Vec2,
    /// End of the bolt.
    pub to: Vec2,
    /// Simulation time the bolt was created.
    pub created_at: Duration,
}

/// Abstract audio trigger interpreted by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SoundEvent {
    /// Name of the cue.
    pub name: &'static str,
    /// Cue-specific arguments.
    pub args: Vec<f32>,
}

impl SoundEvent {
    /// Creates a sound trigger.
    #[must_use]
    pub fn new(name: &'static str, args: Vec<f32>) -> Self {
        Self { name, args }
    }
}

/// What dealt the killing blow, for gold-source bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GoldSource {
    /// Projectile, pierce or splash damage.
    Attack,
    /// Burn damage over time.
    Burn,
}

/// Enemy killed during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillRecord {
    /// Enemy that died.
    pub enemy: EnemyId,
    /// Its type.
    pub kind: EnemyKind,
    /// Gold awarded after multipliers.
    pub gold: u32,
    /// What killed it.
    pub source: GoldSource,
}

/// Enemy that reached the end of its path during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeakRecord {
    /// Enemy that leaked.
    pub enemy: EnemyId,
    /// Its type.
    pub kind: EnemyKind,
    /// Lives it cost.
    pub lives: u32,
}

/// Summary of a finished wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveSummary {
    /// Wave number.
    pub wave: u32,
    /// Stage number.
    pub stage: u32,
    /// Whether the wave finished without losing a life.
    pub perfect: bool,
}

/// State changes produced by a single tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TickDelta {
    /// Tick counter value after the tick.
    pub tick: u64,
    /// Enemies appended by the spawner before the tick ran.
    pub spawned: Vec<EnemyId>,
    /// Visual markers created during the tick.
    pub visual_effects: Vec<VisualEffect>,
    /// Chain-lightning bolts created during the tick.
    pub chain_segments: Vec<ChainSegment>,
    /// Audio triggers raised during the tick.
    pub sounds: Vec<SoundEvent>,
    /// Enemies killed during the tick.
    pub kills: Vec<KillRecord>,
    /// Enemies that reached the end of their path.
    pub leaks: Vec<LeakRecord>,
    /// Gold earned from kills.
    pub gold_earned: u32,
    /// Lives lost to leaks.
    pub lives_lost: u32,
    /// Set when the running wave finished on this tick.
    pub wave_completed: Option<WaveSummary>,
}

impl TickDelta {
    /// Number of kills recorded during the tick.
    #[must_use]
    pub fn kill_count(&self) -> usize {
        self.kills.len()
    }

    /// Reports whether the tick produced no observable change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty()
            && self.visual_effects.is_empty()
            && self.chain_segments.is_empty()
            && self.sounds.is_empty()
            && self.kills.is_empty()
            && self.leaks.is_empty()
            && self.gold_earned == 0
            && self.lives_lost == 0
            && self.wave_completed.is_none()
    }
}

/// Collaborator notified after every tick, e.g. stats tracking.
pub trait TickObserver {
    /// Receives the delta of a completed tick.
    fn on_tick(&mut self, delta: &TickDelta);
}

impl TickObserver for () {
    fn on_tick(&mut self, _delta: &TickDelta) {}
}
