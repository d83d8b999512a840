//! Timed status-effect records attached to enemies and the requests that create them.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::ids::{EnemyId, TowerId};

/// Type tag of a status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusKind {
    /// Damage over time.
    Burn,
    /// Movement speed reduction.
    Slow,
    /// Movement halted.
    Freeze,
    /// Instantaneous push back along the path.
    Knockback,
    /// Instantaneous pull toward a point.
    Pull,
    /// Healing over time.
    Regeneration,
}

/// Burn inflicted by a single source tower.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Burn {
    /// Tower that applied the burn.
    pub source: TowerId,
    /// Damage dealt on each burn tick.
    pub damage: u32,
    /// Number of applications folded into `damage`.
    pub stacks: u8,
    /// Simulation time at which the burn expires.
    pub expires_at: Duration,
    /// Simulation time of the next damage tick.
    pub next_tick_at: Duration,
}

/// Slow inflicted by a single source tower.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slow {
    /// Tower that applied the slow.
    pub source: TowerId,
    /// Fraction of speed removed, in `[0, 1]`.
    pub percent: f32,
    /// Simulation time at which the slow expires.
    pub expires_at: Duration,
}

/// Freeze; binary, never stacks with itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freeze {
    /// Simulation time at which the freeze expires.
    pub expires_at: Duration,
}

/// Percent-of-max-health healing over time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Regeneration {
    /// Fraction of max health restored per regeneration tick.
    pub percent: f32,
    /// Simulation time at which the regeneration expires.
    pub expires_at: Duration,
    /// Simulation time of the next healing tick.
    pub next_tick_at: Duration,
}

/// Every timed status effect currently active on an enemy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusEffects {
    /// Active burns, at most one per source tower.
    pub burns: Vec<Burn>,
    /// Active slows, at most one per source tower.
    pub slows: Vec<Slow>,
    /// Active freeze, if any.
    pub freeze: Option<Freeze>,
    /// Active regeneration, if any.
    pub regeneration: Option<Regeneration>,
}

impl StatusEffects {
    /// Reports whether no timed effect is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.burns.is_empty()
            && self.slows.is_empty()
            && self.freeze.is_none()
            && self.regeneration.is_none()
    }

    /// Reports whether the enemy is frozen at `now`.
    #[must_use]
    pub fn is_frozen(&self, now: Duration) -> bool {
        self.freeze.is_some_and(|freeze| freeze.expires_at > now)
    }

    /// Lists the kinds of timed effects currently held.
    #[must_use]
    pub fn kinds(&self) -> Vec<StatusKind> {
        let mut kinds = Vec::new();
        if !self.burns.is_empty() {
            kinds.push(StatusKind::Burn);
        }
        if !self.slows.is_empty() {
            kinds.push(StatusKind::Slow);
        }
        if self.freeze.is_some() {
            kinds.push(StatusKind::Freeze);
        }
        if self.regeneration.is_some() {
            kinds.push(StatusKind::Regeneration);
        }
        kinds
    }
}

/// Request to attach or trigger a status effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StatusRequest {
    /// Burn for `damage` every burn tick for `duration`.
    Burn {
        /// Tower applying the burn.
        source: TowerId,
        /// Damage per burn tick.
        damage: u32,
        /// Length of the burn.
        duration: Duration,
        /// Additive stacks allowed per source; 1 means refresh only.
        max_stacks: u8,
    },
    /// Reduce speed by `percent` for `duration`.
    Slow {
        /// Tower applying the slow.
        source: TowerId,
        /// Fraction of speed removed.
        percent: f32,
        /// Length of the slow.
        duration: Duration,
    },
    /// Halt movement for `duration`.
    Freeze {
        /// Length of the freeze.
        duration: Duration,
    },
    /// Push the enemy back along its current path segment.
    Knockback {
        /// Displacement in pixels.
        distance: f32,
    },
    /// Pull the enemy toward `toward`, staying on its current path segment.
    Pull {
        /// Point the enemy is drawn toward.
        toward: Vec2,
        /// Maximum displacement in pixels.
        distance: f32,
    },
    /// Heal `percent` of max health every regeneration tick for `duration`.
    Regeneration {
        /// Fraction of max health per tick.
        percent: f32,
        /// Length of the regeneration.
        duration: Duration,
    },
}

impl StatusRequest {
    /// Type tag of the requested effect.
    #[must_use]
    pub const fn kind(&self) -> StatusKind {
        match self {
            StatusRequest::Burn { .. } => StatusKind::Burn,
            StatusRequest::Slow { .. } => StatusKind::Slow,
            StatusRequest::Freeze { .. } => StatusKind::Freeze,
            StatusRequest::Knockback { .. } => StatusKind::Knockback,
            StatusRequest::Pull { .. } => StatusKind::Pull,
            StatusRequest::Regeneration { .. } => StatusKind::Regeneration,
        }
    }
}

/// Status request addressed to a specific enemy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusApplication {
    /// Enemy the request targets; silently dropped if it no longer exists.
    pub target: EnemyId,
    /// Effect to apply.
    pub request: StatusRequest,
}
