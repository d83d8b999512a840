#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Elemental Defence combat simulation.
//!
//! This crate defines the value types that connect the authoritative engine,
//! the pure combat systems, and the adapters that host them. The engine owns
//! every [`Enemy`], [`Tower`], [`SupportTower`] and [`Projectile`]; systems
//! borrow read-only slices of those collections and answer with owned delta
//! values such as [`Hit`], [`StatusApplication`] and [`TickDelta`] that the
//! engine applies at well-defined points of a tick.

pub mod buffs;
pub mod element;
pub mod entity;
pub mod event;
pub mod geometry;
pub mod ids;
pub mod special;
pub mod status;

pub use buffs::{PermanentBuffSource, PermanentBuffs};
pub use element::{Element, Role, SupportKind, Tier};
pub use entity::{
    Aura, CatalystBuff, DebuffTarget, Enemy, EnemyKind, EnemyProfile, Hit, Projectile,
    SupportTower, Tower, TowerStats,
};
pub use event::{
    ChainSegment, GoldSource, KillRecord, LeakRecord, SoundEvent, TickDelta, TickObserver,
    VisualEffect, VisualKind, WaveSummary,
};
pub use geometry::{Color, GridCoord, Path, Vec2, TILE_SIZE};
pub use ids::{EnemyId, PathId, ProjectileId, SupportTowerId, TowerId};
pub use special::SpecialAbility;
pub use status::{
    Burn, Freeze, Regeneration, Slow, StatusApplication, StatusEffects, StatusKind, StatusRequest,
};
