#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Enemy subsystem: factory, type selection, movement and type behaviours.
//!
//! Every function here is pure with respect to the engine's collections.
//! Functions that need to change a single enemy take it by `&mut`; functions
//! that look at the whole population take a slice and return the changes
//! they propose.

pub mod aura;
pub mod factory;
pub mod health;
pub mod movement;
pub mod rules;
pub mod splitter;

pub use aura::{healer_pass, HealPulse};
pub use factory::EnemyFactory;
pub use health::{calc_base_health, calc_boss_health};
pub use movement::{move_enemy, restart_path, MoveOutcome};
pub use rules::{determine_type, SpawnSlot, WaveLevel, BOSS_WAVE_INTERVAL};
pub use splitter::split_children;
