#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Tower subsystem: aura debuffs, support buffs and the per-tower attack pass.

mod attack;
mod debuffs;
mod support;

pub use attack::{process_attack, AttackContext, AttackOutcome, Shot};
pub use debuffs::{calc_debuffs, TowerDebuffs};
pub use support::{support_buffs, vulnerability, SupportBuffs, SupportCaps};
