#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Ability resolution engine.
//!
//! Every [`Hit`](elemental_defence_core::Hit) produced by the projectile pass
//! is mapped to an [`Ability`] and resolved into damage, status requests,
//! visual markers, chain segments and tower empowerments. Resolution never
//! mutates the battlefield; the engine applies the returned [`Resolution`].

use std::{collections::BTreeMap, time::Duration};

use elemental_defence_core::{
    CatalystBuff, ChainSegment, Element, EnemyId, SoundEvent, SpecialAbility, StatusApplication,
    Tier, TowerId, Vec2, VisualEffect,
};

mod chain;
mod resolver;

pub use chain::{traverse_chain, ChainParams, ChainTraversal};
pub use resolver::AbilityResolver;

/// Behaviour a hit resolves with, keyed by `(element, tier, role)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ability {
    /// Base behaviour of the element.
    Base(Element),
    /// Tier-4 role variant.
    Special(SpecialAbility),
}

impl Ability {
    /// Selects the behaviour for a hit.
    ///
    /// Tier 1-3 always use the element's base behaviour. A tier-4 payload is
    /// used only when it belongs to `element`; a mismatched payload and the
    /// balanced void role fall back to the base behaviour.
    #[must_use]
    pub fn select(element: Element, tier: Tier, special: Option<SpecialAbility>) -> Self {
        match special {
            Some(SpecialAbility::Balanced) | None => Ability::Base(element),
            Some(special) if tier == Tier::Four && special.element() == element => {
                Ability::Special(special)
            }
            Some(_) => Ability::Base(element),
        }
    }
}

/// Request to empower attack towers around a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerBuffRequest {
    /// Tower whose hit produced the request.
    pub source: TowerId,
    /// Centre of the empowered area.
    pub center: Vec2,
    /// Radius of the empowered area in pixels.
    pub radius: f32,
    /// Empowerment granted to towers in range.
    pub buff: CatalystBuff,
}

/// Aggregated outcome of every hit in a tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    /// Damage per enemy before vulnerability, chain damage included.
    pub damage: BTreeMap<EnemyId, u32>,
    /// Status effects to attach or trigger, in hit order.
    pub statuses: Vec<StatusApplication>,
    /// One marker per resolved hit.
    pub visuals: Vec<VisualEffect>,
    /// Chain-lightning bolts.
    pub chain_segments: Vec<ChainSegment>,
    /// Catalyst empowerments.
    pub tower_buffs: Vec<TowerBuffRequest>,
    /// Audio triggers.
    pub sounds: Vec<SoundEvent>,
}

impl Resolution {
    /// Reports whether no hit produced anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.damage.is_empty()
            && self.statuses.is_empty()
            && self.visuals.is_empty()
            && self.chain_segments.is_empty()
            && self.tower_buffs.is_empty()
            && self.sounds.is_empty()
    }

    pub(crate) fn add_damage(&mut self, enemy: EnemyId, amount: u32) {
        add_to(&mut self.damage, enemy, amount);
    }
}

pub(crate) fn add_to(map: &mut BTreeMap<EnemyId, u32>, enemy: EnemyId, amount: u32) {
    if amount == 0 {
        return;
    }
    let entry = map.entry(enemy).or_insert(0);
    *entry = entry.saturating_add(amount);
}

pub(crate) fn scale_duration(duration: Duration, factor: f32) -> Duration {
    if factor.is_finite() && factor > 0.0 {
        duration.mul_f32(factor)
    } else {
        Duration::ZERO
    }
}
