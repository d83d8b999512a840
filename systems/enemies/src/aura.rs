//! Healer aura pulses.

use std::time::Duration;

use elemental_defence_core::{Aura, Enemy, EnemyId, Vec2};

/// Heal pulse emitted by one healer whose cooldown elapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct HealPulse {
    /// Healer that pulsed.
    pub healer: EnemyId,
    /// Healer position when it pulsed.
    pub position: Vec2,
    /// Enemies in range and the health each should receive.
    pub heals: Vec<(EnemyId, u32)>,
}

/// Scans healers whose cooldown has elapsed and proposes their heals.
///
/// Each heal restores a fraction of the target's max health, at least one
/// point. Healers never heal themselves, and enemies already at full health
/// are skipped. The caller applies the heals and records the pulse times.
#[must_use]
pub fn healer_pass(enemies: &[Enemy], now: Duration) -> Vec<HealPulse> {
    let mut pulses = Vec::new();
    for healer in enemies.iter().filter(|enemy| enemy.is_alive()) {
        let Some(Aura::Heal {
            radius,
            percent,
            cooldown,
        }) = healer.aura
        else {
            continue;
        };
        let ready = healer
            .last_aura_at
            .map_or(true, |last| now.saturating_sub(last) >= cooldown);
        if !ready {
            continue;
        }

        let heals = enemies
            .iter()
            .filter(|ally| ally.id != healer.id && ally.is_alive())
            .filter(|ally| ally.health() < ally.max_health())
            .filter(|ally| ally.position.distance(healer.position) <= radius)
            .map(|ally| {
                let amount = (ally.max_health() as f32 * percent).floor() as u32;
                (ally.id, amount.max(1))
            })
            .collect();
        pulses.push(HealPulse {
            healer: healer.id,
            position: healer.position,
            heals,
        });
    }
    pulses
}
