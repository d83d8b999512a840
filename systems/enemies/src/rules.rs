//! Ordered, data-driven enemy type selection.

use elemental_defence_core::EnemyKind;
use rand::Rng;

/// Every n-th wave closes with a boss.
pub const BOSS_WAVE_INTERVAL: u32 = 10;

/// Wave and stage an enemy is created for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WaveLevel {
    /// One-based wave number.
    pub wave: u32,
    /// One-based stage number.
    pub stage: u32,
}

impl WaveLevel {
    /// Creates a level, raising zero values to one.
    #[must_use]
    pub fn new(wave: u32, stage: u32) -> Self {
        Self {
            wave: wave.max(1),
            stage: stage.max(1),
        }
    }
}

/// Position of an enemy within its wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpawnSlot {
    /// Zero-based index within the wave.
    pub index: u32,
    /// Number of enemies in the wave.
    pub total: u32,
    /// Wave and stage of the slot.
    pub level: WaveLevel,
}

impl SpawnSlot {
    /// Creates a slot for the `index`-th of `total` enemies.
    #[must_use]
    pub const fn new(index: u32, total: u32, level: WaveLevel) -> Self {
        Self {
            index,
            total,
            level,
        }
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

struct TypeRule {
    kind: EnemyKind,
    applies: fn(&SpawnSlot) -> bool,
    chance: fn(&SpawnSlot) -> f64,
}

const TYPE_RULES: [TypeRule; 7] = [
    TypeRule {
        kind: EnemyKind::Boss,
        applies: boss_slot,
        chance: certain,
    },
    TypeRule {
        kind: EnemyKind::Elite,
        applies: |slot| slot.level.wave >= 5,
        chance: |slot| (0.05 + 0.01 * f64::from(slot.level.stage.saturating_sub(1))).min(0.2),
    },
    TypeRule {
        kind: EnemyKind::Healer,
        applies: |slot| slot.level.wave >= 4,
        chance: |_| 0.06,
    },
    TypeRule {
        kind: EnemyKind::Splitter,
        applies: |slot| slot.level.wave >= 6,
        chance: |_| 0.08,
    },
    TypeRule {
        kind: EnemyKind::Jammer,
        applies: |slot| slot.level.stage >= 2 || slot.level.wave >= 8,
        chance: |_| 0.05,
    },
    TypeRule {
        kind: EnemyKind::Suppressor,
        applies: |slot| slot.level.stage >= 2 && slot.level.wave >= 5,
        chance: |_| 0.05,
    },
    TypeRule {
        kind: EnemyKind::Fast,
        applies: |slot| slot.level.wave >= 2,
        chance: |slot| (0.15 + 0.01 * f64::from(slot.level.wave)).min(0.35),
    },
];

fn boss_slot(slot: &SpawnSlot) -> bool {
    slot.level.wave % BOSS_WAVE_INTERVAL == 0 && slot.is_last()
}

fn certain(_: &SpawnSlot) -> f64 {
    1.0
}

/// Picks the type of the enemy occupying `slot`.
///
/// Rules are evaluated in a fixed order and only applicable rules consume a
/// random draw; the first successful draw wins. Slots no rule claims are
/// [`EnemyKind::Normal`].
pub fn determine_type<R: Rng + ?Sized>(slot: SpawnSlot, rng: &mut R) -> EnemyKind {
    for rule in &TYPE_RULES {
        if !(rule.applies)(&slot) {
            continue;
        }
        let chance = (rule.chance)(&slot);
        if chance >= 1.0 || rng.gen::<f64>() < chance {
            return rule.kind;
        }
    }
    EnemyKind::Normal
}
