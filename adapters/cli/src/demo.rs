//! Fixed demo map and tower presets for headless runs.

use clap::ValueEnum;
use elemental_defence_core::{
    Color, Element, GridCoord, Path, PathId, Role, SupportKind, Tier, TILE_SIZE,
};

/// Serpentine path across a 20 by 12 tile field.
pub(crate) fn demo_path() -> Path {
    let waypoints = [
        GridCoord::new(0, 1),
        GridCoord::new(17, 1),
        GridCoord::new(17, 5),
        GridCoord::new(2, 5),
        GridCoord::new(2, 9),
        GridCoord::new(19, 9),
    ];
    Path::from_grid(
        PathId::new(0),
        &waypoints,
        Color::from_rgb(0xc2, 0xa8, 0x78),
        TILE_SIZE,
    )
}

/// Tower layout placed before the first wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TowerPreset {
    /// No towers; every enemy leaks.
    Empty,
    /// A handful of tier-1 towers.
    Starter,
    /// One tier-3 tower of every element plus supports.
    Elemental,
    /// Tier-4 specialists backed by every support kind.
    Masters,
}

/// One tower to place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Placement {
    Attack {
        element: Element,
        tier: Tier,
        role: Option<Role>,
        grid: GridCoord,
    },
    Support {
        kind: SupportKind,
        tier: Tier,
        grid: GridCoord,
    },
}

const fn attack(element: Element, tier: Tier, role: Option<Role>, column: i32, row: i32) -> Placement {
    Placement::Attack {
        element,
        tier,
        role,
        grid: GridCoord::new(column, row),
    }
}

const fn support(kind: SupportKind, tier: Tier, column: i32, row: i32) -> Placement {
    Placement::Support {
        kind,
        tier,
        grid: GridCoord::new(column, row),
    }
}

impl TowerPreset {
    /// Towers the preset places, all off the demo path.
    pub(crate) fn placements(self) -> Vec<Placement> {
        match self {
            TowerPreset::Empty => Vec::new(),
            TowerPreset::Starter => vec![
                attack(Element::Fire, Tier::One, None, 4, 3),
                attack(Element::Water, Tier::One, None, 9, 3),
                attack(Element::Electric, Tier::One, None, 14, 3),
                attack(Element::Light, Tier::One, None, 8, 7),
            ],
            TowerPreset::Elemental => vec![
                attack(Element::Fire, Tier::Three, None, 3, 3),
                attack(Element::Water, Tier::Three, None, 7, 3),
                attack(Element::Electric, Tier::Three, None, 11, 3),
                attack(Element::Wind, Tier::Three, None, 15, 3),
                attack(Element::Void, Tier::Three, None, 6, 7),
                attack(Element::Light, Tier::Three, None, 12, 7),
                support(SupportKind::Damage, Tier::Two, 9, 3),
                support(SupportKind::AttackSpeed, Tier::Two, 9, 7),
            ],
            TowerPreset::Masters => vec![
                attack(Element::Fire, Tier::Four, Some(Role::Inferno), 3, 3),
                attack(Element::Water, Tier::Four, Some(Role::Glacier), 6, 3),
                attack(Element::Electric, Tier::Four, Some(Role::Storm), 9, 3),
                attack(Element::Wind, Tier::Four, Some(Role::Vortex), 12, 3),
                attack(Element::Void, Tier::Four, Some(Role::Catalyst), 15, 3),
                attack(Element::Light, Tier::Four, Some(Role::Radiant), 10, 7),
                support(SupportKind::Damage, Tier::Three, 4, 7),
                support(SupportKind::AttackSpeed, Tier::Three, 7, 7),
                support(SupportKind::ArmorShred, Tier::Three, 13, 7),
                support(SupportKind::Range, Tier::Three, 16, 7),
            ],
        }
    }
}
