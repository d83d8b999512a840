//! Continuous and grid geometry shared by every combat system.

pub use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::ids::PathId;

/// Side length of a single grid tile measured in pixels.
pub const TILE_SIZE: f32 = 40.0;

/// Location of a single grid tile expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    column: i32,
    row: i32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the tile.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Zero-based row index of the tile.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Pixel position of the tile's centre for the provided tile size.
    #[must_use]
    pub fn center(self, tile_size: f32) -> Vec2 {
        Vec2::new(
            self.column as f32 * tile_size + tile_size / 2.0,
            self.row as f32 * tile_size + tile_size / 2.0,
        )
    }
}

/// Display colour passed through to the presentation layer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Creates a new colour from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the colour.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the colour.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the colour.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Ordered waypoint sequence enemies follow from spawn to exit.
///
/// Paths are produced by the external map generator as integer grid
/// waypoints and converted to pixel centres once, when the stage loads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    id: PathId,
    waypoints: Vec<Vec2>,
    color: Color,
}

impl Path {
    /// Creates a path from grid waypoints, converting each to its pixel centre.
    #[must_use]
    pub fn from_grid(id: PathId, waypoints: &[GridCoord], color: Color, tile_size: f32) -> Self {
        Self {
            id,
            waypoints: waypoints
                .iter()
                .map(|coord| coord.center(tile_size))
                .collect(),
            color,
        }
    }

    /// Creates a path from waypoints already expressed in pixels.
    #[must_use]
    pub fn from_points(id: PathId, waypoints: Vec<Vec2>, color: Color) -> Self {
        Self {
            id,
            waypoints,
            color,
        }
    }

    /// Identifier of the path.
    #[must_use]
    pub const fn id(&self) -> PathId {
        self.id
    }

    /// Display colour assigned by the map generator.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Every waypoint of the path in travel order.
    #[must_use]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Retrieves the waypoint at `index`, if it exists.
    #[must_use]
    pub fn waypoint(&self, index: usize) -> Option<Vec2> {
        self.waypoints.get(index).copied()
    }

    /// Spawn location of the path, or the origin for an empty path.
    #[must_use]
    pub fn start(&self) -> Vec2 {
        self.waypoints.first().copied().unwrap_or(Vec2::ZERO)
    }

    /// Index of the final waypoint; reaching it means the enemy leaked.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }
}
