//! Terrain kind catalog.
//!
//! The closed set of ground types a tile can carry. Catalog data
//! (walkability, map color) is attached as const methods so the enum acts
//! as an immutable value table.

use serde::{Deserialize, Serialize};

/// Ground type of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Open grassy ground; tillable and walkable.
    #[default]
    Ground,
    /// Tilled soil, ready for planting.
    Tilled,
    /// Water; blocks movement.
    Water,
    /// Rock; blocks movement and carries a stone resource until depleted.
    Rock,
    /// Tilled soil with a growing crop.
    Planted,
}

impl TerrainKind {
    /// Whether entities can stand on this terrain.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Water | Self::Rock)
    }

    /// Flat map color for minimap/debug rendering.
    #[must_use]
    pub const fn color(self) -> [u8; 3] {
        match self {
            Self::Ground => [0, 200, 0],
            Self::Tilled => [139, 90, 43],
            Self::Water => [30, 144, 255],
            Self::Rock => [128, 128, 128],
            Self::Planted => [101, 67, 33],
        }
    }

    /// Display name of this terrain kind.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ground => "Ground",
            Self::Tilled => "Tilled Soil",
            Self::Water => "Water",
            Self::Rock => "Rock",
            Self::Planted => "Planted Soil",
        }
    }
}
