//! Biome catalog and noise-based classification.

use serde::{Deserialize, Serialize};

/// Noise-derived region classification.
///
/// Biomes pick the terrain kind during generation and carry cosmetic and
/// fertility metadata for collaborators; they are not stored per tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    /// Fertile open grassland; the default.
    Plains,
    /// Wet, tree-heavy region.
    Forest,
    /// Dry region, poor fertility.
    Desert,
    /// Low-elevation water body.
    Lake,
    /// High-elevation region; rock above a second cutoff.
    Mountain,
    /// Wet lowland.
    Swamp,
}

impl Biome {
    /// Classifies an (elevation, moisture) noise pair into a biome.
    ///
    /// Fixed thresholds; both inputs are in `[0, 1]`.
    #[must_use]
    pub fn classify(elevation: f64, moisture: f64) -> Self {
        if elevation < 0.2 {
            return Self::Lake;
        }
        if elevation > 0.8 {
            return Self::Mountain;
        }
        if moisture < 0.3 {
            return Self::Desert;
        }
        if moisture > 0.7 && elevation < 0.4 {
            return Self::Swamp;
        }
        if moisture > 0.5 {
            return Self::Forest;
        }
        Self::Plains
    }

    /// Crop growth-speed multiplier for soil in this biome.
    #[must_use]
    pub const fn fertility(self) -> f64 {
        match self {
            Self::Plains => 0.7,
            Self::Forest => 0.3,
            Self::Desert => 0.1,
            Self::Lake => 0.0,
            Self::Mountain => 0.2,
            Self::Swamp => 0.4,
        }
    }

    /// Flat map color for minimap/debug rendering.
    #[must_use]
    pub const fn color(self) -> [u8; 3] {
        match self {
            Self::Plains => [0, 180, 0],
            Self::Forest => [34, 139, 34],
            Self::Desert => [210, 180, 140],
            Self::Lake => [30, 144, 255],
            Self::Mountain => [128, 128, 128],
            Self::Swamp => [85, 107, 47],
        }
    }

    /// Display name of this biome.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Plains => "Plains",
            Self::Forest => "Forest",
            Self::Desert => "Desert",
            Self::Lake => "Lake",
            Self::Mountain => "Mountain",
            Self::Swamp => "Swamp",
        }
    }
}
