//! Static decoration catalog: every placeable kind, its sprite metrics,
//! footprint, and harvesting profile.

use loam_world::resource::ResourceKind;
use serde::{Deserialize, Serialize};

/// Logical pixel size of one tile; sprite sizes divide into footprints
/// against this.
pub const TILE_PX: u32 = 60;

/// Broad decoration family, driving placement density and clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecorationCategory {
    /// Large woody decorations
    Tree,
    /// Small shrubs and ferns
    Bush,
    /// Ancient stone remnants
    Ruin,
}

impl DecorationCategory {
    /// Placement attempts allowed per requested instance.
    #[must_use]
    pub const fn retry_factor(self) -> u32 {
        match self {
            Self::Tree => 15,
            Self::Bush => 12,
            Self::Ruin => 20,
        }
    }

    /// Probability that a successful placement seeds a cluster of
    /// nearby extras.
    #[must_use]
    pub const fn cluster_chance(self) -> f64 {
        match self {
            Self::Tree => 0.3,
            Self::Bush => 0.4,
            Self::Ruin => 0.0,
        }
    }

    /// Maximum per-axis offset of a cluster extra from its seed anchor.
    #[must_use]
    pub const fn cluster_jitter(self) -> i32 {
        match self {
            Self::Tree => 2,
            Self::Bush => 1,
            Self::Ruin => 0,
        }
    }

    /// Upper bound on additional instances spawned by one cluster.
    #[must_use]
    pub const fn max_cluster_extra(self) -> u32 {
        match self {
            Self::Tree => 3,
            Self::Bush => 4,
            Self::Ruin => 0,
        }
    }

    /// Whether members may stand on any dry cell (tilled, planted, or
    /// rocky); other categories require open ground.
    #[must_use]
    pub const fn allows_tilled_ground(self) -> bool {
        matches!(self, Self::Bush)
    }
}

/// A concrete placeable decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecorationKind {
    /// Common broadleaf tree
    Oak,
    /// Slender white-barked tree
    Birch,
    /// Evergreen conifer
    Pine,
    /// Fruit-bearing apple tree
    AppleTree,
    /// Fruit-bearing peach tree
    PeachTree,
    /// Fruit-bearing cherry tree
    CherryTree,
    /// Oak in autumn colors
    AutumnOak,
    /// Birch in autumn colors
    AutumnBirch,
    /// Straight coastal palm
    Palm,
    /// Leaning coastal palm
    CurvedPalm,
    /// Dense round shrub
    RoundBush,
    /// Low spreading shrub
    WideBush,
    /// Sparse young shrub
    SmallBush,
    /// Red-flowering shrub
    RoseBush,
    /// Purple-flowering shrub
    LavenderBush,
    /// White-flowering shrub
    JasmineBush,
    /// Yellow-flowering shrub
    GorseBush,
    /// Common forest fern
    Fern,
    /// Broad-fronded fern
    TallFern,
    /// Weathered brown pillar
    BrownPillar,
    /// Collapsed brown wall
    BrownWall,
    /// Broken brown archway
    BrownArch,
    /// Sand-worn pillar
    SandPillar,
    /// Sand-worn wall fragment
    SandWall,
}

/// All tree kinds, in roster order.
pub const TREES: [DecorationKind; 10] = [
    DecorationKind::Oak,
    DecorationKind::Birch,
    DecorationKind::Pine,
    DecorationKind::AppleTree,
    DecorationKind::PeachTree,
    DecorationKind::CherryTree,
    DecorationKind::AutumnOak,
    DecorationKind::AutumnBirch,
    DecorationKind::Palm,
    DecorationKind::CurvedPalm,
];

/// All bush kinds, in roster order.
pub const BUSHES: [DecorationKind; 9] = [
    DecorationKind::RoundBush,
    DecorationKind::WideBush,
    DecorationKind::SmallBush,
    DecorationKind::RoseBush,
    DecorationKind::LavenderBush,
    DecorationKind::JasmineBush,
    DecorationKind::GorseBush,
    DecorationKind::Fern,
    DecorationKind::TallFern,
];

/// All ruin kinds, in roster order.
pub const RUINS: [DecorationKind; 5] = [
    DecorationKind::BrownPillar,
    DecorationKind::BrownWall,
    DecorationKind::BrownArch,
    DecorationKind::SandPillar,
    DecorationKind::SandWall,
];

impl DecorationKind {
    /// The kind's family.
    #[must_use]
    pub const fn category(self) -> DecorationCategory {
        match self {
            Self::Oak
            | Self::Birch
            | Self::Pine
            | Self::AppleTree
            | Self::PeachTree
            | Self::CherryTree
            | Self::AutumnOak
            | Self::AutumnBirch
            | Self::Palm
            | Self::CurvedPalm => DecorationCategory::Tree,
            Self::RoundBush
            | Self::WideBush
            | Self::SmallBush
            | Self::RoseBush
            | Self::LavenderBush
            | Self::JasmineBush
            | Self::GorseBush
            | Self::Fern
            | Self::TallFern => DecorationCategory::Bush,
            Self::BrownPillar
            | Self::BrownWall
            | Self::BrownArch
            | Self::SandPillar
            | Self::SandWall => DecorationCategory::Ruin,
        }
    }

    /// Sprite dimensions in pixels, `(width, height)`.
    #[must_use]
    pub const fn size_px(self) -> (u32, u32) {
        match self.category() {
            DecorationCategory::Tree => match self {
                Self::Palm | Self::CurvedPalm => (64, 96),
                _ => (80, 96),
            },
            DecorationCategory::Bush => (48, 48),
            DecorationCategory::Ruin => (64, 64),
        }
    }

    /// Footprint in tiles, `(width, height)`: sprite size divided by
    /// [`TILE_PX`], rounded up.
    #[must_use]
    pub const fn footprint(self) -> (u32, u32) {
        let (w, h) = self.size_px();
        (w.div_ceil(TILE_PX), h.div_ceil(TILE_PX))
    }

    /// Whether entities can walk through this decoration.
    #[must_use]
    pub const fn walkable(self) -> bool {
        matches!(self.category(), DecorationCategory::Bush)
    }

    /// Draw layer: bushes render under entities, trees and ruins over.
    #[must_use]
    pub const fn layer(self) -> u8 {
        match self.category() {
            DecorationCategory::Bush => 1,
            DecorationCategory::Tree | DecorationCategory::Ruin => 3,
        }
    }

    /// Strikes needed to deplete this decoration.
    #[must_use]
    pub const fn max_hits(self) -> u32 {
        match self.category() {
            DecorationCategory::Tree => 3,
            DecorationCategory::Bush => 1,
            DecorationCategory::Ruin => 5,
        }
    }

    /// What harvesting this decoration yields.
    #[must_use]
    pub const fn resource(self) -> ResourceKind {
        match self {
            Self::Oak | Self::Birch | Self::Pine => ResourceKind::CommonWood,
            Self::AppleTree
            | Self::PeachTree
            | Self::CherryTree
            | Self::AutumnOak
            | Self::AutumnBirch => ResourceKind::FruitWood,
            Self::Palm | Self::CurvedPalm => ResourceKind::PalmWood,
            Self::RoundBush | Self::WideBush | Self::SmallBush | Self::Fern | Self::TallFern => {
                ResourceKind::GreenFiber
            }
            Self::RoseBush | Self::LavenderBush | Self::JasmineBush | Self::GorseBush => {
                ResourceKind::FlowerFiber
            }
            Self::BrownPillar
            | Self::BrownWall
            | Self::BrownArch
            | Self::SandPillar
            | Self::SandWall => ResourceKind::RuinStone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprints_from_sprite_size() {
        assert_eq!(DecorationKind::Oak.footprint(), (2, 2));
        assert_eq!(DecorationKind::Palm.footprint(), (2, 2));
        assert_eq!(DecorationKind::RoundBush.footprint(), (1, 1));
        assert_eq!(DecorationKind::BrownPillar.footprint(), (2, 2));
    }

    #[test]
    fn test_only_bushes_are_walkable() {
        for kind in TREES.iter().chain(&RUINS) {
            assert!(!kind.walkable(), "{kind:?} should block movement");
        }
        for kind in &BUSHES {
            assert!(kind.walkable(), "{kind:?} should be walkable");
        }
    }

    #[test]
    fn test_roster_categories_consistent() {
        assert!(TREES.iter().all(|k| k.category() == DecorationCategory::Tree));
        assert!(BUSHES.iter().all(|k| k.category() == DecorationCategory::Bush));
        assert!(RUINS.iter().all(|k| k.category() == DecorationCategory::Ruin));
    }

    #[test]
    fn test_clustering_categories_allow_extras() {
        for category in [
            DecorationCategory::Tree,
            DecorationCategory::Bush,
            DecorationCategory::Ruin,
        ] {
            if category.cluster_chance() > 0.0 {
                assert!(
                    category.max_cluster_extra() >= 1,
                    "{category:?} clusters but allows no extras"
                );
            }
        }
    }

    #[test]
    fn test_harvest_profiles() {
        assert_eq!(DecorationKind::Oak.max_hits(), 3);
        assert_eq!(DecorationKind::Fern.max_hits(), 1);
        assert_eq!(DecorationKind::SandWall.max_hits(), 5);
        assert_eq!(DecorationKind::Palm.resource(), ResourceKind::PalmWood);
        assert_eq!(DecorationKind::RoseBush.resource(), ResourceKind::FlowerFiber);
    }
}
