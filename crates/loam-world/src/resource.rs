//! Harvestable resource catalog and per-tile resource state.

use serde::{Deserialize, Serialize};

/// Tools that gate resource extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Chops wood.
    Axe,
    /// Breaks stone.
    Pickaxe,
}

/// Resource dropped by a tile or decoration when harvested.
///
/// Required tool and yield range are explicit catalog fields rather than
/// being derived from the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Wood from ordinary trees.
    CommonWood,
    /// Wood from fruit trees.
    FruitWood,
    /// Wood from palms.
    PalmWood,
    /// Fiber from plain bushes and ferns.
    GreenFiber,
    /// Fiber from flowering bushes.
    FlowerFiber,
    /// Stone from rock tiles.
    CommonStone,
    /// Stone salvaged from ruins.
    RuinStone,
}

impl ResourceKind {
    /// Tool required to extract this resource; `None` means bare hands.
    #[must_use]
    pub const fn required_tool(self) -> Option<Tool> {
        match self {
            Self::CommonWood | Self::FruitWood | Self::PalmWood => Some(Tool::Axe),
            Self::CommonStone | Self::RuinStone => Some(Tool::Pickaxe),
            Self::GreenFiber | Self::FlowerFiber => None,
        }
    }

    /// Inclusive (min, max) units dropped per successful strike.
    #[must_use]
    pub const fn yield_range(self) -> (u32, u32) {
        match self {
            Self::CommonWood => (2, 3),
            Self::FruitWood => (2, 4),
            Self::PalmWood => (1, 2),
            Self::GreenFiber => (1, 2),
            Self::FlowerFiber => (1, 3),
            Self::CommonStone => (2, 4),
            Self::RuinStone => (3, 5),
        }
    }

    /// Rolls a drop quantity inside the yield range.
    #[must_use]
    pub fn roll_yield(self, rng: &mut fastrand::Rng) -> u32 {
        let (min, max) = self.yield_range();
        if min == max {
            min
        } else {
            rng.u32(min..=max)
        }
    }

    /// Display name of this resource.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CommonWood => "Common Wood",
            Self::FruitWood => "Fruit Tree Wood",
            Self::PalmWood => "Palm Wood",
            Self::GreenFiber => "Green Fiber",
            Self::FlowerFiber => "Flower Fiber",
            Self::CommonStone => "Common Stone",
            Self::RuinStone => "Ruin Stone",
        }
    }
}

/// Finite resource attached to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNode {
    kind: ResourceKind,
    hits_left: u32,
    depleted: bool,
}

impl ResourceNode {
    /// Creates a node with the given hit budget.
    #[must_use]
    pub const fn new(kind: ResourceKind, hits: u32) -> Self {
        Self {
            kind,
            hits_left: hits,
            depleted: false,
        }
    }

    /// Attempts one extraction strike.
    ///
    /// A depleted node, or a strike with the wrong (or missing) required
    /// tool, collects nothing and does not consume a hit. Otherwise the
    /// hit counter drops and the resource kind is returned; at zero the
    /// node is marked depleted.
    pub fn strike(&mut self, tool: Option<Tool>) -> Option<ResourceKind> {
        if self.depleted {
            return None;
        }
        if let Some(required) = self.kind.required_tool() {
            if tool != Some(required) {
                return None;
            }
        }
        self.hits_left = self.hits_left.saturating_sub(1);
        if self.hits_left == 0 {
            self.depleted = true;
        }
        Some(self.kind)
    }

    /// Whether the node has been fully extracted.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.depleted
    }

    /// The resource this node drops.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Strikes remaining before depletion.
    #[must_use]
    pub const fn hits_left(&self) -> u32 {
        self.hits_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_tool_is_a_no_op() {
        let mut node = ResourceNode::new(ResourceKind::CommonStone, 3);
        assert_eq!(node.strike(Some(Tool::Axe)), None);
        assert_eq!(node.strike(None), None);
        assert_eq!(node.hits_left(), 3);
        assert!(!node.is_depleted());
    }

    #[test]
    fn test_depletes_after_hit_budget() {
        let mut node = ResourceNode::new(ResourceKind::CommonStone, 3);
        for _ in 0..3 {
            assert_eq!(node.strike(Some(Tool::Pickaxe)), Some(ResourceKind::CommonStone));
        }
        assert!(node.is_depleted());
        assert_eq!(node.strike(Some(Tool::Pickaxe)), None);
    }

    #[test]
    fn test_fiber_needs_no_tool() {
        let mut node = ResourceNode::new(ResourceKind::GreenFiber, 1);
        assert_eq!(node.strike(None), Some(ResourceKind::GreenFiber));
        assert!(node.is_depleted());
    }

    #[test]
    fn test_yield_roll_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..100 {
            let amount = ResourceKind::RuinStone.roll_yield(&mut rng);
            assert!((3..=5).contains(&amount));
        }
    }
}
