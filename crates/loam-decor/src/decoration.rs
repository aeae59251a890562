//! A placed decoration instance and its harvest state.

use loam_common::TileCoord;
use loam_world::resource::{ResourceKind, Tool};
use serde::{Deserialize, Serialize};

use crate::catalog::DecorationKind;

/// One decoration placed in the world.
///
/// The anchor is the top-left cell of the footprint; multi-cell kinds
/// cover a rectangle extending right and down from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decoration {
    anchor: TileCoord,
    kind: DecorationKind,
    hits_left: u32,
    depleted: bool,
}

impl Decoration {
    /// Places a fresh instance at full hit points.
    #[must_use]
    pub const fn new(anchor: TileCoord, kind: DecorationKind) -> Self {
        Self {
            anchor,
            kind,
            hits_left: kind.max_hits(),
            depleted: false,
        }
    }

    /// Top-left footprint cell.
    #[must_use]
    pub const fn anchor(&self) -> TileCoord {
        self.anchor
    }

    /// The catalog kind.
    #[must_use]
    pub const fn kind(&self) -> DecorationKind {
        self.kind
    }

    /// Remaining strikes before depletion.
    #[must_use]
    pub const fn hits_left(&self) -> u32 {
        self.hits_left
    }

    /// Whether this instance has been harvested out.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.depleted
    }

    /// Fraction of hits already taken, in `[0, 1]`.
    #[must_use]
    pub fn harvest_progress(&self) -> f64 {
        let max = self.kind.max_hits();
        f64::from(max - self.hits_left) / f64::from(max)
    }

    /// Whether the footprint covers a world coordinate.
    #[must_use]
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let (w, h) = self.kind.footprint();
        x >= self.anchor.x
            && y >= self.anchor.y
            && x < self.anchor.x + w as i32
            && y < self.anchor.y + h as i32
    }

    /// Attempts one harvest strike.
    ///
    /// Fails without consuming a hit when the instance is already
    /// depleted or the tool does not match the yield's requirement.
    /// Returns the yielded resource kind on success; the caller rolls
    /// the amount.
    pub fn harvest(&mut self, tool: Option<Tool>) -> Option<ResourceKind> {
        if self.depleted {
            return None;
        }
        let resource = self.kind.resource();
        if let Some(required) = resource.required_tool() {
            if tool != Some(required) {
                return None;
            }
        }
        self.hits_left -= 1;
        if self.hits_left == 0 {
            self.depleted = true;
        }
        Some(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_footprint_rectangle() {
        let oak = Decoration::new(TileCoord::new(10, 20), DecorationKind::Oak);
        assert!(oak.covers(10, 20));
        assert!(oak.covers(11, 21));
        assert!(!oak.covers(12, 20));
        assert!(!oak.covers(9, 20));
        assert!(!oak.covers(10, 22));

        let fern = Decoration::new(TileCoord::new(0, 0), DecorationKind::Fern);
        assert!(fern.covers(0, 0));
        assert!(!fern.covers(1, 0));
    }

    #[test]
    fn test_tree_needs_axe() {
        let mut oak = Decoration::new(TileCoord::new(0, 0), DecorationKind::Oak);
        assert!(oak.harvest(None).is_none());
        assert!(oak.harvest(Some(Tool::Pickaxe)).is_none());
        assert_eq!(oak.hits_left(), 3);
        assert_eq!(oak.harvest(Some(Tool::Axe)), Some(ResourceKind::CommonWood));
        assert_eq!(oak.hits_left(), 2);
    }

    #[test]
    fn test_bush_harvests_bare_handed() {
        let mut fern = Decoration::new(TileCoord::new(0, 0), DecorationKind::Fern);
        assert_eq!(fern.harvest(None), Some(ResourceKind::GreenFiber));
        assert!(fern.is_depleted());
        assert!(fern.harvest(None).is_none());
    }

    #[test]
    fn test_ruin_depletes_after_five_strikes() {
        let mut pillar = Decoration::new(TileCoord::new(0, 0), DecorationKind::BrownPillar);
        for _ in 0..5 {
            assert!(!pillar.is_depleted());
            assert!(pillar.harvest(Some(Tool::Pickaxe)).is_some());
        }
        assert!(pillar.is_depleted());
        assert!((pillar.harvest_progress() - 1.0).abs() < f64::EPSILON);
    }
}
