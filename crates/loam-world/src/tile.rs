//! Single grid cell: terrain kind, optional crop, optional resource.

use loam_common::TerrainKind;
use serde::{Deserialize, Serialize};

use crate::crop::{Crop, CropKind};
use crate::resource::{ResourceKind, ResourceNode, Tool};

/// Strikes needed to break the stone on a rock tile.
const ROCK_HITS: u32 = 3;

/// A single tile of the world grid.
///
/// Tiles are created at materialization time from the generated terrain
/// kind and live as long as their owning chunk. All mutations go through
/// the till/plant/harvest operations; failed preconditions are reported as
/// no-ops, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    kind: TerrainKind,
    crop: Option<Crop>,
    resource: Option<ResourceNode>,
}

impl Tile {
    /// Creates a tile of the given terrain kind.
    ///
    /// Rock tiles start with a finite stone resource; all other kinds
    /// carry none.
    #[must_use]
    pub const fn new(kind: TerrainKind) -> Self {
        let resource = match kind {
            TerrainKind::Rock => Some(ResourceNode::new(ResourceKind::CommonStone, ROCK_HITS)),
            _ => None,
        };
        Self {
            kind,
            crop: None,
            resource,
        }
    }

    /// The tile's terrain kind.
    #[must_use]
    pub const fn kind(&self) -> TerrainKind {
        self.kind
    }

    /// The growing crop, if any.
    #[must_use]
    pub const fn crop(&self) -> Option<&Crop> {
        self.crop.as_ref()
    }

    /// Whether a crop is planted here.
    #[must_use]
    pub const fn has_crop(&self) -> bool {
        self.crop.is_some()
    }

    /// The attached resource node, if any.
    #[must_use]
    pub const fn resource(&self) -> Option<&ResourceNode> {
        self.resource.as_ref()
    }

    /// Whether an undepleted resource remains on this tile.
    #[must_use]
    pub fn has_resource(&self) -> bool {
        self.resource.is_some_and(|r| !r.is_depleted())
    }

    /// Converts open ground to tilled soil.
    ///
    /// Returns whether the tile changed; any other terrain kind is a
    /// no-op.
    pub fn till_soil(&mut self) -> bool {
        if self.kind == TerrainKind::Ground {
            self.kind = TerrainKind::Tilled;
            self.check_invariants();
            true
        } else {
            false
        }
    }

    /// Plants a crop on tilled soil.
    ///
    /// Succeeds only on tilled ground with no existing crop; the tile
    /// transitions to planted soil holding a zero-growth crop.
    pub fn plant_crop(&mut self, kind: CropKind) -> bool {
        if self.kind == TerrainKind::Tilled && self.crop.is_none() {
            self.crop = Some(Crop::new(kind));
            self.kind = TerrainKind::Planted;
            self.check_invariants();
            true
        } else {
            false
        }
    }

    /// Advances the crop here by one day, if present.
    pub fn grow_crop(&mut self) {
        if let Some(crop) = &mut self.crop {
            crop.grow();
        }
    }

    /// Harvests a mature crop.
    ///
    /// Returns the harvested crop and reverts the tile to tilled soil;
    /// `None` if there is no crop or it is not yet mature.
    pub fn harvest_crop(&mut self) -> Option<Crop> {
        if self.crop.is_some_and(|c| c.is_mature()) {
            let harvested = self.crop.take();
            self.kind = TerrainKind::Tilled;
            self.check_invariants();
            harvested
        } else {
            None
        }
    }

    /// Attempts one resource-extraction strike on this tile.
    ///
    /// Same contract as [`ResourceNode::strike`]; additionally, a rock
    /// tile whose stone is fully extracted reverts to open ground.
    pub fn harvest_resource(&mut self, tool: Option<Tool>) -> Option<ResourceKind> {
        let node = self.resource.as_mut()?;
        let collected = node.strike(tool)?;
        if node.is_depleted() && self.kind == TerrainKind::Rock {
            self.kind = TerrainKind::Ground;
        }
        Some(collected)
    }

    /// Planted soil and a crop must always coexist.
    fn check_invariants(&self) {
        debug_assert_eq!(
            self.kind == TerrainKind::Planted,
            self.crop.is_some(),
            "planted terrain and crop presence out of sync"
        );
    }
}
