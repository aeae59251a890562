//! Seeded decoration placement and the runtime decoration registry.

use loam_common::{TerrainKind, TileCoord};
use loam_world::resource::{ResourceKind, Tool};
use loam_world::world::World;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::{DecorationCategory, DecorationKind, BUSHES, RUINS, TREES};
use crate::decoration::Decoration;

/// Footprints keep this many cells clear of the map border.
const BORDER_MARGIN: i32 = 2;

/// Anchors keep at least this distance from the spawn point.
const SPAWN_CLEARANCE: f64 = 5.0;

/// Requested instance counts per category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecorTargets {
    /// Trees to place
    pub trees: u32,
    /// Bushes to place
    pub bushes: u32,
    /// Ruins to place
    pub ruins: u32,
}

impl DecorTargets {
    /// Density-scaled defaults for a map of the given dimensions.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn for_area(width: u32, height: u32) -> Self {
        let area = u64::from(width) * u64::from(height);
        Self {
            trees: (area / 35).max(200) as u32,
            bushes: (area / 20).max(300) as u32,
            ruins: (area / 1200).max(15) as u32,
        }
    }
}

/// Decoration placement configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecorConfig {
    /// Placement seed, independent of the terrain seed
    pub seed: u64,
    /// Explicit counts; `None` scales with map area
    pub targets: Option<DecorTargets>,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            targets: None,
        }
    }
}

/// One successful harvest strike's yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceYield {
    /// What was extracted
    pub kind: ResourceKind,
    /// How many units
    pub amount: u32,
}

/// Owns every placed decoration and answers position queries for them.
///
/// Built once per world by [`DecorationManager::populate`]; placement is
/// fully determined by the config seed and the world's terrain.
#[derive(Debug)]
pub struct DecorationManager {
    decorations: Vec<Decoration>,
    rng: fastrand::Rng,
}

impl DecorationManager {
    /// Scatters decorations across the world and installs the resulting
    /// obstruction mask into it.
    ///
    /// Each category gets `target * retry_factor` random anchor attempts;
    /// a successful placement may seed a small cluster of the same kind
    /// nearby. Dense or watery maps can exhaust the attempt budget below
    /// target, which is logged and otherwise fine.
    pub fn populate(world: &mut World, config: DecorConfig) -> Self {
        let mut rng = fastrand::Rng::with_seed(config.seed);
        let targets = config
            .targets
            .unwrap_or_else(|| DecorTargets::for_area(world.width(), world.height()));

        let mut decorations = Vec::new();
        for (category, roster, target) in [
            (DecorationCategory::Tree, &TREES[..], targets.trees),
            (DecorationCategory::Bush, &BUSHES[..], targets.bushes),
            (DecorationCategory::Ruin, &RUINS[..], targets.ruins),
        ] {
            place_category(world, &mut decorations, &mut rng, category, roster, target);
        }

        let obstructions: Vec<TileCoord> = decorations
            .iter()
            .filter(|d| !d.kind().walkable())
            .flat_map(footprint_cells)
            .collect();
        world.set_obstructions(obstructions);

        info!(placed = decorations.len(), "populated world decorations");
        Self { decorations, rng }
    }

    /// Every placed decoration, in placement order.
    #[must_use]
    pub fn all(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Decorations on a given draw layer.
    pub fn by_layer(&self, layer: u8) -> impl Iterator<Item = &Decoration> {
        self.decorations.iter().filter(move |d| d.kind().layer() == layer)
    }

    /// Number of placed decorations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    /// Whether no decorations were placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// The decoration covering a coordinate, if any.
    #[must_use]
    pub fn decoration_at(&self, x: i32, y: i32) -> Option<&Decoration> {
        self.decorations.iter().find(|d| d.covers(x, y))
    }

    /// Whether no blocking decoration covers a coordinate. Terrain
    /// walkability is the world's concern, not answered here.
    #[must_use]
    pub fn is_position_walkable(&self, x: i32, y: i32) -> bool {
        !self
            .decorations
            .iter()
            .any(|d| !d.kind().walkable() && d.covers(x, y))
    }

    /// Strikes the decoration covering a coordinate, rolling a yield
    /// amount on success.
    ///
    /// Depleted decorations stay in the registry (and keep obstructing):
    /// a harvested tree leaves a stump.
    pub fn harvest_at(&mut self, x: i32, y: i32, tool: Option<Tool>) -> Option<ResourceYield> {
        let decoration = self.decorations.iter_mut().find(|d| d.covers(x, y))?;
        let kind = decoration.harvest(tool)?;
        let amount = kind.roll_yield(&mut self.rng);
        debug!(?kind, amount, x, y, "harvested decoration");
        Some(ResourceYield { kind, amount })
    }
}

fn place_category(
    world: &mut World,
    decorations: &mut Vec<Decoration>,
    rng: &mut fastrand::Rng,
    category: DecorationCategory,
    roster: &[DecorationKind],
    target: u32,
) {
    let width = world.width() as i32;
    let height = world.height() as i32;
    let budget = target * category.retry_factor();

    let mut placed = 0;
    let mut attempts = 0;
    while placed < target && attempts < budget {
        attempts += 1;
        let kind = roster[rng.usize(..roster.len())];
        let (fw, fh) = kind.footprint();
        let max_x = width - BORDER_MARGIN - fw as i32;
        let max_y = height - BORDER_MARGIN - fh as i32;
        if max_x < BORDER_MARGIN || max_y < BORDER_MARGIN {
            break;
        }
        let anchor = TileCoord::new(
            rng.i32(BORDER_MARGIN..=max_x),
            rng.i32(BORDER_MARGIN..=max_y),
        );
        if !valid_placement(world, decorations, anchor, kind) {
            continue;
        }
        decorations.push(Decoration::new(anchor, kind));
        placed += 1;

        let extras_max = category.max_cluster_extra();
        if rng.f64() < category.cluster_chance() && extras_max > 0 {
            let jitter = category.cluster_jitter();
            let extras = rng.u32(1..=extras_max);
            for _ in 0..extras {
                if placed >= target {
                    break;
                }
                let candidate = TileCoord::new(
                    anchor.x + rng.i32(-jitter..=jitter),
                    anchor.y + rng.i32(-jitter..=jitter),
                );
                if valid_placement(world, decorations, candidate, kind) {
                    decorations.push(Decoration::new(candidate, kind));
                    placed += 1;
                }
            }
        }
    }

    if placed < target {
        warn!(?category, placed, target, "attempt budget exhausted below target");
    } else {
        debug!(?category, placed, attempts, "category placement complete");
    }
}

fn valid_placement(
    world: &mut World,
    decorations: &[Decoration],
    anchor: TileCoord,
    kind: DecorationKind,
) -> bool {
    let (fw, fh) = kind.footprint();
    let width = world.width() as i32;
    let height = world.height() as i32;
    if anchor.x < BORDER_MARGIN
        || anchor.y < BORDER_MARGIN
        || anchor.x + fw as i32 > width - BORDER_MARGIN
        || anchor.y + fh as i32 > height - BORDER_MARGIN
    {
        return false;
    }

    // Spawn clearance is measured from the anchor alone; trailing
    // footprint cells may dip inside the radius.
    if anchor.distance_to(world.spawn()) < SPAWN_CLEARANCE {
        return false;
    }

    let open_ground_only = !kind.category().allows_tilled_ground();
    for cy in anchor.y..anchor.y + fh as i32 {
        for cx in anchor.x..anchor.x + fw as i32 {
            let ok = match world.terrain_at(cx, cy) {
                Some(TerrainKind::Water) | None => false,
                Some(TerrainKind::Ground) => true,
                Some(_) => !open_ground_only,
            };
            if !ok {
                return false;
            }
            if decorations.iter().any(|d| d.covers(cx, cy)) {
                return false;
            }
        }
    }
    true
}

fn footprint_cells(decoration: &Decoration) -> Vec<TileCoord> {
    let anchor = decoration.anchor();
    let (fw, fh) = decoration.kind().footprint();
    let mut cells = Vec::with_capacity((fw * fh) as usize);
    for dy in 0..fh as i32 {
        for dx in 0..fw as i32 {
            cells.push(TileCoord::new(anchor.x + dx, anchor.y + dy));
        }
    }
    cells
}
