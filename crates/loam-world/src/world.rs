//! World facade: the single source of truth for terrain queries and
//! world-level mutations.

use ahash::AHashSet;
use loam_common::{ChunkCoord, TerrainKind, TileCoord, WorldError, WorldResult};
use loam_worldgen::{GeneratorConfig, TerrainGenerator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::crop::{Crop, CropKind};
use crate::resource::{ResourceKind, Tool};
use crate::storage::{ChunkedGrid, DenseGrid, GridStorage};
use crate::tile::Tile;

/// Largest cell count stored as a flat dense array; anything bigger uses
/// the chunk arena.
pub const DENSE_CELL_LIMIT: u64 = 10_000;

/// World construction configuration: the only external inputs to the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    /// Generation seed
    pub seed: i64,
    /// Spawn point; defaults to the map center
    pub spawn: Option<TileCoord>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 150,
            height: 150,
            seed: 12345,
            spawn: None,
        }
    }
}

impl WorldConfig {
    /// Creates a config with the given dimensions and seed.
    #[must_use]
    pub const fn new(width: u32, height: u32, seed: i64) -> Self {
        Self {
            width,
            height,
            seed,
            spawn: None,
        }
    }
}

/// The addressable tile grid.
///
/// Owns either a dense array (small maps) or a sparse chunk arena (large
/// maps); the mode is fixed at construction and invisible at the call
/// sites. Accessors take `&mut self` because chunked mode materializes
/// the owning chunk on first touch.
#[derive(Debug)]
pub struct World {
    width: u32,
    height: u32,
    seed: i64,
    spawn: TileCoord,
    storage: Box<dyn GridStorage>,
    /// Cells covered by non-walkable decoration footprints.
    obstructions: AHashSet<TileCoord>,
}

impl World {
    /// Creates a world from the given configuration.
    ///
    /// Picks dense storage when `width * height` does not exceed
    /// [`DENSE_CELL_LIMIT`], otherwise the lazily materialized chunk
    /// arena. Dense worlds get their outermost ring forced to water;
    /// chunked worlds take whatever the generator assigns.
    pub fn new(config: WorldConfig) -> WorldResult<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(WorldError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let spawn = config.spawn.unwrap_or_else(|| {
            TileCoord::new(config.width as i32 / 2, config.height as i32 / 2)
        });
        if spawn.x < 0
            || spawn.y < 0
            || spawn.x >= config.width as i32
            || spawn.y >= config.height as i32
        {
            return Err(WorldError::SpawnOutOfBounds {
                x: spawn.x,
                y: spawn.y,
            });
        }

        let generator = TerrainGenerator::new(GeneratorConfig {
            seed: config.seed,
            spawn,
            ..Default::default()
        });

        let chunked = u64::from(config.width) * u64::from(config.height) > DENSE_CELL_LIMIT;
        let storage: Box<dyn GridStorage> = if chunked {
            Box::new(ChunkedGrid::new(generator))
        } else {
            Box::new(DenseGrid::new(&generator, config.width, config.height))
        };

        info!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            chunked,
            "created world"
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            seed: config.seed,
            spawn,
            storage,
            obstructions: AHashSet::new(),
        })
    }

    /// Map width in tiles.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Map height in tiles.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Generation seed.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// Spawn point.
    #[must_use]
    pub const fn spawn(&self) -> TileCoord {
        self.spawn
    }

    /// Whether a coordinate lies inside the map bounds.
    #[must_use]
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Tile at a world coordinate; `None` when out of bounds.
    ///
    /// In chunked mode this materializes the owning chunk on first touch,
    /// seeding every cell it owns from the terrain generator.
    pub fn tile(&mut self, x: i32, y: i32) -> Option<&Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.storage.tile(x, y)
    }

    /// Tile at a world coordinate without materializing anything.
    ///
    /// Read-only collaborators (renderer, minimap) use this to walk
    /// already-visited terrain; unmaterialized regions read as `None`.
    #[must_use]
    pub fn peek_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.storage.peek_tile(x, y)
    }

    /// Converts open ground to tilled soil. `false` if the coordinate is
    /// out of bounds or the tile is not open ground.
    pub fn till_soil(&mut self, x: i32, y: i32) -> bool {
        self.tile_mut(x, y).is_some_and(Tile::till_soil)
    }

    /// Plants a crop on tilled soil. `false` if out of bounds, not
    /// tilled, or already occupied.
    pub fn plant_crop(&mut self, x: i32, y: i32, kind: CropKind) -> bool {
        self.tile_mut(x, y).is_some_and(|tile| tile.plant_crop(kind))
    }

    /// Harvests a mature crop, reverting its tile to tilled soil.
    pub fn harvest_crop(&mut self, x: i32, y: i32) -> Option<Crop> {
        self.tile_mut(x, y)?.harvest_crop()
    }

    /// Attempts one resource-extraction strike at a coordinate.
    pub fn harvest_resource(&mut self, x: i32, y: i32, tool: Option<Tool>) -> Option<ResourceKind> {
        self.tile_mut(x, y)?.harvest_resource(tool)
    }

    /// Advances every crop on currently materialized tiles by one day and
    /// returns the number of tiles visited.
    ///
    /// Chunks never touched by a [`World::tile`] call — and chunks that
    /// have been unloaded — are skipped: crops in regions the player has
    /// never visited do not age. This matches the lazy-chunk model and is
    /// a deliberate product decision, not a bug.
    pub fn grow_all_crops(&mut self) -> usize {
        let visited = self
            .storage
            .for_each_materialized_tile(&mut Tile::grow_crop);
        debug!(visited, "advanced crops by one day");
        visited
    }

    /// Whether an entity can stand at a coordinate: in bounds, walkable
    /// terrain, and not covered by a non-walkable decoration footprint.
    pub fn is_walkable(&mut self, x: i32, y: i32) -> bool {
        let Some(kind) = self.tile(x, y).map(Tile::kind) else {
            return false;
        };
        kind.is_walkable() && !self.is_obstructed(x, y)
    }

    /// Whether a non-walkable decoration footprint covers a coordinate.
    #[must_use]
    pub fn is_obstructed(&self, x: i32, y: i32) -> bool {
        self.obstructions.contains(&TileCoord::new(x, y))
    }

    /// Replaces the decoration obstruction mask.
    ///
    /// Called once by the decoration manager after placement; the mask is
    /// static for the world's lifetime (a depleted tree still leaves a
    /// stump).
    pub fn set_obstructions(&mut self, cells: impl IntoIterator<Item = TileCoord>) {
        self.obstructions = cells.into_iter().collect();
        debug!(cells = self.obstructions.len(), "installed obstruction mask");
    }

    /// Number of currently loaded chunks; unloaded-but-retained chunks
    /// are not counted. Always zero in dense mode.
    #[must_use]
    pub fn loaded_chunk_count(&self) -> usize {
        self.storage.loaded_chunk_count()
    }

    /// Flips a chunk's loaded flag off, excluding it from
    /// [`World::grow_all_crops`] until re-touched. Tiles are retained.
    pub fn unload_chunk(&mut self, coord: ChunkCoord) -> bool {
        self.storage.unload_chunk(coord)
    }

    /// The tile's terrain kind, for collaborators that only need the
    /// ground type.
    pub fn terrain_at(&mut self, x: i32, y: i32) -> Option<TerrainKind> {
        self.tile(x, y).map(Tile::kind)
    }

    fn tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.storage.tile_mut(x, y)
    }
}
