//! Fixed-size chunk of tiles, the unit of lazy materialization.

use loam_common::{ChunkCoord, TerrainKind, CHUNK_SIZE};
use serde::{Deserialize, Serialize};

use crate::tile::Tile;

/// A 32x32 block of tiles.
///
/// Chunks are created empty on first access to any coordinate inside
/// their bounds and filled by [`Chunk::materialize`]. Unloading flips the
/// loaded flag but retains the tiles; determinism of the generator makes
/// dropping and re-materializing a chunk safe if eviction is ever added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    coord: ChunkCoord,
    tiles: Vec<Tile>,
    loaded: bool,
}

impl Chunk {
    /// Creates a new, unmaterialized chunk.
    #[must_use]
    pub const fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            tiles: Vec::new(),
            loaded: false,
        }
    }

    /// Fills every local cell in row-major order and marks the chunk
    /// loaded.
    ///
    /// `kind_at` is called with world coordinates; the world supplies the
    /// terrain generator here.
    pub fn materialize(&mut self, mut kind_at: impl FnMut(i32, i32) -> TerrainKind) {
        let origin = self.coord.origin();
        let size = CHUNK_SIZE as usize;
        self.tiles.clear();
        self.tiles.reserve_exact(size * size);
        for ly in 0..size as i32 {
            for lx in 0..size as i32 {
                self.tiles.push(Tile::new(kind_at(origin.x + lx, origin.y + ly)));
            }
        }
        self.loaded = true;
    }

    /// Tile at chunk-local coordinates; `None` outside `[0, CHUNK_SIZE)`.
    #[must_use]
    pub fn local_tile(&self, lx: i32, ly: i32) -> Option<&Tile> {
        let size = CHUNK_SIZE as i32;
        if lx < 0 || lx >= size || ly < 0 || ly >= size {
            return None;
        }
        self.tiles.get(ly as usize * size as usize + lx as usize)
    }

    /// Mutable tile at chunk-local coordinates.
    pub fn local_tile_mut(&mut self, lx: i32, ly: i32) -> Option<&mut Tile> {
        let size = CHUNK_SIZE as i32;
        if lx < 0 || lx >= size || ly < 0 || ly >= size {
            return None;
        }
        self.tiles.get_mut(ly as usize * size as usize + lx as usize)
    }

    /// Tile at world coordinates, if this chunk owns them.
    #[must_use]
    pub fn world_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        let origin = self.coord.origin();
        self.local_tile(x - origin.x, y - origin.y)
    }

    /// Mutable tile at world coordinates, if this chunk owns them.
    pub fn world_tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        let origin = self.coord.origin();
        self.local_tile_mut(x - origin.x, y - origin.y)
    }

    /// Whether a world coordinate falls inside this chunk's bounds.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let origin = self.coord.origin();
        let size = CHUNK_SIZE as i32;
        x >= origin.x && x < origin.x + size && y >= origin.y && y < origin.y + size
    }

    /// The chunk's coordinate in the chunk grid.
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Whether the chunk has been materialized and not unloaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Marks the chunk unloaded; tiles are retained.
    pub fn unload(&mut self) {
        self.loaded = false;
    }

    /// Marks an unloaded chunk loaded again. The retained tiles come
    /// back as-is, no regeneration happens.
    pub fn reload(&mut self) {
        self.loaded = true;
    }

    /// All tiles in row-major order (empty before materialization).
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Mutable access to all tiles in row-major order.
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}
