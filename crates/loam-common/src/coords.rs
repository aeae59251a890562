//! Coordinate types for tile, chunk, and chunk-local positions.

use serde::{Deserialize, Serialize};

/// Side length of a chunk in tiles.
pub const CHUNK_SIZE: u32 = 32;

/// World-space tile coordinate (global position on the tile grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    /// X coordinate in tile space
    pub x: i32,
    /// Y coordinate in tile space
    pub y: i32,
}

impl TileCoord {
    /// Creates a new tile coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to the coordinate of the owning chunk.
    ///
    /// Floor division, so negative coordinates map to contiguous,
    /// non-overlapping chunks across the origin.
    #[must_use]
    pub const fn to_chunk_coord(self) -> ChunkCoord {
        let size = CHUNK_SIZE as i32;
        ChunkCoord {
            x: self.x.div_euclid(size),
            y: self.y.div_euclid(size),
        }
    }

    /// Converts to the local coordinate within the owning chunk.
    #[must_use]
    pub const fn to_local_coord(self) -> LocalCoord {
        let size = CHUNK_SIZE as i32;
        LocalCoord {
            x: self.x.rem_euclid(size) as u16,
            y: self.y.rem_euclid(size) as u16,
        }
    }

    /// Euclidean distance to another tile coordinate.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

/// Chunk coordinate (identifies a chunk in the chunk grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    /// X coordinate in chunk space
    pub x: i32,
    /// Y coordinate in chunk space
    pub y: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// World-space tile coordinate of this chunk's top-left corner.
    #[must_use]
    pub const fn origin(self) -> TileCoord {
        let size = CHUNK_SIZE as i32;
        TileCoord {
            x: self.x * size,
            y: self.y * size,
        }
    }
}

/// Local coordinate within a chunk (0 to `CHUNK_SIZE - 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalCoord {
    /// X coordinate within chunk
    pub x: u16,
    /// Y coordinate within chunk
    pub y: u16,
}

impl LocalCoord {
    /// Creates a new local coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Converts to a row-major linear index.
    #[must_use]
    pub const fn to_index(self) -> usize {
        (self.y as usize) * (CHUNK_SIZE as usize) + (self.x as usize)
    }

    /// Creates from a row-major linear index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        let size = CHUNK_SIZE as usize;
        Self {
            x: (index % size) as u16,
            y: (index / size) as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_mapping_positive() {
        let tile = TileCoord::new(100, 200);
        assert_eq!(tile.to_chunk_coord(), ChunkCoord::new(3, 6));
        assert_eq!(tile.to_local_coord(), LocalCoord::new(4, 8));
    }

    #[test]
    fn test_chunk_mapping_negative() {
        // -1 belongs to chunk -1, local 31
        let tile = TileCoord::new(-1, -1);
        assert_eq!(tile.to_chunk_coord(), ChunkCoord::new(-1, -1));
        assert_eq!(tile.to_local_coord(), LocalCoord::new(31, 31));

        // Exact negative multiples of the chunk size stay contiguous
        let tile = TileCoord::new(-32, -64);
        assert_eq!(tile.to_chunk_coord(), ChunkCoord::new(-1, -2));
        assert_eq!(tile.to_local_coord(), LocalCoord::new(0, 0));
    }

    #[test]
    fn test_chunk_origin_round_trip() {
        let chunk = ChunkCoord::new(-3, 5);
        let origin = chunk.origin();
        assert_eq!(origin, TileCoord::new(-96, 160));
        assert_eq!(origin.to_chunk_coord(), chunk);
    }

    #[test]
    fn test_local_index_round_trip() {
        let local = LocalCoord::new(7, 19);
        assert_eq!(LocalCoord::from_index(local.to_index()), local);
        assert_eq!(LocalCoord::new(0, 0).to_index(), 0);
        assert_eq!(LocalCoord::new(31, 31).to_index(), 32 * 32 - 1);
    }

    #[test]
    fn test_distance() {
        let a = TileCoord::new(0, 0);
        let b = TileCoord::new(3, 4);
        assert!((a.distance_to(b) - 5.0).abs() < f64::EPSILON);
    }
}
