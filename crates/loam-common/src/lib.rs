//! # Loam Common
//!
//! Shared foundational types for the Loam world engine:
//! - Coordinate types (tile, chunk, chunk-local)
//! - Terrain kind catalog
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod terrain;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::terrain::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_chunk_mapping_is_consistent(x in -100_000i32..100_000, y in -100_000i32..100_000) {
            let tile = TileCoord::new(x, y);
            let chunk = tile.to_chunk_coord();
            let local = tile.to_local_coord();

            // Local coordinates stay inside the chunk
            prop_assert!(u32::from(local.x) < CHUNK_SIZE);
            prop_assert!(u32::from(local.y) < CHUNK_SIZE);

            // Chunk origin + local offset reconstructs the tile
            let origin = chunk.origin();
            prop_assert_eq!(origin.x + i32::from(local.x), x);
            prop_assert_eq!(origin.y + i32::from(local.y), y);
        }

        #[test]
        fn prop_local_index_round_trips(x in 0u16..32, y in 0u16..32) {
            let local = LocalCoord::new(x, y);
            prop_assert_eq!(LocalCoord::from_index(local.to_index()), local);
        }
    }
}
