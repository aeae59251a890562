//! World storage and simulation state for the loam engine.
//!
//! The [`world::World`] facade is the single entry point: it owns the
//! tile grid (dense for small maps, lazily materialized chunks for large
//! ones), seeds terrain from `loam-worldgen`, and carries all mutable
//! per-tile state: tilled soil, planted crops, and resource nodes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod chunk;
pub mod crop;
pub mod resource;
mod storage;
pub mod tile;
pub mod world;

/// Commonly used world types.
pub mod prelude {
    pub use crate::chunk::Chunk;
    pub use crate::crop::{Crop, CropKind};
    pub use crate::resource::{ResourceKind, ResourceNode, Tool};
    pub use crate::tile::Tile;
    pub use crate::world::{World, WorldConfig};
}

pub use prelude::*;
