//! # Loam Worldgen
//!
//! Seed-deterministic terrain synthesis for the Loam world engine:
//! - Lattice value noise (hashed corners, smoothstep bilinear blend)
//! - Biome classification from decorrelated elevation/moisture fields
//! - Terrain generation with spawn safety and isolated-cell smoothing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod biome;
pub mod generator;
pub mod noise;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::biome::*;
    pub use crate::generator::*;
}

pub use prelude::*;
