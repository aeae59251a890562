//! Procedural decoration placement for the loam engine.
//!
//! Scatters trees, bushes, and ruins over generated terrain with seeded
//! randomness, enforces footprint and spawn-clearance constraints, and
//! tracks per-decoration harvest state at runtime.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod decoration;
pub mod manager;

/// Commonly used decoration types.
pub mod prelude {
    pub use crate::catalog::{DecorationCategory, DecorationKind};
    pub use crate::decoration::Decoration;
    pub use crate::manager::{DecorConfig, DecorTargets, DecorationManager, ResourceYield};
}

pub use prelude::*;
