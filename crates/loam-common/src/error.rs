//! Error types for the Loam engine.

use thiserror::Error;

/// World construction and configuration errors.
///
/// Runtime tile operations never error: out-of-bounds queries return
/// `None` and failed preconditions report a no-op to the caller.
#[derive(Debug, Error)]
pub enum WorldError {
    /// Map dimensions must both be non-zero
    #[error("Invalid map dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Configured width
        width: u32,
        /// Configured height
        height: u32,
    },

    /// Configured spawn point lies outside the map bounds
    #[error("Spawn point ({x}, {y}) is outside the map")]
    SpawnOutOfBounds {
        /// Spawn X coordinate
        x: i32,
        /// Spawn Y coordinate
        y: i32,
    },
}

/// Result type alias for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
