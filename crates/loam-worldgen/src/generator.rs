//! Procedural terrain generation.
//!
//! `TerrainGenerator` is a pure mapping from (seed, tile coordinate) to a
//! terrain kind. The chunked world calls [`TerrainGenerator::kind_at`] per
//! cell while materializing a chunk; small dense worlds are built in one
//! shot with [`TerrainGenerator::generate_grid`], which additionally
//! forces the border ring to water and runs the smoothing passes that need
//! the whole grid in hand.

use loam_common::{TerrainKind, TileCoord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::biome::Biome;
use crate::noise;

/// Seed offset decorrelating the moisture field from the elevation field.
const MOISTURE_SEED_OFFSET: i64 = 1000;

/// Elevation above which a mountain cell hardens into rock.
const ROCK_ELEVATION: f64 = 0.9;

/// Number of smoothing passes over a fully materialized grid.
const SMOOTHING_PASSES: u32 = 2;

/// Terrain generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// World seed
    pub seed: i64,
    /// Elevation noise scale (larger = busier terrain)
    pub elevation_scale: f64,
    /// Moisture noise scale
    pub moisture_scale: f64,
    /// Spawn point kept clear of hostile terrain
    pub spawn: TileCoord,
    /// Radius of the forced open-ground disk around the spawn point
    pub safe_radius: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            elevation_scale: 0.05,
            moisture_scale: 0.08,
            spawn: TileCoord::new(0, 0),
            safe_radius: 8.0,
        }
    }
}

/// Pure, seed-deterministic terrain synthesis.
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    config: GeneratorConfig,
}

impl TerrainGenerator {
    /// Creates a new generator with the given config.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Creates a generator with default config and the given seed.
    #[must_use]
    pub fn with_seed(seed: i64) -> Self {
        Self::new(GeneratorConfig {
            seed,
            ..Default::default()
        })
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Terrain kind at a tile coordinate.
    ///
    /// Identical (seed, coordinate) always yields the identical kind,
    /// whether the owning chunk is materialized eagerly or much later.
    #[must_use]
    pub fn kind_at(&self, x: i32, y: i32) -> TerrainKind {
        if self.in_safe_disk(x, y) {
            return TerrainKind::Ground;
        }

        let elevation = self.elevation_at(x, y);
        match Biome::classify(elevation, self.moisture_at(x, y)) {
            Biome::Lake => TerrainKind::Water,
            Biome::Mountain => {
                if elevation > ROCK_ELEVATION {
                    TerrainKind::Rock
                } else {
                    TerrainKind::Ground
                }
            }
            Biome::Plains | Biome::Forest | Biome::Desert | Biome::Swamp => TerrainKind::Ground,
        }
    }

    /// Biome at a tile coordinate (fertility/cosmetic metadata).
    #[must_use]
    pub fn biome_at(&self, x: i32, y: i32) -> Biome {
        Biome::classify(self.elevation_at(x, y), self.moisture_at(x, y))
    }

    /// Generates a full `width` x `height` grid in row-major order.
    ///
    /// Used for dense worlds: the outermost ring is forced to water, the
    /// interior follows [`TerrainGenerator::kind_at`], and the smoothing
    /// passes then remove single-cell noise artifacts.
    #[must_use]
    pub fn generate_grid(&self, width: u32, height: u32) -> Vec<TerrainKind> {
        let w = width as usize;
        let h = height as usize;
        let mut grid = vec![TerrainKind::Ground; w * h];

        for y in 0..h {
            for x in 0..w {
                let on_border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
                grid[y * w + x] = if on_border {
                    TerrainKind::Water
                } else {
                    self.kind_at(x as i32, y as i32)
                };
            }
        }

        for _ in 0..SMOOTHING_PASSES {
            smooth_pass(&mut grid, w, h);
        }

        debug!(width, height, seed = self.config.seed, "generated dense terrain grid");
        grid
    }

    fn elevation_at(&self, x: i32, y: i32) -> f64 {
        noise::sample(x, y, self.config.elevation_scale, self.config.seed)
    }

    fn moisture_at(&self, x: i32, y: i32) -> f64 {
        noise::sample(
            x,
            y,
            self.config.moisture_scale,
            self.config.seed + MOISTURE_SEED_OFFSET,
        )
    }

    fn in_safe_disk(&self, x: i32, y: i32) -> bool {
        TileCoord::new(x, y).distance_to(self.config.spawn) < self.config.safe_radius
    }
}

/// One smoothing pass: interior cells sharing their kind with fewer than
/// two of their eight neighbors are reassigned to the most common of
/// {ground, water, rock} among the neighbors.
fn smooth_pass(grid: &mut [TerrainKind], w: usize, h: usize) {
    if w < 3 || h < 3 {
        return;
    }
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let current = grid[y * w + x];
            let mut same = 0;
            for (dx, dy) in NEIGHBORS {
                let nx = (x as i32 + dx) as usize;
                let ny = (y as i32 + dy) as usize;
                if grid[ny * w + nx] == current {
                    same += 1;
                }
            }
            if same < 2 {
                grid[y * w + x] = dominant_neighbor(grid, w, x, y);
            }
        }
    }
}

const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Most common of {ground, water, rock} among the eight neighbors.
fn dominant_neighbor(grid: &[TerrainKind], w: usize, x: usize, y: usize) -> TerrainKind {
    let mut ground = 0;
    let mut water = 0;
    let mut rock = 0;
    for (dx, dy) in NEIGHBORS {
        let nx = (x as i32 + dx) as usize;
        let ny = (y as i32 + dy) as usize;
        match grid[ny * w + nx] {
            TerrainKind::Ground => ground += 1,
            TerrainKind::Water => water += 1,
            TerrainKind::Rock => rock += 1,
            TerrainKind::Tilled | TerrainKind::Planted => {}
        }
    }
    if water > ground && water > rock {
        TerrainKind::Water
    } else if rock > ground {
        TerrainKind::Rock
    } else {
        TerrainKind::Ground
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_generation_deterministic() {
        let gen1 = TerrainGenerator::with_seed(42);
        let gen2 = TerrainGenerator::with_seed(42);

        assert_eq!(gen1.generate_grid(64, 64), gen2.generate_grid(64, 64));
    }

    #[test]
    fn test_different_seeds_different_terrain() {
        let gen1 = TerrainGenerator::with_seed(42);
        let gen2 = TerrainGenerator::with_seed(999);

        assert_ne!(gen1.generate_grid(64, 64), gen2.generate_grid(64, 64));
    }

    #[test]
    fn test_border_is_water() {
        let generator = TerrainGenerator::with_seed(7);
        let grid = generator.generate_grid(20, 20);
        for i in 0..20 {
            assert_eq!(grid[i], TerrainKind::Water); // top row
            assert_eq!(grid[19 * 20 + i], TerrainKind::Water); // bottom row
            assert_eq!(grid[i * 20], TerrainKind::Water); // left column
            assert_eq!(grid[i * 20 + 19], TerrainKind::Water); // right column
        }
    }

    #[test]
    fn test_spawn_disk_is_open_ground() {
        let config = GeneratorConfig {
            seed: 42,
            spawn: TileCoord::new(50, 50),
            ..Default::default()
        };
        let generator = TerrainGenerator::new(config);
        for dy in -7..=7 {
            for dx in -7..=7 {
                let coord = TileCoord::new(50 + dx, 50 + dy);
                if coord.distance_to(TileCoord::new(50, 50)) < 8.0 {
                    assert_eq!(generator.kind_at(coord.x, coord.y), TerrainKind::Ground);
                }
            }
        }
    }

    #[test]
    fn test_kind_at_never_produces_worked_soil() {
        let generator = TerrainGenerator::with_seed(3);
        for y in -50..50 {
            for x in -50..50 {
                let kind = generator.kind_at(x, y);
                assert!(
                    !matches!(kind, TerrainKind::Tilled | TerrainKind::Planted),
                    "generator produced worked soil at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_smoothing_removes_isolated_cells() {
        // A single water cell surrounded by ground is noise; it must not
        // survive two smoothing passes.
        let mut grid = vec![TerrainKind::Ground; 25];
        grid[2 * 5 + 2] = TerrainKind::Water;
        smooth_pass(&mut grid, 5, 5);
        assert_eq!(grid[2 * 5 + 2], TerrainKind::Ground);
    }

    proptest! {
        #[test]
        fn prop_kind_at_deterministic(
            x in -10_000i32..10_000,
            y in -10_000i32..10_000,
            seed in proptest::num::i64::ANY,
        ) {
            let gen1 = TerrainGenerator::with_seed(seed);
            let gen2 = TerrainGenerator::with_seed(seed);
            prop_assert_eq!(gen1.kind_at(x, y), gen2.kind_at(x, y));
        }
    }
}
