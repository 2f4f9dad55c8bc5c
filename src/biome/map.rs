//! Chunk-level biome classification for the End dimension.

use super::Biome;
use crate::noise::SimplexNoise;
use crate::rng::LegacyRandom;

/// Steps the island noise stream is offset from the world seed.
const ISLAND_NOISE_SKIP: u64 = 17292;

/// Squared chunk radius of the central island.
const CENTER_RADIUS_SQ: i64 = 4096;

/// Simplex values below this mark a cell as carrying an outer island.
/// (-0.9f widened to f64, preserved exactly from the reference.)
const ISLAND_CUT: f64 = -0.8999999761581421;

/// Deterministic map from chunk coordinates to End biomes.
///
/// Owns the seeded island noise field. Classification applies rules in a
/// fixed precedence order (central island, then highlands, midlands, small
/// islands, barrens), and values landing exactly on a threshold resolve to
/// the earliest matching rule, so results never depend on evaluation order.
pub struct EndBiomeMap {
    islands: SimplexNoise,
}

impl EndBiomeMap {
    /// Build the map for a world seed. Allocates the noise tables once;
    /// classification performs no further allocation.
    pub fn new(seed: u64) -> Self {
        let mut rng = LegacyRandom::with_seed(seed);
        rng.skip(ISLAND_NOISE_SKIP);
        Self {
            islands: SimplexNoise::new(&mut rng),
        }
    }

    /// Classify the chunk at (chunk_x, chunk_z).
    pub fn classify(&self, chunk_x: i32, chunk_z: i32) -> Biome {
        let cx = chunk_x as i64;
        let cz = chunk_z as i64;
        // Both squares are non-negative; summing in u64 is exact and cannot
        // overflow even at (i32::MIN, i32::MIN), where the sum is 2^63.
        if (cx * cx) as u64 + (cz * cz) as u64 <= CENTER_RADIUS_SQ as u64 {
            return Biome::TheEnd;
        }
        let height = self.island_height(
            chunk_x.wrapping_mul(2).wrapping_add(1),
            chunk_z.wrapping_mul(2).wrapping_add(1),
        );
        if height > 40.0 {
            Biome::EndHighlands
        } else if height >= 0.0 {
            Biome::EndMidlands
        } else if height < -20.0 {
            Biome::SmallEndIslands
        } else {
            Biome::EndBarrens
        }
    }

    /// Island surface-height indicator at a doubled-chunk sample point.
    ///
    /// Starts from the radial falloff of the central island and takes the
    /// max over outer-island contributions found in a 25×25 cell scan: a
    /// cell outside the central radius whose noise sample falls below
    /// [`ISLAND_CUT`] carries an island whose steepness comes from a
    /// coordinate hash. Distance squares use i64 so large-magnitude
    /// coordinates cannot overflow into misclassification.
    pub fn island_height(&self, x: i32, z: i32) -> f32 {
        let scaled_x = x / 2;
        let scaled_z = z / 2;
        let odd_x = x % 2;
        let odd_z = z % 2;

        let dist_sq = x as i64 * x as i64 + z as i64 * z as i64;
        let mut height = (100.0 - (dist_sq as f32).sqrt() * 8.0).clamp(-100.0, 80.0);

        for rx in -12..=12i32 {
            for rz in -12..=12i32 {
                let cell_x = (scaled_x + rx) as i64;
                let cell_z = (scaled_z + rz) as i64;
                if cell_x * cell_x + cell_z * cell_z <= CENTER_RADIUS_SQ {
                    continue;
                }
                if self.islands.sample2d(cell_x as f64, cell_z as f64) >= ISLAND_CUT {
                    continue;
                }
                let steepness =
                    ((cell_x as f32).abs() * 3439.0 + (cell_z as f32).abs() * 147.0) % 13.0 + 9.0;
                let local_x = (odd_x - rx * 2) as f32;
                let local_z = (odd_z - rz * 2) as f32;
                let island = (100.0 - (local_x * local_x + local_z * local_z).sqrt() * steepness)
                    .clamp(-100.0, 80.0);
                height = height.max(island);
            }
        }
        height
    }
}
