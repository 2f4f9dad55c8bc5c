//! Block-to-quart coordinate fuzzing.
//!
//! Biome boundaries are jittered voronoi-style: a block position maps to the
//! quart-resolution (4×4×4 block) cell whose jittered center is nearest.
//! The jitter stream is keyed by a SHA-256 digest of the world seed, so the
//! fuzz pattern is decorrelated from the island noise while staying fully
//! determined by the seed.

use sha2::{Digest, Sha256};

/// Stationary LCG constants for the per-cell jitter stream.
const STEP_MUL: i64 = 6364136223846793005;
const STEP_ADD: i64 = 1442695040888963407;

/// Seeded block→quart fuzzing.
#[derive(Clone, Debug)]
pub struct VoronoiZoom {
    seed: i64,
}

impl VoronoiZoom {
    pub fn new(world_seed: u64) -> Self {
        Self {
            seed: mix_seed(world_seed),
        }
    }

    /// Map a block position to its fuzzed quart position.
    ///
    /// The block is offset by −2, its 8 surrounding quart cells are scored
    /// by jittered squared distance, and the nearest cell wins. Coordinate
    /// arithmetic wraps like the reference's 32-bit ints, so every
    /// representable input resolves deterministically.
    pub fn quart_pos(&self, x: i32, y: i32, z: i32) -> (i32, i32, i32) {
        let bx = x.wrapping_sub(2);
        let by = y.wrapping_sub(2);
        let bz = z.wrapping_sub(2);
        let qx = bx >> 2;
        let qy = by >> 2;
        let qz = bz >> 2;
        let fx = (bx & 3) as f64 / 4.0;
        let fy = (by & 3) as f64 / 4.0;
        let fz = (bz & 3) as f64 / 4.0;

        let mut best = 0u32;
        let mut best_dist = f64::INFINITY;
        for cell in 0..8u32 {
            let cx = if cell & 4 == 0 { qx } else { qx.wrapping_add(1) };
            let cy = if cell & 2 == 0 { qy } else { qy.wrapping_add(1) };
            let cz = if cell & 1 == 0 { qz } else { qz.wrapping_add(1) };
            let dx = if cell & 4 == 0 { fx } else { fx - 1.0 };
            let dy = if cell & 2 == 0 { fy } else { fy - 1.0 };
            let dz = if cell & 1 == 0 { fz } else { fz - 1.0 };
            let dist = self.fiddled_distance(cx, cy, cz, dx, dy, dz);
            if best_dist > dist {
                best = cell;
                best_dist = dist;
            }
        }

        (
            if best & 4 == 0 { qx } else { qx.wrapping_add(1) },
            if best & 2 == 0 { qy } else { qy.wrapping_add(1) },
            if best & 1 == 0 { qz } else { qz.wrapping_add(1) },
        )
    }

    /// Squared distance from the block to the jittered center of one cell.
    fn fiddled_distance(&self, x: i32, y: i32, z: i32, dx: f64, dy: f64, dz: f64) -> f64 {
        let mut l = step(self.seed, x as i64);
        l = step(l, y as i64);
        l = step(l, z as i64);
        l = step(l, x as i64);
        l = step(l, y as i64);
        l = step(l, z as i64);
        let jx = fiddle(l);
        l = step(l, self.seed);
        let jy = fiddle(l);
        l = step(l, self.seed);
        let jz = fiddle(l);
        square(dz + jz) + square(dy + jy) + square(dx + jx)
    }
}

/// First 8 little-endian bytes of SHA-256 over the little-endian seed, the
/// reference generator's fuzz-seed derivation.
fn mix_seed(seed: u64) -> i64 {
    let digest = Sha256::digest(seed.to_le_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    i64::from_le_bytes(bytes)
}

fn step(seed: i64, salt: i64) -> i64 {
    seed.wrapping_mul(seed.wrapping_mul(STEP_MUL).wrapping_add(STEP_ADD))
        .wrapping_add(salt)
}

/// Jitter in [-0.45, 0.45) from bits 24..34 of the stream state.
fn fiddle(l: i64) -> f64 {
    let d = (l >> 24).rem_euclid(1024) as f64 / 1024.0;
    (d - 0.5) * 0.9
}

fn square(v: f64) -> f64 {
    v * v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_mixing_vectors() {
        assert_eq!(mix_seed(1551515151585454), 4053242177535254290);
        assert_eq!(mix_seed(0), 8794265229978523055);
    }

    #[test]
    fn known_quart_positions() {
        let zoom = VoronoiZoom::new(1551515151585454);
        assert_eq!(zoom.quart_pos(10000, 251, 10000), (2500, 62, 2500));
        assert_eq!(zoom.quart_pos(0, 0, 0), (-1, -1, -1));
        assert_eq!(zoom.quart_pos(-1, -1, -1), (-1, -1, -1));
    }

    #[test]
    fn extreme_coordinates_resolve() {
        // i32 limits wrap exactly like the reference's int arithmetic.
        let zoom = VoronoiZoom::new(1551515151585454);
        assert_eq!(
            zoom.quart_pos(i32::MAX, 255, i32::MAX),
            (536870911, 63, 536870911)
        );
        assert_eq!(
            zoom.quart_pos(i32::MIN, 0, i32::MIN),
            (536870911, -1, 536870911)
        );
    }

    #[test]
    fn fuzz_stays_within_one_cell() {
        let zoom = VoronoiZoom::new(7);
        for x in -64..64 {
            for z in -64..64 {
                let (qx, qy, qz) = zoom.quart_pos(x * 33, 64, z * 33);
                let ex = (x * 33 - 2) >> 2;
                let ez = (z * 33 - 2) >> 2;
                assert!((qx - ex).abs() <= 1, "x fuzz beyond one cell");
                assert!((qz - ez).abs() <= 1, "z fuzz beyond one cell");
                assert!((qy - ((64 - 2) >> 2)).abs() <= 1, "y fuzz beyond one cell");
            }
        }
    }

    #[test]
    fn different_seeds_fuzz_differently() {
        let a = VoronoiZoom::new(1);
        let b = VoronoiZoom::new(2);
        let mut diffs = 0;
        for x in 0..100 {
            for z in 0..100 {
                if a.quart_pos(x, 0, z) != b.quart_pos(x, 0, z) {
                    diffs += 1;
                }
            }
        }
        assert!(diffs > 0, "fuzz pattern must depend on the seed");
    }
}
