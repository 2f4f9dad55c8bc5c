//! Reference-compatible 2D simplex noise.
//!
//! The permutation table is shuffled by draws from a [`LegacyRandom`] stream,
//! so two fields built from the same stream position are identical down to
//! the bit. Sampling is pure: no allocation, no interior mutability.

use crate::rng::LegacyRandom;

const SQRT_3: f64 = 1.7320508075688772;
/// Skew factor mapping square lattice coordinates onto the simplex lattice.
const SKEW: f64 = 0.5 * (SQRT_3 - 1.0);
/// Inverse mapping back from the simplex lattice.
const UNSKEW: f64 = (3.0 - SQRT_3) / 6.0;

/// 12 usable gradients plus 4 repeats, exactly the reference table.
const GRADIENTS: [[f64; 3]; 16] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0],
    [0.0, -1.0, 1.0],
    [-1.0, 1.0, 0.0],
    [0.0, -1.0, -1.0],
];

/// Seeded 2D simplex field with an immutable permutation table.
#[derive(Clone)]
pub struct SimplexNoise {
    perm: [u8; 256],
    x_origin: f64,
    y_origin: f64,
    z_origin: f64,
}

impl SimplexNoise {
    /// Build the field from the current position of `rng`.
    ///
    /// Consumes three doubles (the field origin) followed by the 256 bounded
    /// draws of a Fisher-Yates shuffle; callers relying on stream alignment
    /// must not interleave other draws.
    pub fn new(rng: &mut LegacyRandom) -> Self {
        let x_origin = rng.next_double() * 256.0;
        let y_origin = rng.next_double() * 256.0;
        let z_origin = rng.next_double() * 256.0;
        let mut perm = [0u8; 256];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in 0..256 {
            let j = rng.next_int_bounded(256 - i as i32) + i as i32;
            perm.swap(i, j as usize);
        }
        Self {
            perm,
            x_origin,
            y_origin,
            z_origin,
        }
    }

    /// Field origin offsets, each in `[0, 256)`.
    pub fn origin(&self) -> (f64, f64, f64) {
        (self.x_origin, self.y_origin, self.z_origin)
    }

    fn p(&self, index: i32) -> i32 {
        self.perm[(index & 255) as usize] as i32
    }

    /// Sample the field at (x, y). Output is bounded, roughly in [-1, 1].
    pub fn sample2d(&self, x: f64, y: f64) -> f64 {
        let skew = (x + y) * SKEW;
        let col = floor(x + skew);
        let row = floor(y + skew);
        let unskew = (col + row) as f64 * UNSKEW;

        // Distances from the cell origin, in input space.
        let x0 = x - (col as f64 - unskew);
        let y0 = y - (row as f64 - unskew);
        // Which of the two triangles of the cell contains the point.
        let (col_off, row_off) = if x0 > y0 { (1, 0) } else { (0, 1) };
        let x1 = x0 - col_off as f64 + UNSKEW;
        let y1 = y0 - row_off as f64 + UNSKEW;
        let x2 = x0 - 1.0 + 2.0 * UNSKEW;
        let y2 = y0 - 1.0 + 2.0 * UNSKEW;

        let col_m = col & 255;
        let row_m = row & 255;
        let g0 = (self.p(col_m + self.p(row_m)) % 12) as usize;
        let g1 = (self.p(col_m + col_off + self.p(row_m + row_off)) % 12) as usize;
        let g2 = (self.p(col_m + 1 + self.p(row_m + 1)) % 12) as usize;

        let n0 = corner(g0, x0, y0, 0.0, 0.5);
        let n1 = corner(g1, x1, y1, 0.0, 0.5);
        let n2 = corner(g2, x2, y2, 0.0, 0.5);
        70.0 * (n0 + n1 + n2)
    }
}

/// Contribution of one simplex corner: quartic falloff times the gradient
/// dot product, zero outside the falloff radius.
fn corner(gradient: usize, x: f64, y: f64, z: f64, falloff: f64) -> f64 {
    let mut d = falloff - x * x - y * y - z * z;
    if d < 0.0 {
        0.0
    } else {
        d *= d;
        let g = GRADIENTS[gradient];
        d * d * (g[0] * x + g[1] * y + g[2] * z)
    }
}

/// Floor to i32 with reference cast semantics.
fn floor(value: f64) -> i32 {
    let i = value as i32;
    if value < i as f64 { i - 1 } else { i }
}
