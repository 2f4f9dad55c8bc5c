//! Reference-compatible pseudo-random stream.
//!
//! The engine must reproduce the upstream generator bit-for-bit, so it
//! cannot draw from an off-the-shelf RNG: the island noise tables are built
//! from a 48-bit linear congruential stream with a specific seed scramble,
//! advanced a fixed 17292 steps from the world seed before use.

const MULTIPLIER: u64 = 0x5DEECE66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// 48-bit LCG stream keyed by a world seed.
#[derive(Clone, Debug)]
pub struct LegacyRandom {
    state: u64,
}

impl LegacyRandom {
    /// Seed the stream. The raw state is the seed XOR-scrambled with the
    /// multiplier and masked to 48 bits.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance one step and return the top `bits` bits of the new state.
    fn next(&mut self, bits: u32) -> i32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// Non-power-of-two bounds rejection-sample so the stream stays aligned
    /// with the reference for every draw sequence.
    pub fn next_int_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        let m = bound - 1;
        if bound & m == 0 {
            return ((bound as i64 * self.next(31) as i64) >> 31) as i32;
        }
        let mut u = self.next(31);
        loop {
            let r = u % bound;
            // Rejects draws from the biased tail; the check mirrors the
            // reference's wrapping overflow test.
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r;
            }
            u = self.next(31);
        }
    }

    /// Uniform double in `[0, 1)` built from 53 stream bits.
    pub fn next_double(&mut self) -> f64 {
        let hi = (self.next(26) as i64) << 27;
        let lo = self.next(27) as i64;
        (hi + lo) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Fast-forward the stream by `count` steps in O(log count).
    ///
    /// Composes the per-step affine map by square-and-multiply; equivalent
    /// to discarding `count` raw outputs.
    pub fn skip(&mut self, count: u64) {
        let mut mul = MULTIPLIER;
        let mut add = INCREMENT;
        let mut total_mul: u64 = 1;
        let mut total_add: u64 = 0;
        let mut n = count;
        while n != 0 {
            if n & 1 != 0 {
                total_mul = total_mul.wrapping_mul(mul);
                total_add = total_add.wrapping_mul(mul).wrapping_add(add);
            }
            add = add.wrapping_mul(mul.wrapping_add(1));
            mul = mul.wrapping_mul(mul);
            n >>= 1;
        }
        self.state = self
            .state
            .wrapping_mul(total_mul)
            .wrapping_add(total_add)
            & MASK;
    }

    /// Raw 48-bit stream state, for determinism checks.
    pub fn raw_state(&self) -> u64 {
        self.state
    }
}
