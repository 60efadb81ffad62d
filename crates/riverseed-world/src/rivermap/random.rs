//! Seedable uniform integer sources.
//!
//! The search strategies only ever ask for `U[0, n)` integers. Any `rand`
//! generator qualifies; `LegacyRandom` additionally reproduces the reference
//! world generator's draw sequence for a given seed.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn next_int(&mut self, bound: u32) -> u32;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn next_int(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }
}

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const ADDEND: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

/// 48-bit linear congruential generator with the classic scrambled seeding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    pub fn new(seed: i64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    pub fn set_seed(&mut self, seed: i64) {
        self.seed = (seed ^ MULTIPLIER) & MASK;
    }

    #[inline]
    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.seed >> (48 - bits)) as i32
    }

    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    /// Bounded draw; powers of two take the high bits, others reject the
    /// final partial range so every residue is equally likely.
    pub fn next_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0);
        if bound & bound.wrapping_neg() == bound {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }
        loop {
            let bits = self.next(31);
            let val = bits % bound;
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }
}

impl RandomSource for LegacyRandom {
    #[inline]
    fn next_int(&mut self, bound: u32) -> u32 {
        self.next_bounded(bound as i32) as u32
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RngKind {
    #[default]
    Legacy,
    ChaCha,
}

/// Per-tile seed so tiles can be searched in any order or on any thread.
#[inline]
pub fn tile_seed(world_seed: i64, tile_x: i32, tile_z: i32) -> i64 {
    let a = i64::from(tile_x).wrapping_mul(341_873_128_712);
    let b = i64::from(tile_z).wrapping_mul(132_897_987_541);
    a.wrapping_add(b) ^ world_seed
}

pub fn make_rng(kind: RngKind, seed: i64) -> Box<dyn RandomSource + Send> {
    match kind {
        RngKind::Legacy => Box::new(LegacyRandom::new(seed)),
        RngKind::ChaCha => Box::new(ChaCha8Rng::seed_from_u64(seed as u64)),
    }
}
