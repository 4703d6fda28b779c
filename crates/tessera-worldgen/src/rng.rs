//! Deterministic seeded random source for a single generation run.
//!
//! Every peer in a session receives the same 32-bit seed and must derive the
//! same stream of draws from it. ChaCha8 is used because its output is defined
//! bit-for-bit independently of platform, word size, and thread.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default half-width of the interval run-fixed noise offsets are drawn from.
pub const DEFAULT_OFFSET_RANGE: i32 = 10_000;

/// Seeded generator owned by one generation run.
///
/// Two offset pairs are drawn at construction, in a fixed order: the domain
/// warp offset first, then the terrain offset. They stay constant for the
/// lifetime of the run.
#[derive(Clone, Debug)]
pub struct WorldRng {
    rng: ChaCha8Rng,
    seed: i32,
    warp_offset: DVec2,
    terrain_offset: DVec2,
}

impl WorldRng {
    /// Create a generator for `seed` with offsets in `[-DEFAULT_OFFSET_RANGE, DEFAULT_OFFSET_RANGE)`.
    pub fn new(seed: i32) -> Self {
        Self::with_offset_range(seed, DEFAULT_OFFSET_RANGE)
    }

    /// Create a generator whose run-fixed offsets are drawn from `[-range, range)`.
    ///
    /// A non-positive `range` yields zero offsets without consuming draws.
    pub fn with_offset_range(seed: i32, range: i32) -> Self {
        // Reinterpret the bits so negative seeds map to distinct streams.
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u32 as u64);

        let draw_pair = |rng: &mut ChaCha8Rng| {
            if range <= 0 {
                return DVec2::ZERO;
            }
            let x = rng.random_range(-range..range);
            let y = rng.random_range(-range..range);
            DVec2::new(x as f64, y as f64)
        };
        let warp_offset = draw_pair(&mut rng);
        let terrain_offset = draw_pair(&mut rng);

        Self {
            rng,
            seed,
            warp_offset,
            terrain_offset,
        }
    }

    /// The seed this generator was created from.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Uniform integer in `[min_inclusive, max_exclusive)`.
    ///
    /// An empty range is a caller bug; release builds return `min_inclusive`.
    pub fn next_int(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        debug_assert!(
            min_inclusive < max_exclusive,
            "empty range {min_inclusive}..{max_exclusive}"
        );
        if min_inclusive >= max_exclusive {
            return min_inclusive;
        }
        self.rng.random_range(min_inclusive..max_exclusive)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_float01(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Fisher–Yates shuffle driven by this generator.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i as i32 + 1) as usize;
            items.swap(i, j);
        }
    }

    /// Run-fixed offset applied to domain warp samples.
    pub fn warp_offset(&self) -> DVec2 {
        self.warp_offset
    }

    /// Run-fixed offset applied to terrain noise samples.
    pub fn terrain_offset(&self) -> DVec2 {
        self.terrain_offset
    }
}
