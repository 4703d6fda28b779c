//! Coherent 2D noise normalized to `[0, 1]`.
//!
//! The permutation table is fixed so that all variation between runs comes
//! from the run-fixed sample offsets drawn by [`WorldRng`](crate::WorldRng).

use noise::{NoiseFn, Perlin};

/// Permutation seed shared by every sampler. Changing it changes every world.
pub const NOISE_PERMUTATION_SEED: u32 = 0;

/// Continuous, deterministic 2D gradient noise with output in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct NoiseSampler {
    perlin: Perlin,
}

impl NoiseSampler {
    /// Create a sampler using [`NOISE_PERMUTATION_SEED`].
    pub fn new() -> Self {
        Self::with_permutation_seed(NOISE_PERMUTATION_SEED)
    }

    /// Create a sampler with an explicit permutation seed.
    pub fn with_permutation_seed(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Sample the noise field at a continuous coordinate.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let raw = self.perlin.get([x, y]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Sample and remap to `[-1, 1]`.
    pub fn sample_signed(&self, x: f64, y: f64) -> f64 {
        self.sample(x, y) * 2.0 - 1.0
    }
}

impl Default for NoiseSampler {
    fn default() -> Self {
        Self::new()
    }
}
