//! Domain warp: perturbs grid coordinates with noise so biome boundaries are
//! irregular rather than grid-aligned.

use glam::{DVec2, IVec2};

use crate::noise_field::NoiseSampler;

/// Integer-to-integer coordinate warp with run-fixed offsets.
#[derive(Clone, Debug)]
pub struct DomainWarp {
    noise: NoiseSampler,
    /// Frequency applied to offset coordinates before sampling.
    pub scale: f64,
    /// Maximum displacement in cells along each axis.
    pub intensity: f64,
    offset: DVec2,
}

impl DomainWarp {
    pub fn new(scale: f64, intensity: f64, offset: DVec2) -> Self {
        Self {
            noise: NoiseSampler::new(),
            scale,
            intensity,
            offset,
        }
    }

    /// The run-fixed offset added to coordinates before sampling.
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    /// Displace `coord` by up to `intensity` cells per axis.
    ///
    /// The y displacement samples the same field with the axes swapped, so
    /// the two components are decorrelated without a second noise table.
    pub fn warp(&self, coord: IVec2) -> IVec2 {
        let sx = (coord.x as f64 + self.offset.x) * self.scale;
        let sy = (coord.y as f64 + self.offset.y) * self.scale;

        let nx = self.noise.sample_signed(sx, sy);
        let ny = self.noise.sample_signed(sy, sx);

        // Half-way cases round away from zero; `as` saturates huge products.
        let dx = (nx * self.intensity).round() as i32;
        let dy = (ny * self.intensity).round() as i32;
        coord.saturating_add(IVec2::new(dx, dy))
    }
}
