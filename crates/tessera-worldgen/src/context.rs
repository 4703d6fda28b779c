//! Run-scoped generation state.
//!
//! Everything a single run mutates lives here and is owned by that run: the
//! seeded RNG, the cached biome shuffle, the painted map and the occupied set.
//! Phase functions take the context explicitly instead of reaching for
//! process-wide managers.

use glam::{DVec2, IVec2};

use crate::biome::{BiomeId, BiomePartition, BiomeRegistry};
use crate::config::WorldGenConfig;
use crate::error::{WarningLog, WorldGenError};
use crate::grid::MapBounds;
use crate::noise_field::NoiseSampler;
use crate::rng::WorldRng;
use crate::spawner::OccupiedSet;
use crate::tilemap::PaintedMap;
use crate::warp::DomainWarp;

/// State for one generation run, created from a seed and validated config.
#[derive(Debug)]
pub struct GenerationContext {
    pub(crate) bounds: MapBounds,
    pub(crate) registry: BiomeRegistry,
    pub(crate) rng: WorldRng,
    pub(crate) warp: DomainWarp,
    pub(crate) partition: BiomePartition,
    pub(crate) terrain_noise: NoiseSampler,
    pub(crate) terrain_offset: DVec2,
    pub(crate) terrain_scale: f64,
    pub(crate) painted: PaintedMap,
    pub(crate) occupied: OccupiedSet,
    pub(crate) warnings: WarningLog,
}

impl GenerationContext {
    /// Seed the RNG, draw the run-fixed offsets, and shuffle the biomes.
    ///
    /// `registry` must already have its palettes sorted.
    pub(crate) fn new(
        seed: i32,
        config: &WorldGenConfig,
        registry: BiomeRegistry,
        warnings: WarningLog,
    ) -> Result<Self, WorldGenError> {
        let bounds = config.bounds();
        let mut rng = WorldRng::with_offset_range(seed, config.offset_range);
        let warp = DomainWarp::new(config.warp_scale, config.warp_intensity, rng.warp_offset());
        let terrain_offset = rng.terrain_offset();
        let partition = BiomePartition::new(&registry, bounds, &mut rng)?;

        tracing::debug!(
            seed,
            order = ?partition.order(),
            warp_offset = ?warp.offset(),
            ?terrain_offset,
            "biome order shuffled"
        );

        Ok(Self {
            bounds,
            registry,
            rng,
            warp,
            partition,
            terrain_noise: NoiseSampler::new(),
            terrain_offset,
            terrain_scale: config.terrain_noise_scale,
            painted: PaintedMap::new(),
            occupied: OccupiedSet::default(),
            warnings,
        })
    }

    /// Biome owning `coord`: warp, then look up the shuffled partition.
    pub fn resolve_biome(&self, coord: IVec2) -> BiomeId {
        self.partition.resolve(self.warp.warp(coord))
    }

    /// Terrain noise value in `[0, 1]` used for tile selection at `coord`.
    pub fn terrain_value(&self, coord: IVec2) -> f64 {
        let x = (coord.x as f64 + self.terrain_offset.x) * self.terrain_scale;
        let y = (coord.y as f64 + self.terrain_offset.y) * self.terrain_scale;
        self.terrain_noise.sample(x, y)
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    pub fn registry(&self) -> &BiomeRegistry {
        &self.registry
    }

    pub fn partition(&self) -> &BiomePartition {
        &self.partition
    }

    pub fn painted(&self) -> &PaintedMap {
        &self.painted
    }

    pub fn occupied(&self) -> &OccupiedSet {
        &self.occupied
    }

    pub fn warnings(&self) -> &WarningLog {
        &self.warnings
    }

    pub fn seed(&self) -> i32 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::{BiomeDef, TileRef};

    fn config() -> WorldGenConfig {
        WorldGenConfig {
            map_width: 16,
            map_height: 16,
            biomes: vec![
                BiomeDef::new("a").with_tile("x", TileRef(0), 0.0),
                BiomeDef::new("b").with_tile("y", TileRef(1), 0.0),
            ],
            ..Default::default()
        }
    }

    fn context(seed: i32) -> GenerationContext {
        let config = config();
        let registry = BiomeRegistry::from_defs(config.biomes.clone()).unwrap();
        GenerationContext::new(seed, &config, registry, WarningLog::default()).unwrap()
    }

    #[test]
    fn test_terrain_value_in_unit_interval() {
        let ctx = context(5);
        for coord in ctx.bounds().iter() {
            let v = ctx.terrain_value(coord);
            assert!((0.0..=1.0).contains(&v), "terrain value {v} out of range at {coord}");
        }
    }

    #[test]
    fn test_resolve_is_stable_within_run() {
        let ctx = context(11);
        for coord in ctx.bounds().iter() {
            assert_eq!(ctx.resolve_biome(coord), ctx.resolve_biome(coord));
        }
    }

    #[test]
    fn test_same_seed_same_offsets_and_order() {
        let a = context(2024);
        let b = context(2024);
        assert_eq!(a.partition().order(), b.partition().order());
        assert_eq!(a.terrain_offset, b.terrain_offset);
        assert_eq!(a.warp.offset(), b.warp.offset());
        assert_eq!(a.seed(), 2024);
    }

    #[test]
    fn test_empty_registry_fails() {
        let config = config();
        let result =
            GenerationContext::new(1, &config, BiomeRegistry::new(), WarningLog::default());
        assert!(matches!(result, Err(WorldGenError::NoBiomesConfigured)));
    }
}
