//! Generation pipeline: validate config, then seed → shuffle → stamp → paint,
//! and on the authority, spawn objects.

use glam::IVec2;

use crate::biome::{BiomeDef, BiomeId, BiomePartition, BiomeRegistry};
use crate::config::WorldGenConfig;
use crate::context::GenerationContext;
use crate::error::{DataWarning, WarningLog, WorldGenError};
use crate::grid::MapBounds;
use crate::painter::paint_terrain;
use crate::sink::{Authority, ObjectSink, TileSink};
use crate::spawner::{OccupiedSet, SpawnedObject, spawn_objects};
use crate::stamp::stamp;
use crate::tilemap::{PaintedMap, PlacedTile, TileOrigin};

/// Validated, reusable generator for one static configuration.
///
/// Construction performs every configuration check, so a generator that
/// exists can run any seed without configuration errors.
#[derive(Clone, Debug)]
pub struct WorldGenerator {
    config: WorldGenConfig,
    registry: BiomeRegistry,
    warnings: WarningLog,
}

impl WorldGenerator {
    /// Validate `config` and prepare the biome registry.
    ///
    /// Palettes are sorted by descending threshold, out-of-range thresholds
    /// and densities are clamped, and data problems are recorded as warnings.
    /// Non-finite noise scales fall back to their defaults, and the warp
    /// intensity is kept within `[0, max(width, height)]`.
    ///
    /// # Errors
    ///
    /// Zero map dimensions, an empty biome list, or duplicate biome names.
    pub fn new(mut config: WorldGenConfig) -> Result<Self, WorldGenError> {
        let bounds = config.bounds();
        if bounds.is_empty() {
            return Err(WorldGenError::ZeroMapDimensions {
                width: config.map_width,
                height: config.map_height,
            });
        }
        if config.biomes.is_empty() {
            return Err(WorldGenError::NoBiomesConfigured);
        }

        let mut warnings = WarningLog::default();
        sanitize_parameters(&mut config, &mut warnings);
        let biomes = config
            .biomes
            .iter()
            .cloned()
            .map(|biome| sanitize_biome(biome, &mut warnings));
        let mut registry = BiomeRegistry::from_defs(biomes)?;
        registry.sort_all_tiles();

        Ok(Self {
            config,
            registry,
            warnings,
        })
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Biomes as used for generation: sorted palettes, clamped values.
    pub fn registry(&self) -> &BiomeRegistry {
        &self.registry
    }

    /// Warnings found while validating the configuration.
    pub fn validation_warnings(&self) -> &[DataWarning] {
        self.warnings.as_slice()
    }

    /// Generate the terrain for `seed`, writing every tile to `tiles`.
    ///
    /// Every peer runs this with the shared seed and gets the same map.
    pub fn generate_terrain(
        &self,
        seed: i32,
        tiles: &mut dyn TileSink,
    ) -> Result<GeneratedWorld, WorldGenError> {
        let span = tracing::info_span!("worldgen", seed);
        let _guard = span.enter();

        let mut ctx = GenerationContext::new(
            seed,
            &self.config,
            self.registry.clone(),
            self.warnings.clone(),
        )?;

        let stamped = stamp(
            self.config.base_layout.as_ref(),
            self.config.base_offset,
            ctx.bounds,
            &mut ctx.painted,
            tiles,
            &mut ctx.warnings,
        );
        let painted = paint_terrain(&mut ctx, tiles);

        tracing::info!(
            width = self.config.map_width,
            height = self.config.map_height,
            biomes = self.registry.len(),
            stamped,
            painted,
            "terrain generated"
        );

        Ok(GeneratedWorld {
            ctx,
            spawned: Vec::new(),
            objects_rolled: false,
        })
    }

    /// Full run for one peer: terrain, then objects if `authority` says so.
    ///
    /// Replicas never touch `objects` and draw no spawn randomness; they
    /// receive placements from the authority through the session layer.
    ///
    /// # Errors
    ///
    /// [`WorldGenError::MissingObjectSink`] if this peer is authoritative but
    /// `objects` is `None`; the check happens before any tile is written.
    pub fn generate(
        &self,
        seed: i32,
        authority: impl Into<Authority>,
        tiles: &mut dyn TileSink,
        objects: Option<&mut dyn ObjectSink>,
    ) -> Result<GeneratedWorld, WorldGenError> {
        let authority = authority.into();
        let objects = match (authority, objects) {
            (Authority::Authoritative, None) => return Err(WorldGenError::MissingObjectSink),
            (Authority::Authoritative, Some(sink)) => Some(sink),
            (Authority::Replica, _) => None,
        };

        let mut world = self.generate_terrain(seed, tiles)?;
        if let Some(sink) = objects {
            world.spawn_objects(sink);
        }
        Ok(world)
    }
}

/// Replace noise parameters that would make warping or sampling misbehave.
fn sanitize_parameters(config: &mut WorldGenConfig, warnings: &mut WarningLog) {
    let defaults = WorldGenConfig::default();

    let max_intensity = f64::from(config.map_width.max(config.map_height));
    let intensity = config.warp_intensity;
    let intensity = if intensity.is_nan() || intensity < 0.0 {
        0.0
    } else {
        intensity.min(max_intensity)
    };
    replace_parameter("warp_intensity", &mut config.warp_intensity, intensity, warnings);

    for (parameter, slot, default) in [
        ("warp_scale", &mut config.warp_scale, defaults.warp_scale),
        (
            "terrain_noise_scale",
            &mut config.terrain_noise_scale,
            defaults.terrain_noise_scale,
        ),
    ] {
        let replacement = if slot.is_finite() { *slot } else { default };
        replace_parameter(parameter, slot, replacement, warnings);
    }
}

fn replace_parameter(
    parameter: &'static str,
    slot: &mut f64,
    replacement: f64,
    warnings: &mut WarningLog,
) {
    // NaN never compares equal, so it is always replaced.
    if *slot != replacement {
        warnings.report(DataWarning::ParameterOutOfRange {
            parameter,
            value: *slot,
            replacement,
        });
        *slot = replacement;
    }
}

/// Clamp out-of-range values and report incomplete data for one biome.
fn sanitize_biome(mut biome: BiomeDef, warnings: &mut WarningLog) -> BiomeDef {
    if biome.tiles.is_empty() {
        warnings.report(DataWarning::EmptyTileList {
            biome: biome.name.clone(),
        });
    }
    for tile in &mut biome.tiles {
        if !(0.0..=1.0).contains(&tile.threshold) {
            warnings.report(DataWarning::ThresholdOutOfRange {
                biome: biome.name.clone(),
                tile: tile.name.clone(),
                threshold: tile.threshold,
            });
            tile.threshold = clamp_unit(tile.threshold);
        }
    }
    for (rule_index, rule) in biome.spawn_rules.iter_mut().enumerate() {
        if rule.object.is_none() {
            warnings.report(DataWarning::MissingSpawnObject {
                biome: biome.name.clone(),
                rule: rule_index,
            });
        }
        if !(0.0..=1.0).contains(&rule.density) {
            warnings.report(DataWarning::DensityOutOfRange {
                biome: biome.name.clone(),
                rule: rule_index,
                density: rule.density,
            });
            rule.density = clamp_unit(rule.density);
        }
    }
    biome
}

/// NaN maps to 0.
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Per-biome tile counts and totals for a generated world.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    /// Cells copied from the base layout.
    pub stamped: usize,
    /// Cells painted procedurally.
    pub painted: usize,
    /// `(biome name, painted cells)` in registration order.
    pub per_biome: Vec<(String, usize)>,
    /// Objects spawned so far.
    pub objects: usize,
}

/// The result of a generation run.
///
/// Terrain queries only read, so a finished world can be shared behind an
/// `Arc` by concurrent readers.
#[derive(Debug)]
pub struct GeneratedWorld {
    ctx: GenerationContext,
    spawned: Vec<SpawnedObject>,
    objects_rolled: bool,
}

impl GeneratedWorld {
    /// Run the object spawner over the painted map (authority only).
    ///
    /// The spawner continues the run's RNG stream after the biome shuffle.
    /// It runs at most once per world; later calls return nothing.
    pub fn spawn_objects(&mut self, sink: &mut dyn ObjectSink) -> &[SpawnedObject] {
        if self.objects_rolled {
            tracing::debug!("object spawner already ran for this world");
            return &[];
        }
        self.objects_rolled = true;
        self.spawned = spawn_objects(&mut self.ctx, sink);
        tracing::info!(objects = self.spawned.len(), "objects spawned");
        &self.spawned
    }

    pub fn seed(&self) -> i32 {
        self.ctx.seed()
    }

    pub fn bounds(&self) -> MapBounds {
        self.ctx.bounds()
    }

    pub fn painted(&self) -> &PaintedMap {
        self.ctx.painted()
    }

    pub fn tile_at(&self, coord: IVec2) -> Option<&PlacedTile> {
        self.ctx.painted().get(coord)
    }

    /// Biome at `coord`, using the same warp and shuffle as painting.
    pub fn biome_at(&self, coord: IVec2) -> BiomeId {
        self.ctx.resolve_biome(coord)
    }

    pub fn biome(&self, id: BiomeId) -> &BiomeDef {
        self.ctx.registry().get(id)
    }

    pub fn biome_name_at(&self, coord: IVec2) -> &str {
        &self.biome(self.biome_at(coord)).name
    }

    /// The run's cached biome shuffle.
    pub fn partition(&self) -> &BiomePartition {
        self.ctx.partition()
    }

    /// Nominal centre of the grid cell owned by the named biome, e.g. as a
    /// teleport destination.
    pub fn biome_center(&self, name: &str) -> Option<IVec2> {
        let id = self.ctx.registry().lookup_by_name(name)?;
        let cell = self.partition().cell_of(id)?;
        self.partition().cell_center(cell)
    }

    pub fn occupied(&self) -> &OccupiedSet {
        self.ctx.occupied()
    }

    /// Objects placed by [`GeneratedWorld::spawn_objects`], in placement order.
    pub fn spawned(&self) -> &[SpawnedObject] {
        &self.spawned
    }

    /// Validation and run warnings, in the order they were raised.
    pub fn warnings(&self) -> &[DataWarning] {
        self.ctx.warnings().as_slice()
    }

    pub fn stats(&self) -> WorldStats {
        let registry = self.ctx.registry();
        let mut per_biome = vec![0usize; registry.len()];
        let mut stamped = 0;
        for (_, _, origin) in self.painted().iter() {
            match origin {
                TileOrigin::Stamp => stamped += 1,
                TileOrigin::Biome(id) => per_biome[id.0 as usize] += 1,
            }
        }
        WorldStats {
            stamped,
            painted: per_biome.iter().sum(),
            per_biome: registry
                .iter()
                .map(|(id, def)| (def.name.clone(), per_biome[id.0 as usize]))
                .collect(),
            objects: self.spawned.len(),
        }
    }
}
