//! Generation failures and recoverable data warnings.

use glam::IVec2;

use crate::biome::BiomeRegistryError;

/// Configuration errors that abort a generation run.
///
/// No partial map produced before one of these is usable, and object
/// spawning must not proceed.
#[derive(Debug, thiserror::Error)]
pub enum WorldGenError {
    /// The biome list is empty, so no cell can be resolved.
    #[error("no biomes configured")]
    NoBiomesConfigured,

    /// The map has no cells.
    #[error("map dimensions must be non-zero, got {width}x{height}")]
    ZeroMapDimensions { width: u32, height: u32 },

    /// The biome list could not be registered.
    #[error("invalid biome list: {0}")]
    Registry(#[from] BiomeRegistryError),

    /// An authoritative run was started without somewhere to send placements.
    #[error("authoritative generation requires an object sink")]
    MissingObjectSink,
}

/// Problems in authored data that are skipped locally without aborting.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DataWarning {
    /// The biome has no tiles, so its cells stay unpainted.
    #[error("biome '{biome}' has no tiles; its cells are left unpainted")]
    EmptyTileList { biome: String },

    /// A spawn rule has no object and is ignored.
    #[error("biome '{biome}' spawn rule #{rule} has no object")]
    MissingSpawnObject { biome: String, rule: usize },

    /// A spawn density outside `[0, 1]`; it is clamped.
    #[error("biome '{biome}' spawn rule #{rule} density {density} clamped to [0, 1]")]
    DensityOutOfRange {
        biome: String,
        rule: usize,
        density: f64,
    },

    /// A tile threshold outside `[0, 1]`; it is clamped.
    #[error("biome '{biome}' tile '{tile}' threshold {threshold} clamped to [0, 1]")]
    ThresholdOutOfRange {
        biome: String,
        tile: String,
        threshold: f64,
    },

    /// A noise parameter that is non-finite, negative, or too large; it is
    /// replaced before any run uses it.
    #[error("{parameter} = {value} is out of range; using {replacement}")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        replacement: f64,
    },

    /// A base-layout cell landed outside the map bounds. It is still painted.
    #[error("base layout cell {coord} lies outside the map")]
    StampOutsideBounds { coord: IVec2 },
}

/// Ordered record of warnings raised during a run.
#[derive(Clone, Debug, Default)]
pub struct WarningLog {
    warnings: Vec<DataWarning>,
}

impl WarningLog {
    /// Log `warning` and keep it for the caller.
    pub fn report(&mut self, warning: DataWarning) {
        tracing::warn!(%warning, "worldgen data warning");
        self.warnings.push(warning);
    }

    pub fn as_slice(&self) -> &[DataWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}
