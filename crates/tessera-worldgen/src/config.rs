//! Static generation settings, loadable from RON alongside authored biome data.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::biome::BiomeDef;
use crate::grid::MapBounds;
use crate::rng::DEFAULT_OFFSET_RANGE;
use crate::stamp::BaseLayout;

/// Everything besides the seed that determines a generated world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Map width in cells.
    pub map_width: u32,
    /// Map height in cells.
    pub map_height: u32,
    /// Frequency of the domain warp noise.
    pub warp_scale: f64,
    /// Maximum warp displacement in cells.
    pub warp_intensity: f64,
    /// Frequency of the terrain noise that selects tiles within a biome.
    pub terrain_noise_scale: f64,
    /// Run-fixed noise offsets are drawn from `[-offset_range, offset_range)`.
    pub offset_range: i32,
    /// Authored biomes, before the per-run shuffle.
    pub biomes: Vec<BiomeDef>,
    /// Fixed pattern stamped before painting.
    pub base_layout: Option<BaseLayout>,
    /// Map coordinate of the layout origin.
    pub base_offset: IVec2,
}

impl WorldGenConfig {
    pub fn bounds(&self) -> MapBounds {
        MapBounds::new(self.map_width, self.map_height)
    }
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            map_width: 128,
            map_height: 128,
            warp_scale: 0.05,
            warp_intensity: 8.0,
            terrain_noise_scale: 0.1,
            offset_range: DEFAULT_OFFSET_RANGE,
            biomes: Vec::new(),
            base_layout: None,
            base_offset: IVec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::TileRef;

    #[test]
    fn test_config_roundtrip() {
        let config = WorldGenConfig {
            biomes: vec![BiomeDef::new("plains").with_tile("grass", TileRef(1), 0.0)],
            ..Default::default()
        };
        let ron_str = ron::to_string(&config).unwrap();
        let back: WorldGenConfig = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: WorldGenConfig = ron::from_str("(map_width: 16)").unwrap();
        assert_eq!(config.map_width, 16);
        assert_eq!(config.map_height, 128);
        assert!(config.base_layout.is_none());
    }
}
