//! Biome system: tile palettes, spawn rules, registry, and the shuffled grid
//! partition that assigns each biome a rectangular region of the map.

mod def;
mod partition;
mod registry;

pub use def::{BiomeDef, ObjectRef, SpawnRule, TileDef, TileRef, select_tile};
pub use partition::BiomePartition;
pub use registry::{BiomeId, BiomeRegistry, BiomeRegistryError};
