//! Seeded tile-world generation: biome partitioning with domain warp,
//! threshold-based terrain painting, base-layout stamping, and density-based
//! object placement.
//!
//! Terrain is a pure function of `(seed, config)`, so peers that share only
//! the seed paint identical maps. Object placement is decided by a single
//! authority and delivered to everyone else through an [`ObjectSink`].

mod config;
mod context;
mod error;
mod generator;
mod grid;
mod noise_field;
mod painter;
mod rng;
mod spawner;
mod stamp;
mod tilemap;
mod warp;

pub mod biome;
pub mod catalog;
pub mod preview;
pub mod sink;

pub use biome::{
    BiomeDef, BiomeId, BiomePartition, BiomeRegistry, BiomeRegistryError, ObjectRef, SpawnRule,
    TileDef, TileRef, select_tile,
};
pub use catalog::{CatalogEntry, CatalogError, EntityCatalog, EntityKind, IndexedCatalog};
pub use config::WorldGenConfig;
pub use error::{DataWarning, WorldGenError};
pub use generator::{GeneratedWorld, WorldGenerator, WorldStats};
pub use grid::MapBounds;
pub use noise_field::{NOISE_PERMUTATION_SEED, NoiseSampler};
pub use rng::{DEFAULT_OFFSET_RANGE, WorldRng};
pub use sink::{Authority, ObjectHandle, ObjectSink, PlacementLog, TileBuffer, TileSink};
pub use spawner::{OccupiedSet, SpawnedObject};
pub use stamp::{BaseLayout, StampCell};
pub use tilemap::{PaintedMap, PlacedTile, TileOrigin};
pub use warp::DomainWarp;
