//! Configuration system for Tessera.
//!
//! Holds the run settings (seed, authority role, logging) and the full world
//! generation config, persisted to disk as a single RON file. Supports CLI
//! overrides via clap, hot-reload detection, and forward/backward compatible
//! serialization.

mod cli;
mod config;
mod error;
mod starter;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, WorldConfig, default_config_dir};
pub use error::ConfigError;
pub use starter::{STARTER_OBJECTS, starter_worldgen};
