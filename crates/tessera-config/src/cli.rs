//! Command-line argument parsing for Tessera.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Tessera command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "tessera", about = "Seeded tile-world generator")]
pub struct CliArgs {
    /// World seed shared by every peer.
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i32>,

    /// Run as the authoritative peer (true) or as a replica (false).
    #[arg(long)]
    pub authority: Option<bool>,

    /// Map width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Map height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(authority) = args.authority {
            self.world.authority = authority;
        }
        if let Some(w) = args.width {
            self.worldgen.map_width = w;
        }
        if let Some(h) = args.height {
            self.worldgen.map_height = h;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
