//! Headless harness for the Tessera world generator.
//!
//! Loads `config.ron` (creating it on first run), applies CLI overrides,
//! generates a world into in-memory sinks, and prints an ASCII preview plus a
//! summary. Running it twice with the same `--seed` prints the same map.
//!
//! Run with: `cargo run -p tessera-demo -- --seed 12345`

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tessera_config::{CliArgs, Config, ConfigError, STARTER_OBJECTS, default_config_dir};
use tessera_worldgen::{
    CatalogError, EntityCatalog, EntityKind, PlacementLog, TileBuffer, WorldGenError,
    WorldGenerator, preview,
};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    WorldGen(#[from] WorldGenError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // Logging is not up yet, so config failures go straight to stderr.
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("tessera: {err}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    let log_dir = (!config.debug.log_dir.as_os_str().is_empty())
        .then(|| config.debug.log_dir.as_path());
    tessera_log::init_logging(log_dir, cfg!(debug_assertions), Some(&config));

    info!(config_dir = %config_dir.display(), "Tessera world generator");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "generation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    let catalog = EntityCatalog::from_names(EntityKind::Object, STARTER_OBJECTS)?;
    let generator = WorldGenerator::new(config.worldgen.clone())?;

    let mut tiles = TileBuffer::new();
    let world = if config.world.authority {
        let mut placements = PlacementLog::new();
        let world = generator.generate(config.world.seed, true, &mut tiles, Some(&mut placements))?;
        info!(placements = placements.len(), "object placements ready to broadcast");
        world
    } else {
        generator.generate(config.world.seed, false, &mut tiles, None)?
    };
    info!(tiles = tiles.len(), writes = tiles.write_count(), "tile sink filled");

    if config.world.show_preview {
        println!("{}", preview::render_biomes(&world));
        print!("{}", preview::biome_legend(&world));
        println!();
        println!("{}", preview::render_tiles(&world));
    }
    print!("{}", report::summary(&world, &catalog, config.world.authority));
    Ok(())
}
