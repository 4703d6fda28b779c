//! The world shipped in a freshly created `config.ron`.

use glam::IVec2;
use tessera_worldgen::{BaseLayout, BiomeDef, ObjectRef, SpawnRule, TileRef, WorldGenConfig};

/// Object names referenced by the starter biomes; `ObjectRef(i)` is entry `i`.
pub const STARTER_OBJECTS: [&str; 5] = ["oak", "boulder", "cactus", "pine", "berry_bush"];

const HOME_BASE: &str = "\
#######
#.....#
#..*..#
#.....#
###=###";

/// A 96x64 map with four biomes and a small walled home base at the centre.
pub fn starter_worldgen() -> WorldGenConfig {
    let oak = ObjectRef(0);
    let boulder = ObjectRef(1);
    let cactus = ObjectRef(2);
    let pine = ObjectRef(3);
    let berry_bush = ObjectRef(4);

    let biomes = vec![
        BiomeDef::new("plains")
            .with_tile("grass", TileRef(1), 0.0)
            .with_tile("flowers", TileRef(2), 0.65)
            .with_spawn_rule(SpawnRule::new(berry_bush, 0.02).on_tiles(["grass"]))
            .with_spawn_rule(SpawnRule::new(oak, 0.01)),
        BiomeDef::new("forest")
            .with_tile("moss", TileRef(3), 0.0)
            .with_tile("leaf_litter", TileRef(4), 0.45)
            .with_spawn_rule(SpawnRule::new(oak, 0.12))
            .with_spawn_rule(SpawnRule::new(berry_bush, 0.04).on_tiles(["moss"])),
        BiomeDef::new("desert")
            .with_tile("sand", TileRef(5), 0.0)
            .with_tile("dune", TileRef(6), 0.6)
            .with_spawn_rule(SpawnRule::new(cactus, 0.03).on_tiles(["sand"]))
            .with_spawn_rule(SpawnRule::new(boulder, 0.005)),
        BiomeDef::new("tundra")
            .with_tile("snow", TileRef(7), 0.0)
            .with_tile("rock", TileRef(8), 0.5)
            .with_tile("ice", TileRef(9), 0.75)
            .with_spawn_rule(SpawnRule::new(pine, 0.05).on_tiles(["snow"]))
            .with_spawn_rule(SpawnRule::new(boulder, 0.03).on_tiles(["rock"])),
    ];

    let base_layout = BaseLayout::from_ascii(
        HOME_BASE,
        &[
            ('#', "wall", TileRef(20)),
            ('.', "floor", TileRef(21)),
            ('*', "hearth", TileRef(22)),
            ('=', "door", TileRef(23)),
        ],
    );

    WorldGenConfig {
        map_width: 96,
        map_height: 64,
        biomes,
        base_layout: Some(base_layout),
        base_offset: IVec2::new(-3, -2),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_world_is_valid() {
        let config = starter_worldgen();
        let generator = tessera_worldgen::WorldGenerator::new(config).unwrap();
        assert!(
            generator.validation_warnings().is_empty(),
            "starter data should not need sanitizing: {:?}",
            generator.validation_warnings()
        );
        assert_eq!(generator.registry().len(), 4);
    }

    #[test]
    fn test_starter_objects_cover_spawn_rules() {
        for biome in &starter_worldgen().biomes {
            for rule in &biome.spawn_rules {
                let object = rule.object.expect("starter rules always name an object");
                assert!((object.0 as usize) < STARTER_OBJECTS.len());
            }
        }
    }

    #[test]
    fn test_home_base_fits_inside_map() {
        let config = starter_worldgen();
        let layout = config.base_layout.as_ref().unwrap();
        let bounds = config.bounds();
        assert_eq!(layout.len(), 35, "dots are floor tiles, not gaps");
        for cell in &layout.cells {
            assert!(bounds.contains(cell.offset + config.base_offset));
        }
    }
}
