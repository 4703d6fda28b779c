//! Terrain painter: fills every unstamped cell with a tile from its biome.

use crate::context::GenerationContext;
use crate::sink::TileSink;
use crate::tilemap::{PlacedTile, TileOrigin};

/// Paint all cells of the map not already covered by the base stamp.
///
/// Cells are visited in row-major order. Each cell is warped and resolved to
/// a biome, then a tile is selected from that biome's palette using the
/// terrain noise value. Biomes with an empty palette leave their cells
/// unpainted. Returns the number of cells painted.
pub fn paint_terrain(ctx: &mut GenerationContext, sink: &mut dyn TileSink) -> usize {
    let mut painted = 0;

    for coord in ctx.bounds.iter() {
        if ctx.painted.contains(coord) {
            continue;
        }

        let biome_id = ctx.resolve_biome(coord);
        let value = ctx.terrain_value(coord);
        let Some(tile) = ctx.registry.get(biome_id).select_tile(value) else {
            continue;
        };

        let placed = PlacedTile::new(tile.name.clone(), tile.tile);
        if ctx
            .painted
            .insert(coord, placed, TileOrigin::Biome(biome_id))
        {
            sink.set_tile(coord, tile.tile);
            painted += 1;
        }
    }

    tracing::debug!(painted, "terrain painted");
    painted
}
