//! Text renderings of a generated world for logs, tools, and bug reports.

use crate::generator::GeneratedWorld;
use crate::tilemap::TileOrigin;

/// Glyphs used for biome cells, indexed by registration order.
const BIOME_GLYPHS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// One character per cell: the first letter of the tile name, `@` where an
/// object was spawned, and a space for unpainted cells. Rows run from the
/// smallest `y` to the largest.
pub fn render_tiles(world: &GeneratedWorld) -> String {
    render(world, |world, coord| {
        if world.occupied().contains(coord) {
            return '@';
        }
        world
            .tile_at(coord)
            .and_then(|tile| tile.name.chars().next())
            .unwrap_or(' ')
    })
}

/// One character per cell identifying the biome that painted it; `#` marks
/// stamped cells and `?` biomes beyond the glyph table.
pub fn render_biomes(world: &GeneratedWorld) -> String {
    render(world, |world, coord| match world.painted().origin(coord) {
        Some(TileOrigin::Stamp) => '#',
        Some(TileOrigin::Biome(id)) => BIOME_GLYPHS
            .get(id.0 as usize)
            .map_or('?', |&b| b as char),
        None => ' ',
    })
}

/// Legend for [`render_biomes`]: `glyph = name` per line.
pub fn biome_legend(world: &GeneratedWorld) -> String {
    let partition = world.partition();
    partition
        .order()
        .iter()
        .enumerate()
        .map(|(cell, &id)| {
            let glyph = BIOME_GLYPHS.get(id.0 as usize).map_or('?', |&b| b as char);
            format!("{glyph} = {} (cell {cell})\n", world.biome(id).name)
        })
        .collect()
}

fn render(world: &GeneratedWorld, glyph: impl Fn(&GeneratedWorld, glam::IVec2) -> char) -> String {
    let bounds = world.bounds();
    let mut out = String::with_capacity(bounds.area() + bounds.height as usize);
    let (min, max) = (bounds.min(), bounds.max());
    for y in min.y..max.y {
        for x in min.x..max.x {
            out.push(glyph(world, glam::IVec2::new(x, y)));
        }
        out.push('\n');
    }
    out
}
