//! Base-stamp overlay: a fixed, hand-authored tile pattern copied onto the map
//! before procedural painting so the home area is identical for every seed.

use glam::IVec2;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::biome::TileRef;
use crate::error::{DataWarning, WarningLog};
use crate::grid::MapBounds;
use crate::sink::TileSink;
use crate::tilemap::{PaintedMap, PlacedTile, TileOrigin};

/// One non-empty cell of a base layout, relative to the layout origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StampCell {
    pub offset: IVec2,
    pub tile: PlacedTile,
}

/// A pre-authored tile pattern. Empty cells are simply absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseLayout {
    pub cells: Vec<StampCell>,
}

impl BaseLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell(mut self, offset: IVec2, tile: PlacedTile) -> Self {
        self.cells.push(StampCell { offset, tile });
        self
    }

    /// Build a layout from ASCII art. Row `i` becomes `y = i`, column `j`
    /// becomes `x = j`. Characters missing from `legend` are empty cells.
    pub fn from_ascii(art: &str, legend: &[(char, &str, TileRef)]) -> Self {
        let legend: HashMap<char, PlacedTile> = legend
            .iter()
            .map(|&(ch, name, tile)| (ch, PlacedTile::new(name, tile)))
            .collect();

        let cells = art
            .lines()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(move |(col, ch)| (IVec2::new(col as i32, row as i32), ch))
            })
            .filter_map(|(offset, ch)| {
                legend.get(&ch).map(|tile| StampCell {
                    offset,
                    tile: tile.clone(),
                })
            })
            .collect();

        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Copy `layout` into `painted` at `offset`, writing each new cell to `sink`.
///
/// A missing layout is a no-op. If the layout lists a coordinate twice the
/// first entry wins. Returns the number of cells stamped.
pub fn stamp(
    layout: Option<&BaseLayout>,
    offset: IVec2,
    bounds: MapBounds,
    painted: &mut PaintedMap,
    sink: &mut dyn TileSink,
    warnings: &mut WarningLog,
) -> usize {
    let Some(layout) = layout else {
        return 0;
    };

    let mut stamped = 0;
    for cell in &layout.cells {
        let coord = cell.offset + offset;
        if !bounds.contains(coord) {
            warnings.report(DataWarning::StampOutsideBounds { coord });
        }
        if painted.insert(coord, cell.tile.clone(), TileOrigin::Stamp) {
            sink.set_tile(coord, cell.tile.tile);
            stamped += 1;
        }
    }
    stamped
}
