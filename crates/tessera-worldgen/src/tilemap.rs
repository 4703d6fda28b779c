//! Sparse record of the tiles placed during a run.

use glam::IVec2;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::biome::{BiomeId, TileRef};

/// Which phase placed a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileOrigin {
    /// Copied from the base layout.
    Stamp,
    /// Painted procedurally for the given biome.
    Biome(BiomeId),
}

/// A tile as authored: the name allow-lists match against plus its asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    pub name: String,
    pub tile: TileRef,
}

impl PlacedTile {
    pub fn new(name: impl Into<String>, tile: TileRef) -> Self {
        Self {
            name: name.into(),
            tile,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct PaintedCell {
    tile: PlacedTile,
    origin: TileOrigin,
}

/// Coordinate → placed tile. A coordinate is written at most once.
#[derive(Clone, Debug, Default)]
pub struct PaintedMap {
    cells: HashMap<IVec2, PaintedCell>,
}

impl PaintedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `tile` at `coord`. Returns `false` and leaves the existing tile
    /// untouched if the coordinate was already painted.
    pub fn insert(&mut self, coord: IVec2, tile: PlacedTile, origin: TileOrigin) -> bool {
        if self.cells.contains_key(&coord) {
            return false;
        }
        self.cells.insert(coord, PaintedCell { tile, origin });
        true
    }

    pub fn get(&self, coord: IVec2) -> Option<&PlacedTile> {
        self.cells.get(&coord).map(|cell| &cell.tile)
    }

    pub fn origin(&self, coord: IVec2) -> Option<TileOrigin> {
        self.cells.get(&coord).map(|cell| cell.origin)
    }

    pub fn contains(&self, coord: IVec2) -> bool {
        self.cells.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All painted cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &PlacedTile, TileOrigin)> {
        self.cells
            .iter()
            .map(|(&coord, cell)| (coord, &cell.tile, cell.origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_write_wins() {
        let mut map = PaintedMap::new();
        assert!(map.insert(IVec2::ZERO, PlacedTile::new("floor", TileRef(1)), TileOrigin::Stamp));
        assert!(!map.insert(
            IVec2::ZERO,
            PlacedTile::new("grass", TileRef(2)),
            TileOrigin::Biome(BiomeId(0))
        ));
        assert_eq!(map.get(IVec2::ZERO).unwrap().name, "floor");
        assert_eq!(map.origin(IVec2::ZERO), Some(TileOrigin::Stamp));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_missing_cell() {
        let map = PaintedMap::new();
        assert!(map.get(IVec2::ONE).is_none());
        assert!(!map.contains(IVec2::ONE));
        assert!(map.is_empty());
    }
}
