//! Biome definition: tile palette with thresholds and object spawn rules.

use serde::{Deserialize, Serialize};

/// Opaque handle to a tile asset, interpreted only by the tile sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileRef(pub u32);

/// Opaque handle to a spawnable object, interpreted only by the object sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef(pub u32);

/// One entry of a biome's terrain palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileDef {
    /// Identifier used by spawn-rule allow-lists (e.g., "grass").
    pub name: String,
    /// Asset handed to the tile sink.
    pub tile: TileRef,
    /// Minimum noise value, in `[0.0, 1.0]`, at which this tile is chosen.
    pub threshold: f64,
}

impl TileDef {
    pub fn new(name: impl Into<String>, tile: TileRef, threshold: f64) -> Self {
        Self {
            name: name.into(),
            tile,
            threshold,
        }
    }
}

/// Probability of placing an object on an eligible cell of a biome.
///
/// Rules are evaluated in list order and the first successful roll wins the
/// cell, so authors should list rarer or more important objects first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnRule {
    /// Object to place. `None` marks an incomplete rule that is skipped.
    pub object: Option<ObjectRef>,
    /// Per-cell placement probability, in `[0.0, 1.0]`.
    pub density: f64,
    /// Tile names this rule may spawn on. Empty means every tile of the biome.
    #[serde(default)]
    pub allowed_tiles: Vec<String>,
}

impl SpawnRule {
    pub fn new(object: ObjectRef, density: f64) -> Self {
        Self {
            object: Some(object),
            density,
            allowed_tiles: Vec::new(),
        }
    }

    /// Restrict the rule to the given tile names.
    pub fn on_tiles<I, S>(mut self, tiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tiles = tiles.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if the allow-list admits `tile_name`.
    pub fn allows(&self, tile_name: &str) -> bool {
        self.allowed_tiles.is_empty() || self.allowed_tiles.iter().any(|t| t == tile_name)
    }
}

/// Full descriptor for a biome type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeDef {
    /// Unique biome name (e.g., "plains").
    pub name: String,
    /// Terrain palette. Selection requires descending threshold order; see
    /// [`BiomeDef::sort_tiles`].
    #[serde(default)]
    pub tiles: Vec<TileDef>,
    /// Object spawn rules in priority order: the first rule that passes its
    /// allow-list and density roll claims the cell.
    #[serde(default)]
    pub spawn_rules: Vec<SpawnRule>,
}

impl BiomeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tiles: Vec::new(),
            spawn_rules: Vec::new(),
        }
    }

    pub fn with_tile(mut self, name: impl Into<String>, tile: TileRef, threshold: f64) -> Self {
        self.tiles.push(TileDef::new(name, tile, threshold));
        self
    }

    pub fn with_spawn_rule(mut self, rule: SpawnRule) -> Self {
        self.spawn_rules.push(rule);
        self
    }

    /// Sort the palette by descending threshold. Ties keep authored order.
    pub fn sort_tiles(&mut self) {
        self.tiles
            .sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
    }

    /// Select a tile for noise value `value`; see [`select_tile`].
    pub fn select_tile(&self, value: f64) -> Option<&TileDef> {
        select_tile(value, &self.tiles)
    }
}

/// Pick the first tile whose threshold is `<= value` from a palette sorted by
/// descending threshold.
///
/// If `value` is below every threshold the last (lowest) tile is returned as
/// the catch-all. An empty palette yields `None`.
pub fn select_tile(value: f64, tiles: &[TileDef]) -> Option<&TileDef> {
    tiles
        .iter()
        .find(|tile| tile.threshold <= value)
        .or_else(|| tiles.last())
}
