//! Shuffled grid partition: one rectangular map region per biome.
//!
//! `N` biomes are laid out on a `cols × rows` grid with `cols = ceil(sqrt(N))`
//! and `rows = ceil(N / cols)`, in row-major order of a per-run shuffled
//! biome list. The shuffle is computed once and cached so later lookups (a
//! teleport picking a destination biome, for instance) agree with painting.

use glam::IVec2;

use super::{BiomeId, BiomeRegistry};
use crate::error::WorldGenError;
use crate::grid::MapBounds;
use crate::rng::WorldRng;

/// Maps warped coordinates to the biome owning that grid cell.
#[derive(Clone, Debug)]
pub struct BiomePartition {
    order: Vec<BiomeId>,
    bounds: MapBounds,
    cols: i32,
    rows: i32,
    cell_size: IVec2,
}

impl BiomePartition {
    /// Shuffle the registry's biomes with `rng` and lay them out over `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::NoBiomesConfigured`] if the registry is empty.
    pub fn new(
        registry: &BiomeRegistry,
        bounds: MapBounds,
        rng: &mut WorldRng,
    ) -> Result<Self, WorldGenError> {
        let mut order: Vec<BiomeId> = registry.ids().collect();
        if order.is_empty() {
            return Err(WorldGenError::NoBiomesConfigured);
        }
        rng.shuffle(&mut order);
        Self::with_order(order, bounds)
    }

    /// Lay out an explicit biome order without shuffling.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::NoBiomesConfigured`] if `order` is empty.
    pub fn with_order(order: Vec<BiomeId>, bounds: MapBounds) -> Result<Self, WorldGenError> {
        let n = order.len();
        if n == 0 {
            return Err(WorldGenError::NoBiomesConfigured);
        }
        let cols = (n as f64).sqrt().ceil() as i32;
        let rows = n.div_ceil(cols as usize) as i32;
        let cell_size = IVec2::new(
            (bounds.width as i32 / cols).max(1),
            (bounds.height as i32 / rows).max(1),
        );
        Ok(Self {
            order,
            bounds,
            cols,
            rows,
            cell_size,
        })
    }

    /// Biome owning the grid cell under `warped`.
    ///
    /// Points pushed outside the nominal grid by the warp, or onto an unused
    /// trailing cell of the last row, resolve to the nearest valid biome.
    pub fn resolve(&self, warped: IVec2) -> BiomeId {
        let local = warped.saturating_add(self.bounds.half_extents());
        let col = local.x.div_euclid(self.cell_size.x);
        let row = local.y.div_euclid(self.cell_size.y);
        let last = self.order.len() - 1;

        if (0..self.cols).contains(&col) && (0..self.rows).contains(&row) {
            let index = (row * self.cols + col) as usize;
            if index <= last {
                return self.order[index];
            }
        }

        let col = col.clamp(0, self.cols - 1);
        let row = row.clamp(0, self.rows - 1);
        let index = (row * self.cols + col) as usize;
        self.order[index.min(last)]
    }

    /// The shuffled biome order, indexed by grid cell.
    pub fn order(&self) -> &[BiomeId] {
        &self.order
    }

    /// Biome occupying grid cell `index`, if it exists.
    pub fn biome_at_cell(&self, index: usize) -> Option<BiomeId> {
        self.order.get(index).copied()
    }

    /// Grid cell index assigned to `biome` in this run.
    pub fn cell_of(&self, biome: BiomeId) -> Option<usize> {
        self.order.iter().position(|&b| b == biome)
    }

    /// `(cols, rows)` of the partition grid.
    pub fn grid_dims(&self) -> (i32, i32) {
        (self.cols, self.rows)
    }

    /// Size of one grid cell in map cells.
    pub fn cell_size(&self) -> IVec2 {
        self.cell_size
    }

    /// Nominal map-space rectangle `[min, max)` of grid cell `index`, before warping.
    pub fn cell_bounds(&self, index: usize) -> Option<(IVec2, IVec2)> {
        if index >= self.order.len() {
            return None;
        }
        let col = index as i32 % self.cols;
        let row = index as i32 / self.cols;
        let min = self.bounds.min() + IVec2::new(col, row) * self.cell_size;
        Some((min, min + self.cell_size))
    }

    /// Nominal centre of grid cell `index`.
    pub fn cell_center(&self, index: usize) -> Option<IVec2> {
        self.cell_bounds(index)
            .map(|(min, max)| min + (max - min) / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeDef;

    fn registry(n: usize) -> BiomeRegistry {
        BiomeRegistry::from_defs((0..n).map(|i| BiomeDef::new(format!("biome_{i}")))).unwrap()
    }

    #[test]
    fn test_empty_registry_rejected() {
        let mut rng = WorldRng::new(1);
        let result = BiomePartition::new(&BiomeRegistry::new(), MapBounds::new(8, 8), &mut rng);
        assert!(matches!(result, Err(WorldGenError::NoBiomesConfigured)));
    }

    #[test]
    fn test_grid_dimensions() {
        let cases = [(1, (1, 1)), (2, (2, 1)), (3, (2, 2)), (4, (2, 2)), (5, (3, 2)), (10, (4, 3))];
        for (n, dims) in cases {
            let ids = (0..n as u16).map(BiomeId).collect();
            let partition = BiomePartition::with_order(ids, MapBounds::new(64, 64)).unwrap();
            assert_eq!(partition.grid_dims(), dims, "wrong grid for {n} biomes");
        }
    }

    #[test]
    fn test_shuffle_is_permutation_and_deterministic() {
        let reg = registry(7);
        let a = BiomePartition::new(&reg, MapBounds::new(32, 32), &mut WorldRng::new(77)).unwrap();
        let b = BiomePartition::new(&reg, MapBounds::new(32, 32), &mut WorldRng::new(77)).unwrap();
        assert_eq!(a.order(), b.order());

        let mut sorted = a.order().to_vec();
        sorted.sort();
        assert_eq!(sorted, reg.ids().collect::<Vec<_>>());
    }

    #[test]
    fn test_row_major_cells() {
        let ids = vec![BiomeId(10), BiomeId(11), BiomeId(12), BiomeId(13)];
        let p = BiomePartition::with_order(ids, MapBounds::new(8, 8)).unwrap();
        assert_eq!(p.resolve(IVec2::new(-4, -4)), BiomeId(10));
        assert_eq!(p.resolve(IVec2::new(0, -4)), BiomeId(11));
        assert_eq!(p.resolve(IVec2::new(-1, 0)), BiomeId(12));
        assert_eq!(p.resolve(IVec2::new(3, 3)), BiomeId(13));
    }

    #[test]
    fn test_out_of_grid_points_clamp() {
        let ids = vec![BiomeId(0), BiomeId(1), BiomeId(2), BiomeId(3)];
        let p = BiomePartition::with_order(ids, MapBounds::new(8, 8)).unwrap();
        assert_eq!(p.resolve(IVec2::new(-9, -9)), BiomeId(0));
        assert_eq!(p.resolve(IVec2::new(20, -6)), BiomeId(1));
        assert_eq!(p.resolve(IVec2::new(-30, 5)), BiomeId(2));
        assert_eq!(p.resolve(IVec2::new(100, 100)), BiomeId(3));
        // Left of column 0 on the second row must not wrap to the first row.
        assert_eq!(p.resolve(IVec2::new(-5, 1)), BiomeId(2));
    }

    #[test]
    fn test_extreme_points_clamp_without_overflow() {
        let ids = vec![BiomeId(0), BiomeId(1), BiomeId(2), BiomeId(3)];
        let p = BiomePartition::with_order(ids, MapBounds::new(8, 8)).unwrap();
        assert_eq!(p.resolve(IVec2::new(i32::MAX, i32::MAX)), BiomeId(3));
        assert_eq!(p.resolve(IVec2::new(i32::MIN, i32::MIN)), BiomeId(0));
        assert_eq!(p.resolve(IVec2::new(i32::MAX, i32::MIN)), BiomeId(1));
    }

    #[test]
    fn test_unused_trailing_cell_maps_to_last_biome() {
        // Three biomes on a 2x2 grid leave the bottom-right cell unused.
        let ids = vec![BiomeId(0), BiomeId(1), BiomeId(2)];
        let p = BiomePartition::with_order(ids, MapBounds::new(8, 8)).unwrap();
        assert_eq!(p.resolve(IVec2::new(2, 2)), BiomeId(2));
    }

    #[test]
    fn test_resolution_is_total_near_edges() {
        let reg = registry(5);
        let p = BiomePartition::new(&reg, MapBounds::new(20, 14), &mut WorldRng::new(3)).unwrap();
        for x in -30..30 {
            for y in -30..30 {
                let id = p.resolve(IVec2::new(x, y));
                assert!((id.0 as usize) < reg.len());
            }
        }
    }

    #[test]
    fn test_tiny_map_does_not_divide_by_zero() {
        let ids = (0..9).map(BiomeId).collect();
        let p = BiomePartition::with_order(ids, MapBounds::new(2, 2)).unwrap();
        assert_eq!(p.cell_size(), IVec2::ONE);
        let _ = p.resolve(IVec2::new(0, 0));
    }

    #[test]
    fn test_cell_queries() {
        let ids = vec![BiomeId(4), BiomeId(2)];
        let p = BiomePartition::with_order(ids, MapBounds::new(8, 8)).unwrap();
        assert_eq!(p.biome_at_cell(1), Some(BiomeId(2)));
        assert_eq!(p.biome_at_cell(2), None);
        assert_eq!(p.cell_of(BiomeId(4)), Some(0));
        assert_eq!(p.cell_of(BiomeId(9)), None);
        assert_eq!(
            p.cell_bounds(1),
            Some((IVec2::new(0, -4), IVec2::new(4, 4)))
        );
        let center = p.cell_center(1).unwrap();
        assert_eq!(center, IVec2::new(2, 0));
        assert_eq!(p.resolve(center), BiomeId(2));
    }
}
