//! Map extent and grid coordinates.
//!
//! Coordinates are `IVec2` with the origin at the map centre; a map of width
//! `W` covers `x ∈ [-W/2, -W/2 + W)`, and likewise for the height.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The bounding rectangle of a generated map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapBounds {
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl MapBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Half extents `(W/2, H/2)` using integer division.
    pub fn half_extents(&self) -> IVec2 {
        IVec2::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Smallest coordinate inside the map (inclusive).
    pub fn min(&self) -> IVec2 {
        -self.half_extents()
    }

    /// One past the largest coordinate inside the map (exclusive).
    pub fn max(&self) -> IVec2 {
        self.min() + IVec2::new(self.width as i32, self.height as i32)
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, coord: IVec2) -> bool {
        let (min, max) = (self.min(), self.max());
        coord.x >= min.x && coord.x < max.x && coord.y >= min.y && coord.y < max.y
    }

    /// Every coordinate in row-major order: `y` ascending in the outer loop,
    /// `x` ascending in the inner loop.
    pub fn iter(&self) -> impl Iterator<Item = IVec2> + use<> {
        let (min, max) = (self.min(), self.max());
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| IVec2::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_bounds_centered() {
        let bounds = MapBounds::new(4, 4);
        assert_eq!(bounds.min(), IVec2::new(-2, -2));
        assert_eq!(bounds.max(), IVec2::new(2, 2));
        assert!(bounds.contains(IVec2::new(-2, 1)));
        assert!(!bounds.contains(IVec2::new(2, 0)));
    }

    #[test]
    fn test_odd_bounds_cover_exact_width() {
        let bounds = MapBounds::new(5, 3);
        assert_eq!(bounds.min(), IVec2::new(-2, -1));
        assert_eq!(bounds.max(), IVec2::new(3, 2));
        assert_eq!(bounds.iter().count(), 15);
    }

    #[test]
    fn test_iteration_is_row_major() {
        let bounds = MapBounds::new(2, 2);
        let cells: Vec<_> = bounds.iter().collect();
        assert_eq!(
            cells,
            vec![
                IVec2::new(-1, -1),
                IVec2::new(0, -1),
                IVec2::new(-1, 0),
                IVec2::new(0, 0),
            ]
        );
    }

    #[test]
    fn test_empty_bounds() {
        let bounds = MapBounds::new(0, 10);
        assert!(bounds.is_empty());
        assert_eq!(bounds.iter().count(), 0);
        assert_eq!(bounds.area(), 0);
    }
}
