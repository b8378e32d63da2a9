use crate::geometry::{Coordinate, Dimensions};

/// Maps a pixel coordinate onto a linear buffer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// Pixels of one column are contiguous: `x * height + y`.
    ///
    /// Equal to `x * width + y` for square targets.
    ColumnMajor,
    /// Pixels of one row are contiguous: `y * width + x`.
    RowMajor,
}

impl Default for Addressing {
    fn default() -> Addressing { Addressing::ColumnMajor }
}

impl Addressing {
    /// Linear index of `coord`. The coordinate must lie within `dimensions`.
    #[inline(always)]
    pub fn index(self, coord: Coordinate, dimensions: Dimensions) -> usize {
        debug_assert!(dimensions.in_bounds(coord));

        match self {
            Addressing::ColumnMajor => coord.x as usize * dimensions.height as usize + coord.y as usize,
            Addressing::RowMajor => coord.y as usize * dimensions.width as usize + coord.x as usize,
        }
    }
}
