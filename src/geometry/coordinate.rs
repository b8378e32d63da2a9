use super::Dimensions;

/// Integer pixel position inside a target buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Converts signed pixel coordinates, returning `None` outside of `dimensions`.
    #[inline]
    pub fn checked(x: i32, y: i32, dimensions: Dimensions) -> Option<Coordinate> {
        if x < 0 || y < 0 {
            return None;
        }

        let coord = Coordinate::new(x as u32, y as u32);

        if dimensions.in_bounds(coord) { Some(coord) } else { None }
    }
}
