//! Numeric bounds shared by the edge function and every fill strategy

use nalgebra::Scalar;
use num_traits::{Num, NumCast};

/// Largest coordinate magnitude accepted for a vertex.
///
/// With both vertices and sample points inside `[-MAX_COORDINATE, MAX_COORDINATE]`,
/// every edge function value fits in an `i32`, including the values computed for
/// wide-lane tail lanes that fall past the right edge of the target.
pub const MAX_COORDINATE: i32 = 8192;

/// Largest width or height of a target buffer.
pub const MAX_DIMENSION: u32 = 8192;

/// Scalar usable as a vertex coordinate.
pub trait EdgeScalar: Scalar + Copy + Num + PartialOrd + NumCast {}

impl<T> EdgeScalar for T where T: Scalar + Copy + Num + PartialOrd + NumCast {}

/// Checks that a coordinate is finite and inside the supported range
#[inline]
pub fn coordinate_in_range<N: EdgeScalar>(n: N) -> bool {
    match n.to_f64() {
        Some(value) => value.is_finite() && value.abs() <= MAX_COORDINATE as f64,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(coordinate_in_range(0i32));
        assert!(coordinate_in_range(-8192i32));
        assert!(!coordinate_in_range(8193i32));
        assert!(coordinate_in_range(12.5f32));
        assert!(!coordinate_in_range(std::f32::NAN));
        assert!(!coordinate_in_range(std::f32::INFINITY));
    }
}
