//! Interpolation utilities

use nalgebra::{Point2, Scalar, Vector3};

/// Describes a type that can be linearly interpolated between two values.
///
/// The span interpolator uses this to carry colors (or whole vertices) along
/// triangle edges and across each horizontal span.
pub trait Interpolate {
    /// Interpolate from `x1` at `t = 0` to `x2` at `t = 1`
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self;
}

impl Interpolate for f32 {
    #[inline(always)]
    fn linear_interpolate(t: f32, x1: &f32, x2: &f32) -> f32 {
        x1 + (x2 - x1) * t
    }
}

impl Interpolate for f64 {
    #[inline(always)]
    fn linear_interpolate(t: f32, x1: &f64, x2: &f64) -> f64 {
        x1 + (x2 - x1) * t as f64
    }
}

impl<N> Interpolate for Vector3<N> where N: Scalar + Interpolate {
    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        Vector3::new(Interpolate::linear_interpolate(t, &x1.x, &x2.x),
                     Interpolate::linear_interpolate(t, &x1.y, &x2.y),
                     Interpolate::linear_interpolate(t, &x1.z, &x2.z))
    }
}

impl<N> Interpolate for Point2<N> where N: Scalar + Interpolate {
    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        Point2::new(Interpolate::linear_interpolate(t, &x1.x, &x2.x),
                    Interpolate::linear_interpolate(t, &x1.y, &x2.y))
    }
}
