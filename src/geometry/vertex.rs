use nalgebra::{Point2, Vector3};

use crate::interpolate::Interpolate;
use crate::numeric::EdgeScalar;

/// Gives access to the device-space position of a vertex.
pub trait HasPosition {
    type Scalar: EdgeScalar;

    fn position(&self) -> Point2<Self::Scalar>;
}

impl<N: EdgeScalar> HasPosition for Point2<N> {
    type Scalar = N;

    #[inline(always)]
    fn position(&self) -> Point2<N> { *self }
}

/// Device-space vertex carrying an RGB color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedVertex {
    pub position: Point2<f32>,
    pub color: Vector3<f32>,
}

impl ShadedVertex {
    #[inline]
    pub fn new(x: f32, y: f32, r: f32, g: f32, b: f32) -> ShadedVertex {
        ShadedVertex {
            position: Point2::new(x, y),
            color: Vector3::new(r, g, b),
        }
    }
}

impl HasPosition for ShadedVertex {
    type Scalar = f32;

    #[inline(always)]
    fn position(&self) -> Point2<f32> { self.position }
}

impl Interpolate for ShadedVertex {
    #[inline]
    fn linear_interpolate(t: f32, x1: &Self, x2: &Self) -> Self {
        ShadedVertex {
            position: Interpolate::linear_interpolate(t, &x1.position, &x2.position),
            color: Interpolate::linear_interpolate(t, &x1.color, &x2.color),
        }
    }
}
