//! Triangle primitive

use log::trace;
use num_traits::Zero;

use crate::error::{RenderError, RenderResult};
use crate::geometry::{edge_function, FaceWinding, HasPosition};
use crate::numeric::coordinate_in_range;

/// An ordered triple of device-space vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<V> {
    pub v0: V,
    pub v1: V,
    pub v2: V,
}

impl<V> Triangle<V> {
    #[inline]
    pub fn new(v0: V, v1: V, v2: V) -> Triangle<V> {
        Triangle { v0, v1, v2 }
    }
}

impl<V> Triangle<V> where V: HasPosition {
    /// Twice the signed area, `edge_function(v0, v1, v2)`.
    ///
    /// This is also the sum of the three edge functions at any point.
    #[inline]
    pub fn double_area(&self) -> V::Scalar {
        edge_function(&self.v0.position(), &self.v1.position(), &self.v2.position())
    }

    /// Winding order as seen in device space, `None` when degenerate
    #[inline]
    pub fn winding(&self) -> Option<FaceWinding> {
        FaceWinding::from_area(self.double_area())
    }

    /// True for collinear or coincident vertices
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.double_area() == <V::Scalar as Zero>::zero()
    }

    /// Checks every coordinate is finite and within `MAX_COORDINATE`.
    pub fn validate(&self) -> RenderResult<()> {
        for vertex in &[&self.v0, &self.v1, &self.v2] {
            let p = vertex.position();

            if !coordinate_in_range(p.x) || !coordinate_in_range(p.y) {
                return Err(RenderError::InvalidInput { reason: "vertex coordinate is not finite or exceeds the supported range" });
            }
        }

        Ok(())
    }

    /// Validates the triangle and reports whether it covers any area with the accepted winding.
    ///
    /// Every fill strategy only draws `Clockwise` triangles. Degenerate and
    /// counter-clockwise triangles are a successful no-op.
    pub fn is_drawable(&self) -> RenderResult<bool> {
        self.validate()?;

        match self.winding() {
            Some(FaceWinding::Clockwise) => Ok(true),
            Some(FaceWinding::CounterClockwise) => {
                trace!("skipping counter-clockwise triangle");
                Ok(false)
            }
            None => {
                trace!("skipping degenerate triangle");
                Ok(false)
            }
        }
    }
}
