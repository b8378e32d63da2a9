//! Incremental edge-function scanning
//!
//! Each edge function is linear in `x` and `y`, so moving one pixel right adds
//! the edge's `a` coefficient and moving one row down adds its `b` coefficient.
//! The edge values are computed once at the origin and only stepped afterwards.

use nalgebra::Point2;

use crate::error::RenderResult;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Coordinate, Dimensions, EdgeCoefficients, HasDimensions};
use crate::primitive::Triangle;

use super::{prepare, FillStrategy};

/// The three edges in the order their values are tested: `v1 -> v2`, `v2 -> v0`, `v0 -> v1`.
#[inline]
pub fn triangle_edges(triangle: &Triangle<Point2<i32>>) -> [EdgeCoefficients<i32>; 3] {
    let Triangle { ref v0, ref v1, ref v2 } = *triangle;

    [
        EdgeCoefficients::new(v1, v2),
        EdgeCoefficients::new(v2, v0),
        EdgeCoefficients::new(v0, v1),
    ]
}

/// True when all three edge values are non-negative.
///
/// A negative two's-complement `i32` has its top bit set, and OR keeps every set
/// bit, so `w0 | w1 | w2` is negative exactly when at least one input is.
/// When all three are non-negative no top bit is set and the OR is non-negative.
#[inline(always)]
pub fn covers(w0: i32, w1: i32, w2: i32) -> bool {
    (w0 | w1 | w2) >= 0
}

/// Steps the edge functions across the target instead of recomputing them.
///
/// Fills exactly the same pixels as `Naive`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Incremental;

impl FillStrategy for Incremental {
    fn fill(&self, target: &mut Framebuffer, triangle: &Triangle<Point2<i32>>, color: u32) -> RenderResult<usize> {
        if !prepare(target, triangle)? {
            return Ok(0);
        }

        let [e0, e1, e2] = triangle_edges(triangle);
        let Dimensions { width, height } = target.dimensions();

        let mut w0_row = e0.evaluate(0, 0);
        let mut w1_row = e1.evaluate(0, 0);
        let mut w2_row = e2.evaluate(0, 0);

        let mut written = 0;

        for y in 0..height {
            let mut w0 = w0_row;
            let mut w1 = w1_row;
            let mut w2 = w2_row;

            for x in 0..width {
                if covers(w0, w1, w2) {
                    target.put(Coordinate::new(x, y), color);
                    written += 1;
                }

                w0 += e0.a;
                w1 += e1.a;
                w2 += e2.a;
            }

            w0_row += e0.b;
            w1_row += e1.b;
            w2_row += e2.b;
        }

        Ok(written)
    }
}
