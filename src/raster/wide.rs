//! Wide-lane incremental scanning
//!
//! The incremental algorithm evaluated for `LANES` horizontally adjacent pixels
//! at once. Lane `i` of a row vector holds the edge value at `x + i`, so a step
//! to the next group adds `a * LANES` to every lane.

use nalgebra::Point2;
use wide::*;

use crate::error::RenderResult;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Coordinate, Dimensions, EdgeCoefficients, HasDimensions};
use crate::primitive::Triangle;

use super::incremental::triangle_edges;
use super::{prepare, FillStrategy};

/// Number of 32-bit lanes evaluated per step.
pub const LANES: u32 = 8;

/// One edge function spread across the lanes of a pixel group.
#[derive(Debug, Clone, Copy)]
struct LaneEdge {
    /// Edge values at `x = 0 .. LANES` of the current row
    row: i32x8,
    step_x: i32x8,
    step_y: i32x8,
}

impl LaneEdge {
    fn new(edge: &EdgeCoefficients<i32>) -> LaneEdge {
        let lane_offsets = i32x8::new([0, 1, 2, 3, 4, 5, 6, 7]);

        LaneEdge {
            row: i32x8::splat(edge.evaluate(0, 0)) + i32x8::splat(edge.a) * lane_offsets,
            step_x: i32x8::splat(edge.a * LANES as i32),
            step_y: i32x8::splat(edge.b),
        }
    }
}

/// One bit per lane, set where the pixel is inside or on every edge
#[inline(always)]
fn coverage_mask(w0: i32x8, w1: i32x8, w2: i32x8) -> u32 {
    let w = w0 | w1 | w2;
    let zero = i32x8::splat(0);

    (w.cmp_gt(zero) | w.cmp_eq(zero)).move_mask() as u32
}

/// Lanes still inside the target when `remaining` columns are left in the row
#[inline(always)]
fn tail_mask(remaining: u32) -> u32 {
    if remaining >= LANES {
        (1 << LANES) - 1
    } else {
        (1 << remaining) - 1
    }
}

/// Evaluates `LANES` pixels per step.
///
/// Fills exactly the same pixels as `Incremental`, including widths that are
/// not a multiple of `LANES`: lanes past the right edge are masked off.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideLane;

impl FillStrategy for WideLane {
    fn fill(&self, target: &mut Framebuffer, triangle: &Triangle<Point2<i32>>, color: u32) -> RenderResult<usize> {
        if !prepare(target, triangle)? {
            return Ok(0);
        }

        let [e0, e1, e2] = triangle_edges(triangle);
        let Dimensions { width, height } = target.dimensions();

        let mut edges = [LaneEdge::new(&e0), LaneEdge::new(&e1), LaneEdge::new(&e2)];

        let mut written = 0;

        for y in 0..height {
            let mut w0 = edges[0].row;
            let mut w1 = edges[1].row;
            let mut w2 = edges[2].row;

            let mut x = 0;

            while x < width {
                let mut mask = coverage_mask(w0, w1, w2) & tail_mask(width - x);

                written += mask.count_ones() as usize;

                while mask != 0 {
                    let lane = mask.trailing_zeros();

                    target.put(Coordinate::new(x + lane, y), color);

                    mask &= mask - 1;
                }

                w0 = w0 + edges[0].step_x;
                w1 = w1 + edges[1].step_x;
                w2 = w2 + edges[2].step_x;

                x += LANES;
            }

            for edge in edges.iter_mut() {
                edge.row = edge.row + edge.step_y;
            }
        }

        Ok(written)
    }
}
