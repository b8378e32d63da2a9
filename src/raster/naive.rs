//! Per-pixel edge tests, recomputed from scratch at every pixel

use nalgebra::Point2;

use crate::error::RenderResult;
use crate::framebuffer::Framebuffer;
use crate::geometry::{edge_function, Coordinate, Dimensions, HasDimensions};
use crate::primitive::Triangle;

use super::{prepare, FillStrategy};

/// Evaluates all three edge functions at every pixel of the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl FillStrategy for Naive {
    fn fill(&self, target: &mut Framebuffer, triangle: &Triangle<Point2<i32>>, color: u32) -> RenderResult<usize> {
        if !prepare(target, triangle)? {
            return Ok(0);
        }

        let Triangle { v0, v1, v2 } = *triangle;
        let Dimensions { width, height } = target.dimensions();

        let mut written = 0;

        for y in 0..height {
            for x in 0..width {
                let p = Point2::new(x as i32, y as i32);

                let w0 = edge_function(&v1, &v2, &p);
                let w1 = edge_function(&v2, &v0, &p);
                let w2 = edge_function(&v0, &v1, &p);

                if w0 >= 0 && w1 >= 0 && w2 >= 0 {
                    target.put(Coordinate::new(x, y), color);
                    written += 1;
                }
            }
        }

        Ok(written)
    }
}
