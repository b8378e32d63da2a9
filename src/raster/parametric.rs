//! Edge and parameter equations with a top-left style tie-break
//!
//! Pixels are sampled at their centers. A center lying exactly on an edge is
//! assigned by the edge's `tie` flag, so two triangles sharing an edge never
//! both draw (nor both skip) the pixels on it.

use nalgebra::{Point2, Vector3};

use crate::color::pack_rgb;
use crate::error::RenderResult;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Coordinate, Dimensions, HasDimensions, ShadedVertex};
use crate::primitive::Triangle;

use super::prepare;

/// Line through a directed edge in centered form, with its tie-break flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeEquation {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    /// Whether points exactly on the line belong to the triangle
    pub tie: bool,
}

impl EdgeEquation {
    pub fn new(v0: &Point2<f32>, v1: &Point2<f32>) -> EdgeEquation {
        let a = v0.y - v1.y;
        let b = v1.x - v0.x;
        let c = -(a * (v0.x + v1.x) + b * (v0.y + v1.y)) / 2.0;

        EdgeEquation {
            a,
            b,
            c,
            tie: if a != 0.0 { a > 0.0 } else { b > 0.0 },
        }
    }

    #[inline(always)]
    pub fn evaluate(&self, x: f32, y: f32) -> f32 {
        self.a * x + self.b * y + self.c
    }

    #[inline(always)]
    pub fn test(&self, x: f32, y: f32) -> bool {
        self.test_value(self.evaluate(x, y))
    }

    #[inline(always)]
    pub fn test_value(&self, value: f32) -> bool {
        value > 0.0 || (value == 0.0 && self.tie)
    }
}

/// Linear interpolation of one per-vertex scalar over a triangle.
///
/// Built from the triangle's edge equations: each vertex value is weighted by the
/// equation of the edge opposite to it and normalized by the double area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterEquation {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl ParameterEquation {
    /// Returns `None` for a zero-area triangle.
    ///
    /// `e0`, `e1` and `e2` are the edges opposite `p0`, `p1` and `p2`, and `area` is
    /// the triangle's (single) signed area.
    pub fn new(p0: f32, p1: f32, p2: f32,
               e0: &EdgeEquation, e1: &EdgeEquation, e2: &EdgeEquation,
               area: f32) -> Option<ParameterEquation> {
        if area == 0.0 {
            return None;
        }

        let factor = 1.0 / (2.0 * area);

        Some(ParameterEquation {
            a: factor * (p0 * e0.a + p1 * e1.a + p2 * e2.a),
            b: factor * (p0 * e0.b + p1 * e1.b + p2 * e2.b),
            c: factor * (p0 * e0.c + p1 * e1.c + p2 * e2.c),
        })
    }

    #[inline(always)]
    pub fn evaluate(&self, x: f32, y: f32) -> f32 {
        self.a * x + self.b * y + self.c
    }
}

/// Edge equations of a triangle, each opposite the vertex with the same index
pub fn triangle_equations(triangle: &Triangle<ShadedVertex>) -> [EdgeEquation; 3] {
    let Triangle { v0, v1, v2 } = *triangle;

    [
        EdgeEquation::new(&v1.position, &v2.position),
        EdgeEquation::new(&v2.position, &v0.position),
        EdgeEquation::new(&v0.position, &v1.position),
    ]
}

/// Fills a triangle sampling pixel centers, interpolating RGB with parameter equations.
pub fn fill_triangle(target: &mut Framebuffer, triangle: &Triangle<ShadedVertex>) -> RenderResult<usize> {
    if !prepare(target, triangle)? {
        return Ok(0);
    }

    let [e0, e1, e2] = triangle_equations(triangle);

    let area = 0.5 * (e0.c + e1.c + e2.c);

    if area <= 0.0 {
        return Ok(0);
    }

    let Triangle { v0, v1, v2 } = *triangle;

    let channel = |index: usize| {
        ParameterEquation::new(v0.color[index], v1.color[index], v2.color[index], &e0, &e1, &e2, area)
    };

    let (r, g, b) = match (channel(0), channel(1), channel(2)) {
        (Some(r), Some(g), Some(b)) => (r, g, b),
        _ => return Ok(0),
    };

    let Dimensions { width, height } = target.dimensions();

    let mut written = 0;

    for py in 0..height {
        for px in 0..width {
            let (x, y) = (px as f32 + 0.5, py as f32 + 0.5);

            if e0.test(x, y) && e1.test(x, y) && e2.test(x, y) {
                let color = Vector3::new(r.evaluate(x, y), g.evaluate(x, y), b.evaluate(x, y));

                target.put(Coordinate::new(px, py), pack_rgb(&color));
                written += 1;
            }
        }
    }

    Ok(written)
}
