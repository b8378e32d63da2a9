//! Scanline span interpolation
//!
//! Walks the triangle top to bottom along its edges instead of testing pixels.
//! The edge with the greatest vertical extent (the long edge) is paired with
//! each of the two remaining edges in turn, and every scanline between a pair
//! becomes one horizontal span whose endpoints are interpolated along the edges.

use nalgebra::Point2;

use crate::color::pack_rgb;
use crate::error::RenderResult;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Coordinate, Dimensions, HasDimensions, ShadedVertex};
use crate::interpolate::Interpolate;
use crate::primitive::Triangle;
use crate::utils::min;

use super::prepare;

/// How span pixels are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Every pixel gets the same packed color
    Flat(u32),
    /// Vertex colors are interpolated along edges and across spans
    Gouraud,
}

/// Horizontal run of pixels at a fixed `y`, covering `[v0.x, v1.x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub v0: ShadedVertex,
    pub v1: ShadedVertex,
}

impl Span {
    /// Orders the endpoints left to right
    #[inline]
    pub fn new(a: ShadedVertex, b: ShadedVertex) -> Span {
        if a.position.x < b.position.x {
            Span { v0: a, v1: b }
        } else {
            Span { v0: b, v1: a }
        }
    }
}

/// Triangle edge with `v0` on top, so `y` grows from `v0` to `v1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanEdge {
    pub v0: ShadedVertex,
    pub v1: ShadedVertex,
}

impl SpanEdge {
    #[inline]
    pub fn new(a: ShadedVertex, b: ShadedVertex) -> SpanEdge {
        if a.position.y < b.position.y {
            SpanEdge { v0: a, v1: b }
        } else {
            SpanEdge { v0: b, v1: a }
        }
    }

    #[inline]
    pub fn y_extent(&self) -> f32 {
        self.v1.position.y - self.v0.position.y
    }

    /// Point on the edge at `factor` along its length, placed on scanline `y`.
    ///
    /// The horizontal offset from `v0` is truncated to whole pixels.
    #[inline]
    fn at(&self, factor: f32, y: f32) -> ShadedVertex {
        let x_extent = self.v1.position.x - self.v0.position.x;

        ShadedVertex {
            position: Point2::new(self.v0.position.x + (x_extent * factor).trunc(), y),
            color: Interpolate::linear_interpolate(factor, &self.v0.color, &self.v1.color),
        }
    }
}

/// First whole step from `start` that is not left of (or above) zero
#[inline]
fn steps_to_origin(start: f32) -> f32 {
    if start < 0.0 { (-start).ceil() } else { 0.0 }
}

/// Pixels holding the triangle's vertices.
///
/// Each takes its vertex's color exactly, whether or not a span reaches it.
/// Vertices sharing a pixel keep only the first.
#[derive(Debug, Clone, Copy, Default)]
struct VertexPixels {
    pixels: [Option<(Coordinate, u32)>; 3],
    written: [bool; 3],
}

impl VertexPixels {
    fn new(target: &Framebuffer, triangle: &Triangle<ShadedVertex>, shading: Shading) -> VertexPixels {
        let dimensions = target.dimensions();
        let mut vertex_pixels = VertexPixels::default();

        for (index, vertex) in [triangle.v0, triangle.v1, triangle.v2].iter().enumerate() {
            let coord = Coordinate::checked(vertex.position.x.floor() as i32, vertex.position.y.floor() as i32, dimensions);

            let coord = match coord {
                Some(coord) => coord,
                None => continue,
            };

            if vertex_pixels.pixels.iter().any(|pixel| pixel.map(|(c, _)| c) == Some(coord)) {
                continue;
            }

            let color = match shading {
                Shading::Flat(color) => color,
                Shading::Gouraud => pack_rgb(&vertex.color),
            };

            vertex_pixels.pixels[index] = Some((coord, color));
        }

        vertex_pixels
    }

    /// Color replacing the span color at `coord`, if it is a vertex pixel
    #[inline]
    fn visit(&mut self, coord: Coordinate) -> Option<u32> {
        for (pixel, written) in self.pixels.iter().zip(self.written.iter_mut()) {
            if let Some((c, color)) = *pixel {
                if c == coord {
                    *written = true;
                    return Some(color);
                }
            }
        }

        None
    }

    /// Writes the vertex pixels no span reached
    fn finish(&mut self, target: &mut Framebuffer) -> usize {
        let mut count = 0;

        for (pixel, written) in self.pixels.iter().zip(self.written.iter_mut()) {
            if let Some((coord, color)) = *pixel {
                if !*written {
                    target.put(coord, color);
                    *written = true;
                    count += 1;
                }
            }
        }

        count
    }
}

/// Fills one span, returning the number of pixels written.
///
/// Spans without horizontal extent draw nothing. Pixels outside the target are skipped.
pub fn fill_span(target: &mut Framebuffer, span: &Span, shading: Shading) -> usize {
    walk_span(target, span, shading, &mut VertexPixels::default())
}

fn walk_span(target: &mut Framebuffer, span: &Span, shading: Shading, vertices: &mut VertexPixels) -> usize {
    let Dimensions { width, height } = target.dimensions();

    let x_extent = span.v1.position.x - span.v0.position.x;

    if x_extent == 0.0 {
        return 0;
    }

    let y = span.v0.position.y.floor();

    if y < 0.0 || y >= height as f32 {
        return 0;
    }

    let factor_step = 1.0 / x_extent;

    let skipped = steps_to_origin(span.v0.position.x);

    let mut x = span.v0.position.x + skipped;
    let mut factor = skipped * factor_step;

    let right = min(span.v1.position.x, width as f32);

    let mut written = 0;

    while x < right {
        let coord = Coordinate::new(x as u32, y as u32);

        let color = match (vertices.visit(coord), shading) {
            (Some(color), _) => color,
            (None, Shading::Flat(color)) => color,
            (None, Shading::Gouraud) => pack_rgb(&Interpolate::linear_interpolate(factor, &span.v0.color, &span.v1.color)),
        };

        target.put(coord, color);
        written += 1;

        x += 1.0;
        factor += factor_step;
    }

    written
}

/// Emits one span per scanline between the long edge and one short edge.
///
/// Scanlines cover `[short.v0.y, short.v1.y)`. Either edge being horizontal
/// means there is nothing to walk.
pub fn fill_edge_pair(target: &mut Framebuffer, long: &SpanEdge, short: &SpanEdge, shading: Shading) -> usize {
    walk_edge_pair(target, long, short, shading, &mut VertexPixels::default())
}

fn walk_edge_pair(target: &mut Framebuffer, long: &SpanEdge, short: &SpanEdge,
                  shading: Shading, vertices: &mut VertexPixels) -> usize {
    let long_extent = long.y_extent();

    if long_extent == 0.0 {
        return 0;
    }

    let short_extent = short.y_extent();

    if short_extent == 0.0 {
        return 0;
    }

    let long_factor_step = 1.0 / long_extent;
    let short_factor_step = 1.0 / short_extent;

    let top = short.v0.position.y;
    let skipped = steps_to_origin(top);

    let mut y = top + skipped;
    let mut long_factor = (top - long.v0.position.y) / long_extent + skipped * long_factor_step;
    let mut short_factor = skipped * short_factor_step;

    let bottom = min(short.v1.position.y, target.dimensions().height as f32);

    let mut written = 0;

    while y < bottom {
        let span = Span::new(long.at(long_factor, y), short.at(short_factor, y));

        written += walk_span(target, &span, shading, vertices);

        y += 1.0;
        long_factor += long_factor_step;
        short_factor += short_factor_step;
    }

    written
}

/// Fills a triangle scanline by scanline.
///
/// Spans are half-open, so the pixel holding each vertex is written
/// separately with the vertex's own color when no span reaches it.
pub fn fill_triangle(target: &mut Framebuffer, triangle: &Triangle<ShadedVertex>, shading: Shading) -> RenderResult<usize> {
    if !prepare(target, triangle)? {
        return Ok(0);
    }

    let Triangle { v0, v1, v2 } = *triangle;

    let edges = [
        SpanEdge::new(v0, v1),
        SpanEdge::new(v1, v2),
        SpanEdge::new(v2, v0),
    ];

    let mut max_extent = 0.0;
    let mut long_edge = 0;

    for (index, edge) in edges.iter().enumerate() {
        let extent = edge.y_extent();

        if extent > max_extent {
            max_extent = extent;
            long_edge = index;
        }
    }

    let short_edge_1 = (long_edge + 1) % 3;
    let short_edge_2 = (long_edge + 2) % 3;

    let mut vertices = VertexPixels::new(target, triangle, shading);

    let written = walk_edge_pair(target, &edges[long_edge], &edges[short_edge_1], shading, &mut vertices) +
        walk_edge_pair(target, &edges[long_edge], &edges[short_edge_2], shading, &mut vertices);

    Ok(written + vertices.finish(target))
}
