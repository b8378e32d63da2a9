//! Triangle fill strategies and the rasterizer that dispatches between them.
//!
//! All strategies share the edge function from `geometry::edge` and the
//! bounds-checked `Framebuffer`. Only clockwise triangles (positive signed double
//! area) are filled. Degenerate or counter-clockwise triangles, and empty
//! targets, succeed without writing anything.

use std::fmt;
use std::str::FromStr;

use log::debug;
use nalgebra::Point2;

use crate::error::{RenderError, RenderResult};
use crate::framebuffer::{Addressing, Framebuffer};
use crate::geometry::{HasDimensions, HasPosition, ShadedVertex};
use crate::primitive::Triangle;

pub mod naive;
pub mod incremental;
pub mod wide;
pub mod span;
pub mod parametric;

pub use self::naive::Naive;
pub use self::incremental::Incremental;
pub use self::wide::{WideLane, LANES};
pub use self::span::Shading;

/// Fills a flat-colored integer triangle into a target.
pub trait FillStrategy {
    /// Writes `color` to every pixel `p` where all three edge functions are `>= 0`,
    /// returning the number of pixels written.
    fn fill(&self, target: &mut Framebuffer, triangle: &Triangle<Point2<i32>>, color: u32) -> RenderResult<usize>;
}

/// Checks shared by every strategy. `Ok(false)` means there is nothing to draw.
pub(crate) fn prepare<V: HasPosition>(target: &Framebuffer, triangle: &Triangle<V>) -> RenderResult<bool> {
    let drawable = triangle.is_drawable()?;

    Ok(drawable && !target.dimensions().is_empty())
}

/// Selects the flat fill algorithm.
///
/// All strategies produce identical output for identical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Recompute the edge functions at every pixel
    Naive,
    /// Step the edge functions by constant deltas
    Incremental,
    /// Step the edge functions for `LANES` pixels at once
    WideLane,
}

impl Default for Strategy {
    fn default() -> Strategy { Strategy::WideLane }
}

impl FillStrategy for Strategy {
    #[inline]
    fn fill(&self, target: &mut Framebuffer, triangle: &Triangle<Point2<i32>>, color: u32) -> RenderResult<usize> {
        match *self {
            Strategy::Naive => Naive.fill(target, triangle, color),
            Strategy::Incremental => Incremental.fill(target, triangle, color),
            Strategy::WideLane => WideLane.fill(target, triangle, color),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Strategy::Naive => "naive",
            Strategy::Incremental => "incremental",
            Strategy::WideLane => "simd",
        })
    }
}

impl FromStr for Strategy {
    type Err = RenderError;

    fn from_str(s: &str) -> RenderResult<Strategy> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Strategy::Naive),
            "incremental" => Ok(Strategy::Incremental),
            "simd" | "wide" | "wide-lane" => Ok(Strategy::WideLane),
            _ => Err(RenderError::InvalidInput { reason: "unknown fill strategy" }),
        }
    }
}

/// Rasterizer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterConfig {
    pub strategy: Strategy,
    pub addressing: Addressing,
}

/// Fills single triangles into caller-owned pixel buffers.
///
/// Holds no state besides its configuration, so one instance can serve any
/// number of calls, and calls on disjoint buffers are independent.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    config: RasterConfig,
}

impl Rasterizer {
    pub fn new(config: RasterConfig) -> Rasterizer {
        debug!("rasterizer using {} strategy with {:?} addressing", config.strategy, config.addressing);

        Rasterizer { config }
    }

    #[inline]
    pub fn config(&self) -> &RasterConfig { &self.config }

    fn target<'a>(&self, buffer: &'a mut [u32], width: u32, height: u32) -> RenderResult<Framebuffer<'a>> {
        Framebuffer::with_addressing(buffer, width, height, self.config.addressing)
    }

    /// Fills a flat-colored triangle with the configured strategy
    pub fn fill_flat(&self, buffer: &mut [u32], width: u32, height: u32,
                     triangle: &Triangle<Point2<i32>>, color: u32) -> RenderResult<usize> {
        let mut target = self.target(buffer, width, height)?;

        self.config.strategy.fill(&mut target, triangle, color)
    }

    /// Fills a triangle with the scanline span interpolator
    pub fn fill_shaded(&self, buffer: &mut [u32], width: u32, height: u32,
                       triangle: &Triangle<ShadedVertex>, shading: Shading) -> RenderResult<usize> {
        let mut target = self.target(buffer, width, height)?;

        span::fill_triangle(&mut target, triangle, shading)
    }

    /// Fills a triangle with the tie-breaking edge equations, interpolating vertex colors
    pub fn fill_parametric(&self, buffer: &mut [u32], width: u32, height: u32,
                           triangle: &Triangle<ShadedVertex>) -> RenderResult<usize> {
        let mut target = self.target(buffer, width, height)?;

        parametric::fill_triangle(&mut target, triangle)
    }
}

/// Fills a flat-colored triangle into a column-major `width` x `height` buffer.
///
/// Returns the number of pixels written.
pub fn rasterize_flat(buffer: &mut [u32], width: u32, height: u32,
                      v0: Point2<i32>, v1: Point2<i32>, v2: Point2<i32>,
                      color: u32, strategy: Strategy) -> RenderResult<usize> {
    let config = RasterConfig { strategy, ..RasterConfig::default() };

    Rasterizer { config }.fill_flat(buffer, width, height, &Triangle::new(v0, v1, v2), color)
}

/// Fills a smooth-shaded triangle into a column-major buffer using spans.
pub fn rasterize_shaded(buffer: &mut [u32], width: u32, height: u32,
                        v0: ShadedVertex, v1: ShadedVertex, v2: ShadedVertex) -> RenderResult<usize> {
    Rasterizer { config: RasterConfig::default() }.fill_shaded(buffer, width, height, &Triangle::new(v0, v1, v2), Shading::Gouraud)
}

/// Fills a smooth-shaded triangle into a column-major buffer using parameter equations.
pub fn rasterize_parametric(buffer: &mut [u32], width: u32, height: u32,
                            v0: ShadedVertex, v1: ShadedVertex, v2: ShadedVertex) -> RenderResult<usize> {
    Rasterizer { config: RasterConfig::default() }.fill_parametric(buffer, width, height, &Triangle::new(v0, v1, v2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names() {
        for &strategy in &[Strategy::Naive, Strategy::Incremental, Strategy::WideLane] {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }

        assert_eq!(" Wide ".parse::<Strategy>(), Ok(Strategy::WideLane));
        assert!("scanline".parse::<Strategy>().is_err());
    }
}
