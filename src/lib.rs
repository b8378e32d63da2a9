//! Software triangle rasterizer
//!
//! Fills single device-space triangles into caller-owned buffers of packed
//! 32-bit pixels.
//!
//! ### Features:
//!
//! * Flat filling with three interchangeable strategies that produce identical output:
//! * `Naive` recomputes the three edge functions at every pixel.
//! * `Incremental` steps the edge functions by constant per-pixel and per-row deltas.
//! * `WideLane` steps them for eight horizontally adjacent pixels at once, using `wide` SIMD vectors.
//! * Smooth (Gouraud) shading with a scanline span interpolator.
//! * A parametric rasterizer with a tie-break fill rule, so triangles sharing an edge
//! never draw the same pixel twice, and parameter equations for interpolating any
//! per-vertex value.
//! * Column-major (default) or row-major buffer addressing.
//! * Conversion of a filled buffer to an `image::RgbaImage`, using the `image_compat` cargo feature.
//!
//! ### Winding
//!
//! Coordinates are in device space with `y` pointing down. Only triangles whose
//! signed double area `edge_function(v0, v1, v2)` is positive are filled
//! (`FaceWinding::Clockwise`). Other triangles are accepted and draw nothing.
//!
//! ### Example:
//!
//! ```
//! use softraster::{rasterize_flat, Strategy};
//! use softraster::nalgebra::Point2;
//!
//! let mut buffer = vec![0u32; 8 * 8];
//!
//! let written = rasterize_flat(&mut buffer, 8, 8,
//!                              Point2::new(8, 8), Point2::new(0, 8), Point2::new(0, 0),
//!                              0xFFFF0000, Strategy::WideLane).unwrap();
//!
//! assert_eq!(written, 36);
//! ```

#[macro_use]
extern crate failure;

pub extern crate nalgebra;

pub mod error;
pub mod utils;
pub mod numeric;
pub mod color;
pub mod geometry;
pub mod framebuffer;
pub mod interpolate;
pub mod primitive;
pub mod raster;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use error::{RenderError, RenderResult};
pub use geometry::{edge_function, FaceWinding, ShadedVertex};
pub use framebuffer::{Addressing, Framebuffer};
pub use interpolate::Interpolate;
pub use primitive::Triangle;
pub use raster::{FillStrategy, RasterConfig, Rasterizer, Shading, Strategy,
                 rasterize_flat, rasterize_shaded, rasterize_parametric};
