//! Errors reported by the rasterizer entry points

/// Caller contract violations detected before any pixel is written.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The pixel buffer is shorter than `width * height`.
    #[fail(display = "buffer holds {} pixels but {} are required", len, required)]
    InvalidBuffer {
        len: usize,
        required: usize,
    },
    /// Coordinates or dimensions the rasterizer cannot process exactly.
    #[fail(display = "invalid input: {}", reason)]
    InvalidInput {
        reason: &'static str,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;
