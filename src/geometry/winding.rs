//! Triangle face winding definitions

use num_traits::Zero;

/// Defines face winding variations for device-space triangles, with `x` pointing
/// right and `y` pointing down, as the vertices appear in the final image.
///
/// Only `Clockwise` triangles are filled. Their signed double area
/// `edge_function(v0, v1, v2)` is positive, which makes all three edge functions
/// non-negative inside the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWinding {
    /// Clockwise face winding, where the vertices are like so:
    ///
    /// ```text
    /// 0 *-------------->* 1
    ///     \             |
    ///       \           |
    ///         \         |
    ///           \       V
    ///             \     |
    ///               \   |
    ///                 \ |
    ///                   * 2
    /// ```
    Clockwise,
    /// Counter-clockwise face winding, the mirror image of `Clockwise`.
    CounterClockwise,
}

impl FaceWinding {
    /// Winding of a triangle with the given signed double area, or `None` for a degenerate triangle
    pub fn from_area<N>(area: N) -> Option<FaceWinding> where N: Zero + PartialOrd {
        let zero = N::zero();

        if area > zero {
            Some(FaceWinding::Clockwise)
        } else if area < zero {
            Some(FaceWinding::CounterClockwise)
        } else {
            None
        }
    }
}
