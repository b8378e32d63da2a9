//! Device-space geometry

pub mod dimension;
pub mod coordinate;
pub mod winding;
pub mod edge;
pub mod vertex;

pub use self::dimension::{Dimensions, HasDimensions};
pub use self::coordinate::Coordinate;
pub use self::winding::FaceWinding;
pub use self::edge::{edge_function, EdgeCoefficients};
pub use self::vertex::{HasPosition, ShadedVertex};
