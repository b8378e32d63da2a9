//! Utilities

/// Find minimum of two values
///
/// Works for `f32`, unlike `Ord::min`.
pub fn min<T>(a: T, b: T) -> T where T: PartialOrd {
    if a < b { a } else { b }
}
