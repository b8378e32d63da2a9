//! The edge function and the line coefficients derived from it

use nalgebra::Point2;

use crate::numeric::EdgeScalar;

/// Twice the signed area of the triangle `(a, b, p)`.
///
/// Positive when `p` lies on the inner side of the directed edge `a -> b` of a
/// clockwise (device space, `y` down) triangle, zero when `p` is on the line.
/// Exact for integer coordinates.
#[inline(always)]
pub fn edge_function<N: EdgeScalar>(a: &Point2<N>, b: &Point2<N>, p: &Point2<N>) -> N {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Coefficients of the line `a*x + b*y + c = 0` through a directed edge,
/// in cross-product form.
///
/// Evaluating the line at `p` gives the same value as `edge_function(v0, v1, p)`,
/// so `a` is the change per pixel step in `x` and `b` the change per step in `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCoefficients<N> {
    pub a: N,
    pub b: N,
    pub c: N,
}

impl<N: EdgeScalar> EdgeCoefficients<N> {
    /// Coefficients of the edge directed from `v0` to `v1`
    #[inline]
    pub fn new(v0: &Point2<N>, v1: &Point2<N>) -> EdgeCoefficients<N> {
        EdgeCoefficients {
            a: v0.y - v1.y,
            b: v1.x - v0.x,
            c: v0.x * v1.y - v1.x * v0.y,
        }
    }

    #[inline(always)]
    pub fn evaluate(&self, x: N, y: N) -> N {
        self.a * x + self.b * y + self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_follows_side() {
        let a = Point2::new(0, 0);
        let b = Point2::new(8, 0);

        assert!(edge_function(&a, &b, &Point2::new(3, 5)) > 0);
        assert!(edge_function(&a, &b, &Point2::new(3, -5)) < 0);
        assert_eq!(edge_function(&a, &b, &Point2::new(13, 0)), 0);
    }

    #[test]
    fn double_area() {
        let v0 = Point2::new(8, 8);
        let v1 = Point2::new(0, 8);
        let v2 = Point2::new(0, 0);

        assert_eq!(edge_function(&v0, &v1, &v2), 64);
        assert_eq!(edge_function(&v1, &v0, &v2), -64);
    }

    #[test]
    fn coefficients_match_edge_function() {
        let v0 = Point2::new(-3, 7);
        let v1 = Point2::new(11, 2);
        let edge = EdgeCoefficients::new(&v0, &v1);

        for y in -4..12 {
            for x in -4..12 {
                assert_eq!(edge.evaluate(x, y), edge_function(&v0, &v1, &Point2::new(x, y)));
            }
        }
    }

    #[test]
    fn float_edges() {
        let a = Point2::new(0.0f32, 0.0);
        let b = Point2::new(0.0f32, 4.0);

        assert!(edge_function(&a, &b, &Point2::new(-1.5, 2.0)) > 0.0);
    }
}
