//! 2D vector primitives over `nalgebra::Vector2<f64>`.
//!
//! Points and vectors share one type; meaning is contextual.

use nalgebra::Vector2;

#[inline]
pub fn subtract(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    a - b
}

#[inline]
pub fn negate(v: Vector2<f64>) -> Vector2<f64> {
    -v
}

#[inline]
pub fn dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.dot(&b)
}

#[inline]
pub fn squared_magnitude(v: Vector2<f64>) -> f64 {
    dot(v, v)
}

#[inline]
pub fn scale(v: Vector2<f64>, s: f64) -> Vector2<f64> {
    v * s
}

#[inline]
pub fn add(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    a + b
}

/// Exact component equality (no tolerance).
#[inline]
pub fn equals(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    a.x == b.x && a.y == b.y
}

/// `b (a·c) - a (b·c)`, the planar form of `(a × b) × c`.
///
/// `triple_product(ab, ao, ab)` is perpendicular to `ab` and points to the
/// side of the line holding the origin.
#[inline]
pub fn triple_product(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Vector2<f64> {
    let ac = dot(a, c);
    let bc = dot(b, c);
    subtract(scale(b, ac), scale(a, bc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn triple_product_points_towards_origin() {
        // Edge from (1,1) to (1,-1); origin lies on the -x side.
        let a = vector![1.0, 1.0];
        let b = vector![1.0, -1.0];
        let ab = subtract(b, a);
        let d = triple_product(ab, negate(a), ab);
        assert!(dot(d, ab).abs() < 1e-12);
        assert!(d.x < 0.0);
        assert!(d.y.abs() < 1e-12);
    }

    #[test]
    fn triple_product_vanishes_on_line_through_origin() {
        let a = vector![-2.0, -2.0];
        let ab = vector![4.0, 4.0];
        let d = triple_product(ab, negate(a), ab);
        assert_eq!(squared_magnitude(d), 0.0);
    }

    #[test]
    fn equals_is_exact() {
        assert!(equals(vector![1.0, 1.0], vector![1.0, 1.0]));
        assert!(!equals(vector![1.0, 1.0], vector![1.0, 1.0 + f64::EPSILON]));
        assert!(equals(vector![0.0, -0.0], vector![-0.0, 0.0]));
    }
}
