//! Simplex queries against the origin: closest point on a segment and
//! triangle enclosure.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::cfg::NOISE_EPS;
use super::vector::{add, dot, equals, negate, scale, squared_magnitude, subtract};

/// Squared distance from the origin to segment `[a, b]`.
///
/// A zero-length segment (`a == b` exactly) collapses to `|a|²`.
pub fn squared_minimum_distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    if equals(a, b) {
        return squared_magnitude(a);
    }
    let ab = subtract(b, a);
    // parameter of the origin's projection onto the line a + t·ab
    let t = (dot(negate(a), ab) / squared_magnitude(ab)).clamp(0.0, 1.0);
    squared_magnitude(add(scale(ab, t), a))
}

/// True if the origin lies inside or on triangle `(a, b, c)`.
///
/// Barycentric solve (Ericson, Real-Time Collision Detection §3.4). When the
/// 2×2 system is within `NOISE_EPS` of singular the points are collinear and
/// the test falls back to the lexicographic span check.
pub fn encloses_origin(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    let v0 = subtract(b, a);
    let v1 = subtract(c, a);
    let v2 = negate(a);
    let d00 = dot(v0, v0);
    let d01 = dot(v0, v1);
    let d11 = dot(v1, v1);
    let d20 = dot(v2, v0);
    let d21 = dot(v2, v1);
    let denom = d00 * d11 - d01 * d01;

    if denom.abs() <= NOISE_EPS {
        return collinear_span_contains_origin([a, b, c]);
    }

    let inv = 1.0 / denom;
    let v = (d11 * d20 - d01 * d21) * inv;
    let w = (d00 * d21 - d01 * d20) * inv;
    let u = 1.0 - v - w;
    v >= 0.0 && w >= 0.0 && u >= 0.0
}

/// Degenerate branch of `encloses_origin`.
///
/// Sort by x then y; the extreme points must span a line through the origin
/// (near-zero signed area) and bracket it on the y axis.
fn collinear_span_contains_origin(mut pts: [Vector2<f64>; 3]) -> bool {
    pts.sort_by(|p, q| match p.x.partial_cmp(&q.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => p.y.partial_cmp(&q.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    let (lo, hi) = (pts[0], pts[2]);
    let area = lo.x * hi.y - lo.y * hi.x;
    area.abs() <= NOISE_EPS && lo.y >= 0.0 && hi.y <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn segment_distance_interior_projection() {
        // Horizontal segment y = 2 spanning x in [-1, 3].
        let d = squared_minimum_distance(vector![-1.0, 2.0], vector![3.0, 2.0]);
        assert!((d - 4.0).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        // Projection parameter < 0: closest point is a.
        let d = squared_minimum_distance(vector![1.0, 1.0], vector![3.0, 1.0]);
        assert!((d - 2.0).abs() < 1e-12);
        // Projection parameter > 1: closest point is b.
        let d = squared_minimum_distance(vector![-3.0, -1.0], vector![-1.0, -1.0]);
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_zero_length() {
        let d = squared_minimum_distance(vector![-1.0, -1.0], vector![-1.0, -1.0]);
        assert_eq!(d, 2.0);
    }

    #[test]
    fn triangle_enclosure_inside_outside_and_edge() {
        let a = vector![-1.0, -1.0];
        let b = vector![2.0, -1.0];
        let c = vector![-1.0, 2.0];
        assert!(encloses_origin(a, b, c));
        assert!(encloses_origin(c, a, b));
        // shifted right: origin outside
        let s = vector![1.5, 0.0];
        assert!(!encloses_origin(a + s, b + s, c + s));
        // origin on an edge
        assert!(encloses_origin(
            vector![-1.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0]
        ));
    }

    #[test]
    fn collinear_fallback() {
        // Descending line through the origin: extreme points bracket it.
        assert!(encloses_origin(
            vector![-1.0, 1.0],
            vector![1.0, -1.0],
            vector![0.5, -0.5]
        ));
        // Same line, all points on one side.
        assert!(!encloses_origin(
            vector![1.0, -1.0],
            vector![2.0, -2.0],
            vector![3.0, -3.0]
        ));
        // Parallel line missing the origin.
        assert!(!encloses_origin(
            vector![-1.0, 2.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0]
        ));
        // Coincident points.
        let p = vector![0.5, 0.5];
        assert!(!encloses_origin(p, p, p));
    }
}
