//! Support mapping of the Minkowski difference `set1 - set2`.

use nalgebra::Vector2;

use super::vector::{dot, negate, subtract};

/// Vertex average. Not the area centroid; good enough as a first search direction.
///
/// Returns `None` for an empty slice.
pub fn centroid(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Index of the vertex with the largest projection on `d`.
///
/// Ties keep the lowest index. `vertices` must be non-empty.
pub fn index_of_furthest_point(vertices: &[Vector2<f64>], d: Vector2<f64>) -> usize {
    debug_assert!(!vertices.is_empty(), "support query on an empty point set");
    let mut best = 0;
    let mut max_product = dot(d, vertices[0]);
    for (i, v) in vertices.iter().enumerate().skip(1) {
        let product = dot(d, *v);
        if product > max_product {
            max_product = product;
            best = i;
        }
    }
    best
}

/// Furthest point of `set1 - set2` along `d`.
#[inline]
pub fn support(set1: &[Vector2<f64>], set2: &[Vector2<f64>], d: Vector2<f64>) -> Vector2<f64> {
    let i = index_of_furthest_point(set1, d);
    let j = index_of_furthest_point(set2, negate(d));
    subtract(set1[i], set2[j])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn furthest_point_keeps_first_tie() {
        let square = [
            vector![1.0, 1.0],
            vector![-1.0, 1.0],
            vector![1.0, -1.0],
            vector![-1.0, -1.0],
        ];
        // (1,1) and (1,-1) tie along +x.
        assert_eq!(index_of_furthest_point(&square, vector![1.0, 0.0]), 0);
        // (1,-1) and (-1,-1) tie along -y.
        assert_eq!(index_of_furthest_point(&square, vector![0.0, -1.0]), 2);
        assert_eq!(index_of_furthest_point(&square, vector![-1.0, -1.0]), 3);
    }

    #[test]
    fn support_is_minkowski_difference_extreme() {
        let tri = [vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]];
        let pt = [vector![5.0, 5.0]];
        let s = support(&tri, &pt, vector![1.0, 0.0]);
        assert_eq!(s, vector![-3.0, -5.0]);
        let s = support(&pt, &tri, vector![1.0, 0.0]);
        // furthest of tri along -x is (0,0), first of the tie with (0,2)
        assert_eq!(s, vector![5.0, 5.0]);
    }

    #[test]
    fn centroid_of_vertices() {
        let pts = [vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 3.0]];
        let c = centroid(&pts).unwrap();
        assert!((c - vector![2.0, 1.0]).norm() < 1e-12);
        assert!(centroid(&[]).is_none());
    }
}
