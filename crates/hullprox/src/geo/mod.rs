//! Geographic front end for the planar test.
//!
//! - `geometry`: GeoJSON-shaped `Polygon` / `LineString` / `Point` values and
//!   the vertex lists the planar test consumes (outer ring, full path, single
//!   point).
//! - `projection`: local tangent-plane approximation, (lon, lat) degrees to
//!   metres around a chosen center. Only meaningful for short spans.
//!
//! `convex_hulls_within_distance` composes both with `planar::within_distance`.

mod geometry;
mod projection;

use std::fmt;

use nalgebra::Vector2;

use crate::planar::{centroid, within_distance, ProximityError};

pub use geometry::{Feature, Geometry, Position};
pub use projection::{local_tangent_plane_projection, EARTH_RADIUS_M};

/// Errors from the geographic adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Polygon without rings, ring or path without positions.
    EmptyGeometry,
    /// A position with fewer than two coordinates.
    BadPosition { len: usize },
    Proximity(ProximityError),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::EmptyGeometry => write!(f, "geometry has no coordinates"),
            GeoError::BadPosition { len } => {
                write!(f, "position has {len} coordinate(s), expected at least 2")
            }
            GeoError::Proximity(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::Proximity(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProximityError> for GeoError {
    fn from(err: ProximityError) -> Self {
        GeoError::Proximity(err)
    }
}

/// True if two geographic shapes are within `distance_m` metres.
///
/// Both shapes are projected onto the tangent plane at the vertex average of
/// their combined coordinates, then tested with `within_distance`.
pub fn convex_hulls_within_distance(
    shape1: &Geometry,
    shape2: &Geometry,
    distance_m: f64,
) -> Result<bool, GeoError> {
    let points1 = shape1.vertices()?;
    let points2 = shape2.vertices()?;

    let combined: Vec<Vector2<f64>> = points1.iter().chain(&points2).copied().collect();
    let center = centroid(&combined).ok_or(GeoError::EmptyGeometry)?;

    let xy1 = local_tangent_plane_projection(&points1, center);
    let xy2 = local_tangent_plane_projection(&points2, center);
    tracing::debug!(
        n1 = xy1.len(),
        n2 = xy2.len(),
        center_lon = center.x,
        center_lat = center.y,
        distance_m,
        "projected shapes"
    );
    Ok(within_distance(&xy1, &xy2, distance_m)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lon: f64, lat: f64) -> Geometry {
        Geometry::Point(vec![lon, lat])
    }

    #[test]
    fn points_along_a_meridian() {
        // 0.0001° of latitude ≈ 11.1195 m.
        let a = point(13.4, 52.5);
        let b = point(13.4, 52.5001);
        assert!(convex_hulls_within_distance(&a, &b, 11.2).unwrap());
        assert!(!convex_hulls_within_distance(&a, &b, 11.0).unwrap());
    }

    #[test]
    fn point_inside_polygon_overlaps() {
        let square = Geometry::Polygon(vec![vec![
            vec![-0.0001, -0.0001],
            vec![0.0001, -0.0001],
            vec![0.0001, 0.0001],
            vec![-0.0001, 0.0001],
            vec![-0.0001, -0.0001],
        ]]);
        let p = point(0.00002, 0.00003);
        assert!(convex_hulls_within_distance(&square, &p, 1e-6).unwrap());
        assert!(convex_hulls_within_distance(&p, &square, 1e-6).unwrap());
    }

    #[test]
    fn path_next_to_polygon() {
        // Path runs east-west 0.0001° north of the square's top edge.
        let square = Geometry::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![0.0001, 0.0],
            vec![0.0001, 0.0001],
            vec![0.0, 0.0001],
            vec![0.0, 0.0],
        ]]);
        let path = Geometry::LineString(vec![vec![-0.0001, 0.0002], vec![0.0002, 0.0002]]);
        assert!(convex_hulls_within_distance(&square, &path, 11.5).unwrap());
        assert!(!convex_hulls_within_distance(&square, &path, 10.5).unwrap());
    }

    #[test]
    fn errors_propagate() {
        let empty = Geometry::LineString(vec![]);
        assert_eq!(
            convex_hulls_within_distance(&empty, &point(0.0, 0.0), 1.0),
            Err(GeoError::EmptyGeometry)
        );
        assert_eq!(
            convex_hulls_within_distance(&point(0.0, 0.0), &point(0.0, 0.0), 0.0),
            Err(GeoError::Proximity(ProximityError::InvalidThreshold {
                threshold: 0.0
            }))
        );
    }
}
