use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::GeoError;

/// `[lon, lat]` or `[lon, lat, alt]` in degrees (altitude ignored).
pub type Position = Vec<f64>;

/// The three geometry kinds the proximity test accepts, in GeoJSON layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    /// Rings of positions; only the first (outer) ring is used.
    Polygon(Vec<Vec<Position>>),
    LineString(Vec<Position>),
    Point(Position),
}

/// GeoJSON feature wrapper; properties are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
}

impl Geometry {
    /// Vertex list handed to the planar test, as `(lon, lat)` vectors.
    ///
    /// Polygon → outer ring, LineString → every vertex, Point → one vertex.
    pub fn vertices(&self) -> Result<Vec<Vector2<f64>>, GeoError> {
        let positions: &[Position] = match self {
            Geometry::Polygon(rings) => rings.first().ok_or(GeoError::EmptyGeometry)?,
            Geometry::LineString(path) => path,
            Geometry::Point(p) => std::slice::from_ref(p),
        };
        if positions.is_empty() {
            return Err(GeoError::EmptyGeometry);
        }
        positions.iter().map(|p| to_vector(p)).collect()
    }
}

impl From<Feature> for Geometry {
    fn from(feature: Feature) -> Self {
        feature.geometry
    }
}

fn to_vector(p: &[f64]) -> Result<Vector2<f64>, GeoError> {
    match p {
        [lon, lat, ..] => Ok(Vector2::new(*lon, *lat)),
        _ => Err(GeoError::BadPosition { len: p.len() }),
    }
}
