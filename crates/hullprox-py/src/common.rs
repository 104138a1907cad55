use hullprox::geo::{Feature, GeoError, Geometry};
use hullprox::ProximityError;
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(points: Vec<(f64, f64)>) -> Vec<Vector2<f64>> {
    points
        .into_iter()
        .map(|(x, y)| Vector2::new(x, y))
        .collect()
}

/// Accept a GeoJSON Feature or a bare Polygon/LineString/Point geometry.
pub fn geometry_from_json(text: &str) -> PyResult<Geometry> {
    if let Ok(feature) = serde_json::from_str::<Feature>(text) {
        return Ok(feature.into());
    }
    serde_json::from_str::<Geometry>(text)
        .map_err(|err| PyValueError::new_err(format!("invalid GeoJSON geometry: {err}")))
}

pub fn map_proximity_err(err: ProximityError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_geo_err(err: GeoError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
