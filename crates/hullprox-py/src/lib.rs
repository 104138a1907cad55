//! PyO3 bindings for the `hullprox` proximity test.
//!
//! Notes
//! - Keep bindings thin: tuples in, bool out. Errors surface as `ValueError`.
//! - Geometry arguments of the geo entry point are GeoJSON strings.

mod common;

use common::{geometry_from_json, map_geo_err, map_proximity_err, points_from_py};
use hullprox::GjkCfg;
use pyo3::prelude::*;

/// True if the convex hulls of two planar point lists are within `distance`.
#[pyfunction]
#[pyo3(signature = (points1, points2, distance, max_iterations = 20))]
fn within_distance(
    points1: Vec<(f64, f64)>,
    points2: Vec<(f64, f64)>,
    distance: f64,
    max_iterations: usize,
) -> PyResult<bool> {
    let set1 = points_from_py(points1);
    let set2 = points_from_py(points2);
    hullprox::within_distance_with(&set1, &set2, distance, GjkCfg { max_iterations })
        .map_err(map_proximity_err)
}

/// True if two GeoJSON shapes (lon/lat degrees) are within `distance_m` metres.
#[pyfunction]
fn convex_hulls_within_distance(shape1: &str, shape2: &str, distance_m: f64) -> PyResult<bool> {
    let g1 = geometry_from_json(shape1)?;
    let g2 = geometry_from_json(shape2)?;
    hullprox::convex_hulls_within_distance(&g1, &g2, distance_m).map_err(map_geo_err)
}

#[pymodule]
fn hullprox_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(within_distance, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hulls_within_distance, m)?)?;
    Ok(())
}
