use nalgebra::Vector2;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Project `(lon, lat)` degrees onto the plane tangent at `center` (degrees).
///
/// Output is `(x, y)` in metres, x east and y north of `center`. Errors grow
/// quickly with distance; intended for spans of tens of metres.
pub fn local_tangent_plane_projection(
    points: &[Vector2<f64>],
    center: Vector2<f64>,
) -> Vec<Vector2<f64>> {
    let lon0 = center.x.to_radians();
    let lat0 = center.y.to_radians();
    let (sin_lat0, cos_lat0) = lat0.sin_cos();

    points
        .iter()
        .map(|p| {
            let lon = p.x.to_radians();
            let (sin_lat, cos_lat) = p.y.to_radians().sin_cos();
            let (sin_dlon, cos_dlon) = (lon - lon0).sin_cos();
            let x = EARTH_RADIUS_M * cos_lat * sin_dlon;
            let y = EARTH_RADIUS_M * (cos_lat0 * sin_lat - sin_lat0 * cos_lat * cos_dlon);
            Vector2::new(x, y)
        })
        .collect()
}
