//! Proximity tests between small convex point sets.
//!
//! Layout
//! - `planar`: 2D vector algebra, Minkowski support mapping and the GJK
//!   distance/overlap loop answering "are these two convex sets within `d`?".
//! - `geo`: GeoJSON-shaped geometry adapter plus a local tangent-plane
//!   projection that turns (lon, lat) degrees into metres for `planar`.
//!
//! The predicate is one-sided: a `true` verdict is always backed by a
//! Minkowski point closer than the threshold or by a Minkowski triangle
//! enclosing the origin.

pub mod geo;
pub mod planar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geo::{convex_hulls_within_distance, GeoError, Geometry};
pub use nalgebra::Vector2 as Vec2;
pub use planar::{within_distance, within_distance_with, GjkCfg, ProximityError, NOISE_EPS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geo::{
        convex_hulls_within_distance, local_tangent_plane_projection, Feature, GeoError,
        Geometry,
    };
    pub use crate::planar::rand::{draw_polygon_radial, jostle, RadialCfg, ReplayToken};
    pub use crate::planar::{
        centroid, within_distance, within_distance_with, GjkCfg, ProximityError, NOISE_EPS,
    };
    pub use nalgebra::Vector2 as Vec2;
}
