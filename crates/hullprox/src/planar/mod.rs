//! Planar GJK proximity test.
//!
//! Purpose
//! - Decide whether two convex point sets (a point, a segment chain or a
//!   polygon's vertices) lie within a distance threshold of each other,
//!   overlap included.
//! - Work on the Minkowski difference `set1 - set2` without building it:
//!   every query goes through the support mapping.
//!
//! Numerics
//! - All comparisons use squared distances.
//! - One tolerance, `NOISE_EPS`, guards the three degenerate decision points
//!   (coincident centroids, collinear simplex, threshold validity).
//!
//! Code cross-refs: `gjk::within_distance`, `simplex::{encloses_origin,
//! squared_minimum_distance}`, `support::support`, `vector::triple_product`.

mod cfg;
mod gjk;
pub mod rand;
mod simplex;
mod support;
mod vector;

pub use cfg::{GjkCfg, DEFAULT_MAX_ITERATIONS, NOISE_EPS};
pub use gjk::{within_distance, within_distance_with, ProximityError};
pub use simplex::{encloses_origin, squared_minimum_distance};
pub use support::{centroid, index_of_furthest_point, support};
pub use vector::{add, dot, equals, negate, scale, squared_magnitude, subtract, triple_product};
