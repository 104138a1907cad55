//! GJK distance/overlap loop.
//!
//! The loop keeps a segment `[a, b]` of Minkowski-difference points, expands
//! it towards the origin with one support query per step, and stops once a
//! sub-threshold distance or an enclosing triangle is seen. Between steps
//! exactly two points are retained; one of them is replaced at a time.
//!
//! Contract
//! - Inputs are convex (not checked) and non-empty (checked).
//! - `true` is sound: every distance compared is measured to a point of the
//!   Minkowski difference's hull, and enclosure means overlap.
//! - `false` after a stall or after `max_iterations` is the best available
//!   verdict, not a proof of separation beyond the threshold.

use std::fmt;

use nalgebra::Vector2;

use super::cfg::{GjkCfg, NOISE_EPS};
use super::simplex::{encloses_origin, squared_minimum_distance};
use super::support::{centroid, support};
use super::vector::{negate, subtract, triple_product};

/// Errors surfaced before the loop runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProximityError {
    /// Threshold at or below `NOISE_EPS` (or NaN).
    InvalidThreshold { threshold: f64 },
    /// One of the point sets has no vertices. `shape` is 1 or 2.
    EmptyShape { shape: usize },
    /// `max_iterations` must be positive.
    ZeroIterations,
}

impl fmt::Display for ProximityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProximityError::InvalidThreshold { threshold } => write!(
                f,
                "distance threshold {threshold} must be greater than {NOISE_EPS:e}"
            ),
            ProximityError::EmptyShape { shape } => {
                write!(f, "shape {shape} has no vertices")
            }
            ProximityError::ZeroIterations => write!(f, "max_iterations must be at least 1"),
        }
    }
}

impl std::error::Error for ProximityError {}

/// True if the convex hulls of `set1` and `set2` are within `threshold` of
/// each other (touching and overlapping included). Uses 20 iterations.
pub fn within_distance(
    set1: &[Vector2<f64>],
    set2: &[Vector2<f64>],
    threshold: f64,
) -> Result<bool, ProximityError> {
    within_distance_with(set1, set2, threshold, GjkCfg::default())
}

/// `within_distance` with an explicit iteration cap.
pub fn within_distance_with(
    set1: &[Vector2<f64>],
    set2: &[Vector2<f64>],
    threshold: f64,
    cfg: GjkCfg,
) -> Result<bool, ProximityError> {
    // Near zero the triple-product direction is dominated by round-off and
    // touching shapes start to come back false.
    if threshold.is_nan() || threshold <= NOISE_EPS {
        return Err(ProximityError::InvalidThreshold { threshold });
    }
    if cfg.max_iterations == 0 {
        return Err(ProximityError::ZeroIterations);
    }
    let c1 = centroid(set1).ok_or(ProximityError::EmptyShape { shape: 1 })?;
    let c2 = centroid(set2).ok_or(ProximityError::EmptyShape { shape: 2 })?;

    let threshold_sq = threshold * threshold;

    let d = subtract(c1, c2);
    if d.x.abs() < NOISE_EPS && d.y.abs() < NOISE_EPS {
        tracing::debug!("coincident centroids, reporting overlap");
        return Ok(true);
    }

    // simplex = [a, b]
    let first = support(set1, set2, d);
    let mut simplex = [first, support(set1, set2, negate(first))];
    let mut d = edge_normal_towards_origin(simplex[0], simplex[1]);
    let mut min_distance = squared_minimum_distance(simplex[0], simplex[1]);

    for iteration in 0..cfg.max_iterations {
        let [a, b] = simplex;
        let c = support(set1, set2, d);
        tracing::trace!(iteration, min_distance, "gjk step");

        if min_distance < threshold_sq {
            tracing::debug!(iteration, min_distance, "within threshold");
            return Ok(true);
        }
        if encloses_origin(a, b, c) {
            tracing::debug!(iteration, "simplex encloses origin");
            return Ok(true);
        }

        // c is kept; drop whichever of a, b leaves the farther segment.
        let ac = squared_minimum_distance(a, c);
        let bc = squared_minimum_distance(b, c);
        let previous = min_distance;
        if ac < bc {
            simplex[1] = c;
            min_distance = ac;
        } else {
            simplex[0] = c;
            min_distance = bc;
        }

        if previous - min_distance <= 0.0 {
            tracing::debug!(iteration, min_distance, "no progress, stopping");
            return Ok(min_distance < threshold_sq);
        }

        d = edge_normal_towards_origin(simplex[0], simplex[1]);
    }

    tracing::debug!(
        max_iterations = cfg.max_iterations,
        min_distance,
        "iteration cap reached"
    );
    Ok(min_distance < threshold_sq)
}

#[inline]
fn edge_normal_towards_origin(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    let ab = subtract(b, a);
    triple_product(ab, negate(a), ab)
}
