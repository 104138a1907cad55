use anyhow::{Context, Result};
use hullprox::{within_distance_with, GjkCfg};
use serde::Serialize;

use crate::input::NamedShape;

/// Verdict for one unordered pair of shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairRow {
    pub a: String,
    pub b: String,
    pub within: bool,
}

/// Evaluate every unordered pair `(i < j)` in input order.
pub fn evaluate_pairs(shapes: &[NamedShape], distance: f64, cfg: GjkCfg) -> Result<Vec<PairRow>> {
    let mut rows = Vec::with_capacity(shapes.len() * shapes.len().saturating_sub(1) / 2);
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            let within = within_distance_with(&a.points, &b.points, distance, cfg)
                .with_context(|| format!("comparing `{}` with `{}`", a.name, b.name))?;
            rows.push(PairRow {
                a: a.name.clone(),
                b: b.name.clone(),
                within,
            });
        }
    }
    let hits = rows.iter().filter(|r| r.within).count();
    tracing::info!(pairs = rows.len(), hits, distance, "pairs evaluated");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn shape(name: &str, raw: &[(f64, f64)]) -> NamedShape {
        NamedShape {
            name: name.to_string(),
            points: raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
        }
    }

    #[test]
    fn all_unordered_pairs() {
        let shapes = [
            shape("a", &[(0.0, 0.0), (1.0, 0.0)]),
            shape("b", &[(0.0, 2.0), (1.0, 2.0)]),
            shape("c", &[(10.0, 10.0)]),
        ];
        let rows = evaluate_pairs(&shapes, 2.5, GjkCfg::default()).unwrap();
        let got: Vec<(&str, &str, bool)> = rows
            .iter()
            .map(|r| (r.a.as_str(), r.b.as_str(), r.within))
            .collect();
        assert_eq!(
            got,
            [("a", "b", true), ("a", "c", false), ("b", "c", false)]
        );
    }

    #[test]
    fn invalid_threshold_is_an_error() {
        let shapes = [shape("a", &[(0.0, 0.0)]), shape("b", &[(1.0, 0.0)])];
        assert!(evaluate_pairs(&shapes, 0.0, GjkCfg::default()).is_err());
        // a single shape has no pairs, so nothing is checked
        assert!(evaluate_pairs(&shapes[..1], 0.0, GjkCfg::default())
            .unwrap()
            .is_empty());
    }
}
