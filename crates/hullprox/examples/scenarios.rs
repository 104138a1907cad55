//! Walk through reference configurations and print the verdict at a few thresholds.
//!
//! Usage:
//!   cargo run -p hullprox --example scenarios

use hullprox::prelude::*;

fn shape(raw: &[(f64, f64)]) -> Vec<Vec2<f64>> {
    raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

fn main() {
    let cases = [
        (
            "triangle vs quadrilateral (≈1.7179113807)",
            shape(&[(4.0, 11.0), (9.0, 9.0), (4.0, 5.0)]),
            shape(&[(8.0, 6.0), (10.0, 2.0), (13.0, 1.0), (15.0, 6.0)]),
        ),
        (
            "points 2 apart",
            shape(&[(1.0, 1.0)]),
            shape(&[(1.0, -1.0)]),
        ),
        (
            "nested squares",
            shape(&[(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)]),
            shape(&[(2.0, 2.0), (-2.0, 2.0), (2.0, -2.0), (-2.0, -2.0)]),
        ),
        (
            "zero-length segment vs segment (√2)",
            shape(&[(1.0, 1.0), (1.0, 1.0)]),
            shape(&[(2.0, 2.0), (3.0, 3.0)]),
        ),
    ];
    for (name, a, b) in &cases {
        print!("{name}:");
        for t in [1e-9, 1.0, 1.5, 1.7179113808, 2.0 + 1e-9] {
            match within_distance(a, b, t) {
                Ok(v) => print!(" d={t}→{v}"),
                Err(err) => print!(" d={t}→error: {err}"),
            }
        }
        println!();
    }
}
