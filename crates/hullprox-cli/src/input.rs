//! Input readers: inline point lists, GeoJSON files and `shape,x,y` CSV tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hullprox::geo::{Feature, Geometry};
use nalgebra::Vector2;
use polars::prelude::*;
use serde::Deserialize;

/// Parse `"x,y x,y ..."` (pairs separated by whitespace or `;`).
pub fn parse_points(raw: &str) -> Result<Vec<Vector2<f64>>> {
    let mut out = Vec::new();
    for pair in raw.split(|c: char| c.is_whitespace() || c == ';') {
        if pair.is_empty() {
            continue;
        }
        let Some((x, y)) = pair.split_once(',') else {
            bail!("expected `x,y`, got `{pair}`");
        };
        let x: f64 = x.trim().parse().with_context(|| format!("bad x in `{pair}`"))?;
        let y: f64 = y.trim().parse().with_context(|| format!("bad y in `{pair}`"))?;
        out.push(Vector2::new(x, y));
    }
    if out.is_empty() {
        bail!("point list `{raw}` is empty");
    }
    Ok(out)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GeoInput {
    Feature(Feature),
    Geometry(Geometry),
}

/// Load a GeoJSON Feature or bare Geometry.
pub fn load_geometry(path: &Path) -> Result<Geometry> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed: GeoInput = serde_json::from_str(&text)
        .with_context(|| format!("parsing GeoJSON Polygon/LineString/Point in {}", path.display()))?;
    Ok(match parsed {
        GeoInput::Feature(f) => f.into(),
        GeoInput::Geometry(g) => g,
    })
}

/// A named point set read from a table.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedShape {
    pub name: String,
    pub points: Vec<Vector2<f64>>,
}

/// Read a CSV with columns `shape,x,y` and group rows by `shape`.
///
/// Shapes keep their first-appearance order; vertices keep row order.
pub fn load_shapes_csv(path: &Path) -> Result<Vec<NamedShape>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("shape").cast(DataType::String),
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading shape,x,y columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), "input_csv_shape");

    let names = df.column("shape")?.str()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;

    let mut shapes: Vec<NamedShape> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (row, ((name, x), y)) in names.into_iter().zip(xs).zip(ys).enumerate() {
        let (Some(name), Some(x), Some(y)) = (name, x, y) else {
            bail!("row {row}: missing shape, x or y");
        };
        let slot = *index.entry(name.to_string()).or_insert_with(|| {
            shapes.push(NamedShape {
                name: name.to_string(),
                points: Vec::new(),
            });
            shapes.len() - 1
        });
        shapes[slot].points.push(Vector2::new(x, y));
    }
    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_point_lists() {
        let pts = parse_points("4,11 9,9;4,5").unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1], Vector2::new(9.0, 9.0));
        assert!(parse_points("").is_err());
        assert!(parse_points("1;2").is_err());
        assert!(parse_points("1,a").is_err());
    }

    #[test]
    fn loads_feature_and_bare_geometry() {
        let dir = tempdir().unwrap();
        let feature = dir.path().join("a.geojson");
        fs::write(
            &feature,
            r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[1.0,2.0]}}"#,
        )
        .unwrap();
        assert_eq!(
            load_geometry(&feature).unwrap(),
            Geometry::Point(vec![1.0, 2.0])
        );
        let bare = dir.path().join("b.geojson");
        fs::write(
            &bare,
            r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#,
        )
        .unwrap();
        assert!(matches!(
            load_geometry(&bare).unwrap(),
            Geometry::LineString(_)
        ));
    }

    #[test]
    fn groups_csv_rows_by_shape() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("shapes.csv");
        fs::write(&csv, "shape,x,y\nb,0,2\na,0,0\nb,1,2\na,1,0\nc,5,5\n").unwrap();
        let shapes = load_shapes_csv(&csv).unwrap();
        let names: Vec<&str> = shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(
            shapes[0].points,
            vec![Vector2::new(0.0, 2.0), Vector2::new(1.0, 2.0)]
        );
        assert_eq!(shapes[2].points.len(), 1);
    }
}
