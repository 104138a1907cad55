use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hullprox::{convex_hulls_within_distance, within_distance_with, GjkCfg};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "hullprox")]
#[command(about = "Check whether convex shapes lie within a distance of each other")]
struct Cmd {
    /// Log at debug level (includes GJK termination reasons)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compare two planar point lists, e.g. --a "4,11 9,9 4,5"
    Check {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(long)]
        distance: f64,
        #[arg(long, default_value_t = hullprox::planar::DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,
    },
    /// Compare two GeoJSON shapes (Feature or Polygon/LineString/Point) in metres
    Geo {
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
        #[arg(long)]
        meters: f64,
    },
    /// Evaluate all pairs of shapes from a `shape,x,y` CSV and write JSON rows
    Pairs {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        distance: f64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = hullprox::planar::DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Check {
            a,
            b,
            distance,
            max_iterations,
        } => check(&a, &b, distance, max_iterations),
        Action::Geo { a, b, meters } => geo(&a, &b, meters),
        Action::Pairs {
            input,
            distance,
            out,
            max_iterations,
        } => pairs(&input, distance, &out, max_iterations),
        Action::Report => report(),
    }
}

fn check(a: &str, b: &str, distance: f64, max_iterations: usize) -> Result<()> {
    tracing::info!(a, b, distance, max_iterations, "check");
    let set1 = input::parse_points(a).context("parsing --a")?;
    let set2 = input::parse_points(b).context("parsing --b")?;
    let within = within_distance_with(&set1, &set2, distance, GjkCfg { max_iterations })?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "within": within, "distance": distance }))?
    );
    Ok(())
}

fn geo(a: &Path, b: &Path, meters: f64) -> Result<()> {
    tracing::info!(a = %a.display(), b = %b.display(), meters, "geo");
    let shape1 = input::load_geometry(a)?;
    let shape2 = input::load_geometry(b)?;
    let within = convex_hulls_within_distance(&shape1, &shape2, meters)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "within": within, "meters": meters }))?
    );
    Ok(())
}

fn pairs(csv: &Path, distance: f64, out: &Path, max_iterations: usize) -> Result<()> {
    tracing::info!(input = %csv.display(), out = %out.display(), distance, "pairs");
    let shapes = input::load_shapes_csv(csv)?;
    let rows = batch::evaluate_pairs(&shapes, distance, GjkCfg { max_iterations })?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(json!({
        "input": csv.to_string_lossy(),
        "distance": distance,
        "max_iterations": max_iterations,
        "shapes": shapes.len(),
        "pairs": rows.len()
    }));
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(sidecar = %sidecar.display(), "wrote provenance");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "hullprox_version": hullprox::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
