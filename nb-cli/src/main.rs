//! Command-line front-end: renders the Newton-Raphson basins of
//! z^3 - 1 = 0 over [-2, 2] x [-2, 2] and writes the figure as a PNG.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use nb_core::figure::basin_figure;
use nb_core::{newton, GridParams, Size};

#[derive(Debug, Parser)]
struct Args {
    /// Samples along each axis of the grid.
    #[arg(long, default_value_t = nb_core::GRID_SAMPLES)]
    samples: usize,

    /// Newton steps per sample point.
    #[arg(long, default_value_t = newton::MAX_ITERATIONS)]
    iterations: usize,

    /// Raster edge length in pixels; defaults to one pixel per sample.
    #[arg(long)]
    size: Option<usize>,

    /// Classify grid columns across the rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Where to write the figure.
    #[arg(long, default_value = "newton-basins.png")]
    out: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let params = GridParams {
        samples: args.samples,
        ..GridParams::default()
    };

    let start = Instant::now();
    let basins = if args.parallel {
        newton::evaluate_parallel(&params, args.iterations)
    } else {
        newton::evaluate(&params, args.iterations)
    };

    let figure = basin_figure(&params, &basins).expect("basin count matches the grid");
    tracing::info!(
        title = figure.title(),
        x = figure.x_label(),
        y = figure.y_label(),
        points = figure.len(),
        "rendering"
    );

    let edge = args.size.unwrap_or(args.samples);
    let image = figure
        .render(Size {
            width: edge,
            height: edge,
        })
        .expect("failed to render figure");
    image.save(&args.out).expect("failed to write output file");

    let elapsed = start.elapsed();
    tracing::info!(?elapsed, out = %args.out.display(), "figure written");
}
