//! Clusterplot CLI viewer.
//!
//! Stands in for the GUI shell: loads the dataset file, renders one frame,
//! and writes it to a PNG. Point and centroid counts go to stdout for
//! operator visibility; warnings and errors go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use clusterplot::dataset::Dataset;
use clusterplot::output::PngEncoder;
use clusterplot::plots::ClusterPlot;
use clusterplot::Error;

#[derive(Parser, Debug)]
#[command(name = "clusterplot")]
#[command(about = "Render a 2-D point cloud with k-means centroids to PNG", long_about = None)]
struct Args {
    /// Dataset files; only the first is rendered
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Pixel margin around the drawing area
    #[arg(long, default_value_t = 40)]
    margin: u32,

    /// Output PNG path (default: input path with .png extension)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.files.len() > 1 {
        warn!(
            skipped = args.files.len() - 1,
            "multiple files given; only the first is rendered"
        );
    }
    let input = &args.files[0];

    // An unreadable file still produces a frame (empty plot); a malformed
    // file aborts before the renderer is ever invoked.
    let dataset = match Dataset::load(input) {
        Ok(dataset) => dataset,
        Err(Error::Io(err)) => {
            warn!(path = %input.display(), %err, "cannot read file; rendering empty plot");
            Dataset::default()
        }
        Err(err) => {
            error!(path = %input.display(), %err, "load failed");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{}: {} data points, {} centroids",
        input.display(),
        dataset.data_points.len(),
        dataset.centroids.len()
    );

    let plot = ClusterPlot::new()
        .dimensions(args.width, args.height)
        .margin(args.margin);

    let frame = match plot.to_framebuffer(&dataset) {
        Ok(frame) => frame,
        Err(err) => {
            error!(%err, "render failed");
            return ExitCode::FAILURE;
        }
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| input.with_extension("png"));

    if let Err(err) = PngEncoder::write_to_file(&frame, &output) {
        error!(path = %output.display(), %err, "write failed");
        return ExitCode::FAILURE;
    }

    println!("wrote {}", output.display());
    ExitCode::SUCCESS
}
