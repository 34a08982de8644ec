use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use collision_loop::adapter::{InputFormat, load_context};
use collision_loop::config::{FileConfig, default_output_path};
use collision_loop::emit::Precision;
use collision_loop::export_collision_loop;
use collision_loop::extract::FirstPolygon;

/// Export the first polygon of a mesh as a collision loop initializer
///
/// The loop is written to ~/jeu_desprit/collision/collision_loop.h, replacing
/// any previous export.
///
/// Examples:
///   # Export from an edit-session snapshot
///   collision_loop session.json
///
///   # Export from an OBJ with 4 fixed decimals
///   collision_loop floor.obj --precision 4
///
///   # Input without a recognised extension
///   collision_loop floor.mesh --format obj
#[derive(Parser, Debug)]
#[command(name = "collision_loop")]
#[command(version, about, long_about = None)]
struct Args {
    /// Mesh to read (.obj or .json snapshot)
    input: PathBuf,

    /// Input format (defaults to the file extension)
    #[arg(short = 'f', long, value_enum)]
    format: Option<InputFormat>,

    /// Fixed decimal places per coordinate (defaults to shortest round-trip)
    #[arg(short = 'p', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    precision: Option<u8>,

    /// Path to config file (optional, auto-searches collision_loop.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::load_from(config_path)?),
        None => FileConfig::load(),
    };

    let precision = Precision::from_decimals(
        args.precision
            .or_else(|| file_config.as_ref().and_then(|c| c.precision)),
    );
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let output_path = default_output_path()?;

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", args.input.display());
        match args.format {
            Some(f) => println!("  Format: {:?}", f),
            None => println!("  Format: from extension"),
        }
        println!("  Precision: {:?}", precision);
        println!("  Output: {}", output_path.display());
        println!();
    }

    let spinner = create_spinner("Loading mesh...");
    let start = Instant::now();
    let context = load_context(&args.input, args.format)?;
    spinner.finish_with_message(format!(
        "Loaded {} vertices, {} polygons ({:?} mode) [{:.1}s]",
        context.mesh.vertices().len(),
        context.mesh.polygon_count(),
        context.mode,
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Writing collision loop...");
    let start = Instant::now();
    let summary = export_collision_loop(&context, &FirstPolygon, &output_path, precision)?;
    spinner.finish_with_message(format!(
        "Wrote {} points [{:.1}s]",
        summary.vertex_count,
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        println!("  {}", summary.validation.summary());
        for warning in &summary.validation.warnings {
            eprintln!("Warning: {}", warning);
        }
        println!(
            "Done! Total time: {:.1}s",
            total_start.elapsed().as_secs_f32()
        );
        println!("Output: {}", summary.path.display());
    }
    println!("{}", summary.message());

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
