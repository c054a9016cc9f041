//! tilereach CLI - Command-line interface
//!
//! Builds the connectivity map for a routing tile directory and answers
//! reachability queries or exports a level for inspection.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tilereach::config::ConfigFile;
use tilereach::logging::init_logging;

use commands::color::ColorArgs;
use commands::colors::ColorsArgs;
use commands::geojson::GeojsonArgs;
use commands::image::ImageArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "tilereach")]
#[command(version = tilereach::VERSION)]
#[command(about = "Connectivity map for hierarchical routing tiles", long_about = None)]
struct Cli {
    /// Config file (default: ~/.tilereach/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tile directory, overriding [tiles] directory from the config file
    #[arg(long, global = true)]
    tiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show tile, color and largest region counts per level
    Stats,
    /// Print the color of one tile
    Color(ColorArgs),
    /// Print the colors within a radius of a coordinate
    Colors(ColorsArgs),
    /// Export a level's regions as a GeoJSON feature collection
    Geojson(GeojsonArgs),
    /// Export a level's colors as text, one line per grid row
    Image(ImageArgs),
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };

    let _logging_guard = init_logging(&config.logging.directory, &config.logging.file)
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;
    tracing::info!(version = tilereach::VERSION, "tilereach starting");

    let map = commands::common::open_map(&config, cli.tiles)?;

    match cli.command {
        Commands::Stats => commands::stats::run(&map),
        Commands::Color(args) => commands::color::run(&map, args),
        Commands::Colors(args) => commands::colors::run(&map, args),
        Commands::Geojson(args) => commands::geojson::run(&map, args),
        Commands::Image(args) => commands::image::run(&map, args),
    }
}
