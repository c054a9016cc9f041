//! Text raster of a level's colors.

use std::path::PathBuf;

use clap::Args;
use tilereach::coloring::Color;
use tilereach::connectivity::{ConnectivityError, ConnectivityMap};

use super::common::{write_output, LevelArg};
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct ImageArgs {
    /// Hierarchy level (0, 1, 2 or transit)
    #[arg(long)]
    pub level: LevelArg,

    /// Output file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Write one line per grid row, northernmost row first, with the row's
/// colors separated by spaces.
pub fn run(map: &ConnectivityMap, args: ImageArgs) -> Result<(), CliError> {
    let level = args.level.resolve(map)?;
    let image = map.to_image(level)?;
    let columns = map
        .hierarchy()
        .get(level)
        .map(|l| l.grid.columns())
        .ok_or_else(|| ConnectivityError::InvalidLevel {
            level: level.to_string(),
            max: map.hierarchy().max_level(),
        })?;
    write_output(args.output.as_deref(), &render_rows(&image, columns as usize))
}

fn render_rows(image: &[Color], columns: usize) -> String {
    let mut text = String::new();
    if columns == 0 {
        return text;
    }
    for row in image.chunks(columns).rev() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}
