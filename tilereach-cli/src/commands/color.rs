//! Color of a single tile.

use clap::Args;
use tilereach::connectivity::ConnectivityMap;
use tilereach::hierarchy::TileId;

use super::common::LevelArg;
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct ColorArgs {
    /// Hierarchy level (0, 1, 2 or transit)
    #[arg(long)]
    pub level: LevelArg,

    /// Row-major tile index within the level
    #[arg(long)]
    pub tile: u32,
}

/// Print the tile's color; 0 means the tile does not exist.
pub fn run(map: &ConnectivityMap, args: ColorArgs) -> Result<(), CliError> {
    let level = args.level.resolve(map)?;
    println!("{}", map.get_color(TileId::new(level, args.tile)));
    Ok(())
}
