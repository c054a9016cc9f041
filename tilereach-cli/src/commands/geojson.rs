//! GeoJSON export of a level's regions.

use std::path::PathBuf;

use clap::Args;
use tilereach::connectivity::ConnectivityMap;

use super::common::{write_output, LevelArg};
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct GeojsonArgs {
    /// Hierarchy level (0, 1, 2 or transit)
    #[arg(long)]
    pub level: LevelArg,

    /// Output file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run(map: &ConnectivityMap, args: GeojsonArgs) -> Result<(), CliError> {
    let level = args.level.resolve(map)?;
    let document = map.to_geojson(level)?;
    write_output(args.output.as_deref(), &document)
}
