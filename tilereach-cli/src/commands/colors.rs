//! Colors within a radius of a coordinate.

use clap::Args;
use tilereach::connectivity::{ConnectivityMap, PathLocation};
use tilereach::geo::{PointLL, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use super::common::LevelArg;
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct ColorsArgs {
    /// Hierarchy level (0, 1, 2 or transit)
    #[arg(long)]
    pub level: LevelArg,

    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Search radius in meters
    #[arg(long, default_value = "0")]
    pub radius: f64,
}

/// Print the distinct colors found around the point, one per line, ascending.
pub fn run(map: &ConnectivityMap, args: ColorsArgs) -> Result<(), CliError> {
    if !(MIN_LAT..=MAX_LAT).contains(&args.lat) || !(MIN_LON..=MAX_LON).contains(&args.lon) {
        return Err(CliError::InvalidArgument(format!(
            "coordinate {}, {} is outside the world",
            args.lat, args.lon
        )));
    }
    if !args.radius.is_finite() || args.radius < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "radius must be a non-negative number of meters, got {}",
            args.radius
        )));
    }

    let level = args.level.resolve(map)?;
    let location = PathLocation::at(PointLL::new(args.lon, args.lat));
    let mut colors: Vec<_> = map
        .get_colors(level, &location, args.radius)
        .into_iter()
        .collect();
    colors.sort_unstable();

    for color in colors {
        println!("{}", color);
    }
    Ok(())
}
