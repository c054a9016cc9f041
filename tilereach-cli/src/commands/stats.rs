//! Per-level summary of the connectivity map.

use tilereach::connectivity::ConnectivityMap;

use crate::error::CliError;

/// Print tile count, component count and largest component for each level.
pub fn run(map: &ConnectivityMap) -> Result<(), CliError> {
    let stats = map.level_stats();
    if stats.is_empty() {
        println!("No tiles found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<10} {:>10} {:>10} {:>10}",
        "LEVEL", "NAME", "TILES", "COLORS", "LARGEST"
    );
    for level in stats {
        let name = map
            .hierarchy()
            .get(level.level)
            .map(|l| l.name.as_str())
            .unwrap_or("-");
        println!(
            "{:<10} {:<10} {:>10} {:>10} {:>10}",
            level.level.to_string(),
            name,
            level.tiles,
            level.colors,
            level.largest_region
        );
    }
    Ok(())
}
