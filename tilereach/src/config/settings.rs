//! Settings structs for each configuration section.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::hierarchy::LevelId;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    /// Tile universe settings
    pub tiles: TilesSettings,
    /// Coloring settings
    pub connectivity: ConnectivitySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Tile universe configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TilesSettings {
    /// Root of the tile directory; `None` until configured
    pub directory: Option<PathBuf>,
}

/// Coloring configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivitySettings {
    /// Forbidden adjacencies. `None` keeps the built-in Darien Gap table.
    pub exclusions: Option<Vec<(u32, u32)>>,
    /// Levels the exclusion table applies to
    pub exclusion_levels: Vec<LevelId>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log directory
    pub directory: PathBuf,
    /// Log file name within `directory`
    pub file: String,
}
