//! Default values for all configuration settings.

use std::path::PathBuf;

use super::settings::*;
use crate::hierarchy::LevelId;
use crate::logging::{DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};

/// Name of the per-user configuration directory under `$HOME`.
pub const CONFIG_DIR_NAME: &str = ".tilereach";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Levels the built-in exclusion table applies to.
pub const DEFAULT_EXCLUSION_LEVELS: [LevelId; 2] = [LevelId::Numbered(2), LevelId::Transit];

impl Default for ConnectivitySettings {
    fn default() -> Self {
        Self {
            exclusions: None,
            exclusion_levels: DEFAULT_EXCLUSION_LEVELS.to_vec(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
