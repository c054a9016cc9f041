//! User configuration for tilereach.
//!
//! Settings are read from an INI file (by default `~/.tilereach/config.ini`).
//! A missing file yields defaults; a present file overlays only the keys it
//! sets.
//!
//! # Example
//!
//! ```
//! use tilereach::config::ConfigFile;
//! use tilereach::coloring::ExclusionPolicy;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.exclusion_policy(), ExclusionPolicy::default());
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_EXCLUSION_LEVELS};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, ConnectivitySettings, LoggingSettings, TilesSettings};
