//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use tilereach::config::ConfigFileError;
use tilereach::connectivity::ConnectivityError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be loaded
    Config(ConfigFileError),
    /// Neither `--tiles` nor `[tiles] directory` was given
    NoTileDirectory,
    /// Invalid command-line argument
    InvalidArgument(String),
    /// Building or querying the connectivity map failed
    Connectivity(ConnectivityError),
    /// Failed to write output
    FileWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::NoTileDirectory => {
                eprintln!();
                eprintln!("Either pass --tiles <DIR> or add to ~/.tilereach/config.ini:");
                eprintln!("  [tiles]");
                eprintln!("  directory = /path/to/valhalla_tiles");
            }
            CliError::Connectivity(ConnectivityError::InvalidLevel { .. }) => {
                eprintln!();
                eprintln!("Levels are 0 (highway), 1 (arterial), 2 (local) or 'transit'.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::NoTileDirectory => write!(f, "No tile directory configured"),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Connectivity(e) => write!(f, "{}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Connectivity(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<ConnectivityError> for CliError {
    fn from(e: ConnectivityError) -> Self {
        CliError::Connectivity(e)
    }
}
