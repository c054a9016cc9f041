//! Errors raised while reading a tile universe.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while enumerating tiles.
#[derive(Debug, Error)]
pub enum UniverseError {
    /// Tile directory does not exist
    #[error("Tile directory not found: {0}")]
    NotFound(PathBuf),

    /// Tile path exists but is not a directory
    #[error("Tile path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to read a directory while scanning
    #[error("Failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}
