//! Common types and utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tilereach::config::ConfigFile;
use tilereach::connectivity::ConnectivityMap;
use tilereach::hierarchy::{LevelId, TileHierarchy};

use crate::error::CliError;

/// Hierarchy level as typed on the command line: a number or `transit`.
///
/// Numbers are resolved against the map's hierarchy so that an unknown
/// level is reported the same way the library reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelArg {
    Index(u32),
    Transit,
}

impl FromStr for LevelArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transit") {
            return Ok(LevelArg::Transit);
        }
        s.parse()
            .map(LevelArg::Index)
            .map_err(|_| format!("'{}' is not a level number or 'transit'", s))
    }
}

impl LevelArg {
    /// Resolve to a level of `map`'s hierarchy.
    pub fn resolve(self, map: &ConnectivityMap) -> Result<LevelId, CliError> {
        match self {
            LevelArg::Transit => Ok(LevelId::Transit),
            LevelArg::Index(index) => Ok(map.resolve_level(index)?),
        }
    }
}

/// Build the connectivity map for the configured tile directory.
///
/// `tiles` overrides `[tiles] directory` from the config file.
pub fn open_map(config: &ConfigFile, tiles: Option<PathBuf>) -> Result<ConnectivityMap, CliError> {
    let tile_dir = tiles
        .or_else(|| config.tiles.directory.clone())
        .ok_or(CliError::NoTileDirectory)?;

    tracing::info!(path = %tile_dir.display(), "Loading tile universe");
    Ok(ConnectivityMap::open(
        &tile_dir,
        TileHierarchy::standard(),
        &config.exclusion_policy(),
    )?)
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, content).map_err(|error| CliError::FileWrite {
                path: path.display().to_string(),
                error,
            })?;
            tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|error| CliError::FileWrite {
                    path: "<stdout>".to_string(),
                    error,
                })
        }
    }
}
