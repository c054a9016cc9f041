//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::hierarchy::{LevelId, TileHierarchy};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [tiles] section
    if let Some(section) = ini.section(Some("tiles")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.tiles.directory = Some(expand_tilde(v));
            }
        }
    }

    // [connectivity] section
    if let Some(section) = ini.section(Some("connectivity")) {
        if let Some(v) = section.get("exclusions") {
            config.connectivity.exclusions =
                Some(parse_pairs(v).map_err(|reason| ConfigFileError::InvalidValue {
                    section: "connectivity".to_string(),
                    key: "exclusions".to_string(),
                    value: v.to_string(),
                    reason,
                })?);
        }
        if let Some(v) = section.get("exclusion_levels") {
            config.connectivity.exclusion_levels =
                parse_levels(v).map_err(|reason| ConfigFileError::InvalidValue {
                    section: "connectivity".to_string(),
                    key: "exclusion_levels".to_string(),
                    value: v.to_string(),
                    reason,
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.is_empty() || v.contains(['/', '\\']) {
                return Err(ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "file".to_string(),
                    value: v.to_string(),
                    reason: "must be a plain file name".to_string(),
                });
            }
            config.logging.file = v.to_string();
        }
    }

    Ok(config)
}

/// Parse `a-b, c-d` into tile index pairs. An empty value is an empty table.
fn parse_pairs(value: &str) -> Result<Vec<(u32, u32)>, String> {
    split_list(value)
        .map(|item| {
            let (a, b) = item
                .split_once('-')
                .ok_or_else(|| format!("'{}' is not a pair like '563449-563450'", item))?;
            let a = a.trim().parse::<u32>();
            let b = b.trim().parse::<u32>();
            match (a, b) {
                (Ok(a), Ok(b)) if a != b => Ok((a, b)),
                (Ok(_), Ok(_)) => Err(format!("'{}' pairs a tile with itself", item)),
                _ => Err(format!("'{}' must pair two tile indices", item)),
            }
        })
        .collect()
}

/// Parse `2, transit` into level identifiers of the standard hierarchy.
fn parse_levels(value: &str) -> Result<Vec<LevelId>, String> {
    let hierarchy = TileHierarchy::standard();
    let mut levels: Vec<LevelId> = split_list(value)
        .map(|item| {
            hierarchy
                .parse_level(item)
                .ok_or_else(|| format!("'{}' is not a level (use 0-2 or 'transit')", item))
        })
        .collect::<Result<_, _>>()?;
    levels.sort();
    levels.dedup();
    Ok(levels)
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
