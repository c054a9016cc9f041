//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let directory = config
        .tiles
        .directory
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    // Leaving the key out keeps the built-in table.
    let exclusions = match &config.connectivity.exclusions {
        Some(pairs) => format!(
            "exclusions = {}\n",
            pairs
                .iter()
                .map(|(a, b)| format!("{}-{}", a, b))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        None => String::new(),
    };
    let exclusion_levels = config
        .connectivity
        .exclusion_levels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"[tiles]
; Root of the routing tile directory (<root>/<level>/000/563/449.gph)
; Example: directory = ~/valhalla_tiles
directory = {}

[connectivity]
; Forbidden tile adjacencies as comma separated a-b pairs of tile indices.
; When this key is absent the built-in Darien Gap table is used.
{}; Levels the exclusion table applies to (0-2 or transit)
exclusion_levels = {}

[logging]
; Log directory and file name; the file is cleared at startup
directory = {}
file = {}
"#,
        directory,
        exclusions,
        exclusion_levels,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

/// Convert path to string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::LevelId;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.tiles.directory = Some(PathBuf::from("/data/tiles"));
        config.connectivity.exclusions = Some(vec![(7, 8), (100, 200)]);
        config.connectivity.exclusion_levels = vec![LevelId::Numbered(1)];
        config.logging.file = "custom.log".to_string();

        config.save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_round_trip_keeps_builtin_table() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        ConfigFile::default().save_to(&config_path).unwrap();
        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(!content.contains("\nexclusions ="), "absent table must not be written");

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, ConfigFile::default());
    }

    #[test]
    fn test_path_to_string_collapses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("tiles")), "~/tiles");
        }
        assert_eq!(path_to_string(Path::new("/opt/tiles")), "/opt/tiles");
    }
}
