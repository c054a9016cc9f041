//! Tile universe read from a routing tile directory.
//!
//! Tiles are stored as one file per tile:
//!
//! ```text
//! <root>/<level>/<ddd>/.../<ddd>.gph
//! ```
//!
//! The tile index is zero-padded to the smallest multiple of three digits
//! that fits the level's largest index, then split into three-digit groups.
//! Every group but the last is a directory. For example, level 2 tile
//! 563449 lives at `2/000/563/449.gph` and level 0 tile 3015 at
//! `0/003/015.gph`. Compressed `.gph.gz` tiles are recognised too.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::UniverseError;
use super::TileUniverse;
use crate::hierarchy::{LevelId, TileGrid, TileHierarchy, TileId};

const TILE_EXTENSION: &str = ".gph";
const COMPRESSED_TILE_EXTENSION: &str = ".gph.gz";

/// Tile universe snapshot taken from a directory tree.
#[derive(Debug, Clone)]
pub struct TileDirectory {
    root: PathBuf,
    hierarchy: TileHierarchy,
    tiles: HashMap<LevelId, BTreeSet<u32>>,
}

impl TileDirectory {
    /// Scan `root` for tiles of every level in `hierarchy`.
    ///
    /// Level directories that do not exist simply contribute no tiles.
    /// Files and directories that do not follow the tile layout are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is missing, is not a directory, or a
    /// directory inside it cannot be read.
    pub fn open(root: impl AsRef<Path>, hierarchy: TileHierarchy) -> Result<Self, UniverseError> {
        let root = root.as_ref().to_path_buf();
        if !root.exists() {
            return Err(UniverseError::NotFound(root));
        }
        if !root.is_dir() {
            return Err(UniverseError::NotADirectory(root));
        }

        let mut tiles = HashMap::new();
        for level in hierarchy.levels() {
            let Some(level_index) = hierarchy.index_of(level.id) else {
                continue;
            };
            let level_dir = root.join(level_index.to_string());
            if !level_dir.is_dir() {
                tracing::debug!(level = %level.id, path = %level_dir.display(), "No tile directory for level");
                continue;
            }

            let mut found = BTreeSet::new();
            let scan = LevelScan {
                grid: &level.grid,
                digits: id_digits(&level.grid),
            };
            scan.walk(&level_dir, "", &mut found)?;

            tracing::info!(level = %level.id, tiles = found.len(), "Scanned tile level");
            tiles.insert(level.id, found);
        }

        Ok(Self {
            root,
            hierarchy,
            tiles,
        })
    }

    /// Directory this snapshot was read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Total number of tiles found across all levels.
    pub fn len(&self) -> usize {
        self.tiles.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TileUniverse for TileDirectory {
    fn hierarchy(&self) -> &TileHierarchy {
        &self.hierarchy
    }

    fn tiles(&self, level: LevelId) -> BTreeSet<u32> {
        self.tiles.get(&level).cloned().unwrap_or_default()
    }
}

/// Relative path of a tile file within a tile directory.
///
/// Returns `None` if the tile is not part of `hierarchy`.
pub fn tile_path(hierarchy: &TileHierarchy, tile: TileId) -> Option<PathBuf> {
    let level_index = hierarchy.index_of(tile.level)?;
    let grid = &hierarchy.get(tile.level)?.grid;
    if !grid.contains(tile.index) {
        return None;
    }

    let digits = format!("{:0width$}", tile.index, width = id_digits(grid));
    let groups: Vec<&str> = digits
        .as_bytes()
        .chunks(3)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();

    let mut path = PathBuf::from(level_index.to_string());
    if let Some((file, dirs)) = groups.split_last() {
        for dir in dirs {
            path.push(dir);
        }
        path.push(format!("{}{}", file, TILE_EXTENSION));
    }
    Some(path)
}

/// Number of digits a tile index is padded to on disk.
fn id_digits(grid: &TileGrid) -> usize {
    let max_index = grid.tile_count().saturating_sub(1);
    max_index.to_string().len().div_ceil(3) * 3
}

struct LevelScan<'a> {
    grid: &'a TileGrid,
    digits: usize,
}

impl LevelScan<'_> {
    fn walk(&self, dir: &Path, prefix: &str, found: &mut BTreeSet<u32>) -> Result<(), UniverseError> {
        let entries = fs::read_dir(dir).map_err(|source| UniverseError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| UniverseError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if path.is_dir() {
                if is_digit_group(name) && prefix.len() + 3 < self.digits {
                    self.walk(&path, &format!("{}{}", prefix, name), found)?;
                } else {
                    tracing::debug!(path = %path.display(), "Skipping non-tile directory");
                }
                continue;
            }

            match self.parse_tile(prefix, name) {
                Some(index) => {
                    found.insert(index);
                }
                None => {
                    tracing::debug!(path = %path.display(), "Skipping non-tile file");
                }
            }
        }
        Ok(())
    }

    fn parse_tile(&self, prefix: &str, name: &str) -> Option<u32> {
        let stem = name
            .strip_suffix(COMPRESSED_TILE_EXTENSION)
            .or_else(|| name.strip_suffix(TILE_EXTENSION))?;
        if !is_digit_group(stem) || prefix.len() + 3 != self.digits {
            return None;
        }
        let index: u32 = format!("{}{}", prefix, stem).parse().ok()?;
        self.grid.contains(index).then_some(index)
    }
}

fn is_digit_group(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit())
}
