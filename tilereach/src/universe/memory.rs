//! In-memory tile universe.

use std::collections::{BTreeSet, HashMap};

use super::TileUniverse;
use crate::hierarchy::{LevelId, TileHierarchy, TileId};

/// A tile universe held entirely in memory.
///
/// # Examples
///
/// ```
/// use tilereach::hierarchy::{LevelId, TileHierarchy, TileId};
/// use tilereach::universe::{TileSet, TileUniverse};
///
/// let mut set = TileSet::new(TileHierarchy::standard());
/// assert!(set.insert(TileId::new(LevelId::Numbered(0), 2_000)));
/// assert_eq!(set.tiles(LevelId::Numbered(0)).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    hierarchy: TileHierarchy,
    tiles: HashMap<LevelId, BTreeSet<u32>>,
}

impl TileSet {
    /// Create an empty universe over `hierarchy`.
    pub fn new(hierarchy: TileHierarchy) -> Self {
        Self {
            hierarchy,
            tiles: HashMap::new(),
        }
    }

    /// Create a universe from a list of tile ids.
    ///
    /// Ids outside the hierarchy are dropped.
    pub fn from_tiles(hierarchy: TileHierarchy, tiles: impl IntoIterator<Item = TileId>) -> Self {
        let mut set = Self::new(hierarchy);
        for tile in tiles {
            set.insert(tile);
        }
        set
    }

    /// Add a tile. Returns `false` if the level is unknown, the index is
    /// outside the level's grid, or the tile was already present.
    pub fn insert(&mut self, tile: TileId) -> bool {
        let Some(level) = self.hierarchy.get(tile.level) else {
            tracing::debug!(%tile, "Ignoring tile on unknown level");
            return false;
        };
        if !level.grid.contains(tile.index) {
            tracing::debug!(%tile, "Ignoring tile outside the level grid");
            return false;
        }
        self.tiles.entry(tile.level).or_default().insert(tile.index)
    }

    /// Total number of tiles across all levels.
    pub fn len(&self) -> usize {
        self.tiles.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TileUniverse for TileSet {
    fn hierarchy(&self) -> &TileHierarchy {
        &self.hierarchy
    }

    fn tiles(&self, level: LevelId) -> BTreeSet<u32> {
        self.tiles.get(&level).cloned().unwrap_or_default()
    }
}
