//! The connectivity map: per-level tile colors plus read-only queries.
//!
//! A [`ConnectivityMap`] is built once from a tile universe snapshot and is
//! immutable afterwards. It is `Send + Sync` and may be shared across
//! threads (e.g. in an `Arc`) without locking.
//!
//! # Usage
//!
//! ```
//! use tilereach::coloring::ExclusionPolicy;
//! use tilereach::connectivity::{ConnectivityMap, PathLocation};
//! use tilereach::geo::PointLL;
//! use tilereach::hierarchy::{LevelId, TileHierarchy, TileId};
//! use tilereach::universe::TileSet;
//!
//! let hierarchy = TileHierarchy::standard();
//! let level = LevelId::Numbered(1);
//! let grid = hierarchy.get(level).unwrap().grid;
//! let paris = grid.tile_containing(PointLL::new(2.35, 48.85)).unwrap();
//!
//! let universe = TileSet::from_tiles(
//!     hierarchy,
//!     [TileId::new(level, paris), TileId::new(level, paris + 1)],
//! );
//! let map = ConnectivityMap::from_universe(&universe, &ExclusionPolicy::default());
//!
//! assert_eq!(map.get_color(TileId::new(level, paris)), 1);
//! assert!(map.is_connected(TileId::new(level, paris), TileId::new(level, paris + 1)));
//!
//! let colors = map.get_colors(level, &PathLocation::at(PointLL::new(2.35, 48.85)), 0.0);
//! assert_eq!(colors.len(), 1);
//! ```

mod error;
mod location;

pub use error::ConnectivityError;
pub use location::{PathEdge, PathLocation};

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::time::Instant;

use crate::coloring::{color_tiles, Color, ColorMap, ExclusionPolicy, NO_COLOR};
use crate::geo::BoundingBox;
use crate::hierarchy::{LevelId, TileHierarchy, TileId, TileLevel};
use crate::universe::{TileDirectory, TileUniverse};

/// Tile colors for every level of a hierarchy.
#[derive(Debug, Clone)]
pub struct ConnectivityMap {
    hierarchy: TileHierarchy,
    colors: BTreeMap<LevelId, ColorMap>,
}

/// Summary of one colored level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStats {
    pub level: LevelId,
    /// Number of tiles present
    pub tiles: usize,
    /// Number of connected components
    pub colors: u32,
    /// Tile count of the biggest component
    pub largest_region: usize,
}

impl ConnectivityMap {
    /// Color every level of `universe`.
    ///
    /// Levels without tiles get no color map at all. The exclusion table for
    /// each level is chosen by `policy`.
    pub fn from_universe<U: TileUniverse + ?Sized>(universe: &U, policy: &ExclusionPolicy) -> Self {
        let hierarchy = universe.hierarchy().clone();
        let mut colors = BTreeMap::new();

        for level in hierarchy.levels() {
            let tiles = universe.tiles(level.id);
            if tiles.is_empty() {
                tracing::debug!(level = %level.id, "Level has no tiles");
                continue;
            }

            let exclusions = policy.table_for(level.id);
            let started = Instant::now();
            let level_colors = color_tiles(&level.grid, &tiles, exclusions);
            tracing::info!(
                level = %level.id,
                tiles = level_colors.len(),
                colors = level_colors.color_count(),
                exclusions = exclusions.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Colored tile level"
            );
            colors.insert(level.id, level_colors);
        }

        Self { hierarchy, colors }
    }

    /// Scan a tile directory and color it.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectivityError::Configuration`] if the directory cannot
    /// be read.
    pub fn open(
        tile_dir: impl AsRef<Path>,
        hierarchy: TileHierarchy,
        policy: &ExclusionPolicy,
    ) -> Result<Self, ConnectivityError> {
        let universe = TileDirectory::open(tile_dir, hierarchy)?;
        Ok(Self::from_universe(&universe, policy))
    }

    pub fn hierarchy(&self) -> &TileHierarchy {
        &self.hierarchy
    }

    /// Whether any tile of `level` was colored.
    pub fn level_color_exists(&self, level: LevelId) -> bool {
        self.colors.contains_key(&level)
    }

    /// The color map of a level, if it has tiles.
    pub fn color_map(&self, level: LevelId) -> Option<&ColorMap> {
        self.colors.get(&level)
    }

    /// Color of a tile; [`NO_COLOR`] if its level or the tile is absent.
    pub fn get_color(&self, tile: TileId) -> Color {
        self.colors
            .get(&tile.level)
            .map_or(NO_COLOR, |colors| colors.color_or_none(tile.index))
    }

    /// Whether two tiles exist and belong to the same component.
    ///
    /// Tiles on different levels are never connected.
    pub fn is_connected(&self, a: TileId, b: TileId) -> bool {
        let color = self.get_color(a);
        a.level == b.level && color != NO_COLOR && color == self.get_color(b)
    }

    /// Colors of every tile of `level` within `radius_m` meters of any
    /// candidate edge of `location`.
    ///
    /// Each candidate's projected point is expanded into a bounding box whose
    /// half-extent is `radius_m` converted to degrees at that latitude. Tiles
    /// intersecting the box that exist at `level` contribute their color.
    /// An unknown level yields an empty set.
    pub fn get_colors(&self, level: LevelId, location: &PathLocation, radius_m: f64) -> HashSet<Color> {
        let mut result = HashSet::new();
        let (Some(tile_level), Some(colors)) = (self.hierarchy.get(level), self.colors.get(&level))
        else {
            return result;
        };

        for edge in location.candidates() {
            let bbox = BoundingBox::around(edge.projected, radius_m);
            result.extend(
                tile_level
                    .grid
                    .tile_list(&bbox)
                    .into_iter()
                    .filter_map(|tile| colors.get(tile)),
            );
        }
        result
    }

    /// Resolve a numeric level index against this map's hierarchy.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectivityError::InvalidLevel`] for an index above the
    /// transit level.
    pub fn resolve_level(&self, index: u32) -> Result<LevelId, ConnectivityError> {
        self.hierarchy
            .resolve(index)
            .ok_or_else(|| ConnectivityError::invalid_level(index, self.hierarchy.max_level()))
    }

    /// Validate a level for export.
    pub(crate) fn tile_level(&self, level: LevelId) -> Result<&TileLevel, ConnectivityError> {
        self.hierarchy
            .get(level)
            .ok_or_else(|| ConnectivityError::invalid_level(level, self.hierarchy.max_level()))
    }

    /// Per-level summary for every colored level, lowest level first.
    pub fn level_stats(&self) -> Vec<LevelStats> {
        self.colors
            .iter()
            .map(|(&level, colors)| LevelStats {
                level,
                tiles: colors.len(),
                colors: colors.color_count(),
                largest_region: colors
                    .regions()
                    .first()
                    .map_or(0, |region| region.arity()),
            })
            .collect()
    }
}
