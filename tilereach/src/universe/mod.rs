//! Tile universe providers.
//!
//! A tile universe answers one question per hierarchy level: which tiles
//! exist? The connectivity map is built from a single snapshot of a
//! universe and never consults it again.
//!
//! Two providers are included:
//!
//! - [`TileSet`] - an in-memory set of tile ids
//! - [`TileDirectory`] - a scan of a routing tile directory on disk

mod directory;
mod error;
mod memory;

pub use directory::{tile_path, TileDirectory};
pub use error::UniverseError;
pub use memory::TileSet;

use std::collections::BTreeSet;

use crate::hierarchy::{LevelId, TileHierarchy};

/// Source of existing tile indices per hierarchy level.
pub trait TileUniverse {
    /// Grid geometry for every level in this universe.
    fn hierarchy(&self) -> &TileHierarchy;

    /// Tile indices present at `level`, ascending.
    ///
    /// Levels without tiles, or not part of the hierarchy, yield an empty set.
    fn tiles(&self, level: LevelId) -> BTreeSet<u32>;
}
