//! tilereach - connectivity map for hierarchical routing tiles
//!
//! Given which tiles of a routing graph exist at each hierarchy level, this
//! library labels every tile with a "color" such that two tiles share a color
//! exactly when one can be reached from the other through 4-neighbour
//! adjacency. A router can then reject origin/destination pairs that lie in
//! different components before running any path search.
//!
//! # High-Level API
//!
//! ```no_run
//! use tilereach::coloring::ExclusionPolicy;
//! use tilereach::connectivity::ConnectivityMap;
//! use tilereach::hierarchy::{LevelId, TileHierarchy, TileId};
//!
//! let map = ConnectivityMap::open(
//!     "/data/valhalla_tiles",
//!     TileHierarchy::standard(),
//!     &ExclusionPolicy::default(),
//! )?;
//!
//! let a = TileId::new(LevelId::Numbered(2), 563449);
//! let b = TileId::new(LevelId::Numbered(2), 563450);
//! println!("connected: {}", map.is_connected(a, b));
//!
//! let geojson = map.to_geojson(LevelId::Numbered(2))?;
//! # Ok::<(), tilereach::connectivity::ConnectivityError>(())
//! ```
//!
//! # Modules
//!
//! - [`hierarchy`] - levels, grids and tile indexing
//! - [`universe`] - where tile sets come from (memory or a tile directory)
//! - [`coloring`] - flood-fill coloring and exclusion tables
//! - [`connectivity`] - the immutable map and its queries
//! - [`boundary`] - region outline tracing
//! - [`export`] - GeoJSON and raster exports
//! - [`config`] / [`logging`] - ambient setup used by the CLI

pub mod boundary;
pub mod coloring;
pub mod config;
pub mod connectivity;
pub mod export;
pub mod geo;
pub mod hierarchy;
pub mod logging;
pub mod universe;

/// Version of the tilereach library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
