//! Connected-component coloring of tile grids.
//!
//! Tiles that share a grid edge are connected unless the pair is listed in
//! an [`ExclusionTable`]. Each maximal connected set of tiles receives a
//! distinct [`Color`], starting at 1. Color 0 ([`NO_COLOR`]) is reserved
//! for "no tile".
//!
//! Tile adjacency only approximates reachability: two neighboring tiles may
//! share no road at all. The exclusion table patches the well known cases.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use tilereach::coloring::{color_tiles, ExclusionTable};
//! use tilereach::geo::BoundingBox;
//! use tilereach::hierarchy::TileGrid;
//!
//! let grid = TileGrid::new(BoundingBox::new(0.0, 0.0, 4.0, 1.0), 1.0);
//! let tiles: BTreeSet<u32> = [0, 1, 2, 3].into_iter().collect();
//! let colors = color_tiles(&grid, &tiles, &ExclusionTable::from_pairs([(1, 2)]));
//!
//! assert_eq!(colors.color_count(), 2);
//! assert_eq!(colors.get(0), colors.get(1));
//! assert_ne!(colors.get(1), colors.get(2));
//! ```

mod color_map;
mod exclusion;
mod flood;

pub use color_map::{Color, ColorMap, Region, NO_COLOR};
pub use exclusion::{ExclusionPolicy, ExclusionTable, DARIEN_GAP_EXCLUSIONS};
pub use flood::color_tiles;
