//! Tile hierarchy: the grid resolutions the routing tiles are cut at.
//!
//! The standard hierarchy has three road levels plus a transit level:
//!
//! | Level     | Name     | Tile size | Grid        |
//! |-----------|----------|-----------|-------------|
//! | 0         | highway  | 4°        | 45 × 90     |
//! | 1         | arterial | 1°        | 180 × 360   |
//! | 2         | local    | 0.25°     | 720 × 1440  |
//! | transit   | transit  | 0.25°     | 720 × 1440  |
//!
//! The transit level is addressed on disk and on the command line by the
//! index one past the last road level (3 in the standard hierarchy).

mod grid;
mod types;

pub use grid::TileGrid;
pub use types::{LevelId, TileId, TileLevel};

use crate::geo::BoundingBox;

/// Road levels of the standard hierarchy as `(name, tile size in degrees)`.
pub const STANDARD_LEVELS: [(&str, f64); 3] = [("highway", 4.0), ("arterial", 1.0), ("local", 0.25)];

/// Tile size of the standard transit level.
pub const STANDARD_TRANSIT_TILE_SIZE: f64 = 0.25;

/// The set of levels tiles are organised in.
#[derive(Debug, Clone, PartialEq)]
pub struct TileHierarchy {
    levels: Vec<TileLevel>,
    transit: TileLevel,
}

impl TileHierarchy {
    /// Build a hierarchy over `bounds`.
    ///
    /// `levels` lists the road levels from coarsest to finest as
    /// `(name, tile size)`; they become `Numbered(0)`, `Numbered(1)`, ...
    pub fn new(bounds: BoundingBox, levels: &[(&str, f64)], transit_tile_size: f64) -> Self {
        let levels = levels
            .iter()
            .enumerate()
            .map(|(i, (name, size))| {
                TileLevel::new(LevelId::Numbered(i as u8), *name, TileGrid::new(bounds, *size))
            })
            .collect();
        let transit = TileLevel::new(
            LevelId::Transit,
            "transit",
            TileGrid::new(bounds, transit_tile_size),
        );
        Self { levels, transit }
    }

    /// The routing engine's standard world-wide hierarchy.
    pub fn standard() -> Self {
        Self::new(
            BoundingBox::world(),
            &STANDARD_LEVELS,
            STANDARD_TRANSIT_TILE_SIZE,
        )
    }

    /// Look up a level. Numbered levels past the last road level are absent.
    pub fn get(&self, level: LevelId) -> Option<&TileLevel> {
        match level {
            LevelId::Numbered(n) => self.levels.get(n as usize),
            LevelId::Transit => Some(&self.transit),
        }
    }

    /// All levels, road levels first and transit last.
    pub fn levels(&self) -> impl Iterator<Item = &TileLevel> {
        self.levels.iter().chain(std::iter::once(&self.transit))
    }

    /// The highest level; always the transit level.
    pub fn max_level(&self) -> LevelId {
        LevelId::Transit
    }

    /// Numeric index of the transit level.
    pub fn transit_index(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Numeric index of a level, or `None` if the level is not part of the
    /// hierarchy.
    pub fn index_of(&self, level: LevelId) -> Option<u32> {
        match level {
            LevelId::Numbered(n) if (n as usize) < self.levels.len() => Some(n as u32),
            LevelId::Numbered(_) => None,
            LevelId::Transit => Some(self.transit_index()),
        }
    }

    /// Resolve a numeric level index. The transit index maps to
    /// [`LevelId::Transit`]; anything above it is `None`.
    pub fn resolve(&self, index: u32) -> Option<LevelId> {
        let transit = self.transit_index();
        if index < transit {
            Some(LevelId::Numbered(index as u8))
        } else if index == transit {
            Some(LevelId::Transit)
        } else {
            None
        }
    }

    /// Parse a level given as a numeric index or the word `transit`.
    pub fn parse_level(&self, s: &str) -> Option<LevelId> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transit") {
            return Some(LevelId::Transit);
        }
        s.parse::<u32>().ok().and_then(|index| self.resolve(index))
    }
}

impl Default for TileHierarchy {
    fn default() -> Self {
        Self::standard()
    }
}
