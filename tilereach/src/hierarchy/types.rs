//! Level and tile identifier types.

use std::fmt;

use super::grid::TileGrid;

/// Identifies one level of the tile hierarchy.
///
/// Ordinary road levels are numbered from 0 (coarsest). The transit level is
/// a distinct variant that orders after every numbered level, so `Transit`
/// is always the maximum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LevelId {
    /// An ordinary road hierarchy level.
    Numbered(u8),
    /// The transit level.
    Transit,
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelId::Numbered(n) => write!(f, "{}", n),
            LevelId::Transit => write!(f, "transit"),
        }
    }
}

/// A tile address: the level plus the row-major index within that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    pub level: LevelId,
    pub index: u32,
}

impl TileId {
    pub fn new(level: LevelId, index: u32) -> Self {
        Self { level, index }
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.level, self.index)
    }
}

/// One resolution of the tile hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLevel {
    /// Level identifier
    pub id: LevelId,
    /// Human readable name ("highway", "local", ...)
    pub name: String,
    /// Grid geometry for this level
    pub grid: TileGrid,
}

impl TileLevel {
    pub fn new(id: LevelId, name: impl Into<String>, grid: TileGrid) -> Self {
        Self {
            id,
            name: name.into(),
            grid,
        }
    }
}
