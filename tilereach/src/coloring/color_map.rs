//! Per-level tile → color assignment.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

/// Identifier of one connected component within a level.
pub type Color = u32;

/// Reserved color meaning "no tile here".
pub const NO_COLOR: Color = 0;

/// Immutable mapping from tile index to color for one level.
///
/// Every tile in the map has a color of at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<u32, Color>,
    color_count: u32,
}

impl ColorMap {
    pub(super) fn new(colors: HashMap<u32, Color>, color_count: u32) -> Self {
        debug_assert!(colors.values().all(|&c| c != NO_COLOR));
        Self {
            colors,
            color_count,
        }
    }

    /// Color of a tile, or `None` if the tile is absent.
    #[inline]
    pub fn get(&self, index: u32) -> Option<Color> {
        self.colors.get(&index).copied()
    }

    /// Color of a tile, or [`NO_COLOR`] if the tile is absent.
    #[inline]
    pub fn color_or_none(&self, index: u32) -> Color {
        self.get(index).unwrap_or(NO_COLOR)
    }

    /// Number of colored tiles.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of distinct colors. Colors are numbered `1..=color_count`.
    pub fn color_count(&self) -> u32 {
        self.color_count
    }

    /// `(tile index, color)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Color)> + '_ {
        self.colors.iter().map(|(&tile, &color)| (tile, color))
    }

    /// Group tiles by color.
    ///
    /// Regions are ordered largest first; equal sizes are ordered by
    /// ascending color. Tiles within a region are ascending.
    pub fn regions(&self) -> Vec<Region> {
        let mut grouped: BTreeMap<Color, Vec<u32>> = BTreeMap::new();
        for (&tile, &color) in &self.colors {
            grouped.entry(color).or_default().push(tile);
        }

        let mut regions: Vec<Region> = grouped
            .into_iter()
            .map(|(color, mut tiles)| {
                tiles.sort_unstable();
                Region { color, tiles }
            })
            .collect();
        regions.sort_by_key(|r| (Reverse(r.arity()), r.color));
        regions
    }
}

/// All tiles of one level sharing a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub color: Color,
    /// Member tile indices, ascending
    pub tiles: Vec<u32>,
}

impl Region {
    /// Number of tiles in the region.
    pub fn arity(&self) -> usize {
        self.tiles.len()
    }
}
