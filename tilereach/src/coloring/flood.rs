//! Breadth-first flood fill over grid adjacency.

use std::collections::{BTreeSet, HashMap, VecDeque};

use super::color_map::{Color, ColorMap};
use super::exclusion::ExclusionTable;
use crate::hierarchy::TileGrid;

/// Color the connected components of `tiles`.
///
/// Two tiles are connected when they share a grid edge and their pair is
/// not listed in `exclusions`. Seeds are taken in ascending tile order and
/// colors are allocated from 1 upwards, so identical input always yields
/// identical colors.
pub fn color_tiles(grid: &TileGrid, tiles: &BTreeSet<u32>, exclusions: &ExclusionTable) -> ColorMap {
    let mut colors: HashMap<u32, Color> = HashMap::with_capacity(tiles.len());
    let mut queue: VecDeque<u32> = VecDeque::new();
    let mut next_color: Color = 1;

    for &seed in tiles {
        if colors.contains_key(&seed) {
            continue;
        }

        let color = next_color;
        next_color += 1;
        colors.insert(seed, color);
        queue.push_back(seed);

        while let Some(tile) = queue.pop_front() {
            for neighbor in grid.neighbors(tile) {
                if !tiles.contains(&neighbor)
                    || colors.contains_key(&neighbor)
                    || exclusions.excludes(tile, neighbor)
                {
                    continue;
                }
                colors.insert(neighbor, color);
                queue.push_back(neighbor);
            }
        }
    }

    ColorMap::new(colors, next_color - 1)
}
