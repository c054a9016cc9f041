//! Contour tracing over the tile lattice.
//!
//! Work happens on integer lattice coordinates: cell `(x, y)` is the tile in
//! column `x`, row `y`, spanning corners `(x, y)` to `(x + 1, y + 1)`. Only
//! the final rings are converted to longitude/latitude.

use std::collections::{HashMap, HashSet};

use super::polygon::Polygon;
use crate::hierarchy::TileGrid;

type Vertex = (i64, i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    fn left(self) -> Self {
        match self {
            Direction::East => Direction::North,
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
        }
    }

    fn right(self) -> Self {
        match self {
            Direction::East => Direction::South,
            Direction::North => Direction::East,
            Direction::West => Direction::North,
            Direction::South => Direction::West,
        }
    }

    fn step(self) -> Vertex {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::West => (-1, 0),
            Direction::South => (0, -1),
        }
    }
}

/// Unit boundary edge with the member cell on its left.
#[derive(Debug, Clone, Copy)]
struct Edge {
    start: Vertex,
    dir: Direction,
}

impl Edge {
    fn end(&self) -> Vertex {
        let (dx, dy) = self.dir.step();
        (self.start.0 + dx, self.start.1 + dy)
    }

    /// Center of the cell to the right of the edge, in doubled coordinates
    /// so it stays integral.
    fn right_probe(&self) -> Vertex {
        let (x, y) = self.start;
        match self.dir {
            Direction::East => (2 * x + 1, 2 * y - 1),
            Direction::North => (2 * x + 1, 2 * y + 1),
            Direction::West => (2 * x - 1, 2 * y + 1),
            Direction::South => (2 * x - 1, 2 * y - 1),
        }
    }
}

/// A closed boundary loop reduced to its corners.
#[derive(Debug)]
struct Contour {
    corners: Vec<Vertex>,
    /// Twice the signed area; positive for counter-clockwise.
    area2: i64,
    /// A point strictly inside the cell right of the loop.
    probe: Vertex,
}

impl Contour {
    /// Whether a doubled-coordinate point lies inside the loop.
    ///
    /// Probe points have odd coordinates and corners even ones, so the ray
    /// never touches a vertex.
    fn encloses(&self, (px, py): Vertex) -> bool {
        let n = self.corners.len();
        let mut inside = false;
        for i in 0..n {
            let (x1, y1) = self.corners[i];
            let (x2, y2) = self.corners[(i + 1) % n];
            if (2 * y1 > py) != (2 * y2 > py) {
                debug_assert_eq!(x1, x2, "rectilinear contour");
                if px < 2 * x1 {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// Trace the outline of a set of tiles.
///
/// Returns one polygon per 4-connected piece of the set. Tiles that only
/// touch at a corner end up in separate polygons. Holes are attached to the
/// smallest outer ring that encloses them. Indices outside `grid` are
/// ignored.
pub fn trace_region(tiles: &[u32], grid: &TileGrid) -> Vec<Polygon> {
    let cells: HashSet<Vertex> = tiles
        .iter()
        .filter(|&&tile| grid.contains(tile))
        .map(|&tile| {
            let (row, col) = grid.row_col(tile);
            (col as i64, row as i64)
        })
        .collect();

    trace_cells(&cells)
        .into_iter()
        .map(|rings| Polygon {
            rings: rings
                .into_iter()
                .map(|corners| {
                    corners
                        .iter()
                        .chain(corners.first())
                        .map(|&(x, y)| grid.corner(x, y))
                        .collect()
                })
                .collect(),
        })
        .collect()
}

/// Trace lattice cells into polygons of corner rings (not closed).
fn trace_cells(cells: &HashSet<Vertex>) -> Vec<Vec<Vec<Vertex>>> {
    let contours = link_contours(&boundary_edges(cells));

    let (outers, holes): (Vec<Contour>, Vec<Contour>) =
        contours.into_iter().partition(|c| c.area2 > 0);

    let mut polygons: Vec<Vec<Vec<Vertex>>> =
        outers.iter().map(|outer| vec![outer.corners.clone()]).collect();

    for hole in holes {
        let parent = outers
            .iter()
            .enumerate()
            .filter(|(_, outer)| outer.encloses(hole.probe))
            .min_by_key(|(_, outer)| outer.area2)
            .map(|(i, _)| i);
        match parent {
            Some(i) => polygons[i].push(hole.corners),
            None => tracing::warn!(
                corners = hole.corners.len(),
                "Dropping hole ring with no enclosing outer ring"
            ),
        }
    }
    polygons
}

/// Every cell side that faces a non-member cell, member on the left.
///
/// Cells are visited bottom row first so the output order is stable.
fn boundary_edges(cells: &HashSet<Vertex>) -> Vec<Edge> {
    let mut sorted: Vec<Vertex> = cells.iter().copied().collect();
    sorted.sort_unstable_by_key(|&(x, y)| (y, x));

    let mut edges = Vec::new();
    for (x, y) in sorted {
        if !cells.contains(&(x, y - 1)) {
            edges.push(Edge {
                start: (x, y),
                dir: Direction::East,
            });
        }
        if !cells.contains(&(x + 1, y)) {
            edges.push(Edge {
                start: (x + 1, y),
                dir: Direction::North,
            });
        }
        if !cells.contains(&(x, y + 1)) {
            edges.push(Edge {
                start: (x + 1, y + 1),
                dir: Direction::West,
            });
        }
        if !cells.contains(&(x - 1, y)) {
            edges.push(Edge {
                start: (x, y + 1),
                dir: Direction::South,
            });
        }
    }
    edges
}

/// Follow edges end to start into closed loops.
///
/// Where two loops meet at a corner (diagonal cells) the left-most turn is
/// taken, which keeps diagonal neighbours in separate loops.
fn link_contours(edges: &[Edge]) -> Vec<Contour> {
    let outgoing: HashMap<(Vertex, Direction), usize> = edges
        .iter()
        .enumerate()
        .map(|(i, edge)| ((edge.start, edge.dir), i))
        .collect();

    let successor = |edge: &Edge| -> Option<usize> {
        let at = edge.end();
        [edge.dir.left(), edge.dir, edge.dir.right()]
            .into_iter()
            .find_map(|dir| outgoing.get(&(at, dir)).copied())
    };

    let mut visited = vec![false; edges.len()];
    let mut contours = Vec::new();

    for first in 0..edges.len() {
        if visited[first] {
            continue;
        }

        let mut path = Vec::new();
        let mut current = first;
        loop {
            visited[current] = true;
            path.push(current);
            match successor(&edges[current]) {
                Some(next) if next == first => break,
                Some(next) if !visited[next] => current = next,
                _ => {
                    tracing::warn!(start = ?edges[first].start, "Boundary loop did not close");
                    break;
                }
            }
        }

        contours.push(contour_from_path(&path, edges));
    }
    contours
}

/// Reduce a loop of unit edges to its corners; collinear runs collapse.
fn contour_from_path(path: &[usize], edges: &[Edge]) -> Contour {
    let n = path.len();
    let corners: Vec<Vertex> = (0..n)
        .filter(|&i| edges[path[(i + n - 1) % n]].dir != edges[path[i]].dir)
        .map(|i| edges[path[i]].start)
        .collect();

    let m = corners.len();
    let area2 = (0..m)
        .map(|i| {
            let (x1, y1) = corners[i];
            let (x2, y2) = corners[(i + 1) % m];
            x1 * y2 - x2 * y1
        })
        .sum();

    Contour {
        corners,
        area2,
        probe: edges[path[0]].right_probe(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::polygon::signed_area;
    use crate::geo::{BoundingBox, PointLL};
    use proptest::prelude::*;

    fn grid(rows: u32, columns: u32) -> TileGrid {
        TileGrid::new(
            BoundingBox::new(0.0, 0.0, columns as f64, rows as f64),
            1.0,
        )
    }

    fn points(ring: &[PointLL]) -> Vec<(f64, f64)> {
        ring.iter().map(|p| (p.lon, p.lat)).collect()
    }

    /// Cells whose center is covered by exactly one polygon.
    fn rasterize(polygons: &[Polygon], grid: &TileGrid) -> Vec<u32> {
        (0..grid.tile_count())
            .filter(|&tile| {
                let bounds = grid.tile_bounds(tile);
                let center = PointLL::new(
                    (bounds.min_lon + bounds.max_lon) / 2.0,
                    (bounds.min_lat + bounds.max_lat) / 2.0,
                );
                let hits = polygons.iter().filter(|p| p.contains(center)).count();
                assert!(hits <= 1, "polygons overlap at tile {}", tile);
                hits == 1
            })
            .collect()
    }

    #[test]
    fn test_full_square_is_one_rectangle() {
        let g = grid(2, 2);
        let polygons = trace_region(&[0, 1, 2, 3], &g);

        assert_eq!(polygons.len(), 1);
        assert!(polygons[0].holes().is_empty());
        assert_eq!(
            points(polygons[0].outer()),
            vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn test_ring_around_missing_center_has_hole() {
        let g = grid(3, 3);
        let polygons = trace_region(&[0, 1, 2, 3, 5, 6, 7, 8], &g);

        assert_eq!(polygons.len(), 1);
        let polygon = &polygons[0];
        assert_eq!(polygon.holes().len(), 1);
        assert_eq!(polygon.outer().len(), 5);

        let hole = &polygon.holes()[0];
        assert_eq!(hole.len(), 5, "hole is one unit square");
        let mut corners = points(&hole[..4]);
        corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(corners, vec![(1.0, 1.0), (1.0, 2.0), (2.0, 1.0), (2.0, 2.0)]);

        assert!(signed_area(polygon.outer()) > 0.0, "outer ring counter-clockwise");
        assert!(signed_area(hole) < 0.0, "hole ring clockwise");
        assert_eq!(polygon.area(), 8.0);
    }

    #[test]
    fn test_collinear_edges_are_merged() {
        // A 1x5 strip has four corners no matter how long it is.
        let g = grid(1, 5);
        let polygons = trace_region(&[0, 1, 2, 3, 4], &g);
        assert_eq!(polygons[0].outer().len(), 5);
    }

    #[test]
    fn test_l_shape_has_six_corners() {
        let g = grid(2, 2);
        let polygons = trace_region(&[0, 1, 2], &g);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].outer().len(), 7);
        assert_eq!(polygons[0].area(), 3.0);
    }

    #[test]
    fn test_disjoint_pieces_are_separate_polygons() {
        let g = grid(1, 5);
        let polygons = trace_region(&[0, 1, 3, 4], &g);
        assert_eq!(polygons.len(), 2);
        assert!(polygons.iter().all(|p| p.holes().is_empty()));
        assert_eq!(polygons.iter().map(Polygon::area).sum::<f64>(), 4.0);
    }

    #[test]
    fn test_diagonal_cells_are_separate_polygons() {
        let g = grid(2, 2);
        let polygons = trace_region(&[0, 3], &g);
        assert_eq!(polygons.len(), 2);
        assert!(polygons.iter().all(|p| p.outer().len() == 5));
        assert_eq!(rasterize(&polygons, &g), vec![0, 3]);
    }

    #[test]
    fn test_island_inside_hole() {
        // 5x5 frame with a single tile in the middle of the hole.
        let g = grid(5, 5);
        let mut tiles: Vec<u32> = (0..25)
            .filter(|&t| {
                let (row, col) = g.row_col(t);
                row == 0 || row == 4 || col == 0 || col == 4
            })
            .collect();
        tiles.push(12);

        let polygons = trace_region(&tiles, &g);
        assert_eq!(polygons.len(), 2);
        let frame = polygons.iter().find(|p| p.holes().len() == 1).unwrap();
        assert_eq!(frame.area(), 16.0);

        let mut expected = tiles.clone();
        expected.sort_unstable();
        assert_eq!(rasterize(&polygons, &g), expected);
    }

    #[test]
    fn test_empty_and_out_of_grid_input() {
        let g = grid(2, 2);
        assert!(trace_region(&[], &g).is_empty());
        assert!(trace_region(&[17], &g).is_empty());
    }

    #[test]
    fn test_rings_are_closed_and_geographic() {
        let g = TileGrid::world(90.0);
        let polygons = trace_region(&[0], &g);
        let outer = polygons[0].outer();
        assert_eq!(outer.first(), outer.last());
        assert_eq!(
            points(outer),
            vec![
                (-180.0, -90.0),
                (-90.0, -90.0),
                (-90.0, 0.0),
                (-180.0, 0.0),
                (-180.0, -90.0)
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_rasterized_boundary_matches_tiles(
            tiles in prop::collection::btree_set(0u32..49, 0..49)
        ) {
            let g = grid(7, 7);
            let tiles: Vec<u32> = tiles.into_iter().collect();
            let polygons = trace_region(&tiles, &g);
            prop_assert_eq!(rasterize(&polygons, &g), tiles);
            for polygon in &polygons {
                prop_assert!(signed_area(polygon.outer()) > 0.0);
                for hole in polygon.holes() {
                    prop_assert!(signed_area(hole) < 0.0);
                }
            }
        }
    }
}
