//! Row-major tile grid addressing.
//!
//! A [`TileGrid`] covers a bounding box with square tiles of a fixed size in
//! degrees. Row 0 is the southern-most row and column 0 the western-most, so
//! a tile index is `row * columns + col`.

use crate::geo::{BoundingBox, PointLL};

/// Geometry of one hierarchy level's tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGrid {
    bounds: BoundingBox,
    tile_size: f64,
    rows: u32,
    columns: u32,
}

impl TileGrid {
    /// Create a grid of `tile_size`-degree tiles covering `bounds`.
    pub fn new(bounds: BoundingBox, tile_size: f64) -> Self {
        let rows = (bounds.height() / tile_size).round().max(1.0) as u32;
        let columns = (bounds.width() / tile_size).round().max(1.0) as u32;
        Self {
            bounds,
            tile_size,
            rows,
            columns,
        }
    }

    /// Create a grid covering the whole globe.
    pub fn world(tile_size: f64) -> Self {
        Self::new(BoundingBox::world(), tile_size)
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Tile edge length in degrees.
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Total number of cells in the grid.
    pub fn tile_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Whether `index` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, index: u32) -> bool {
        index < self.tile_count()
    }

    /// Split a tile index into `(row, col)`.
    #[inline]
    pub fn row_col(&self, index: u32) -> (u32, u32) {
        (index / self.columns, index % self.columns)
    }

    /// Join `(row, col)` into a tile index.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> u32 {
        row * self.columns + col
    }

    /// Geographic rectangle covered by a tile.
    pub fn tile_bounds(&self, index: u32) -> BoundingBox {
        let (row, col) = self.row_col(index);
        let sw = self.corner(col as i64, row as i64);
        let ne = self.corner(col as i64 + 1, row as i64 + 1);
        BoundingBox::new(sw.lon, sw.lat, ne.lon, ne.lat)
    }

    /// Geographic position of a grid lattice corner.
    ///
    /// Corner `(x, y)` is the south-west corner of the tile in column `x`,
    /// row `y`. Corners past the last row/column address the north/east edge.
    pub fn corner(&self, x: i64, y: i64) -> PointLL {
        PointLL::new(
            self.bounds.min_lon + x as f64 * self.tile_size,
            self.bounds.min_lat + y as f64 * self.tile_size,
        )
    }

    /// Row containing the latitude, or `None` outside the grid.
    ///
    /// The northern edge belongs to the last row.
    pub fn row_of(&self, lat: f64) -> Option<u32> {
        if !(self.bounds.min_lat..=self.bounds.max_lat).contains(&lat) {
            return None;
        }
        let row = ((lat - self.bounds.min_lat) / self.tile_size).floor() as u32;
        Some(row.min(self.rows - 1))
    }

    /// Column containing the longitude, or `None` outside the grid.
    ///
    /// The eastern edge belongs to the last column.
    pub fn col_of(&self, lon: f64) -> Option<u32> {
        if !(self.bounds.min_lon..=self.bounds.max_lon).contains(&lon) {
            return None;
        }
        let col = ((lon - self.bounds.min_lon) / self.tile_size).floor() as u32;
        Some(col.min(self.columns - 1))
    }

    /// Index of the tile containing the point.
    pub fn tile_containing(&self, point: PointLL) -> Option<u32> {
        let row = self.row_of(point.lat)?;
        let col = self.col_of(point.lon)?;
        Some(self.index(row, col))
    }

    /// Every tile index intersecting the bounding box, row by row.
    ///
    /// The box is clamped to the grid bounds first. A box entirely outside
    /// the grid yields an empty list.
    pub fn tile_list(&self, bbox: &BoundingBox) -> Vec<u32> {
        let Some(clamped) = bbox.clamp_to(&self.bounds) else {
            return Vec::new();
        };
        let (Some(min_row), Some(max_row), Some(min_col), Some(max_col)) = (
            self.row_of(clamped.min_lat),
            self.row_of(clamped.max_lat),
            self.col_of(clamped.min_lon),
            self.col_of(clamped.max_lon),
        ) else {
            return Vec::new();
        };

        let mut tiles =
            Vec::with_capacity(((max_row - min_row + 1) * (max_col - min_col + 1)) as usize);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                tiles.push(self.index(row, col));
            }
        }
        tiles
    }

    /// The up to four edge-sharing neighbors of a tile.
    ///
    /// Columns do not wrap across the antimeridian.
    pub fn neighbors(&self, index: u32) -> impl Iterator<Item = u32> {
        let valid = self.contains(index);
        let (row, col) = self.row_col(index);
        let columns = self.columns;
        [
            (valid && row > 0).then(|| index - columns),
            (valid && row + 1 < self.rows).then(|| index + columns),
            (valid && col > 0).then(|| index - 1),
            (valid && col + 1 < columns).then(|| index + 1),
        ]
        .into_iter()
        .flatten()
    }
}
