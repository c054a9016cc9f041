//! Visual exports of a colored level.
//!
//! - [`ConnectivityMap::to_geojson`] - one GeoJSON feature per region,
//!   largest region first
//! - [`ConnectivityMap::to_image`] - a flat row-major raster of colors
//!
//! Both reject levels that are not part of the hierarchy with
//! [`ConnectivityError::InvalidLevel`], so callers can tell a bad request
//! from a level that simply has no tiles.

mod geojson;
mod palette;

pub use palette::{Palette, CHANNEL_RANGE, PALETTE_SEED};

use std::time::Instant;

use rayon::prelude::*;

use crate::boundary::{trace_region, Polygon};
use crate::coloring::{Color, ColorMap, Region, NO_COLOR};
use crate::connectivity::{ConnectivityError, ConnectivityMap};
use crate::hierarchy::LevelId;
use geojson::{Feature, FeatureCollection};

impl ConnectivityMap {
    /// Regions of a level, largest first, ties by ascending color.
    ///
    /// A valid level without tiles has no regions.
    pub fn regions(&self, level: LevelId) -> Result<Vec<Region>, ConnectivityError> {
        self.tile_level(level)?;
        Ok(self
            .color_map(level)
            .map(ColorMap::regions)
            .unwrap_or_default())
    }

    /// GeoJSON `FeatureCollection` outlining every region of a level.
    ///
    /// Fill colors come from a fixed-seed [`Palette`] assigned in region
    /// order, so the same data always renders the same way. Region outlines
    /// are traced in parallel.
    pub fn to_geojson(&self, level: LevelId) -> Result<String, ConnectivityError> {
        let grid = self.tile_level(level)?.grid;
        let started = Instant::now();

        let regions = self.regions(level)?;
        let outlines: Vec<Vec<Polygon>> = regions
            .par_iter()
            .map(|region| trace_region(&region.tiles, &grid))
            .collect();

        let mut palette = Palette::new();
        let features = regions
            .iter()
            .zip(outlines)
            .map(|(region, polygons)| Feature::region(region.color, palette.next_fill(), &polygons))
            .collect();

        let document = serde_json::to_string(&FeatureCollection::new(features))?;
        tracing::debug!(
            %level,
            regions = regions.len(),
            bytes = document.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Exported level as GeoJSON"
        );
        Ok(document)
    }

    /// Color of every grid cell of a level, row-major from the south-west
    /// corner. Cells without a tile are [`NO_COLOR`].
    pub fn to_image(&self, level: LevelId) -> Result<Vec<Color>, ConnectivityError> {
        let grid = self.tile_level(level)?.grid;
        let mut image = vec![NO_COLOR; grid.tile_count() as usize];
        if let Some(colors) = self.color_map(level) {
            for (tile, color) in colors.iter() {
                if let Some(cell) = image.get_mut(tile as usize) {
                    *cell = color;
                }
            }
        }
        Ok(image)
    }
}
