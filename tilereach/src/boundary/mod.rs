//! Outline extraction for sets of tiles.
//!
//! [`trace_region`] turns a set of tile indices into polygons whose area is
//! exactly the union of the tiles' cells. Outer rings wind counter-clockwise
//! and holes clockwise, as GeoJSON expects, and runs of collinear cell
//! edges are merged so a rectangle of any size has four corners.

mod polygon;
mod tracer;

pub use polygon::{signed_area, Polygon, Ring};
pub use tracer::trace_region;
