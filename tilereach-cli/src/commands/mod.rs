//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and a
//! `run` handler taking the already built connectivity map.
//!
//! # Command Modules
//!
//! - [`stats`] - Per-level tile and component counts
//! - [`color`] - Color of a single tile
//! - [`colors`] - Colors reachable around a coordinate
//! - [`geojson`] - Region outlines as GeoJSON
//! - [`image`] - Color raster as text

pub mod color;
pub mod colors;
pub mod common;
pub mod geojson;
pub mod image;
pub mod stats;
