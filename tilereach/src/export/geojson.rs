//! GeoJSON feature collection of traced regions.

use serde::Serialize;

use crate::boundary::Polygon;
use crate::coloring::Color;

/// Decimal places kept for coordinates.
const COORDINATE_DIGITS: i32 = 6;

/// Fill opacity of every feature.
const FILL_OPACITY: f64 = 0.8;

type Position = [f64; 2];

#[derive(Debug, Serialize)]
pub(super) struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub(super) fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Geometry,
    properties: Properties,
}

impl Feature {
    /// One feature per region. A region that traces to more than one
    /// polygon becomes a `MultiPolygon`.
    pub(super) fn region(id: Color, fill: String, polygons: &[Polygon]) -> Self {
        let geometry = match polygons {
            [polygon] => Geometry::Polygon {
                coordinates: rings(polygon),
            },
            _ => Geometry::MultiPolygon {
                coordinates: polygons.iter().map(rings).collect(),
            },
        };
        Self {
            kind: "Feature",
            geometry,
            properties: Properties {
                fill,
                stroke: "white",
                stroke_width: 1,
                fill_opacity: round_to(FILL_OPACITY, 1),
                id,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
}

#[derive(Debug, Serialize)]
struct Properties {
    fill: String,
    stroke: &'static str,
    #[serde(rename = "stroke-width")]
    stroke_width: u32,
    #[serde(rename = "fill-opacity")]
    fill_opacity: f64,
    id: Color,
}

fn rings(polygon: &Polygon) -> Vec<Vec<Position>> {
    polygon
        .rings
        .iter()
        .map(|ring| {
            ring.iter()
                .map(|p| {
                    [
                        round_to(p.lon, COORDINATE_DIGITS),
                        round_to(p.lat, COORDINATE_DIGITS),
                    ]
                })
                .collect()
        })
        .collect()
}

fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
