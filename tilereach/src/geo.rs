//! Geographic primitives shared by the tile grid and the query engine.
//!
//! Points are stored longitude first, matching the `[lon, lat]` order used in
//! GeoJSON output.

use std::fmt;

/// Approximate meters spanned by one degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 110_567.0;

/// Valid latitude range.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Meters spanned by one degree of longitude at the given latitude.
///
/// Local equirectangular approximation; accurate enough for the small radii
/// used when searching for nearby tiles.
#[inline]
pub fn meters_per_lng_degree(lat: f64) -> f64 {
    lat.to_radians().cos() * METERS_PER_DEGREE_LAT
}

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLL {
    /// Longitude (x)
    pub lon: f64,
    /// Latitude (y)
    pub lat: f64,
}

impl PointLL {
    /// Create a point from longitude and latitude.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl fmt::Display for PointLL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

/// Axis-aligned geographic rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a bounding box from its corners.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// The whole globe.
    pub fn world() -> Self {
        Self::new(MIN_LON, MIN_LAT, MAX_LON, MAX_LAT)
    }

    /// Box extending `radius_m` meters in every direction from `center`.
    ///
    /// The meter radius is converted to a degree half-extent at the center's
    /// latitude. No wrapping is applied at the antimeridian or the poles; the
    /// box may extend past the valid coordinate range.
    pub fn around(center: PointLL, radius_m: f64) -> Self {
        if radius_m <= 0.0 {
            return Self::new(center.lon, center.lat, center.lon, center.lat);
        }
        let lat_deg = radius_m / METERS_PER_DEGREE_LAT;
        let lng_deg = radius_m / meters_per_lng_degree(center.lat);
        Self::new(
            center.lon - lng_deg,
            center.lat - lat_deg,
            center.lon + lng_deg,
            center.lat + lat_deg,
        )
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Whether the point lies inside or on the edge of the box.
    pub fn contains(&self, point: PointLL) -> bool {
        (self.min_lon..=self.max_lon).contains(&point.lon)
            && (self.min_lat..=self.max_lat).contains(&point.lat)
    }

    /// Whether the two boxes overlap (touching edges count).
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_lon <= other.max_lon
            && other.min_lon <= self.max_lon
            && self.min_lat <= other.max_lat
            && other.min_lat <= self.max_lat
    }

    /// Intersection of the two boxes, or `None` if they do not overlap.
    pub fn clamp_to(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if !self.intersects(other) {
            return None;
        }
        Some(BoundingBox::new(
            self.min_lon.max(other.min_lon),
            self.min_lat.max(other.min_lat),
            self.max_lon.min(other.max_lon),
            self.max_lat.min(other.max_lat),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_per_lng_degree_at_equator() {
        assert!((meters_per_lng_degree(0.0) - METERS_PER_DEGREE_LAT).abs() < 1e-6);
    }

    #[test]
    fn test_meters_per_lng_degree_shrinks_with_latitude() {
        let at_60 = meters_per_lng_degree(60.0);
        assert!(
            (at_60 - METERS_PER_DEGREE_LAT / 2.0).abs() < 1.0,
            "cos(60°) should halve the span, got {}",
            at_60
        );
    }

    #[test]
    fn test_around_zero_radius_is_degenerate() {
        let center = PointLL::new(7.25, 43.7);
        let bbox = BoundingBox::around(center, 0.0);
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
        assert!(bbox.contains(center));
    }

    #[test]
    fn test_around_one_degree_of_latitude() {
        let bbox = BoundingBox::around(PointLL::new(0.0, 0.0), METERS_PER_DEGREE_LAT);
        assert!((bbox.min_lat + 1.0).abs() < 1e-9);
        assert!((bbox.max_lat - 1.0).abs() < 1e-9);
        assert!((bbox.max_lon - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_around_is_wider_at_high_latitude() {
        let bbox = BoundingBox::around(PointLL::new(10.0, 60.0), 10_000.0);
        assert!(bbox.width() > bbox.height() * 1.9);
    }

    #[test]
    fn test_intersects_touching_edges() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::new(1.0, 0.5, 2.0, 2.0);
        let c = BoundingBox::new(1.5, 0.0, 2.0, 1.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_clamp_to_world() {
        let bbox = BoundingBox::new(179.0, 89.0, 181.0, 91.0);
        let clamped = bbox.clamp_to(&BoundingBox::world()).unwrap();
        assert_eq!(clamped, BoundingBox::new(179.0, 89.0, 180.0, 90.0));

        let outside = BoundingBox::new(181.0, 0.0, 182.0, 1.0);
        assert!(outside.clamp_to(&BoundingBox::world()).is_none());
    }
}
