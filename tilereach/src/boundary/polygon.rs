//! Polygon types produced by the boundary tracer.

use crate::geo::PointLL;

/// A closed sequence of vertices; the last vertex repeats the first.
pub type Ring = Vec<PointLL>;

/// A polygon with optional holes.
///
/// The first ring is the outer boundary (counter-clockwise); any further
/// rings are holes (clockwise).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

impl Polygon {
    /// The outer boundary.
    pub fn outer(&self) -> &[PointLL] {
        self.rings.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Hole rings, possibly none.
    pub fn holes(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// Whether `point` lies inside the polygon (even-odd rule over all rings).
    ///
    /// Points exactly on a ring are not handled specially.
    pub fn contains(&self, point: PointLL) -> bool {
        self.rings
            .iter()
            .filter(|ring| ring_crosses(ring, point))
            .count()
            % 2
            == 1
    }

    /// Enclosed area in square degrees.
    pub fn area(&self) -> f64 {
        self.rings.iter().map(|ring| signed_area(ring)).sum()
    }
}

/// Signed shoelace area of a ring: positive for counter-clockwise.
pub fn signed_area(ring: &[PointLL]) -> f64 {
    let twice: f64 = ring
        .windows(2)
        .map(|w| w[0].lon * w[1].lat - w[1].lon * w[0].lat)
        .sum();
    twice / 2.0
}

/// Odd number of ray crossings to the east of `point`.
fn ring_crosses(ring: &[PointLL], point: PointLL) -> bool {
    let mut inside = false;
    for w in ring.windows(2) {
        let (a, b) = (w[0], w[1]);
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let lon = a.lon + (point.lat - a.lat) * (b.lon - a.lon) / (b.lat - a.lat);
            if point.lon < lon {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Ring {
        points.iter().map(|&(lon, lat)| PointLL::new(lon, lat)).collect()
    }

    fn square_with_hole() -> Polygon {
        Polygon {
            rings: vec![
                ring(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0), (0.0, 0.0)]),
                ring(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)]),
            ],
        }
    }

    #[test]
    fn test_signed_area_orientation() {
        let polygon = square_with_hole();
        assert_eq!(signed_area(polygon.outer()), 9.0);
        assert_eq!(signed_area(&polygon.holes()[0]), -1.0);
        assert_eq!(polygon.area(), 8.0);
    }

    #[test]
    fn test_contains_respects_holes() {
        let polygon = square_with_hole();
        assert!(polygon.contains(PointLL::new(0.5, 0.5)));
        assert!(!polygon.contains(PointLL::new(1.5, 1.5)));
        assert!(!polygon.contains(PointLL::new(3.5, 0.5)));
    }

    #[test]
    fn test_empty_polygon() {
        let polygon = Polygon { rings: Vec::new() };
        assert!(polygon.outer().is_empty());
        assert!(polygon.holes().is_empty());
        assert!(!polygon.contains(PointLL::new(0.0, 0.0)));
    }
}
