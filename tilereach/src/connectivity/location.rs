//! Correlated locations supplied by the edge-search collaborator.

use crate::geo::PointLL;

/// A candidate network edge near a location.
///
/// Only the projection of the input point onto the edge matters here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathEdge {
    /// Input point projected onto the edge
    pub projected: PointLL,
}

impl PathEdge {
    pub fn new(projected: PointLL) -> Self {
        Self { projected }
    }
}

/// A location correlated to nearby candidate edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathLocation {
    /// Primary candidate edges
    pub edges: Vec<PathEdge>,
    /// Candidates rejected by filters, kept as fallbacks
    pub filtered_edges: Vec<PathEdge>,
}

impl PathLocation {
    pub fn new(edges: Vec<PathEdge>, filtered_edges: Vec<PathEdge>) -> Self {
        Self {
            edges,
            filtered_edges,
        }
    }

    /// A location whose only candidate projects onto `point` itself.
    pub fn at(point: PointLL) -> Self {
        Self::new(vec![PathEdge::new(point)], Vec::new())
    }

    /// Primary then filtered candidates.
    pub fn candidates(&self) -> impl Iterator<Item = &PathEdge> {
        self.edges.iter().chain(self.filtered_edges.iter())
    }
}
