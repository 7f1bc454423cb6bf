//! Tree edge and spanning tree types.

/// A weighted undirected edge between two point indices.
///
/// For edges produced by Prim, `a` is the point the edge brought into the
/// tree and `b` is the tree point it was reached from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Euclidean distance between `a` and `b`.
    pub weight: f64,
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(weight: f64, a: usize, b: usize) -> Self {
        Self { weight, a, b }
    }
}

/// A spanning tree over points `0..point_count`, rooted at point 0.
///
/// Holds exactly `point_count - 1` edges (none for zero or one point), in
/// the order they were added to the tree.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    point_count: usize,
    edges: Vec<Edge>,
}

impl SpanningTree {
    pub(crate) fn new(point_count: usize, edges: Vec<Edge>) -> Self {
        debug_assert_eq!(edges.len(), point_count.saturating_sub(1));
        Self { point_count, edges }
    }

    /// Number of points the tree spans.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}
