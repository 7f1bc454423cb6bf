//! Doubled spanning tree and its Eulerian closed walk.
//!
//! Doubling every tree edge gives each point an even degree, so the
//! multigraph has a closed walk that uses every edge exactly once. The walk
//! is extracted with the iterative form of Hierholzer's algorithm: an
//! explicit stack instead of recursion, so deep trees (a long chain of
//! points) cannot overflow the call stack.
//!
//! # References
//!
//! - Hierholzer, C. & Wiener, C. (1873). "Über die Möglichkeit, einen
//!   Linienzug ohne Wiederholung und ohne Unterbrechung zu umfahren",
//!   *Mathematische Annalen* 6(1), 30-32.

use crate::mst::SpanningTree;

/// Undirected multigraph holding every tree edge twice.
///
/// Owns its adjacency lists outright; the tree it was built from is left
/// untouched. Extracting the walk consumes the graph.
#[derive(Debug, Clone)]
pub struct DoubledGraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl DoubledGraph {
    /// Inserts each tree edge twice, recording both copies at both endpoints.
    pub fn from_tree(tree: &SpanningTree) -> Self {
        let mut adjacency = vec![Vec::new(); tree.point_count()];
        for edge in tree.edges() {
            for _ in 0..2 {
                adjacency[edge.a].push(edge.b);
                adjacency[edge.b].push(edge.a);
            }
        }
        Self {
            adjacency,
            edge_count: 2 * tree.edges().len(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, counting both copies.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edge ends at `point`.
    pub fn degree(&self, point: usize) -> usize {
        self.adjacency[point].len()
    }

    pub fn all_degrees_even(&self) -> bool {
        self.adjacency.iter().all(|adj| adj.len() % 2 == 0)
    }

    /// Drains the graph into a closed walk starting and ending at `start`.
    ///
    /// Each step takes the last remaining neighbor of the point on top of
    /// the stack and removes that edge from both endpoint lists
    /// (swap-and-pop), so every edge is traversed once. For a doubled tree
    /// over `n` points the walk holds `2(n - 1) + 1` entries.
    ///
    /// `start` must be a point of the graph.
    pub fn into_closed_walk(mut self, start: usize) -> ClosedWalk {
        let mut stack = vec![start];
        let mut walk = Vec::with_capacity(self.edge_count + 1);

        while let Some(&top) = stack.last() {
            match self.adjacency[top].pop() {
                Some(next) => {
                    self.remove_end(next, top);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                    walk.push(top);
                }
            }
        }

        walk.reverse();
        // Hierholzer already returns to `start` on a connected even-degree
        // graph; this only closes the degenerate single-point walk.
        if walk.last() != Some(&start) {
            walk.push(start);
        }
        ClosedWalk(walk)
    }

    fn remove_end(&mut self, at: usize, neighbor: usize) {
        let ends = &mut self.adjacency[at];
        if let Some(pos) = ends.iter().rposition(|&p| p == neighbor) {
            ends.swap_remove(pos);
        }
    }
}

/// Point indices of a closed walk; the first and last entries are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedWalk(Vec<usize>);

impl ClosedWalk {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of step lengths along the walk.
    pub fn length(&self, points: &[crate::geometry::Point]) -> f64 {
        crate::tour::path_length(points, &self.0)
    }
}

impl From<Vec<usize>> for ClosedWalk {
    fn from(points: Vec<usize>) -> Self {
        Self(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::instance::uniform_points;
    use crate::mst::{build_mst, Edge};
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn edge_key(a: usize, b: usize) -> (usize, usize) {
        (a.min(b), a.max(b))
    }

    /// Counts how often each undirected edge is stepped along by `walk`.
    fn step_counts(walk: &[usize]) -> HashMap<(usize, usize), usize> {
        let mut counts = HashMap::new();
        for w in walk.windows(2) {
            *counts.entry(edge_key(w[0], w[1])).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_single_point_walk() {
        let tree = build_mst(&[Point::new(0.0, 0.0)]);
        let walk = DoubledGraph::from_tree(&tree).into_closed_walk(0);
        assert_eq!(walk.as_slice(), &[0]);
    }

    #[test]
    fn test_two_point_walk() {
        let tree = build_mst(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        let walk = DoubledGraph::from_tree(&tree).into_closed_walk(0);
        assert_eq!(walk.as_slice(), &[0, 1, 0]);
    }

    #[test]
    fn test_star_degrees() {
        let tree = SpanningTree::new(
            4,
            vec![Edge::new(1.0, 1, 0), Edge::new(1.0, 2, 0), Edge::new(1.0, 3, 0)],
        );
        let graph = DoubledGraph::from_tree(&tree);
        assert_eq!(graph.degree(0), 6);
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.all_degrees_even());
    }

    #[test]
    fn test_walk_uses_each_tree_edge_twice() {
        let points = uniform_points(30, 50.0, 5);
        let tree = build_mst(&points);
        let walk = DoubledGraph::from_tree(&tree).into_closed_walk(0);

        assert_eq!(walk.len(), 2 * 29 + 1);
        assert_eq!(walk.as_slice().first(), Some(&0));
        assert_eq!(walk.as_slice().last(), Some(&0));

        let counts = step_counts(walk.as_slice());
        assert_eq!(counts.len(), 29);
        for e in tree.edges() {
            assert_eq!(counts.get(&edge_key(e.a, e.b)), Some(&2));
        }
    }

    #[test]
    fn test_walk_length_is_twice_tree_weight() {
        let points = uniform_points(40, 10.0, 9);
        let tree = build_mst(&points);
        let walk = DoubledGraph::from_tree(&tree).into_closed_walk(0);
        assert!((walk.length(&points) - 2.0 * tree.total_weight()).abs() < 1e-9);
    }

    #[test]
    fn test_long_chain_no_recursion_limit() {
        let n = 100_000;
        let chain = (1..n).map(|i| Edge::new(1.0, i, i - 1)).collect();
        let tree = SpanningTree::new(n, chain);
        let walk = DoubledGraph::from_tree(&tree).into_closed_walk(0);
        assert_eq!(walk.len(), 2 * (n - 1) + 1);
        assert_eq!(walk.as_slice()[n - 1], n - 1);
    }

    proptest! {
        #[test]
        fn prop_doubled_degrees_even(
            coords in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 2..40)
        ) {
            let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
            let tree = build_mst(&points);
            let graph = DoubledGraph::from_tree(&tree);
            prop_assert!(graph.all_degrees_even());
            prop_assert_eq!(graph.edge_count(), 2 * (points.len() - 1));
        }
    }
}
