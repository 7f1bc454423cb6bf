//! Shortcutting a closed walk into a Hamiltonian cycle.
//!
//! Keeps only the first visit of every point. Under the triangle inequality
//! each skipped detour is replaced by a direct step that is no longer, so
//! the tour is never longer than the walk. With the walk around a doubled
//! minimum spanning tree (exactly twice the tree weight), this bounds the
//! tour by twice the optimum.

use crate::euler::ClosedWalk;
use crate::tour::Tour;

/// Emits each point of `walk` on its first appearance, then closes the
/// cycle back at the walk's start.
///
/// Every index in `walk` must be below `point_count`; the walk from
/// [`DoubledGraph::into_closed_walk`](crate::euler::DoubledGraph::into_closed_walk)
/// over the same points always is. An empty walk gives an empty tour.
///
/// # Panics
///
/// Panics if `walk` holds an index `>= point_count`.
pub fn shortcut(walk: &ClosedWalk, point_count: usize) -> Tour {
    let mut emitted = vec![false; point_count];
    let mut order = Vec::with_capacity(point_count);
    for &p in walk.as_slice() {
        if !emitted[p] {
            emitted[p] = true;
            order.push(p);
        }
    }
    Tour::from_order(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::euler::DoubledGraph;
    use crate::geometry::Point;
    use crate::instance::uniform_points;
    use crate::mst::build_mst;
    use proptest::prelude::*;

    #[test]
    fn test_skips_repeats() {
        let walk = ClosedWalk::from(vec![0, 1, 2, 1, 3, 1, 0]);
        assert_eq!(shortcut(&walk, 4).as_slice(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_two_point_walk() {
        let walk = ClosedWalk::from(vec![0, 1, 0]);
        assert_eq!(shortcut(&walk, 2).as_slice(), &[0, 1, 0]);
    }

    #[test]
    fn test_single_point_walk() {
        let walk = ClosedWalk::from(vec![0]);
        assert_eq!(shortcut(&walk, 1).as_slice(), &[0, 0]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        shortcut(&ClosedWalk::from(vec![0, 3, 0]), 2);
    }

    #[test]
    fn test_empty_walk() {
        let walk = ClosedWalk::from(Vec::new());
        assert!(shortcut(&walk, 0).as_slice().is_empty());
    }

    #[test]
    fn test_tour_not_longer_than_walk() {
        let points = uniform_points(80, 100.0, 21);
        let tree = build_mst(&points);
        let walk = DoubledGraph::from_tree(&tree).into_closed_walk(0);
        let tour = shortcut(&walk, points.len());
        assert!(tour.is_hamiltonian(points.len()));
        assert!(tour.length(&points) <= walk.length(&points) + 1e-9);
        assert!(tour.length(&points) <= 2.0 * tree.total_weight() + 1e-9);
    }

    proptest! {
        #[test]
        fn prop_any_covering_walk_gives_permutation(
            extra in prop::collection::vec(0usize..12, 0..60),
            n in 1usize..12,
        ) {
            // A walk from 0 that covers every point, padded with repeats in
            // arbitrary order.
            let mut walk = vec![0];
            walk.extend(extra.into_iter().map(|p| p % n));
            walk.extend(0..n);
            walk.push(0);
            let tour = shortcut(&ClosedWalk::from(walk), n);
            prop_assert!(tour.is_hamiltonian(n));
            prop_assert_eq!(tour.as_slice()[0], 0);
        }

        #[test]
        fn prop_pipeline_tour_is_hamiltonian(
            coords in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 2..30)
        ) {
            let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
            let walk = DoubledGraph::from_tree(&build_mst(&points)).into_closed_walk(0);
            prop_assert!(shortcut(&walk, points.len()).is_hamiltonian(points.len()));
        }
    }
}
