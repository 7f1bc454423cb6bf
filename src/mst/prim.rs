//! Prim's algorithm with a lazy-deletion binary heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::{Edge, SpanningTree};
use crate::geometry::{distance, Point};
use crate::interrupt::{Interrupt, Trigger};

/// A candidate edge in the heap: reaches `far` (outside the tree) from
/// `near` (inside the tree).
#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: f64,
    far: usize,
    near: usize,
}

// Reversed so `BinaryHeap` pops the lightest edge. Equal weights break
// toward the lower `far` index, then the lower `near` index.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.far.cmp(&self.far))
            .then_with(|| other.near.cmp(&self.near))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Builds a minimum spanning tree over `points`, rooted at point 0.
///
/// Returns an empty tree for zero or one point.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::Point;
/// use u_tsp::mst::build_mst;
///
/// let points = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 0.0)];
/// let tree = build_mst(&points);
/// assert_eq!(tree.edges().len(), 2);
/// assert!((tree.total_weight() - 2.0).abs() < 1e-12);
/// ```
pub fn build_mst(points: &[Point]) -> SpanningTree {
    match build_mst_interruptible(points, &Interrupt::none()) {
        Ok(tree) => tree,
        Err(_) => unreachable!("an empty interrupt never fires"),
    }
}

/// Builds a minimum spanning tree, polling `interrupt` once per point added.
///
/// A partial tree is useless downstream, so a fired interrupt discards the
/// work and reports the trigger.
pub fn build_mst_interruptible(
    points: &[Point],
    interrupt: &Interrupt,
) -> Result<SpanningTree, Trigger> {
    let n = points.len();
    if n < 2 {
        return Ok(SpanningTree::new(n, Vec::new()));
    }

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut visited_count = 1;

    let mut edges = Vec::with_capacity(n - 1);
    let mut heap = BinaryHeap::with_capacity(n);
    push_candidates(&mut heap, points, &visited, 0);

    while visited_count < n {
        // The heap cannot drain early: every unvisited point always has a
        // live candidate from the point 0 seed or a later push.
        let Some(Candidate { weight, far, near }) = heap.pop() else {
            break;
        };
        if visited[far] {
            continue;
        }
        // Stale entries are skipped above, so this runs once per point added.
        if let Some(trigger) = interrupt.check() {
            log::debug!("mst: interrupted ({trigger:?}) at {visited_count}/{n} points");
            return Err(trigger);
        }

        visited[far] = true;
        visited_count += 1;
        edges.push(Edge::new(weight, far, near));
        push_candidates(&mut heap, points, &visited, far);
    }

    log::debug!("mst: n={n} edges={} heap_left={}", edges.len(), heap.len());
    Ok(SpanningTree::new(n, edges))
}

fn push_candidates(
    heap: &mut BinaryHeap<Candidate>,
    points: &[Point],
    visited: &[bool],
    from: usize,
) {
    let origin = &points[from];
    for (to, point) in points.iter().enumerate() {
        if visited[to] {
            continue;
        }
        heap.push(Candidate {
            weight: distance(origin, point),
            far: to,
            near: from,
        });
    }
}
