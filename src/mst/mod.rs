//! Minimum spanning tree over the complete Euclidean graph.
//!
//! Built with Prim's algorithm on a binary heap with lazy deletion:
//! candidate edges whose far endpoint is already in the tree are simply
//! skipped when popped. The graph is complete, so the heap holds O(n²)
//! entries in the worst case and the build costs O(n² log n).
//!
//! # References
//!
//! - Prim, R.C. (1957). "Shortest connection networks and some generalizations",
//!   *Bell System Technical Journal* 36(6), 1389-1401.

mod prim;
mod types;

pub use prim::{build_mst, build_mst_interruptible};
pub use types::{Edge, SpanningTree};
