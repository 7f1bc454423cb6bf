//! Approximate Euclidean Traveling Salesman solver.
//!
//! Given points in the plane, builds a short closed tour through all of
//! them in two phases:
//!
//! - **Construction**: a minimum spanning tree ([`mst`], Prim's algorithm)
//!   is doubled into an even-degree multigraph, walked as an Eulerian
//!   circuit ([`euler`]), and shortcut to a Hamiltonian cycle
//!   ([`shortcut`]). This is the classical tree-doubling 2-approximation.
//! - **Refinement**: 2-opt local search ([`two_opt`]) reverses tour
//!   segments while doing so shortens the tour.
//!
//! [`solver::Solver`] runs the whole pipeline. The stages are also public
//! for benchmarking them separately.
//!
//! # Example
//!
//! ```
//! use u_tsp::geometry::Point;
//! use u_tsp::solver::{Solver, SolverConfig};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
//! let solution = Solver::solve(&points, &SolverConfig::default())?;
//! assert_eq!(solution.total_length, 4.0);
//! # Ok::<(), u_tsp::Error>(())
//! ```
//!
//! # Architecture
//!
//! Everything runs single-threaded and synchronously inside one solve call;
//! nothing is cached between calls. The spanning-tree build and each 2-opt
//! pass are O(n²), which limits practical instances to a few thousand
//! points. [`interrupt`] provides the cooperative cancellation and time
//! limits for those two loops.

pub mod error;
pub mod euler;
pub mod geometry;
pub mod instance;
pub mod interrupt;
pub mod io;
pub mod logging;
pub mod mst;
pub mod shortcut;
pub mod solver;
pub mod tour;
pub mod two_opt;

pub use error::{Error, Result};
