//! Full solve: spanning-tree construction followed by 2-opt refinement.
//!
//! The construction is the classical tree-doubling 2-approximation: the
//! shortcut tour is at most twice the spanning-tree weight, and the tree
//! weight is at most the optimal tour length. 2-opt never lengthens it.
//!
//! # References
//!
//! - Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//!   several heuristics for the traveling salesman problem",
//!   *SIAM Journal on Computing* 6(3), 563-581.

mod config;
mod runner;
mod types;

pub use config::SolverConfig;
pub use runner::Solver;
pub use types::Solution;
