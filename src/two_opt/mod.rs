//! 2-opt local search.
//!
//! Deterministic hill climbing on a closed tour: remove two edges, reconnect
//! by reversing the segment between them, and keep the move only if the
//! tour gets strictly shorter. Stops at a 2-opt local optimum, where no
//! single reversal improves the tour. No restarts, no acceptance of
//! worsening moves.
//!
//! Each pass is O(n²). The number of passes has no useful worst-case bound,
//! so [`TwoOptConfig`] offers optional pass and time limits.
//!
//! # References
//!
//! - Croes, G.A. (1958). "A method for solving traveling-salesman problems",
//!   *Operations Research* 6(6), 791-812.

mod config;
mod runner;

pub use config::{ScanStrategy, TwoOptConfig};
pub use runner::{StopReason, TwoOptResult, TwoOptRunner};
