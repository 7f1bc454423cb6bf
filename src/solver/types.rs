//! Solve output.

use crate::tour::Tour;
use crate::two_opt::StopReason;

/// Result of a full solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Closed tour: `n + 1` indices, first and last equal.
    pub tour: Tour,

    /// Length of `tour`, evaluated once after the search.
    pub total_length: f64,

    /// Weight of the minimum spanning tree, a lower bound on the optimal
    /// tour length.
    pub tree_weight: f64,

    /// Length of the shortcut tour before 2-opt.
    pub construction_length: f64,

    /// 2-opt passes started, including the final non-improving one.
    /// 0 when refinement is off.
    pub passes: usize,

    /// 2-opt moves applied.
    pub moves: usize,

    /// Why refinement stopped. `None` when 2-opt did not run.
    pub stop_reason: Option<StopReason>,
}

impl Solution {
    /// `total_length / tree_weight`, an upper bound on the ratio to the
    /// optimum. `None` when the tree has zero weight.
    pub fn tree_ratio(&self) -> Option<f64> {
        (self.tree_weight > 0.0).then(|| self.total_length / self.tree_weight)
    }
}
