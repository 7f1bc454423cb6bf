//! Construction-and-refinement pipeline.
//!
//! points → spanning tree → doubled graph → closed walk → shortcut tour
//! → 2-opt → total length.
//!
//! Every stage runs to completion before the next starts, and all
//! intermediate structures live only for the duration of one call.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use super::config::SolverConfig;
use super::types::Solution;
use crate::error::{Error, Result};
use crate::euler::DoubledGraph;
use crate::geometry::Point;
use crate::interrupt::Interrupt;
use crate::mst::build_mst_interruptible;
use crate::shortcut::shortcut;
use crate::two_opt::TwoOptRunner;

/// Solves Euclidean TSP instances approximately.
///
/// # Usage
///
/// ```
/// use u_tsp::geometry::Point;
/// use u_tsp::solver::{Solver, SolverConfig};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let solution = Solver::solve(&points, &SolverConfig::default())?;
/// assert_eq!(solution.total_length, 4.0);
/// assert_eq!(solution.tour.as_slice().len(), 5);
/// # Ok::<(), u_tsp::Error>(())
/// ```
pub struct Solver;

impl Solver {
    /// Builds a tour over `points` and refines it per `config`.
    ///
    /// One point gives the tour `[0, 0]` of length 0.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if `config` fails validation
    /// - [`Error::EmptyInstance`] if `points` is empty
    pub fn solve(points: &[Point], config: &SolverConfig) -> Result<Solution> {
        Self::solve_with_cancel(points, config, None)
    }

    /// Solves with an optional cancellation token.
    ///
    /// A stop request (flag or `time_limit_ms`) during tree construction
    /// fails with [`Error::Interrupted`]. During 2-opt it ends refinement
    /// and the solve returns the tour reached so far, with
    /// [`Solution::stop_reason`] saying why.
    pub fn solve_with_cancel(
        points: &[Point],
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Solution> {
        config.validate().map_err(Error::invalid_config)?;
        let n = points.len();
        if n == 0 {
            return Err(Error::EmptyInstance);
        }

        let started = Instant::now();
        let interrupt = Interrupt::none()
            .with_cancel(cancel)
            .with_time_limit_ms(config.time_limit_ms);

        let (graph, tree_weight) = {
            let tree = build_mst_interruptible(points, &interrupt).map_err(Error::Interrupted)?;
            (DoubledGraph::from_tree(&tree), tree.total_weight())
        };
        debug_assert!(graph.all_degrees_even());
        log::debug!(
            "construction: tree_weight={tree_weight:.3} doubled_edges={}",
            graph.edge_count()
        );

        let walk = graph.into_closed_walk(0);
        let mut tour = shortcut(&walk, n);
        let construction_length = tour.length(points);
        log::debug!(
            "construction: walk_len={} tour_length={construction_length:.3}",
            walk.len()
        );

        let refinement = config.refine.then(|| {
            let interrupt = interrupt
                .clone()
                .with_time_limit_ms(config.two_opt.time_limit_ms);
            TwoOptRunner::run_with_interrupt(points, &mut tour, &config.two_opt, &interrupt)
        });

        let total_length = tour.length(points);
        log::info!(
            "solve: n={n} length={total_length:.3} construction={construction_length:.3} tree={tree_weight:.3} time={:.3}s",
            started.elapsed().as_secs_f64()
        );

        Ok(Solution {
            tour,
            total_length,
            tree_weight,
            construction_length,
            passes: refinement.map_or(0, |r| r.passes),
            moves: refinement.map_or(0, |r| r.moves),
            stop_reason: refinement.map(|r| r.stop_reason),
        })
    }
}
