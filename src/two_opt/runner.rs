//! 2-opt execution engine.
//!
//! # Algorithm
//!
//! For a closed tour `t` of `n + 1` entries, a move is a position pair
//! `(i, j)` with `1 <= i`, `i + 2 <= j <= n`. It replaces edges
//! `(t[i-1], t[i])` and `(t[j-1], t[j])` with `(t[i-1], t[j-1])` and
//! `(t[i], t[j])` by reversing `t[i..j]`. A move is applied only if the
//! two new edges are strictly shorter than the two old ones.
//!
//! 1. Check the interrupt and the pass limit
//! 2. Scan pairs in `(i, j)` lexicographic order, applying improving moves
//!    per [`ScanStrategy`]
//! 3. If the pass applied no move, the tour is 2-opt optimal: stop
//! 4. Otherwise go to 1

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::config::{ScanStrategy, TwoOptConfig};
use crate::geometry::{distance, Point};
use crate::interrupt::{Interrupt, Trigger};
use crate::tour::Tour;

/// Minimum gain for a move, relative to the length of the two removed
/// edges. Scale-free, and only a few ulps wide so rounding noise cannot
/// produce zero-gain cycles.
const RELATIVE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Why the local search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// A full pass found no improving move.
    LocalOptimum,
    /// `max_passes` was reached.
    PassLimit,
    /// The wall-clock limit passed.
    TimeLimit,
    /// The cancellation flag was set.
    Cancelled,
}

impl From<Trigger> for StopReason {
    fn from(trigger: Trigger) -> Self {
        match trigger {
            Trigger::Cancelled => StopReason::Cancelled,
            Trigger::Deadline => StopReason::TimeLimit,
        }
    }
}

/// Result of a 2-opt run. The tour itself is improved in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoOptResult {
    /// Passes started, including the final non-improving one.
    pub passes: usize,
    /// Improving moves applied.
    pub moves: usize,
    /// Why the run stopped.
    pub stop_reason: StopReason,
}

/// 2-opt local search runner.
pub struct TwoOptRunner;

impl TwoOptRunner {
    /// Improves `tour` in place until it is 2-opt optimal or a configured
    /// limit is hit.
    ///
    /// The tour is never made longer. `tour` must be a closed tour over
    /// `points`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::geometry::Point;
    /// use u_tsp::tour::Tour;
    /// use u_tsp::two_opt::{StopReason, TwoOptConfig, TwoOptRunner};
    ///
    /// let points = [
    ///     Point::new(0.0, 0.0),
    ///     Point::new(0.0, 1.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(1.0, 0.0),
    /// ];
    /// // Crossed square.
    /// let mut tour = Tour::from_order(vec![0, 2, 1, 3]);
    /// let result = TwoOptRunner::run(&points, &mut tour, &TwoOptConfig::default());
    /// assert_eq!(result.stop_reason, StopReason::LocalOptimum);
    /// assert_eq!(tour.length(&points), 4.0);
    /// ```
    pub fn run(points: &[Point], tour: &mut Tour, config: &TwoOptConfig) -> TwoOptResult {
        Self::run_with_cancel(points, tour, config, None)
    }

    /// Runs 2-opt with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search stops
    /// before the next pass and leaves the best tour found so far in place.
    pub fn run_with_cancel(
        points: &[Point],
        tour: &mut Tour,
        config: &TwoOptConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TwoOptResult {
        let interrupt = Interrupt::none()
            .with_cancel(cancel)
            .with_time_limit_ms(config.time_limit_ms);
        Self::run_with_interrupt(points, tour, config, &interrupt)
    }

    pub(crate) fn run_with_interrupt(
        points: &[Point],
        tour: &mut Tour,
        config: &TwoOptConfig,
        interrupt: &Interrupt,
    ) -> TwoOptResult {
        let route = tour.as_mut_slice();
        let mut passes = 0;
        let mut moves = 0;

        let stop_reason = loop {
            if let Some(trigger) = interrupt.check() {
                break StopReason::from(trigger);
            }
            if config.max_passes.is_some_and(|max| passes >= max) {
                break StopReason::PassLimit;
            }

            passes += 1;
            let applied = match config.strategy {
                ScanStrategy::RestartScan => usize::from(first_improvement(points, route)),
                ScanStrategy::Sweep => sweep(points, route),
            };
            if applied == 0 {
                break StopReason::LocalOptimum;
            }
            moves += applied;
        };

        log::debug!("2-opt: passes={passes} moves={moves} stop={stop_reason:?}");
        TwoOptResult {
            passes,
            moves,
            stop_reason,
        }
    }
}

/// Applies the first improving move found, if any.
fn first_improvement(points: &[Point], route: &mut [usize]) -> bool {
    let last = route.len().saturating_sub(1);
    for i in 1..last {
        for j in (i + 2)..=last {
            if improves(points, route, i, j) {
                apply(route, i, j);
                return true;
            }
        }
    }
    false
}

/// Applies every improving move met in one full scan; returns the count.
fn sweep(points: &[Point], route: &mut [usize]) -> usize {
    let last = route.len().saturating_sub(1);
    let mut applied = 0;
    for i in 1..last {
        for j in (i + 2)..=last {
            if improves(points, route, i, j) {
                apply(route, i, j);
                applied += 1;
            }
        }
    }
    applied
}

fn improves(points: &[Point], route: &[usize], i: usize, j: usize) -> bool {
    let a = &points[route[i - 1]];
    let b = &points[route[i]];
    let c = &points[route[j - 1]];
    let d = &points[route[j]];
    let current = distance(a, b) + distance(c, d);
    let reconnected = distance(a, c) + distance(b, d);
    current - reconnected > current * RELATIVE_TOLERANCE
}

fn apply(route: &mut [usize], i: usize, j: usize) {
    log::trace!("2-opt: reverse positions {i}..{j}");
    route[i..j].reverse();
}
