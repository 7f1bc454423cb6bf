//! Closed tours and their evaluation.

use crate::geometry::{distance, Point};

/// A closed tour: `n + 1` point indices whose first and last entries match.
///
/// The first `n` entries are a permutation of `0..n`. The 2-opt optimizer
/// rearranges the interior in place; the endpoints never move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wraps an already-closed index sequence.
    pub fn from_closed(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Closes a visiting order by appending its first index.
    ///
    /// An empty order stays empty.
    pub fn from_order(mut order: Vec<usize>) -> Self {
        if let Some(&first) = order.first() {
            order.push(first);
        }
        Self(order)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Visiting order without the closing repeat.
    pub fn order(&self) -> &[usize] {
        match self.0.split_last() {
            Some((_, order)) => order,
            None => &[],
        }
    }

    /// Number of distinct points visited.
    pub fn point_count(&self) -> usize {
        self.order().len()
    }

    /// Total closed length over `points`.
    pub fn length(&self, points: &[Point]) -> f64 {
        path_length(points, &self.0)
    }

    /// True if the tour is closed and visits each of `0..n` exactly once
    /// before the closing repeat.
    pub fn is_hamiltonian(&self, n: usize) -> bool {
        if self.0.len() != n + 1 || self.0.first() != self.0.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &p in self.order() {
            if p >= n || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        true
    }
}

/// Sum of consecutive distances along `path`.
///
/// `path` is walked as given; for a closed tour the closing step is already
/// part of the sequence.
pub fn path_length(points: &[Point], path: &[usize]) -> f64 {
    path.windows(2)
        .map(|w| distance(&points[w[0]], &points[w[1]]))
        .sum()
}
