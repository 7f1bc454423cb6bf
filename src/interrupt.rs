//! Cooperative stop checks for the unbounded-cost loops.
//!
//! The spanning-tree builder and the 2-opt outer loop poll an [`Interrupt`]
//! between units of work. Nothing is preempted: a stop request takes effect
//! at the next poll.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a polled loop was asked to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The shared cancellation flag was set.
    Cancelled,
    /// The wall-clock deadline passed.
    Deadline,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Cancelled => f.write_str("cancelled"),
            Trigger::Deadline => f.write_str("time limit reached"),
        }
    }
}

/// Optional cancellation flag plus optional deadline.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl Interrupt {
    /// An interrupt that never fires.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, cancel: Option<Arc<AtomicBool>>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Adds a deadline `ms` milliseconds from now, keeping an earlier one
    /// if already set. `None` changes nothing.
    pub fn with_time_limit_ms(self, ms: Option<u64>) -> Self {
        let deadline = ms.map(|ms| Instant::now() + Duration::from_millis(ms));
        self.tighten(deadline)
    }

    /// Keeps the earlier of the current deadline and `deadline`.
    pub fn tighten(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = match (self.deadline, deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the reason to stop, if any. Cancellation wins over the deadline.
    pub fn check(&self) -> Option<Trigger> {
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Some(Trigger::Cancelled);
            }
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(Trigger::Deadline),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_never_fires() {
        assert_eq!(Interrupt::none().check(), None);
    }

    #[test]
    fn test_cancel_flag_fires() {
        let flag = Arc::new(AtomicBool::new(false));
        let interrupt = Interrupt::none().with_cancel(Some(flag.clone()));
        assert_eq!(interrupt.check(), None);
        flag.store(true, Ordering::Relaxed);
        assert_eq!(interrupt.check(), Some(Trigger::Cancelled));
    }

    #[test]
    fn test_expired_deadline_fires() {
        let interrupt = Interrupt::none().tighten(Some(Instant::now()));
        assert_eq!(interrupt.check(), Some(Trigger::Deadline));
    }

    #[test]
    fn test_tighten_keeps_earliest() {
        let now = Instant::now();
        let later = now + Duration::from_secs(60);
        let interrupt = Interrupt::none().tighten(Some(later)).tighten(Some(now));
        assert_eq!(interrupt.deadline(), Some(now));
        let interrupt = interrupt.tighten(None);
        assert_eq!(interrupt.deadline(), Some(now));
    }

    #[test]
    fn test_time_limit_does_not_extend_deadline() {
        let now = Instant::now();
        let interrupt = Interrupt::none()
            .tighten(Some(now))
            .with_time_limit_ms(Some(60_000));
        assert_eq!(interrupt.deadline(), Some(now));
        assert!(Interrupt::none().with_time_limit_ms(None).deadline().is_none());
    }

    #[test]
    fn test_cancel_beats_deadline() {
        let flag = Arc::new(AtomicBool::new(true));
        let interrupt = Interrupt::none()
            .with_cancel(Some(flag))
            .tighten(Some(Instant::now()));
        assert_eq!(interrupt.check(), Some(Trigger::Cancelled));
    }
}
