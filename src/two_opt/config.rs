//! 2-opt configuration.

/// Order in which the pair scan resumes after an improving move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanStrategy {
    /// First improvement: apply the move and restart the scan at the
    /// first pair. Each improving move ends a pass.
    #[default]
    RestartScan,

    /// Apply the move and keep scanning the remaining pairs of the same
    /// pass. Passes repeat while any pass improved.
    Sweep,
}

/// Configuration for the 2-opt local search.
///
/// The default runs to a 2-opt local optimum with no bound on passes or
/// time.
///
/// # Examples
///
/// ```
/// use u_tsp::two_opt::{ScanStrategy, TwoOptConfig};
///
/// let config = TwoOptConfig::default()
///     .with_strategy(ScanStrategy::Sweep)
///     .with_max_passes(10_000)
///     .with_time_limit_ms(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoOptConfig {
    /// Pair scan order.
    pub strategy: ScanStrategy,

    /// Maximum number of passes. `None` = no limit.
    pub max_passes: Option<usize>,

    /// Optional wall-clock limit in milliseconds, checked before each pass.
    ///
    /// A pass already under way finishes, so the actual runtime may exceed
    /// the limit by up to one pass (O(n²) distance evaluations).
    pub time_limit_ms: Option<u64>,
}

impl TwoOptConfig {
    pub fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = Some(n);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_passes == Some(0) {
            return Err("max_passes must be positive or None".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
