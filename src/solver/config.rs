//! Solver configuration.

use crate::two_opt::TwoOptConfig;

/// Configuration for a full solve.
///
/// # Examples
///
/// ```
/// use u_tsp::solver::SolverConfig;
/// use u_tsp::two_opt::TwoOptConfig;
///
/// let config = SolverConfig::default()
///     .with_time_limit_ms(2_000)
///     .with_two_opt(TwoOptConfig::default().with_max_passes(50_000));
/// assert!(config.refine);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Run 2-opt after construction. `false` returns the spanning-tree
    /// shortcut tour as is.
    pub refine: bool,

    /// 2-opt settings.
    pub two_opt: TwoOptConfig,

    /// Optional wall-clock limit in milliseconds for the whole solve.
    ///
    /// Hitting it during tree construction fails the solve; hitting it
    /// during 2-opt returns the tour reached so far.
    pub time_limit_ms: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            refine: true,
            two_opt: TwoOptConfig::default(),
            time_limit_ms: None,
        }
    }
}

impl SolverConfig {
    pub fn with_refine(mut self, refine: bool) -> Self {
        self.refine = refine;
        self
    }

    pub fn with_two_opt(mut self, two_opt: TwoOptConfig) -> Self {
        self.two_opt = two_opt;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        self.two_opt
            .validate()
            .map_err(|e| format!("two_opt: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert!(config.refine);
        assert!(config.time_limit_ms.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        assert!(SolverConfig::default()
            .with_time_limit_ms(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_nested_two_opt() {
        let config =
            SolverConfig::default().with_two_opt(TwoOptConfig::default().with_max_passes(0));
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("two_opt:"), "unexpected message: {err}");
    }
}
