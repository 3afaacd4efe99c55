//! Configuration for a comparison run.

use std::time::Duration;

/// Trial count used when nothing else is configured.
pub const DEFAULT_TRIALS: usize = 10;

/// Pause between trials used by [`Config::browser_like`].
pub const BROWSER_REST: Duration = Duration::from_millis(1);

/// Configuration options for [`SpeedTest`](crate::SpeedTest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of timed invocations per phase.
    ///
    /// The same count is used for baseline and candidate. Zero is rejected
    /// when the comparison starts. Default: 10.
    pub trials: usize,

    /// Sleep inserted between consecutive trials of a phase.
    ///
    /// No pause follows the last trial. Zero runs trials back-to-back on
    /// the calling thread. Default: zero.
    pub trial_pause: Duration,

    /// Optional wall-clock budget per phase.
    ///
    /// Checked after every trial except the last; a phase that runs over
    /// aborts the comparison. Pauses count toward the budget. Default: None.
    pub phase_budget: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            trial_pause: Duration::ZERO,
            phase_budget: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Few trials for fast iteration during development.
    ///
    /// - 3 trials
    /// - 10 second budget per phase
    pub fn quick() -> Self {
        Self {
            trials: 3,
            phase_budget: Some(Duration::from_secs(10)),
            ..Default::default()
        }
    }

    /// Ten trials back-to-back, no budget.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Ten trials with a 1 ms rest after each one.
    pub fn browser_like() -> Self {
        Self {
            trial_pause: BROWSER_REST,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the number of trials per phase.
    ///
    /// Not checked here; a zero count surfaces as
    /// [`CompareError::InvalidTrialCount`](crate::CompareError::InvalidTrialCount).
    pub fn trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    /// Set the pause between trials.
    pub fn trial_pause(mut self, pause: Duration) -> Self {
        self.trial_pause = pause;
        self
    }

    /// Set the per-phase wall-clock budget.
    pub fn phase_budget(mut self, budget: Duration) -> Self {
        assert!(!budget.is_zero(), "phase_budget must be positive");
        self.phase_budget = Some(budget);
        self
    }

    /// Remove the per-phase budget.
    pub fn unbounded(mut self) -> Self {
        self.phase_budget = None;
        self
    }

    /// Check if the configuration is valid.
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.trials == 0 {
            return Err("trials must be positive".to_string());
        }
        if let Some(budget) = self.phase_budget {
            if budget.is_zero() {
                return Err("phase_budget must be positive".to_string());
            }
            if self.trial_pause >= budget {
                return Err("trial_pause must be shorter than phase_budget".to_string());
            }
        }
        Ok(())
    }
}
