//! Error types for comparisons.

use std::time::Duration;

use crate::types::Phase;

/// Error raised by a workload during a trial.
pub type WorkloadError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Reasons a comparison can fail.
///
/// Every variant aborts the whole comparison. There is no partial result:
/// a run either produces a [`ComparisonReport`](crate::ComparisonReport)
/// or one of these.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// Trial count was zero. Rejected before any phase runs.
    #[error("trial count must be positive, got {trials}")]
    InvalidTrialCount {
        /// The rejected count.
        trials: usize,
    },

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A workload returned an error. Remaining trials of the phase were skipped.
    #[error("{phase} workload failed on trial {trial}: {source}")]
    WorkloadFailed {
        /// Phase whose workload failed.
        phase: Phase,
        /// 1-based trial number that failed.
        trial: usize,
        /// Error returned by the workload.
        #[source]
        source: WorkloadError,
    },

    /// A phase ran past its wall-clock budget.
    #[error(
        "{phase} phase exceeded its budget of {budget:?} after {trials_completed} trial(s) ({elapsed:?} elapsed)"
    )]
    BudgetExceeded {
        /// Phase that ran over.
        phase: Phase,
        /// Trials finished before the budget check failed.
        trials_completed: usize,
        /// Time spent in the phase so far.
        elapsed: Duration,
        /// Configured budget.
        budget: Duration,
    },

    /// Candidate mean was zero, so the ratio is undefined.
    #[error("gain not computable: candidate mean duration is zero (baseline mean {baseline_mean:?})")]
    GainNotComputable {
        /// Baseline mean, kept for diagnostics.
        baseline_mean: Duration,
    },
}

impl CompareError {
    /// Phase the error is attributed to, if any.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::WorkloadFailed { phase, .. } | Self::BudgetExceeded { phase, .. } => Some(*phase),
            Self::GainNotComputable { .. } => Some(Phase::Candidate),
            Self::InvalidTrialCount { .. } | Self::InvalidConfig(_) => None,
        }
    }
}

/// Result alias used across the crate.
pub type CompareResult<T> = Result<T, CompareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_failure_names_phase_and_trial() {
        let err = CompareError::WorkloadFailed {
            phase: Phase::Candidate,
            trial: 3,
            source: "overflow".into(),
        };
        assert_eq!(err.to_string(), "candidate workload failed on trial 3: overflow");
        assert_eq!(err.phase(), Some(Phase::Candidate));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn not_computable_message() {
        let err = CompareError::GainNotComputable {
            baseline_mean: Duration::from_millis(4),
        };
        assert!(err.to_string().starts_with("gain not computable"));
    }

    #[test]
    fn invalid_trial_count_has_no_phase() {
        let err = CompareError::InvalidTrialCount { trials: 0 };
        assert_eq!(err.phase(), None);
        assert_eq!(err.to_string(), "trial count must be positive, got 0");
    }
}
