//! Trial collection for a single phase.
//!
//! Each trial is timed on its own: a timestamp right before the workload
//! runs, another right after, and the difference is the sample. Samples of
//! a phase are summed and divided by the trial count once every trial has
//! completed. A failing trial aborts the phase without producing a mean.

use std::time::Duration;

use crate::config::Config;
use crate::error::{CompareError, CompareResult, WorkloadError};
use crate::result::PhaseSummary;
use crate::types::Phase;

use super::clock::{Clock, MonotonicClock};
use super::workload::Workload;

/// Runs the trials of one phase against a clock.
#[derive(Debug, Clone)]
pub struct Collector<C = MonotonicClock> {
    clock: C,
    trials: usize,
    trial_pause: Duration,
    phase_budget: Option<Duration>,
}

impl Collector<MonotonicClock> {
    /// Create a collector on the wall clock.
    pub fn new(trials: usize) -> Self {
        Self::with_clock(MonotonicClock::new(), trials)
    }
}

impl<C: Clock> Collector<C> {
    /// Create a collector reading the given clock.
    pub fn with_clock(clock: C, trials: usize) -> Self {
        Self {
            clock,
            trials,
            trial_pause: Duration::ZERO,
            phase_budget: None,
        }
    }

    /// Create a collector from a full configuration.
    pub fn from_config(clock: C, config: &Config) -> Self {
        Self {
            clock,
            trials: config.trials,
            trial_pause: config.trial_pause,
            phase_budget: config.phase_budget,
        }
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Trials per phase.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Time exactly one invocation of `workload`.
    #[inline]
    pub fn measure_once<W>(&self, workload: &mut W) -> Result<Duration, WorkloadError>
    where
        W: Workload + ?Sized,
    {
        let start = self.clock.now();
        workload.run()?;
        let end = self.clock.now();
        Ok(end.saturating_sub(start))
    }

    /// Run every trial of `phase` and summarize.
    ///
    /// Trials run strictly one after another. The optional pause is slept
    /// between trials, not after the last one.
    pub fn run_trials<W>(&self, phase: Phase, workload: &mut W) -> CompareResult<PhaseSummary>
    where
        W: Workload + ?Sized,
    {
        if self.trials == 0 {
            return Err(CompareError::InvalidTrialCount { trials: 0 });
        }

        tracing::debug!(%phase, trials = self.trials, clock = self.clock.name(), "phase started");

        let phase_start = self.clock.now();
        let mut total = Duration::ZERO;

        for trial in 1..=self.trials {
            let sample = self
                .measure_once(workload)
                .map_err(|source| CompareError::WorkloadFailed {
                    phase,
                    trial,
                    source,
                })?;
            total = total.saturating_add(sample);

            let sample_ns = u64::try_from(sample.as_nanos()).unwrap_or(u64::MAX);
            tracing::trace!(%phase, trial, sample_ns, "trial complete");

            if trial == self.trials {
                break;
            }

            if !self.trial_pause.is_zero() {
                self.clock.sleep(self.trial_pause);
            }

            if let Some(budget) = self.phase_budget {
                let elapsed = self.clock.now().saturating_sub(phase_start);
                if elapsed > budget {
                    tracing::warn!(%phase, trial, ?elapsed, ?budget, "phase budget exceeded");
                    return Err(CompareError::BudgetExceeded {
                        phase,
                        trials_completed: trial,
                        elapsed,
                        budget,
                    });
                }
            }
        }

        let summary = PhaseSummary::new(phase, self.trials, total);
        tracing::debug!(%phase, mean = ?summary.mean, "phase finished");
        Ok(summary)
    }
}

/// Time one invocation of `workload` on the wall clock.
pub fn measure_once<W: Workload + ?Sized>(workload: &mut W) -> Result<Duration, WorkloadError> {
    Collector::new(1).measure_once(workload)
}

/// Mean wall-clock duration of `trials` sequential invocations of `workload`.
///
/// Errors from the workload are attributed to the baseline phase.
pub fn run_trials<W: Workload + ?Sized>(workload: &mut W, trials: usize) -> CompareResult<Duration> {
    Collector::new(trials)
        .run_trials(Phase::Baseline, workload)
        .map(|summary| summary.mean)
}
