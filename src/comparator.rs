//! Main `SpeedTest` entry point and builder.

use std::time::Duration;

use crate::config::Config;
use crate::error::{CompareError, CompareResult};
use crate::measurement::{from_fn, try_from_fn, Clock, Collector, MonotonicClock, Workload};
use crate::result::ComparisonReport;
use crate::types::Phase;

/// Two-phase comparative timer.
///
/// The baseline runs for every trial first, then the candidate runs for the
/// same number of trials. The report holds both means and the percentage
/// gain of the candidate over the baseline.
///
/// # Example
///
/// ```
/// use bitgems::SpeedTest;
///
/// let report = SpeedTest::new()
///     .trials(5)
///     .compare(
///         || (0..10_000u32).map(|n| n * 64).sum::<u32>(),
///         || (0..10_000u32).map(|n| n << 6).sum::<u32>(),
///     );
///
/// match report {
///     Ok(report) => println!("{report}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpeedTest<C = MonotonicClock> {
    config: Config,
    clock: C,
}

impl Default for SpeedTest {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeedTest {
    /// Create with default configuration (10 trials, no pause, no budget).
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create with the [`Config::quick`] preset.
    pub fn quick() -> Self {
        Self::with_config(Config::quick())
    }

    /// Create with the [`Config::browser_like`] preset.
    pub fn browser_like() -> Self {
        Self::with_config(Config::browser_like())
    }

    /// Create with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            clock: MonotonicClock::new(),
        }
    }
}

impl<C: Clock> SpeedTest<C> {
    /// Replace the time source.
    pub fn with_clock<D: Clock>(self, clock: D) -> SpeedTest<D> {
        SpeedTest {
            config: self.config,
            clock,
        }
    }

    /// Set trials per phase.
    pub fn trials(mut self, n: usize) -> Self {
        self.config = self.config.trials(n);
        self
    }

    /// Set the pause between trials.
    pub fn trial_pause(mut self, pause: Duration) -> Self {
        self.config = self.config.trial_pause(pause);
        self
    }

    /// Set the per-phase budget.
    pub fn phase_budget(mut self, budget: Duration) -> Self {
        self.config = self.config.phase_budget(budget);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compare two infallible closures.
    pub fn compare<B, K, T, U>(&self, baseline: B, candidate: K) -> CompareResult<ComparisonReport>
    where
        B: FnMut() -> T,
        K: FnMut() -> U,
    {
        self.compare_workloads(&mut from_fn(baseline), &mut from_fn(candidate))
    }

    /// Compare two fallible closures.
    ///
    /// The first `Err` aborts the comparison with
    /// [`CompareError::WorkloadFailed`].
    pub fn try_compare<B, K, T, U, E1, E2>(
        &self,
        baseline: B,
        candidate: K,
    ) -> CompareResult<ComparisonReport>
    where
        B: FnMut() -> Result<T, E1>,
        K: FnMut() -> Result<U, E2>,
        E1: Into<crate::error::WorkloadError>,
        E2: Into<crate::error::WorkloadError>,
    {
        self.compare_workloads(&mut try_from_fn(baseline), &mut try_from_fn(candidate))
    }

    /// Compare two workloads.
    ///
    /// Runs all baseline trials, then all candidate trials, then computes
    /// the gain. Nothing runs if the trial count is zero.
    pub fn compare_workloads<B, K>(
        &self,
        baseline: &mut B,
        candidate: &mut K,
    ) -> CompareResult<ComparisonReport>
    where
        B: Workload + ?Sized,
        K: Workload + ?Sized,
    {
        if self.config.trials == 0 {
            return Err(CompareError::InvalidTrialCount {
                trials: self.config.trials,
            });
        }
        self.config.validate().map_err(CompareError::InvalidConfig)?;

        let collector = Collector::from_config(&self.clock, &self.config);

        let baseline = collector.run_trials(Phase::Baseline, baseline)?;
        let candidate = collector.run_trials(Phase::Candidate, candidate)?;
        let report = ComparisonReport::from_summaries(baseline, candidate)?;

        tracing::info!(
            gain = report.percent_gain,
            baseline_mean = ?report.baseline.mean,
            candidate_mean = ?report.candidate.mean,
            "comparison complete"
        );
        Ok(report)
    }
}

/// Compare two closures with `trials` trials per phase on the wall clock.
pub fn compare<B, K, T, U>(baseline: B, candidate: K, trials: usize) -> CompareResult<ComparisonReport>
where
    B: FnMut() -> T,
    K: FnMut() -> U,
{
    SpeedTest::new().trials(trials).compare(baseline, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::ManualClock;

    #[test]
    fn builder_forwards_to_config() {
        let test = SpeedTest::new()
            .trials(4)
            .trial_pause(Duration::from_millis(1))
            .phase_budget(Duration::from_secs(2));
        assert_eq!(test.config().trials, 4);
        assert_eq!(test.config().trial_pause, Duration::from_millis(1));
        assert_eq!(test.config().phase_budget, Some(Duration::from_secs(2)));
    }

    #[test]
    fn presets() {
        assert_eq!(SpeedTest::quick().config(), &Config::quick());
        assert_eq!(SpeedTest::browser_like().config(), &Config::browser_like());
        assert_eq!(SpeedTest::default().config().trials, 10);
    }

    #[test]
    fn scripted_comparison() {
        let clock = ManualClock::new();
        let (b, c) = (clock.clone(), clock.clone());
        let report = SpeedTest::new()
            .with_clock(clock)
            .compare(
                || b.advance(Duration::from_millis(12)),
                || c.advance(Duration::from_millis(4)),
            )
            .unwrap();
        // 12 / 4 = 3 -> 200%
        assert_eq!(report.percent_gain, 200);
        assert_eq!(report.baseline.trials, 10);
        assert_eq!(report.candidate.trials, 10);
    }

    #[test]
    fn invalid_config_rejected_before_running() {
        let mut ran = false;
        let result = SpeedTest::new()
            .trial_pause(Duration::from_secs(5))
            .phase_budget(Duration::from_secs(1))
            .compare(|| ran = true, || ());
        assert!(matches!(result, Err(CompareError::InvalidConfig(_))));
        assert!(!ran);
    }
}
