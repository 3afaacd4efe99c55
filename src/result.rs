//! Result types for comparisons.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CompareError, CompareResult};
use crate::types::Phase;

/// Summary of one completed phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseSummary {
    /// Which phase this summarizes.
    pub phase: Phase,
    /// Trials that were run.
    pub trials: usize,
    /// Sum of every trial's duration.
    #[serde(rename = "total_ms", with = "millis")]
    pub total: Duration,
    /// Arithmetic mean of the trial durations, truncated to whole nanoseconds.
    #[serde(rename = "mean_ms", with = "millis")]
    pub mean: Duration,
    /// Exact arithmetic mean in nanoseconds. Gains are computed from this.
    pub mean_ns: f64,
}

impl PhaseSummary {
    /// Build a summary from the accumulated total.
    ///
    /// `trials` must be positive.
    pub fn new(phase: Phase, trials: usize, total: Duration) -> Self {
        debug_assert!(trials > 0);
        let trials_div = trials.max(1);
        let whole_ns = total.as_nanos() / trials_div as u128;
        Self {
            phase,
            trials,
            total,
            mean: Duration::from_nanos(u64::try_from(whole_ns).unwrap_or(u64::MAX)),
            mean_ns: total.as_nanos() as f64 / trials_div as f64,
        }
    }
}

/// Outcome of comparing a candidate against a baseline.
///
/// `Display` renders the single `<gain>%` line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Baseline phase summary.
    pub baseline: PhaseSummary,
    /// Candidate phase summary.
    pub candidate: PhaseSummary,
    /// `(baseline_mean / candidate_mean - 1) * 100`, before rounding.
    pub raw_gain: f64,
    /// Rounded gain in percent. Positive means the candidate is faster.
    pub percent_gain: i64,
}

impl ComparisonReport {
    /// Combine two finished phases into a report.
    ///
    /// Fails with [`CompareError::GainNotComputable`] when the candidate
    /// mean is zero, which only happens when its total is zero.
    pub fn from_summaries(baseline: PhaseSummary, candidate: PhaseSummary) -> CompareResult<Self> {
        let raw_gain = gain_from_nanos(baseline.mean_ns, candidate.mean_ns).ok_or(
            CompareError::GainNotComputable {
                baseline_mean: baseline.mean,
            },
        )?;
        Ok(Self {
            baseline,
            candidate,
            raw_gain,
            percent_gain: round_gain(raw_gain),
        })
    }

    /// Whether the candidate measured faster than the baseline.
    pub fn candidate_faster(&self) -> bool {
        self.candidate.mean_ns < self.baseline.mean_ns
    }

    /// Ratio of baseline mean to candidate mean.
    pub fn speedup(&self) -> f64 {
        self.raw_gain / 100.0 + 1.0
    }
}

impl std::fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent_gain)
    }
}

/// Unrounded gain of `candidate` over `baseline` in percent.
///
/// Returns `None` when `candidate` is zero.
pub fn raw_gain(baseline: Duration, candidate: Duration) -> Option<f64> {
    gain_from_nanos(baseline.as_nanos() as f64, candidate.as_nanos() as f64)
}

fn gain_from_nanos(baseline: f64, candidate: f64) -> Option<f64> {
    if candidate <= 0.0 {
        return None;
    }
    Some((baseline / candidate - 1.0) * 100.0)
}

/// Add one half and truncate toward zero.
///
/// This is "round half up" only for non-negative gains. Negative gains
/// move toward zero instead: -19.5 + 0.5 = -19, but -20.4 + 0.5 = -19.9
/// truncates to -19 as well. Values beyond the `i64` range saturate.
pub fn round_gain(raw: f64) -> i64 {
    (raw + 0.5).trunc() as i64
}

/// Rounded gain of `candidate` over `baseline`, or `None` when not computable.
pub fn percent_gain(baseline: Duration, candidate: Duration) -> Option<i64> {
    raw_gain(baseline, candidate).map(round_gain)
}

/// Serialize `Duration` as fractional milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64() * 1_000.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(d)?;
        Duration::try_from_secs_f64(ms / 1_000.0).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn equal_means_round_to_zero() {
        assert_eq!(percent_gain(ms(7), ms(7)), Some(0));
    }

    #[test]
    fn twice_as_fast_is_one_hundred() {
        assert_eq!(percent_gain(ms(10), ms(5)), Some(100));
    }

    #[test]
    fn slower_candidate_truncates_toward_zero() {
        // (0.8 - 1) * 100 + 0.5 = -19.5 -> -19
        assert_eq!(percent_gain(ms(8), ms(10)), Some(-19));
    }

    #[test]
    fn rounding_offset_edge_values() {
        assert_eq!(round_gain(0.0), 0);
        assert_eq!(round_gain(0.4), 0);
        assert_eq!(round_gain(0.5), 1);
        assert_eq!(round_gain(-0.4), 0);
        assert_eq!(round_gain(-0.6), 0);
        assert_eq!(round_gain(-1.6), -1);
        assert_eq!(round_gain(49.5), 50);
    }

    #[test]
    fn zero_candidate_not_computable() {
        assert_eq!(percent_gain(ms(10), Duration::ZERO), None);
        assert_eq!(percent_gain(Duration::ZERO, Duration::ZERO), None);
    }

    #[test]
    fn zero_baseline_is_minus_one_hundred() {
        // -100 + 0.5 = -99.5 -> -99
        assert_eq!(percent_gain(Duration::ZERO, ms(3)), Some(-99));
    }

    #[test]
    fn summary_mean() {
        let summary = PhaseSummary::new(Phase::Baseline, 10, ms(100));
        assert_eq!(summary.mean, ms(10));
    }

    #[test]
    fn summary_keeps_fractional_mean() {
        let summary = PhaseSummary::new(Phase::Candidate, 10, Duration::from_nanos(5));
        assert_eq!(summary.mean, Duration::ZERO);
        assert!((summary.mean_ns - 0.5).abs() < 1e-12);
    }

    #[test]
    fn gain_uses_exact_means() {
        // 25 ns over 10 trials is 2.5 ns against 1 ns: 150%, not 100%.
        let b = PhaseSummary::new(Phase::Baseline, 10, Duration::from_nanos(25));
        let c = PhaseSummary::new(Phase::Candidate, 10, Duration::from_nanos(10));
        let report = ComparisonReport::from_summaries(b, c).unwrap();
        assert_eq!(report.percent_gain, 150);

        // Sub-nanosecond candidate mean is still computable.
        let b = PhaseSummary::new(Phase::Baseline, 10, Duration::from_nanos(100));
        let c = PhaseSummary::new(Phase::Candidate, 10, Duration::from_nanos(5));
        let report = ComparisonReport::from_summaries(b, c).unwrap();
        assert_eq!(report.percent_gain, 1_900);
        assert!(report.candidate_faster());
    }

    #[test]
    fn report_display_and_errors() {
        let b = PhaseSummary::new(Phase::Baseline, 10, ms(100));
        let c = PhaseSummary::new(Phase::Candidate, 10, ms(50));
        let report = ComparisonReport::from_summaries(b, c).unwrap();
        assert_eq!(report.to_string(), "100%");
        assert!(report.candidate_faster());
        assert!((report.speedup() - 2.0).abs() < 1e-12);

        let zero = PhaseSummary::new(Phase::Candidate, 10, Duration::ZERO);
        assert!(matches!(
            ComparisonReport::from_summaries(b, zero),
            Err(CompareError::GainNotComputable { .. })
        ));
    }
}
