//! JSON serialization for comparison reports.

use serde::Serialize;

use crate::result::ComparisonReport;

/// A report tagged with the name of what was compared.
#[derive(Debug, Serialize)]
pub struct NamedReport<'a> {
    /// Name of the comparison, e.g. a gem name.
    pub name: &'a str,
    /// The report itself.
    #[serde(flatten)]
    pub report: &'a ComparisonReport,
}

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for reports).
pub fn to_json(name: &str, report: &ComparisonReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(&NamedReport { name, report })
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for reports).
pub fn to_json_pretty(name: &str, report: &ComparisonReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&NamedReport { name, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::PhaseSummary;
    use crate::types::Phase;
    use std::time::Duration;

    fn make_report() -> ComparisonReport {
        ComparisonReport::from_summaries(
            PhaseSummary::new(Phase::Baseline, 10, Duration::from_millis(100)),
            PhaseSummary::new(Phase::Candidate, 10, Duration::from_millis(50)),
        )
        .unwrap()
    }

    #[test]
    fn test_json_fields() {
        let json = to_json("even", &make_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "even");
        assert_eq!(value["percent_gain"], 100);
        assert_eq!(value["baseline"]["phase"], "baseline");
        assert_eq!(value["baseline"]["trials"], 10);
        assert_eq!(value["baseline"]["mean_ms"], 10.0);
        assert_eq!(value["candidate"]["mean_ms"], 5.0);
    }

    #[test]
    fn test_pretty_json_reads_back() {
        let report = make_report();
        let json = to_json_pretty("even", &report).unwrap();
        assert!(json.contains('\n'));

        let back: ComparisonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.percent_gain, report.percent_gain);
        assert_eq!(back.candidate.mean, report.candidate.mean);
    }
}
