//! Common types shared across the timer.

use serde::{Deserialize, Serialize};

/// Which side of a comparison a measurement belongs to.
///
/// The baseline phase always runs to completion before the candidate
/// phase starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Reference workload the candidate is measured against.
    Baseline,
    /// Workload being evaluated.
    Candidate,
}

impl Phase {
    /// Both phases in execution order.
    pub const ORDER: [Phase; 2] = [Phase::Baseline, Phase::Candidate];

    /// Lowercase name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Baseline => "baseline",
            Phase::Candidate => "candidate",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
