//! # bitgems
//!
//! Bitwise micro-optimization idioms and a two-phase comparative timer to
//! check whether they pay off.
//!
//! The timer runs a baseline workload for a fixed number of trials, then a
//! candidate workload for the same number of trials, and reports how much
//! faster the candidate was on average:
//!
//! ```text
//! gain = trunc((mean_baseline / mean_candidate - 1) * 100 + 0.5)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use bitgems::SpeedTest;
//!
//! let values: Vec<u32> = (0..50_000).collect();
//! let report = SpeedTest::new().trials(5).compare(
//!     || values.iter().map(|n| n % 8).sum::<u32>(),
//!     || values.iter().map(|n| n & 7).sum::<u32>(),
//! );
//!
//! match report {
//!     Ok(report) => println!("{report}"),
//!     Err(e) => eprintln!("comparison failed: {e}"),
//! }
//! ```
//!
//! ## Idioms
//!
//! The [`gems`] module holds the idiom catalogue. Each entry builds a
//! baseline/candidate workload pair that can be fed straight into
//! [`SpeedTest::compare_workloads`].

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod comparator;
mod config;
mod error;
mod result;
mod types;

// Functional modules
pub mod gems;
pub mod measurement;
pub mod output;

// Re-exports for public API
pub use comparator::{compare, SpeedTest};
pub use config::{Config, BROWSER_REST, DEFAULT_TRIALS};
pub use error::{CompareError, CompareResult, WorkloadError};
pub use measurement::{Clock, ManualClock, MonotonicClock, Workload};
pub use result::{percent_gain, raw_gain, round_gain, ComparisonReport, PhaseSummary};
pub use types::Phase;
