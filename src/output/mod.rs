//! Output formatting for comparison reports.
//!
//! This module provides formatters for displaying a `ComparisonReport` in different formats:
//! - Terminal: the `<gain>%` line, or a colored summary box
//! - JSON: Machine-readable serialization

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty, NamedReport};
pub use terminal::{format_error, format_gain, format_report};
