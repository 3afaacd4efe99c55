//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::error::CompareError;
use crate::result::{ComparisonReport, PhaseSummary};

/// Inner width of the result box.
const BOX_WIDTH: usize = 46;

/// The single `<gain>%` line.
pub fn format_gain(report: &ComparisonReport) -> String {
    report.to_string()
}

/// Format a report for human-readable terminal output.
///
/// The gain is green when the candidate is faster, red when slower.
pub fn format_report(title: &str, report: &ComparisonReport) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&title.bold().to_string()));
    output.push_str(&format_box_separator());

    output.push_str(&format_box_line(&format_phase(&report.baseline)));
    output.push_str(&format_box_line(&format_phase(&report.candidate)));
    output.push_str(&format_box_separator());

    let gain = format!("Gain: {}", format_gain(report));
    let gain = match report.percent_gain {
        g if g > 0 => gain.green().bold(),
        g if g < 0 => gain.red().bold(),
        _ => gain.yellow(),
    };
    output.push_str(&format_box_line(&gain.to_string()));
    output.push_str(&format_box_line(&format!("Speedup: {:.3}x", report.speedup())));

    output.push_str(&format_box_bottom());
    output
}

/// Format a failed comparison.
pub fn format_error(title: &str, err: &CompareError) -> String {
    let phase = err
        .phase()
        .map(|p| format!(" [{p}]"))
        .unwrap_or_default();
    format!("{}{}: {}", title.bold(), phase.dimmed(), err.to_string().red())
}

fn format_phase(summary: &PhaseSummary) -> String {
    format!(
        "{:<10} {:>4} trials  mean {:>10.3} ms",
        summary.phase.as_str(),
        summary.trials,
        summary.mean_ns / 1_000_000.0
    )
}

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH + 2))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH + 2))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH + 2))
}

fn format_box_line(content: &str) -> String {
    // Pad on visible width; ANSI escapes take no columns.
    let visible = strip_ansi(content).chars().count();
    let padding = BOX_WIDTH.saturating_sub(visible);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
