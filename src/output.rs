//! Output formatting for grade reports.
//!
//! Supports pretty-printing, JSON serialization, and a one-line summary for
//! the interactive session.

use anyhow::Result;
use tracing::debug;

use crate::grading::GradeReport;

/// Logs a grade report using Rust's debug pretty-print format.
pub fn print_pretty(report: &GradeReport) {
    debug!("{:#?}", report);
}

/// Prints a grade report as pretty-printed JSON on stdout.
pub fn print_json(report: &GradeReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// One-line human summary of a grade report.
pub fn format_report(report: &GradeReport) -> String {
    let cap_note = if report.capped { " (capped at D+)" } else { "" };
    format!(
        "{} [baseline {}, pset {:+}, exam {:+}, tasks {:+}]{}",
        report.letter,
        report.baseline.level,
        report.pset_adj.delta,
        report.exam_adj.delta,
        report.task_adj,
        cap_note
    )
}
