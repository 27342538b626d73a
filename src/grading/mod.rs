//! ESNU grade computation.
//!
//! Four independent calculators read the same [`ScoreRecord`]: the baseline
//! grade from proof outcomes, plus adjustments from pset outcomes, exam
//! scores, and completed tasks. [`combine`](combine::combine) applies the
//! "Max D+" cap rule, clamps to the eleven-letter scale, and produces the
//! final letter. Every function here is pure; the only shared value is the
//! read-only [`GradingConfig`].

pub mod baseline;
pub mod combine;
pub mod config;
pub mod exam;
pub mod pset;
pub mod tasks;
pub mod types;

pub use config::GradingConfig;
pub use types::{Adjustment, Baseline, GradeReport, OutcomeCounts, ScoreRecord};

/// Grades one student record: runs the four calculators and combines their
/// results into a [`GradeReport`].
pub fn grade_record(config: &GradingConfig, record: &ScoreRecord) -> GradeReport {
    let baseline = baseline::baseline_grade(&record.proofs);
    let pset_adj = pset::pset_adjustment(&record.proofs, &record.non_proofs);
    let exam_adj = exam::exam_adjustment(config, record.midterm, record.final_exam);
    let task_adj = tasks::task_adjustment(record.tasks_completed);

    combine::combine(config, baseline, pset_adj, exam_adj, task_adj)
}

/// Grades one student record and returns just the letter.
pub fn grade_letter(config: &GradingConfig, record: &ScoreRecord) -> String {
    grade_record(config, record).letter
}
