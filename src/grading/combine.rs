use crate::grading::config::{GradingConfig, MAX_DPLUS_LEVEL};
use crate::grading::types::{Adjustment, Baseline, GradeReport};

/// Combines the baseline and the three adjustments into the final grade.
///
/// If any calculator raised the "Max D+" flag, the baseline is forced down
/// to D+ and only non-positive adjustments still count: positive deltas are
/// discarded, negative ones keep pulling the grade down. The result is then
/// clamped to the scale (no worse than F, no better than A) and mapped to
/// its letter.
pub fn combine(
    config: &GradingConfig,
    baseline: Baseline,
    pset_adj: Adjustment,
    exam_adj: Adjustment,
    task_adj: i64,
) -> GradeReport {
    let mut total_adj = pset_adj.delta + exam_adj.delta + task_adj;

    let capped = baseline.max_dplus || pset_adj.max_dplus || exam_adj.max_dplus;
    let corrected_baseline = if capped {
        total_adj = total_adj.min(0);
        MAX_DPLUS_LEVEL
    } else {
        baseline.level
    };

    let top = config.letters.len() as i64 - 1;
    let level = (corrected_baseline + total_adj).clamp(0, top);

    GradeReport {
        letter: config.letter(level).to_string(),
        level,
        baseline,
        pset_adj,
        exam_adj,
        task_adj,
        capped,
    }
}
