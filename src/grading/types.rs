//! Data types used by the grading pipeline.

use serde::{Deserialize, Serialize};

/// Outcome counts for one problem category (proof or non-proof): how many
/// problems received each of the four ESNU marks.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub excellent: u32,
    pub satisfactory: u32,
    pub needs_improvement: u32,
    pub unsatisfactory: u32,
}

impl OutcomeCounts {
    pub fn new(excellent: u32, satisfactory: u32, needs_improvement: u32, unsatisfactory: u32) -> Self {
        OutcomeCounts {
            excellent,
            satisfactory,
            needs_improvement,
            unsatisfactory,
        }
    }

    /// Count of problems marked Excellent or Satisfactory.
    pub fn satisfactory_or_better(&self) -> u32 {
        self.excellent + self.satisfactory
    }
}

/// The full scoring input for one student.
///
/// Exam scores are points out of 100. Scores above 100 or otherwise
/// out-of-domain inputs are not checked here; the grading functions still
/// return a letter but the result is unspecified. Validation belongs to the
/// caller (see [`crate::parser`]).
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub proofs: OutcomeCounts,
    pub non_proofs: OutcomeCounts,
    pub midterm: u32,
    pub final_exam: u32,
    pub tasks_completed: u32,
}

/// Baseline grade implied by proof performance alone, before adjustments.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Baseline {
    /// Grade level on the eleven-letter scale.
    pub level: i64,
    /// True when proof performance alone triggers the "Max D+" cap.
    pub max_dplus: bool,
}

/// An adjustment produced by one of the pset/exam calculators.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Adjustment {
    /// Signed grade-level delta.
    pub delta: i64,
    /// True when this signal triggers the "Max D+" cap.
    pub max_dplus: bool,
}

/// Complete grading result for one student: the final letter plus every
/// intermediate, for reporting and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub letter: String,
    /// Final grade level after capping and clamping, index into the scale.
    pub level: i64,
    pub baseline: Baseline,
    pub pset_adj: Adjustment,
    pub exam_adj: Adjustment,
    pub task_adj: i64,
    /// True when any cap condition fired and the baseline was forced to D+.
    pub capped: bool,
}
