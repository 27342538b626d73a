//! Grading scheme configuration: the letter scale and exam weights.

/// The eleven letter grades, lowest to highest. Grade levels used in the
/// adjustment arithmetic are indices into this slice.
pub const LETTER_GRADES: [&str; 11] = [
    "F", "D", "D+", "C-", "C", "C+", "B-", "B", "B+", "A-", "A",
];

/// Grade level corresponding to "D+", the ceiling enforced by the cap rule.
pub const MAX_DPLUS_LEVEL: i64 = 2;

/// Immutable grading scheme: the letter scale plus the midterm/final
/// weighting. Built once per invocation (or once per process) and shared by
/// reference; never mutated. `Default` gives the course's fixed scheme.
#[derive(Debug, Clone)]
pub struct GradingConfig {
    /// Ordered letter scale, lowest grade first.
    pub letters: [&'static str; 11],
    /// Weight applied to the midterm score.
    pub midterm_weight: f64,
    /// Weight applied to the final exam score. The two weights sum to 1.0.
    pub final_weight: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        GradingConfig {
            letters: LETTER_GRADES,
            midterm_weight: 0.4,
            final_weight: 0.6,
        }
    }
}

impl GradingConfig {
    /// Returns the letter for a grade level, clamping to the scale bounds.
    pub fn letter(&self, level: i64) -> &'static str {
        let top = self.letters.len() as i64 - 1;
        self.letters[level.clamp(0, top) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let cfg = GradingConfig::default();
        assert_eq!(cfg.midterm_weight + cfg.final_weight, 1.0);
    }

    #[test]
    fn test_letter_clamps_out_of_range_levels() {
        let cfg = GradingConfig::default();
        assert_eq!(cfg.letter(-3), "F");
        assert_eq!(cfg.letter(0), "F");
        assert_eq!(cfg.letter(2), "D+");
        assert_eq!(cfg.letter(10), "A");
        assert_eq!(cfg.letter(25), "A");
    }
}
