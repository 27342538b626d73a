use crate::grading::config::GradingConfig;
use crate::grading::types::Adjustment;

/// Computes the exam adjustment from the midterm and final scores.
///
/// The weighted score is `ceil(midterm_weight * midterm + final_weight *
/// final_exam)`. Rounding is always up, in the student's favor.
///
/// | weighted | delta | max_dplus |
/// |----------|-------|-----------|
/// | < 35     | 0     | true      |
/// | 35–49    | -2    | false     |
/// | 50–64    | -1    | false     |
/// | 65–74    | 0     | false     |
/// | 75–89    | +1    | false     |
/// | >= 90    | +2    | false     |
pub fn exam_adjustment(config: &GradingConfig, midterm: u32, final_exam: u32) -> Adjustment {
    let weighted = weighted_score(config, midterm, final_exam);

    if weighted < 35 {
        return Adjustment {
            delta: 0,
            max_dplus: true,
        };
    }

    let delta = match weighted {
        35..=49 => -2,
        50..=64 => -1,
        65..=74 => 0,
        75..=89 => 1,
        _ => 2,
    };

    Adjustment {
        delta,
        max_dplus: false,
    }
}

/// Weighted exam score, rounded up to the nearest integer.
pub fn weighted_score(config: &GradingConfig, midterm: u32, final_exam: u32) -> i64 {
    let weighted =
        config.midterm_weight * f64::from(midterm) + config.final_weight * f64::from(final_exam);
    weighted.ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adj(midterm: u32, final_exam: u32) -> Adjustment {
        exam_adjustment(&GradingConfig::default(), midterm, final_exam)
    }

    #[test]
    fn test_weighted_score_rounds_up() {
        let cfg = GradingConfig::default();
        // 0.4 * 51 + 0.6 * 51 = 51 exactly; no rounding.
        assert_eq!(weighted_score(&cfg, 51, 51), 51);
        // 0.4 * 51 + 0.6 * 50 = 50.4, rounds up to 51.
        assert_eq!(weighted_score(&cfg, 51, 50), 51);
        // 0.4 * 50 + 0.6 * 51 = 50.6, rounds up to 51.
        assert_eq!(weighted_score(&cfg, 50, 51), 51);
        assert_eq!(weighted_score(&cfg, 0, 0), 0);
        assert_eq!(weighted_score(&cfg, 100, 100), 100);
    }

    #[test]
    fn test_adjustment_boundaries() {
        // Equal midterm/final makes the weighted score equal to both.
        let cases = [
            (0, 0, true),
            (34, 0, true),
            (35, -2, false),
            (49, -2, false),
            (50, -1, false),
            (64, -1, false),
            (65, 0, false),
            (74, 0, false),
            (75, 1, false),
            (89, 1, false),
            (90, 2, false),
            (100, 2, false),
        ];

        for (score, delta, max_dplus) in cases {
            let a = adj(score, score);
            assert_eq!(a.delta, delta, "weighted={}", score);
            assert_eq!(a.max_dplus, max_dplus, "weighted={}", score);
        }
    }

    #[test]
    fn test_rounding_can_clear_the_cap() {
        // 0.4 * 35 + 0.6 * 34 = 34.4; ceiling lands on 35, just above the
        // cap threshold.
        let a = adj(35, 34);
        assert!(!a.max_dplus);
        assert_eq!(a.delta, -2);
    }

    #[test]
    fn test_adjustment_monotone_in_each_score() {
        for base in [20u32, 45, 60, 70, 85] {
            let lo = adj(base, base).delta;
            let hi_mid = adj(base + 10, base).delta;
            let hi_fin = adj(base, base + 10).delta;
            assert!(hi_mid >= lo);
            assert!(hi_fin >= lo);
        }
    }
}
