use crate::grading::config::MAX_DPLUS_LEVEL;
use crate::grading::types::{Baseline, OutcomeCounts};

/// Maps proof-problem outcomes to the baseline grade level.
///
/// `SE` is the count of proofs marked Excellent or Satisfactory.
///
/// | SE      | level  | max_dplus |
/// |---------|--------|-----------|
/// | < 6     | 2 (D+) | true      |
/// | 6–7     | 2 (D+) | false     |
/// | 8–9     | 3 (C-) | false     |
/// | 10–11   | 4 (C)  | false     |
/// | 12–13   | 5 (C+) | false     |
/// | 14–15   | 6 (B-) | false     |
/// | >= 16   | 7 (B)  | false     |
pub fn baseline_grade(proofs: &OutcomeCounts) -> Baseline {
    let se = proofs.satisfactory_or_better();

    if se < 6 {
        return Baseline {
            level: MAX_DPLUS_LEVEL,
            max_dplus: true,
        };
    }

    let level = match se {
        6..=7 => 2,
        8..=9 => 3,
        10..=11 => 4,
        12..=13 => 5,
        14..=15 => 6,
        _ => 7,
    };

    Baseline {
        level,
        max_dplus: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proofs_with_se(se: u32) -> OutcomeCounts {
        // Split across E and S where possible; only the sum matters.
        OutcomeCounts::new(se / 2, se - se / 2, 0, 0)
    }

    #[test]
    fn test_baseline_boundaries() {
        let cases = [
            (0, 2, true),
            (5, 2, true),
            (6, 2, false),
            (7, 2, false),
            (8, 3, false),
            (9, 3, false),
            (10, 4, false),
            (11, 4, false),
            (12, 5, false),
            (13, 5, false),
            (14, 6, false),
            (15, 6, false),
            (16, 7, false),
            (40, 7, false),
        ];

        for (se, level, max_dplus) in cases {
            let b = baseline_grade(&proofs_with_se(se));
            assert_eq!(b.level, level, "SE={}", se);
            assert_eq!(b.max_dplus, max_dplus, "SE={}", se);
        }
    }

    #[test]
    fn test_baseline_monotone_in_se() {
        let mut prev = baseline_grade(&proofs_with_se(0)).level;
        for se in 1..30 {
            let level = baseline_grade(&proofs_with_se(se)).level;
            assert!(level >= prev, "level dropped at SE={}", se);
            prev = level;
        }
    }

    #[test]
    fn test_baseline_ignores_n_and_u_counts() {
        let plain = OutcomeCounts::new(4, 4, 0, 0);
        let noisy = OutcomeCounts::new(4, 4, 9, 9);
        let a = baseline_grade(&plain);
        let b = baseline_grade(&noisy);
        assert_eq!(a.level, b.level);
        assert_eq!(a.max_dplus, b.max_dplus);
    }
}
