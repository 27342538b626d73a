use crate::grading::types::{Adjustment, OutcomeCounts};

/// Computes the pset adjustment from proof and non-proof outcomes.
///
/// Three independent signals accumulate into the delta:
///
/// 1. Excellent proofs (`E`): +0 (< 4), +1 (4–7), +2 (8–11), +3 (>= 12).
/// 2. Excellent-or-Satisfactory non-proofs (`SE`): -1 (< 6), 0 (6–9),
///    +1 (>= 10).
/// 3. Unsatisfactory marks across both categories (`U`): 0 (< 4),
///    -1 (4–6), -2 (7–9). At `U >= 10` the cap flag is set instead and no
///    numeric penalty applies; the cap and the penalty are mutually
///    exclusive.
pub fn pset_adjustment(proofs: &OutcomeCounts, non_proofs: &OutcomeCounts) -> Adjustment {
    let e_proofs = proofs.excellent;
    let se_non_proofs = non_proofs.satisfactory_or_better();
    let u_all = proofs.unsatisfactory + non_proofs.unsatisfactory;

    let mut delta: i64 = 0;
    let mut max_dplus = false;

    delta += match e_proofs {
        0..=3 => 0,
        4..=7 => 1,
        8..=11 => 2,
        _ => 3,
    };

    if se_non_proofs < 6 {
        delta -= 1;
    } else if se_non_proofs >= 10 {
        delta += 1;
    }

    match u_all {
        0..=3 => {}
        4..=6 => delta -= 1,
        7..=9 => delta -= 2,
        _ => max_dplus = true,
    }

    Adjustment { delta, max_dplus }
}
