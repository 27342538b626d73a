//! Line parser for the scoring wire format.

use anyhow::{Result, bail};

use crate::grading::{OutcomeCounts, ScoreRecord};

/// Number of comma-separated fields in one record line.
pub const RECORD_FIELDS: usize = 11;

/// Parses one record line into a [`ScoreRecord`].
///
/// The format is eleven comma-separated non-negative integers:
/// `Ep,Sp,Np,Up,Enp,Snp,Nnp,Unp,midterm,final,tasks`. Whitespace around
/// individual fields is tolerated.
///
/// # Errors
///
/// Returns an error if the line does not have exactly eleven fields, or if
/// any field is not a non-negative integer.
pub fn parse_record(line: &str) -> Result<ScoreRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != RECORD_FIELDS {
        bail!(
            "expected {} comma-separated values, got {}",
            RECORD_FIELDS,
            fields.len()
        );
    }

    let mut values = [0u32; RECORD_FIELDS];
    for (i, field) in fields.iter().enumerate() {
        let token = field.trim();
        match token.parse::<u32>() {
            Ok(v) => values[i] = v,
            Err(_) => bail!("value {:?} is not a non-negative integer", token),
        }
    }

    Ok(ScoreRecord {
        proofs: OutcomeCounts::new(values[0], values[1], values[2], values[3]),
        non_proofs: OutcomeCounts::new(values[4], values[5], values[6], values[7]),
        midterm: values[8],
        final_exam: values[9],
        tasks_completed: values[10],
    })
}
