//! Programming course assessment

use crate::assessor::ProgressAssessor;
use crate::error::AssessmentError;

/// Scores are completed fractions in `0..=1`, reported as percentages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgrammingProgressAssessor;

impl ProgressAssessor for ProgrammingProgressAssessor {
    fn name(&self) -> &'static str {
        "programming"
    }

    fn process_scores(&self, student: &str, scores: &[f64]) -> Result<Vec<f64>, AssessmentError> {
        scores
            .iter()
            .map(|&score| {
                if (0.0..=1.0).contains(&score) {
                    Ok(score * 100.0)
                } else {
                    Err(AssessmentError::OutOfRange {
                        student: student.to_string(),
                        score,
                        min: 0.0,
                        max: 1.0,
                    })
                }
            })
            .collect()
    }
}
