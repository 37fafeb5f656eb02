//! Science course assessment

use crate::assessor::ProgressAssessor;
use crate::error::AssessmentError;

/// Points a single science task can award
pub const SCIENCE_MAX_SCORE_PER_TASK: f64 = 10.0;

/// Scores are task points; anything above the per-task maximum is capped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScienceProgressAssessor;

impl ProgressAssessor for ScienceProgressAssessor {
    fn name(&self) -> &'static str {
        "science"
    }

    fn process_scores(&self, student: &str, scores: &[f64]) -> Result<Vec<f64>, AssessmentError> {
        scores
            .iter()
            .map(|&score| {
                if score < 0.0 {
                    return Err(AssessmentError::NegativeScore {
                        student: student.to_string(),
                        score,
                    });
                }
                Ok(score.min(SCIENCE_MAX_SCORE_PER_TASK) / SCIENCE_MAX_SCORE_PER_TASK * 100.0)
            })
            .collect()
    }
}
