//! Design course assessment

use crate::assessor::ProgressAssessor;
use crate::error::AssessmentError;

/// Scores are already percentages in `0..=100`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesignProgressAssessor;

impl ProgressAssessor for DesignProgressAssessor {
    fn name(&self) -> &'static str {
        "design"
    }

    fn process_scores(&self, student: &str, scores: &[f64]) -> Result<Vec<f64>, AssessmentError> {
        if let Some(&score) = scores.iter().find(|s| !(0.0..=100.0).contains(*s)) {
            return Err(AssessmentError::OutOfRange {
                student: student.to_string(),
                score,
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(scores.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessor::ProgressData;

    #[test]
    fn percentages_pass_through() {
        let mut data = ProgressData::new();
        data.insert("ann".into(), vec![80.0, 90.0, 100.0]);

        let result = DesignProgressAssessor.assess_progress(&data).unwrap();
        assert_eq!(result["ann"], 90.0);
    }

    #[test]
    fn score_over_hundred_rejected() {
        let mut data = ProgressData::new();
        data.insert("ann".into(), vec![100.5]);

        assert!(matches!(
            DesignProgressAssessor.assess_progress(&data),
            Err(AssessmentError::OutOfRange { .. })
        ));
    }
}
