//! Assessment pipeline trait

use crate::error::AssessmentError;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Raw scores keyed by student identifier
pub type ProgressData = BTreeMap<String, Vec<f64>>;

/// Completion percentage (0-100) keyed by student identifier
pub type Assessment = BTreeMap<String, f64>;

/// Progress assessment strategy for one course kind
///
/// Implementors provide [`process_scores`](Self::process_scores) and may
/// override [`finalize`](Self::finalize); the pipeline itself lives in the
/// provided [`assess_progress`](Self::assess_progress) and should not be
/// overridden.
pub trait ProgressAssessor: Send + Sync + Debug {
    /// Strategy name (for logging)
    fn name(&self) -> &'static str;

    /// Normalise one student's raw scores to the 0-100 scale
    ///
    /// Called only with data that passed [`validate_progress_data`], so
    /// scores are finite and non-negative and the slice is non-empty.
    ///
    /// # Errors
    /// Returns [`AssessmentError::OutOfRange`] if a score is outside what
    /// this course kind accepts.
    fn process_scores(&self, student: &str, scores: &[f64]) -> Result<Vec<f64>, AssessmentError>;

    /// Post-process the per-student averages
    ///
    /// Identity by default.
    fn finalize(&self, averages: Assessment) -> Assessment {
        averages
    }

    /// Run the full pipeline: validate, normalise, average, finalise
    ///
    /// # Errors
    /// Returns [`AssessmentError`] if the input is empty, a student has no
    /// scores, or any score is negative, non-finite or out of range.
    fn assess_progress(&self, data: &ProgressData) -> Result<Assessment, AssessmentError> {
        validate_progress_data(data)?;

        let processed = data
            .iter()
            .map(|(student, scores)| Ok((student.clone(), self.process_scores(student, scores)?)))
            .collect::<Result<ProgressData, AssessmentError>>()?;

        let averages = student_averages(&processed);
        tracing::debug!(
            assessor = self.name(),
            students = averages.len(),
            "progress assessed"
        );
        Ok(self.finalize(averages))
    }
}

/// Shared input checks for every assessor
///
/// # Errors
/// - [`AssessmentError::Empty`] for an empty mapping
/// - [`AssessmentError::NoScores`] if a student has no scores
/// - [`AssessmentError::NonFinite`] for NaN or infinite scores
/// - [`AssessmentError::NegativeScore`] for scores below zero
pub fn validate_progress_data(data: &ProgressData) -> Result<(), AssessmentError> {
    if data.is_empty() {
        return Err(AssessmentError::Empty);
    }
    for (student, scores) in data {
        if scores.is_empty() {
            return Err(AssessmentError::NoScores {
                student: student.clone(),
            });
        }
        for &score in scores {
            if !score.is_finite() {
                return Err(AssessmentError::NonFinite {
                    student: student.clone(),
                });
            }
            if score < 0.0 {
                return Err(AssessmentError::NegativeScore {
                    student: student.clone(),
                    score,
                });
            }
        }
    }
    Ok(())
}

/// Arithmetic mean per student
///
/// A student with no scores averages to `0.0`.
#[must_use]
pub fn student_averages(data: &ProgressData) -> Assessment {
    data.iter()
        .map(|(student, scores)| {
            let avg = if scores.is_empty() {
                0.0
            } else {
                #[allow(clippy::cast_precision_loss)]
                let n = scores.len() as f64;
                scores.iter().sum::<f64>() / n
            };
            (student.clone(), avg)
        })
        .collect()
}
