//! Assessment input errors

/// Malformed or out-of-range progress data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    /// No students in the input
    #[error("invalid progress data: no students given")]
    Empty,

    /// A student has an empty score list
    #[error("invalid progress data: student '{student}' has no scores")]
    NoScores {
        /// Offending student
        student: String,
    },

    /// Negative score
    #[error("invalid progress data: negative score {score} for student '{student}'")]
    NegativeScore {
        /// Offending student
        student: String,
        /// Offending score
        score: f64,
    },

    /// NaN or infinite score
    #[error("invalid progress data: non-finite score for student '{student}'")]
    NonFinite {
        /// Offending student
        student: String,
    },

    /// Score outside the range the course kind accepts
    #[error("invalid progress data: score {score} for student '{student}' outside {min}..={max}")]
    OutOfRange {
        /// Offending student
        student: String,
        /// Offending score
        score: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },
}

impl AssessmentError {
    /// Student the error refers to, if any
    #[must_use]
    pub fn student(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::NoScores { student }
            | Self::NegativeScore { student, .. }
            | Self::NonFinite { student }
            | Self::OutOfRange { student, .. } => Some(student),
        }
    }
}
