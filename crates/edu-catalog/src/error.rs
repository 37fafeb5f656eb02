//! Error types for the catalog
//!
//! Every failure is local and synchronous; callers match on the variant to
//! decide how to react (reject a change, ask for re-authentication, ...).

use chrono::NaiveDate;
use edu_access::AccessError;
use edu_assessment::AssessmentError;
use std::path::PathBuf;

/// Main catalog error type
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// End date lies before start date
    #[error("invalid dates: end date {end} is before start date {start}")]
    InvalidDate {
        /// Course start
        start: NaiveDate,
        /// Course end
        end: NaiveDate,
    },

    /// Capability check failed
    #[error("permission denied: {0}")]
    PermissionDenied(#[from] AccessError),

    /// Lookup or removal miss
    #[error("course not found: {0}")]
    CourseNotFound(String),

    /// Assessment input malformed or out of range
    #[error(transparent)]
    InvalidProgressData(#[from] AssessmentError),

    /// Discriminator missing or not registered
    #[error("unknown course type: {}", .0.as_deref().unwrap_or("<missing>"))]
    UnknownCourseType(Option<String>),

    /// Malformed document
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// File read/write failure
    #[error("io error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the caller lacked a capability
    #[inline]
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }

    /// Check if a course lookup missed
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CourseNotFound(_))
    }
}
