//! Progress assessment
//!
//! Turns raw per-student scores into a 0-100 completion percentage. Each
//! course kind plugs its own score normalisation into a shared pipeline:
//!
//! 1. validate the raw data ([`validate_progress_data`])
//! 2. normalise scores to 0-100 ([`ProgressAssessor::process_scores`])
//! 3. average per student ([`student_averages`])
//! 4. finalise ([`ProgressAssessor::finalize`])
//!
//! # Example
//!
//! ```rust
//! use edu_assessment::{ProgrammingProgressAssessor, ProgressAssessor, ProgressData};
//!
//! let mut data = ProgressData::new();
//! data.insert("s1".to_string(), vec![0.5, 1.0]);
//!
//! let result = ProgrammingProgressAssessor.assess_progress(&data).unwrap();
//! assert_eq!(result["s1"], 75.0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod assessor;
mod assessors;
mod error;

pub use assessor::{
    student_averages, validate_progress_data, Assessment, ProgressAssessor, ProgressData,
};
pub use assessors::{
    DesignProgressAssessor, ProgrammingProgressAssessor, ScienceProgressAssessor,
    SCIENCE_MAX_SCORE_PER_TASK,
};
pub use error::AssessmentError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
