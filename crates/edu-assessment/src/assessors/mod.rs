//! Assessor implementations
//!
//! One strategy per course kind:
//! - Programming: fractional scores in 0..=1
//! - Design: percentage scores in 0..=100
//! - Science: task points capped at [`SCIENCE_MAX_SCORE_PER_TASK`]

mod design;
mod programming;
mod science;

pub use design::DesignProgressAssessor;
pub use programming::ProgrammingProgressAssessor;
pub use science::{ScienceProgressAssessor, SCIENCE_MAX_SCORE_PER_TASK};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessor::{ProgressAssessor, ProgressData};
    use proptest::prelude::*;

    fn scores(max: f64) -> impl Strategy<Value = ProgressData> {
        proptest::collection::btree_map(
            "[a-z]{1,6}",
            proptest::collection::vec(0.0..=max, 1..8),
            1..6,
        )
    }

    fn in_percent_range(value: f64) -> bool {
        (0.0..=100.0 + 1e-9).contains(&value)
    }

    proptest! {
        #[test]
        fn programming_results_are_percentages(data in scores(1.0)) {
            let result = ProgrammingProgressAssessor.assess_progress(&data).unwrap();
            prop_assert_eq!(result.len(), data.len());
            prop_assert!(result.values().all(|v| in_percent_range(*v)));
        }

        #[test]
        fn design_results_are_percentages(data in scores(100.0)) {
            let result = DesignProgressAssessor.assess_progress(&data).unwrap();
            prop_assert!(result.values().all(|v| in_percent_range(*v)));
        }

        #[test]
        fn science_caps_any_positive_score(data in scores(1000.0)) {
            let result = ScienceProgressAssessor.assess_progress(&data).unwrap();
            prop_assert!(result.values().all(|v| in_percent_range(*v)));
        }
    }
}
