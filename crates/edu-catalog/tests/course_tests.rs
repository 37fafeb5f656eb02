use edu_catalog::{AssessmentError, CatalogError, Course, ProgressData};
use edu_test_utils::{
    admin_context, context_as, date, instructor, names, programming_course, science_course, spec,
    RecordingNotifier,
};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

#[test]
fn test_teach_notifies_every_student() {
    let notifier = RecordingNotifier::new();
    let course = programming_course("Algorithms", 3).with_notifier(notifier.clone());

    assert_eq!(course.teach(), "Conducting lectures on algorithms");
    assert_eq!(
        notifier.recipients(),
        vec!["student_0", "student_1", "student_2"]
    );
    assert!(notifier
        .sent()
        .iter()
        .all(|(_, msg)| msg == "The algorithms lecture has started"));
}

#[test]
fn test_teach_without_students_sends_nothing() {
    let notifier = RecordingNotifier::new();
    let course = science_course("Empty Lab", 0).with_notifier(notifier.clone());

    assert_eq!(course.teach(), "Conducting laboratory work");
    assert!(notifier.sent().is_empty());
}

#[test]
fn test_clone_shares_notifier() {
    let notifier = RecordingNotifier::new();
    let course = programming_course("Algorithms", 1).with_notifier(notifier.clone());
    let copy = course.clone();

    copy.notify_students("hello");
    assert_eq!(notifier.sent(), vec![("student_0".into(), "hello".into())]);
    assert_eq!(Arc::strong_count(&notifier), 3);
}

#[test]
fn test_assessment_through_course() {
    let ctx = context_as(instructor());
    let programming = programming_course("Algorithms", 1);
    let science = science_course("Physics Lab", 1);

    let data = ProgressData::from([("s1".to_string(), vec![0.5, 1.0])]);
    let result = programming.assess_progress(&ctx, &data).unwrap();
    assert!((result["s1"] - 75.0).abs() < 1e-9);

    let data = ProgressData::from([("s1".to_string(), vec![15.0])]);
    let result = science.assess_progress(&ctx, &data).unwrap();
    assert!((result["s1"] - 100.0).abs() < 1e-9);
}

#[test]
fn test_assessment_rejects_out_of_range() {
    let ctx = admin_context();
    let course = programming_course("Algorithms", 1);
    let data = ProgressData::from([("s1".to_string(), vec![1.5])]);

    let err = course.assess_progress(&ctx, &data).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidProgressData(AssessmentError::OutOfRange { .. })
    ));
}

#[test]
fn test_assessor_is_created_once() {
    let ctx = admin_context();
    let course = programming_course("Algorithms", 1);
    assert!(!course.has_assessor());

    let data = ProgressData::from([("s1".to_string(), vec![1.0])]);
    course.assess_progress(&ctx, &data).unwrap();
    assert!(course.has_assessor());
    assert!(!course.clone().has_assessor());
}

#[test]
fn test_from_type_defaults() {
    let course = Course::from_type("design", spec("UI", 0), None).unwrap();
    assert_eq!(course.tools(), Some(&names(&["Figma", "Photoshop"])[..]));
    assert_eq!(course.languages(), None);

    let err = Course::from_type("cooking", spec("Soup", 0), None).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCourseType(Some(ref t)) if t == "cooking"));
}

#[test]
fn test_duration_and_ordering() {
    let short = Course::programming(
        edu_catalog::CourseSpec {
            end_date: date(2024, 9, 11),
            ..spec("Short", 5)
        },
        names(&["Rust"]),
    )
    .unwrap();
    let long = programming_course("Long", 2);

    assert_eq!(short.duration_days(), 10);
    assert_eq!(short.compare_duration(&long), Ordering::Less);
    assert!(short > long);
    assert!(!short.same_attributes(&long));
    assert!(long.same_attributes(&long.clone()));
}

proptest! {
    #[test]
    fn prop_construction_enforces_date_order(start in 0i64..2000, offset in -500i64..500) {
        let start_date = date(2020, 1, 1) + chrono::Duration::days(start);
        let end_date = start_date + chrono::Duration::days(offset);
        let result = Course::science(
            edu_catalog::CourseSpec { start_date, end_date, ..spec("Lab", 1) },
            names(&["Physics"]),
        );

        if offset >= 0 {
            let course = result.unwrap();
            prop_assert_eq!(course.duration_days(), offset);
        } else {
            let is_invalid_date = matches!(result, Err(CatalogError::InvalidDate { .. }));
            prop_assert!(is_invalid_date);
        }
    }
}
