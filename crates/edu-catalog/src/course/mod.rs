//! Course entity
//!
//! A [`Course`] owns its common scheduling data plus a [`CourseKind`] with
//! the variant-specific list. Every setter is gated on
//! [`Capability::EditCourse`], assessment on [`Capability::AssessProgress`].
//!
//! # Ordering
//! Courses compare (`==`, `<`, ...) by enrolment count only. Two different
//! courses with the same number of students are equal. Use
//! [`Course::same_attributes`] for field-wise comparison and
//! [`Course::compare_duration`] to order by length.

mod kind;

pub use kind::CourseKind;

use crate::error::CatalogError;
use crate::notifier::{NoopNotifier, Notifier};
use chrono::NaiveDate;
use edu_access::{AccessContext, Actor, Capability};
use edu_assessment::{Assessment, ProgressAssessor, ProgressData};
use once_cell::sync::OnceCell;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Data shared by every course kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSpec {
    /// Course title
    pub title: String,
    /// First day
    pub start_date: NaiveDate,
    /// Last day
    pub end_date: NaiveDate,
    /// Teaching instructor
    pub instructor: String,
    /// Enrolled student identifiers, duplicates allowed
    pub students: Vec<String>,
    /// Topics in teaching order
    pub topics: Vec<String>,
}

/// A course on the platform
#[derive(Debug)]
pub struct Course {
    title: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    instructor: String,
    students: Vec<String>,
    topics: Vec<String>,
    kind: CourseKind,
    /// Created on first assessment, kept for the course's lifetime
    assessor: OnceCell<Box<dyn ProgressAssessor>>,
    notifier: Arc<dyn Notifier>,
}

impl Course {
    /// Create a course
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidDate`] if `end_date < start_date`.
    pub fn new(spec: CourseSpec, kind: CourseKind) -> Result<Self, CatalogError> {
        check_dates(spec.start_date, spec.end_date)?;
        tracing::debug!(
            title = %spec.title,
            kind = kind.type_name(),
            "course created"
        );
        Ok(Self {
            title: spec.title,
            start_date: spec.start_date,
            end_date: spec.end_date,
            instructor: spec.instructor,
            students: spec.students,
            topics: spec.topics,
            kind,
            assessor: OnceCell::new(),
            notifier: Arc::new(NoopNotifier),
        })
    }

    /// Create a programming course
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidDate`] if `end_date < start_date`.
    pub fn programming(spec: CourseSpec, languages: Vec<String>) -> Result<Self, CatalogError> {
        Self::new(spec, CourseKind::Programming { languages })
    }

    /// Create a design course
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidDate`] if `end_date < start_date`.
    pub fn design(spec: CourseSpec, tools: Vec<String>) -> Result<Self, CatalogError> {
        Self::new(spec, CourseKind::Design { tools })
    }

    /// Create a science course
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidDate`] if `end_date < start_date`.
    pub fn science(spec: CourseSpec, field: Vec<String>) -> Result<Self, CatalogError> {
        Self::new(spec, CourseKind::Science { field })
    }

    /// Create a course by short kind name (`programming`, `design`, `science`)
    ///
    /// Missing `details` fall back to the kind's default list.
    ///
    /// # Errors
    /// - [`CatalogError::UnknownCourseType`] for an unknown kind name
    /// - [`CatalogError::InvalidDate`] if `end_date < start_date`
    pub fn from_type(
        kind_name: &str,
        spec: CourseSpec,
        details: Option<Vec<String>>,
    ) -> Result<Self, CatalogError> {
        let kind = CourseKind::from_short_name(kind_name, details)
            .ok_or_else(|| CatalogError::UnknownCourseType(Some(kind_name.to_string())))?;
        Self::new(spec, kind)
    }

    /// Attach a notification sink
    #[inline]
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Course title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// First day
    #[inline]
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day
    #[inline]
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Teaching instructor
    #[inline]
    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    /// Enrolled students
    #[inline]
    #[must_use]
    pub fn students(&self) -> &[String] {
        &self.students
    }

    /// Topics
    #[inline]
    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Kind-specific data
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &CourseKind {
        &self.kind
    }

    /// Languages taught, if this is a programming course
    #[must_use]
    pub fn languages(&self) -> Option<&[String]> {
        match &self.kind {
            CourseKind::Programming { languages } => Some(languages),
            _ => None,
        }
    }

    /// Tools covered, if this is a design course
    #[must_use]
    pub fn tools(&self) -> Option<&[String]> {
        match &self.kind {
            CourseKind::Design { tools } => Some(tools),
            _ => None,
        }
    }

    /// Fields of study, if this is a science course
    #[must_use]
    pub fn field(&self) -> Option<&[String]> {
        match &self.kind {
            CourseKind::Science { field } => Some(field),
            _ => None,
        }
    }

    /// Rename the course
    ///
    /// # Errors
    /// Returns [`CatalogError::PermissionDenied`] without `edit_course`.
    pub fn set_title(
        &mut self,
        ctx: &AccessContext,
        title: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let actor = self.authorize(ctx, Capability::EditCourse, "title")?;
        self.title = title.into();
        self.log_change(&actor, "title");
        Ok(())
    }

    /// Move the start date
    ///
    /// # Errors
    /// - [`CatalogError::PermissionDenied`] without `edit_course`
    /// - [`CatalogError::InvalidDate`] if the new date is after the end date
    pub fn set_start_date(
        &mut self,
        ctx: &AccessContext,
        start_date: NaiveDate,
    ) -> Result<(), CatalogError> {
        let actor = self.authorize(ctx, Capability::EditCourse, "start_date")?;
        check_dates(start_date, self.end_date)?;
        self.start_date = start_date;
        self.log_change(&actor, "start_date");
        Ok(())
    }

    /// Move the end date
    ///
    /// # Errors
    /// - [`CatalogError::PermissionDenied`] without `edit_course`
    /// - [`CatalogError::InvalidDate`] if the new date is before the start date
    pub fn set_end_date(
        &mut self,
        ctx: &AccessContext,
        end_date: NaiveDate,
    ) -> Result<(), CatalogError> {
        let actor = self.authorize(ctx, Capability::EditCourse, "end_date")?;
        check_dates(self.start_date, end_date)?;
        self.end_date = end_date;
        self.log_change(&actor, "end_date");
        Ok(())
    }

    /// Hand the course to another instructor
    ///
    /// # Errors
    /// Returns [`CatalogError::PermissionDenied`] without `edit_course`.
    pub fn set_instructor(
        &mut self,
        ctx: &AccessContext,
        instructor: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let actor = self.authorize(ctx, Capability::EditCourse, "instructor")?;
        self.instructor = instructor.into();
        self.log_change(&actor, "instructor");
        Ok(())
    }

    /// Replace the enrolment list
    ///
    /// # Errors
    /// Returns [`CatalogError::PermissionDenied`] without `edit_course`.
    pub fn set_students(
        &mut self,
        ctx: &AccessContext,
        students: Vec<String>,
    ) -> Result<(), CatalogError> {
        let actor = self.authorize(ctx, Capability::EditCourse, "students")?;
        self.students = students;
        self.log_change(&actor, "students");
        Ok(())
    }

    /// Replace the topic list
    ///
    /// # Errors
    /// Returns [`CatalogError::PermissionDenied`] without `edit_course`.
    pub fn set_topics(
        &mut self,
        ctx: &AccessContext,
        topics: Vec<String>,
    ) -> Result<(), CatalogError> {
        let actor = self.authorize(ctx, Capability::EditCourse, "topics")?;
        self.topics = topics;
        self.log_change(&actor, "topics");
        Ok(())
    }

    /// Replace the course program (topics) wholesale
    ///
    /// # Errors
    /// Returns [`CatalogError::PermissionDenied`] without `edit_course`.
    pub fn update_course_program(
        &mut self,
        ctx: &AccessContext,
        new_topics: Vec<String>,
    ) -> Result<(), CatalogError> {
        self.set_topics(ctx, new_topics)
    }

    /// Assessor for this course, created on first use
    #[must_use]
    pub fn progress_assessor(&self) -> &dyn ProgressAssessor {
        self.assessor
            .get_or_init(|| self.kind.create_progress_assessor())
            .as_ref()
    }

    /// Whether the assessor has been created yet
    #[inline]
    #[must_use]
    pub fn has_assessor(&self) -> bool {
        self.assessor.get().is_some()
    }

    /// Compute per-student completion (0-100)
    ///
    /// # Errors
    /// - [`CatalogError::PermissionDenied`] without `assess_progress`
    /// - [`CatalogError::InvalidProgressData`] for malformed scores
    pub fn assess_progress(
        &self,
        ctx: &AccessContext,
        data: &ProgressData,
    ) -> Result<Assessment, CatalogError> {
        let actor = self.authorize(ctx, Capability::AssessProgress, "assess_progress")?;
        let result = self.progress_assessor().assess_progress(data)?;
        tracing::info!(
            course = %self.title,
            by = actor.username(),
            students = result.len(),
            "progress assessed"
        );
        Ok(result)
    }

    /// Start a lecture: notify every student and describe the session
    pub fn teach(&self) -> &'static str {
        tracing::info!(course = %self.title, "lecture started");
        self.notify_students(self.kind.lecture_announcement());
        self.kind.lecture_summary()
    }

    /// Send `message` to each enrolled student
    pub fn notify_students(&self, message: &str) {
        if self.students.is_empty() {
            tracing::info!(course = %self.title, "no students enrolled, nothing sent");
            return;
        }
        for student in &self.students {
            self.notifier.notify(student, message);
        }
    }

    /// Length in days (`end - start`)
    #[inline]
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Three-way comparison by duration
    #[inline]
    #[must_use]
    pub fn compare_duration(&self, other: &Self) -> Ordering {
        self.duration_days().cmp(&other.duration_days())
    }

    /// Field-wise equality, ignoring the cached assessor and notifier
    #[must_use]
    pub fn same_attributes(&self, other: &Self) -> bool {
        self.title == other.title
            && self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.instructor == other.instructor
            && self.students == other.students
            && self.topics == other.topics
            && self.kind == other.kind
    }

    fn authorize(
        &self,
        ctx: &AccessContext,
        capability: Capability,
        operation: &'static str,
    ) -> Result<Actor, CatalogError> {
        ctx.require(capability).map_err(|err| {
            tracing::warn!(course = %self.title, operation, error = %err, "permission denied");
            CatalogError::from(err)
        })
    }

    fn log_change(&self, actor: &Actor, field: &'static str) {
        tracing::info!(course = %self.title, field, by = actor.username(), "course updated");
    }
}

impl Clone for Course {
    /// Clones start with no cached assessor
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            instructor: self.instructor.clone(),
            students: self.students.clone(),
            topics: self.topics.clone(),
            kind: self.kind.clone(),
            assessor: OnceCell::new(),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

// Enrolment count is the only ordering key.
impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.students.len() == other.students.len()
    }
}

impl Eq for Course {}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Course {
    fn cmp(&self, other: &Self) -> Ordering {
        self.students.len().cmp(&other.students.len())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Instructor: {}, {}: {}",
            self.kind.label(),
            self.title,
            self.instructor,
            self.kind.details_label(),
            self.kind.details().join(", ")
        )
    }
}

fn check_dates(start: NaiveDate, end: NaiveDate) -> Result<(), CatalogError> {
    if end < start {
        return Err(CatalogError::InvalidDate { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_access::Role;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn spec(students: &[&str]) -> CourseSpec {
        CourseSpec {
            title: "Rust".into(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 3, 1),
            instructor: "Ferris".into(),
            students: students.iter().map(|s| (*s).to_string()).collect(),
            topics: vec!["ownership".into()],
        }
    }

    fn editor() -> AccessContext {
        AccessContext::with_actor(Actor::new("ann", Role::Instructor))
    }

    #[test]
    fn end_before_start_rejected() {
        let mut bad = spec(&[]);
        bad.end_date = date(2023, 12, 31);
        let err = Course::programming(bad, vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDate { .. }));
    }

    #[test]
    fn single_day_course_allowed() {
        let mut one_day = spec(&[]);
        one_day.end_date = one_day.start_date;
        let course = Course::design(one_day, vec![]).unwrap();
        assert_eq!(course.duration_days(), 0);
    }

    #[test]
    fn from_type_unknown_kind() {
        let err = Course::from_type("cooking", spec(&[]), None).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCourseType(Some(ref k)) if k == "cooking"));
    }

    #[test]
    fn variant_accessors() {
        let course = Course::science(spec(&[]), vec!["Physics".into()]).unwrap();
        assert_eq!(course.field(), Some(&["Physics".to_string()][..]));
        assert!(course.languages().is_none());
        assert!(course.tools().is_none());
    }

    #[test]
    fn setters_require_edit_capability() {
        let mut course = Course::programming(spec(&["a"]), vec![]).unwrap();
        let ctx = AccessContext::with_actor(Actor::new("sam", Role::Student));

        assert!(course.set_title(&ctx, "Other").unwrap_err().is_permission_denied());
        assert!(course
            .set_instructor(&ctx, "Other")
            .unwrap_err()
            .is_permission_denied());
        assert!(course
            .set_students(&ctx, vec![])
            .unwrap_err()
            .is_permission_denied());
        assert!(course
            .update_course_program(&ctx, vec![])
            .unwrap_err()
            .is_permission_denied());
        assert!(course
            .set_end_date(&ctx, date(2025, 1, 1))
            .unwrap_err()
            .is_permission_denied());
        assert_eq!(course.title(), "Rust");
        assert_eq!(course.students().len(), 1);
    }

    #[test]
    fn setters_apply_with_edit_capability() {
        let mut course = Course::programming(spec(&[]), vec![]).unwrap();
        let ctx = editor();

        course.set_title(&ctx, "Advanced Rust").unwrap();
        course.set_instructor(&ctx, "Crab").unwrap();
        course.set_students(&ctx, vec!["x".into(), "x".into()]).unwrap();
        course
            .update_course_program(&ctx, vec!["traits".into(), "async".into()])
            .unwrap();

        assert_eq!(course.title(), "Advanced Rust");
        assert_eq!(course.instructor(), "Crab");
        assert_eq!(course.students(), ["x", "x"]);
        assert_eq!(course.topics(), ["traits", "async"]);
    }

    #[test]
    fn date_setters_cross_validate() {
        let mut course = Course::programming(spec(&[]), vec![]).unwrap();
        let ctx = editor();

        let err = course.set_start_date(&ctx, date(2024, 4, 1)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDate { .. }));
        let err = course.set_end_date(&ctx, date(2023, 1, 1)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDate { .. }));
        assert_eq!(course.start_date(), date(2024, 1, 1));
        assert_eq!(course.end_date(), date(2024, 3, 1));

        course.set_end_date(&ctx, date(2024, 6, 1)).unwrap();
        course.set_start_date(&ctx, date(2024, 5, 1)).unwrap();
        assert_eq!(course.duration_days(), 31);
    }

    #[test]
    fn assessor_is_created_lazily_once() {
        let course = Course::programming(spec(&[]), vec![]).unwrap();
        assert!(!course.has_assessor());

        assert_eq!(course.progress_assessor().name(), "programming");
        assert!(course.has_assessor());
        assert_eq!(course.progress_assessor().name(), "programming");
    }

    #[test]
    fn assessment_requires_capability() {
        let course = Course::programming(spec(&[]), vec![]).unwrap();
        let mut data = ProgressData::new();
        data.insert("s1".into(), vec![0.5, 1.0]);

        let err = course.assess_progress(&AccessContext::new(), &data).unwrap_err();
        assert!(err.is_permission_denied());
        assert!(!course.has_assessor());

        let ctx = AccessContext::with_actor(Actor::new("tom", Role::Assistant));
        let result = course.assess_progress(&ctx, &data).unwrap();
        assert_eq!(result["s1"], 75.0);
    }

    #[test]
    fn invalid_scores_surface_as_progress_error() {
        let course = Course::programming(spec(&[]), vec![]).unwrap();
        let mut data = ProgressData::new();
        data.insert("s1".into(), vec![1.2]);

        let err = course.assess_progress(&editor(), &data).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidProgressData(_)));
    }

    #[test]
    fn equality_is_enrolment_count() {
        let a = Course::programming(spec(&["1", "2", "3"]), vec!["Rust".into()]).unwrap();
        let mut other = spec(&["x", "y", "z"]);
        other.title = "Painting".into();
        let b = Course::design(other, vec![]).unwrap();
        let c = Course::design(spec(&["1"]), vec![]).unwrap();

        assert_eq!(a, b);
        assert!(!a.same_attributes(&b));
        assert!(c < a);
        assert!(a > c);
    }

    #[test]
    fn duration_comparison_independent_of_enrolment() {
        let short = Course::programming(spec(&["1", "2"]), vec![]).unwrap();
        let mut long_spec = spec(&[]);
        long_spec.end_date = date(2024, 12, 31);
        let long = Course::science(long_spec, vec![]).unwrap();

        assert_eq!(short.compare_duration(&long), Ordering::Less);
        assert_eq!(long.compare_duration(&short), Ordering::Greater);
        assert_eq!(short.compare_duration(&short.clone()), Ordering::Equal);
        assert!(short > long);
    }

    #[test]
    fn clone_drops_cached_assessor() {
        let course = Course::design(spec(&[]), vec![]).unwrap();
        let _ = course.progress_assessor();
        let copy = course.clone();
        assert!(!copy.has_assessor());
        assert!(copy.same_attributes(&course));
    }

    #[test]
    fn display_lists_variant_details() {
        let course =
            Course::programming(spec(&[]), vec!["Rust".into(), "C".into()]).unwrap();
        assert_eq!(
            course.to_string(),
            "Programming course: Rust, Instructor: Ferris, Languages: Rust, C"
        );
    }
}
