//! Platform aggregate
//!
//! Owns the ordered course collection. Adding and removing courses needs
//! [`Capability::EditCourse`]; queries are unrestricted and side-effect free.

use crate::address::Address;
use crate::course::Course;
use crate::error::CatalogError;
use edu_access::{AccessContext, Actor, Capability};
use std::cmp::Reverse;
use std::fmt;

/// An educational platform and its courses
#[derive(Debug, Clone)]
pub struct Platform {
    name: String,
    address: Address,
    courses: Vec<Course>,
}

impl Platform {
    /// Create an empty platform
    #[must_use]
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        let name = name.into();
        tracing::info!(platform = %name, "platform created");
        Self {
            name,
            address,
            courses: Vec::new(),
        }
    }

    /// Platform name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Platform address
    #[inline]
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Courses in insertion order
    #[inline]
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Check if the platform has no courses
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Append a course
    ///
    /// # Errors
    /// Returns [`CatalogError::PermissionDenied`] without `edit_course`.
    pub fn add_course(&mut self, ctx: &AccessContext, course: Course) -> Result<(), CatalogError> {
        let actor = self.authorize(ctx, "add_course")?;
        tracing::info!(
            platform = %self.name,
            course = course.title(),
            by = actor.username(),
            "course added"
        );
        self.courses.push(course);
        Ok(())
    }

    /// Remove the first course equal to `course` and return it
    ///
    /// Equality is by enrolment count (see [`Course`]), so this may remove a
    /// different course with the same number of students.
    ///
    /// # Errors
    /// - [`CatalogError::PermissionDenied`] without `edit_course`
    /// - [`CatalogError::CourseNotFound`] if no course compares equal
    pub fn remove_course(
        &mut self,
        ctx: &AccessContext,
        course: &Course,
    ) -> Result<Course, CatalogError> {
        let actor = self.authorize(ctx, "remove_course")?;
        let Some(index) = self.courses.iter().position(|c| c == course) else {
            tracing::warn!(
                platform = %self.name,
                course = course.title(),
                "attempt to remove a course that is not on the platform"
            );
            return Err(CatalogError::CourseNotFound(course.title().to_string()));
        };
        let removed = self.courses.remove(index);
        tracing::info!(
            platform = %self.name,
            course = removed.title(),
            by = actor.username(),
            "course removed"
        );
        Ok(removed)
    }

    /// First course with exactly this title
    ///
    /// # Errors
    /// Returns [`CatalogError::CourseNotFound`] if no title matches.
    pub fn find_course_by_title(&self, title: &str) -> Result<&Course, CatalogError> {
        self.courses
            .iter()
            .find(|c| c.title() == title)
            .ok_or_else(|| CatalogError::CourseNotFound(title.to_string()))
    }

    /// Mutable access to the first course with exactly this title
    ///
    /// Changes still go through the course's own gated setters.
    ///
    /// # Errors
    /// Returns [`CatalogError::CourseNotFound`] if no title matches.
    pub fn find_course_by_title_mut(&mut self, title: &str) -> Result<&mut Course, CatalogError> {
        self.courses
            .iter_mut()
            .find(|c| c.title() == title)
            .ok_or_else(|| CatalogError::CourseNotFound(title.to_string()))
    }

    /// Course at `index`
    ///
    /// Negative indices are not counted from the end; they are simply out of
    /// range.
    ///
    /// # Errors
    /// Returns [`CatalogError::CourseNotFound`] unless `0 <= index < len`.
    pub fn get_course_by_index(&self, index: isize) -> Result<&Course, CatalogError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.courses.get(i))
            .ok_or_else(|| {
                tracing::warn!(platform = %self.name, index, "no course at index");
                CatalogError::CourseNotFound(format!("index {index}"))
            })
    }

    /// The `n` courses with most students, descending
    ///
    /// Ties keep insertion order. Returns every course if `n` exceeds the
    /// collection size.
    #[must_use]
    pub fn top_courses(&self, n: usize) -> Vec<&Course> {
        tracing::debug!(platform = %self.name, n, "top courses requested");
        let mut ranked: Vec<&Course> = self.courses.iter().collect();
        ranked.sort_by_key(|c| Reverse(c.students().len()));
        ranked.truncate(n);
        ranked
    }

    /// Append a course without a permission check (used when loading)
    pub(crate) fn push_loaded(&mut self, course: Course) {
        self.courses.push(course);
    }

    fn authorize(
        &self,
        ctx: &AccessContext,
        operation: &'static str,
    ) -> Result<Actor, CatalogError> {
        ctx.require(Capability::EditCourse).map_err(|err| {
            tracing::warn!(platform = %self.name, operation, error = %err, "permission denied");
            CatalogError::from(err)
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Platform: {}, Address: {}, Courses: {}",
            self.name,
            self.address,
            self.courses.len()
        )
    }
}
