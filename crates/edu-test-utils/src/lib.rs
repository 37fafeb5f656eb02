//! Testing utilities for the edu-catalog workspace
//!
//! Shared fixtures and a recording notifier.

#![allow(missing_docs)]

use chrono::NaiveDate;
use edu_catalog::{AccessContext, Actor, Address, Course, CourseSpec, Notifier, Platform, Role};
use parking_lot::Mutex;
use std::sync::Arc;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub fn admin() -> Actor {
    Actor::new("admin_user", Role::Admin)
}

pub fn instructor() -> Actor {
    Actor::new("instructor_user", Role::Instructor)
}

pub fn assistant() -> Actor {
    Actor::new("assistant_user", Role::Assistant)
}

pub fn student() -> Actor {
    Actor::new("student_user", Role::Student)
}

/// Context with `actor` installed
pub fn context_as(actor: Actor) -> AccessContext {
    AccessContext::with_actor(actor)
}

pub fn admin_context() -> AccessContext {
    context_as(admin())
}

/// Spec for a course in autumn 2024 with `student_count` students
pub fn spec(title: &str, student_count: usize) -> CourseSpec {
    CourseSpec {
        title: title.to_string(),
        start_date: date(2024, 9, 1),
        end_date: date(2024, 12, 20),
        instructor: "Ivan Petrov".to_string(),
        students: (0..student_count).map(|i| format!("student_{i}")).collect(),
        topics: names(&["intro", "practice"]),
    }
}

pub fn programming_course(title: &str, student_count: usize) -> Course {
    Course::programming(spec(title, student_count), names(&["Python", "Rust"])).unwrap()
}

pub fn design_course(title: &str, student_count: usize) -> Course {
    Course::design(spec(title, student_count), names(&["Figma"])).unwrap()
}

pub fn science_course(title: &str, student_count: usize) -> Course {
    Course::science(spec(title, student_count), names(&["Physics"])).unwrap()
}

pub fn sample_address() -> Address {
    Address::new("edu-platform.com", "https://www.edu-platform.com")
}

/// Platform with one course of each kind: 4, 3 and 2 students
pub fn sample_platform() -> Platform {
    let ctx = admin_context();
    let mut platform = Platform::new("Edu Platform", sample_address());
    for course in [
        programming_course("Algorithms", 4),
        design_course("UI Basics", 3),
        science_course("Physics Lab", 2),
    ] {
        platform.add_course(&ctx, course).unwrap();
    }
    platform
}

/// Notifier that keeps every delivery for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Deliveries so far as `(student, message)`
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().clone()
    }

    pub fn recipients(&self) -> Vec<String> {
        self.sent.lock().iter().map(|(s, _)| s.clone()).collect()
    }

    pub fn clear(&self) {
        self.sent.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, student: &str, message: &str) {
        self.sent
            .lock()
            .push((student.to_string(), message.to_string()));
    }
}
