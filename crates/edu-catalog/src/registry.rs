//! Course kind registry
//!
//! Maps the `type` discriminator of a course document to a factory that
//! rebuilds the matching [`CourseKind`].

use crate::course::CourseKind;
use std::collections::HashMap;

/// Builds a kind from its variant list
pub type KindFactory = fn(Vec<String>) -> CourseKind;

/// How to rebuild one course kind
#[derive(Debug, Clone, Copy)]
pub struct KindEntry {
    /// Document key holding the variant list
    pub detail_field: &'static str,
    /// Factory for the kind
    pub build: KindFactory,
}

/// Registry of decodable course kinds
#[derive(Debug, Default, Clone)]
pub struct CourseRegistry {
    kinds: HashMap<String, KindEntry>,
}

impl CourseRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Create registry with the built-in course kinds
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("ProgrammingCourse", "languages", |languages| {
            CourseKind::Programming { languages }
        });
        registry.register("DesignCourse", "tools", |tools| CourseKind::Design { tools });
        registry.register("ScienceCourse", "field", |field| CourseKind::Science { field });
        registry
    }

    /// Register a discriminator
    ///
    /// Replaces any previous entry with the same name.
    pub fn register(&mut self, type_name: &str, detail_field: &'static str, build: KindFactory) {
        self.kinds.insert(
            type_name.to_string(),
            KindEntry {
                detail_field,
                build,
            },
        );
    }

    /// Look up a discriminator
    #[inline]
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&KindEntry> {
        self.kinds.get(type_name)
    }

    /// Check if discriminator exists
    #[inline]
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.kinds.contains_key(type_name)
    }

    /// Remove discriminator
    #[inline]
    pub fn remove(&mut self, type_name: &str) -> bool {
        self.kinds.remove(type_name).is_some()
    }

    /// Registered discriminators, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get number of registered kinds
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
