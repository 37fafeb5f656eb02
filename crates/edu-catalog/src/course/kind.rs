//! Course variants
//!
//! Each variant carries its own list attribute and selects the assessor
//! strategy used for its progress.

use edu_assessment::{
    DesignProgressAssessor, ProgrammingProgressAssessor, ProgressAssessor, ScienceProgressAssessor,
};

/// Kind-specific part of a course
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CourseKind {
    /// Programming course with the languages it teaches
    Programming {
        /// Languages taught
        languages: Vec<String>,
    },
    /// Design course with the tools it covers
    Design {
        /// Tools covered
        tools: Vec<String>,
    },
    /// Science course with its fields of study
    Science {
        /// Fields of study
        field: Vec<String>,
    },
}

impl CourseKind {
    /// Discriminators of all built-in kinds
    pub const TYPE_NAMES: [&'static str; 3] = ["ProgrammingCourse", "DesignCourse", "ScienceCourse"];

    /// Build a kind from its short name, falling back to default list values
    ///
    /// Short names are `programming`, `design` and `science`. Returns `None`
    /// for anything else.
    #[must_use]
    pub fn from_short_name(name: &str, details: Option<Vec<String>>) -> Option<Self> {
        let owned = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
        let kind = match name {
            "programming" => Self::Programming {
                languages: details.unwrap_or_else(|| owned(&["Python", "Java"])),
            },
            "design" => Self::Design {
                tools: details.unwrap_or_else(|| owned(&["Figma", "Photoshop"])),
            },
            "science" => Self::Science {
                field: details.unwrap_or_else(|| owned(&["Physics", "Mathematics"])),
            },
            _ => return None,
        };
        Some(kind)
    }

    /// Discriminator written to the `type` field
    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Programming { .. } => "ProgrammingCourse",
            Self::Design { .. } => "DesignCourse",
            Self::Science { .. } => "ScienceCourse",
        }
    }

    /// Short lowercase name
    #[inline]
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Programming { .. } => "programming",
            Self::Design { .. } => "design",
            Self::Science { .. } => "science",
        }
    }

    /// Document key of the variant list
    #[inline]
    #[must_use]
    pub const fn detail_field(&self) -> &'static str {
        match self {
            Self::Programming { .. } => "languages",
            Self::Design { .. } => "tools",
            Self::Science { .. } => "field",
        }
    }

    /// Variant list (languages, tools or fields)
    #[inline]
    #[must_use]
    pub fn details(&self) -> &[String] {
        match self {
            Self::Programming { languages } => languages,
            Self::Design { tools } => tools,
            Self::Science { field } => field,
        }
    }

    /// Create the assessor matching this kind
    #[must_use]
    pub fn create_progress_assessor(&self) -> Box<dyn ProgressAssessor> {
        match self {
            Self::Programming { .. } => Box::new(ProgrammingProgressAssessor),
            Self::Design { .. } => Box::new(DesignProgressAssessor),
            Self::Science { .. } => Box::new(ScienceProgressAssessor),
        }
    }

    pub(crate) const fn label(&self) -> &'static str {
        match self {
            Self::Programming { .. } => "Programming course",
            Self::Design { .. } => "Design course",
            Self::Science { .. } => "Science course",
        }
    }

    pub(crate) const fn details_label(&self) -> &'static str {
        match self {
            Self::Programming { .. } => "Languages",
            Self::Design { .. } => "Tools",
            Self::Science { .. } => "Fields",
        }
    }

    pub(crate) const fn lecture_announcement(&self) -> &'static str {
        match self {
            Self::Programming { .. } => "The algorithms lecture has started",
            Self::Design { .. } => "The design lecture has started",
            Self::Science { .. } => "The laboratory session has started",
        }
    }

    pub(crate) const fn lecture_summary(&self) -> &'static str {
        match self {
            Self::Programming { .. } => "Conducting lectures on algorithms",
            Self::Design { .. } => "Explaining principles of composition",
            Self::Science { .. } => "Conducting laboratory work",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_defaults() {
        let kind = CourseKind::from_short_name("programming", None).unwrap();
        assert_eq!(kind.details(), ["Python", "Java"]);

        let kind = CourseKind::from_short_name("design", None).unwrap();
        assert_eq!(kind.details(), ["Figma", "Photoshop"]);

        let kind = CourseKind::from_short_name("science", None).unwrap();
        assert_eq!(kind.details(), ["Physics", "Mathematics"]);
    }

    #[test]
    fn short_name_explicit_details() {
        let kind = CourseKind::from_short_name("design", Some(vec!["Blender".into()])).unwrap();
        assert_eq!(kind, CourseKind::Design { tools: vec!["Blender".into()] });
    }

    #[test]
    fn unknown_short_name() {
        assert!(CourseKind::from_short_name("cooking", None).is_none());
    }

    #[test]
    fn assessor_matches_kind() {
        let science = CourseKind::Science { field: vec![] };
        assert_eq!(science.create_progress_assessor().name(), "science");

        let design = CourseKind::Design { tools: vec![] };
        assert_eq!(design.create_progress_assessor().name(), "design");
    }

    #[test]
    fn type_names_cover_every_kind() {
        for name in ["programming", "design", "science"] {
            let kind = CourseKind::from_short_name(name, None).unwrap();
            assert!(CourseKind::TYPE_NAMES.contains(&kind.type_name()));
            assert_eq!(kind.short_name(), name);
        }
    }
}
