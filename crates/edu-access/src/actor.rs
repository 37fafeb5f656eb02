//! Actors, roles and capability tokens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named permission granted to a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Create, remove or change courses
    EditCourse,
    /// Run progress assessment on a course
    AssessProgress,
    /// Administer user accounts
    ManageUsers,
}

impl Capability {
    /// All capability tokens
    pub const ALL: [Capability; 3] = [
        Capability::EditCourse,
        Capability::AssessProgress,
        Capability::ManageUsers,
    ];

    /// Wire token for this capability
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EditCourse => "edit_course",
            Self::AssessProgress => "assess_progress",
            Self::ManageUsers => "manage_users",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full control over the platform
    Admin,
    /// Teaches and edits courses
    Instructor,
    /// Helps grading, cannot edit courses
    Assistant,
    /// Enrolled learner
    Student,
}

impl Role {
    /// Capabilities granted to this role
    ///
    /// The table is fixed; changing what a user may do means giving them a
    /// different role.
    #[must_use]
    pub const fn capabilities(self) -> &'static [Capability] {
        match self {
            Self::Admin => &[
                Capability::EditCourse,
                Capability::AssessProgress,
                Capability::ManageUsers,
            ],
            Self::Instructor => &[Capability::EditCourse, Capability::AssessProgress],
            Self::Assistant => &[Capability::AssessProgress],
            Self::Student => &[],
        }
    }

    /// Check whether this role carries `capability`
    #[inline]
    #[must_use]
    pub fn grants(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Lowercase role name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Instructor => "instructor",
            Self::Assistant => "assistant",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: '{0}'")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "instructor" => Ok(Self::Instructor),
            "assistant" => Ok(Self::Assistant),
            "student" => Ok(Self::Student),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// A user acting on the platform
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    username: String,
    role: Role,
}

impl Actor {
    /// Create new actor
    #[inline]
    #[must_use]
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Login name
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Assigned role
    #[inline]
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Capabilities derived from the role
    #[inline]
    #[must_use]
    pub fn permissions(&self) -> &'static [Capability] {
        self.role.capabilities()
    }

    /// Check a single capability
    #[inline]
    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.role.grants(capability)
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(username='{}', role='{}')", self.username, self.role)
    }
}
