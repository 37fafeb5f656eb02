//! Error types for access checks

use crate::actor::{Capability, Role};

/// Capability check failure
///
/// Both variants are surfaced to catalog callers as "permission denied";
/// they differ only in the diagnostic they carry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// No actor is currently set on the context
    #[error("no authenticated actor; '{capability}' required")]
    NotAuthenticated {
        /// Capability the operation needed
        capability: Capability,
    },

    /// The actor's role does not grant the capability
    #[error("actor '{username}' with role '{role}' lacks '{capability}'")]
    MissingCapability {
        /// Acting user
        username: String,
        /// Role of the acting user
        role: Role,
        /// Capability the operation needed
        capability: Capability,
    },
}

impl AccessError {
    /// Capability the failed operation required
    #[inline]
    #[must_use]
    pub fn capability(&self) -> Capability {
        match self {
            Self::NotAuthenticated { capability } | Self::MissingCapability { capability, .. } => {
                *capability
            }
        }
    }
}
