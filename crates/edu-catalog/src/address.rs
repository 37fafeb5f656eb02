//! Platform address

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a platform is reachable
///
/// Immutable value; no validation beyond what the caller supplies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    domain: String,
    url: String,
}

impl Address {
    /// Create new address
    #[inline]
    #[must_use]
    pub fn new(domain: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            url: url.into(),
        }
    }

    /// Domain name
    #[inline]
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Full URL
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.domain, self.url)
    }
}
