//! Access control for the educational catalog
//!
//! Every state-changing catalog operation is gated on a [`Capability`].
//! Capabilities are derived from an [`Actor`]'s [`Role`] through a fixed
//! table, and the actor currently performing operations lives in an
//! [`AccessContext`] that callers pass into each gated call.
//!
//! # Example
//!
//! ```rust
//! use edu_access::{AccessContext, Actor, Capability, Role};
//!
//! let ctx = AccessContext::new();
//! assert!(ctx.require(Capability::EditCourse).is_err());
//!
//! {
//!     let _guard = ctx.acting_as(Actor::new("alice", Role::Instructor));
//!     assert!(ctx.require(Capability::EditCourse).is_ok());
//! }
//!
//! // Previous (empty) actor restored when the guard drops
//! assert!(ctx.current_actor().is_none());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod actor;
mod context;
mod error;

pub use actor::{Actor, Capability, ParseRoleError, Role};
pub use context::{AccessContext, ActingAs};
pub use error::AccessError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
