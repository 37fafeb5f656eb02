//! Educational course catalog
//!
//! A [`Platform`] owns an ordered list of [`Course`]s of different kinds.
//! Mutations are gated on capabilities of the actor held in an
//! [`AccessContext`]; progress assessment is delegated to a per-kind
//! [`ProgressAssessor`](edu_assessment::ProgressAssessor); the
//! [`codec`] module round-trips the whole graph through tagged JSON.
//!
//! # Core Concepts
//!
//! - [`Course`] / [`CourseKind`]: shared course data plus the kind-specific list
//! - [`Platform`]: the aggregate owning the courses
//! - [`CatalogCodec`]: JSON encode/decode dispatching on the `type` field
//! - [`CourseRegistry`]: discriminator → kind factory
//! - [`ApprovalChain`]: first-match approval of change requests
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use edu_catalog::{AccessContext, Actor, Address, Course, CourseSpec, Platform, Role};
//!
//! let ctx = AccessContext::new();
//! let _admin = ctx.acting_as(Actor::new("root", Role::Admin));
//!
//! let mut platform = Platform::new("Campus", Address::new("campus.example", "https://campus.example"));
//! let spec = CourseSpec {
//!     title: "Rust".into(),
//!     start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
//!     instructor: "Ferris".into(),
//!     students: vec!["ann".into()],
//!     topics: vec!["ownership".into()],
//! };
//! platform.add_course(&ctx, Course::programming(spec, vec!["Rust".into()])?)?;
//! assert_eq!(platform.top_courses(1)[0].title(), "Rust");
//! # Ok::<(), edu_catalog::CatalogError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod address;
mod course;
mod error;
mod notifier;
mod platform;
mod registry;

pub mod approval;
pub mod codec;
pub mod config;
pub mod telemetry;

pub use address::Address;
pub use approval::{ApprovalChain, ApprovalRule, Approver, ChangeRequest, ChangeType};
pub use codec::{CatalogCodec, CourseDocument, Decoded, PlatformDocument};
pub use config::{CatalogConfig, LogFormat, LoggingConfig, StorageConfig};
pub use course::{Course, CourseKind, CourseSpec};
pub use error::CatalogError;
pub use notifier::{LogNotifier, NoopNotifier, Notifier};
pub use platform::Platform;
pub use registry::{CourseRegistry, KindEntry, KindFactory};

pub use edu_access::{AccessContext, AccessError, ActingAs, Actor, Capability, Role};
pub use edu_assessment::{Assessment, AssessmentError, ProgressAssessor, ProgressData};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
