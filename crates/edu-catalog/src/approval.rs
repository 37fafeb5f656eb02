//! Change approval chain
//!
//! A change request walks an ordered list of approvers; the first one whose
//! rule accepts the request approves it and the walk stops. Not tied to any
//! course or platform yet.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// What a change touches
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Course materials
    Materials,
    /// Course structure
    Structure,
    /// Anything else
    Other(String),
}

impl From<&str> for ChangeType {
    fn from(value: &str) -> Self {
        match value {
            "materials" => Self::Materials,
            "structure" => Self::Structure,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Who can sign off a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approver {
    /// Course instructor
    Instructor,
    /// Methodology department
    MethodologyDepartment,
    /// Management
    Management,
}

impl fmt::Display for Approver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Instructor => "Instructor",
            Self::MethodologyDepartment => "MethodologyDepartment",
            Self::Management => "Management",
        })
    }
}

/// A requested change awaiting approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRequest {
    /// What the change touches
    pub change_type: ChangeType,
    /// Free-form change payload
    pub change_data: Map<String, Value>,
    /// Who asked
    pub requester: String,
    /// Set once an approver accepts
    pub approved: bool,
    /// Approver that accepted
    pub approved_by: Option<Approver>,
}

impl ChangeRequest {
    /// Create a pending request
    #[must_use]
    pub fn new(
        change_type: impl Into<ChangeType>,
        change_data: Map<String, Value>,
        requester: impl Into<String>,
    ) -> Self {
        Self {
            change_type: change_type.into(),
            change_data,
            requester: requester.into(),
            approved: false,
            approved_by: None,
        }
    }
}

/// Decides whether an approver may accept a request
pub type ApprovalRule = fn(&ChangeRequest) -> bool;

#[derive(Debug, Clone, Copy)]
struct ApprovalStep {
    approver: Approver,
    can_handle: ApprovalRule,
}

/// Ordered approvers, first match wins
#[derive(Debug, Clone, Default)]
pub struct ApprovalChain {
    steps: Vec<ApprovalStep>,
}

impl ApprovalChain {
    /// Chain with no approvers; approves nothing
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Instructor (materials), then methodology department (structure),
    /// then management (anything)
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .then(Approver::Instructor, |r| r.change_type == ChangeType::Materials)
            .then(Approver::MethodologyDepartment, |r| {
                r.change_type == ChangeType::Structure
            })
            .then(Approver::Management, |_| true)
    }

    /// Append an approver
    #[inline]
    #[must_use]
    pub fn then(mut self, approver: Approver, can_handle: ApprovalRule) -> Self {
        self.steps.push(ApprovalStep {
            approver,
            can_handle,
        });
        self
    }

    /// Number of approvers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if chain has no approvers
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Route `request` through the chain
    ///
    /// Returns `true` and marks the request approved if some approver
    /// accepted it.
    pub fn process(&self, request: &mut ChangeRequest) -> bool {
        let Some(step) = self.steps.iter().find(|s| (s.can_handle)(request)) else {
            tracing::info!(requester = %request.requester, "no approver for change request");
            return false;
        };
        request.approved = true;
        request.approved_by = Some(step.approver);
        tracing::info!(
            requester = %request.requester,
            approver = %step.approver,
            "change request approved"
        );
        true
    }
}
