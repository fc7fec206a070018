// Rust guideline compliant 2026-10-16

//! Core data models for the AFU-9 loop.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Handoff states that count as "the draft has been synchronized".
const SYNCED_HANDOFF_STATES: &[&str] = &["SYNCED", "SYNCHRONIZED"];

/// Persisted status of an issue in the AFU-9 lifecycle.
///
/// Legacy status values are accepted on input and always written back in
/// canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Issue exists but has not been picked up yet.
    Created,
    /// Specification is ready for implementation.
    #[serde(alias = "SPECIFIED")]
    SpecReady,
    /// Implementation is being prepared.
    #[serde(alias = "IMPLEMENTING")]
    ImplementingPrep,
    /// Work is ready for review.
    #[serde(alias = "MERGE_READY")]
    ReviewReady,
    /// Work is complete.
    #[serde(alias = "CLOSED")]
    Done,
    /// Work is paused pending human action.
    #[serde(alias = "PAUSED")]
    Hold,
}

impl Status {
    /// Every status, in forward lifecycle order with `Hold` last.
    pub const ALL: [Status; 6] = [
        Status::Created,
        Status::SpecReady,
        Status::ImplementingPrep,
        Status::ReviewReady,
        Status::Done,
        Status::Hold,
    ];

    /// Parses a raw status string, accepting legacy aliases.
    ///
    /// Surrounding whitespace is ignored; matching is case-sensitive.
    /// Returns `None` for empty or unrecognized values.
    pub fn parse(raw: &str) -> Option<Status> {
        match raw.trim() {
            "CREATED" => Some(Status::Created),
            "SPEC_READY" | "SPECIFIED" => Some(Status::SpecReady),
            "IMPLEMENTING_PREP" | "IMPLEMENTING" => Some(Status::ImplementingPrep),
            "REVIEW_READY" | "MERGE_READY" => Some(Status::ReviewReady),
            "DONE" | "CLOSED" => Some(Status::Done),
            "HOLD" | "PAUSED" => Some(Status::Hold),
            _ => None,
        }
    }

    /// Returns the canonical wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Created => "CREATED",
            Status::SpecReady => "SPEC_READY",
            Status::ImplementingPrep => "IMPLEMENTING_PREP",
            Status::ReviewReady => "REVIEW_READY",
            Status::Done => "DONE",
            Status::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::parse(s).ok_or_else(|| crate::Error::UnknownStatus(s.to_string()))
    }
}

/// Outcome of the most recent draft validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// Draft passed validation.
    Valid,
    /// Draft failed validation.
    Invalid,
    /// Draft has not been validated, or the stored value is unrecognized.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A step of the AFU-9 loop that an issue can take next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoopStep {
    /// S1: pick the issue up.
    #[serde(rename = "S1")]
    PickIssue,
    /// S2: mark the specification ready.
    #[serde(rename = "S2")]
    SpecReady,
    /// S3: prepare the implementation.
    #[serde(rename = "S3")]
    ImplementPrep,
    /// S4: review.
    #[serde(rename = "S4")]
    Review,
    /// S5: merge.
    #[serde(rename = "S5")]
    Merge,
    /// S7: post-completion verification gate.
    #[serde(rename = "S7")]
    Verify,
}

impl LoopStep {
    /// Short step code, e.g. `S1`.
    pub fn code(&self) -> &'static str {
        match self {
            LoopStep::PickIssue => "S1",
            LoopStep::SpecReady => "S2",
            LoopStep::ImplementPrep => "S3",
            LoopStep::Review => "S4",
            LoopStep::Merge => "S5",
            LoopStep::Verify => "S7",
        }
    }

    /// Human-readable step label.
    pub fn label(&self) -> &'static str {
        match self {
            LoopStep::PickIssue => "Pick issue",
            LoopStep::SpecReady => "Mark spec ready",
            LoopStep::ImplementPrep => "Prepare implementation",
            LoopStep::Review => "Review",
            LoopStep::Merge => "Merge",
            LoopStep::Verify => "Verify",
        }
    }
}

impl fmt::Display for LoopStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.label())
    }
}

/// Read-only snapshot of an issue row.
///
/// `status` is kept as the raw persisted string so that missing and unknown
/// values reach the resolver instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueData {
    /// Issue identifier.
    pub id: String,
    /// Raw persisted status.
    #[serde(default)]
    pub status: Option<String>,
    /// URL of the mirrored GitHub issue.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Identifier of the active specification draft.
    #[serde(default)]
    pub current_draft_id: Option<String>,
    /// External synchronization state of the draft.
    #[serde(default)]
    pub handoff_state: Option<String>,
}

impl IssueData {
    /// Creates an issue snapshot with the given raw status and no links.
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Returns the issue with a GitHub URL attached.
    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    /// Returns the issue pointing at the given draft.
    pub fn with_draft_id(mut self, draft_id: impl Into<String>) -> Self {
        self.current_draft_id = Some(draft_id.into());
        self
    }

    /// Returns the issue with the given handoff state.
    pub fn with_handoff_state(mut self, state: impl Into<String>) -> Self {
        self.handoff_state = Some(state.into());
        self
    }

    /// Parses the persisted status, if present and recognized.
    pub fn parsed_status(&self) -> Option<Status> {
        self.status.as_deref().and_then(Status::parse)
    }

    /// Whether a non-blank GitHub URL is attached.
    pub fn has_github_link(&self) -> bool {
        self.github_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Whether the draft handoff has been synchronized externally.
    pub fn is_handoff_synced(&self) -> bool {
        self.handoff_state
            .as_deref()
            .is_some_and(|state| SYNCED_HANDOFF_STATES.contains(&state.trim()))
    }
}

/// Snapshot of a specification draft row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DraftData {
    /// Draft identifier.
    pub id: String,
    /// Result of the latest validation run.
    #[serde(default)]
    pub last_validation_status: Option<ValidationStatus>,
    /// Opaque draft payload.
    #[serde(default)]
    pub issue_json: Option<serde_json::Value>,
}

impl DraftData {
    /// Creates a draft that has never been validated.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the draft with the given validation status.
    pub fn with_validation(mut self, status: ValidationStatus) -> Self {
        self.last_validation_status = Some(status);
        self
    }

    /// Validation status, treating an absent value as `Unknown`.
    pub fn validation(&self) -> ValidationStatus {
        self.last_validation_status.unwrap_or_default()
    }
}
