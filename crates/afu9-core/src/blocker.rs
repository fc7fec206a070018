// Rust guideline compliant 2026-10-16

//! Blocker taxonomy for the AFU-9 loop.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable reason why no next step is currently available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockerCode {
    /// No GitHub issue mirror is attached.
    NoGithubLink,
    /// No specification draft exists where one is required.
    NoDraft,
    /// A draft exists but has not been committed and validated.
    NoCommittedDraft,
    /// A draft exists and failed validation.
    DraftInvalid,
    /// The resource is locked by a concurrent operation.
    Locked,
    /// The status is missing, empty or unrecognized.
    UnknownState,
    /// An internal consistency rule was violated.
    InvariantViolation,
}

impl BlockerCode {
    /// Every blocker code.
    pub const ALL: [BlockerCode; 7] = [
        BlockerCode::NoGithubLink,
        BlockerCode::NoDraft,
        BlockerCode::NoCommittedDraft,
        BlockerCode::DraftInvalid,
        BlockerCode::Locked,
        BlockerCode::UnknownState,
        BlockerCode::InvariantViolation,
    ];

    /// Returns the wire code, e.g. `NO_GITHUB_LINK`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockerCode::NoGithubLink => "NO_GITHUB_LINK",
            BlockerCode::NoDraft => "NO_DRAFT",
            BlockerCode::NoCommittedDraft => "NO_COMMITTED_DRAFT",
            BlockerCode::DraftInvalid => "DRAFT_INVALID",
            BlockerCode::Locked => "LOCKED",
            BlockerCode::UnknownState => "UNKNOWN_STATE",
            BlockerCode::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }

    /// Returns the static description for this code.
    pub fn description(&self) -> &'static str {
        get_blocker_description(*self)
    }
}

impl fmt::Display for BlockerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the fixed human-readable description of a blocker code.
pub fn get_blocker_description(code: BlockerCode) -> &'static str {
    match code {
        BlockerCode::NoGithubLink => "No GitHub issue is linked to this issue",
        BlockerCode::NoDraft => "No specification draft exists for this issue",
        BlockerCode::NoCommittedDraft => {
            "The specification draft has not been committed and validated"
        }
        BlockerCode::DraftInvalid => "The specification draft failed validation",
        BlockerCode::Locked => "The issue is locked by a concurrent operation",
        BlockerCode::UnknownState => "The issue status is missing, empty or unrecognized",
        BlockerCode::InvariantViolation => "An internal consistency rule was violated",
    }
}
