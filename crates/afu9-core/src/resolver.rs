// Rust guideline compliant 2026-10-16

//! Next-step resolution for the AFU-9 loop.
//!
//! [`resolve_next_step`] is a pure, total function: it reads an issue
//! snapshot and an optional draft, never mutates them, never fails, and
//! always returns exactly one [`StepResolution`].

use crate::{BlockerCode, DraftData, IssueData, LoopStep, Status, ValidationStatus};
use serde::Serialize;

/// Result of resolving the next step for an issue.
///
/// Construct through [`StepResolution::ready`], [`StepResolution::blocked`]
/// or [`StepResolution::paused`]; each keeps `blocked` and `blocker_code`
/// in agreement and clears `step` whenever the issue is blocked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResolution {
    step: Option<LoopStep>,
    blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocker_code: Option<BlockerCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocker_message: Option<String>,
}

impl StepResolution {
    /// The issue may proceed with `step`.
    pub fn ready(step: LoopStep) -> Self {
        Self {
            step: Some(step),
            blocked: false,
            blocker_code: None,
            blocker_message: None,
        }
    }

    /// The issue cannot proceed.
    pub fn blocked(code: BlockerCode, message: impl Into<String>) -> Self {
        Self {
            step: None,
            blocked: true,
            blocker_code: Some(code),
            blocker_message: Some(message.into()),
        }
    }

    /// The issue is deliberately paused: no step, but not blocked.
    pub fn paused(message: impl Into<String>) -> Self {
        Self {
            step: None,
            blocked: false,
            blocker_code: None,
            blocker_message: Some(message.into()),
        }
    }

    /// The next available step, if any.
    pub fn step(&self) -> Option<LoopStep> {
        self.step
    }

    /// Whether progress is blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Blocker code, present iff blocked.
    pub fn blocker_code(&self) -> Option<BlockerCode> {
        self.blocker_code
    }

    /// Blocker explanation, or the informational message of a pause.
    pub fn blocker_message(&self) -> Option<&str> {
        self.blocker_message.as_deref()
    }

    /// Whether the issue is neither blocked nor offered a step.
    pub fn is_paused(&self) -> bool {
        !self.blocked && self.step.is_none()
    }
}

/// Resolves the next step for an issue.
///
/// Rules are evaluated in a fixed priority order and the first match wins:
///
/// 1. Missing or unrecognized status blocks with `UNKNOWN_STATE`. Surrounding
///    whitespace is ignored when matching, and the message echoes the raw value.
/// 2. `CREATED` without a current draft needs a GitHub link (`NO_GITHUB_LINK`),
///    then offers S1.
/// 3. `CREATED` with a current draft is gated on the draft: it must be
///    supplied (`NO_GITHUB_LINK` when the link is also missing, otherwise
///    `NO_DRAFT`), match the issue's reference
///    (`INVARIANT_VIOLATION`), be validated or synced (`NO_COMMITTED_DRAFT`),
///    not be invalid (`DRAFT_INVALID`), and once valid it offers S2.
/// 4. `SPEC_READY` → S3, `IMPLEMENTING_PREP` → S4, `REVIEW_READY` → S5,
///    `DONE` → S7.
/// 5. `HOLD` offers no step and is not blocked.
///
/// # Arguments
///
/// * `issue` - Snapshot of the issue row
/// * `draft` - Snapshot of the issue's current draft, when loaded
///
/// # Returns
///
/// The resolution for this issue.
pub fn resolve_next_step(issue: &IssueData, draft: Option<&DraftData>) -> StepResolution {
    let raw = issue.status.as_deref().unwrap_or("");
    if raw.trim().is_empty() {
        return StepResolution::blocked(
            BlockerCode::UnknownState,
            "Issue status is missing or invalid",
        );
    }

    let status = match Status::parse(raw) {
        Some(status) => status,
        None => {
            return StepResolution::blocked(
                BlockerCode::UnknownState,
                format!("Unknown issue status: {}", raw),
            );
        }
    };

    match status {
        Status::Created => resolve_created(issue, draft),
        Status::SpecReady => StepResolution::ready(LoopStep::ImplementPrep),
        Status::ImplementingPrep => StepResolution::ready(LoopStep::Review),
        Status::ReviewReady => StepResolution::ready(LoopStep::Merge),
        Status::Done => StepResolution::ready(LoopStep::Verify),
        Status::Hold => {
            StepResolution::paused("Issue is in terminal state HOLD; awaiting human action")
        }
    }
}

fn resolve_created(issue: &IssueData, draft: Option<&DraftData>) -> StepResolution {
    let draft_id = match issue.current_draft_id.as_deref() {
        Some(id) => id,
        None => {
            if !issue.has_github_link() {
                return no_github_link();
            }
            return StepResolution::ready(LoopStep::PickIssue);
        }
    };

    let draft = match draft {
        Some(draft) => draft,
        None if !issue.has_github_link() => return no_github_link(),
        None => {
            return StepResolution::blocked(
                BlockerCode::NoDraft,
                format!("Draft {} referenced by issue was not found", draft_id),
            );
        }
    };

    if draft.id != draft_id {
        return StepResolution::blocked(
            BlockerCode::InvariantViolation,
            format!(
                "Supplied draft {} does not match current draft {}",
                draft.id, draft_id
            ),
        );
    }

    let validation = draft.validation();
    if validation != ValidationStatus::Valid && !issue.is_handoff_synced() {
        return no_committed_draft();
    }

    match validation {
        ValidationStatus::Invalid => StepResolution::blocked(
            BlockerCode::DraftInvalid,
            "Draft validation failed; fix the draft before marking spec ready",
        ),
        ValidationStatus::Valid => StepResolution::ready(LoopStep::SpecReady),
        // Synced but never validated.
        ValidationStatus::Unknown => no_committed_draft(),
    }
}

fn no_github_link() -> StepResolution {
    StepResolution::blocked(
        BlockerCode::NoGithubLink,
        "Issue must be linked to a GitHub issue before it can be picked",
    )
}

fn no_committed_draft() -> StepResolution {
    StepResolution::blocked(
        BlockerCode::NoCommittedDraft,
        "Draft must be committed and validated before marking spec ready",
    )
}
