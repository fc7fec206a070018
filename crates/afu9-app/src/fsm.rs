// Rust guideline compliant 2026-10-16

//! Transition checks for status changes requested by callers.

use crate::error::{AppError, Result};
use afu9_core::Status;
use serde::Serialize;

/// An accepted status change, in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionDecision {
    /// Current status.
    pub from: Status,
    /// Requested status.
    pub to: Status,
}

/// Parses a caller-supplied status string.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the value is empty or unknown.
pub fn parse_status(value: &str) -> Result<Status> {
    Status::parse(value)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid status: {:?}", value)))
}

/// Decides whether a requested status change may be persisted.
///
/// # Arguments
///
/// * `from` - Raw current status
/// * `to` - Raw requested status
///
/// # Returns
///
/// The canonical decision when the change is legal.
///
/// # Errors
///
/// Returns an error if:
/// - Either status cannot be parsed (`ErrorCode::InvalidInput`)
/// - The lifecycle does not allow the change (`ErrorCode::InvalidTransition`)
pub fn check_transition(from: &str, to: &str) -> Result<TransitionDecision> {
    let from = parse_status(from)?;
    let to = parse_status(to)?;

    if let Err(err) = from.can_transition_to(to) {
        tracing::info!(%from, %to, "rejected status transition");
        return Err(err.into());
    }

    tracing::debug!(%from, %to, "accepted status transition");
    Ok(TransitionDecision { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn test_accepts_adjacent_forward_move() {
        let decision = check_transition("CREATED", "SPEC_READY").unwrap();
        assert_eq!(decision.from, Status::Created);
        assert_eq!(decision.to, Status::SpecReady);
    }

    #[test]
    fn test_canonicalizes_aliases() {
        let decision = check_transition("IMPLEMENTING", "MERGE_READY").unwrap();
        assert_eq!(decision.from, Status::ImplementingPrep);
        assert_eq!(decision.to, Status::ReviewReady);
    }

    #[test]
    fn test_rejects_skip_as_conflict() {
        let err = check_transition("CREATED", "DONE").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidTransition);
        assert_eq!(err.code().http_status(), 409);
    }

    #[test]
    fn test_rejects_unknown_status_as_bad_request() {
        let err = check_transition("CREATED", "SHIPPED").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert!(err.to_string().contains("SHIPPED"));

        let err = check_transition("", "HOLD").unwrap_err();
        assert_eq!(err.code().http_status(), 400);
    }

    #[test]
    fn test_hold_from_any_open_status() {
        for from in ["CREATED", "SPEC_READY", "IMPLEMENTING_PREP", "REVIEW_READY"] {
            assert!(check_transition(from, "HOLD").is_ok(), "{}", from);
        }
        assert!(check_transition("DONE", "HOLD").is_err());
        assert!(check_transition("HOLD", "HOLD").is_err());
    }
}
