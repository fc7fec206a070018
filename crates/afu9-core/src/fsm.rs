// Rust guideline compliant 2026-10-16

//! Finite State Machine module for status transitions.
//!
//! The lifecycle graph is fixed:
//!
//! - CREATED → SPEC_READY → IMPLEMENTING_PREP → REVIEW_READY → DONE
//! - Any non-terminal status → HOLD
//! - DONE and HOLD are terminal: nothing leaves them
//! - Self transitions are never valid

use crate::{Error, Result, Status};

/// Forward adjacency table of the lifecycle.
///
/// Each non-terminal status lists its single forward successor. The HOLD
/// edges are implied for every entry here and are not repeated.
pub const TRANSITIONS: &[(Status, &[Status])] = &[
    (Status::Created, &[Status::SpecReady]),
    (Status::SpecReady, &[Status::ImplementingPrep]),
    (Status::ImplementingPrep, &[Status::ReviewReady]),
    (Status::ReviewReady, &[Status::Done]),
];

/// Returns whether moving an issue from `from` to `to` is legal.
pub fn is_valid_transition(from: Status, to: Status) -> bool {
    if from == to || from.is_terminal() {
        return false;
    }

    if to == Status::Hold {
        return true;
    }

    forward_targets(from).contains(&to)
}

fn forward_targets(from: Status) -> &'static [Status] {
    TRANSITIONS
        .iter()
        .find(|(status, _)| *status == from)
        .map(|(_, targets)| *targets)
        .unwrap_or(&[])
}

impl Status {
    /// Whether no transition may leave this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Done | Status::Hold)
    }

    /// Returns the next status in forward order, if any.
    pub fn next_forward(&self) -> Option<Status> {
        forward_targets(*self).first().copied()
    }

    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Returns
    ///
    /// Ok if the transition is valid, Err with descriptive message otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target equals the current status
    /// - The current status is terminal
    /// - The target is not the adjacent forward status or HOLD
    pub fn can_transition_to(&self, target: Status) -> Result<()> {
        if is_valid_transition(*self, target) {
            return Ok(());
        }

        let reason = if *self == target {
            format!("{} is already the current status", self)
        } else if self.is_terminal() {
            format!("Cannot leave terminal status {} (requested {})", self, target)
        } else {
            format!("Cannot transition from {} to {}", self, target)
        };

        Err(Error::InvalidTransition(reason))
    }

    /// Returns the list of valid target states for the current status.
    ///
    /// Forward successors come first, followed by HOLD when reachable.
    pub fn valid_transitions(&self) -> Vec<Status> {
        if self.is_terminal() {
            return Vec::new();
        }

        let mut transitions = forward_targets(*self).to_vec();
        transitions.push(Status::Hold);
        transitions
    }
}
