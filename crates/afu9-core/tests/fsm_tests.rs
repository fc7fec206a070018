// Rust guideline compliant 2026-10-16

//! Unit tests for the FSM module.
//!
//! These tests validate specific examples, edge cases, and error conditions
//! for status transitions.

use afu9_core::{is_valid_transition, Status};

#[test]
fn test_created_to_spec_ready() {
    assert!(
        is_valid_transition(Status::Created, Status::SpecReady),
        "Should allow CREATED → SPEC_READY"
    );
}

#[test]
fn test_full_forward_chain() {
    let chain = [
        Status::Created,
        Status::SpecReady,
        Status::ImplementingPrep,
        Status::ReviewReady,
        Status::Done,
    ];
    for pair in chain.windows(2) {
        assert!(
            is_valid_transition(pair[0], pair[1]),
            "Should allow {} → {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_skipping_states_is_rejected() {
    assert!(
        !is_valid_transition(Status::Created, Status::Done),
        "Should reject CREATED → DONE (skips states)"
    );
    assert!(!is_valid_transition(Status::Created, Status::ImplementingPrep));
    assert!(!is_valid_transition(Status::SpecReady, Status::ReviewReady));
}

#[test]
fn test_backward_transitions_are_rejected() {
    assert!(!is_valid_transition(Status::SpecReady, Status::Created));
    assert!(!is_valid_transition(Status::ReviewReady, Status::ImplementingPrep));
}

#[test]
fn test_terminal_states_are_absorbing() {
    for target in Status::ALL {
        assert!(
            !is_valid_transition(Status::Done, target),
            "Should reject DONE → {}",
            target
        );
        assert!(
            !is_valid_transition(Status::Hold, target),
            "Should reject HOLD → {}",
            target
        );
    }
}

#[test]
fn test_self_transitions_are_rejected() {
    for status in Status::ALL {
        assert!(
            !is_valid_transition(status, status),
            "Should reject {} → {}",
            status,
            status
        );
    }
}

#[test]
fn test_hold_reachable_from_non_terminal() {
    for status in [
        Status::Created,
        Status::SpecReady,
        Status::ImplementingPrep,
        Status::ReviewReady,
    ] {
        assert!(
            is_valid_transition(status, Status::Hold),
            "Should allow {} → HOLD",
            status
        );
    }
    assert!(!is_valid_transition(Status::Done, Status::Hold));
}

#[test]
fn test_can_transition_to_messages() {
    let err = Status::Created
        .can_transition_to(Status::Done)
        .unwrap_err()
        .to_string();
    assert!(err.contains("Cannot transition from CREATED to DONE"), "{}", err);

    let err = Status::Done
        .can_transition_to(Status::Created)
        .unwrap_err()
        .to_string();
    assert!(err.contains("terminal"), "{}", err);

    let err = Status::SpecReady
        .can_transition_to(Status::SpecReady)
        .unwrap_err()
        .to_string();
    assert!(err.contains("already the current status"), "{}", err);

    assert!(Status::SpecReady.can_transition_to(Status::Hold).is_ok());
}

#[test]
fn test_valid_transitions_lists() {
    assert_eq!(
        Status::Created.valid_transitions(),
        vec![Status::SpecReady, Status::Hold]
    );
    assert_eq!(
        Status::ReviewReady.valid_transitions(),
        vec![Status::Done, Status::Hold]
    );
    assert!(Status::Done.valid_transitions().is_empty());
    assert!(Status::Hold.valid_transitions().is_empty());
}

#[test]
fn test_terminal_set() {
    let terminal: Vec<_> = Status::ALL.into_iter().filter(Status::is_terminal).collect();
    assert_eq!(terminal, vec![Status::Done, Status::Hold]);
}
