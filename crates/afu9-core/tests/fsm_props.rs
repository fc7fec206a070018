// Rust guideline compliant 2026-10-16

//! Property-based tests for the FSM module.
//!
//! These tests check that the transition predicate, the per-status helpers
//! and the lifecycle graph describe the same set of edges.

use afu9_core::{is_valid_transition, LifecycleGraph, Status};
use proptest::prelude::*;

/// Generates arbitrary Status values.
fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Created),
        Just(Status::SpecReady),
        Just(Status::ImplementingPrep),
        Just(Status::ReviewReady),
        Just(Status::Done),
        Just(Status::Hold),
    ]
}

proptest! {
    /// `can_transition_to` succeeds exactly when `is_valid_transition` holds.
    #[test]
    fn prop_can_transition_matches_predicate(from in arb_status(), to in arb_status()) {
        prop_assert_eq!(
            from.can_transition_to(to).is_ok(),
            is_valid_transition(from, to)
        );
    }

    /// `valid_transitions` lists exactly the legal targets.
    #[test]
    fn prop_valid_transitions_consistency(from in arb_status(), to in arb_status()) {
        prop_assert_eq!(
            from.valid_transitions().contains(&to),
            is_valid_transition(from, to)
        );
    }

    /// The graph has an edge exactly where the predicate allows one.
    #[test]
    fn prop_graph_matches_predicate(from in arb_status(), to in arb_status()) {
        let graph = LifecycleGraph::new();
        prop_assert_eq!(graph.has_edge(from, to), is_valid_transition(from, to));
    }

    /// Nothing leaves a terminal status and no status loops to itself.
    #[test]
    fn prop_terminal_and_self(from in arb_status(), to in arb_status()) {
        if from.is_terminal() || from == to {
            prop_assert!(!is_valid_transition(from, to));
        }
    }

    /// Legal non-HOLD transitions always move exactly one step forward.
    #[test]
    fn prop_forward_moves_are_adjacent(from in arb_status(), to in arb_status()) {
        if is_valid_transition(from, to) && to != Status::Hold {
            prop_assert_eq!(from.next_forward(), Some(to));
        }
    }
}
