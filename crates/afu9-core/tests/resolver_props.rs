// Rust guideline compliant 2026-10-16

//! Property-based tests for next-step resolution.
//!
//! These tests generate arbitrary issue/draft combinations, including
//! garbage statuses, and check the structural guarantees of the resolver.

use afu9_core::{resolve_next_step, DraftData, IssueData, Status, ValidationStatus};
use proptest::option;
use proptest::prelude::*;

fn arb_raw_status() -> impl Strategy<Value = Option<String>> {
    option::of(prop_oneof![
        Just("CREATED".to_string()),
        Just("SPEC_READY".to_string()),
        Just("IMPLEMENTING_PREP".to_string()),
        Just("REVIEW_READY".to_string()),
        Just("DONE".to_string()),
        Just("HOLD".to_string()),
        Just("MERGE_READY".to_string()),
        Just(String::new()),
        "[A-Za-z_ ]{0,12}",
    ])
}

fn arb_validation() -> impl Strategy<Value = Option<ValidationStatus>> {
    option::of(prop_oneof![
        Just(ValidationStatus::Valid),
        Just(ValidationStatus::Invalid),
        Just(ValidationStatus::Unknown),
    ])
}

fn arb_issue() -> impl Strategy<Value = IssueData> {
    (
        arb_raw_status(),
        option::of(prop_oneof![
            Just("https://github.com/o/r/issues/1".to_string()),
            Just("   ".to_string()),
        ]),
        option::of(prop_oneof![Just("D-1".to_string()), Just("D-2".to_string())]),
        option::of(prop_oneof![
            Just("NOT_SENT".to_string()),
            Just("SYNCED".to_string()),
            Just("SYNCHRONIZED".to_string()),
        ]),
    )
        .prop_map(|(status, github_url, current_draft_id, handoff_state)| IssueData {
            id: "I-1".to_string(),
            status,
            github_url,
            current_draft_id,
            handoff_state,
        })
}

fn arb_draft() -> impl Strategy<Value = Option<DraftData>> {
    option::of((arb_validation(), prop_oneof![Just("D-1"), Just("D-2")]).prop_map(
        |(validation, id)| DraftData {
            id: id.to_string(),
            last_validation_status: validation,
            issue_json: Some(serde_json::json!({ "title": "draft" })),
        },
    ))
}

proptest! {
    /// Every result is ready, blocked, or the HOLD pause, never a mix.
    #[test]
    fn prop_result_shape(issue in arb_issue(), draft in arb_draft()) {
        let resolution = resolve_next_step(&issue, draft.as_ref());

        prop_assert_eq!(resolution.is_blocked(), resolution.blocker_code().is_some());
        if resolution.is_blocked() {
            prop_assert!(resolution.step().is_none());
            prop_assert!(resolution.blocker_message().is_some());
        }
        if resolution.is_paused() {
            prop_assert_eq!(issue.parsed_status(), Some(Status::Hold));
        }
    }

    /// Resolution never mutates its inputs and is deterministic.
    #[test]
    fn prop_pure_and_deterministic(issue in arb_issue(), draft in arb_draft()) {
        let issue_before = issue.clone();
        let draft_before = draft.clone();

        let first = resolve_next_step(&issue, draft.as_ref());
        let second = resolve_next_step(&issue.clone(), draft.clone().as_ref());

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(issue, issue_before);
        prop_assert_eq!(draft, draft_before);
    }

    /// Unparseable statuses always block with UNKNOWN_STATE.
    #[test]
    fn prop_unknown_status_blocks(issue in arb_issue(), draft in arb_draft()) {
        if issue.parsed_status().is_none() {
            let resolution = resolve_next_step(&issue, draft.as_ref());
            prop_assert_eq!(
                resolution.blocker_code(),
                Some(afu9_core::BlockerCode::UnknownState)
            );
        }
    }

    /// Statuses past CREATED never depend on the draft or the GitHub link.
    #[test]
    fn prop_post_created_ignores_draft(issue in arb_issue(), draft in arb_draft()) {
        if let Some(status) = issue.parsed_status() {
            if status != Status::Created {
                let bare = IssueData::new(issue.id.clone(), status.as_str());
                prop_assert_eq!(
                    resolve_next_step(&issue, draft.as_ref()),
                    resolve_next_step(&bare, None)
                );
            }
        }
    }
}
