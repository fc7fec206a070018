// Rust guideline compliant 2026-10-16

//! Unit tests for error types and messages.

use afu9_core::{get_blocker_description, BlockerCode, Error};

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.starts_with("IO error"), "{}", msg);
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let msg = Error::Json(json_err).to_string();
    assert!(msg.starts_with("JSON error"), "{}", msg);
}

#[test]
fn test_unknown_status_formatting() {
    let error = Error::UnknownStatus("BOGUS".to_string());
    assert_eq!(error.to_string(), "Unknown issue status: BOGUS");
}

#[test]
fn test_invalid_transition_formatting() {
    let error = Error::InvalidTransition("Cannot transition from CREATED to DONE".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid state transition: Cannot transition from CREATED to DONE"
    );
}

#[test]
fn test_duplicate_id_formatting() {
    let error = Error::DuplicateId {
        kind: "draft",
        id: "D-1".to_string(),
    };
    assert_eq!(error.to_string(), "Duplicate draft ID in snapshot: D-1");
}

#[test]
fn test_config_error_formatting() {
    let error = Error::Config("parallel_threshold must be greater than 0".to_string());
    assert!(error.to_string().contains("parallel_threshold"));
}

#[test]
fn test_blocker_descriptions_are_static() {
    for code in BlockerCode::ALL {
        let first = get_blocker_description(code);
        let second = get_blocker_description(code);
        assert_eq!(first, second);
        assert_eq!(code.description(), first);
    }
}

#[test]
fn test_reserved_codes_have_descriptions() {
    assert!(get_blocker_description(BlockerCode::Locked).contains("locked"));
    assert!(get_blocker_description(BlockerCode::InvariantViolation).contains("consistency"));
}
