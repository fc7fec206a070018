// Rust guideline compliant 2026-10-16

//! Shared application services for the AFU-9 loop.
//!
//! This crate wraps the pure lifecycle core with the use cases its callers
//! need: aggregate loop status over many issues, transition checks with
//! stable error codes, and standardized response envelopes.

pub mod error;
pub mod fsm;
pub mod response;
pub mod status;

pub use error::{AppError, ErrorCode, Result};
pub use fsm::{check_transition, parse_status, TransitionDecision};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use status::{
    evaluate_issue, loop_status, BlockerCount, IssueLoopStatus, LoopStatusOptions,
    LoopStatusReport,
};
