// Rust guideline compliant 2026-10-16

//! Command implementations for the AFU-9 CLI.

pub mod blockers;
pub mod next_step;
pub mod path;
pub mod status;
pub mod transition;
