// Rust guideline compliant 2026-10-16

//! Implementation of the `afu9 blockers` command.

use crate::output::OutputFormatter;
use afu9_core::BlockerCode;

/// Prints every blocker code with its description.
pub fn execute(formatter: &dyn OutputFormatter) {
    println!("{}", formatter.format_blockers(&BlockerCode::ALL));
}
