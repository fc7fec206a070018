// Rust guideline compliant 2026-10-16

//! Implementation of the `afu9 transition` and `afu9 transitions` commands.

use crate::output::OutputFormatter;
use afu9_app::{check_transition, parse_status, ErrorCode};
use anyhow::Result;

/// Checks whether a status change is legal and prints the decision.
///
/// # Returns
///
/// `true` if the transition is allowed, `false` if it was rejected.
///
/// # Errors
///
/// Returns an error if either status cannot be parsed.
pub fn execute(from: String, to: String, formatter: &dyn OutputFormatter) -> Result<bool> {
    let from_status = parse_status(&from)?;
    let to_status = parse_status(&to)?;

    match check_transition(&from, &to) {
        Ok(decision) => {
            println!(
                "{}",
                formatter.format_transition(decision.from, decision.to, true, None)
            );
            Ok(true)
        }
        Err(err) if err.code() == ErrorCode::InvalidTransition => {
            let reason = err.to_string();
            println!(
                "{}",
                formatter.format_transition(from_status, to_status, false, Some(&reason))
            );
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

/// Prints the statuses reachable in one step from `status`.
///
/// # Errors
///
/// Returns an error if the status cannot be parsed.
pub fn list_targets(status: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let status = parse_status(&status)?;
    let targets = status.valid_transitions();
    println!("{}", formatter.format_targets(status, &targets));
    Ok(())
}
