// Rust guideline compliant 2026-10-16

//! Implementation of the `afu9 path` command.

use crate::output::OutputFormatter;
use afu9_app::parse_status;
use afu9_core::LifecycleGraph;
use anyhow::Result;

/// Prints the shortest legal path between two statuses.
///
/// # Errors
///
/// Returns an error if either status cannot be parsed.
pub fn execute(from: String, to: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let from = parse_status(&from)?;
    let to = parse_status(&to)?;

    let graph = LifecycleGraph::new();
    let path = graph.forward_path(from, to);
    println!("{}", formatter.format_path(from, to, path.as_deref()));
    Ok(())
}
