// Rust guideline compliant 2026-10-16

//! Implementation of the `afu9 next-step` command.

use crate::output::OutputFormatter;
use afu9_core::{resolve_next_step, DraftData, IssueData};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Resolves the next step for one issue read from a JSON file.
///
/// # Arguments
///
/// * `issue` - Path to the issue JSON object
/// * `draft` - Optional path to the draft JSON object
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed.
pub fn execute(
    issue: &Path,
    draft: Option<&Path>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let issue: IssueData = read_json(issue)?;
    let draft: Option<DraftData> = draft.map(read_json::<DraftData>).transpose()?;

    let resolution = resolve_next_step(&issue, draft.as_ref());
    tracing::debug!(
        issue = %issue.id,
        blocked = resolution.is_blocked(),
        "resolved next step"
    );

    println!("{}", formatter.format_resolution(&issue.id, &resolution));
    Ok(())
}
