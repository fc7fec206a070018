// Rust guideline compliant 2026-10-16

//! Implementation of the `afu9 status` command.

use crate::output::OutputFormatter;
use crate::terminal::print_warning;
use afu9_app::{loop_status, LoopStatusOptions};
use afu9_core::{Config, SnapshotStore};
use anyhow::{Context, Result};
use std::path::Path;

/// Evaluates every issue in a snapshot and prints the loop status report.
///
/// # Arguments
///
/// * `issues` - Path to the issues JSONL snapshot
/// * `drafts` - Optional path to the drafts JSONL snapshot
/// * `config` - Effective configuration
/// * `formatter` - Output formatter
/// * `use_color` - Whether warnings are colored
///
/// # Errors
///
/// Returns an error if a snapshot cannot be read or contains duplicate IDs.
pub fn execute(
    issues: &Path,
    drafts: Option<&Path>,
    config: &Config,
    formatter: &dyn OutputFormatter,
    use_color: bool,
) -> Result<()> {
    let issues = SnapshotStore::new(issues)
        .load_issues()
        .context("Failed to load issue snapshot")?;
    let drafts = match drafts {
        Some(path) => SnapshotStore::new(path)
            .load_drafts()
            .context("Failed to load draft snapshot")?,
        None => Vec::new(),
    };

    if issues.is_empty() {
        print_warning("Issue snapshot is empty", use_color);
    }

    let options = LoopStatusOptions {
        parallel_threshold: config.parallel_threshold,
    };
    let report = loop_status(&issues, &drafts, options);
    println!("{}", formatter.format_report(&report));
    Ok(())
}
