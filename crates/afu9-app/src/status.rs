// Rust guideline compliant 2026-10-16

//! Aggregate loop status over a batch of issues.

use afu9_core::{resolve_next_step, BlockerCode, DraftData, IssueData, StepResolution};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Options for batch evaluation.
#[derive(Debug, Clone, Copy)]
pub struct LoopStatusOptions {
    /// Batch size above which evaluation runs on the rayon pool.
    pub parallel_threshold: usize,
}

impl LoopStatusOptions {
    /// Returns true when a batch of `len` issues exceeds the threshold.
    pub fn runs_in_parallel(&self, len: usize) -> bool {
        len > self.parallel_threshold
    }
}

impl Default for LoopStatusOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 1_000,
        }
    }
}

/// Resolution for a single issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueLoopStatus {
    /// Issue identifier.
    pub issue_id: String,
    /// Raw persisted status.
    pub status: Option<String>,
    /// Resolved next step.
    pub resolution: StepResolution,
}

/// Number of issues blocked by a given code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockerCount {
    /// Blocker code.
    pub code: BlockerCode,
    /// Number of issues.
    pub count: usize,
}

/// Loop status for a batch of issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoopStatusReport {
    /// Per-issue results, in input order.
    pub issues: Vec<IssueLoopStatus>,
    /// Total issues evaluated.
    pub total: usize,
    /// Issues with a next step available.
    pub ready: usize,
    /// Issues that are blocked.
    pub blocked: usize,
    /// Issues paused without a blocker.
    pub paused: usize,
    /// Blocked issues grouped by code, ordered by code.
    pub blockers: Vec<BlockerCount>,
}

/// Resolves one issue against the drafts loaded alongside it.
///
/// The draft named by `current_draft_id` is looked up in `drafts`; a missing
/// entry is passed to the resolver as no draft.
pub fn evaluate_issue(issue: &IssueData, drafts: &HashMap<&str, &DraftData>) -> IssueLoopStatus {
    let draft = issue
        .current_draft_id
        .as_deref()
        .and_then(|id| drafts.get(id).copied());

    IssueLoopStatus {
        issue_id: issue.id.clone(),
        status: issue.status.clone(),
        resolution: resolve_next_step(issue, draft),
    }
}

/// Computes the loop status of every issue in a snapshot.
///
/// # Arguments
///
/// * `issues` - Issue rows to evaluate
/// * `drafts` - Draft rows available for lookup
/// * `options` - Evaluation options
///
/// # Returns
///
/// A report with per-issue resolutions and summary counts.
pub fn loop_status(
    issues: &[IssueData],
    drafts: &[DraftData],
    options: LoopStatusOptions,
) -> LoopStatusReport {
    let by_id: HashMap<&str, &DraftData> =
        drafts.iter().map(|draft| (draft.id.as_str(), draft)).collect();

    let parallel = options.runs_in_parallel(issues.len());
    tracing::debug!(
        issues = issues.len(),
        drafts = drafts.len(),
        parallel,
        "evaluating loop status"
    );

    let results: Vec<IssueLoopStatus> = if parallel {
        issues
            .par_iter()
            .map(|issue| evaluate_issue(issue, &by_id))
            .collect()
    } else {
        issues
            .iter()
            .map(|issue| evaluate_issue(issue, &by_id))
            .collect()
    };

    summarize(results)
}

fn summarize(issues: Vec<IssueLoopStatus>) -> LoopStatusReport {
    let mut ready = 0;
    let mut blocked = 0;
    let mut paused = 0;
    let mut by_code: BTreeMap<BlockerCode, usize> = BTreeMap::new();

    for entry in &issues {
        let resolution = &entry.resolution;
        if let Some(code) = resolution.blocker_code() {
            blocked += 1;
            *by_code.entry(code).or_default() += 1;
        } else if resolution.step().is_some() {
            ready += 1;
        } else {
            paused += 1;
        }
    }

    LoopStatusReport {
        total: issues.len(),
        issues,
        ready,
        blocked,
        paused,
        blockers: by_code
            .into_iter()
            .map(|(code, count)| BlockerCount { code, count })
            .collect(),
    }
}
