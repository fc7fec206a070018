// Rust guideline compliant 2026-10-16

//! Snapshot reading for issue and draft exports.
//!
//! Snapshots are JSONL files with one issue or draft row per line. Lines are
//! parsed independently so a malformed record is skipped (and reported
//! through `tracing`) without losing the rows after it.

use crate::{DraftData, Error, IssueData, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Read-only access to a JSONL snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store over the given JSONL file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every issue row in the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - Two rows share the same issue ID
    pub fn load_issues(&self) -> Result<Vec<IssueData>> {
        let issues: Vec<IssueData> = self.load_records("issue")?;
        ensure_unique("issue", issues.iter().map(|issue| issue.id.as_str()))?;
        Ok(issues)
    }

    /// Loads every draft row in the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - Two rows share the same draft ID
    pub fn load_drafts(&self) -> Result<Vec<DraftData>> {
        let drafts: Vec<DraftData> = self.load_records("draft")?;
        ensure_unique("draft", drafts.iter().map(|draft| draft.id.as_str()))?;
        Ok(drafts)
    }

    fn load_records<T: DeserializeOwned>(&self, kind: &'static str) -> Result<Vec<T>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), kind, "snapshot file missing");
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<T>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(
                        kind,
                        line = index + 1,
                        error = %e,
                        "skipping malformed snapshot record"
                    );
                }
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            kind,
            loaded = records.len(),
            skipped,
            "snapshot loaded"
        );
        Ok(records)
    }
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
