// Rust guideline compliant 2026-10-16

//! Output formatting module for the AFU-9 CLI.
//!
//! This module renders resolutions, transition decisions and loop status
//! reports in JSON, table, or plain text form.

use crate::terminal::wrap_text;
use afu9_app::LoopStatusReport;
use afu9_core::{BlockerCode, OutputFormat, Status, StepResolution};
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for rendering command results.
pub trait OutputFormatter {
    /// Formats the next-step resolution of one issue.
    fn format_resolution(&self, issue_id: &str, resolution: &StepResolution) -> String;

    /// Formats the outcome of a transition check.
    fn format_transition(&self, from: Status, to: Status, allowed: bool, reason: Option<&str>)
        -> String;

    /// Formats the legal targets of a status.
    fn format_targets(&self, from: Status, targets: &[Status]) -> String;

    /// Formats a lifecycle path, or its absence.
    fn format_path(&self, from: Status, to: Status, path: Option<&[Status]>) -> String;

    /// Formats the blocker taxonomy.
    fn format_blockers(&self, codes: &[BlockerCode]) -> String;

    /// Formats a loop status report.
    fn format_report(&self, report: &LoopStatusReport) -> String;

    /// Formats an error message.
    fn format_error(&self, error: &str) -> String;
}

fn step_cell(resolution: &StepResolution) -> String {
    resolution
        .step()
        .map(|step| step.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn state_word(resolution: &StepResolution) -> &'static str {
    if resolution.is_blocked() {
        "blocked"
    } else if resolution.is_paused() {
        "paused"
    } else {
        "ready"
    }
}

fn join_statuses(statuses: &[Status]) -> String {
    statuses
        .iter()
        .map(Status::as_str)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// JSON output formatter.
///
/// Emits the same shapes the status routes return.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_resolution(&self, issue_id: &str, resolution: &StepResolution) -> String {
        let mut value = serde_json::to_value(resolution).unwrap_or_else(|_| json!({}));
        if let Some(map) = value.as_object_mut() {
            map.insert("issueId".to_string(), json!(issue_id));
        }
        Self::render(&value)
    }

    fn format_transition(
        &self,
        from: Status,
        to: Status,
        allowed: bool,
        reason: Option<&str>,
    ) -> String {
        let mut value = json!({ "from": from, "to": to, "allowed": allowed });
        if let Some(reason) = reason {
            value["reason"] = json!(reason);
        }
        Self::render(&value)
    }

    fn format_targets(&self, from: Status, targets: &[Status]) -> String {
        Self::render(&json!({
            "from": from,
            "targets": targets,
            "terminal": from.is_terminal(),
        }))
    }

    fn format_path(&self, from: Status, to: Status, path: Option<&[Status]>) -> String {
        Self::render(&json!({ "from": from, "to": to, "path": path }))
    }

    fn format_blockers(&self, codes: &[BlockerCode]) -> String {
        let blockers: Vec<_> = codes
            .iter()
            .map(|code| json!({ "code": code, "description": code.description() }))
            .collect();
        Self::render(&json!({ "blockers": blockers, "total": blockers.len() }))
    }

    fn format_report(&self, report: &LoopStatusReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }

        let mut out = Ansi::new(Vec::new());
        let _ = out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
        let _ = write!(out, "{}", text);
        let _ = out.reset();
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_resolution(&self, issue_id: &str, resolution: &StepResolution) -> String {
        let mut output = String::new();
        let state = match state_word(resolution) {
            "blocked" => self.paint("blocked", Color::Red, true),
            "paused" => self.paint("paused", Color::Yellow, false),
            other => self.paint(other, Color::Green, false),
        };

        output.push_str(&format!("Issue:    {}\n", issue_id));
        output.push_str(&format!("State:    {}\n", state));
        output.push_str(&format!("Step:     {}\n", step_cell(resolution)));
        if let Some(code) = resolution.blocker_code() {
            output.push_str(&format!("Blocker:  {}\n", code));
        }
        if let Some(message) = resolution.blocker_message() {
            output.push_str(&format!("Message:  {}\n", wrap_text(message, 10)));
        }
        output
    }

    fn format_transition(
        &self,
        from: Status,
        to: Status,
        allowed: bool,
        reason: Option<&str>,
    ) -> String {
        let verdict = if allowed {
            self.paint("allowed", Color::Green, false)
        } else {
            self.paint("rejected", Color::Red, true)
        };
        let mut output = format!("{} → {}: {}", from, to, verdict);
        if let Some(reason) = reason {
            output.push_str(&format!("\n  {}", wrap_text(reason, 2)));
        }
        output
    }

    fn format_targets(&self, from: Status, targets: &[Status]) -> String {
        if targets.is_empty() {
            return format!("{} is terminal; no transitions allowed.", from);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["From", "To"]);
        for target in targets {
            builder.push_record(vec![from.as_str(), target.as_str()]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_path(&self, from: Status, to: Status, path: Option<&[Status]>) -> String {
        match path {
            Some(path) => format!("{} ({} transitions)", join_statuses(path), path.len() - 1),
            None => format!("No legal path from {} to {}.", from, to),
        }
    }

    fn format_blockers(&self, codes: &[BlockerCode]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Code", "Description"]);
        for code in codes {
            builder.push_record(vec![code.as_str(), code.description()]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_report(&self, report: &LoopStatusReport) -> String {
        if report.issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Issue", "Status", "State", "Step", "Blocker"]);
        for entry in &report.issues {
            let resolution = &entry.resolution;
            builder.push_record(vec![
                entry.issue_id.clone(),
                entry.status.clone().unwrap_or_else(|| "-".to_string()),
                state_word(resolution).to_string(),
                step_cell(resolution),
                resolution
                    .blocker_code()
                    .map(|code| code.to_string())
                    .unwrap_or_default(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());

        let mut output = table.to_string();
        output.push_str(&format!(
            "\n{} issues: {} ready, {} blocked, {} paused",
            report.total, report.ready, report.blocked, report.paused
        ));
        for blocker in &report.blockers {
            output.push_str(&format!("\n  {}: {}", blocker.code, blocker.count));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("{}: {}", self.paint("Error", Color::Red, true), error)
    }
}

/// Plain text output formatter.
///
/// One record per line, no colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_resolution(&self, issue_id: &str, resolution: &StepResolution) -> String {
        let mut output = format!(
            "{} {} {}",
            issue_id,
            state_word(resolution),
            resolution.step().map(|s| s.code()).unwrap_or("-")
        );
        if let Some(code) = resolution.blocker_code() {
            output.push_str(&format!(" {}", code));
        }
        if let Some(message) = resolution.blocker_message() {
            output.push_str(&format!("\n{}", message));
        }
        output
    }

    fn format_transition(
        &self,
        from: Status,
        to: Status,
        allowed: bool,
        reason: Option<&str>,
    ) -> String {
        let mut output = format!("{} {} {}", from, to, if allowed { "allowed" } else { "rejected" });
        if let Some(reason) = reason {
            output.push_str(&format!("\n{}", reason));
        }
        output
    }

    fn format_targets(&self, _from: Status, targets: &[Status]) -> String {
        targets
            .iter()
            .map(Status::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_path(&self, _from: Status, _to: Status, path: Option<&[Status]>) -> String {
        path.map(|path| {
            path.iter()
                .map(Status::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
    }

    fn format_blockers(&self, codes: &[BlockerCode]) -> String {
        codes
            .iter()
            .map(|code| format!("{}\t{}", code, code.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_report(&self, report: &LoopStatusReport) -> String {
        report
            .issues
            .iter()
            .map(|entry| {
                let resolution = &entry.resolution;
                format!(
                    "{} {} {} {}",
                    entry.issue_id,
                    state_word(resolution),
                    resolution.step().map(|s| s.code()).unwrap_or("-"),
                    resolution.blocker_code().map(|c| c.as_str()).unwrap_or("-")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
