//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. JSON output keeps the
//! `isNonsense`/`flaggedBy` wire shape.

use colored::Colorize;
use serde::Serialize;

use crate::config::FilterEntry;
use crate::core::models::{BulkResult, ClassificationResult};
use crate::core::services::FilterReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Status of one filter in an explained check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStatus {
    /// The filter fired
    Triggered,
    /// The filter did not fire
    Clear,
    /// The filter faulted and was skipped
    Fault,
}

/// One filter's verdict, for `check --explain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterLine {
    /// Filter name
    pub name: String,
    /// Verdict
    pub status: FilterStatus,
    /// Explanation or fault message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&FilterReport> for FilterLine {
    fn from(report: &FilterReport) -> Self {
        let (status, details) = match &report.outcome {
            Ok(outcome) if outcome.triggered => (FilterStatus::Triggered, outcome.details.clone()),
            Ok(_) => (FilterStatus::Clear, None),
            Err(err) => (FilterStatus::Fault, Some(err.to_string())),
        };
        Self {
            name: report.name.clone(),
            status,
            details,
        }
    }
}

/// Result of a check operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutput {
    /// The classification
    #[serde(flatten)]
    pub result: ClassificationResult,
    /// Every filter's verdict, only with `--explain`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FilterLine>,
}

/// Result of a bulk operation
#[derive(Debug, Serialize)]
pub struct BulkOutput {
    /// One result per row, in input order
    pub results: Vec<BulkResult>,
}

/// The filter battery overview
#[derive(Debug, Serialize)]
pub struct FiltersOutput {
    /// Filters in registration order
    pub filters: Vec<FilterEntry>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Human label for a verdict
fn verdict(is_nonsense: bool) -> String {
    if is_nonsense {
        "NONSENSE".red().bold().to_string()
    } else {
        "OK".green().bold().to_string()
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl CheckOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", verdict(self.result.is_nonsense));

        if self.filters.is_empty() {
            for flag in &self.result.flagged_by {
                match &flag.details {
                    Some(details) => println!("  - {}: {details}", flag.name),
                    None => println!("  - {}", flag.name),
                }
            }
            return;
        }

        for line in &self.filters {
            let status = match line.status {
                FilterStatus::Triggered => "fired".red().to_string(),
                FilterStatus::Clear => "clear".dimmed().to_string(),
                FilterStatus::Fault => "fault".yellow().to_string(),
            };
            match &line.details {
                Some(details) => println!("  [{status}] {}: {details}", line.name),
                None => println!("  [{status}] {}", line.name),
            }
        }
    }
}

impl BulkOutput {
    /// Number of rows flagged as nonsense
    #[must_use]
    pub fn flagged(&self) -> usize {
        self.results.iter().filter(|r| r.is_nonsense).count()
    }

    /// Number of rows that faulted
    #[must_use]
    pub fn faulted(&self) -> usize {
        self.results.iter().filter(|r| r.is_fault()).count()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.results.is_empty() {
            println!("No texts to check.");
            return;
        }

        for (index, row) in self.results.iter().enumerate() {
            let id = row.row_number.as_ref().map_or_else(|| (index + 1).to_string(), ToString::to_string);

            if let Some(error) = &row.error {
                println!("  [{id}] {}: {error}", "ERROR".yellow().bold());
                continue;
            }

            if row.is_nonsense {
                let names: Vec<&str> = row.flagged_by.iter().map(|f| f.name.as_str()).collect();
                println!("  [{id}] {} ({})", verdict(true), names.join(", "));
            } else {
                println!("  [{id}] {}", verdict(false));
            }
        }

        println!(
            "\n{} of {} text(s) flagged, {} error(s)",
            self.flagged(),
            self.results.len(),
            self.faulted()
        );
    }
}

impl FiltersOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Filters (in order):\n");
        for (index, filter) in self.filters.iter().enumerate() {
            let state = if filter.enabled { "on".green() } else { "off".dimmed() };
            println!("  {}. [{state}] {}", index + 1, filter.name);
            if !filter.settings.is_empty() {
                println!("        {}", filter.settings);
            }
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
