// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-commit check reports.

use crate::cli::args::OutputFormat;
use console::style;
use serde::Serialize;

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Summary of a violation.
    Warning,
    /// Supporting context (offending line, expected pattern, proposals).
    Info,
}

/// A single line of diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    pub text: String,
}

impl Diagnostic {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            text: text.into(),
        }
    }
}

/// Outcome of one check on one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Which check produced this report.
    pub check: &'static str,
    /// Commit identifier.
    pub commit: String,
    /// Number of violations found.
    pub errors: usize,
    /// Diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// Message copy with offending words highlighted, if the check builds one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotated: Option<String>,
}

impl CheckReport {
    /// Create an empty report.
    pub fn new(check: &'static str, commit: impl Into<String>) -> Self {
        Self {
            check,
            commit: commit.into(),
            errors: 0,
            diagnostics: Vec::new(),
            annotated: None,
        }
    }

    /// Whether the check passed.
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }

    /// Record one violation with its summary line.
    pub fn violation(&mut self, text: impl Into<String>) {
        self.errors += 1;
        self.warning(text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(text));
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(text));
    }

    /// Print the report to stdout.
    pub fn print(&self, format: OutputFormat, use_color: bool) {
        match format {
            OutputFormat::Json => self.print_json(),
            OutputFormat::Text => self.print_text(use_color),
        }
    }

    /// Text output. Clean reports print nothing.
    fn print_text(&self, use_color: bool) {
        if self.is_clean() {
            return;
        }

        for diagnostic in &self.diagnostics {
            match diagnostic.level {
                Level::Warning => println!(
                    "{}",
                    style(&diagnostic.text).yellow().force_styling(use_color)
                ),
                Level::Info => println!("{}", diagnostic.text),
            }
        }

        if let Some(ref annotated) = self.annotated {
            println!("---\n{}\n---", annotated);
        }
    }

    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(self).unwrap_or_default()
        );
    }
}

/// Total violations over a set of reports.
pub fn total_errors(reports: &[CheckReport]) -> usize {
    reports.iter().map(|r| r.errors).sum()
}
