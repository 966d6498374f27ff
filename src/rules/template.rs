// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Structural template check: header pattern, body layout and footer.

use super::pattern::{compile_bounded, PatternEngine, PatternError, RegexEngine};
use super::report::CheckReport;
use crate::commit::{CommitMessage, SplitMessage};
use crate::config::TemplateConfig;
use crate::text::sanitize;

/// Check `commit` against `template` using the default regex engine.
pub fn check_template(commit: &CommitMessage, template: &TemplateConfig) -> CheckReport {
    check_template_with(&RegexEngine::default(), commit, template)
}

/// Check `commit` against `template`, compiling patterns with `engine`.
///
/// Every rule adds at most one violation, except the footer pattern which
/// adds one per non-matching footer line. Pattern problems are reported as
/// violations and never fail the check.
pub fn check_template_with(
    engine: &dyn PatternEngine,
    commit: &CommitMessage,
    template: &TemplateConfig,
) -> CheckReport {
    let mut report = CheckReport::new("template", commit.id());
    let footer_required = template.footer.required;
    let split = commit.split(footer_required);

    if let Some(ref pattern) = template.header.pattern {
        check_header(engine, commit.id(), &split, pattern, &mut report);
    }

    if template.body.blank_line_after_header
        && split.lines.len() > 1
        && !split.lines[1].trim().is_empty()
    {
        report.violation(format!("Commit {}: missing blank line after header", commit.id()));
    }

    if !template.body.allow_empty && !split.body_has_content() {
        report.violation(format!("Commit {}: commit body is empty", commit.id()));
    }

    if footer_required && split.footer.is_empty() {
        report.violation(format!(
            "Commit {}: missing required footer section",
            commit.id()
        ));
    }

    if footer_required && !split.footer.is_empty() {
        if let Some(ref pattern) = template.footer.pattern {
            check_footer(engine, commit.id(), &split, pattern, &mut report);
        }
    }

    report
}

fn check_header(
    engine: &dyn PatternEngine,
    id: &str,
    split: &SplitMessage<'_>,
    pattern: &str,
    report: &mut CheckReport,
) {
    match compile_bounded(engine, pattern) {
        Ok(compiled) => {
            if !compiled.full_match(split.header) {
                report.violation(format!("Commit {}: header does not match required pattern", id));
                report.info(format!("Header: '{}'", sanitize(split.header)));
                report.info(format!("Expected pattern: {}", sanitize(pattern)));
            }
        }
        Err(PatternError::TooLong { .. }) => {
            report.violation("Header pattern too long; refusing to evaluate");
        }
        Err(e) => {
            report.violation(format!("Invalid header pattern: {}", sanitize(&e.to_string())));
        }
    }
}

fn check_footer(
    engine: &dyn PatternEngine,
    id: &str,
    split: &SplitMessage<'_>,
    pattern: &str,
    report: &mut CheckReport,
) {
    let compiled = match compile_bounded(engine, pattern) {
        Ok(compiled) => compiled,
        Err(PatternError::TooLong { .. }) => {
            report.violation("Footer pattern too long; refusing to evaluate");
            return;
        }
        Err(e) => {
            report.violation(format!("Invalid footer pattern: {}", sanitize(&e.to_string())));
            return;
        }
    };

    for line in split.footer.iter().filter(|line| !line.trim().is_empty()) {
        if !compiled.full_match(line) {
            report.violation(format!("Commit {}: footer line does not match pattern", id));
            report.info(format!("Line: '{}'", sanitize(line)));
            report.info(format!("Expected pattern: {}", sanitize(pattern)));
        }
    }
}
