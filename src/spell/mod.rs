// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Spell checking through an external tool.
//!
//! The tool is a collaborator: when it is missing or fails, the check is
//! skipped with a warning and the commit is not penalised.

mod codespell;

pub use codespell::{parse_output, Codespell, CODESPELL, FINDINGS_STATUS};

use crate::commit::CommitMessage;
use crate::error::Result;
use crate::rules::CheckReport;
use crate::text::{highlight, sanitize, Highlight};
use tracing::warn;

/// Words flagged by a spell checker and its correction proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellFindings {
    /// Proposal lines, one per finding.
    pub proposal: String,
    /// Flagged words in the order they were reported.
    pub words: Vec<String>,
}

impl SpellFindings {
    pub fn is_empty(&self) -> bool {
        self.proposal.is_empty()
    }
}

/// A spell checker fed with a whole commit message.
pub trait SpellChecker {
    fn check(&self, message: &str) -> Result<SpellFindings>;
}

/// Spell check `commit`, counting one violation if anything was flagged.
pub fn check_spelling(
    checker: &dyn SpellChecker,
    commit: &CommitMessage,
    style: &Highlight,
) -> CheckReport {
    let mut report = CheckReport::new("spelling", commit.id());

    let findings = match checker.check(commit.text()) {
        Ok(findings) => findings,
        Err(e) => {
            warn!("{}", e);
            return report;
        }
    };

    if findings.is_empty() {
        return report;
    }

    report.violation(format!("Commit {} has spelling mistakes", commit.id()));
    report.info(format!(
        "Codespell fix proposition:\n{}",
        sanitize(&findings.proposal)
    ));
    report.annotated = Some(highlight(commit.text(), &findings.words, style));
    report
}
