// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! `codespell` adapter.
//!
//! codespell reads the message on stdin and prints two lines per finding:
//! a location line, then a line starting with the misspelled word followed
//! by its proposed fix.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use tracing::debug;

use super::{SpellChecker, SpellFindings};
use crate::error::{CfError, Result, SpellError};

/// Default spell checking program.
pub const CODESPELL: &str = "codespell";

/// Exit status codespell uses when it found misspellings.
pub const FINDINGS_STATUS: i32 = 65;

/// Runs the `codespell` program.
#[derive(Debug, Clone)]
pub struct Codespell {
    program: String,
}

impl Codespell {
    pub fn new() -> Self {
        Self::with_program(CODESPELL)
    }

    /// Use a different executable, for instance a wrapper script.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn failed(&self, message: impl Into<String>) -> CfError {
        CfError::Spell(SpellError::ToolFailed {
            tool: self.program.clone(),
            message: message.into(),
        })
    }
}

impl Default for Codespell {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellChecker for Codespell {
    fn check(&self, message: &str) -> Result<SpellFindings> {
        debug!("Running: {} -c - -", self.program);

        let mut child = Command::new(&self.program)
            .args(["-c", "-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    CfError::Spell(SpellError::ToolMissing {
                        tool: self.program.clone(),
                    })
                } else {
                    self.failed(e.to_string())
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(message.as_bytes())
                .map_err(|e| self.failed(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| self.failed(e.to_string()))?;
        let findings = parse_output(&String::from_utf8_lossy(&output.stdout));

        let succeeded = matches!(output.status.code(), Some(0) | Some(FINDINGS_STATUS));
        if !succeeded && findings.is_empty() {
            return Err(self.failed(String::from_utf8_lossy(&output.stderr).trim()));
        }

        Ok(findings)
    }
}

/// Parse codespell output, keeping every second line.
pub fn parse_output(stdout: &str) -> SpellFindings {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return SpellFindings::default();
    }

    let selected: Vec<&str> = trimmed.split('\n').skip(1).step_by(2).collect();
    let words = selected
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect();

    SpellFindings {
        proposal: selected.join("\n"),
        words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_output() {
        assert_eq!(parse_output(""), SpellFindings::default());
        assert_eq!(parse_output("\n  \n"), SpellFindings::default());
    }

    #[test]
    fn test_parse_pairs() {
        let stdout = "1: fix teh bug\n\tteh ==> the\n3: we recieve data\n\trecieve ==> receive\n";
        let findings = parse_output(stdout);
        assert_eq!(findings.words, vec!["teh", "recieve"]);
        assert_eq!(findings.proposal, "\tteh ==> the\n\trecieve ==> receive");
    }

    #[test]
    fn test_parse_odd_line_count() {
        let findings = parse_output("1: teh\nteh ==> the\n2: dangling");
        assert_eq!(findings.words, vec!["teh"]);
    }

    #[test]
    fn test_missing_program() {
        let checker = Codespell::with_program("commit-format-no-such-spell-tool");
        let err = checker.check("fix teh bug").unwrap_err();
        assert!(matches!(
            err,
            CfError::Spell(SpellError::ToolMissing { .. })
        ));
    }
}
