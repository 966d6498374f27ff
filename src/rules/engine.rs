// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine running every enabled check on a commit.

use crate::commit::CommitMessage;
use crate::config::TemplateConfig;
use crate::spell::{check_spelling, SpellChecker};
use crate::text::Highlight;

use super::length::{check_length, DEFAULT_LIMIT};
use super::pattern::{PatternEngine, RegexEngine};
use super::report::CheckReport;
use super::template::check_template_with;

/// Runs spelling, length and template checks, in that order.
///
/// The engine holds no per-commit state, so one instance serves a whole run.
pub struct RuleEngine {
    limit: usize,
    template: Option<TemplateConfig>,
    spell: Option<Box<dyn SpellChecker>>,
    patterns: Box<dyn PatternEngine>,
    highlight: Highlight,
}

impl RuleEngine {
    /// Create an engine with the default length limit and no optional checks.
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            template: None,
            spell: None,
            patterns: Box::new(RegexEngine::default()),
            highlight: Highlight::plain(),
        }
    }

    /// Set the maximum line length (0 disables the length check).
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable the template check.
    pub fn with_template(mut self, template: TemplateConfig) -> Self {
        self.template = Some(template);
        self
    }

    /// Enable the spelling check.
    pub fn with_spell_checker(mut self, checker: Box<dyn SpellChecker>) -> Self {
        self.spell = Some(checker);
        self
    }

    /// Compile template patterns with a different engine.
    pub fn with_pattern_engine(mut self, engine: Box<dyn PatternEngine>) -> Self {
        self.patterns = engine;
        self
    }

    /// Marker used for flagged words.
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    /// Validate a commit, returning one report per enabled check.
    pub fn check(&self, commit: &CommitMessage) -> Vec<CheckReport> {
        let mut reports = Vec::new();

        if let Some(ref checker) = self.spell {
            reports.push(check_spelling(checker.as_ref(), commit, &self.highlight));
        }

        reports.push(check_length(commit, self.limit, &self.highlight));

        if let Some(ref template) = self.template {
            reports.push(check_template_with(self.patterns.as_ref(), commit, template));
        }

        reports
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
