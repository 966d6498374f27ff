// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Bounded compilation and full-match evaluation of template patterns.
//!
//! Patterns come from a user supplied template, so they are treated as
//! untrusted: overlong sources are refused before reaching the engine, and
//! the default engine is the linear-time `regex` crate with explicit size and
//! nesting limits. There is no backtracking to time out.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Longest pattern source (in characters) that will be compiled.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Why a pattern could not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is {len} characters long (limit {max})")]
    TooLong { len: usize, max: usize },

    #[error("{0}")]
    Invalid(String),
}

/// A compiled pattern that must match a whole line.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    /// The pattern as written in the template.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern matches all of `text`.
    pub fn full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Something able to turn a pattern source into a [`CompiledPattern`].
pub trait PatternEngine {
    /// Compile `pattern` for full-match use.
    fn compile(&self, pattern: &str) -> Result<CompiledPattern, PatternError>;
}

/// The default engine, backed by the `regex` crate.
#[derive(Debug, Clone, Copy)]
pub struct RegexEngine {
    size_limit: usize,
    nest_limit: u32,
}

impl RegexEngine {
    /// Create an engine with explicit compiled-size and nesting limits.
    pub fn new(size_limit: usize, nest_limit: u32) -> Self {
        Self {
            size_limit,
            nest_limit,
        }
    }

    fn build(&self, pattern: &str) -> Result<Regex, PatternError> {
        RegexBuilder::new(pattern)
            .size_limit(self.size_limit)
            .nest_limit(self.nest_limit)
            .build()
            .map_err(|e| PatternError::Invalid(e.to_string()))
    }
}

impl Default for RegexEngine {
    fn default() -> Self {
        // Bounded repetitions of Unicode classes compile to several MB; the
        // 500 character cap keeps the worst case well below this.
        Self::new(1 << 27, 64)
    }
}

impl PatternEngine for RegexEngine {
    fn compile(&self, pattern: &str) -> Result<CompiledPattern, PatternError> {
        // Validate the source on its own first: anchoring wraps it in a group,
        // which would otherwise accept stray parentheses such as `a)(b`.
        self.build(pattern)?;
        let regex = self.build(&format!(r"\A(?:{})\z", pattern))?;
        Ok(CompiledPattern {
            source: pattern.to_string(),
            regex,
        })
    }
}

/// Compile `pattern` with `engine`, refusing sources over [`MAX_PATTERN_LENGTH`].
///
/// An overlong pattern is never handed to the engine.
pub fn compile_bounded(
    engine: &dyn PatternEngine,
    pattern: &str,
) -> Result<CompiledPattern, PatternError> {
    let len = pattern.chars().count();
    if len > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            len,
            max: MAX_PATTERN_LENGTH,
        });
    }
    engine.compile(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_semantics() {
        let pattern = RegexEngine::default().compile(r"fix: \w+").unwrap();
        assert!(pattern.full_match("fix: typo"));
        assert!(!pattern.full_match("fix: typo in readme"));
        assert!(!pattern.full_match("hotfix: typo"));
    }

    #[test]
    fn test_alternation_matches_whole_line() {
        let pattern = RegexEngine::default().compile("a|ab").unwrap();
        assert!(pattern.full_match("ab"));
        assert!(pattern.full_match("a"));
        assert!(!pattern.full_match("abc"));
    }

    #[test]
    fn test_ticket_header_pattern() {
        let pattern = RegexEngine::default()
            .compile(r"^\[[A-Z]+-\d+\]\s.+")
            .unwrap();
        assert!(pattern.full_match("[AB-12] fix bug"));
        assert!(!pattern.full_match("fix bug"));
    }

    #[test]
    fn test_invalid_syntax() {
        let err = RegexEngine::default().compile("(unclosed").unwrap_err();
        assert!(matches!(err, PatternError::Invalid(_)));
    }

    #[test]
    fn test_stray_parentheses_rejected() {
        assert!(RegexEngine::default().compile("a)(b").is_err());
    }

    #[test]
    fn test_repetition_heavy_patterns_compile() {
        let engine = RegexEngine::default();
        for pattern in [r"^[\w\s]{1,200}$", r"\w{1,300}", r"^[A-Z][\w ,.:-]{10,400}$"] {
            let compiled = compile_bounded(&engine, pattern);
            assert!(compiled.is_ok(), "{}: {:?}", pattern, compiled.err());
        }

        let summary = engine.compile(r"^[A-Z][\w ,.:-]{10,400}$").unwrap();
        assert!(summary.full_match("Handle empty footer lines"));
        assert!(!summary.full_match("handle empty footer lines"));
    }

    #[test]
    fn test_size_limit_enforced() {
        let engine = RegexEngine::new(1 << 10, 64);
        let err = engine.compile(r"\w{1000}").unwrap_err();
        assert!(matches!(err, PatternError::Invalid(_)));
    }

    #[test]
    fn test_too_long_refused() {
        let pattern = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = compile_bounded(&RegexEngine::default(), &pattern).unwrap_err();
        assert_eq!(
            err,
            PatternError::TooLong {
                len: MAX_PATTERN_LENGTH + 1,
                max: MAX_PATTERN_LENGTH
            }
        );
    }

    #[test]
    fn test_limit_is_inclusive() {
        let pattern = "a".repeat(MAX_PATTERN_LENGTH);
        assert!(compile_bounded(&RegexEngine::default(), &pattern).is_ok());
    }

    #[test]
    fn test_source_preserved() {
        let pattern = RegexEngine::default().compile("^Refs: #\\d+$").unwrap();
        assert_eq!(pattern.source(), "^Refs: #\\d+$");
    }
}
