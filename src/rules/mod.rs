// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message checks.
//!
//! Each check takes a [`CommitMessage`](crate::commit::CommitMessage) and
//! returns a [`CheckReport`]; the [`RuleEngine`] runs the enabled ones.

mod engine;
pub mod length;
pub mod pattern;
mod report;
pub mod template;

pub use engine::RuleEngine;
pub use length::check_length;
pub use pattern::{compile_bounded, CompiledPattern, PatternEngine, PatternError, RegexEngine};
pub use report::{total_errors, CheckReport, Diagnostic, Level};
pub use template::{check_template, check_template_with};
