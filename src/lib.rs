// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-format - commit message checker
//!
//! Validates commit messages against style rules before they are merged.
//!
//! # Features
//!
//! - **Spelling**: misspelled words reported by `codespell`, highlighted in place
//! - **Line length**: per-line limit with overflow words highlighted and an
//!   exemption for `[index] url://...` reference lines
//! - **Template**: header pattern, blank line after header, non-empty body,
//!   required footer and footer pattern, read from a TOML file
//!
//! # Example
//!
//! ```no_run
//! use commit_format::commit::CommitMessage;
//! use commit_format::config::TemplateConfig;
//! use commit_format::rules::RuleEngine;
//!
//! let template = TemplateConfig::parse("[footer]\nrequired = true").unwrap();
//! let engine = RuleEngine::new().with_limit(72).with_template(template);
//!
//! let commit = CommitMessage::new("abc1234", "fix: handle empty input");
//! for report in engine.check(&commit) {
//!     println!("{}: {} error(s)", report.check, report.errors);
//! }
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;
pub mod spell;
pub mod text;

// Re-exports for convenience
pub use commit::{CommitMessage, SplitMessage};
pub use config::TemplateConfig;
pub use error::{CfError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-format.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
