// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::rules::length::DEFAULT_LIMIT;

/// Check commit messages for spelling, line length and structure.
///
/// By default every commit on the current branch that is not on the base
/// branch is checked.
#[derive(Parser, Debug)]
#[command(name = "commit-format")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Perform various checks on commit messages", long_about = None)]
pub struct Cli {
    /// Disable checking misspelled words (also accepted as -ns)
    #[arg(long, visible_alias = "ns")]
    pub no_spelling: bool,

    /// Maximum length of commit message lines (0 disables the check)
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// TOML template file describing the header/body/footer structure
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Name of the base branch
    #[arg(short, long, default_value = "main")]
    pub base: String,

    /// Check all commits, including those of the base branch
    #[arg(short, long)]
    pub all: bool,

    /// Enable debug logging
    #[arg(short, long, visible_alias = "verbosity")]
    pub verbose: bool,

    /// Disable color output (also accepted as -nc)
    #[arg(long, visible_alias = "nc")]
    pub no_color: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Parse the process arguments, accepting the historical `-ns`/`-nc` spellings.
    pub fn parse_compat() -> Self {
        Self::parse_from(legacy_args(std::env::args_os()))
    }

    /// Whether output should be colored: on a terminal and not disabled.
    pub fn use_color(&self) -> bool {
        !self.no_color && self.format == OutputFormat::Text && console::Term::stdout().is_term()
    }
}

/// Rewrite the single-dash `-ns` and `-nc` flags to their long forms.
///
/// clap would read them as clusters of short flags.
pub fn legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-ns") => OsString::from("--no-spelling"),
            Some("-nc") => OsString::from("--no-color"),
            _ => arg,
        })
        .collect()
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}
