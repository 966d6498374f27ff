// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Run driver: lists commits and checks them one by one.

use console::style;
use tracing::debug;

use crate::commit::CommitMessage;
use crate::config::TemplateConfig;
use crate::error::{CfError, GitError, Result};
use crate::git::Repository;
use crate::rules::{total_errors, RuleEngine};
use crate::spell::Codespell;
use crate::text::Highlight;

use super::args::{Cli, OutputFormat};

/// How a run ended when no fatal error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every commit passed.
    Clean,
    /// This many violations were found.
    Violations(usize),
    /// The branch has no commit to check.
    NothingToCheck,
    /// Running on the base branch itself without `--all`.
    OnBaseBranch,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean | Outcome::OnBaseBranch => 0,
            Outcome::Violations(_) | Outcome::NothingToCheck => 1,
        }
    }
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<Outcome> {
    let use_color = cli.use_color();

    let template = match cli.template {
        Some(ref path) => Some(TemplateConfig::load(path)?),
        None => None,
    };

    let repo = Repository::open_current().map_err(not_a_repository)?;
    let branch = repo.current_branch().map_err(not_a_repository)?;

    let commits = if cli.all {
        repo.all_commits()?
    } else if branch == cli.base {
        println!(
            "{}",
            style(format!("Running on branch {}. Abort checking commits.", cli.base))
                .red()
                .force_styling(use_color)
        );
        return Ok(Outcome::OnBaseBranch);
    } else {
        repo.unique_commits(&cli.base)?
    };

    if commits.is_empty() {
        println!(
            "{} branch {} has no diff commit with base branch {}",
            style("Error:").red().force_styling(use_color),
            style(&branch).green().force_styling(use_color),
            style(&cli.base).green().force_styling(use_color)
        );
        return Ok(Outcome::NothingToCheck);
    }

    debug!("Checking {} commits on branch {}", commits.len(), branch);

    let mut engine = RuleEngine::new()
        .with_limit(cli.limit)
        .with_highlight(Highlight::for_color(use_color));
    if !cli.no_spelling {
        engine = engine.with_spell_checker(Box::new(Codespell::new()));
    }
    if let Some(template) = template {
        engine = engine.with_template(template);
    }

    let mut errors = 0;
    for id in commits {
        let text = repo.commit_message(&id).unwrap_or_else(|e| {
            println!(
                "{}",
                style(format!("Failed to read commit {}: {}", id, e))
                    .red()
                    .force_styling(use_color)
            );
            String::new()
        });
        let commit = CommitMessage::new(id, text);

        let reports = engine.check(&commit);
        for report in &reports {
            report.print(cli.format, use_color);
        }

        let commit_errors = total_errors(&reports);
        if commit_errors == 0 && cli.format == OutputFormat::Text {
            println!(
                "{}",
                style(format!("Commit {} OK", commit.id()))
                    .green()
                    .force_styling(use_color)
            );
        }
        errors += commit_errors;
    }

    Ok(if errors == 0 {
        Outcome::Clean
    } else {
        Outcome::Violations(errors)
    })
}

fn not_a_repository(e: CfError) -> CfError {
    debug!("Repository lookup failed: {}", e);
    CfError::Git(GitError::NotARepository)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Clean.exit_code(), 0);
        assert_eq!(Outcome::OnBaseBranch.exit_code(), 0);
        assert_eq!(Outcome::Violations(3).exit_code(), 1);
        assert_eq!(Outcome::NothingToCheck.exit_code(), 1);
    }
}
