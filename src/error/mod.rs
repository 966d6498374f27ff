// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-format.
//!
//! Only conditions that stop a check (or the whole run) live here. Pattern
//! problems found while checking a template are counted as violations by the
//! template rules and never become a [`CfError`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-format operations.
#[derive(Error, Debug)]
pub enum CfError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Spell checker errors
    #[error("Spell check error: {0}")]
    Spell(#[from] SpellError),
}

impl CfError {
    /// Process exit status for a run that stopped on this error.
    ///
    /// Not being inside a repository is reported like a failed check; every
    /// other fatal condition uses status 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            CfError::Git(GitError::NotARepository) | CfError::Git(GitError::UnbornBranch) => 1,
            _ => 2,
        }
    }
}

/// Template configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Template file not found or unreadable: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse template: {message}")]
    ParseError { message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not inside an active git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to get branch: {message}")]
    BranchFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Current branch has no commits yet")]
    UnbornBranch,
}

/// Spell checker errors.
#[derive(Error, Debug)]
pub enum SpellError {
    #[error("{tool} not found; skipping spell check")]
    ToolMissing { tool: String },

    #[error("{tool} failed: {message}")]
    ToolFailed { tool: String, message: String },
}

/// Result type alias for commit-format operations.
pub type Result<T> = std::result::Result<T, CfError>;
