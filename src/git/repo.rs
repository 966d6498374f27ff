// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{CfError, GitError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository exposing what the checks need.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CfError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path, searching parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CfError::Git(GitError::NotARepository)
            } else {
                CfError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Name of the checked out branch, or `HEAD` when detached.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.inner.head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch {
                CfError::Git(GitError::UnbornBranch)
            } else {
                CfError::Git(GitError::BranchFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        if !head.is_branch() {
            return Ok("HEAD".to_string());
        }

        let name = head.shorthand().ok_or_else(|| {
            CfError::Git(GitError::BranchFailed {
                message: "Invalid branch name encoding".to_string(),
            })
        })?;
        Ok(name.to_string())
    }

    /// Short identifiers of every commit reachable from HEAD, newest first.
    pub fn all_commits(&self) -> Result<Vec<String>> {
        debug!("Listing all commits reachable from HEAD");
        self.walk(None)
    }

    /// Short identifiers of commits reachable from HEAD but not from `base`.
    pub fn unique_commits(&self, base: &str) -> Result<Vec<String>> {
        debug!("Listing commits in {}..HEAD", base);
        let base_id = self.resolve(base)?;
        self.walk(Some(base_id))
    }

    /// Full message of a commit, with surrounding whitespace trimmed.
    pub fn commit_message(&self, reference: &str) -> Result<String> {
        let oid = self.resolve(reference)?;
        let commit = self.inner.find_commit(oid).map_err(|e| {
            CfError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let message = String::from_utf8_lossy(commit.message_bytes());
        Ok(message.trim().to_string())
    }

    fn resolve(&self, reference: &str) -> Result<Oid> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CfError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            CfError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit.id())
    }

    fn walk(&self, hide: Option<Oid>) -> Result<Vec<String>> {
        let command_failed = |command: &str, e: git2::Error| {
            CfError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self
            .inner
            .revwalk()
            .map_err(|e| command_failed("revwalk", e))?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(|e| command_failed("revwalk.set_sorting", e))?;
        revwalk
            .push_head()
            .map_err(|e| command_failed("revwalk.push_head", e))?;
        if let Some(oid) = hide {
            revwalk
                .hide(oid)
                .map_err(|e| command_failed("revwalk.hide", e))?;
        }

        let mut ids = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| command_failed("revwalk", e))?;
            ids.push(self.short_id(oid)?);
        }

        Ok(ids)
    }

    fn short_id(&self, oid: Oid) -> Result<String> {
        let object = self.inner.find_object(oid, None).map_err(|e| {
            CfError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", oid, e.message()),
            })
        })?;

        match object.short_id() {
            Ok(buf) => Ok(buf.as_str().unwrap_or_default().to_string()),
            Err(_) => Ok(oid.to_string()[..7].to_string()),
        }
    }
}
