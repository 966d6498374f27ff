// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commit-format.
//!
//! This module handles command-line argument parsing and the per-commit run.

pub mod args;
mod dispatch;

pub use args::{Cli, OutputFormat};
pub use dispatch::{run, Outcome};
