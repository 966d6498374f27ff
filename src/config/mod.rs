// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-format.
//!
//! The only configuration file is the optional commit template; everything
//! else comes from command-line flags.

mod loader;
mod schema;

pub use loader::{load_template, parse_template};
pub use schema::*;
