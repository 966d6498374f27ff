// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Lists the commits to check and reads their messages.

mod repo;

pub use repo::Repository;
