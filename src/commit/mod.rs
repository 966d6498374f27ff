// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message representation.

mod message;

pub use message::{CommitMessage, SplitMessage};
