// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Text helpers shared by every check.
//!
//! Anything that comes out of a commit message or an external tool goes
//! through [`sanitize`] before it reaches the terminal.

mod highlight;
mod sanitize;

pub use highlight::{highlight, Highlight};
pub use sanitize::sanitize;
