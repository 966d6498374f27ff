// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Template configuration schema.
//!
//! A template is a TOML file with `[header]`, `[body]` and `[footer]`
//! sections. Every key is optional.

use std::path::Path;

/// Structural rules a commit message must follow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Header rules.
    pub header: HeaderRules,

    /// Body rules.
    pub body: BodyRules,

    /// Footer rules.
    pub footer: FooterRules,
}

impl TemplateConfig {
    /// Load a template from a file.
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        super::loader::load_template(path)
    }

    /// Parse a template from TOML text.
    pub fn parse(content: &str) -> crate::error::Result<Self> {
        super::loader::parse_template(content)
    }
}

/// `[header]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRules {
    /// Pattern the whole header line must match.
    pub pattern: Option<String>,
}

/// `[body]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRules {
    /// Require the second line to be blank.
    pub blank_line_after_header: bool,

    /// Accept a body with no non-blank line.
    pub allow_empty: bool,
}

impl Default for BodyRules {
    fn default() -> Self {
        Self {
            blank_line_after_header: false,
            allow_empty: true,
        }
    }
}

/// `[footer]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterRules {
    /// Require a non-blank last line.
    pub required: bool,

    /// Pattern each non-blank footer line must match when a footer is required.
    pub pattern: Option<String>,
}
