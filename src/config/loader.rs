// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Template loading.
//!
//! Boolean keys are read leniently: TOML booleans, the integers `0`/`1`,
//! and the strings `true/false`, `yes/no`, `on/off`, `1/0` in any case.
//! Anything else is logged and replaced by the key's default.

use crate::error::{CfError, ConfigError, Result};
use serde::Deserialize;
use std::path::Path;
use toml::Value;
use tracing::{debug, warn};

use super::schema::{BodyRules, FooterRules, HeaderRules, TemplateConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTemplate {
    header: RawHeader,
    body: RawBody,
    footer: RawFooter,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawHeader {
    pattern: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBody {
    blank_line_after_header: Option<Value>,
    allow_empty: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFooter {
    required: Option<Value>,
    pattern: Option<String>,
}

/// Load a template from a file. A missing or unreadable file is an error.
pub fn load_template(path: &Path) -> Result<TemplateConfig> {
    debug!("Loading template from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| {
        debug!("Failed to read template: {}", e);
        CfError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        })
    })?;

    parse_template(&content)
}

/// Parse a template from TOML text.
pub fn parse_template(content: &str) -> Result<TemplateConfig> {
    let raw: RawTemplate = toml::from_str(content).map_err(|e| {
        CfError::Config(ConfigError::ParseError {
            message: format!(
                "Failed to parse TOML: {}\nTemplates are TOML files: quote patterns as \
                 literal strings, e.g. pattern = '^\\[[A-Z]+-\\d+\\]\\s.+'",
                e
            ),
        })
    })?;

    let defaults = BodyRules::default();
    let template = TemplateConfig {
        header: HeaderRules {
            pattern: raw.header.pattern,
        },
        body: BodyRules {
            blank_line_after_header: read_bool(
                "body.blank_line_after_header",
                raw.body.blank_line_after_header.as_ref(),
                defaults.blank_line_after_header,
            ),
            allow_empty: read_bool(
                "body.allow_empty",
                raw.body.allow_empty.as_ref(),
                defaults.allow_empty,
            ),
        },
        footer: FooterRules {
            required: read_bool("footer.required", raw.footer.required.as_ref(), false),
            pattern: raw.footer.pattern,
        },
    };

    debug!("Loaded template: {:?}", template);
    Ok(template)
}

fn read_bool(key: &str, value: Option<&Value>, default: bool) -> bool {
    let Some(value) = value else {
        return default;
    };

    match parse_bool(value) {
        Some(b) => b,
        None => {
            warn!(
                "Template key '{}' has non-boolean value {}; using {}",
                key, value, default
            );
            default
        }
    }
}

fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Integer(1) => Some(true),
        Value::Integer(0) => Some(false),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "yes" | "true" | "on" => Some(true),
            "0" | "no" | "false" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_template() {
        let content = r#"
[header]
pattern = '^\[[A-Z]+-\d+\]\s.+'

[body]
blank_line_after_header = true
allow_empty = false

[footer]
required = true
pattern = '^Refs: #\d+$'
"#;

        let template = parse_template(content).unwrap();
        assert_eq!(
            template.header.pattern.as_deref(),
            Some(r"^\[[A-Z]+-\d+\]\s.+")
        );
        assert!(template.body.blank_line_after_header);
        assert!(!template.body.allow_empty);
        assert!(template.footer.required);
        assert_eq!(template.footer.pattern.as_deref(), Some(r"^Refs: #\d+$"));
    }

    #[test]
    fn test_empty_template_uses_defaults() {
        let template = parse_template("").unwrap();
        assert_eq!(template, TemplateConfig::default());
        assert!(template.body.allow_empty);
        assert!(!template.footer.required);
    }

    #[test]
    fn test_ini_style_booleans() {
        let content = r#"
[body]
blank_line_after_header = "Yes"
allow_empty = "off"

[footer]
required = 1
"#;
        let template = parse_template(content).unwrap();
        assert!(template.body.blank_line_after_header);
        assert!(!template.body.allow_empty);
        assert!(template.footer.required);
    }

    #[test]
    fn test_malformed_booleans_fall_back_to_defaults() {
        let content = r#"
[body]
blank_line_after_header = "sometimes"
allow_empty = "never"

[footer]
required = 2
"#;
        let template = parse_template(content).unwrap();
        assert!(!template.body.blank_line_after_header);
        assert!(template.body.allow_empty);
        assert!(!template.footer.required);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let content = r#"
[header]
max_length = 50

[extra]
key = "value"
"#;
        assert_eq!(parse_template(content).unwrap(), TemplateConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = parse_template("[header\npattern = ");
        assert!(matches!(
            result,
            Err(CfError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_unquoted_ini_pattern_hints_at_quoting() {
        let err = parse_template("[header]\npattern = ^\\[[A-Z]+-\\d+\\]\\s.+\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse TOML"));
        assert!(message.contains("quote patterns as literal strings"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[footer]\nrequired = true").unwrap();

        let template = TemplateConfig::load(file.path()).unwrap();
        assert!(template.footer.required);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let result = load_template(&path);
        assert!(matches!(
            result,
            Err(CfError::Config(ConfigError::NotFound { .. }))
        ));
    }
}
