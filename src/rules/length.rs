// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Maximum line length check.
//!
//! Over-long lines are flagged once each and the words that would have to
//! move to bring the line back under the limit are highlighted. Reference
//! lines of the form `[index] url://...` are allowed to exceed the limit.

use url::Url;

use super::report::CheckReport;
use crate::commit::CommitMessage;
use crate::text::{highlight, sanitize, Highlight};

/// Default maximum line length.
pub const DEFAULT_LIMIT: usize = 72;

/// Whether `token` is an absolute URL with both a scheme and a host.
///
/// The host must be introduced by `//` right after the scheme; URL parsers
/// normalise `https:/host` or `http:host` into a host, but those tokens have
/// no network location as written.
pub fn is_url(token: &str) -> bool {
    let Ok(url) = Url::parse(token) else {
        return false;
    };
    let has_authority = token
        .get(url.scheme().len() + 1..)
        .map_or(false, |rest| rest.starts_with("//"));
    has_authority && url.host_str().map_or(false, |host| !host.is_empty())
}

/// Whether `line` holds a URL anywhere, possibly inside brackets or parentheses.
pub fn contains_url(line: &str) -> bool {
    if !line.contains('/') {
        return false;
    }
    line.split(|c: char| matches!(c, '(' | ')' | '[' | ']') || c.is_whitespace())
        .any(is_url)
}

/// Whether `line` is an `index url` reference: two tokens, the last one a URL.
fn is_reference_line(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.len() == 2 && is_url(tokens[1])
}

/// Words to remove from the end of `line` until it fits in `limit` characters.
///
/// The first word in the returned list is the last word of the line. A
/// fragment without any space left is taken whole.
pub fn overflow_words(line: &str, limit: usize) -> Vec<&str> {
    let mut words = Vec::new();
    let mut rest = line;

    while rest.chars().count() > limit {
        match rest.rfind(' ') {
            Some(space) => {
                words.push(&rest[space + 1..]);
                rest = &rest[..space];
            }
            None => {
                words.push(rest);
                rest = "";
            }
        }
    }

    words
}

/// Check every line of `commit` against `limit` characters.
///
/// A limit of zero disables the check and returns the message untouched.
/// The annotated copy rebuilds the message line by line, with overflow words
/// highlighted using `style`.
pub fn check_length(commit: &CommitMessage, limit: usize, style: &Highlight) -> CheckReport {
    let mut report = CheckReport::new("length", commit.id());

    if limit == 0 {
        report.annotated = Some(commit.text().to_string());
        return report;
    }

    let mut bad_url_format = false;
    let mut annotated = String::with_capacity(commit.text().len());

    for (index, line) in commit.text().split('\n').enumerate() {
        if index > 0 {
            annotated.push('\n');
        }

        if line.chars().count() <= limit {
            annotated.push_str(&sanitize(line));
            continue;
        }

        if contains_url(line) {
            if is_reference_line(line) {
                annotated.push_str(&sanitize(line));
                continue;
            }
            bad_url_format = true;
        }

        report.errors += 1;
        let words = overflow_words(line, limit);
        annotated.push_str(&highlight(line, &words, style));
    }

    if report.errors > 0 {
        if bad_url_format {
            report.warning(format!(
                "Commit {}: bad URL format:\n[index] url://...",
                commit.id()
            ));
        } else {
            report.warning(format!("Commit {}: exceeds {} chars limit", commit.id(), limit));
        }
    }

    report.annotated = Some(annotated);
    report
}
