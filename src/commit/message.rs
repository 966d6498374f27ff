// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit messages and their header/body/footer decomposition.
//!
//! Lines end at `\n`, `\r\n`, a lone `\r`, vertical tab, form feed, the
//! file/group/record separators, NEL and the Unicode line and paragraph
//! separators. A trailing terminator does not start an extra line.

use tracing::debug;

/// A commit as handed to the checks: its identifier and raw message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    id: String,
    text: String,
}

impl CommitMessage {
    /// Create a commit message.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Commit identifier (usually an abbreviated SHA).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Split the message into header, body and footer.
    pub fn split(&self, has_footer: bool) -> SplitMessage<'_> {
        SplitMessage::split(&self.text, has_footer)
    }
}

/// A message decomposed into header, body and footer.
///
/// `body` is `lines[1..footer_start]` and `footer` holds `lines[footer_start]`
/// when that index is in range. Without a requested footer, `footer_start`
/// is the line count and `footer` is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMessage<'a> {
    /// First line, empty for an empty message.
    pub header: &'a str,
    /// Lines between the header and the footer.
    pub body: Vec<&'a str>,
    /// At most one trailing line.
    pub footer: Vec<&'a str>,
    /// Every line of the message, blank lines included.
    pub lines: Vec<&'a str>,
}

impl<'a> SplitMessage<'a> {
    /// Decompose `message`.
    ///
    /// With `has_footer`, the footer is the last non-blank line found by
    /// scanning back from the end. The scan never reaches the header, so a
    /// message whose only non-blank line is the header has no footer.
    pub fn split(message: &'a str, has_footer: bool) -> Self {
        let lines = split_lines(message);
        let count = lines.len();
        let header = lines.first().copied().unwrap_or("");

        let mut footer_start = count;
        if has_footer {
            let mut i = count.saturating_sub(1);
            while i > 0 && lines[i].trim().is_empty() {
                i -= 1;
            }
            footer_start = if i > 0 { i } else { count };
        }

        let body = if count > 1 {
            lines[1..footer_start].to_vec()
        } else {
            Vec::new()
        };
        let footer = lines.get(footer_start).copied().into_iter().collect();

        let split = Self {
            header,
            body,
            footer,
            lines,
        };
        debug!(
            "--HEADER--\n{}\n---BODY---\n{:?}\n--FOOTER--\n{:?}\n----------",
            split.header, split.body, split.footer
        );
        split
    }

    /// Whether the body holds at least one non-blank line.
    pub fn body_has_content(&self) -> bool {
        self.body.iter().any(|line| !line.trim().is_empty())
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0B'
            | '\x0C'
            | '\x1C'
            | '\x1D'
            | '\x1E'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split `text` into lines without their terminators.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                start += 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        for has_footer in [false, true] {
            let split = SplitMessage::split("", has_footer);
            assert_eq!(split.header, "");
            assert!(split.body.is_empty());
            assert!(split.footer.is_empty());
            assert!(split.lines.is_empty());
        }
    }

    #[test]
    fn test_single_line() {
        for has_footer in [false, true] {
            let split = SplitMessage::split("fix: typo", has_footer);
            assert_eq!(split.header, "fix: typo");
            assert!(split.body.is_empty());
            assert!(split.footer.is_empty());
        }
    }

    #[test]
    fn test_without_footer_everything_is_body() {
        let split = SplitMessage::split("header\n\nbody line\nRefs: #1", false);
        assert_eq!(split.header, "header");
        assert_eq!(split.body, vec!["", "body line", "Refs: #1"]);
        assert!(split.footer.is_empty());
    }

    #[test]
    fn test_footer_skips_trailing_blank_lines() {
        let split = SplitMessage::split("header\n\nbody\n\nRefs: #1\n\n  \n", true);
        assert_eq!(split.body, vec!["", "body", ""]);
        assert_eq!(split.footer, vec!["Refs: #1"]);
        assert_eq!(split.lines.len(), 7);
    }

    #[test]
    fn test_header_and_footer_only() {
        let split = SplitMessage::split("header\nRefs: #1", true);
        assert!(split.body.is_empty());
        assert_eq!(split.footer, vec!["Refs: #1"]);
    }

    #[test]
    fn test_only_blank_lines_after_header() {
        let split = SplitMessage::split("header\n\n   ", true);
        assert_eq!(split.body, vec!["", "   "]);
        assert!(split.footer.is_empty());
    }

    #[test]
    fn test_parts_reconstruct_lines() {
        let messages = [
            "",
            "one",
            "one\ntwo",
            "one\n\nthree\n\nfive",
            "one\n\nthree\nfour\n\n\n",
            "a\r\nb\r\nc",
        ];
        for message in messages {
            for has_footer in [false, true] {
                let split = SplitMessage::split(message, has_footer);
                let mut rebuilt: Vec<&str> = Vec::new();
                if !split.lines.is_empty() {
                    rebuilt.push(split.header);
                }
                rebuilt.extend(&split.body);
                rebuilt.extend(&split.footer);
                assert!(split.lines.starts_with(&rebuilt), "{:?}", message);
                assert!(split.lines[rebuilt.len()..]
                    .iter()
                    .all(|line| line.trim().is_empty()));
            }
        }
    }

    #[test]
    fn test_split_lines_terminators() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb\r"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(
            split_lines("a\x0Bb\x0Cc\x1Cd\u{85}e\u{2028}f\u{2029}g"),
            vec!["a", "b", "c", "d", "e", "f", "g"]
        );
    }

    #[test]
    fn test_lone_carriage_return_ends_header() {
        let split = SplitMessage::split("header\rbody line", false);
        assert_eq!(split.header, "header");
        assert_eq!(split.body, vec!["body line"]);
    }

    #[test]
    fn test_body_has_content() {
        assert!(!SplitMessage::split("h\n\n \n", false).body_has_content());
        assert!(SplitMessage::split("h\n\ntext", false).body_has_content());
    }

    #[test]
    fn test_commit_message_accessors() {
        let commit = CommitMessage::new("abc1234", "header\n\nbody");
        assert_eq!(commit.id(), "abc1234");
        assert_eq!(commit.split(false).body, vec!["", "body"]);
    }
}
