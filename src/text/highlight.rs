// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Highlighting of flagged words inside a block of text.

use console::Style;

use super::sanitize::sanitize;

/// Style marker wrapped around highlighted words.
///
/// A plain highlight leaves words untouched, which is what non-terminal
/// output and `--no-color` runs use.
#[derive(Debug, Clone, Default)]
pub struct Highlight {
    style: Option<Style>,
}

impl Highlight {
    /// No styling at all.
    pub fn plain() -> Self {
        Self { style: None }
    }

    /// Red marker used for overflow words and misspellings.
    pub fn flagged() -> Self {
        Self::styled(Style::new().red())
    }

    /// Wrap words with an arbitrary style.
    pub fn styled(style: Style) -> Self {
        Self {
            style: Some(style.force_styling(true)),
        }
    }

    /// The flagged marker when color is on, plain otherwise.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::flagged()
        } else {
            Self::plain()
        }
    }

    /// Wrap a single word with the marker.
    pub fn apply(&self, word: &str) -> String {
        match &self.style {
            Some(style) => style.apply_to(word).to_string(),
            None => word.to_string(),
        }
    }
}

/// Highlight the last occurrence of each word in `text`.
///
/// Words are processed in order, each one searched in the text as modified
/// by the previous ones. Both the text and the words are sanitized first and
/// matching is literal.
pub fn highlight<S: AsRef<str>>(text: &str, words: &[S], style: &Highlight) -> String {
    let mut out = sanitize(text);

    for word in words {
        let key = sanitize(word.as_ref());
        if key.is_empty() {
            continue;
        }
        if let Some(start) = out.rfind(key.as_str()) {
            out.replace_range(start..start + key.len(), &style.apply(&key));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_words_returns_sanitized_text() {
        let words: [&str; 0] = [];
        assert_eq!(
            highlight("\x1b[31mtext\x1b[0m", &words, &Highlight::flagged()),
            "text"
        );
    }

    #[test]
    fn test_last_occurrence_is_highlighted() {
        let style = Highlight::flagged();
        let out = highlight("the cat saw the dog", &["the"], &style);
        let expected = format!("the cat saw {} dog", style.apply("the"));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_words_applied_in_order() {
        let style = Highlight::flagged();
        let out = highlight("one two one two", &["two", "one"], &style);
        let expected = format!("one two {} {}", style.apply("one"), style.apply("two"));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_plain_style_leaves_text_unchanged() {
        let out = highlight("keep me as is", &["me", "is"], &Highlight::plain());
        assert_eq!(out, "keep me as is");
    }

    #[test]
    fn test_literal_match_not_regex() {
        let style = Highlight::flagged();
        let out = highlight("a.b axb", &["a.b"], &style);
        assert_eq!(out, format!("{} axb", style.apply("a.b")));
    }

    #[test]
    fn test_word_is_sanitized() {
        let style = Highlight::flagged();
        let out = highlight("spelling mistkae here", &["\x1b[1mmistkae\x1b[0m"], &style);
        assert_eq!(out, format!("spelling {} here", style.apply("mistkae")));
    }

    #[test]
    fn test_missing_word_ignored() {
        let out = highlight("nothing to see", &["absent", ""], &Highlight::flagged());
        assert_eq!(out, "nothing to see");
    }

    #[test]
    fn test_multibyte_text() {
        let style = Highlight::flagged();
        let out = highlight("café naïve café", &["café"], &style);
        assert_eq!(out, format!("café naïve {}", style.apply("café")));
    }

    #[test]
    fn test_sanitize_then_highlight_matches_highlight() {
        let style = Highlight::flagged();
        let text = "plain words only";
        let words = ["words", "only"];
        assert_eq!(
            highlight(&sanitize(text), &words, &style),
            highlight(text, &words, &style)
        );
    }

    #[test]
    fn test_flagged_marker_wraps_word() {
        let marked = Highlight::flagged().apply("word");
        assert!(marked.starts_with('\x1b'));
        assert!(marked.contains("word"));
        assert_eq!(Highlight::for_color(false).apply("word"), "word");
        assert_eq!(Highlight::for_color(true).apply("word"), marked);
    }
}
