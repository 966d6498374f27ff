// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Removal of terminal escape sequences and control characters.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// ESC followed by a Fe byte, parameters, intermediates and a final byte.
    static ref ANSI_ESCAPE: Regex = Regex::new(r"\x1B[@-_][0-?]*[ -/]*[@-~]").unwrap();

    /// C0 controls, DEL and C1 controls, keeping tab, newline and carriage return.
    static ref CONTROL_CHARS: Regex =
        Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F\x{80}-\x{9F}]").unwrap();
}

/// Strip ANSI escape sequences and non-printable control characters.
///
/// ESC itself is a control character, so a sequence mangled past recognition
/// still loses its introducer and the result is stable under reapplication.
pub fn sanitize(text: &str) -> String {
    let without_escapes = ANSI_ESCAPE.replace_all(text, "");
    CONTROL_CHARS.replace_all(&without_escapes, "").into_owned()
}
