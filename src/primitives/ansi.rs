//! ANSI escape code helpers for pre-colored text
//!
//! Descriptions may already contain SGR escape sequences, either as real
//! `ESC` bytes or spelled out literally as `\033` in a sidecar file. This
//! module finds them so the styling engine can turn each one into a run
//! boundary, and strips them when a plain projection is needed.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// The escape byte that opens every SGR sequence.
pub const ESC: char = '\x1b';

/// Literal spelling of the escape byte accepted in sidecar files.
pub const LITERAL_ESC: &str = "\\033";

/// `ESC [ digits (; digits)* m`
static SGR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9]+(?:;[0-9]+)*m").expect("SGR pattern is valid"));

/// A stretch of text together with the escape code that preceded it.
///
/// The first segment of a string has `code == None`: it is the text before
/// any escape sequence (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiSegment<'a> {
    pub code: Option<&'a str>,
    pub text: &'a str,
}

/// Replace the literal `\033` spelling with a real escape byte.
pub fn decode_literal_escapes(s: &str) -> Cow<'_, str> {
    if s.contains(LITERAL_ESC) {
        Cow::Owned(s.replace(LITERAL_ESC, "\x1b"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Split `s` at every SGR escape sequence.
///
/// Always returns at least one segment. Concatenating every `code` and
/// `text` in order reproduces `s` exactly.
pub fn split_escape_codes(s: &str) -> Vec<AnsiSegment<'_>> {
    let mut segments = Vec::new();
    let mut code = None;
    let mut last = 0;

    for m in SGR_PATTERN.find_iter(s) {
        segments.push(AnsiSegment {
            code,
            text: &s[last..m.start()],
        });
        code = Some(m.as_str());
        last = m.end();
    }
    segments.push(AnsiSegment {
        code,
        text: &s[last..],
    });

    segments
}

/// Remove every SGR escape sequence from `s`.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    SGR_PATTERN.replace_all(s, "")
}

/// Whether `s` is exactly one SGR escape sequence.
pub fn is_sgr_code(s: &str) -> bool {
    SGR_PATTERN
        .find(s)
        .is_some_and(|m| m.start() == 0 && m.end() == s.len())
}

/// Build an SGR sequence from its parameter list, e.g. `"1;31"` -> `ESC[1;31m`.
pub fn sgr(params: &str) -> String {
    format!("{ESC}[{params}m")
}
