//! Search-term highlighting inside styled text
//!
//! Matching is case-insensitive and runs against the plain buffer of a
//! [`StyledText`]. Any tag marker still present in the buffer is masked with a
//! placeholder of the same length first, so a hit can never start or end
//! inside a marker and offsets stay valid for the real buffer.

use crate::view::styled_text::StyledText;
use crate::view::theme::{Tag, TagVocabulary, TAG_DELIMITER};

/// Escape character of the placeholder syntax
const ESCAPE: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search term is empty")]
    EmptyTerm,
    #[error("invalid search term {term:?}: {reason}")]
    InvalidTerm { term: String, reason: &'static str },
}

/// A validated, case-folded search term
#[derive(Debug, Clone)]
pub struct SearchHighlighter {
    term: String,
    folded: Vec<char>,
}

impl SearchHighlighter {
    /// Validate `term`.
    ///
    /// Terms that could collide with the marker or placeholder syntax are
    /// rejected: only delimiters, a leading or trailing `\`, or `\` next to a
    /// delimiter.
    pub fn new(term: &str) -> Result<Self, SearchError> {
        if term.is_empty() {
            return Err(SearchError::EmptyTerm);
        }

        let invalid = |reason| SearchError::InvalidTerm {
            term: term.to_string(),
            reason,
        };
        if term.chars().all(|c| c == TAG_DELIMITER) {
            return Err(invalid("consists only of tag delimiters"));
        }
        if term.starts_with(ESCAPE) || term.ends_with(ESCAPE) {
            return Err(invalid("starts or ends with a backslash"));
        }
        let escape_delim = format!("{ESCAPE}{TAG_DELIMITER}");
        let delim_escape = format!("{TAG_DELIMITER}{ESCAPE}");
        if term.contains(&escape_delim) || term.contains(&delim_escape) {
            return Err(invalid("puts a backslash next to a tag delimiter"));
        }

        Ok(Self {
            term: term.to_string(),
            folded: fold(term),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Non-overlapping, left-to-right match offsets in `text`'s buffer
    pub fn find(&self, text: &StyledText, vocab: &TagVocabulary) -> Vec<(usize, usize)> {
        let haystack = masked_projection(text.text(), vocab);
        let n = self.folded.len();

        let mut positions = Vec::new();
        let mut i = 0;
        while i + n <= haystack.len() {
            if haystack[i..i + n] == self.folded[..] {
                positions.push((i, i + n));
                i += n;
            } else {
                i += 1;
            }
        }
        positions
    }

    /// Mark every match in `text` with search-start/search-end markers.
    ///
    /// Returns the matched spans; empty when the term does not occur.
    pub fn highlight(&self, text: &mut StyledText, vocab: &TagVocabulary) -> Vec<(usize, usize)> {
        let positions = self.find(text, vocab);
        for &(start, end) in &positions {
            text.insert_style(Tag::SearchStart, start);
            text.insert_style(Tag::SearchEnd, end);
        }
        if !positions.is_empty() {
            tracing::trace!("{:?} matched {} time(s)", self.term, positions.len());
        }
        positions
    }
}

/// Validate `term` and highlight it in `text` in one go.
pub fn highlight(
    text: &mut StyledText,
    term: &str,
    vocab: &TagVocabulary,
) -> Result<Vec<(usize, usize)>, SearchError> {
    Ok(SearchHighlighter::new(term)?.highlight(text, vocab))
}

/// Lowercase one char per char so offsets line up with the original.
fn fold(s: &str) -> Vec<char> {
    s.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Case-folded characters of `text` with every vocabulary marker replaced by
/// `\;;..;\` of the same length.
fn masked_projection(text: &str, vocab: &TagVocabulary) -> Vec<char> {
    let mut chars = fold(text);
    let original: Vec<char> = text.chars().collect();

    for tag in Tag::ALL.into_iter().filter(|t| vocab.contains(*t)) {
        let marker: Vec<char> = tag.marker().chars().collect();
        let m = marker.len();
        let mut i = 0;
        while i + m <= original.len() {
            if original[i..i + m] == marker[..] {
                chars[i] = ESCAPE;
                chars[i + 1..i + m - 1].fill(TAG_DELIMITER);
                chars[i + m - 1] = ESCAPE;
                i += m;
            } else {
                i += 1;
            }
        }
    }
    chars
}
