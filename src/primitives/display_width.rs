//! Display width calculation for alignment padding
//!
//! Listing lines are aligned by counting columns the way an East Asian
//! terminal would: Fullwidth, Wide and Ambiguous characters take two
//! columns, everything else takes one. Zero-width and control characters
//! are still counted as one column so that a name's width never drops
//! below its character count.

use super::ambiguous_width::AMBIGUOUS;
use std::cmp::Ordering;
use unicode_width::UnicodeWidthChar;

/// Calculate the column width of a single character.
///
/// Returns 2 for Fullwidth, Wide and Ambiguous characters, 1 otherwise.
#[inline]
pub fn char_width(c: char) -> usize {
    if c.width_cjk() == Some(2) || is_ambiguous(c) {
        2
    } else {
        1
    }
}

/// East_Asian_Width=A
fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                Ordering::Less
            } else if lo > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Calculate the column width of a string.
///
/// Use this instead of `.chars().count()` when computing padding.
#[inline]
pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}
