//! Styled text: a plain buffer plus an ordered list of style runs
//!
//! A [`StyledText`] is parsed once from a tagged source string such as
//! `";dir;project;end;"`, mutated in place by inserting text and marker runs
//! at character offsets, and finally serialized to a single escape-coded
//! string with [`StyledText::render`].
//!
//! All offsets are character positions in the buffer, never byte positions.
//!
//! # Run ordering
//!
//! After [`StyledText::normalize`], runs are sorted by `start`. Runs sharing a
//! `start` are ordered by bucket:
//!
//! | bucket | tags                              |
//! |--------|-----------------------------------|
//! | 0      | newline-end                       |
//! | 1      | search-end                        |
//! | 2      | end, end-user                     |
//! | 3      | everything else (including raw)   |
//! | 4      | newline                           |
//!
//! Within such a group only the last run keeps the group's span; the others
//! become zero-width switches at `start`.

use crate::primitives::ansi::{decode_literal_escapes, split_escape_codes};
use crate::primitives::display_width::str_width;
use crate::view::theme::{RenderError, Tag, TagVocabulary};
use std::fmt;

/// What a run is styled with
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// A vocabulary tag
    Named(Tag),
    /// An escape code that was already present in the source text
    Raw(String),
}

impl StyleTag {
    fn bucket(&self) -> u8 {
        match self {
            StyleTag::Named(Tag::NewlineEnd) => 0,
            StyleTag::Named(Tag::SearchEnd) => 1,
            StyleTag::Named(Tag::End | Tag::EndUser) => 2,
            StyleTag::Named(Tag::Newline) => 4,
            _ => 3,
        }
    }

    fn is_structural(&self) -> bool {
        matches!(self, StyleTag::Named(tag) if tag.is_structural())
    }

    /// The tag, if this is a vocabulary tag
    pub fn tag(&self) -> Option<Tag> {
        match self {
            StyleTag::Named(tag) => Some(*tag),
            StyleTag::Raw(_) => None,
        }
    }
}

impl From<Tag> for StyleTag {
    fn from(tag: Tag) -> Self {
        StyleTag::Named(tag)
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleTag::Named(tag) => write!(f, "{tag}"),
            StyleTag::Raw(code) => write!(f, "{:?}", code),
        }
    }
}

/// A (possibly zero-width) span of the buffer carrying one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRun {
    pub tag: StyleTag,
    pub start: usize,
    pub end: usize,
}

impl StyleRun {
    pub fn new(tag: impl Into<StyleTag>, start: usize, end: usize) -> Self {
        Self {
            tag: tag.into(),
            start,
            end,
        }
    }

    pub fn is_zero_width(&self) -> bool {
        self.start == self.end
    }
}

/// Plain text buffer plus ordered style runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    /// Cached character count of `text`
    len: usize,
    runs: Vec<StyleRun>,
}

impl StyledText {
    /// Parse a tagged source string.
    ///
    /// Text not wrapped in any marker takes `default_tag`. Escape codes already
    /// present in `source` (including the literal `\033` spelling) start runs
    /// of their own. Search and description-white markers are not split out as
    /// spans; each one becomes a zero-width marker at its offset instead.
    ///
    /// Fails only when the vocabulary has no code for `default_tag` or for the
    /// end tag.
    pub fn from_tagged(
        source: &str,
        default_tag: Tag,
        vocab: &TagVocabulary,
    ) -> Result<Self, RenderError> {
        vocab.code(default_tag)?;
        vocab.end_code()?;

        let decoded = decode_literal_escapes(source);

        // Pass 1: raw escape codes
        let mut pieces: Vec<(StyleTag, String)> = split_escape_codes(&decoded)
            .into_iter()
            .map(|segment| {
                let tag = match segment.code {
                    None => StyleTag::Named(default_tag),
                    Some(code) => StyleTag::Raw(code.to_string()),
                };
                (tag, segment.text.to_string())
            })
            .collect();

        // Pass 2: inline tag markers
        for tag in vocab.splittable_tags() {
            let marker = tag.marker();
            let mut split = Vec::with_capacity(pieces.len());
            for (piece_tag, text) in pieces {
                let mut parts = text.split(marker.as_str());
                let first = parts.next().unwrap_or_default().to_string();
                split.push((piece_tag, first));
                split.extend(parts.map(|part| (StyleTag::Named(tag), part.to_string())));
            }
            pieces = split;
        }

        if pieces.len() > 1
            && pieces[0].1.is_empty()
            && pieces[0].0 == StyleTag::Named(default_tag)
        {
            pieces.remove(0);
        }

        let structural: Vec<(Tag, String)> = Tag::ALL
            .into_iter()
            .filter(|t| t.is_split_excluded() && vocab.contains(*t))
            .map(|t| (t, t.marker()))
            .collect();

        let mut text = String::new();
        let mut runs = Vec::with_capacity(pieces.len() + 1);
        let mut markers = Vec::new();
        let mut offset = 0;
        for (tag, piece) in pieces {
            let start = offset;
            let mut rest = piece.as_str();
            while let Some((at, found)) = find_first_marker(rest, &structural) {
                let before = &rest[..at];
                text.push_str(before);
                offset += before.chars().count();
                markers.push((found, offset));
                rest = &rest[at + found.marker().len()..];
            }
            text.push_str(rest);
            offset += rest.chars().count();
            runs.push(StyleRun::new(tag, start, offset));
        }
        runs.push(StyleRun::new(Tag::End, offset, offset));

        let mut styled = Self {
            text,
            len: offset,
            runs,
        };
        for (tag, pos) in markers {
            styled.insert_style(tag, pos);
        }
        Ok(styled)
    }

    /// The plain buffer, without any markers or escape codes
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Buffer length in characters
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// Display width of the buffer: wide, fullwidth and ambiguous characters
    /// count as two columns, everything else as one.
    pub fn char_width(&self) -> usize {
        str_width(&self.text)
    }

    /// Splice `text` into the buffer at character offset `pos`.
    ///
    /// A run that straddles `pos` grows; runs at or after `pos` shift. At
    /// offset 0 nothing straddles, so the runs starting there grow instead.
    pub fn insert_text(&mut self, text: &str, pos: usize) {
        let pos = pos.min(self.len);
        let n = text.chars().count();
        if n == 0 {
            return;
        }

        let byte = self.byte_offset(pos);
        self.text.insert_str(byte, text);
        self.len += n;

        for run in &mut self.runs {
            if run.end >= pos {
                if run.start > pos || (run.start == pos && pos > 0) {
                    run.start += n;
                }
                run.end += n;
            }
        }
        if pos == 0 {
            self.normalize();
        }
    }

    /// Start a `tag` run at character offset `pos`.
    ///
    /// The first run with `start < pos <= end` is cut at `pos` and the new run
    /// takes over the remainder of its span. A run already starting at `pos`
    /// hands its span over through [`normalize`](Self::normalize). Otherwise
    /// the new run is open-ended and spans to the end of the buffer.
    pub fn insert_style(&mut self, tag: impl Into<StyleTag>, pos: usize) {
        let tag = tag.into();
        let pos = pos.min(self.len);

        let end = match self
            .runs
            .iter()
            .position(|run| run.start < pos && pos <= run.end)
        {
            Some(idx) => std::mem::replace(&mut self.runs[idx].end, pos),
            None if self.runs.iter().any(|run| run.start == pos) => pos,
            None => {
                tracing::debug!(
                    "No run contains offset {pos} for {tag}, marker spans to end of buffer"
                );
                self.len
            }
        };

        self.runs.push(StyleRun::new(tag, pos, end));
        self.normalize();
    }

    /// Sort runs and settle the spans of runs sharing a start offset.
    ///
    /// Idempotent.
    pub fn normalize(&mut self) {
        self.runs.sort_by_key(|run| (run.start, run.tag.bucket()));

        let mut i = 0;
        while i < self.runs.len() {
            let start = self.runs[i].start;
            let mut j = i;
            let mut end = start;
            while j < self.runs.len() && self.runs[j].start == start {
                end = end.max(self.runs[j].end);
                j += 1;
            }
            for run in &mut self.runs[i..j - 1] {
                run.end = start;
            }
            self.runs[j - 1].end = end;
            i = j;
        }
    }

    /// Drop everything from character offset `pos` on.
    pub fn truncate(&mut self, pos: usize) {
        if pos >= self.len {
            return;
        }
        let byte = self.byte_offset(pos);
        self.text.truncate(byte);
        self.len = pos;
        for run in &mut self.runs {
            run.start = run.start.min(pos);
            run.end = run.end.min(pos);
        }
        self.normalize();
    }

    /// Serialize to an escape-coded string.
    ///
    /// Each run emits its code followed by its slice of the buffer; a code
    /// equal to the previous one with no text in between is emitted once.
    /// The output always ends with the end code.
    pub fn render(&mut self, vocab: &TagVocabulary) -> Result<String, RenderError> {
        self.normalize();

        let chars: Vec<char> = self.text.chars().collect();
        let mut out = String::with_capacity(self.text.len() + self.runs.len() * 8);
        let mut last_code: Option<String> = None;

        for (i, run) in self.runs.iter().enumerate() {
            let code = self.resolve(i, vocab)?;
            if last_code.as_deref() != Some(code.as_str()) {
                out.push_str(&code);
                last_code = Some(code);
            }

            let start = run.start.min(chars.len());
            let end = run.end.clamp(start, chars.len());
            if start < end {
                out.extend(&chars[start..end]);
                last_code = None;
            }
        }

        let end_code = vocab.end_code()?;
        if last_code.as_deref() != Some(end_code) {
            out.push_str(end_code);
        }
        Ok(out)
    }

    fn resolve(&self, i: usize, vocab: &TagVocabulary) -> Result<String, RenderError> {
        match &self.runs[i].tag {
            StyleTag::Named(Tag::SearchEnd) => self.replay(&self.runs[..i], vocab),
            StyleTag::Named(Tag::NewlineEnd) => {
                self.replay(&self.runs[..i.saturating_sub(1)], vocab)
            }
            StyleTag::Named(tag) => Ok(vocab.code(*tag)?.to_string()),
            StyleTag::Raw(code) => Ok(code.clone()),
        }
    }

    /// End code followed by every non-structural code among `before`.
    fn replay(&self, before: &[StyleRun], vocab: &TagVocabulary) -> Result<String, RenderError> {
        let mut code = vocab.end_code()?.to_string();
        for run in before.iter().filter(|run| !run.tag.is_structural()) {
            match &run.tag {
                StyleTag::Named(tag) => code.push_str(vocab.code(*tag)?),
                StyleTag::Raw(raw) => code.push_str(raw),
            }
        }
        Ok(code)
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(pos)
            .map_or(self.text.len(), |(byte, _)| byte)
    }
}

/// Leftmost occurrence of any of `markers` in `s`, as (byte offset, tag)
fn find_first_marker(s: &str, markers: &[(Tag, String)]) -> Option<(usize, Tag)> {
    markers
        .iter()
        .filter_map(|(tag, marker)| s.find(marker.as_str()).map(|at| (at, *tag)))
        .min_by_key(|(at, _)| *at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::ansi::strip_ansi;

    const DIR: &str = "\x1b[4m\x1b[36m";
    const FILE: &str = "\x1b[37m";
    const DESC: &str = "\x1b[33m";
    const END: &str = "\x1b[0m";
    const REVERSE: &str = "\x1b[07m";

    fn vocab() -> TagVocabulary {
        TagVocabulary::default()
    }

    fn runs_of(text: &StyledText) -> Vec<(StyleTag, usize, usize)> {
        text.runs()
            .iter()
            .map(|r| (r.tag.clone(), r.start, r.end))
            .collect()
    }

    fn named(tag: Tag, start: usize, end: usize) -> (StyleTag, usize, usize) {
        (StyleTag::Named(tag), start, end)
    }

    #[test]
    fn test_from_tagged_plain() {
        let text = StyledText::from_tagged("hello", Tag::File, &vocab()).unwrap();
        assert_eq!(text.text(), "hello");
        assert_eq!(
            runs_of(&text),
            vec![named(Tag::File, 0, 5), named(Tag::End, 5, 5)]
        );
    }

    #[test]
    fn test_from_tagged_markers() {
        let text = StyledText::from_tagged(";dir;project;end;", Tag::File, &vocab()).unwrap();
        assert_eq!(text.text(), "project");
        assert_eq!(
            runs_of(&text),
            vec![
                named(Tag::Dir, 0, 7),
                named(Tag::End, 7, 7),
                named(Tag::End, 7, 7)
            ]
        );
    }

    #[test]
    fn test_render_tagged_name() {
        let mut text = StyledText::from_tagged(";dir;project;end;", Tag::File, &vocab()).unwrap();
        assert_eq!(
            text.render(&vocab()).unwrap(),
            format!("{DIR}project{END}")
        );
    }

    #[test]
    fn test_from_tagged_mixed_colors() {
        let mut text = StyledText::from_tagged("a;r;b;end;c", Tag::Description, &vocab()).unwrap();
        assert_eq!(text.text(), "abc");
        assert_eq!(
            text.render(&vocab()).unwrap(),
            format!("{DESC}a\x1b[1;31mb{END}c{END}")
        );
    }

    #[test]
    fn test_from_tagged_raw_escape_codes() {
        let text =
            StyledText::from_tagged(";w;Dir \x1b[1;31m(Permission denied)", Tag::Description, &vocab())
                .unwrap();
        assert_eq!(text.text(), "Dir (Permission denied)");
        let tags: Vec<StyleTag> = text.runs().iter().map(|r| r.tag.clone()).collect();
        assert_eq!(
            tags,
            vec![
                StyleTag::Named(Tag::White),
                StyleTag::Raw("\x1b[1;31m".to_string()),
                StyleTag::Named(Tag::End),
            ]
        );
    }

    #[test]
    fn test_from_tagged_literal_escape_spelling() {
        let mut text = StyledText::from_tagged("\\033[32mok", Tag::Description, &vocab()).unwrap();
        assert_eq!(text.text(), "ok");
        assert_eq!(text.render(&vocab()).unwrap(), format!("\x1b[32mok{END}"));
    }

    #[test]
    fn test_from_tagged_structural_markers_become_zero_width() {
        let mut text = StyledText::from_tagged("ab;ss;cd;se;ef", Tag::Dir, &vocab()).unwrap();
        assert_eq!(text.text(), "abcdef");
        assert_eq!(
            text.render(&vocab()).unwrap(),
            format!("{DIR}ab{REVERSE}cd{END}{DIR}ef{END}")
        );
    }

    #[test]
    fn test_from_tagged_missing_vocabulary_entry() {
        let partial = TagVocabulary::empty().with_code(Tag::End, END);
        assert_eq!(
            StyledText::from_tagged("x", Tag::Dir, &partial),
            Err(RenderError::MissingTag(Tag::Dir))
        );
    }

    #[test]
    fn test_render_missing_tag_fails_whole_call() {
        let partial = TagVocabulary::empty()
            .with_code(Tag::End, END)
            .with_code(Tag::File, FILE);
        let mut text = StyledText::from_tagged("x", Tag::File, &partial).unwrap();
        text.insert_style(Tag::Red, 0);
        assert_eq!(
            text.render(&partial),
            Err(RenderError::MissingTag(Tag::Red))
        );
    }

    #[test]
    fn test_insert_text_grows_straddling_run() {
        let mut text = StyledText::from_tagged("ab;r;cd", Tag::File, &vocab()).unwrap();
        text.insert_text("XY", 1);
        assert_eq!(text.text(), "aXYbcd");
        assert_eq!(
            runs_of(&text),
            vec![
                named(Tag::File, 0, 4),
                named(Tag::Red, 4, 6),
                named(Tag::End, 6, 6)
            ]
        );
    }

    #[test]
    fn test_insert_text_at_run_boundary() {
        let mut text = StyledText::from_tagged("ab;r;cd", Tag::File, &vocab()).unwrap();
        text.insert_text("--", 2);
        assert_eq!(text.text(), "ab--cd");
        // The run ending at the boundary absorbs the new text
        assert_eq!(
            runs_of(&text),
            vec![
                named(Tag::File, 0, 4),
                named(Tag::Red, 4, 6),
                named(Tag::End, 6, 6)
            ]
        );
    }

    #[test]
    fn test_insert_text_multibyte_offsets() {
        let mut text = StyledText::from_tagged("日本語", Tag::File, &vocab()).unwrap();
        text.insert_text("の", 2);
        assert_eq!(text.text(), "日本の語");
        assert_eq!(text.len(), 4);
        assert_eq!(text.char_width(), 8);
    }

    #[test]
    fn test_insert_style_splits_containing_run() {
        let mut text = StyledText::from_tagged("project", Tag::Dir, &vocab()).unwrap();
        text.insert_style(Tag::SearchStart, 2);
        text.insert_style(Tag::SearchEnd, 4);
        assert_eq!(
            runs_of(&text),
            vec![
                named(Tag::Dir, 0, 2),
                named(Tag::SearchStart, 2, 4),
                named(Tag::SearchEnd, 4, 7),
                named(Tag::End, 7, 7)
            ]
        );
        assert_eq!(
            text.render(&vocab()).unwrap(),
            format!("{DIR}pr{REVERSE}oj{END}{DIR}ect{END}")
        );
    }

    #[test]
    fn test_insert_style_at_start_takes_over_span() {
        let mut text = StyledText::from_tagged("abc", Tag::File, &vocab()).unwrap();
        text.insert_style(Tag::Red, 0);
        assert_eq!(
            runs_of(&text),
            vec![
                named(Tag::File, 0, 0),
                named(Tag::Red, 0, 3),
                named(Tag::End, 3, 3)
            ]
        );
    }

    #[test]
    fn test_insert_style_never_changes_buffer() {
        let mut text = StyledText::from_tagged("a;g;bc", Tag::File, &vocab()).unwrap();
        text.insert_style(Tag::Newline, 2);
        assert_eq!(text.text(), "abc");
        assert_eq!(text.len(), 3);
    }

    #[test]
    fn test_normalize_coincident_markers() {
        let mut text = StyledText::from_tagged("abcdef", Tag::Description, &vocab()).unwrap();
        text.insert_style(Tag::Newline, 3);
        text.insert_style(Tag::SearchEnd, 3);
        text.insert_style(Tag::NewlineEnd, 3);
        let order: Vec<StyleTag> = text
            .runs()
            .iter()
            .filter(|r| r.start == 3)
            .map(|r| r.tag.clone())
            .collect();
        assert_eq!(
            order,
            vec![
                StyleTag::Named(Tag::NewlineEnd),
                StyleTag::Named(Tag::SearchEnd),
                StyleTag::Named(Tag::Newline),
            ]
        );
        // Only the last run of the group keeps the span
        let last = text.runs().iter().rfind(|r| r.start == 3).unwrap();
        assert_eq!(last.end, 6);
    }

    #[test]
    fn test_newline_end_resumes_color_of_interrupted_run() {
        let mut text = StyledText::from_tagged("ab;r;c\nd", Tag::Description, &vocab()).unwrap();
        text.insert_text("│ ", 4);
        text.insert_style(Tag::Newline, 4);
        text.insert_style(Tag::NewlineEnd, 6);
        assert_eq!(text.text(), "abc\n│ d");
        assert_eq!(
            text.render(&vocab()).unwrap(),
            format!("{DESC}ab\x1b[1;31mc\n{END}│ {END}{DESC}\x1b[1;31md{END}")
        );
    }

    #[test]
    fn test_truncate() {
        let mut text = StyledText::from_tagged("one;r;\n  ", Tag::Description, &vocab()).unwrap();
        text.truncate(3);
        assert_eq!(text.text(), "one");
        assert!(text.runs().iter().all(|r| r.end <= 3));
        assert_eq!(strip_ansi(&text.render(&vocab()).unwrap()), "one");
    }

    #[test]
    fn test_char_width_counts_wide_as_two() {
        let text = StyledText::from_tagged("ab日本", Tag::File, &vocab()).unwrap();
        assert_eq!(text.len(), 4);
        assert_eq!(text.char_width(), 6);
    }

    #[test]
    fn test_empty_source() {
        let mut text = StyledText::from_tagged("", Tag::File, &vocab()).unwrap();
        assert!(text.is_empty());
        assert_eq!(text.render(&vocab()).unwrap(), format!("{END}{FILE}{END}"));
    }

    #[test]
    fn test_insert_text_at_start() {
        let mut text = StyledText::from_tagged("abc", Tag::File, &vocab()).unwrap();
        text.insert_text("XY", 0);
        assert_eq!(
            runs_of(&text),
            vec![named(Tag::File, 0, 5), named(Tag::End, 5, 5)]
        );
        assert_eq!(text.render(&vocab()).unwrap(), format!("{FILE}XYabc{END}"));
    }

    #[test]
    fn test_insert_text_into_empty_buffer() {
        let mut text = StyledText::from_tagged("", Tag::File, &vocab()).unwrap();
        text.insert_text("XY", 0);
        assert_eq!(text.text(), "XY");
        let rendered = text.render(&vocab()).unwrap();
        assert_eq!(strip_ansi(&rendered), "XY");
        assert!(rendered.contains(&format!("{FILE}XY")));
    }

    #[test]
    fn test_insert_text_at_start_of_tagged_source() {
        let mut text = StyledText::from_tagged(";r;ab;g;cd", Tag::File, &vocab()).unwrap();
        text.insert_text(">", 0);
        assert_eq!(
            text.render(&vocab()).unwrap(),
            format!("\x1b[1;31m>ab\x1b[1;32mcd{END}")
        );
    }

    #[test]
    fn test_insert_style_at_start_takes_over_first_run_only() {
        let mut text = StyledText::from_tagged("ab;r;cd", Tag::File, &vocab()).unwrap();
        text.insert_style(Tag::SearchStart, 0);
        text.insert_style(Tag::SearchEnd, 1);
        let rendered = text.render(&vocab()).unwrap();
        assert_eq!(strip_ansi(&rendered), "abcd");
        assert_eq!(
            rendered,
            format!("{FILE}{REVERSE}a{END}{FILE}b\x1b[1;31mcd{END}")
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn plain_text() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9 日本]{0,24}"
        }

        /// One source fragment and what it contributes to the plain buffer.
        ///
        /// Plain fragments avoid lowercase letters and `;` so that neighbouring
        /// markers can never join into another marker.
        fn tagged_piece() -> impl Strategy<Value = (String, String)> {
            prop_oneof![
                3 => "[A-Z0-9 日本αé]{1,5}".prop_map(|s| (s.clone(), s)),
                2 => prop::sample::select(Tag::ALL.to_vec())
                    .prop_map(|tag| (tag.marker(), String::new())),
                1 => prop::sample::select(vec!["\x1b[1m", "\x1b[31m", "\x1b[1;32m", "\x1b[0m"])
                    .prop_map(|code| (code.to_string(), String::new())),
            ]
        }

        /// A tagged source string and its tag-free projection
        fn tagged_text() -> impl Strategy<Value = (String, String)> {
            prop::collection::vec(tagged_piece(), 0..10).prop_map(|pieces| {
                pieces
                    .into_iter()
                    .fold((String::new(), String::new()), |(mut src, mut plain), (s, p)| {
                        src.push_str(&s);
                        plain.push_str(&p);
                        (src, plain)
                    })
            })
        }

        fn splice(s: &str, t: &str, p: usize) -> String {
            let chars: Vec<char> = s.chars().collect();
            chars[..p]
                .iter()
                .copied()
                .chain(t.chars())
                .chain(chars[p..].iter().copied())
                .collect()
        }

        fn marker_tag() -> impl Strategy<Value = Tag> {
            prop::sample::select(vec![
                Tag::Newline,
                Tag::NewlineEnd,
                Tag::SearchStart,
                Tag::SearchEnd,
                Tag::End,
                Tag::Red,
                Tag::Blue,
            ])
        }

        proptest! {
            /// Style insertion leaves the plain text alone and emits the
            /// inserted code exactly once
            #[test]
            fn prop_insert_style_preserves_plain_text(s in plain_text(), p in 0..32usize) {
                let vocab = vocab();
                let mut text = StyledText::from_tagged(&s, Tag::File, &vocab).unwrap();
                let p = p.min(text.len());
                text.insert_style(Tag::Red, p);
                let rendered = text.render(&vocab).unwrap();

                let plain = strip_ansi(&rendered).into_owned();
                prop_assert_eq!(rendered.matches("\x1b[1;31m").count(), 1);
                prop_assert_eq!(plain, s);
            }

            /// Same for tagged sources with raw codes and structural markers
            #[test]
            fn prop_insert_style_preserves_tagged_projection(
                (source, projection) in tagged_text(),
                p in 0..64usize,
            ) {
                let vocab = vocab();
                let mut text = StyledText::from_tagged(&source, Tag::File, &vocab).unwrap();
                prop_assert_eq!(text.text(), projection.as_str());

                let red_runs = |text: &StyledText| {
                    text.runs().iter().filter(|r| r.tag == StyleTag::Named(Tag::Red)).count()
                };
                let before = red_runs(&text);
                let p = p.min(text.len());
                text.insert_style(Tag::Red, p);
                prop_assert_eq!(red_runs(&text), before + 1);

                let rendered = text.render(&vocab).unwrap();
                let plain = strip_ansi(&rendered).into_owned();
                prop_assert!(rendered.contains("\x1b[1;31m"));
                prop_assert_eq!(plain, projection);
            }

            /// Text insertion splices exactly the inserted text
            #[test]
            fn prop_insert_text_splices(
                s in plain_text(),
                t in "[a-z│ ]{0,8}",
                p in 0..32usize,
            ) {
                let vocab = vocab();
                let mut text = StyledText::from_tagged(&s, Tag::Description, &vocab).unwrap();
                let p = p.min(text.len());
                text.insert_text(&t, p);

                let rendered = text.render(&vocab).unwrap();
                let plain = strip_ansi(&rendered).into_owned();
                prop_assert_eq!(plain, splice(&s, &t, p));
            }

            /// Text insertion into tagged sources, after highlighting
            #[test]
            fn prop_insert_text_splices_tagged(
                (source, projection) in tagged_text(),
                marks in prop::collection::vec(0..64usize, 0..3),
                t in "[a-z│ ]{0,8}",
                p in 0..64usize,
            ) {
                let vocab = vocab();
                let mut text = StyledText::from_tagged(&source, Tag::Description, &vocab).unwrap();
                for m in marks {
                    let m = m.min(text.len());
                    text.insert_style(Tag::SearchStart, m);
                    text.insert_style(Tag::SearchEnd, m);
                }
                let p = p.min(text.len());
                text.insert_text(&t, p);

                let rendered = text.render(&vocab).unwrap();
                let plain = strip_ansi(&rendered).into_owned();
                prop_assert_eq!(plain, splice(&projection, &t, p));
            }

            /// normalize() is idempotent
            #[test]
            fn prop_normalize_idempotent(
                s in plain_text(),
                inserts in prop::collection::vec((marker_tag(), 0..32usize), 0..6),
            ) {
                let mut text = StyledText::from_tagged(&s, Tag::Dir, &vocab()).unwrap();
                for (tag, pos) in inserts {
                    text.insert_style(tag, pos);
                }
                text.normalize();
                let once = text.clone();
                text.normalize();
                prop_assert_eq!(once, text);
            }

            /// Runs stay sorted, well-formed and within the buffer
            #[test]
            fn prop_runs_well_formed(
                s in plain_text(),
                inserts in prop::collection::vec((marker_tag(), 0..32usize), 0..6),
                t in "[a-z]{0,4}",
                tp in 0..32usize,
            ) {
                let mut text = StyledText::from_tagged(&s, Tag::Dir, &vocab()).unwrap();
                for (tag, pos) in inserts {
                    text.insert_style(tag, pos);
                }
                text.insert_text(&t, tp);
                text.normalize();

                let runs = text.runs();
                for pair in runs.windows(2) {
                    prop_assert!(pair[0].start <= pair[1].start);
                }
                for run in runs {
                    prop_assert!(run.start <= run.end);
                    prop_assert!(run.end <= text.len());
                }
            }

            /// Coincident markers come out in bucket order whatever the
            /// insertion order
            #[test]
            fn prop_coincident_marker_order(
                order in Just(vec![Tag::Newline, Tag::SearchEnd, Tag::NewlineEnd, Tag::Red])
                    .prop_shuffle(),
            ) {
                let mut text = StyledText::from_tagged("abcdef", Tag::Description, &vocab()).unwrap();
                for tag in order {
                    text.insert_style(tag, 3);
                }
                let at: Vec<StyleTag> = text
                    .runs()
                    .iter()
                    .filter(|r| r.start == 3)
                    .map(|r| r.tag.clone())
                    .collect();
                let pos = |tag: Tag| at.iter().position(|t| *t == StyleTag::Named(tag)).unwrap();
                prop_assert!(pos(Tag::NewlineEnd) < pos(Tag::SearchEnd));
                prop_assert!(pos(Tag::SearchEnd) < pos(Tag::Red));
                prop_assert!(pos(Tag::Red) < pos(Tag::Newline));
            }
        }
    }
}
