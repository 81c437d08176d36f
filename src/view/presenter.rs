//! Turning listing items into finished output lines
//!
//! Each [`Item`] goes through `parsed -> highlighted (optional) -> indented
//! -> rendered`. Parsing happens in [`Item::new`] / [`Item::with_description`],
//! highlighting is done by the content filter, and [`ItemPresenter::present`]
//! performs the last two steps and consumes the item.

use crate::view::styled_text::StyledText;
use crate::view::theme::{RenderError, Tag, TagVocabulary};

/// Separator between an item's name and its description
pub const NAME_SEPARATOR: &str = " / ";

/// Width of one depth level in the tree
const DEPTH_INDENT: &str = "   ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Dir,
    File,
}

impl ItemKind {
    /// Shown in place of a missing description
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Dir => "Dir",
            ItemKind::File => "File",
        }
    }

    /// Base color of the item's name
    pub fn tag(self) -> Tag {
        match self {
            ItemKind::Dir => Tag::Dir,
            ItemKind::File => Tag::File,
        }
    }
}

/// Where an item sits among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingPlace {
    Middle,
    Last,
    /// The single top-level line; only its description is printed
    Root,
}

impl SiblingPlace {
    pub fn glyph(self) -> &'static str {
        match self {
            SiblingPlace::Middle => "├",
            SiblingPlace::Last => "└",
            SiblingPlace::Root => "",
        }
    }

    /// Leads every continuation line of a multi-line description
    pub fn guide(self) -> &'static str {
        match self {
            SiblingPlace::Middle => "│",
            SiblingPlace::Last | SiblingPlace::Root => " ",
        }
    }
}

/// A listed directory entry, ready for presentation
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    /// `name` parsed with the kind's base color
    pub styled_name: StyledText,
    pub kind: ItemKind,
    pub depth: usize,
    pub description: Option<StyledText>,
    pub place: SiblingPlace,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        kind: ItemKind,
        depth: usize,
        vocab: &TagVocabulary,
    ) -> Result<Self, RenderError> {
        let name = name.into();
        let styled_name = StyledText::from_tagged(&name, kind.tag(), vocab)?;
        Ok(Self {
            name,
            styled_name,
            kind,
            depth,
            description: None,
            place: SiblingPlace::Middle,
        })
    }

    /// The top-level line: nothing but `description`
    pub fn root(description: StyledText) -> Self {
        Self {
            name: String::new(),
            styled_name: StyledText::default(),
            kind: ItemKind::Dir,
            depth: 0,
            description: Some(description),
            place: SiblingPlace::Root,
        }
    }

    /// Parse `source` as this item's description, colored as a description
    /// unless its markers say otherwise.
    pub fn with_description(
        mut self,
        source: &str,
        vocab: &TagVocabulary,
    ) -> Result<Self, RenderError> {
        self.description = Some(StyledText::from_tagged(source, Tag::Description, vocab)?);
        Ok(self)
    }

    pub fn with_place(mut self, place: SiblingPlace) -> Self {
        self.place = place;
        self
    }
}

/// Renders items against one vocabulary
#[derive(Debug, Clone, Copy)]
pub struct ItemPresenter<'a> {
    vocab: &'a TagVocabulary,
}

impl<'a> ItemPresenter<'a> {
    pub fn new(vocab: &'a TagVocabulary) -> Self {
        Self { vocab }
    }

    /// Produce the finished output line for `item`.
    pub fn present(&self, item: Item) -> Result<String, RenderError> {
        let Item {
            mut styled_name,
            kind,
            depth,
            description,
            place,
            ..
        } = item;

        let mut description = match description {
            Some(mut text) => {
                let indent = depth * DEPTH_INDENT.len() + styled_name.char_width() + 3;
                reflow(&mut text, place.guide(), indent);
                text
            }
            None => StyledText::from_tagged(kind.label(), Tag::End, self.vocab)?,
        };
        let rendered_description = description.render(self.vocab)?;

        if place == SiblingPlace::Root {
            return Ok(rendered_description);
        }

        let rendered_name = styled_name.render(self.vocab)?;
        Ok(format!(
            "{}{}{}{}{}{}",
            place.glyph(),
            DEPTH_INDENT.repeat(depth),
            self.vocab.indent_prefix(),
            rendered_name,
            NAME_SEPARATOR,
            rendered_description
        ))
    }
}

/// Indent every continuation line of `text` by `guide` plus `indent` blanks.
///
/// A trailing segment made only of spaces is dropped first. Each line break
/// and the prefix after it are wrapped between newline and newline-end
/// markers so the color that was active before the break resumes after it.
/// The prefix itself is drawn in description white.
fn reflow(text: &mut StyledText, guide: &str, indent: usize) {
    let mut breaks: Vec<usize> = text
        .text()
        .chars()
        .enumerate()
        .filter_map(|(i, c)| (c == '\n').then_some(i))
        .collect();

    if let Some(&last) = breaks.last() {
        let tail_is_blank = text.text().chars().skip(last + 1).all(|c| c == ' ');
        if tail_is_blank {
            text.truncate(last);
            breaks.pop();
        }
    }

    let prefix = format!("{guide}{}", " ".repeat(indent));
    let prefix_len = prefix.chars().count();

    // Right to left so earlier offsets stay put
    for &k in breaks.iter().rev() {
        let pos = k + 1;
        text.insert_text(&prefix, pos);
        text.insert_style(Tag::Newline, k);
        text.insert_style(Tag::DescriptionWhite, pos);
        text.insert_style(Tag::NewlineEnd, pos + prefix_len);
    }
}
