//! Tag vocabulary and color table
//!
//! Every style in lsi is named by a [`Tag`]. A tag has a short textual marker
//! (`;dir;`, `;r;`, ...) that users embed in description files, a config key
//! used by `~/.lsirc`, and an escape code looked up in the [`TagVocabulary`].
//!
//! The vocabulary is built once from the loaded [`Config`] and then passed by
//! reference to everything that renders; it is never mutated afterwards.

use crate::config::Config;
use crate::primitives::ansi::sgr;
use std::collections::HashMap;
use std::fmt;

/// Delimiter wrapped around every tag name to form its marker.
pub const TAG_DELIMITER: char = ';';

/// Symbolic style names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Pwd,
    PwdCurrent,
    Dir,
    File,
    Description,
    SearchStart,
    SearchEnd,
    End,
    Newline,
    NewlineEnd,
    EndUser,
    Underline,
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
    Cyan,
    White,
    DescriptionWhite,
}

impl Tag {
    /// Every tag, in the order the tag-splitting pass visits them.
    pub const ALL: [Tag; 20] = [
        Tag::Pwd,
        Tag::PwdCurrent,
        Tag::Dir,
        Tag::File,
        Tag::Description,
        Tag::SearchStart,
        Tag::SearchEnd,
        Tag::End,
        Tag::Newline,
        Tag::NewlineEnd,
        Tag::EndUser,
        Tag::Underline,
        Tag::Red,
        Tag::Yellow,
        Tag::Green,
        Tag::Blue,
        Tag::Purple,
        Tag::Cyan,
        Tag::White,
        Tag::DescriptionWhite,
    ];

    /// Short name used inside the marker, e.g. `dir` for `;dir;`
    pub fn name(self) -> &'static str {
        match self {
            Tag::Pwd => "pwd",
            Tag::PwdCurrent => "pwd_c",
            Tag::Dir => "dir",
            Tag::File => "file",
            Tag::Description => "desc",
            Tag::SearchStart => "ss",
            Tag::SearchEnd => "se",
            Tag::End => "end",
            Tag::Newline => "nl",
            Tag::NewlineEnd => "nle",
            Tag::EndUser => "e",
            Tag::Underline => "_",
            Tag::Red => "r",
            Tag::Yellow => "y",
            Tag::Green => "g",
            Tag::Blue => "b",
            Tag::Purple => "p",
            Tag::Cyan => "c",
            Tag::White => "w",
            Tag::DescriptionWhite => "dw",
        }
    }

    /// Key used for this tag in the `colors` table of `~/.lsirc`
    pub fn config_key(self) -> &'static str {
        match self {
            Tag::Pwd => "pwd",
            Tag::PwdCurrent => "pwd_current",
            Tag::Dir => "dir",
            Tag::File => "file",
            Tag::Description => "description",
            Tag::SearchStart => "search",
            Tag::SearchEnd => "search_end",
            Tag::End => "end",
            Tag::Newline => "newline",
            Tag::NewlineEnd => "newline_end",
            Tag::EndUser => "end_user",
            Tag::Underline => "underline",
            Tag::Red => "red",
            Tag::Yellow => "yellow",
            Tag::Green => "green",
            Tag::Blue => "blue",
            Tag::Purple => "purple",
            Tag::Cyan => "cyan",
            Tag::White => "white",
            Tag::DescriptionWhite => "description_white",
        }
    }

    pub fn from_config_key(key: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|t| t.config_key() == key)
    }

    /// The textual marker embedded in source strings, e.g. `;dir;`
    pub fn marker(self) -> String {
        format!("{TAG_DELIMITER}{}{TAG_DELIMITER}", self.name())
    }

    /// Tags left in the text by the tag-splitting pass.
    pub fn is_split_excluded(self) -> bool {
        matches!(
            self,
            Tag::SearchStart | Tag::SearchEnd | Tag::DescriptionWhite
        )
    }

    /// Zero-width tags whose codes are never replayed when a search-end or
    /// newline-end marker reconstructs the color in effect.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Tag::SearchStart
                | Tag::SearchEnd
                | Tag::Newline
                | Tag::NewlineEnd
                | Tag::DescriptionWhite
        )
    }

    fn default_code(self) -> String {
        let code = match self {
            Tag::Pwd | Tag::Dir => "\x1b[4m\x1b[36m",
            Tag::PwdCurrent => "\x1b[1;36m",
            Tag::File | Tag::White | Tag::DescriptionWhite => "\x1b[37m",
            Tag::Description | Tag::Yellow => "\x1b[33m",
            Tag::SearchStart => "\x1b[07m",
            Tag::SearchEnd | Tag::End | Tag::Newline | Tag::NewlineEnd | Tag::EndUser => {
                "\x1b[0m"
            }
            Tag::Underline => "\x1b[4m",
            Tag::Red => "\x1b[1;31m",
            Tag::Green => "\x1b[1;32m",
            Tag::Blue => "\x1b[1;34m",
            Tag::Purple => "\x1b[1;35m",
            Tag::Cyan => "\x1b[36m",
        };
        code.to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Errors raised while resolving tags to escape codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no color configured for tag {0}")]
    MissingTag(Tag),
}

/// Read-only mapping from tags to escape codes, plus the indent prefix.
#[derive(Debug, Clone)]
pub struct TagVocabulary {
    codes: HashMap<Tag, String>,
    indent: String,
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl TagVocabulary {
    /// A vocabulary with no codes at all. Mostly useful to build partial
    /// vocabularies with [`TagVocabulary::with_code`].
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
            indent: String::new(),
        }
    }

    /// Build the vocabulary from defaults and the config's color overrides.
    ///
    /// The config is expected to be validated; unknown keys are skipped.
    pub fn from_config(config: &Config) -> Self {
        let mut codes: HashMap<Tag, String> =
            Tag::ALL.into_iter().map(|t| (t, t.default_code())).collect();

        for (key, params) in &config.colors {
            match Tag::from_config_key(key) {
                Some(tag) => {
                    let code: String = params.iter().map(|p| sgr(p)).collect();
                    codes.insert(tag, code);
                }
                None => tracing::warn!("Ignoring color for unknown tag key {key:?}"),
            }
        }

        // end_user resets then resumes the description color, unless the
        // user gave it a color of its own
        if !config.colors.contains_key(Tag::EndUser.config_key()) {
            let composite = format!("{}{}", codes[&Tag::End], codes[&Tag::Description]);
            codes.insert(Tag::EndUser, composite);
        }

        let indent = format!("{}{}", codes[&Tag::End], config.indent);
        Self { codes, indent }
    }

    /// Replace (or add) the code of one tag.
    pub fn with_code(mut self, tag: Tag, code: impl Into<String>) -> Self {
        self.codes.insert(tag, code.into());
        self
    }

    /// Escape code for `tag`
    pub fn code(&self, tag: Tag) -> Result<&str, RenderError> {
        self.codes
            .get(&tag)
            .map(String::as_str)
            .ok_or(RenderError::MissingTag(tag))
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.codes.contains_key(&tag)
    }

    /// The code that ends any style
    pub fn end_code(&self) -> Result<&str, RenderError> {
        self.code(Tag::End)
    }

    /// Printed between the tree glyph and the item name
    pub fn indent_prefix(&self) -> &str {
        &self.indent
    }

    /// Tags the tag-splitting pass looks for, in visiting order.
    pub fn splittable_tags(&self) -> impl Iterator<Item = Tag> + '_ {
        Tag::ALL
            .into_iter()
            .filter(|t| !t.is_split_excluded() && self.contains(*t))
    }
}
