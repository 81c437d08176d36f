//! The listing pipeline behind the `lsi` binary

use crate::app::content_filter::{apply_limit, apply_search, Confirm};
use crate::config::Config;
use crate::services::fs::{load_dir, FsEntry, KindFilter, LoadOptions};
use crate::view::presenter::{Item, ItemPresenter, SiblingPlace};
use crate::view::styled_text::StyledText;
use crate::view::theme::{Tag, TagVocabulary};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options of one listing run
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub dir: PathBuf,
    pub show_hidden: bool,
    pub kind_filter: KindFilter,
    pub search: Option<String>,
    /// Overrides `limit_file_num` from the config
    pub limit_file_num: Option<usize>,
    /// Overrides `description_lines` from the config
    pub description_lines: Option<usize>,
}

/// Where the pipeline talks to the outside world
pub struct Io<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub confirm: &'a mut dyn Confirm,
}

/// List `options.dir` and write one line per item to `io.out`.
pub fn run(options: &ListOptions, config: &Config, vocab: &TagVocabulary, io: Io<'_>) -> Result<()> {
    let load_options = LoadOptions {
        show_hidden: options.show_hidden,
        kind_filter: options.kind_filter,
        description_lines: options.description_lines.or(config.description_lines),
    };
    let entries = load_dir(&options.dir, config, &load_options)?;

    let mut items = entries
        .iter()
        .map(|entry| to_item(entry, vocab))
        .collect::<Result<Vec<_>>>()?;

    if let Some(term) = options.search.as_deref().filter(|t| !t.is_empty()) {
        items = apply_search(items, term, vocab, io.err)?;
    }
    let limit = options.limit_file_num.unwrap_or(config.limit_file_num);
    items = apply_limit(items, limit, io.confirm).context("Failed to read answer")?;

    let presenter = ItemPresenter::new(vocab);
    let header = header_text(&options.dir, vocab)?;
    writeln!(io.out, "{}", presenter.present(Item::root(header))?)?;

    let count = items.len();
    for (i, item) in items.into_iter().enumerate() {
        let place = if i + 1 == count {
            SiblingPlace::Last
        } else {
            SiblingPlace::Middle
        };
        let name = item.name.clone();
        let line = presenter
            .present(item.with_place(place))
            .with_context(|| format!("Failed to render {name}"))?;
        writeln!(io.out, "{line}")?;
    }
    io.out.flush()?;
    Ok(())
}

fn to_item(entry: &FsEntry, vocab: &TagVocabulary) -> Result<Item> {
    let item = Item::new(&entry.name, entry.kind, 0, vocab)?;
    Ok(match &entry.description {
        Some(description) => item.with_description(description, vocab)?,
        None => item,
    })
}

/// `<parent>/<name>/` with the last component highlighted
pub fn header_text(dir: &Path, vocab: &TagVocabulary) -> Result<StyledText> {
    let absolute = std::path::absolute(dir)
        .with_context(|| format!("Failed to resolve {}", dir.display()))?;
    let source = match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => format!(
            "{}/{}{}/{}",
            parent.display().to_string().trim_end_matches('/'),
            Tag::PwdCurrent.marker(),
            name.to_string_lossy(),
            Tag::End.marker()
        ),
        _ => format!("{}{}", absolute.display(), Tag::End.marker()),
    };
    Ok(StyledText::from_tagged(&source, Tag::Pwd, vocab)?)
}
