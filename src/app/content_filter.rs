//! Content filter: search and the "too many items" prompt
//!
//! Both passes run on parsed items before anything is presented.

use crate::view::presenter::Item;
use crate::view::search_highlight::SearchHighlighter;
use crate::view::theme::TagVocabulary;
use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Prompts on stderr and reads the answer from stdin
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let mut stderr = io::stderr();
        write!(stderr, "{prompt}")?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

/// `y` or `yes`, any case
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn limit_prompt(count: usize) -> String {
    format!("too many items ({count}). show these? [y-n] : ")
}

/// Highlight `term` in every item and keep the items that match in their
/// name or description.
///
/// An invalid term is reported once on `err` and every item is kept without
/// highlighting.
pub fn apply_search(
    items: Vec<Item>,
    term: &str,
    vocab: &TagVocabulary,
    err: &mut dyn Write,
) -> io::Result<Vec<Item>> {
    let searcher = match SearchHighlighter::new(term) {
        Ok(searcher) => searcher,
        Err(e) => {
            tracing::warn!("Not highlighting: {}", e);
            writeln!(err, "lsi: {e}")?;
            return Ok(items);
        }
    };

    let matched: Vec<Item> = items
        .into_iter()
        .filter_map(|mut item| {
            let in_name = !searcher.highlight(&mut item.styled_name, vocab).is_empty();
            let in_description = item
                .description
                .as_mut()
                .is_some_and(|d| !searcher.highlight(d, vocab).is_empty());
            (in_name || in_description).then_some(item)
        })
        .collect();

    tracing::debug!("{} item(s) match {:?}", matched.len(), searcher.term());
    Ok(matched)
}

/// Ask before showing more than `limit` items; `0` never asks.
///
/// A negative answer empties the listing.
pub fn apply_limit(
    items: Vec<Item>,
    limit: usize,
    confirm: &mut dyn Confirm,
) -> io::Result<Vec<Item>> {
    if limit == 0 || items.len() <= limit {
        return Ok(items);
    }
    if confirm.confirm(&limit_prompt(items.len()))? {
        Ok(items)
    } else {
        Ok(Vec::new())
    }
}
