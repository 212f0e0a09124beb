//! Free text to [`Dataset`]: one item per non-empty line.

use crate::foundation::core::{Dataset, Item};

/// Title given to datasets parsed from pasted text.
pub const CUSTOM_TEXT_TITLE: &str = "Custom Text";

/// Split `text` on `\n`, trim each line and drop blank ones.
///
/// Ids are 1-based among the surviving lines, so blank lines never leave gaps. Items carry
/// no translation.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_text(text: &str) -> Dataset {
    let items: Vec<Item> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .zip(1u32..)
        .map(|(line, id)| Item::new(id, line, ""))
        .collect();
    tracing::debug!(items = items.len(), "parsed text");
    Dataset::from_items(CUSTOM_TEXT_TITLE, items)
}

#[cfg(test)]
#[path = "../tests/unit/parser.rs"]
mod tests;
