//! Text filtering for the dropdown list.
//!
//! The dropdown owns no filtering logic. It holds a [`FilteredItems`] handle
//! that maps `(items, name_key, search_text)` to an ordered subsequence of
//! `items` through a pluggable [`Filter`].

mod fuzzy;
mod substring;

use std::sync::Arc;

use siftdom::escape_text;
use unicode_segmentation::UnicodeSegmentation;

use crate::item::Item;

pub use fuzzy::FuzzyFilter;
pub use substring::SubstringFilter;

/// A text filter over items.
///
/// Implementations must be deterministic for a given `(items, name_key,
/// query)` and return an ordered subsequence of `items`, optionally annotated
/// with a `highlightedResult`. An empty query returns every item unannotated.
///
/// Highlight markup is rendered without sanitization, so implementations
/// must escape item text themselves (see [`highlight`]).
pub trait Filter: Send + Sync {
    fn filter(&self, items: &[Item], name_key: &str, query: &str) -> Vec<Item>;
}

impl<F> Filter for F
where
    F: Fn(&[Item], &str, &str) -> Vec<Item> + Send + Sync,
{
    fn filter(&self, items: &[Item], name_key: &str, query: &str) -> Vec<Item> {
        self(items, name_key, query)
    }
}

/// Live filter state: the source items, the search text and its result.
#[derive(Clone)]
pub struct FilteredItems {
    filter: Arc<dyn Filter>,
    items: Vec<Item>,
    name_key: String,
    search_text: String,
    filtered: Vec<Item>,
}

impl std::fmt::Debug for FilteredItems {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredItems")
            .field("items", &self.items.len())
            .field("name_key", &self.name_key)
            .field("search_text", &self.search_text)
            .field("filtered", &self.filtered.len())
            .finish()
    }
}

impl FilteredItems {
    /// Start with an empty search text.
    pub fn new(filter: Arc<dyn Filter>, items: Vec<Item>, name_key: impl Into<String>) -> Self {
        let mut state = Self {
            filter,
            items,
            name_key: name_key.into(),
            search_text: String::new(),
            filtered: Vec::new(),
        };
        state.refilter();
        state
    }

    pub fn filtered_items(&self) -> &[Item] {
        &self.filtered
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Update the search text and re-run the filter.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search_text {
            return;
        }
        self.search_text = text;
        self.refilter();
    }

    /// Replace the source items, keeping the search text.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = self
            .filter
            .filter(&self.items, &self.name_key, &self.search_text);
        log::trace!(
            "[filter] query={:?} -> {}/{} items",
            self.search_text,
            self.filtered.len(),
            self.items.len()
        );
    }
}

/// Wrap the characters at `indices` (char positions in `label`) in `<em>`,
/// merging adjacent positions into one run. All text is escaped.
///
/// ```
/// use sift::filter::highlight;
///
/// assert_eq!(highlight("Banana", &[1, 2]), "B<em>an</em>ana");
/// assert_eq!(highlight("a&b", &[0, 2]), "<em>a</em>&amp;<em>b</em>");
/// ```
pub fn highlight(label: &str, indices: &[u32]) -> String {
    wrap_units(label.len(), label.chars().map(String::from), indices)
}

/// Like [`highlight`], but `indices` count extended grapheme clusters, so a
/// base character and its combining marks are wrapped together.
///
/// ```
/// use sift::filter::highlight_graphemes;
///
/// assert_eq!(highlight_graphemes("e\u{301}clair", &[1, 2]), "e\u{301}<em>cl</em>air");
/// ```
pub fn highlight_graphemes(label: &str, indices: &[u32]) -> String {
    wrap_units(
        label.len(),
        label.graphemes(true).map(str::to_string),
        indices,
    )
}

fn wrap_units(len: usize, units: impl Iterator<Item = String>, indices: &[u32]) -> String {
    let mut out = String::with_capacity(len + 9);
    let mut open = false;

    for (i, unit) in units.enumerate() {
        let matched = indices.contains(&(i as u32));
        if matched && !open {
            out.push_str("<em>");
            open = true;
        } else if !matched && open {
            out.push_str("</em>");
            open = false;
        }
        out.push_str(&escape_text(&unit));
    }

    if open {
        out.push_str("</em>");
    }
    out
}
