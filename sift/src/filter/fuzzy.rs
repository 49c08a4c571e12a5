//! Fuzzy filtering using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::item::Item;

use super::{Filter, highlight, highlight_graphemes};

/// Fuzzy filter using nucleo-matcher.
///
/// Unlike a ranked picker, matches keep the original item order so the list
/// stays a subsequence of the source. Matched characters are highlighted.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyFilter {
    case_matching: CaseMatching,
}

impl Default for FuzzyFilter {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::Ignore,
        }
    }
}

impl FuzzyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match case exactly instead of ignoring it.
    pub fn case_sensitive(mut self) -> Self {
        self.case_matching = CaseMatching::Respect;
        self
    }
}

impl Filter for FuzzyFilter {
    fn filter(&self, items: &[Item], name_key: &str, query: &str) -> Vec<Item> {
        // Empty query returns all items
        if query.is_empty() {
            return items.to_vec();
        }

        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::new(query, self.case_matching, Normalization::Smart, AtomKind::Fuzzy);

        let mut buf = Vec::new();
        let mut indices = Vec::new();

        items
            .iter()
            .filter_map(|item| {
                let label = item.label(name_key)?;
                indices.clear();
                let haystack = Utf32Str::new(&label, &mut buf);
                pattern.indices(haystack, &mut matcher, &mut indices)?;
                indices.sort_unstable();
                indices.dedup();
                // Non-ASCII haystacks are matched per grapheme cluster
                let markup = if label.is_ascii() {
                    highlight(&label, &indices)
                } else {
                    highlight_graphemes(&label, &indices)
                };
                Some(item.clone().with_highlighted_result(markup))
            })
            .collect()
    }
}
