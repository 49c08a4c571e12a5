//! Case-insensitive substring filter.

use crate::item::Item;

use super::{Filter, highlight};

/// Keeps items whose label contains the query, ignoring case, and highlights
/// the first occurrence.
///
/// This is the dropdown's default filter.
///
/// ```
/// use sift::{Filter, Item, SubstringFilter};
///
/// let items = vec![Item::named("Apple"), Item::named("Banana"), Item::named("Cherry")];
/// let found = SubstringFilter.filter(&items, "name", "an");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].highlighted_result(), Some("B<em>an</em>ana"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter;

impl Filter for SubstringFilter {
    fn filter(&self, items: &[Item], name_key: &str, query: &str) -> Vec<Item> {
        // Empty query returns all items
        if query.is_empty() {
            return items.to_vec();
        }

        let needle: Vec<char> = query.chars().collect();

        items
            .iter()
            .filter_map(|item| {
                let label = item.label(name_key)?;
                let indices = find_ignore_case(&label, &needle)?;
                Some(item.clone().with_highlighted_result(highlight(&label, &indices)))
            })
            .collect()
    }
}

/// Char positions of the first case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &str, needle: &[char]) -> Option<Vec<u32>> {
    let hay: Vec<char> = haystack.chars().collect();
    if needle.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - needle.len())
        .find(|&start| {
            hay[start..start + needle.len()]
                .iter()
                .zip(needle)
                .all(|(a, b)| chars_eq_ignore_case(*a, *b))
        })
        .map(|start| (start as u32..(start + needle.len()) as u32).collect())
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
