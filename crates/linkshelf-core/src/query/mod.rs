//! Title search and category filtering over the in-memory collection.
//!
//! The text filter runs first (case-insensitive substring of the title only),
//! then the category filter (case-insensitive equality with the link's
//! effective category). Matches are grouped by category for display.

mod group;

pub use group::{group_by_category, CategoryGroup};

use crate::link::{CategoryRules, Collection, LinkItem};

/// Active search inputs. Empty strings disable that filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub category: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Grouped search result. `count` is the number of matches, not the collection size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    pub groups: Vec<CategoryGroup<'a>>,
    pub count: usize,
}

impl SearchResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// True if `title` contains `needle` ignoring case. `needle` must already be lowercase.
fn title_matches(title: &str, needle: &str) -> bool {
    needle.is_empty() || title.to_lowercase().contains(needle)
}

/// Links matching `query`, in collection order.
pub fn filter_links<'a>(
    links: &'a Collection,
    query: &SearchQuery,
    rules: &CategoryRules,
) -> Vec<&'a LinkItem> {
    let needle = query.text.trim().to_lowercase();
    let category = query.category.to_lowercase();

    links
        .items()
        .iter()
        .filter(|l| title_matches(&l.title, &needle))
        .filter(|l| category.is_empty() || rules.category_of(l).to_lowercase() == category)
        .collect()
}

/// Filter `links` by `query` and group the matches by category.
pub fn search<'a>(links: &'a Collection, query: &SearchQuery, rules: &CategoryRules) -> SearchResult<'a> {
    let matches = filter_links(links, query, rules);
    let count = matches.len();
    SearchResult {
        groups: group_by_category(matches, rules),
        count,
    }
}
