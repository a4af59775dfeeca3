//! Category controls derived from the collection: the suggestion list offered
//! when adding a link and the options of the category filter.
//!
//! Rebuilt after every change to the collection. A previous filter selection
//! survives the rebuild only if its category still exists.

use std::collections::HashSet;

use crate::link::{CategoryRules, Collection};

/// Label of the leading "no category filter" option.
pub const ALL_CATEGORIES_LABEL: &str = "All categories";

/// One selectable filter option. The "all" option has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn all() -> Self {
        Self {
            value: String::new(),
            label: ALL_CATEGORIES_LABEL.to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryControls {
    /// Known categories offered while typing a new link's category.
    pub suggestions: Vec<String>,
    /// Filter options, "all" first.
    pub filter_options: Vec<FilterOption>,
    /// Selected filter value; empty means all categories.
    pub selected: String,
}

/// Distinct effective categories, deduplicated case-sensitively and sorted by the rules' collation.
pub fn derive_categories(links: &Collection, rules: &CategoryRules) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories: Vec<String> = links
        .items()
        .iter()
        .map(|l| rules.category_of(l))
        .filter(|c| seen.insert(*c))
        .map(str::to_string)
        .collect();
    rules.collation.sort(&mut categories);
    categories
}

/// Rebuild the controls for `links`, keeping `previous_selection` if it is still a known category.
pub fn sync_controls(links: &Collection, rules: &CategoryRules, previous_selection: &str) -> CategoryControls {
    let categories = derive_categories(links, rules);

    let selected = if categories.iter().any(|c| c == previous_selection) {
        previous_selection.to_string()
    } else {
        if !previous_selection.is_empty() {
            tracing::debug!(category = previous_selection, "category filter no longer valid; showing all");
        }
        String::new()
    };

    let filter_options = std::iter::once(FilterOption::all())
        .chain(categories.iter().map(|c| FilterOption {
            value: c.clone(),
            label: c.clone(),
        }))
        .collect();

    CategoryControls {
        suggestions: categories,
        filter_options,
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkItem;

    fn links(categories: &[&str]) -> Collection {
        Collection::from_items(
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| LinkItem {
                    id: i.to_string(),
                    title: format!("Link {i}"),
                    url: format!("https://example.com/{i}"),
                    category: c.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn mixed_case_categories_stay_distinct() {
        let c = links(&["Work", "work", "News", "Work"]);
        let cats = derive_categories(&c, &CategoryRules::default());
        assert_eq!(cats, vec!["News", "work", "Work"]);
    }

    #[test]
    fn blank_categories_become_default() {
        let c = links(&["", "  ", " Pets "]);
        let cats = derive_categories(&c, &CategoryRules::default());
        assert_eq!(cats, vec!["Pets", "Uncategorized"]);
    }

    #[test]
    fn filter_options_lead_with_all() {
        let c = links(&["News"]);
        let controls = sync_controls(&c, &CategoryRules::default(), "");
        assert_eq!(controls.filter_options.len(), 2);
        assert!(controls.filter_options[0].is_all());
        assert_eq!(controls.filter_options[0].label, ALL_CATEGORIES_LABEL);
        assert_eq!(controls.filter_options[1].value, "News");
        assert_eq!(controls.suggestions, vec!["News"]);
    }

    #[test]
    fn selection_kept_when_still_present() {
        let c = links(&["News", "Work"]);
        let controls = sync_controls(&c, &CategoryRules::default(), "Work");
        assert_eq!(controls.selected, "Work");
    }

    #[test]
    fn selection_resets_when_category_gone() {
        let c = links(&["News"]);
        let controls = sync_controls(&c, &CategoryRules::default(), "Work");
        assert_eq!(controls.selected, "");
    }

    #[test]
    fn selection_match_is_case_sensitive() {
        let c = links(&["Work"]);
        let controls = sync_controls(&c, &CategoryRules::default(), "work");
        assert_eq!(controls.selected, "");
    }

    #[test]
    fn empty_collection_only_all_option() {
        let controls = sync_controls(&Collection::new(), &CategoryRules::default(), "News");
        assert_eq!(controls.filter_options, vec![FilterOption::all()]);
        assert!(controls.suggestions.is_empty());
        assert_eq!(controls.selected, "");
    }
}
