//! Link records and the ordered collection they live in.

use serde::{Deserialize, Serialize};

use crate::collate::Collation;
use crate::DEFAULT_CATEGORY;

/// One stored bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: String,
}

impl LinkItem {
    /// Category used for grouping and filtering: trimmed, blank falls back to `default`.
    pub fn effective_category<'a>(&'a self, default: &'a str) -> &'a str {
        effective_category(&self.category, default)
    }
}

pub(crate) fn effective_category<'a>(raw: &'a str, default: &'a str) -> &'a str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// How categories are defaulted and ordered. Shared by grouping and the filter controls
/// so both agree on names and order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    pub default_category: String,
    pub collation: Collation,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            collation: Collation::default(),
        }
    }
}

impl CategoryRules {
    pub fn new(default_category: impl Into<String>, collation: Collation) -> Self {
        Self {
            default_category: default_category.into(),
            collation,
        }
    }

    /// Category `link` is grouped and filtered under.
    pub fn category_of<'a>(&'a self, link: &'a LinkItem) -> &'a str {
        link.effective_category(&self.default_category)
    }
}

/// Fresh opaque identifier for a new link.
pub fn new_link_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Ordered link collection, newest first. The whole collection is the unit of persistence.
///
/// Mutations consume the collection and return the new one so callers can
/// persist the result before committing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    items: Vec<LinkItem>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<LinkItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LinkItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LinkItem> {
        self.items.iter().find(|l| l.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Prepend `item` (newest first).
    pub fn with_added(self, item: LinkItem) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items);
        Self { items }
    }

    /// Drop every entry whose id equals `id`. Order of the rest is kept.
    pub fn without(self, id: &str) -> Self {
        let items = self.items.into_iter().filter(|l| l.id != id).collect();
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str) -> LinkItem {
        LinkItem {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://{id}.example.com"),
            category: String::new(),
        }
    }

    #[test]
    fn with_added_prepends() {
        let c = Collection::new()
            .with_added(item("a", "First"))
            .with_added(item("b", "Second"));
        let ids: Vec<&str> = c.items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn without_removes_only_matching_id() {
        let c = Collection::from_items(vec![item("a", "A"), item("b", "B"), item("c", "C")]);
        let c = c.without("b");
        assert_eq!(c.len(), 2);
        assert!(!c.contains_id("b"));
        assert_eq!(c.items()[0].id, "a");
        assert_eq!(c.items()[1].id, "c");
    }

    #[test]
    fn without_unknown_id_is_noop() {
        let c = Collection::from_items(vec![item("a", "A")]);
        assert_eq!(c.clone().without("zzz"), c);
    }

    #[test]
    fn effective_category_defaults_blank() {
        let mut l = item("a", "A");
        assert_eq!(l.effective_category("Uncategorized"), "Uncategorized");
        l.category = "   ".to_string();
        assert_eq!(l.effective_category("Uncategorized"), "Uncategorized");
        l.category = "  Work ".to_string();
        assert_eq!(l.effective_category("Uncategorized"), "Work");
    }

    #[test]
    fn new_link_ids_are_unique() {
        assert_ne!(new_link_id(), new_link_id());
    }
}
