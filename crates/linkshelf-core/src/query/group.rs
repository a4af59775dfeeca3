//! Partition matches into per-category groups.

use std::collections::BTreeMap;

use crate::link::{CategoryRules, LinkItem};

/// Links sharing one category, in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: String,
    pub links: Vec<&'a LinkItem>,
}

/// Group `links` by effective category. Groups are ordered by the rules' collation;
/// links keep their incoming order within a group.
pub fn group_by_category<'a>(links: Vec<&'a LinkItem>, rules: &CategoryRules) -> Vec<CategoryGroup<'a>> {
    let mut by_key: BTreeMap<&str, Vec<&'a LinkItem>> = BTreeMap::new();
    for link in links {
        by_key.entry(rules.category_of(link)).or_default().push(link);
    }

    let mut groups: Vec<CategoryGroup<'a>> = by_key
        .into_iter()
        .map(|(category, links)| CategoryGroup {
            category: category.to_string(),
            links,
        })
        .collect();
    groups.sort_by(|a, b| rules.collation.compare(&a.category, &b.category));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::Collation;

    fn link(id: &str, category: &str) -> LinkItem {
        LinkItem {
            id: id.to_string(),
            title: format!("Title {id}"),
            url: format!("https://example.com/{id}"),
            category: category.to_string(),
        }
    }

    #[test]
    fn groups_sorted_and_order_preserved() {
        let items = vec![
            link("6", "Ölburkar"),
            link("5", "News"),
            link("4", " News "),
            link("3", "   "),
            link("2", "Alpha"),
            link("1", "News"),
        ];
        let rules = CategoryRules::default();
        let groups = group_by_category(items.iter().collect(), &rules);

        let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "News", "Uncategorized", "Ölburkar"]);

        let news: Vec<&str> = groups[1].links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(news, vec!["5", "4", "1"]);
    }

    #[test]
    fn root_collation_folds_accents() {
        let items = vec![link("1", "Ölburkar"), link("2", "Pets")];
        let rules = CategoryRules::new("Uncategorized", Collation::Root);
        let groups = group_by_category(items.iter().collect(), &rules);
        let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Ölburkar", "Pets"]);
    }

    #[test]
    fn no_links_no_groups() {
        assert!(group_by_category(Vec::new(), &CategoryRules::default()).is_empty());
    }
}
