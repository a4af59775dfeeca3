//! Plain-text listing for terminals.

use std::fmt::Write;

use crate::controller::ShelfView;

use super::EMPTY_STATE;

/// Render the grouped view: a summary line, then one block per category.
pub fn render_text(view: &ShelfView<'_>) -> String {
    let mut out = String::new();

    let _ = write!(out, "{} link", view.result.count);
    if view.result.count != 1 {
        out.push('s');
    }
    if view.result.count != view.total {
        let _ = write!(out, " (of {})", view.total);
    }
    if !view.controls.selected.is_empty() {
        let _ = write!(out, "  category: {}", view.controls.selected);
    }
    let text = view.query.text.trim();
    if !text.is_empty() {
        let _ = write!(out, "  search: \"{text}\"");
    }
    out.push('\n');

    if view.result.is_empty() {
        out.push('\n');
        out.push_str(EMPTY_STATE);
        out.push('\n');
        return out;
    }

    let title_width = view
        .result
        .groups
        .iter()
        .flat_map(|g| g.links.iter())
        .map(|l| l.title.chars().count())
        .max()
        .unwrap_or(0);

    for group in &view.result.groups {
        let _ = writeln!(out, "\n{}", group.category);
        for link in &group.links {
            let _ = writeln!(
                out,
                "  {:<width$}  {}  [{}]",
                link.title,
                link.url,
                link.id,
                width = title_width
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::LinkShelf;
    use crate::link::CategoryRules;
    use crate::store::MemoryStore;
    use crate::validate::LinkDraft;

    fn shelf() -> LinkShelf<MemoryStore> {
        let mut s = LinkShelf::open(MemoryStore::new(), "k", CategoryRules::default());
        s.add(&LinkDraft::new("Docs", "docs.rs", "Work")).unwrap();
        s.add(&LinkDraft::new("Example", "example.com", "News")).unwrap();
        s
    }

    #[test]
    fn groups_in_order_with_count() {
        let s = shelf();
        let out = render_text(&s.view());
        assert!(out.starts_with("2 links\n"));
        let news = out.find("\nNews\n").unwrap();
        let work = out.find("\nWork\n").unwrap();
        assert!(news < work);
        assert!(out.contains("https://docs.rs"));
    }

    #[test]
    fn filtered_count_shows_total() {
        let mut s = shelf();
        s.set_search_text("doc");
        let out = render_text(&s.view());
        assert!(out.starts_with("1 link (of 2)  search: \"doc\"\n"));
    }

    #[test]
    fn empty_result_shows_placeholder() {
        let mut s = shelf();
        s.set_search_text("zzz");
        let out = render_text(&s.view());
        assert!(out.contains(EMPTY_STATE));
        assert!(!out.contains("Work"));
    }
}
