//! CLI command handlers, one file per command.

mod add;
mod categories;
mod export_html;
mod list;
mod open;
mod remove;

pub use add::run_add;
pub use categories::run_categories;
pub use export_html::run_export_html;
pub use list::run_list;
pub use open::run_open;
pub use remove::run_remove;

use linkshelf_core::controller::LinkShelf;
use linkshelf_core::store::KvStore;

/// What a `--category` value selects.
#[derive(Debug, PartialEq, Eq)]
enum CategoryPick {
    All,
    Known(String),
    Unknown,
}

/// Map `raw` onto a derived category ignoring case, as the filter itself does.
/// A blank value means all categories.
fn pick_category(suggestions: &[String], raw: &str) -> CategoryPick {
    let wanted = raw.trim();
    if wanted.is_empty() {
        return CategoryPick::All;
    }
    let wanted = wanted.to_lowercase();
    suggestions
        .iter()
        .find(|c| c.to_lowercase() == wanted)
        .map_or(CategoryPick::Unknown, |c| CategoryPick::Known(c.clone()))
}

/// Apply optional search/category filters to the shelf view.
pub(crate) fn apply_filters<S: KvStore>(shelf: &mut LinkShelf<S>, search: Option<&str>, category: Option<&str>) {
    if let Some(text) = search {
        shelf.set_search_text(text);
    }
    if let Some(category) = category {
        match pick_category(&shelf.state().controls().suggestions, category) {
            CategoryPick::Known(c) => shelf.set_category_filter(&c),
            CategoryPick::All => shelf.set_category_filter(""),
            CategoryPick::Unknown => {
                eprintln!("unknown category {:?}; showing all categories", category.trim());
                shelf.set_category_filter("");
            }
        }
    }
}
