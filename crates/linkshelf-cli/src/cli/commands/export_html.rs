//! `linkshelf export-html <path>` – write the grouped list as an HTML page.

use anyhow::{Context, Result};
use linkshelf_core::controller::LinkShelf;
use linkshelf_core::render::render_html;
use linkshelf_core::store::KvStore;
use std::path::Path;

use super::apply_filters;

const PAGE_TITLE: &str = "My links";

pub fn run_export_html<S: KvStore>(
    shelf: &mut LinkShelf<S>,
    path: &Path,
    search: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    apply_filters(shelf, search, category);
    let view = shelf.view();
    let page = render_html(&view, PAGE_TITLE);
    std::fs::write(path, page).with_context(|| format!("write {}", path.display()))?;
    println!("Exported {} links to {}", view.result.count, path.display());
    Ok(())
}
