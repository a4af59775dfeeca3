//! `linkshelf list` – show links grouped by category.

use anyhow::Result;
use linkshelf_core::controller::LinkShelf;
use linkshelf_core::render::render_text;
use linkshelf_core::store::KvStore;

use super::apply_filters;

pub fn run_list<S: KvStore>(shelf: &mut LinkShelf<S>, search: Option<&str>, category: Option<&str>) -> Result<()> {
    apply_filters(shelf, search, category);
    print!("{}", render_text(&shelf.view()));
    Ok(())
}
