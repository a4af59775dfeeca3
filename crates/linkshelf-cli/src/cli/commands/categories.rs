//! `linkshelf categories` – list known categories.

use anyhow::Result;
use linkshelf_core::controller::LinkShelf;
use linkshelf_core::store::KvStore;

pub fn run_categories<S: KvStore>(shelf: &LinkShelf<S>) -> Result<()> {
    let view = shelf.view();
    if view.controls.suggestions.is_empty() {
        println!("No categories yet.");
    } else {
        for category in &view.controls.suggestions {
            println!("{category}");
        }
    }
    Ok(())
}
