//! `linkshelf add <title> <url>` – validate and add a new link.

use anyhow::{bail, Result};
use linkshelf_core::controller::{LinkShelf, ShelfError};
use linkshelf_core::store::KvStore;
use linkshelf_core::validate::LinkDraft;

pub fn run_add<S: KvStore>(shelf: &mut LinkShelf<S>, title: &str, url: &str, category: &str) -> Result<()> {
    let draft = LinkDraft::new(title, url, category);
    match shelf.add(&draft) {
        Ok(item) => {
            println!("Added link {} [{}]: {} ({})", item.title, item.id, item.url, item.category);
            Ok(())
        }
        Err(ShelfError::Validation(errors)) => {
            for (field, err) in errors.fields() {
                eprintln!("{field}: {err}");
            }
            bail!("link not added")
        }
        Err(e) => Err(e.into()),
    }
}
