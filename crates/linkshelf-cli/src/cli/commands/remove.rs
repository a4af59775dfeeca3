//! `linkshelf remove <id>` – delete a link immediately.

use anyhow::{bail, Result};
use linkshelf_core::controller::LinkShelf;
use linkshelf_core::store::KvStore;

pub fn run_remove<S: KvStore>(shelf: &mut LinkShelf<S>, id: &str) -> Result<()> {
    if !shelf.remove(id)? {
        bail!("no link with id {id}");
    }
    println!("Removed link {id} ({} left)", shelf.links().len());
    Ok(())
}
