//! `linkshelf open <id>` – open a link in the system browser.

use anyhow::{Context, Result};
use linkshelf_core::controller::LinkShelf;
use linkshelf_core::store::KvStore;

pub fn run_open<S: KvStore>(shelf: &LinkShelf<S>, id: &str) -> Result<()> {
    let link = shelf.get(id)?;
    tracing::info!(id, url = %link.url, "opening link");
    webbrowser::open(&link.url).with_context(|| format!("open {} in browser", link.url))?;
    println!("Opened {}", link.url);
    Ok(())
}
