//! CLI for the linkshelf bookmark manager.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkshelf_core::config::{self, ShelfConfig};
use linkshelf_core::controller::LinkShelf;
use linkshelf_core::store::FileStore;
use std::path::{Path, PathBuf};

use commands::{run_add, run_categories, run_export_html, run_list, run_open, run_remove};

/// Top-level CLI for the linkshelf bookmark manager.
#[derive(Debug, Parser)]
#[command(name = "linkshelf")]
#[command(about = "linkshelf: a small local bookmark manager", long_about = None)]
pub struct Cli {
    /// Store file to use instead of the configured one.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a new link. A URL without http:// or https:// gets https:// prepended.
    Add {
        /// Link title.
        title: String,
        /// Link URL.
        url: String,
        /// Category; blank means the default category.
        #[arg(long, short)]
        category: Option<String>,
    },

    /// List links grouped by category.
    List {
        /// Only links whose title contains this text (case-insensitive).
        #[arg(long, short)]
        search: Option<String>,
        /// Only links in this category (case-insensitive).
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Show known categories (suggestions for --category).
    Categories,

    /// Remove a link by its ID. There is no confirmation.
    Remove {
        /// Link identifier.
        id: String,
    },

    /// Open a link in the default browser.
    Open {
        /// Link identifier.
        id: String,
    },

    /// Write the grouped link list as an HTML page.
    ExportHtml {
        /// Output file.
        path: PathBuf,
        /// Only links whose title contains this text (case-insensitive).
        #[arg(long, short)]
        search: Option<String>,
        /// Only links in this category (case-insensitive).
        #[arg(long, short)]
        category: Option<String>,
    },
}

/// Open the shelf backed by the configured (or overridden) store file.
fn open_shelf(cfg: &ShelfConfig, store_override: Option<&Path>) -> Result<LinkShelf<FileStore>> {
    let store = FileStore::open(cfg.resolve_store_path(store_override)?);
    tracing::debug!(path = %store.path().display(), key = %cfg.storage_key, "opening link store");
    Ok(LinkShelf::open(
        store,
        cfg.storage_key.clone(),
        cfg.category_rules(),
    ))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let mut shelf = open_shelf(&cfg, cli.store.as_deref())?;

        match cli.command {
            CliCommand::Add {
                title,
                url,
                category,
            } => run_add(&mut shelf, &title, &url, category.as_deref().unwrap_or(""))?,
            CliCommand::List { search, category } => {
                run_list(&mut shelf, search.as_deref(), category.as_deref())?
            }
            CliCommand::Categories => run_categories(&shelf)?,
            CliCommand::Remove { id } => run_remove(&mut shelf, &id)?,
            CliCommand::Open { id } => run_open(&shelf, &id)?,
            CliCommand::ExportHtml {
                path,
                search,
                category,
            } => run_export_html(&mut shelf, &path, search.as_deref(), category.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
