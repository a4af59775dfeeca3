//! Tests for add and list subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_add() {
    match parse(&["linkshelf", "add", "Docs", "example.com"]) {
        CliCommand::Add {
            title,
            url,
            category,
        } => {
            assert_eq!(title, "Docs");
            assert_eq!(url, "example.com");
            assert!(category.is_none());
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_category() {
    match parse(&["linkshelf", "add", "Docs", "https://docs.rs", "--category", "Work"]) {
        CliCommand::Add { category, .. } => assert_eq!(category.as_deref(), Some("Work")),
        _ => panic!("expected Add with --category"),
    }
}

#[test]
fn cli_parse_add_requires_url() {
    assert!(Cli::try_parse_from(["linkshelf", "add", "Docs"]).is_err());
}

#[test]
fn cli_parse_list() {
    match parse(&["linkshelf", "list"]) {
        CliCommand::List { search, category } => {
            assert!(search.is_none());
            assert!(category.is_none());
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_filters() {
    match parse(&["linkshelf", "list", "-s", "do", "-c", "Work"]) {
        CliCommand::List { search, category } => {
            assert_eq!(search.as_deref(), Some("do"));
            assert_eq!(category.as_deref(), Some("Work"));
        }
        _ => panic!("expected List with filters"),
    }
}

#[test]
fn cli_parse_global_store() {
    let cli = Cli::try_parse_from(["linkshelf", "list", "--store", "/tmp/links.json"]).unwrap();
    assert_eq!(cli.store.as_deref(), Some(std::path::Path::new("/tmp/links.json")));
    let cli = Cli::try_parse_from(["linkshelf", "categories"]).unwrap();
    assert!(cli.store.is_none());
}
