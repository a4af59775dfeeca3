//! Tests for categories, remove, open, export-html.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_categories() {
    match parse(&["linkshelf", "categories"]) {
        CliCommand::Categories => {}
        _ => panic!("expected Categories"),
    }
}

#[test]
fn cli_parse_remove() {
    match parse(&["linkshelf", "remove", "3f2b-id"]) {
        CliCommand::Remove { id } => assert_eq!(id, "3f2b-id"),
        _ => panic!("expected Remove"),
    }
}

#[test]
fn cli_parse_open() {
    match parse(&["linkshelf", "open", "abc"]) {
        CliCommand::Open { id } => assert_eq!(id, "abc"),
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_export_html() {
    match parse(&["linkshelf", "export-html", "/tmp/links.html", "--category", "News"]) {
        CliCommand::ExportHtml {
            path,
            search,
            category,
        } => {
            assert_eq!(path, std::path::PathBuf::from("/tmp/links.html"));
            assert!(search.is_none());
            assert_eq!(category.as_deref(), Some("News"));
        }
        _ => panic!("expected ExportHtml"),
    }
}
