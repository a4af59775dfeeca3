pub mod config;
pub mod logging;

pub mod collate;
pub mod controller;
pub mod controls;
pub mod link;
pub mod persist;
pub mod query;
pub mod render;
pub mod store;
pub mod validate;

/// Category used when a link has none (or only whitespace).
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Key under which the link collection is stored.
pub const DEFAULT_STORAGE_KEY: &str = "myLinks.v1";
