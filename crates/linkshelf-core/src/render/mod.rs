//! Renderers for a [`ShelfView`](crate::controller::ShelfView).
//!
//! Both print groups in collation order with their links in collection order,
//! and an explicit placeholder instead of an empty group list.

mod html;
mod text;

pub use html::{encode_uri, escape_html, render_html};
pub use text::render_text;

/// Shown when the current filters match nothing.
pub const EMPTY_STATE: &str = "No links yet. Add a link to get started.";
