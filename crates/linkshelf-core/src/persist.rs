//! Load and save the link collection as one JSON array under a fixed key.
//!
//! Loading never fails: a missing, unreadable or non-array blob is an empty
//! collection, and elements without string `title`/`url` are dropped.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::link::{new_link_id, Collection, LinkItem};
use crate::store::{self, KvStore};

/// Stored element as found on disk; every field may be missing or mistyped.
/// Only JSON objects are read into it; serde would also accept a positional array.
#[derive(Debug, Deserialize)]
struct StoredLink {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    url: Value,
    #[serde(default)]
    category: Value,
}

impl StoredLink {
    fn into_link(self) -> Option<LinkItem> {
        let (Value::String(title), Value::String(url)) = (self.title, self.url) else {
            return None;
        };
        let id = match self.id {
            Value::String(s) if !s.is_empty() => s,
            _ => String::new(),
        };
        let category = match self.category {
            Value::String(s) => s,
            _ => String::new(),
        };
        Some(LinkItem {
            id,
            title,
            url,
            category,
        })
    }
}

/// Parse a stored blob into a collection, dropping malformed elements.
///
/// Entries without an id, or repeating an id seen earlier in the array, get a
/// fresh id so ids stay unique within the collection.
pub fn parse_collection(raw: &str) -> Collection {
    let elements = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(elements)) => elements,
        Ok(_) => {
            tracing::warn!("stored links are not an array; starting empty");
            return Collection::new();
        }
        Err(e) => {
            tracing::warn!("stored links are not valid JSON ({e}); starting empty");
            return Collection::new();
        }
    };

    let total = elements.len();
    let mut seen = HashSet::with_capacity(total);
    let items: Vec<LinkItem> = elements
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|v| serde_json::from_value::<StoredLink>(v).ok())
        .filter_map(StoredLink::into_link)
        .map(|mut link| {
            if link.id.is_empty() || seen.contains(&link.id) {
                link.id = new_link_id();
            }
            seen.insert(link.id.clone());
            link
        })
        .collect();

    if items.len() < total {
        tracing::debug!(dropped = total - items.len(), "dropped malformed stored links");
    }
    Collection::from_items(items)
}

/// Read the collection stored under `key`. Absent or corrupt data is an empty collection.
pub fn load<S: KvStore + ?Sized>(store: &S, key: &str) -> Collection {
    match store.get(key) {
        Ok(Some(raw)) => parse_collection(&raw),
        Ok(None) => Collection::new(),
        Err(e) => {
            tracing::warn!("could not read stored links: {e}; starting empty");
            Collection::new()
        }
    }
}

/// Overwrite the blob under `key` with the full collection.
pub fn save<S: KvStore + ?Sized>(store: &mut S, key: &str, links: &Collection) -> store::Result<()> {
    let json = serde_json::to_string(links.items())?;
    store.set(key, &json)?;
    tracing::debug!(key, count = links.len(), "saved links");
    Ok(())
}
