//! Link store controller.
//!
//! `ShelfState` is the plain, owned view state: the collection, the active
//! search, and the category controls derived from the collection. Its
//! transitions consume the state and return the next one.
//!
//! `LinkShelf` drives one user action at a time through the pipeline:
//! validate, mutate, persist (write-through), re-derive controls, re-query.
//! A mutation is committed in memory only after the store accepted it.

use thiserror::Error;

use crate::controls::{sync_controls, CategoryControls};
use crate::link::{CategoryRules, Collection, LinkItem};
use crate::persist;
use crate::query::{search, SearchQuery, SearchResult};
use crate::store::{KvStore, StoreError};
use crate::validate::{validate_link, LinkDraft, ValidationErrors};

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("could not save links: {0}")]
    Storage(#[from] StoreError),

    #[error("no link with id {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfState {
    links: Collection,
    query: SearchQuery,
    controls: CategoryControls,
}

impl ShelfState {
    pub fn new(links: Collection, rules: &CategoryRules) -> Self {
        let controls = sync_controls(&links, rules, "");
        Self {
            links,
            query: SearchQuery::default(),
            controls,
        }
    }

    pub fn links(&self) -> &Collection {
        &self.links
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn controls(&self) -> &CategoryControls {
        &self.controls
    }

    /// Replace the collection and re-derive controls, keeping the filter if still valid.
    pub fn with_links(self, links: Collection, rules: &CategoryRules) -> Self {
        let controls = sync_controls(&links, rules, &self.controls.selected);
        let query = SearchQuery {
            category: controls.selected.clone(),
            ..self.query
        };
        Self {
            links,
            query,
            controls,
        }
    }

    pub fn with_search_text(self, text: impl Into<String>) -> Self {
        Self {
            query: SearchQuery {
                text: text.into(),
                ..self.query
            },
            ..self
        }
    }

    /// Select a category filter. Unknown categories fall back to all.
    pub fn with_category_filter(self, category: &str, rules: &CategoryRules) -> Self {
        let controls = sync_controls(&self.links, rules, category);
        let query = SearchQuery {
            category: controls.selected.clone(),
            ..self.query
        };
        Self {
            query,
            controls,
            ..self
        }
    }

    pub fn search<'a>(&'a self, rules: &CategoryRules) -> SearchResult<'a> {
        search(&self.links, &self.query, rules)
    }
}

/// Everything needed to render the shelf after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfView<'a> {
    pub controls: &'a CategoryControls,
    pub query: &'a SearchQuery,
    pub result: SearchResult<'a>,
    /// Size of the whole collection, for context next to the filtered count.
    pub total: usize,
}

/// Owns the store and the current state; every mutation writes the whole collection through.
pub struct LinkShelf<S: KvStore> {
    store: S,
    key: String,
    rules: CategoryRules,
    state: ShelfState,
}

impl<S: KvStore> LinkShelf<S> {
    /// Load the collection under `key`. Corrupt or missing data starts an empty shelf.
    pub fn open(store: S, key: impl Into<String>, rules: CategoryRules) -> Self {
        let key = key.into();
        let links = persist::load(&store, &key);
        tracing::debug!(key = %key, count = links.len(), "loaded links");
        let state = ShelfState::new(links, &rules);
        Self {
            store,
            key,
            rules,
            state,
        }
    }

    pub fn state(&self) -> &ShelfState {
        &self.state
    }

    pub fn rules(&self) -> &CategoryRules {
        &self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn links(&self) -> &Collection {
        self.state().links()
    }

    pub fn get(&self, id: &str) -> Result<&LinkItem> {
        self.links()
            .get(id)
            .ok_or_else(|| ShelfError::NotFound(id.to_string()))
    }

    fn take_state(&mut self) -> ShelfState {
        std::mem::take(&mut self.state)
    }

    /// Persist `links`, then commit them. On a store error nothing changes.
    fn commit(&mut self, links: Collection) -> Result<()> {
        persist::save(&mut self.store, &self.key, &links)?;
        let state = self.take_state();
        self.state = state.with_links(links, &self.rules);
        Ok(())
    }

    /// Validate and add a new link at the front of the collection.
    pub fn add(&mut self, draft: &LinkDraft) -> Result<LinkItem> {
        let valid = match validate_link(draft, &self.rules.default_category) {
            Ok(v) => v,
            Err(errors) => {
                tracing::debug!("rejected link: {errors}");
                return Err(errors.into());
            }
        };
        let mut item = valid.into_new_item();
        while self.links().contains_id(&item.id) {
            item.id = crate::link::new_link_id();
        }

        let links = self.links().clone().with_added(item.clone());
        self.commit(links)?;
        tracing::info!(id = %item.id, url = %item.url, category = %item.category, "added link");
        Ok(item)
    }

    /// Remove the link with `id`. Returns false (and writes nothing) if there is none.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if !self.links().contains_id(id) {
            return Ok(false);
        }
        let links = self.links().clone().without(id);
        self.commit(links)?;
        tracing::info!(id, "removed link");
        Ok(true)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let state = self.take_state();
        self.state = state.with_search_text(text);
    }

    pub fn set_category_filter(&mut self, category: &str) {
        let state = self.take_state();
        self.state = state.with_category_filter(category, &self.rules);
    }

    pub fn view(&self) -> ShelfView<'_> {
        let state = self.state();
        ShelfView {
            controls: state.controls(),
            query: state.query(),
            result: state.search(&self.rules),
            total: state.links().len(),
        }
    }
}
