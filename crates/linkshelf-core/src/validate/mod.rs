//! Validation and normalization of user-entered links.
//!
//! Title and URL are checked independently so both field errors can be
//! reported at once. Nothing is added unless both pass.

mod error;
mod normalize;

pub use error::{FieldError, ValidationErrors};
pub use normalize::{is_valid_url, normalize_url};

use crate::link::{new_link_id, LinkItem};

/// Raw form input for a new link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub category: String,
}

impl LinkDraft {
    pub fn new(title: impl Into<String>, url: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            category: category.into(),
        }
    }
}

/// A draft that passed validation, with every field in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLink {
    pub title: String,
    pub url: String,
    pub category: String,
}

impl ValidLink {
    pub fn into_item(self, id: String) -> LinkItem {
        LinkItem {
            id,
            title: self.title,
            url: self.url,
            category: self.category,
        }
    }

    pub fn into_new_item(self) -> LinkItem {
        self.into_item(new_link_id())
    }
}

/// Trimmed category, or `default` when blank.
pub fn normalize_category(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Validate a draft: title required; URL required after normalization and must parse.
pub fn validate_link(draft: &LinkDraft, default_category: &str) -> Result<ValidLink, ValidationErrors> {
    let title = draft.title.trim();
    let url = normalize_url(&draft.url);

    let mut errors = ValidationErrors::default();
    if title.is_empty() {
        errors.title = Some(FieldError::TitleRequired);
    }
    if url.is_empty() {
        errors.url = Some(FieldError::UrlRequired);
    } else if !is_valid_url(&url) {
        errors.url = Some(FieldError::UrlInvalid);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidLink {
        title: title.to_string(),
        url,
        category: normalize_category(&draft.category, default_category),
    })
}
