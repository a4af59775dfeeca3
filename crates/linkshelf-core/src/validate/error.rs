//! Field-level validation errors for the add flow.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Enter a title.")]
    TitleRequired,

    #[error("Enter a URL.")]
    UrlRequired,

    #[error("Invalid URL.")]
    UrlInvalid,
}

/// All field errors from one submission. At least one field is set when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub title: Option<FieldError>,
    pub url: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none()
    }

    /// `(field, error)` pairs in form order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, FieldError)> + '_ {
        [("title", self.title), ("url", self.url)]
            .into_iter()
            .filter_map(|(name, e)| e.map(|e| (name, e)))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid link")?;
        let mut first = true;
        for (field, err) in self.fields() {
            if first {
                write!(f, ": {field}: {err}")?;
                first = false;
            } else {
                write!(f, "; {field}: {err}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
