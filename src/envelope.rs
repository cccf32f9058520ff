//! Result envelopes returned by every request handler.
//!
//! [`ApiResult`] carries either data or a list of human-readable errors;
//! [`PagedResult`] is one page of an ordered listing plus the size of the
//! whole listing.

use serde::{Deserialize, Serialize};

/// Success/failure carrier.
///
/// `success()` is defined as "no errors". Check it before looking at
/// `data`: a successful lookup of a missing record carries `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl<T> Default for ApiResult<T> {
    fn default() -> Self {
        Self {
            data: None,
            errors: Vec::new(),
        }
    }
}

impl<T> ApiResult<T> {
    /// Successful envelope around `data`.
    pub fn from_result(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Successful envelope that found nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![message.into()],
        }
    }

    pub fn from_errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: None,
            errors: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Append an error. The envelope stops being successful.
    pub fn add_error(&mut self, message: impl Into<String>) -> &mut Self {
        self.errors.push(message.into());
        self
    }

    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// One page of an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// The page, possibly empty.
    pub items: Vec<T>,
    /// Count of all matching items, not just this page.
    pub total_count: usize,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: usize) -> Self {
        Self { items, total_count }
    }

    /// Slice page `start_index` (zero-based page number) of `page_size`
    /// items out of an already ordered listing.
    pub fn from_ordered(ordered: Vec<T>, start_index: usize, page_size: usize) -> Self {
        let total_count = ordered.len();
        let items = ordered
            .into_iter()
            .skip(start_index.saturating_mul(page_size))
            .take(page_size)
            .collect();
        Self { items, total_count }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
