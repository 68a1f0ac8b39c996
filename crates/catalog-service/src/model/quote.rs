//! Quote records: a piece of text and who said it.

use resource_framework::validation::{Validate, ValidationErrors, Validator};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const CONTENT_MAX_CHARS: usize = 1000;
pub const AUTHOR_MAX_CHARS: usize = 100;

/// Type-safe identifier for Quotes. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(pub u32);

impl From<u32> for QuoteId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<QuoteId> for u32 {
    fn from(id: QuoteId) -> Self {
        id.0
    }
}

impl Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub content: String,
    pub author: String,
}

impl Quote {
    pub fn new(id: u32, content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: QuoteId(id),
            content: content.into(),
            author: author.into(),
        }
    }
}

/// Payload for creating a quote, and for replacing both of its fields on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteInput {
    pub content: String,
    pub author: String,
}

impl Validate for QuoteInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("content", &self.content)
            .max_chars("content", &self.content, CONTENT_MAX_CHARS)
            .required("author", &self.author)
            .max_chars("author", &self.author, AUTHOR_MAX_CHARS)
            .finish()
    }
}

/// Case-insensitive substring match on the quote content. An empty keyword matches all.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteFilter {
    pub keyword: String,
}
