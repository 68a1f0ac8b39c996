//! Resource trait implementation for the Quote domain type.

use crate::model::{Quote, QuoteFilter, QuoteId, QuoteInput};
use resource_framework::Resource;

impl Resource for Quote {
    type Id = QuoteId;
    type Create = QuoteInput;
    type Update = QuoteInput;
    type Filter = QuoteFilter;

    fn id(&self) -> QuoteId {
        self.id
    }

    fn from_create_params(id: QuoteId, params: QuoteInput) -> Self {
        Self {
            id,
            content: params.content,
            author: params.author,
        }
    }

    fn apply_update(&mut self, update: QuoteInput) {
        self.content = update.content;
        self.author = update.author;
    }

    /// Matches on content only; the author is not searched.
    fn matches(&self, filter: &QuoteFilter) -> bool {
        self.content
            .to_lowercase()
            .contains(&filter.keyword.to_lowercase())
    }
}
