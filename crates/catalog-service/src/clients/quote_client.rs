//! # Quote Client
//!
//! High‑level API for the `Quote` actor. Besides CRUD it exposes the two read paths
//! only quotes have: keyword search and a random pick.
use crate::model::{Quote, QuoteFilter, QuoteId, QuoteInput};
use crate::quote_actor::QuoteError;
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Quote actor.
#[derive(Clone)]
pub struct QuoteClient {
    inner: ResourceClient<Quote>,
}

impl QuoteClient {
    pub fn new(inner: ResourceClient<Quote>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Quote> for QuoteClient {
    type Error = QuoteError;

    fn inner(&self) -> &ResourceClient<Quote> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl QuoteClient {
    #[instrument(skip(self))]
    pub async fn create_quote(&self, params: QuoteInput) -> Result<Quote, QuoteError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_quote(&self, id: QuoteId, update: QuoteInput) -> Result<(), QuoteError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Quotes whose content contains `keyword`, ignoring case.
    ///
    /// Returns [`QuoteError::NoMatch`] rather than an empty list when nothing matches.
    #[instrument(skip(self))]
    pub async fn search_quotes(&self, keyword: String) -> Result<Vec<Quote>, QuoteError> {
        debug!("Sending request");
        let hits = self
            .inner
            .search(QuoteFilter { keyword })
            .await
            .map_err(Self::map_error)?;
        if hits.is_empty() {
            return Err(QuoteError::NoMatch);
        }
        Ok(hits)
    }

    /// A uniformly random quote, or [`QuoteError::Empty`] when there are none.
    #[instrument(skip(self))]
    pub async fn random_quote(&self) -> Result<Quote, QuoteError> {
        debug!("Sending request");
        self.inner
            .sample()
            .await
            .map_err(Self::map_error)?
            .ok_or(QuoteError::Empty)
    }
}
