//! # Catalog Service
//!
//! An in-memory product catalog and quote collection served over HTTP, built on
//! [`resource_framework`].
//!
//! ## Core Components
//!
//! - **[model]**: Records ([`Product`](model::Product), [`Quote`](model::Quote)), their
//!   input payloads with validation rules, and search filters.
//! - **[product_actor] / [quote_actor]**: The `Resource` implementations, per-resource
//!   errors and actor factories. The quote store starts with eight seeded quotes.
//! - **[clients]**: Type-safe wrappers ([`ProductClient`](clients::ProductClient),
//!   [`QuoteClient`](clients::QuoteClient)) that hide the message passing.
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem) starts both actors and
//!   shuts them down.
//! - **[config]**: [`ServiceConfig`](config::ServiceConfig), from CLI flags or environment.
//! - **[http]**: The axum router and the mapping from domain errors to status codes.
//!
//! ## Testing
//!
//! See [`resource_framework::mock`] for utilities to test clients without spawning actors.
//! The router can be driven in-process with `tower::ServiceExt::oneshot`.

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod quote_actor;
