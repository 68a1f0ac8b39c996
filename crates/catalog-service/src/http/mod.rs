//! # HTTP Surface
//!
//! An axum router over the two domain clients. Handlers never touch a store directly:
//! each request becomes one actor message, and the typed error comes back through
//! [`ApiError`].
//!
//! | Method & path | Success |
//! |---|---|
//! | `GET /api/products` | 200 |
//! | `POST /api/products` | 201 + `Location` |
//! | `GET/PUT/DELETE /api/products/{id}` | 200 / 204 / 204 |
//! | `GET /api/products/search?name=` | 200 (possibly empty) |
//! | `POST /api/products/upload` | 200 `{"fileName","size"}` |
//! | `GET /api/quotes` | 200 |
//! | `POST /api/quotes` | 201 + `Location` |
//! | `GET/PUT/DELETE /api/quotes/{id}` | 200 / 204 / 204 |
//! | `GET /api/quotes/random` | 200, 404 when empty |
//! | `GET /api/quotes/search?keyword=` | 200, 404 when nothing matches |

pub mod error;
pub mod products;
pub mod quotes;
pub mod upload;

pub use error::{ApiError, ErrorBody};

use crate::clients::{ProductClient, QuoteClient};
use crate::lifecycle::CatalogSystem;
use axum::routing::{get, post};
use axum::Router;

/// Shared handler state. Cloning only clones the channel senders.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub quotes: QuoteClient,
}

impl AppState {
    pub fn from_system(system: &CatalogSystem) -> Self {
        Self {
            products: system.product_client.clone(),
            quotes: system.quote_client.clone(),
        }
    }
}

/// Builds the full router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/api/products/search", get(products::search_products))
        .route("/api/products/upload", post(upload::upload_file))
        .route(
            "/api/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/api/quotes",
            get(quotes::list_quotes).post(quotes::create_quote),
        )
        .route("/api/quotes/random", get(quotes::random_quote))
        .route("/api/quotes/search", get(quotes::search_quotes))
        .route(
            "/api/quotes/{id}",
            get(quotes::get_quote)
                .put(quotes::update_quote)
                .delete(quotes::delete_quote),
        )
        .with_state(state)
}
