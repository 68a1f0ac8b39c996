use super::{ApiError, AppState};
use crate::model::{Quote, QuoteFilter, QuoteId, QuoteInput};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use resource_framework::ActorClient;
use tracing::instrument;

/// `GET /api/quotes`: every quote in insertion order.
#[instrument(skip(state))]
pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, ApiError> {
    Ok(Json(state.quotes.list().await?))
}

/// `GET /api/quotes/{id}`: one quote, or 404.
#[instrument(skip(state))]
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<QuoteId>,
) -> Result<Json<Quote>, ApiError> {
    Ok(Json(state.quotes.get(id).await?))
}

/// `POST /api/quotes`: 201 with the stored quote and its `Location`.
#[instrument(skip(state))]
pub async fn create_quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteInput>,
) -> Result<impl IntoResponse, ApiError> {
    let quote = state.quotes.create_quote(input).await?;
    let location = format!("/api/quotes/{}", quote.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(quote)))
}

/// `PUT /api/quotes/{id}`: replaces content and author, 204 on success.
#[instrument(skip(state))]
pub async fn update_quote(
    State(state): State<AppState>,
    Path(id): Path<QuoteId>,
    Json(input): Json<QuoteInput>,
) -> Result<StatusCode, ApiError> {
    state.quotes.update_quote(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/quotes/{id}`: 204, or 404 if already gone.
#[instrument(skip(state))]
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<QuoteId>,
) -> Result<StatusCode, ApiError> {
    state.quotes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/quotes/random`: a uniformly random quote, 404 when there are none.
#[instrument(skip(state))]
pub async fn random_quote(State(state): State<AppState>) -> Result<Json<Quote>, ApiError> {
    Ok(Json(state.quotes.random_quote().await?))
}

/// `GET /api/quotes/search?keyword=`: case-insensitive content match, 404 when nothing matches.
///
/// An empty `keyword` matches every quote.
#[instrument(skip(state))]
pub async fn search_quotes(
    State(state): State<AppState>,
    Query(filter): Query<QuoteFilter>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    Ok(Json(state.quotes.search_quotes(filter.keyword).await?))
}
