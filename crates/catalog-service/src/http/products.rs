use super::{ApiError, AppState};
use crate::model::{Product, ProductFilter, ProductId, ProductInput};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use resource_framework::ActorClient;
use tracing::instrument;

/// `GET /api/products`: every product in insertion order.
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

/// `GET /api/products/{id}`: one product, or 404.
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.get(id).await?))
}

/// `POST /api/products`: 201 with the stored product and its `Location`.
#[instrument(skip(state))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state.products.create_product(input).await?;
    let location = format!("/api/products/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// `PUT /api/products/{id}`: replaces every field, 204 on success.
#[instrument(skip(state))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Result<StatusCode, ApiError> {
    state.products.update_product(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/products/{id}`: 204, or 404 if already gone.
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode, ApiError> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/products/search?name=`: case-insensitive name match, possibly empty.
#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.search_products(filter.name).await?))
}
