//! Maps domain errors onto HTTP responses.

use crate::product_actor::ProductError;
use crate::quote_actor::QuoteError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use resource_framework::validation::{FieldViolation, ValidationErrors};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a handler can return. Each variant has a fixed status code.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// 404
    #[error("{0}")]
    NotFound(String),

    /// 400 with one violation per failed constraint
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// 400
    #[error("{0}")]
    BadRequest(String),

    /// 503, the backing actor is gone or its store cannot take new records
    #[error("{0}")]
    Unavailable(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let violations = match self {
            ApiError::Validation(errors) => Some(errors.violations().to_vec()),
            _ => None,
        };
        (status, Json(ErrorBody { error, violations })).into_response()
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::Validation(errors) => ApiError::Validation(errors),
            ProductError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ProductError::IdsExhausted | ProductError::ActorCommunicationError(_) => {
                ApiError::Unavailable(e.to_string())
            }
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(e: QuoteError) -> Self {
        match e {
            QuoteError::Validation(errors) => ApiError::Validation(errors),
            QuoteError::NotFound(_) | QuoteError::NoMatch | QuoteError::Empty => {
                ApiError::NotFound(e.to_string())
            }
            QuoteError::IdsExhausted | QuoteError::ActorCommunicationError(_) => {
                ApiError::Unavailable(e.to_string())
            }
        }
    }
}
