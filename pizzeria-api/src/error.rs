use axum::{http::StatusCode, response::Json};
use pizzeria_restaurant_service::StoreError;
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("validation errors")]
    ValidationFailed,
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::RestaurantNotFound,
            StoreError::Validation(_) => ApiError::ValidationFailed,
            err => ApiError::InternalError(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            ApiError::RestaurantNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": self.to_string() }),
            ),
            ApiError::ValidationFailed => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": [self.to_string()] }),
            ),
            ApiError::InternalError(msg) => {
                error!(%msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
