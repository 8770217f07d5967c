use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Health data is not available on this device")]
    Unavailable,
    #[error("Authorization denied: {0}")]
    AuthDenied(String),
    #[error("Read access to workouts has not been granted")]
    NotAuthorized,
    #[error("Workout query failed: {0}")]
    Query(String),
    #[error("Enabling background delivery failed: {0}")]
    BackgroundDelivery(String),
    #[error("Workout subscription failed: {0}")]
    Subscription(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Invalid endpoint URL {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("Failed to serialize workout record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Endpoint rejected workout ({0})")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
