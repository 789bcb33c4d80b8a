// Operation error taxonomy, converted to the JSON error envelope at the
// HTTP boundary.
//
// Responsibilities
// - One variant per failure class the operations can produce.
// - Map each class to an HTTP status: presence failures and zero-delivery
//   map to 400, everything else to 500.
// - No failure escapes as an unhandled fault.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::modules::invoice::request::LayoutError;
use crate::modules::notifier::notify::NotifyError;
use crate::modules::timesheet::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] LayoutError),

    #[error("Missing TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID")]
    Config,

    #[error("No files sent.")]
    Delivery,

    #[error("{0}")]
    Unexpected(String),
}

impl From<NotifyError> for ApiError {
    fn from(err: NotifyError) -> Self {
        match err {
            NotifyError::NothingDelivered => ApiError::Delivery,
            NotifyError::Chat(inner) => ApiError::Unexpected(inner.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) | ApiError::Delivery => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod api_error_tests {
    use super::*;

    #[test]
    fn it_should_map_validation_failures_to_400() {
        let response = ApiError::Validation("Missing filename".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn it_should_map_zero_delivery_to_400() {
        let response = ApiError::Delivery.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn it_should_map_missing_credentials_to_500() {
        let response = ApiError::Config.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
