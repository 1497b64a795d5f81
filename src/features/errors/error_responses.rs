use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::ApiError;

const INTERNAL_ERROR_MESSAGE: &str = "Terjadi kesalahan internal";

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_)
            | ApiError::MissingParameter(_)
            | ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::StorageUnavailable(_) | ApiError::DataCorruption(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::StorageUnavailable(source) | ApiError::DataCorruption(source) => {
                log::error!("{}: {}", self, source);
            }
            ApiError::MalformedRequest(detail) => {
                log::debug!("Rejected request: {}", detail);
            }
            _ => {}
        }

        let status = self.status();
        let body = json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Response for a handler that panicked; the panic payload is only logged.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    log::error!("Handler panicked: {}", detail);

    let body = json!({
        "error": INTERNAL_ERROR_MESSAGE,
    });

    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
