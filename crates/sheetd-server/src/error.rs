use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors from server bootstrap and configuration.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Per-request errors, each mapping to one HTTP response shape.
///
/// Everything a handler can fail with converts to a response here; there is
/// no other error path out of the request pipeline, so every request is
/// answered even on internal failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not parseable JSON.
    #[error("{0}")]
    BadRequestBody(String),

    /// The body parsed but has the wrong shape for the route.
    #[error("{0}")]
    Validation(String),

    /// Delete targeted a record index that does not resolve.
    #[error("no record at index {0}")]
    RecordNotFound(String),

    /// Reading or writing the backing document failed.
    #[error("store error: {0}")]
    Store(#[from] sheetd_store::StoreError),

    /// Stream-level failure while reading the request body.
    #[error("transport error: {0}")]
    Transport(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequestBody(msg) | ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "message": msg }))
            }
            ApiError::RecordNotFound(_) => {
                (StatusCode::NOT_FOUND, json!({ "message": self.to_string() }))
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "store access failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    // The underlying message text is part of the response
                    // contract; clients display it.
                    json!({ "message": "Internal Server Error", "error": e.to_string() }),
                )
            }
            ApiError::Transport(msg) => {
                tracing::error!(error = %msg, "request body read failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal Server Error", "error": msg }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = ApiError::Validation("bad shape".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn record_not_found_maps_to_404() {
        let response = ApiError::RecordNotFound("7".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn transport_maps_to_500() {
        let response = ApiError::Transport("connection reset".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
