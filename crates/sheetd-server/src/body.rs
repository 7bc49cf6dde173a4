use axum::body::Body;
use serde_json::Value;

use crate::error::ApiError;

/// Accumulate a (possibly chunked) request body and parse it as JSON.
///
/// An empty body decodes to `{}` rather than an error, so bodiless POSTs
/// behave like posting an empty object. Malformed JSON is a 400-class
/// failure; a stream-level read failure is a 500-class one.
pub async fn decode(body: Body) -> Result<Value, ApiError> {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if bytes.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequestBody(format!("invalid JSON body: {e}")))
}
