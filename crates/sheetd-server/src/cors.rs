use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Methods the API permits cross-origin.
pub const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";
/// Request headers the API permits cross-origin.
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Append the permissive cross-origin headers to a response.
pub fn apply_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
}

/// Cross-origin middleware wrapping the whole router.
///
/// Preflight (`OPTIONS`, any path) short-circuits here, before routing and
/// before any store access: 204, the cross-origin headers, an explicit zero
/// content length, no body. Every other response passes through and gains
/// the same headers.
pub async fn cross_origin(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return preflight();
    }
    let mut response = next.run(req).await;
    apply_headers(response.headers_mut());
    response
}

fn preflight() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    apply_headers(response.headers_mut());
    response
        .headers_mut()
        .insert(header::CONTENT_LENGTH, HeaderValue::from_static("0"));
    response
}
