//! Fixed-body routers.
//!
//! Each router consists of a single fallback route, so every method, path,
//! and header combination receives the same response. The body is captured
//! by the handler closure at construction time and cloned per request.

use axum::body::Body;
use axum::routing::any;
use axum::Router;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::Response;

/// Router that answers every request with the given body as `text/html`.
///
/// The content-type is set to exactly `text/html`, without a charset
/// parameter. The body is sent raw and unescaped.
pub fn html_responder(body: String) -> Router {
    Router::new().fallback(any(move || {
        let body = body.clone();
        async move {
            ([(CONTENT_TYPE, HeaderValue::from_static("text/html"))], body)
        }
    }))
}

/// Router that answers every request with the given body and no
/// content-type header.
///
/// The response is built directly from a [`Body`] so the framework adds no
/// content-type of its own.
pub fn bare_responder(body: String) -> Router {
    Router::new().fallback(any(move || {
        let body = body.clone();
        async move { Response::new(Body::from(body)) }
    }))
}
