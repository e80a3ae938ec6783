//! Request/response logging middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

use crate::extractors::identity::Identity;

/// Logs each request with its caller, status, and duration.
///
/// Anonymous requests log `user_id = "-"`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let user_id = Identity::from_headers(request.headers())
        .map(|identity| identity.user_id)
        .unwrap_or_else(|| "-".to_string());
    let start = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if status >= 500 {
        tracing::error!(%method, %path, %user_id, status, duration_ms, "Request failed");
    } else if status == 401 || status == 403 {
        tracing::warn!(%method, %path, %user_id, status, duration_ms, "Request denied");
    } else {
        tracing::info!(%method, %path, %user_id, status, duration_ms, "HTTP request");
    }

    response
}
