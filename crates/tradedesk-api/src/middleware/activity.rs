//! Presence activity tracking middleware: refreshes the caller on each request.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::extractors::identity::Identity;
use crate::state::AppState;

/// Response header echoing the caller's role for admin-capable users.
pub const ROLE_ECHO_HEADER: &str = "x-user-role";
/// Response header echoing the caller's id for admin-capable users.
pub const ID_ECHO_HEADER: &str = "x-user-id";

/// Stamps presence for every request that carries an identity, before the
/// handler runs. Anonymous requests pass through untouched.
///
/// Callers whose role grants admin access get their role and id echoed
/// back in response headers.
pub async fn track_activity(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(identity) = Identity::from_headers(request.headers()) else {
        return next.run(request).await;
    };

    let metadata = identity.session_metadata(&state.config.auth.default_role);
    let is_admin = state.admin_roles.contains(&metadata.role);
    let role = metadata.role.clone();

    state.presence.update(&identity.user_id, metadata);
    tracing::debug!(user_id = %identity.user_id, role = %role, is_admin, "Presence refreshed");

    let mut response = next.run(request).await;

    if is_admin {
        let headers = response.headers_mut();
        if let Ok(value) = HeaderValue::from_str(&role) {
            headers.insert(ROLE_ECHO_HEADER, value);
        }
        if let Ok(value) = HeaderValue::from_str(&identity.user_id) {
            headers.insert(ID_ECHO_HEADER, value);
        }
    }

    response
}
