//! Session handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/logout
///
/// Drops the caller from the presence registry. The session itself is
/// ended by the upstream provider.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<MessageResponse>> {
    state.presence.remove(&auth.user_id);
    tracing::info!(user_id = %auth.user_id, "User logged out");
    Json(ApiResponse::ok(MessageResponse {
        message: "Logged out".to_string(),
    }))
}
