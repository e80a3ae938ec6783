//! Admin presence handlers.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;

use tradedesk_presence::SessionRecord;

use crate::dto::response::{ApiResponse, OnlineUserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/admin/online
///
/// Live users holding an admin role, in first-seen order. Access is
/// checked by `admin_guard` on the route.
pub async fn online_admins(
    State(state): State<AppState>,
) -> Result<Json<Vec<OnlineUserResponse>>, ApiError> {

    let online: Vec<OnlineUserResponse> = state
        .presence
        .get_online_with_roles(&state.admin_roles)
        .into_iter()
        .map(OnlineUserResponse::from)
        .collect();

    tracing::debug!(count = online.len(), "Online administrators");
    Ok(Json(online))
}

/// GET /api/admin/sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BTreeMap<String, SessionRecord>>>, ApiError> {
    let sessions = state.presence.get_all().into_iter().collect();
    Ok(Json(ApiResponse::ok(sessions)))
}
