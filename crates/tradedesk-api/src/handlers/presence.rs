//! Presence lookup handlers.

use axum::Json;
use axum::extract::{Path, State};

use tradedesk_core::error::AppError;

use crate::dto::response::{ApiResponse, PresenceStatusResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/presence/{user_id}
pub async fn get_presence(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<PresenceStatusResponse>>, ApiError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::validation("User id must not be empty").into());
    }

    let online = state.presence.is_online(user_id);
    Ok(Json(ApiResponse::ok(PresenceStatusResponse {
        user_id: user_id.to_string(),
        online,
    })))
}
