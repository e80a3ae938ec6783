//! RBAC helpers for role-based route guarding.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use tradedesk_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Checks that the authenticated user holds one of the configured admin roles.
pub fn require_admin(auth: &AuthUser, state: &AppState) -> Result<(), AppError> {
    if !state.admin_roles.contains(&auth.role) {
        tracing::warn!(user_id = %auth.user_id, role = %auth.role, "Admin access denied");
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}

/// Route guard for admin endpoints.
///
/// Sits outside activity tracking, so a caller rejected here is never
/// written to the presence registry.
pub async fn admin_guard(
    State(state): State<AppState>,
    auth: AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_admin(&auth, &state)?;
    Ok(next.run(request).await)
}
