//! `AuthUser` extractor: requires an identity and resolves its defaults.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use tradedesk_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::identity::Identity;
use crate::state::AppState;

/// Authenticated caller available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User id.
    pub user_id: String,
    /// Resolved role (configured default when the provider sent none).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = Identity::from_headers(&parts.headers)
            .ok_or_else(|| AppError::unauthorized("Missing authenticated session"))?;

        let role = identity.role_or(&state.config.auth.default_role).to_string();

        Ok(AuthUser {
            user_id: identity.user_id,
            role,
        })
    }
}
