//! Caller identity as asserted by the upstream session provider.
//!
//! The provider authenticates the user and forwards the result in trusted
//! headers. Only `x-user-id` is mandatory; the rest fall back to defaults.

use axum::http::HeaderMap;

use tradedesk_presence::SessionMetadata;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the user's role.
pub const USER_ROLE_HEADER: &str = "x-user-role";
/// Header carrying the display name.
pub const USER_NAME_HEADER: &str = "x-user-name";
/// Header carrying the email address.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

const FALLBACK_NAME: &str = "User";

/// Raw identity headers of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// User id, never empty.
    pub user_id: String,
    /// Role, if supplied.
    pub role: Option<String>,
    /// Display name, if supplied.
    pub name: Option<String>,
    /// Email, if supplied.
    pub email: Option<String>,
}

/// Header values are opaque UTF-8; `HeaderValue::to_str` would reject
/// anything outside visible ASCII, such as accented names.
fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl Identity {
    /// Read identity from headers. `None` when no usable user id is present.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let user_id = header(headers, USER_ID_HEADER)?;
        Some(Self {
            user_id,
            role: header(headers, USER_ROLE_HEADER),
            name: header(headers, USER_NAME_HEADER),
            email: header(headers, USER_EMAIL_HEADER),
        })
    }

    /// Role, or `default_role` when the provider sent none.
    pub fn role_or<'a>(&'a self, default_role: &'a str) -> &'a str {
        self.role.as_deref().unwrap_or(default_role)
    }

    /// Resolve presence metadata, filling gaps the way the session
    /// provider's profile would: name from the email's local part, then a
    /// generic label; email empty.
    pub fn session_metadata(&self, default_role: &str) -> SessionMetadata {
        let email = self.email.clone().unwrap_or_default();
        let name = self
            .name
            .clone()
            .or_else(|| {
                email
                    .split('@')
                    .next()
                    .filter(|local| !local.is_empty())
                    .map(String::from)
            })
            .unwrap_or_else(|| FALLBACK_NAME.to_string());

        SessionMetadata::new(self.role_or(default_role), name, email)
    }
}
