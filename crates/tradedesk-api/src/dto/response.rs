//! Response DTOs.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use tradedesk_presence::OnlineAdmin;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// One entry of the "who's online" list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineUserResponse {
    /// User id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: String,
    /// Always `true`; only live records are listed.
    pub is_online: bool,
    /// Last activity as an ISO-8601 string with millisecond precision.
    pub last_seen: String,
    /// Last activity in milliseconds since the Unix epoch.
    pub last_active: i64,
}

/// Format a timestamp the way dashboards expect it (`2024-01-01T00:00:00.000Z`).
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<OnlineAdmin> for OnlineUserResponse {
    fn from(admin: OnlineAdmin) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            role: admin.role,
            is_online: true,
            last_seen: iso_timestamp(admin.last_active),
            last_active: admin.last_active.timestamp_millis(),
        }
    }
}

/// Presence status of a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceStatusResponse {
    /// User id.
    pub user_id: String,
    /// Whether the user is within the activity window.
    pub online: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Users currently inside the activity window.
    pub online_users: usize,
    /// Activity window in milliseconds.
    pub presence_timeout_ms: i64,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}
