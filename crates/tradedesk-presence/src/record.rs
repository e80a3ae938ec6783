//! Presence record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display metadata supplied by the session provider on each touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Role name as resolved from the persisted user profile.
    pub role: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl SessionMetadata {
    /// Build metadata from its three fields.
    pub fn new(role: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One tracked user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Role name.
    pub role: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Time of the most recent touch.
    pub last_active: DateTime<Utc>,
}

impl SessionRecord {
    pub(crate) fn stamp(metadata: SessionMetadata, at: DateTime<Utc>) -> Self {
        Self {
            role: metadata.role,
            name: metadata.name,
            email: metadata.email,
            last_active: at,
        }
    }
}

/// A live record whose role is privileged, flattened with its user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineAdmin {
    /// User id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role name.
    pub role: String,
    /// Time of the most recent touch.
    pub last_active: DateTime<Utc>,
}

impl OnlineAdmin {
    pub(crate) fn from_record(id: &str, record: &SessionRecord) -> Self {
        Self {
            id: id.to_string(),
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
            last_active: record.last_active,
        }
    }
}
