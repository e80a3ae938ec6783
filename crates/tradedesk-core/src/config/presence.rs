//! Presence registry configuration.

use serde::{Deserialize, Serialize};

/// Settings for the in-memory presence registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// Inactivity window in milliseconds after which a record is stale.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Roles reported by the "online admins" query.
    #[serde(default = "default_privileged_roles")]
    pub privileged_roles: Vec<String>,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            privileged_roles: default_privileged_roles(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5 * 60 * 1000
}

fn default_privileged_roles() -> Vec<String> {
    vec!["ADMIN".to_string(), "OWNER".to_string()]
}
