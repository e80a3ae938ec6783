//! Role settings applied at the HTTP boundary.
//!
//! Authentication itself is performed by the upstream session provider;
//! these values only decide how its asserted roles are interpreted.

use serde::{Deserialize, Serialize};

/// Role configuration for request authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Roles allowed to read the admin presence endpoints.
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
    /// Role assumed when the provider supplies none.
    #[serde(default = "default_role")]
    pub default_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_roles: default_admin_roles(),
            default_role: default_role(),
        }
    }
}

fn default_admin_roles() -> Vec<String> {
    vec![
        "ADMIN".to_string(),
        "OWNER".to_string(),
        "SUPERADMIN".to_string(),
    ]
}

fn default_role() -> String {
    "USER".to_string()
}
