//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tradedesk_core::config::AppConfig;
use tradedesk_core::traits::Clock;
use tradedesk_presence::{PresenceRegistry, RoleSet};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Presence registry
    pub presence: Arc<PresenceRegistry>,
    /// Roles allowed on the admin endpoints
    pub admin_roles: Arc<RoleSet>,
}

impl AppState {
    /// Wire state from configuration and an existing registry.
    pub fn new(config: AppConfig, presence: Arc<PresenceRegistry>) -> Self {
        let admin_roles = config.auth.admin_roles.iter().cloned().collect();
        Self {
            config: Arc::new(config),
            presence,
            admin_roles: Arc::new(admin_roles),
        }
    }

    /// Build a fresh registry on `clock` and wire state around it.
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let presence = Arc::new(PresenceRegistry::new(&config.presence, clock));
        Self::new(config, presence)
    }
}
