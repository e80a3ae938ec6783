//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `TRADEDESK__*` environment variables. Each sub-module
//! represents a logical configuration section, and every field has a
//! default so an empty source set still yields a runnable configuration.

pub mod app;
pub mod auth;
pub mod logging;
pub mod presence;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::presence::PresenceConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Presence registry settings.
    #[serde(default)]
    pub presence: PresenceConfig,
    /// Role settings for the HTTP boundary.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml` and environment
    /// variables prefixed with `TRADEDESK` (e.g.
    /// `TRADEDESK__PRESENCE__TIMEOUT_MS=60000`). Missing files are skipped.
    pub fn load(env: &str) -> AppResult<Self> {
        Self::load_from_dir("config", env)
    }

    /// Same as [`AppConfig::load`] with an explicit configuration directory.
    pub fn load_from_dir(dir: &str, env: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("TRADEDESK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("presence.privileged_roles")
                    .with_list_parse_key("auth.admin_roles")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the application misbehave silently.
    pub fn validate(&self) -> AppResult<()> {
        if self.presence.timeout_ms == 0 {
            return Err(AppError::configuration(
                "presence.timeout_ms must be greater than zero",
            ));
        }
        if self.presence.privileged_roles.is_empty() {
            return Err(AppError::configuration(
                "presence.privileged_roles must name at least one role",
            ));
        }
        if self.auth.admin_roles.is_empty() {
            return Err(AppError::configuration(
                "auth.admin_roles must name at least one role",
            ));
        }
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(AppError::configuration(format!(
                "logging.format must be 'json' or 'pretty', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }
}
