//! Custom Axum extractors.

pub mod auth;
pub mod identity;

pub use auth::AuthUser;
pub use identity::Identity;
