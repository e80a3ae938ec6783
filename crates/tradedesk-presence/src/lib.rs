//! # tradedesk-presence
//!
//! Tracks which authenticated users have been active recently. Records are
//! refreshed by the activity middleware, dropped on logout, and expired
//! lazily whenever the registry is read.

pub mod record;
pub mod registry;
pub mod roles;

pub use record::{OnlineAdmin, SessionMetadata, SessionRecord};
pub use registry::PresenceRegistry;
pub use roles::RoleSet;
