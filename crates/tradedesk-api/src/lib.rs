//! # tradedesk-api
//!
//! HTTP API layer for TradeDesk built on Axum.
//!
//! Identity is asserted by the upstream session provider through request
//! headers. This crate refreshes presence on every identified request and
//! exposes the admin "who's online" endpoints on top of the registry.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
