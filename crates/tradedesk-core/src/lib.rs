//! # tradedesk-core
//!
//! Core crate for TradeDesk. Contains configuration schemas, the clock
//! abstraction used by time-dependent components, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other TradeDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
