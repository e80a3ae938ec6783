//! Axum middleware stack.

pub mod activity;
pub mod cors;
pub mod logging;
pub mod rbac;
