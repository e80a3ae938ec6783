//! Convenience result type alias for TradeDesk.

use crate::error::AppError;

/// A specialized `Result` type for TradeDesk operations.
pub type AppResult<T> = Result<T, AppError>;
