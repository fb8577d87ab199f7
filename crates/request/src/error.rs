//! Request Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A request parsing error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for request parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client supplied a parameter that cannot be interpreted. Reject the
    /// request; the same input will always fail.
    #[display("invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Query key (`fontSize`, `theme`, `num`), or `path`/`url`.
        parameter: &'static str,
        /// Human-readable explanation.
        reason: String,
    },
}

impl ErrorKind {
    pub(crate) fn repeated(parameter: &'static str) -> Self {
        Self::InvalidParameter { parameter, reason: format!("expected a single {parameter}") }
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Client-input errors only; the URL is either valid or it's not.
        false
    }
}
