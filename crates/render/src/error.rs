//! Render Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A render error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A text collaborator (sanitizer or markdown renderer) failed. Raised by
    /// the collaborator itself and passed through the assembler untouched.
    #[display("text rendering failed")]
    Render,
    /// The embedded page template failed to compile or render.
    #[display("issue with the page template")]
    Template,
    /// Asset was not loadable (either font file or builtin template).
    #[display("asset not found: {_0}")]
    AssetNotFound(#[error(not(source))] String),
    #[display("I/O error")]
    Io,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
