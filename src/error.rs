//! CLI Error Types

use derive_more::{Display, Error};

/// A CLI error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which stage of the pipeline failed; the underlying crate's error tree is
/// attached as a child.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("could not load fonts")]
    Fonts,
    #[display("rejected request")]
    Request,
    #[display("could not assemble card")]
    Render,
    #[display("could not write output")]
    Io,
}
