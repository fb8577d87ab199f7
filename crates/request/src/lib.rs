//! Request parsing for card rendering.
//!
//! Turns a request target such as `/Hello%20World.png?theme=dark&md=1` into a
//! [`ParsedRequest`]: the heading text from the path, the output
//! [`FileType`] from its final extension, and the [`Theme`], markdown flag,
//! font size and particle count from the query string. Every field is
//! defaulted; only repeated scalar parameters and malformed path escapes are
//! rejected.

pub mod error;
mod models;
mod parse;

pub use crate::models::{DEFAULT_FONT_SIZE, DEFAULT_PARTICLE_COUNT, FileType, ParsedRequest, Theme};
pub use crate::parse::parse;
