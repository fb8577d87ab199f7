//! Text collaborators used while assembling a card.
//!
//! Each capability is a single-method trait so the assembler can be driven by
//! stubs in tests. Plain closures implement all three.
//!
//! | Capability           | Default        | Input → output                     |
//! |----------------------|----------------|------------------------------------|
//! | [`Sanitizer`]        | [`HtmlEscape`] | free text → markup-safe text       |
//! | [`MarkdownRenderer`] | [`Markdown`]   | markdown → trusted HTML fragment   |
//! | [`Emojifier`]        | [`Twemoji`]    | HTML → HTML with emoji images      |

mod emoji;
mod escape;
mod markdown;

pub use self::emoji::{DEFAULT_BASE_URL as DEFAULT_EMOJI_BASE_URL, Twemoji};
pub use self::escape::HtmlEscape;
pub use self::markdown::Markdown;
use crate::error::Result;

/// Escapes or strips markup so text cannot execute when embedded.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, text: &str) -> Result<String>;
}

/// Renders markdown into an HTML fragment. The output is trusted as-is and
/// is not passed through a [`Sanitizer`] afterwards.
pub trait MarkdownRenderer: Send + Sync {
    fn render_markdown(&self, text: &str) -> Result<String>;
}

/// Replaces emoji characters with inline image references.
pub trait Emojifier: Send + Sync {
    fn emojify(&self, html: &str) -> String;
}

impl<F> Sanitizer for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn sanitize(&self, text: &str) -> Result<String> {
        self(text)
    }
}

impl<F> MarkdownRenderer for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn render_markdown(&self, text: &str) -> Result<String> {
        self(text)
    }
}

impl<F> Emojifier for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn emojify(&self, html: &str) -> String {
        self(html)
    }
}
