//! Embedded assets for rendering.
//!
//! The page skeleton and its stylesheet are embedded into the binary at
//! compile time using [`rust-embed`](rust_embed).

use crate::error::{ErrorKind, Result};
use exn::{OptionExt, ResultExt};
use rust_embed::Embed;
use std::borrow::Cow;

/// Name of the top-level page template.
pub(crate) const PAGE: &str = "card.html";
/// Name of the stylesheet template included by [`PAGE`].
pub(crate) const STYLESHEET: &str = "card.css";

#[derive(Embed)]
#[folder = "../../assets/templates/"]
pub(crate) struct Builtins;
impl Builtins {
    /// Get the source of a builtin template by name.
    pub(crate) fn load(name: impl AsRef<str>) -> Result<String> {
        let data = Self::get(name.as_ref())
            .map(|f| f.data)
            .ok_or_raise(|| ErrorKind::AssetNotFound(Self::identifier(&name)))?;
        String::from_utf8(data.into_owned()).or_raise(|| ErrorKind::AssetNotFound(Self::identifier(&name)))
    }

    /// List all available builtin template names.
    pub(crate) fn list() -> Vec<Cow<'static, str>> {
        Self::iter().collect()
    }

    pub(crate) fn identifier(name: impl AsRef<str>) -> String {
        format!("builtin:{}", name.as_ref().trim().trim_start_matches("builtin:"))
    }
}
