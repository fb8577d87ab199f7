//! Font payloads embedded into every card as inline `@font-face` sources.

use crate::error::{ErrorKind, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use exn::ResultExt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub const REGULAR_FILE: &str = "NotoSans-Regular.woff2";
pub const BOLD_FILE: &str = "NotoSans-Bold.woff2";
pub const MONO_FILE: &str = "Vera-Mono.woff2";

#[derive(Debug)]
struct Payloads {
    regular: String,
    bold: String,
    mono: String,
}

/// Base64-encoded WOFF2 payloads for the regular, bold and monospace faces.
///
/// Loaded once at startup and shared read-only; cloning only bumps a
/// reference count. The [`Default`] set has empty payloads, which browsers
/// treat as a failed font load and fall back past.
#[derive(Clone, Debug)]
pub struct FontSet {
    payloads: Arc<Payloads>,
}
impl FontSet {
    /// Encodes raw WOFF2 bytes.
    pub fn from_bytes(regular: impl AsRef<[u8]>, bold: impl AsRef<[u8]>, mono: impl AsRef<[u8]>) -> Self {
        Self {
            payloads: Arc::new(Payloads {
                regular: STANDARD.encode(regular),
                bold: STANDARD.encode(bold),
                mono: STANDARD.encode(mono),
            }),
        }
    }

    /// Reads [`REGULAR_FILE`], [`BOLD_FILE`] and [`MONO_FILE`] from `directory`.
    ///
    /// Files are read eagerly so that a missing font fails at startup rather
    /// than per request.
    pub fn load(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        let read = |name: &str| -> Result<Vec<u8>> {
            let path = directory.join(name);
            if !path.is_file() {
                exn::bail!(ErrorKind::AssetNotFound(path.display().to_string()));
            }
            fs::read(&path).or_raise(|| ErrorKind::Io)
        };
        let fonts = Self::from_bytes(read(REGULAR_FILE)?, read(BOLD_FILE)?, read(MONO_FILE)?);
        tracing::debug!(directory = %directory.display(), bytes = fonts.encoded_len(), "Loaded font payloads");
        Ok(fonts)
    }

    pub fn regular(&self) -> &str {
        &self.payloads.regular
    }

    pub fn bold(&self) -> &str {
        &self.payloads.bold
    }

    pub fn mono(&self) -> &str {
        &self.payloads.mono
    }

    fn encoded_len(&self) -> usize {
        self.regular().len() + self.bold().len() + self.mono().len()
    }
}
impl Default for FontSet {
    fn default() -> Self {
        Self::from_bytes(b"", b"", b"")
    }
}
