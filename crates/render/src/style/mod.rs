//! Page styling: theme colours, font payloads and the embedded template
//! sources.
//!
//! Everything here is constructed once and reused across requests. Font
//! payloads are read eagerly so that a missing file fails at startup rather
//! than at render time.

pub(crate) mod assets;
mod fonts;
mod palette;

pub use self::fonts::{BOLD_FILE, FontSet, MONO_FILE, REGULAR_FILE};
pub use self::palette::Palette;
