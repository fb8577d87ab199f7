use std::fmt::{Display, Formatter, Result as FmtResult};

/// Default CSS length for the heading text.
pub const DEFAULT_FONT_SIZE: &str = "120px";
/// Default number of background particles, kept as the raw string it would
/// have arrived as.
pub const DEFAULT_PARTICLE_COUNT: &str = "1200";

/// Image format the downstream renderer should produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FileType {
    #[default]
    Png,
    Jpeg,
}
impl FileType {
    /// Maps a path extension to a file type. Only the exact string `jpeg`
    /// selects JPEG; everything else (including no extension) is PNG.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("jpeg") => Self::Jpeg,
            _ => Self::Png,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}
impl Display for FileType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Colour scheme of the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}
impl Theme {
    /// Total mapping from a raw query value: exactly `dark` is dark, anything
    /// else (including absence) is light.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Fully defaulted rendering parameters decoded from a single request.
///
/// Every field is always populated; [`parse`](crate::parse) never produces a
/// partial value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedRequest {
    pub file_type: FileType,
    /// Percent-decoded heading text. May be empty.
    pub text: String,
    pub theme: Theme,
    /// Render `text` as markdown instead of escaping it.
    pub markdown: bool,
    /// Opaque CSS length; sanitized again at assembly time.
    pub font_size: String,
    /// Raw particle count; parsed leniently at assembly time.
    pub particle_count: String,
}
impl Default for ParsedRequest {
    fn default() -> Self {
        Self {
            file_type: FileType::default(),
            text: String::new(),
            theme: Theme::default(),
            markdown: false,
            font_size: DEFAULT_FONT_SIZE.to_string(),
            particle_count: DEFAULT_PARTICLE_COUNT.to_string(),
        }
    }
}
