//! Decoding of a request target (path + query) into a [`ParsedRequest`].

use crate::error::{ErrorKind, Result};
use crate::models::{DEFAULT_FONT_SIZE, DEFAULT_PARTICLE_COUNT, FileType, ParsedRequest, Theme};
use exn::{OptionExt, ResultExt};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::instrument;
use url::{Url, form_urlencoded};

/// Query parameters grouped by key, preserving every value so that repeated
/// keys can be told apart from scalar ones.
struct Query {
    params: HashMap<String, Vec<String>>,
}
impl Query {
    fn new(query: &str) -> Self {
        let mut params: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            params.entry(key.into_owned()).or_default().push(value.into_owned());
        }
        Self { params }
    }

    fn values(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// A parameter that must appear at most once.
    fn single(&self, key: &'static str) -> Result<Option<&str>> {
        match self.values(key) {
            [] => Ok(None),
            [value] => Ok(Some(value.as_str())),
            _ => exn::bail!(ErrorKind::repeated(key)),
        }
    }

    /// A scalar parameter where both absence and an empty value select `default`.
    fn single_or(&self, key: &'static str, default: &str) -> Result<String> {
        Ok(self.single(key)?.filter(|value| !value.is_empty()).unwrap_or(default).to_string())
    }
}

/// Parses a request target into fully defaulted rendering parameters.
///
/// Accepts origin-form (`/Hello%20World.png?theme=dark`) and absolute-form
/// (`https://example.com/Hello.png`) targets. Fails with
/// [`ErrorKind::InvalidParameter`] when `fontSize`, `theme` or `num` are
/// repeated, or when the path contains a malformed percent-escape.
///
/// ```
/// use ogcard_request::{FileType, Theme};
///
/// let request = ogcard_request::parse("/Hi%20There.png?theme=dark&num=3").unwrap();
/// assert_eq!(request.text, "Hi There");
/// assert_eq!(request.file_type, FileType::Png);
/// assert_eq!(request.theme, Theme::Dark);
/// assert_eq!(request.font_size, "120px");
/// assert_eq!(request.particle_count, "3");
/// ```
#[instrument(level = "debug", skip_all)]
pub fn parse(raw: impl AsRef<str>) -> Result<ParsedRequest> {
    let raw = raw.as_ref();
    tracing::info!("HTTP {raw}");
    let (path, query) = split_target(origin_form(raw)?);

    let query = Query::new(query);
    let font_size = query.single_or("fontSize", DEFAULT_FONT_SIZE)?;
    let theme = Theme::from_query(query.single("theme")?);
    let particle_count = query.single_or("num", DEFAULT_PARTICLE_COUNT)?;
    // Not validated as a scalar; a repeated `md` simply never matches.
    let markdown = matches!(query.values("md"), [value] if value == "1" || value == "true");

    let (text, extension) = split_extension(path);
    let request = ParsedRequest {
        file_type: FileType::from_extension(extension),
        text: decode_component(text)?,
        theme,
        markdown,
        font_size,
        particle_count,
    };
    tracing::debug!(
        file_type = %request.file_type,
        theme = %request.theme,
        markdown = request.markdown,
        font_size = %request.font_size,
        particle_count = %request.particle_count,
        "Parsed request parameters"
    );
    Ok(request)
}

/// Reduces an absolute-form target (`https://host/path?q`) to its origin-form
/// remainder. The path is sliced from the raw input rather than taken from the
/// parsed URL, which would collapse dot segments.
fn origin_form(raw: &str) -> Result<&str> {
    if raw.is_empty() || raw.starts_with('/') {
        return Ok(raw);
    }
    let invalid = || ErrorKind::InvalidParameter {
        parameter: "url",
        reason: format!("unparseable request target: {raw}"),
    };
    let url = Url::parse(raw).or_raise(invalid)?;
    if !url.has_host() {
        exn::bail!(invalid());
    }
    let (_, rest) = raw.split_once("://").ok_or_raise(invalid)?;
    let start = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Ok(&rest[start..])
}

/// Drops the fragment, then splits the path from the query. Neither half is
/// decoded or normalized here.
fn split_target(target: &str) -> (&str, &str) {
    let target = target.split_once('#').map_or(target, |(target, _)| target);
    target.split_once('?').unwrap_or((target, ""))
}

/// Strips the leading separator and pops the final dot-separated segment as
/// the extension. Any earlier dots belong to the text.
fn split_extension(path: &str) -> (&str, Option<&str>) {
    let path = path.strip_prefix('/').unwrap_or(path);
    match path.rsplit_once('.') {
        Some((text, extension)) => (text, Some(extension)),
        None => (path, None),
    }
}

/// Percent-decodes a path component exactly once.
///
/// [`percent_decode_str`] passes malformed escapes through untouched, so they
/// are rejected up front; the decoded bytes must also be valid UTF-8.
fn decode_component(raw: &str) -> Result<String> {
    let bytes = raw.as_bytes();
    for (position, _) in raw.match_indices('%') {
        let escape = bytes.get(position + 1..position + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            exn::bail!(ErrorKind::InvalidParameter {
                parameter: "path",
                reason: format!("malformed percent-escape at byte {position}"),
            });
        }
    }
    percent_decode_str(raw).decode_utf8().map(Cow::into_owned).or_raise(|| ErrorKind::InvalidParameter {
        parameter: "path",
        reason: "percent-decoded text is not valid UTF-8".to_string(),
    })
}
