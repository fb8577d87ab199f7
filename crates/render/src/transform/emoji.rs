use super::Emojifier;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Twemoji asset root; images live under `{base}{folder}/{codepoints}.{ext}`.
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/jdecked/twemoji@15.1.0/assets/";

const ZWJ: char = '\u{200D}';
const VS16: char = '\u{FE0F}';

// A single emoji: presentation-by-default, or text-by-default forced by VS-16.
const SINGLE: &str = r"(?:\p{Emoji_Presentation}|\p{Extended_Pictographic}\x{FE0F})\p{Emoji_Modifier}?";
// Continuation of a ZWJ sequence; VS-16 is optional inside them.
const JOINED: &str = r"(?:\x{200D}\p{Extended_Pictographic}\x{FE0F}?\p{Emoji_Modifier}?)*";
const FLAG: &str = r"[\x{1F1E6}-\x{1F1FF}]{2}";
const KEYCAP: &str = r"[#*0-9]\x{FE0F}?\x{20E3}";

static EMOJI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{FLAG}|{KEYCAP}|{SINGLE}{JOINED}")).unwrap());

/// Replaces emoji with Twemoji `<img>` tags.
///
/// File names follow Twemoji's convention: lowercase hex codepoints joined by
/// `-`, with VS-16 dropped unless the sequence contains a zero-width joiner.
#[derive(Clone, Debug)]
pub struct Twemoji {
    base_url: String,
    extension: String,
}
impl Twemoji {
    /// `svg` assets are served from `svg/`, `png` assets from `72x72/`.
    pub fn new(base_url: impl Into<String>, extension: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let extension = extension.into().trim().trim_matches('.').to_string();
        Self { base_url, extension }
    }

    fn folder(&self) -> &str {
        match self.extension.as_str() {
            "png" => "72x72",
            other => other,
        }
    }

    fn image(&self, emoji: &str) -> String {
        format!(
            r#"<img class="emoji" draggable="false" alt="{emoji}" src="{}{}/{}.{}"/>"#,
            self.base_url,
            self.folder(),
            codepoints(emoji),
            self.extension
        )
    }
}
impl Default for Twemoji {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, "svg")
    }
}
impl Emojifier for Twemoji {
    fn emojify(&self, html: &str) -> String {
        EMOJI_REGEX.replace_all(html, |caps: &Captures<'_>| self.image(&caps[0])).into_owned()
    }
}

fn codepoints(emoji: &str) -> String {
    let keep_vs16 = emoji.contains(ZWJ);
    emoji
        .chars()
        .filter(|&c| keep_vs16 || c != VS16)
        .map(|c| format!("{:x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-")
}
