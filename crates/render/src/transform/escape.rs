use super::Sanitizer;
use crate::error::Result;

/// Escapes the HTML-significant characters `& < > " ' /` to entities. Safe
/// for element content, quoted attributes and CSS values inside `<style>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlEscape;
impl Sanitizer for HtmlEscape {
    fn sanitize(&self, text: &str) -> Result<String> {
        Ok(escape_html(text))
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '/' => escaped.push_str("&#x2F;"),
            c => escaped.push(c),
        }
    }
    escaped
}
