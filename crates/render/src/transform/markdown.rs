use super::MarkdownRenderer;
use crate::error::Result;
use pulldown_cmark::{Options, Parser, html};

/// CommonMark renderer with strikethrough and tables enabled.
///
/// Raw HTML embedded in the markdown is cleaned with [`ammonia`] so the
/// output can be trusted without a second sanitizing pass.
#[derive(Clone, Copy, Debug)]
pub struct Markdown {
    options: Options,
}
impl Default for Markdown {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        Self { options }
    }
}
impl MarkdownRenderer for Markdown {
    fn render_markdown(&self, text: &str) -> Result<String> {
        let parser = Parser::new_ext(text, self.options);
        let mut output = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut output, parser);
        Ok(ammonia::clean(&output))
    }
}
