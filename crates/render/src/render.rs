use crate::error::{ErrorKind, Result};
use crate::particles::{ParticleConfig, parse_count};
use crate::style::Palette;
use crate::style::assets::{Builtins, PAGE, STYLESHEET};
use crate::{Assembler, ParsedRequest};
use exn::ResultExt;
use tracing::instrument;
use upon::{Engine, Template};

pub const DEFAULT_TITLE: &str = "Generated Image";
pub const DEFAULT_PARTICLES_SCRIPT: &str = "https://cdnjs.cloudflare.com/ajax/libs/tsparticles/1.18.1/tsparticles.min.js";
pub const DEFAULT_PARTICLES_INTEGRITY: &str =
    "sha512-PYHWDEuXOTJ9MZ+/QHqkbgiEYZ+LImQv3i/9NyYOABFvK37e4q4Wg7aQDN1JpoGiEu1TYZh6JMrZluZox2gbDA==";

/// Document-level settings that don't vary per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Contents of `<title>`.
    pub title: String,
    /// URL of the particle engine loader script.
    pub particles_script: String,
    /// Subresource-integrity hash for the loader; `None` omits the attribute.
    pub particles_integrity: Option<String>,
}
impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            particles_script: DEFAULT_PARTICLES_SCRIPT.to_string(),
            particles_integrity: Some(DEFAULT_PARTICLES_INTEGRITY.to_string()),
        }
    }
}

/// Registers the stylesheet as a named template (so the page can include it)
/// and compiles the page eagerly so syntax errors surface at construction.
pub(crate) fn compile() -> Result<(Engine<'static>, Template<'static>)> {
    tracing::debug!(templates = ?Builtins::list(), "Compiling card template");
    let mut engine = Engine::new();
    engine.add_template(STYLESHEET, Builtins::load(STYLESHEET)?).or_raise(|| ErrorKind::Template)?;
    let template = engine.compile(Builtins::load(PAGE)?).or_raise(|| ErrorKind::Template)?;
    Ok((engine, template))
}

impl Assembler {
    /// Produces the complete HTML document for a request.
    ///
    /// Deterministic for identical inputs and collaborator outputs. Errors
    /// raised by the sanitizer or markdown renderer are returned as-is.
    #[instrument(skip_all, fields(theme = %request.theme, markdown = request.markdown))]
    pub fn assemble(&self, request: &ParsedRequest) -> Result<String> {
        let palette = Palette::from(request.theme);
        let particles = ParticleConfig::new(parse_count(&request.particle_count), &palette);
        let body = match request.markdown {
            true => self.markdown.render_markdown(&request.text)?,
            false => self.sanitizer.sanitize(&request.text)?,
        };
        let body = self.emojifier.emojify(&body);
        // Interpolated straight into the stylesheet, so always sanitized.
        let font_size = self.sanitizer.sanitize(&request.font_size)?;
        let particles = serde_json::to_string(&particles).or_raise(|| ErrorKind::Template)?;

        let html = self
            .template
            .render(
                &self.engine,
                upon::value! {
                    title: &self.page.title,
                    fonts: upon::value! {
                        regular: self.fonts.regular(),
                        bold: self.fonts.bold(),
                        mono: self.fonts.mono(),
                    },
                    font_size: font_size,
                    foreground: palette.foreground,
                    body: body,
                    script: upon::value! {
                        src: &self.page.particles_script,
                        integrity: self.page.particles_integrity.as_deref(),
                    },
                    particles: particles,
                },
            )
            .to_string()
            .or_raise(|| ErrorKind::Template)?;
        tracing::debug!(bytes = html.len(), "Card document assembled");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FontSet;
    use crate::error::Error;
    use ogcard_request::{FileType, Theme};

    fn request(text: &str) -> ParsedRequest {
        ParsedRequest { text: text.to_string(), ..ParsedRequest::default() }
    }

    fn stub_assembler() -> Assembler {
        Assembler::new(FontSet::from_bytes(b"regular", b"bold", b"mono"))
            .unwrap()
            .with_sanitizer(|text: &str| -> Result<String> { Ok(format!("[sanitized:{text}]")) })
            .with_markdown(|text: &str| -> Result<String> { Ok(format!("[markdown:{text}]")) })
            .with_emojifier(|html: &str| format!("[emoji:{html}]"))
    }

    #[test]
    fn test_template_compiles() {
        assert!(compile().is_ok());
    }

    #[test]
    fn test_plain_text_is_sanitized_then_emojified() {
        let html = stub_assembler().assemble(&request("Hello")).unwrap();
        assert!(html.contains("[emoji:[sanitized:Hello]]"));
        assert!(!html.contains("[markdown:"));
    }

    #[test]
    fn test_markdown_is_not_sanitized() {
        let request = ParsedRequest { markdown: true, ..request("**Hello**") };
        let html = stub_assembler().assemble(&request).unwrap();
        assert!(html.contains("[emoji:[markdown:**Hello**]]"));
        assert!(!html.contains("[sanitized:**Hello**]"));
    }

    #[test]
    fn test_font_size_is_always_sanitized() {
        let request = ParsedRequest { markdown: true, font_size: "150px".to_string(), ..request("x") };
        let html = stub_assembler().assemble(&request).unwrap();
        assert!(html.contains("font-size: [sanitized:150px];"));
    }

    #[test]
    fn test_default_font_size() {
        let html = Assembler::new(FontSet::default()).unwrap().assemble(&request("x")).unwrap();
        assert!(html.contains("font-size: 120px;"));
    }

    #[test]
    fn test_dark_theme_colours() {
        let request = ParsedRequest { theme: Theme::Dark, ..request("x") };
        let html = stub_assembler().assemble(&request).unwrap();
        assert!(html.contains("color: #fff;"));
        assert!(html.contains(r##""background":{"color":"#111"}"##));
        assert!(html.contains(r##""links":{"enable":true,"color":"#707070"}"##));
    }

    #[test]
    fn test_light_theme_colours() {
        let html = stub_assembler().assemble(&request("x")).unwrap();
        assert!(html.contains("color: #111;"));
        assert!(html.contains(r##""background":{"color":"#fff"}"##));
        assert!(html.contains(r##""color":{"value":"#a0a0a0"}"##));
    }

    #[test]
    fn test_non_numeric_particle_count_uses_default() {
        let request = ParsedRequest { particle_count: "lots".to_string(), ..request("x") };
        let html = stub_assembler().assemble(&request).unwrap();
        assert!(html.contains(r#""number":{"value":1200}"#));
    }

    #[test]
    fn test_fonts_are_inlined() {
        let html = stub_assembler().assemble(&request("x")).unwrap();
        assert!(html.contains("base64,cmVndWxhcg==) format('woff2')"));
        assert!(html.contains("base64,Ym9sZA==) format('woff2')"));
        assert!(html.contains("base64,bW9ubw==) format('woff2')"));
    }

    #[test]
    fn test_page_options() {
        let page = PageOptions {
            title: "Card".to_string(),
            particles_script: "https://example.com/particles.js".to_string(),
            particles_integrity: None,
        };
        let html = stub_assembler().with_page(page).assemble(&request("x")).unwrap();
        assert!(html.contains("<title>Card</title>"));
        assert!(html.contains(r#"src="https://example.com/particles.js""#));
        assert!(!html.contains("integrity="));
    }

    #[test]
    fn test_default_page_has_integrity() {
        let html = stub_assembler().assemble(&request("x")).unwrap();
        assert!(html.contains(&format!(r#"integrity="{DEFAULT_PARTICLES_INTEGRITY}""#)));
        assert!(html.contains("<title>Generated Image</title>"));
    }

    #[test]
    fn test_collaborator_errors_propagate_unchanged() {
        let assembler = stub_assembler().with_sanitizer(|_: &str| -> Result<String> {
            Err(Error::from(ErrorKind::Render))
        });
        let err = assembler.assemble(&request("x")).unwrap_err();
        assert_eq!(*err, ErrorKind::Render);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let assembler = stub_assembler();
        let request = ParsedRequest { file_type: FileType::Jpeg, ..request("same") };
        assert_eq!(assembler.assemble(&request).unwrap(), assembler.assemble(&request).unwrap());
    }
}
