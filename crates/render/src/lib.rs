//! Card assembly.
//!
//! An [`Assembler`] turns a [`ParsedRequest`] into a self-contained HTML
//! document: themed heading text (escaped, or rendered as markdown), emoji
//! replaced by images, inline font payloads, and a particle background
//! configured for the client-side engine.
//!
//! ```
//! use ogcard_render::{Assembler, FontSet};
//!
//! let assembler = Assembler::new(FontSet::default()).unwrap();
//! let request = ogcard_request::parse("/Hello%20World.png?theme=dark").unwrap();
//! let html = assembler.assemble(&request).unwrap();
//! assert!(html.contains("Hello World"));
//! assert!(html.contains(r##""background":{"color":"#111"}"##));
//! ```

pub mod error;
mod particles;
mod render;
mod style;
pub mod transform;

use crate::error::Result;
pub use crate::particles::{DEFAULT_COUNT as DEFAULT_PARTICLE_COUNT, ParticleConfig, parse_count};
pub use crate::render::{DEFAULT_PARTICLES_INTEGRITY, DEFAULT_PARTICLES_SCRIPT, DEFAULT_TITLE, PageOptions};
pub use crate::style::{BOLD_FILE, FontSet, MONO_FILE, Palette, REGULAR_FILE};
use crate::transform::{Emojifier, HtmlEscape, Markdown, MarkdownRenderer, Sanitizer, Twemoji};
pub use ogcard_request::ParsedRequest;
use upon::{Engine, Template};

/// Assembles card documents from parsed requests.
///
/// Holds the compiled page template, the shared font payloads and the three
/// text collaborators. Construct once at startup and reuse; assembly itself
/// takes `&self` and keeps no per-request state.
pub struct Assembler {
    engine: Engine<'static>,
    template: Template<'static>,
    fonts: FontSet,
    page: PageOptions,
    sanitizer: Box<dyn Sanitizer>,
    markdown: Box<dyn MarkdownRenderer>,
    emojifier: Box<dyn Emojifier>,
}
impl Assembler {
    /// Compiles the embedded template and wires the default collaborators:
    /// [`HtmlEscape`], [`Markdown`] and [`Twemoji`].
    pub fn new(fonts: FontSet) -> Result<Self> {
        let (engine, template) = render::compile()?;
        Ok(Self {
            engine,
            template,
            fonts,
            page: PageOptions::default(),
            sanitizer: Box::new(HtmlEscape),
            markdown: Box::new(Markdown::default()),
            emojifier: Box::new(Twemoji::default()),
        })
    }

    pub fn with_page(mut self, page: PageOptions) -> Self {
        self.page = page;
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    pub fn with_markdown(mut self, markdown: impl MarkdownRenderer + 'static) -> Self {
        self.markdown = Box::new(markdown);
        self
    }

    pub fn with_emojifier(mut self, emojifier: impl Emojifier + 'static) -> Self {
        self.emojifier = Box::new(emojifier);
        self
    }
}
