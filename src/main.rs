//! ogcard - render a card request URL into a self-contained HTML document.
//!
//! The HTML is written to stdout (or `--output`); logs go to stderr and are
//! filtered with `RUST_LOG`.

mod error;

use crate::error::{ErrorKind, Result};
use clap::Parser;
use exn::ResultExt;
use ogcard_config::{Config, FontsConfig};
use ogcard_render::{Assembler, FontSet};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Render a card request URL into an HTML document.
#[derive(Parser, Debug)]
#[command(name = "ogcard", version, long_about = None)]
struct Args {
    /// Request target, e.g. `/Hello%20World.png?theme=dark&md=1`.
    url: String,
    /// Configuration file (TOML, YAML or JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let assembler = Assembler::new(load_fonts(&config.fonts)?)
        .or_raise(|| ErrorKind::Render)?
        .with_page(config.page.options())
        .with_emojifier(config.emoji.twemoji());

    let request = ogcard_request::parse(&args.url).or_raise(|| ErrorKind::Request)?;
    tracing::info!(file_type = %request.file_type, mime = request.file_type.mime_type(), "Assembling card");
    let html = assembler.assemble(&request).or_raise(|| ErrorKind::Render)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html).or_raise(|| ErrorKind::Io)?;
            tracing::info!(path = %path.display(), bytes = html.len(), "Card written");
        },
        None => std::io::stdout().lock().write_all(html.as_bytes()).or_raise(|| ErrorKind::Io)?,
    }
    Ok(())
}

/// Fonts are loaded once, before any request is handled.
fn load_fonts(config: &FontsConfig) -> Result<FontSet> {
    match &config.directory {
        Some(directory) => FontSet::load(directory).or_raise(|| ErrorKind::Fonts),
        None => {
            tracing::warn!("No font directory configured; cards will use fallback fonts");
            Ok(FontSet::default())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["ogcard", "/Hello.png"], None, None)]
    #[case(&["ogcard", "-c", "card.toml", "/Hello.png"], Some("card.toml"), None)]
    #[case(&["ogcard", "/Hello.png", "--output", "out.html"], None, Some("out.html"))]
    fn test_args(#[case] argv: &[&str], #[case] config: Option<&str>, #[case] output: Option<&str>) {
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.url, "/Hello.png");
        assert_eq!(args.config, config.map(PathBuf::from));
        assert_eq!(args.output, output.map(PathBuf::from));
    }

    #[test]
    fn test_args_require_url() {
        assert!(Args::try_parse_from(["ogcard"]).is_err());
    }

    #[test]
    fn test_unconfigured_fonts_are_empty() {
        let fonts = load_fonts(&FontsConfig::default()).unwrap();
        assert!(fonts.regular().is_empty());
    }

    #[test]
    fn test_missing_font_directory_fails() {
        let config = FontsConfig { directory: Some(PathBuf::from("/definitely/not/fonts")) };
        let err = load_fonts(&config).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Fonts));
    }
}
