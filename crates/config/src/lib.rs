//! Configuration loading and validation.
//!
//! Values are layered with [`figment`], lowest precedence first:
//!
//! 1. Built-in defaults ([`Config::default`]).
//! 2. A configuration file: the explicit path if given, otherwise
//!    `config.toml` in the platform configuration directory. The format is
//!    chosen by extension (`.toml`, `.yaml`/`.yml`, `.json`).
//! 3. Environment variables prefixed with `OGCARD_`, nested with `__`
//!    (e.g. `OGCARD_PAGE__TITLE`, `OGCARD_FONTS__DIRECTORY`).

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use ogcard_render::transform::{DEFAULT_EMOJI_BASE_URL, Twemoji};
use ogcard_render::{DEFAULT_PARTICLES_INTEGRITY, DEFAULT_PARTICLES_SCRIPT, DEFAULT_TITLE, PageOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "OGCARD_";
pub const DEFAULT_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fonts: FontsConfig,
    pub page: PageConfig,
    pub emoji: EmojiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Directory holding the three WOFF2 font files. When unset, cards are
    /// rendered with empty font payloads.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub particles_script: String,
    /// Empty string omits the `integrity` attribute.
    pub particles_integrity: String,
}
impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            particles_script: DEFAULT_PARTICLES_SCRIPT.to_string(),
            particles_integrity: DEFAULT_PARTICLES_INTEGRITY.to_string(),
        }
    }
}
impl PageConfig {
    pub fn options(&self) -> PageOptions {
        PageOptions {
            title: self.title.clone(),
            particles_script: self.particles_script.trim().to_string(),
            particles_integrity: Some(self.particles_integrity.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    pub base_url: String,
    /// `svg` or `png`.
    pub extension: String,
}
impl Default for EmojiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_EMOJI_BASE_URL.to_string(), extension: "svg".to_string() }
    }
}
impl EmojiConfig {
    pub fn twemoji(&self) -> Twemoji {
        Twemoji::new(&self.base_url, &self.extension)
    }
}

impl Config {
    /// Loads configuration from defaults, the config file and the environment.
    ///
    /// An explicit `path` must exist; the platform default is skipped silently
    /// when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path
            && !path.is_file()
        {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        let file = path.map(Path::to_path_buf).or_else(Self::default_path);
        Self::from_figment(&Self::figment(file.as_deref()))
    }

    /// Builds the layered provider without extracting it.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = file {
            tracing::debug!(path = %file.display(), "Merging configuration file");
            figment = match file.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => figment.merge(Yaml::file(file)),
                Some("json") => figment.merge(Json::file(file)),
                _ => figment.merge(Toml::file(file)),
            };
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts and validates a configuration from any figment.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    /// `config.toml` inside the platform configuration directory, if one
    /// can be determined for the current user.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ogcard").map(|dirs| dirs.config_dir().join(DEFAULT_FILE_NAME))
    }

    fn validate(&self) -> Result<()> {
        if !matches!(self.emoji.extension.trim().trim_matches('.'), "svg" | "png") {
            exn::bail!(ErrorKind::InvalidValue { key: "emoji.extension", value: self.emoji.extension.clone() });
        }
        if self.page.particles_script.trim().is_empty() {
            exn::bail!(ErrorKind::InvalidValue { key: "page.particles_script", value: String::new() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let config = Config::from_figment(&Config::figment(None)).unwrap();
            assert_eq!(config, Config::default());
            assert_eq!(config.page.title, "Generated Image");
            assert_eq!(config.emoji.extension, "svg");
            assert!(config.fonts.directory.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "ogcard.toml",
                r#"
                [page]
                title = "Cards"

                [fonts]
                directory = "/srv/fonts"
                "#,
            )?;
            let config = Config::load(Some(Path::new("ogcard.toml"))).unwrap();
            assert_eq!(config.page.title, "Cards");
            assert_eq!(config.page.particles_script, DEFAULT_PARTICLES_SCRIPT);
            assert_eq!(config.fonts.directory, Some(PathBuf::from("/srv/fonts")));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("ogcard.yaml", "emoji:\n  extension: svg\n")?;
            jail.set_env("OGCARD_EMOJI__EXTENSION", "png");
            jail.set_env("OGCARD_PAGE__TITLE", "From Env");
            let config = Config::load(Some(Path::new("ogcard.yaml"))).unwrap();
            assert_eq!(config.emoji.extension, "png");
            assert_eq!(config.page.title, "From Env");
            Ok(())
        });
    }

    #[test]
    fn test_json_file() {
        Jail::expect_with(|jail| {
            jail.create_file("ogcard.json", r#"{"page": {"particles_integrity": ""}}"#)?;
            let config = Config::from_figment(&Config::figment(Some(Path::new("ogcard.json")))).unwrap();
            assert_eq!(config.page.options().particles_integrity, None);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(_)));
    }

    #[rstest]
    #[case("gif")]
    #[case("jpeg")]
    fn test_invalid_emoji_extension(#[case] extension: &str) {
        Jail::expect_with(|jail| {
            jail.set_env("OGCARD_EMOJI__EXTENSION", extension);
            let err = Config::from_figment(&Config::figment(None)).unwrap_err();
            assert!(matches!(&*err, ErrorKind::InvalidValue { key: "emoji.extension", .. }));
            Ok(())
        });
    }

    #[test]
    fn test_empty_particles_script_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("OGCARD_PAGE__PARTICLES_SCRIPT", " ");
            let err = Config::from_figment(&Config::figment(None)).unwrap_err();
            assert!(matches!(&*err, ErrorKind::InvalidValue { key: "page.particles_script", .. }));
            Ok(())
        });
    }

    #[test]
    fn test_page_options_conversion() {
        let options = PageConfig::default().options();
        assert_eq!(options, PageOptions::default());
    }
}
