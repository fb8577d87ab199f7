use ogcard_request::Theme;

/// Colours derived from a [`Theme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Page background, also handed to the particle engine.
    pub background: &'static str,
    /// Heading text colour.
    pub foreground: &'static str,
    /// Particle and link colour.
    pub particle: &'static str,
}
impl Palette {
    pub const DARK: Self = Self { background: "#111", foreground: "#fff", particle: "#707070" };
    pub const LIGHT: Self = Self { background: "#fff", foreground: "#111", particle: "#a0a0a0" };
}
impl From<Theme> for Palette {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Theme::Dark, "#111", "#fff", "#707070")]
    #[case(Theme::Light, "#fff", "#111", "#a0a0a0")]
    fn test_palette_for_theme(
        #[case] theme: Theme,
        #[case] background: &str,
        #[case] foreground: &str,
        #[case] particle: &str,
    ) {
        let palette = Palette::from(theme);
        assert_eq!(palette.background, background);
        assert_eq!(palette.foreground, foreground);
        assert_eq!(palette.particle, particle);
    }
}
