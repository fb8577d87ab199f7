//! Configuration object handed to the client-side particle engine.
//!
//! Serializes to the options shape `tsParticles.load` expects; field order
//! is preserved in the emitted JSON.

use crate::style::Palette;
use serde::Serialize;

/// Particle count used when the raw value has no leading digits.
pub const DEFAULT_COUNT: u32 = 1200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticleConfig {
    particles: Particles,
    background: Background,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Particles {
    number: Value<u32>,
    links: Links,
    #[serde(rename = "move")]
    movement: Toggle,
    size: Size,
    color: Value<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Value<T> {
    value: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Links {
    enable: bool,
    color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Toggle {
    enable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Size {
    value: u32,
    random: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Background {
    color: &'static str,
}

impl ParticleConfig {
    /// Linked, stationary particles of size 3 (randomized) in the palette's
    /// particle colour over its background.
    pub fn new(count: u32, palette: &Palette) -> Self {
        Self {
            particles: Particles {
                number: Value { value: count },
                links: Links { enable: true, color: palette.particle },
                movement: Toggle { enable: false },
                size: Size { value: 3, random: true },
                color: Value { value: palette.particle },
            },
            background: Background { color: palette.background },
        }
    }
}

/// Leniently parses a raw particle count.
///
/// Leading whitespace and an optional `+` are skipped, then the longest run
/// of ASCII digits is used (`"500px"` is 500). No digits, or a value that
/// overflows, yields [`DEFAULT_COUNT`]. The count is cosmetic, so this never
/// fails.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
    match trimmed[..end].parse() {
        Ok(count) => count,
        Err(_) => {
            tracing::debug!(raw, fallback = DEFAULT_COUNT, "Unusable particle count; using default");
            DEFAULT_COUNT
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", 3)]
    #[case("1200", 1200)]
    #[case("0", 0)]
    #[case("  42", 42)]
    #[case("+7", 7)]
    #[case("500px", 500)]
    #[case("12.9", 12)]
    #[case("abc", DEFAULT_COUNT)]
    #[case("", DEFAULT_COUNT)]
    #[case("-5", DEFAULT_COUNT)]
    #[case("99999999999999999999", DEFAULT_COUNT)]
    fn test_parse_count(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_count(raw), expected);
    }

    #[test]
    fn test_serializes_dark_config() {
        let config = ParticleConfig::new(3, &Palette::DARK);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            concat!(
                r##"{"particles":{"number":{"value":3},"links":{"enable":true,"color":"#707070"},"##,
                r##""move":{"enable":false},"size":{"value":3,"random":true},"color":{"value":"#707070"}},"##,
                r##""background":{"color":"#111"}}"##,
            )
        );
    }

    #[test]
    fn test_light_config_uses_light_colours() {
        let config = ParticleConfig::new(10, &Palette::LIGHT);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["particles"]["color"]["value"], "#a0a0a0");
        assert_eq!(json["particles"]["links"]["color"], "#a0a0a0");
        assert_eq!(json["background"]["color"], "#fff");
        assert_eq!(json["particles"]["number"]["value"], 10);
    }
}
