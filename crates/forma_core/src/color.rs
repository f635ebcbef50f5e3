//! Color parsing and formatting utilities.
//!
//! Property bags carry colors as CSS-style strings (`#FF9500`,
//! `rgb(255, 149, 0)`, `transparent`). This module parses those strings
//! into an engine-owned [`Rgba`] and formats them back, so the property
//! editor can validate swatch/hex input pairs without depending on any
//! rendering stack.

use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Formats as an uppercase `#RRGGBB` hex string (alpha is dropped).
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

/// Returns true for the literal `transparent` keyword.
///
/// The background-color control treats this value specially (it renders a
/// clear/color toggle instead of a swatch).
pub fn is_transparent(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("transparent")
}

/// Parse a color string into an [`Rgba`].
///
/// Supported formats:
/// - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (leading `#` optional)
/// - Functional: `rgb(r, g, b)`, `rgba(r, g, b, a)`, `hsl(h, s%, l%)`
/// - Keywords: `transparent`, `black`, `white`
pub fn parse_color(value: &str) -> Option<Rgba> {
    let value = value.trim();

    if is_transparent(value) {
        return Some(Rgba::TRANSPARENT);
    }

    if let Some(rgba) = parse_hex_color(value) {
        return Some(rgba);
    }

    if value.starts_with("rgb") {
        return parse_rgb_color(value);
    }

    if value.starts_with("hsl") {
        return parse_hsl_color(value);
    }

    match value.to_lowercase().as_str() {
        "black" => Some(Rgba::new(0.0, 0.0, 0.0, 1.0)),
        "white" => Some(Rgba::new(1.0, 1.0, 1.0, 1.0)),
        _ => None,
    }
}

fn parse_hex_color(value: &str) -> Option<Rgba> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let component = |pair: &str| u8::from_str_radix(pair, 16).ok().map(|v| v as f32 / 255.0);
    let nibble = |ch: &str| {
        u8::from_str_radix(ch, 16)
            .ok()
            .map(|v| (v * 17) as f32 / 255.0)
    };

    match hex.len() {
        3 => Some(Rgba::new(
            nibble(&hex[0..1])?,
            nibble(&hex[1..2])?,
            nibble(&hex[2..3])?,
            1.0,
        )),
        4 => Some(Rgba::new(
            nibble(&hex[0..1])?,
            nibble(&hex[1..2])?,
            nibble(&hex[2..3])?,
            nibble(&hex[3..4])?,
        )),
        6 => Some(Rgba::new(
            component(&hex[0..2])?,
            component(&hex[2..4])?,
            component(&hex[4..6])?,
            1.0,
        )),
        8 => Some(Rgba::new(
            component(&hex[0..2])?,
            component(&hex[2..4])?,
            component(&hex[4..6])?,
            component(&hex[6..8])?,
        )),
        _ => None,
    }
}

fn parse_rgb_color(value: &str) -> Option<Rgba> {
    let args = functional_args(value)?;
    if args.len() < 3 {
        return None;
    }
    let channel = |s: &str| s.trim().parse::<f32>().ok().map(|v| v / 255.0);
    let alpha = if args.len() > 3 {
        args[3].trim().parse::<f32>().ok()?
    } else {
        1.0
    };
    Some(Rgba::new(
        channel(&args[0])?,
        channel(&args[1])?,
        channel(&args[2])?,
        alpha,
    ))
}

fn parse_hsl_color(value: &str) -> Option<Rgba> {
    let args = functional_args(value)?;
    if args.len() < 3 {
        return None;
    }
    let h = args[0].trim().parse::<f32>().ok()?;
    let s = args[1].trim().trim_end_matches('%').parse::<f32>().ok()? / 100.0;
    let l = args[2].trim().trim_end_matches('%').parse::<f32>().ok()? / 100.0;
    let a = if args.len() > 3 {
        args[3].trim().parse::<f32>().ok()?
    } else {
        1.0
    };

    let rgb = Srgb::from_color(Hsl::new(h, s, l));
    Some(Rgba::new(rgb.red, rgb.green, rgb.blue, a))
}

fn functional_args(value: &str) -> Option<Vec<String>> {
    let open = value.find('(')?;
    let close = value.rfind(')')?;
    Some(
        value[open + 1..close]
            .split(',')
            .map(|s| s.to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        let c = parse_color("#FF9500").unwrap();
        assert_eq!(c.to_hex(), "#FF9500");
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn parses_short_hex_without_prefix() {
        let c = parse_color("fff").unwrap();
        assert_eq!(c.to_hex(), "#FFFFFF");
    }

    #[test]
    fn parses_rgb_functional() {
        let c = parse_color("rgb(255, 149, 0)").unwrap();
        assert_eq!(c.to_hex(), "#FF9500");
    }

    #[test]
    fn parses_hsl_functional() {
        let c = parse_color("hsl(0, 100%, 50%)").unwrap();
        assert_eq!(c.to_hex(), "#FF0000");
    }

    #[test]
    fn transparent_keyword() {
        assert!(is_transparent("transparent"));
        assert_eq!(parse_color("transparent"), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_color("#GGHHII"), None);
        assert_eq!(parse_color("not-a-color"), None);
    }
}
