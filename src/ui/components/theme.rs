//! # Theme Configuration
//!
//! This module provides the color palettes and hex color handling for the
//! fitness tracker app. All visual styling should go through these constants
//! and helpers to keep the look consistent.
//!
//! ## Color Model:
//! Preferences are stored as 6-digit hex strings (no alpha). Parsing returns
//! a typed error so a malformed stored value can never crash a render pass;
//! UI code goes through `color_or` which logs and falls back instead.

use egui::Color32;
use thiserror::Error;

/// Accent color used for headings, labels, and call-to-action buttons.
pub const ACCENT: Color32 = Color32::from_rgb(0xC3, 0xFF, 0x61);

/// Text color on top of accent-filled buttons (matches the default background).
pub const ON_ACCENT: Color32 = Color32::from_rgb(0x35, 0x41, 0x3D);

/// Track color behind the progress arc (muted gray over any background).
pub const RING_TRACK: Color32 = Color32::from_rgba_premultiplied(110, 110, 110, 90);

/// A palette entry: display name plus the hex string stored in settings.
pub type PaletteColor = (&'static str, &'static str);

/// Background color choices offered on the settings screen.
pub const BACKGROUND_PALETTE: [PaletteColor; 4] = [
    ("Dark Green", "35413D"),
    ("Dark Blue", "3A4354"),
    ("Dark Purple", "4E4254"),
    ("Dark Red", "4B3B3B"),
];

/// Metric color choices shared by the calorie, step, and exercise pickers.
pub const METRIC_PALETTE: [PaletteColor; 7] = [
    ("Red Orange", "FF5326"),
    ("Purple", "A72AFF"),
    ("Neon Blue", "21FFE6"),
    ("Hot Pink", "FF00D6"),
    ("Orange", "FFA900"),
    ("Neon Green", "26FF00"),
    ("Yellow", "FBFF00"),
];

/// Why a stored color string could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit in '{0}'")]
    BadDigit(String),
}

/// Parse a 6-digit hex string (leading '#' allowed) into a color.
pub fn parse_hex_color(hex: &str) -> Result<Color32, ColorParseError> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Err(ColorParseError::BadLength(digits.len()));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| ColorParseError::BadDigit(digits.to_string()))?;
    Ok(Color32::from_rgb(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

/// Parse a hex string, falling back to `fallback` on malformed input.
pub fn color_or(hex: &str, fallback: Color32) -> Color32 {
    match parse_hex_color(hex) {
        Ok(color) => color,
        Err(e) => {
            log::warn!("Ignoring malformed color '{}': {}", hex, e);
            fallback
        }
    }
}

/// Display name for a palette hex value, or the hex itself if it is not in
/// the palette (e.g. a value written by an older build).
pub fn palette_name<'a>(hex: &'a str, palette: &[PaletteColor]) -> &'a str {
    palette
        .iter()
        .find(|(_, h)| *h == hex)
        .map(|(name, _)| *name)
        .unwrap_or(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("FF5326"),
            Ok(Color32::from_rgb(0xFF, 0x53, 0x26))
        );
        assert_eq!(
            parse_hex_color("#35413D"),
            Ok(Color32::from_rgb(0x35, 0x41, 0x3D))
        );
        assert_eq!(parse_hex_color("000000"), Ok(Color32::from_rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_color_rejects_bad_input() {
        assert_eq!(parse_hex_color("FFF"), Err(ColorParseError::BadLength(3)));
        assert_eq!(parse_hex_color(""), Err(ColorParseError::BadLength(0)));
        assert_eq!(
            parse_hex_color("GGGGGG"),
            Err(ColorParseError::BadDigit("GGGGGG".to_string()))
        );
    }

    #[test]
    fn test_color_or_falls_back() {
        assert_eq!(color_or("not-a-color", ACCENT), ACCENT);
        assert_eq!(color_or("21FFE6", ACCENT), Color32::from_rgb(0x21, 0xFF, 0xE6));
    }

    #[test]
    fn test_palette_entries_are_well_formed() {
        for (name, hex) in BACKGROUND_PALETTE.iter().chain(METRIC_PALETTE.iter()).copied() {
            assert!(
                parse_hex_color(hex).is_ok(),
                "palette entry '{}' has bad hex '{}'",
                name,
                hex
            );
        }
    }

    #[test]
    fn test_palette_name() {
        assert_eq!(palette_name("A72AFF", &METRIC_PALETTE), "Purple");
        assert_eq!(palette_name("123456", &METRIC_PALETTE), "123456");
    }
}
