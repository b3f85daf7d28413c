//! Hex color parsing and formatting for theme files.
//!
//! Theme files write colors as `#rrggbb` or `#rrggbbaa` strings, plus the
//! keyword `transparent` for fully transparent fills (the built-in theme
//! uses it for labels and scrollbar tracks).

use peniko::Color;

use crate::error::ThemeError;

/// Parse a theme-file color value.
///
/// Accepts `#rrggbb`, `#rrggbbaa` (leading `#` optional) and the keyword
/// `transparent`.
pub fn parse_color(value: &str) -> Result<Color, ThemeError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("transparent") {
        return Ok(Color::TRANSPARENT);
    }

    let hex = value.strip_prefix('#').unwrap_or(value);
    // Length checks below count bytes; multi-byte characters must fail
    // as invalid colors, not as out-of-boundary slices.
    if !hex.is_ascii() {
        return Err(ThemeError::InvalidColor {
            value: value.to_string(),
        });
    }
    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ThemeError::InvalidColor {
            value: value.to_string(),
        })
    };

    match hex.len() {
        6 => Ok(Color::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Ok(Color::from_rgba8(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            byte(6..8)?,
        )),
        _ => Err(ThemeError::InvalidColor {
            value: value.to_string(),
        }),
    }
}

/// Format a color the way theme files write it.
///
/// Opaque colors become `#rrggbb`; anything with alpha gets the 8-digit
/// form.
pub fn format_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(
            parse_color("#00D1D1").unwrap(),
            Color::from_rgb8(0x00, 0xd1, 0xd1)
        );
        assert_eq!(
            parse_color("ff000080").unwrap(),
            Color::from_rgba8(0xff, 0x00, 0x00, 0x80)
        );
    }

    #[test]
    fn parses_transparent_keyword() {
        assert_eq!(parse_color("transparent").unwrap(), Color::TRANSPARENT);
        assert_eq!(parse_color(" Transparent ").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(parse_color("#123").is_err());
        assert!(parse_color("#zzzzzz").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn rejects_multibyte_characters_without_panicking() {
        // "a€ab" is 6 bytes but not 6 ASCII hex digits.
        assert!(parse_color("a\u{20ac}ab").is_err());
        assert!(parse_color("#ééé").is_err());
    }

    #[test]
    fn formats_round_trip() {
        for value in ["#00d1d1", "#a0d8e0", "#00404a80"] {
            let color = parse_color(value).unwrap();
            assert_eq!(format_color(color), value);
        }
    }
}
