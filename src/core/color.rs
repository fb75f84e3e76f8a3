//! Color values as they appear in the configuration.
//!
//! Colors are stored and transported in their textual `#rrggbb` form;
//! this type is the parsed working representation at the form boundary.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{0}`")]
pub struct ParseColorError(String);

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The textual form used in stored configuration, e.g. `#ffaa00`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_gdk_rgba(&self) -> gdk4::RGBA {
        gdk4::RGBA::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        )
    }

    pub fn from_gdk_rgba(rgba: &gdk4::RGBA) -> Self {
        Self {
            r: (rgba.red() * 255.0).round() as u8,
            g: (rgba.green() * 255.0).round() as u8,
            b: (rgba.blue() * 255.0).round() as u8,
        }
    }

    /// Apply to a Cairo context as an opaque source color.
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgb(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        );
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb`, `#rgb`, and the basic color names legacy
    /// configurations used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError(s.to_string()));
        }
        named_color(trimmed).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        6 => {
            let value = u32::from_str_radix(hex, 16).ok()?;
            Some(Color::rgb(
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            ))
        }
        3 => {
            let value = u16::from_str_radix(hex, 16).ok()?;
            let (r, g, b) = (
                ((value >> 8) & 0xf) as u8,
                ((value >> 4) & 0xf) as u8,
                (value & 0xf) as u8,
            );
            // Expand each nibble: #f80 → #ff8800
            Some(Color::rgb(r * 0x11, g * 0x11, b * 0x11))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::rgb(0x00, 0x00, 0x00),
        "white" => Color::rgb(0xff, 0xff, 0xff),
        "red" => Color::rgb(0xff, 0x00, 0x00),
        "lime" => Color::rgb(0x00, 0xff, 0x00),
        "green" => Color::rgb(0x00, 0x80, 0x00),
        "blue" => Color::rgb(0x00, 0x00, 0xff),
        "yellow" => Color::rgb(0xff, 0xff, 0x00),
        "cyan" | "aqua" => Color::rgb(0x00, 0xff, 0xff),
        "magenta" | "fuchsia" => Color::rgb(0xff, 0x00, 0xff),
        "gray" | "grey" => Color::rgb(0x80, 0x80, 0x80),
        "silver" => Color::rgb(0xc0, 0xc0, 0xc0),
        "maroon" => Color::rgb(0x80, 0x00, 0x00),
        "olive" => Color::rgb(0x80, 0x80, 0x00),
        "navy" => Color::rgb(0x00, 0x00, 0x80),
        "teal" => Color::rgb(0x00, 0x80, 0x80),
        "purple" => Color::rgb(0x80, 0x00, 0x80),
        "orange" => Color::rgb(0xff, 0xa5, 0x00),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!("#FFAA00".parse::<Color>().unwrap(), Color::rgb(0xff, 0xaa, 0x00));
        assert_eq!("#3232ff".parse::<Color>().unwrap(), Color::rgb(0x32, 0x32, 0xff));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!("#f80".parse::<Color>().unwrap(), Color::rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::rgb(0xff, 0x00, 0x00));
        assert_eq!("Grey".parse::<Color>().unwrap(), Color::rgb(0x80, 0x80, 0x80));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("mauve-ish".parse::<Color>().is_err());
    }

    #[test]
    fn test_hex_round_trip_is_lowercase() {
        let color: Color = "#FFAA00".parse().unwrap();
        assert_eq!(color.to_hex(), "#ffaa00");
        assert_eq!(color.to_hex().parse::<Color>().unwrap(), color);
    }
}
