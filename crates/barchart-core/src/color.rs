// File: crates/barchart-core/src/color.rs
// Summary: RGBA color value used for the chart background, strokes and text.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// 8-bit RGBA color, opaque unless stated otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::from_rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidColor(format!("'{hex}' is not a hex color"));
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        // from_str_radix alone would take a leading '+' in each slice
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                // #abc expands to #aabbcc
                let nib = |i: usize| byte(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::rgb(byte(&digits[0..2])?, byte(&digits[2..4])?, byte(&digits[4..6])?)),
            8 => Ok(Self::from_rgba(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
                byte(&digits[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    fn from_keyword(name: &str) -> Option<Self> {
        let c = match name.to_ascii_lowercase().as_str() {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "transparent" => Self::TRANSPARENT,
            "red" => Self::rgb(0xff, 0x00, 0x00),
            "green" => Self::rgb(0x00, 0x80, 0x00),
            "blue" => Self::rgb(0x00, 0x00, 0xff),
            "yellow" => Self::rgb(0xff, 0xff, 0x00),
            "gray" | "grey" => Self::rgb(0x80, 0x80, 0x80),
            "silver" => Self::rgb(0xc0, 0xc0, 0xc0),
            "maroon" => Self::rgb(0x80, 0x00, 0x00),
            "purple" => Self::rgb(0x80, 0x00, 0x80),
            "fuchsia" => Self::rgb(0xff, 0x00, 0xff),
            "lime" => Self::rgb(0x00, 0xff, 0x00),
            "olive" => Self::rgb(0x80, 0x80, 0x00),
            "navy" => Self::rgb(0x00, 0x00, 0x80),
            "teal" => Self::rgb(0x00, 0x80, 0x80),
            "aqua" => Self::rgb(0x00, 0xff, 0xff),
            "orange" => Self::rgb(0xff, 0xa5, 0x00),
            _ => return None,
        };
        Some(c)
    }
}

impl Default for Color {
    fn default() -> Self { Self::WHITE }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        Self::from_keyword(s).ok_or_else(|| ChartError::InvalidColor(format!("unknown color '{s}'")))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords_and_hex() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("WHITE".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#ffa500".parse::<Color>().unwrap(), "orange".parse().unwrap());
        assert_eq!(
            "#11223380".parse::<Color>().unwrap(),
            Color::from_rgba(0x11, 0x22, 0x33, 0x80)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("chartreuse-ish".parse::<Color>(), Err(ChartError::InvalidColor(_))));
        assert!("#12".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
        assert!("##fff".parse::<Color>().is_err());
    }

    #[test]
    fn sign_characters_are_not_hex_digits() {
        for bad in ["#+f+f+f", "#+ff+ff+ff", "#+f+f+f+f", "#-f-f-f", "#ff +f00"] {
            assert!(matches!(bad.parse::<Color>(), Err(ChartError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let c = Color::from_rgba(1, 2, 3, 4);
        assert_eq!(c.to_string(), "#01020304");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }
}
