//! Color value type
//!
//! A [`Color`] is four 8-bit channels. Everything that compares, hashes or
//! indexes colors goes through the packed `0xAARRGGBB` form, so two colors
//! built in different ways are equal whenever their channel bytes match.

pub mod compare;
mod hsl;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

pub use hsl::Hsl;

/// An ARGB color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// The all-zero color (transparent black)
    pub const EMPTY: Color = Color::from_argb(0);

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    /// Create a color from individual channels
    #[must_use]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create a fully opaque color
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Unpack a `0xAARRGGBB` value
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into `0xAARRGGBB`
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Pack red, green and blue into `0x00RRGGBB`, ignoring alpha
    #[must_use]
    pub const fn to_rgb(self) -> u32 {
        self.to_argb() & 0x00FF_FFFF
    }

    /// Same color with a different alpha channel
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// True when red, green and blue match, whatever the alpha
    #[must_use]
    pub const fn eq_rgb(self, other: Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// HSL hue in degrees (`0.0..360.0`); greys report `0.0`
    #[must_use]
    pub fn hue(self) -> f64 {
        Hsl::from(self).h
    }

    /// HSL saturation (`0.0..=1.0`)
    #[must_use]
    pub fn saturation(self) -> f64 {
        Hsl::from(self).s
    }

    /// HSL lightness (`0.0..=1.0`)
    #[must_use]
    pub fn brightness(self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        (f64::from(max) + f64::from(min)) / (2.0 * 255.0)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_argb()
    }
}

impl From<[u8; 4]> for Color {
    fn from([a, r, g, b]: [u8; 4]) -> Self {
        Color::new(a, r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::from_rgb(r, g, b)
    }
}

/// Formats as `#AARRGGBB`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

/// Parses `RRGGBB` (opaque) or `AARRGGBB`, with an optional leading `#`
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_string()))?;
        match hex.len() {
            6 => Ok(Color::from_argb(0xFF00_0000 | value)),
            8 => Ok(Color::from_argb(value)),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
