//! RGB color value type with string parsing and formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An 8-bit-per-channel RGB color.
///
/// Colors travel as strings in persisted data and user input, either as
/// 6-digit hex (`#1E90FF`) or functional notation (`rgb(30, 144, 255)`).
/// Both forms round-trip losslessly through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// White, used as the fallback when extraction or parsing yields nothing.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without the leading `#`.
    ///
    /// Matching is case-insensitive. Shorthand 3-digit hex is rejected.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::invalid_hex(s));
        }
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::invalid_hex(s))?;
        Ok(Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    /// Parse functional notation: `rgb(r, g, b)` with components 0-255.
    pub fn from_rgb_string(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        let inner = trimmed
            .get(..4)
            .filter(|prefix| prefix.eq_ignore_ascii_case("rgb("))
            .and_then(|_| trimmed.get(4..))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::invalid_rgb(s))?;

        let mut channels = inner.split(',').map(|part| part.trim().parse::<u8>());
        match (channels.next(), channels.next(), channels.next(), channels.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Self::new(r, g, b)),
            _ => Err(ColorParseError::invalid_rgb(s)),
        }
    }

    /// Format as uppercase 6-digit hex with a leading `#`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Format as functional notation: `rgb(r, g, b)`.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accept either hex or `rgb(...)` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let is_functional = trimmed
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb("));
        if is_functional {
            Self::from_rgb_string(trimmed)
        } else {
            Self::from_hex(trimmed)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing a color string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Not a 6-digit hex color
    #[error("Invalid hex color: {value:?}")]
    InvalidHex {
        /// The rejected input
        value: String,
    },

    /// Not a well-formed rgb(r, g, b) string
    #[error("Invalid rgb() color: {value:?}")]
    InvalidRgb {
        /// The rejected input
        value: String,
    },
}

impl ColorParseError {
    /// Create an invalid hex error.
    pub fn invalid_hex(value: impl Into<String>) -> Self {
        Self::InvalidHex {
            value: value.into(),
        }
    }

    /// Create an invalid rgb() error.
    pub fn invalid_rgb(value: impl Into<String>) -> Self {
        Self::InvalidRgb {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_hash() {
        let color = Rgb::from_hex("#1E90FF").unwrap();
        assert_eq!(color, Rgb::new(30, 144, 255));
    }

    #[test]
    fn test_parse_hex_without_hash() {
        let color = Rgb::from_hex("1e90ff").unwrap();
        assert_eq!(color, Rgb::new(30, 144, 255));
    }

    #[test]
    fn test_reject_short_hex() {
        assert!(Rgb::from_hex("#FFF").is_err());
    }

    #[test]
    fn test_reject_garbage_hex() {
        assert!(Rgb::from_hex("#GGHHII").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_parse_rgb_string() {
        let color = Rgb::from_rgb_string("rgb(30, 144, 255)").unwrap();
        assert_eq!(color, Rgb::new(30, 144, 255));
    }

    #[test]
    fn test_parse_rgb_string_tight_spacing() {
        let color = Rgb::from_rgb_string("rgb(0,0,0)").unwrap();
        assert_eq!(color, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_reject_rgb_out_of_range() {
        assert!(Rgb::from_rgb_string("rgb(300, 0, 0)").is_err());
        assert!(Rgb::from_rgb_string("rgb(-1, 0, 0)").is_err());
    }

    #[test]
    fn test_reject_rgb_wrong_arity() {
        assert!(Rgb::from_rgb_string("rgb(1, 2)").is_err());
        assert!(Rgb::from_rgb_string("rgb(1, 2, 3, 4)").is_err());
    }

    #[test]
    fn test_from_str_dispatches_both_forms() {
        assert_eq!("#FF0000".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(
            "RGB(255, 0, 0)".parse::<Rgb>().unwrap(),
            Rgb::new(255, 0, 0)
        );
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb::new(18, 52, 86);
        assert_eq!(color.to_hex(), "#123456");
        assert_eq!(color.to_hex().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_rgb_string_round_trip() {
        let color = Rgb::new(255, 255, 255);
        assert_eq!(color.to_rgb_string(), "rgb(255, 255, 255)");
        assert_eq!(color.to_rgb_string().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(30, 144, 255)).unwrap();
        assert_eq!(json, "\"#1E90FF\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(30, 144, 255));
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Rgb>("\"not-a-color\"").is_err());
    }
}
