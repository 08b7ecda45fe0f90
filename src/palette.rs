//! Folder color values
//!
//! Folders carry their color as a hex string so the value survives
//! serialization unchanged. [`ColorHex`] validates and canonicalizes the
//! string once at the boundary; everything downstream can rely on the
//! `#RRGGBB` form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A folder color in canonical `#RRGGBB` form (uppercase hex digits).
///
/// Construct via [`FromStr`] for user-supplied strings or
/// [`ColorHex::from_rgb`] for known channel values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorHex(String);

impl ColorHex {
    /// Build a color from its channel values.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        ColorHex(format!("#{:02X}{:02X}{:02X}", red, green, blue))
    }

    /// The canonical `#RRGGBB` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the channel values for a rendering layer.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // The canonical form is validated on construction, so these
        // slices are always two hex digits.
        let channel = |range| u8::from_str_radix(&self.0[range], 16).unwrap_or(0);
        (channel(1..3), channel(3..5), channel(5..7))
    }
}

impl FromStr for ColorHex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').ok_or_else(|| {
            format!(
                "Invalid color '{}'. Expected format: #RRGGBB (e.g., '#8B7FD4')",
                trimmed
            )
        })?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!(
                "Invalid color '{}'. Expected format: #RRGGBB (e.g., '#8B7FD4')",
                trimmed
            ));
        }
        Ok(ColorHex(format!("#{}", digits.to_ascii_uppercase())))
    }
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Serialized as the plain hex string, re-validated on the way back in.

impl Serialize for ColorHex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ColorHex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The six swatches offered by the folder-creation picker.
pub fn default_palette() -> [ColorHex; 6] {
    [
        ColorHex::from_rgb(0x8B, 0x7F, 0xD4), // purple
        ColorHex::from_rgb(0x7F, 0xD4, 0xA1), // green
        ColorHex::from_rgb(0xD4, 0x7F, 0xB6), // pink
        ColorHex::from_rgb(0x7F, 0xB6, 0xD4), // blue
        ColorHex::from_rgb(0xD4, 0xA1, 0x7F), // orange
        ColorHex::from_rgb(0xA8, 0xA8, 0xA8), // gray
    ]
}
