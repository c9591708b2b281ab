use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Color must start with '#', got: {0}")]
    MissingHash(String),
    #[error("Invalid hex color length: expected 3 or 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("Invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// An opaque RGB color.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Components scaled to `0.0..=1.0`, the form PDF color operators take.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#RGB` or `#RRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or_else(|| ColorParseError::InvalidDigit(s.to_string()))
            })
            .collect::<Result<_, _>>()?;

        match digits.as_slice() {
            [r, g, b] => Ok(Color::rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Color::rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            other => Err(ColorParseError::InvalidLength(other.len())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Hex(String),
            Components { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Hex(s) => s.parse().map_err(de::Error::custom),
            ColorDef::Components { r, g, b } => Ok(Color::rgb(r, g, b)),
        }
    }
}
