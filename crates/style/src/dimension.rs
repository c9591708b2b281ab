//! Spacing and page-size primitives.
use crate::parsers::{StyleParseError, parse_length, parse_length_list};
use folio_types::Size;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};
use std::str::FromStr;

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn all(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn x(value: f64) -> Self {
        Self {
            top: 0.0,
            right: value,
            bottom: 0.0,
            left: value,
        }
    }

    pub const fn y(value: f64) -> Self {
        Self {
            top: value,
            right: 0.0,
            bottom: value,
            left: 0.0,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl FromStr for Margins {
    type Err = StyleParseError;

    /// CSS-style shorthand with 1, 2 or 4 lengths.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match parse_length_list(input)?.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [vertical, horizontal] => Ok(Margins {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Margins {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            other => Err(StyleParseError::InvalidValue {
                property: "margins".to_string(),
                value: format!("expected 1, 2 or 4 lengths, got {}", other.len()),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MarginsDef {
            Number(f64),
            Shorthand(String),
            Sides {
                #[serde(default)]
                top: f64,
                #[serde(default)]
                right: f64,
                #[serde(default)]
                bottom: f64,
                #[serde(default)]
                left: f64,
            },
        }

        match MarginsDef::deserialize(deserializer)? {
            MarginsDef::Number(value) => Ok(Margins::all(value)),
            MarginsDef::Shorthand(s) => s.parse().map_err(de::Error::custom),
            MarginsDef::Sides {
                top,
                right,
                bottom,
                left,
            } => Ok(Margins {
                top,
                right,
                bottom,
                left,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    pub fn dimensions(&self) -> Size {
        match self {
            PageSize::A4 => Size::new(595.28, 841.89),
            PageSize::Letter => Size::new(612.0, 792.0),
            PageSize::Legal => Size::new(612.0, 1008.0),
            PageSize::Custom { width, height } => Size::new(*width, *height),
        }
    }
}

impl FromStr for PageSize {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(StyleParseError::InvalidValue {
                property: "page size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Name(String),
            Custom { width: LengthDef, height: LengthDef },
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LengthDef {
            Number(f64),
            Text(String),
        }

        fn resolve(length: LengthDef) -> Result<f64, StyleParseError> {
            match length {
                LengthDef::Number(value) => Ok(value),
                LengthDef::Text(text) => parse_length(&text),
            }
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Name(name) => name.parse().map_err(de::Error::custom),
            PageSizeDef::Custom { width, height } => Ok(PageSize::Custom {
                width: resolve(width).map_err(de::Error::custom)?,
                height: resolve(height).map_err(de::Error::custom)?,
            }),
        }
    }
}
