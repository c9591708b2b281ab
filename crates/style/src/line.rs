use folio_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
}

impl DashStyle {
    /// The on/off pattern for a stroke of the given width. Empty for solid lines.
    pub fn pattern(self, width: f64) -> Vec<f64> {
        let unit = width.max(1.0);
        match self {
            DashStyle::Solid => Vec::new(),
            DashStyle::Dash => vec![3.0 * unit, 2.0 * unit],
            DashStyle::Dot => vec![unit, unit],
        }
    }
}

/// Stroke settings for lines, borders and tick marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineFormat {
    pub width: f64,
    pub color: Color,
    pub dash: DashStyle,
    pub visible: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            width: 0.75,
            color: Color::BLACK,
            dash: DashStyle::Solid,
            visible: true,
        }
    }
}

impl LineFormat {
    pub fn new(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            ..Self::default()
        }
    }

    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }

    /// Width that actually takes up space; hidden lines count as zero.
    pub fn effective_width(&self) -> f64 {
        if self.visible { self.width } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_line_has_no_width() {
        assert_eq!(LineFormat::hidden().effective_width(), 0.0);
        assert_eq!(LineFormat::new(2.0, Color::BLACK).effective_width(), 2.0);
    }

    #[test]
    fn dash_patterns_scale_with_width() {
        assert!(DashStyle::Solid.pattern(2.0).is_empty());
        assert_eq!(DashStyle::Dash.pattern(2.0), vec![6.0, 4.0]);
        assert_eq!(DashStyle::Dot.pattern(0.5), vec![1.0, 1.0]);
    }

    #[test]
    fn deserializes_partial_line() {
        let line: LineFormat = serde_json::from_str(r##"{"color": "#f00", "dash": "dot"}"##).unwrap();
        assert_eq!(line.width, 0.75);
        assert_eq!(line.color, Color::rgb(255, 0, 0));
        assert_eq!(line.dash, DashStyle::Dot);
    }
}
