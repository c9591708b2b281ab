use crate::scale::ScaleOverrides;
use folio_style::{Font, LineFormat};
use folio_types::{Color, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TickMarkType {
    #[default]
    None,
    Inside,
    Outside,
    Cross,
}

impl TickMarkType {
    /// Start and end offsets of a mark of length `width`, relative to the
    /// baseline. Positive y points away from the plot.
    pub fn offsets(self, width: f64) -> (Point, Point) {
        match self {
            TickMarkType::None => (Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
            TickMarkType::Inside => (Point::new(0.0, -width), Point::new(0.0, 0.0)),
            TickMarkType::Outside => (Point::new(0.0, 0.0), Point::new(0.0, width)),
            TickMarkType::Cross => (Point::new(0.0, width), Point::new(0.0, -width)),
        }
    }

    pub fn is_visible(self) -> bool {
        self != TickMarkType::None
    }
}

/// How tick values are turned into label text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelFormat {
    /// As few decimals as the tick spacing needs.
    #[default]
    Auto,
    Fixed(usize),
}

/// User settings of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Axis {
    pub title: Option<String>,
    pub title_font: Font,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub major_tick: Option<f64>,
    pub minor_tick: Option<f64>,
    pub major_tick_mark: TickMarkType,
    pub minor_tick_mark: TickMarkType,
    pub tick_labels_font: Font,
    pub label_format: LabelFormat,
    pub text_color: Color,
    pub line_format: LineFormat,
    pub major_gridlines: Option<LineFormat>,
    pub minor_gridlines: Option<LineFormat>,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            title: None,
            title_font: Font::default().bold(),
            minimum: None,
            maximum: None,
            major_tick: None,
            minor_tick: None,
            major_tick_mark: TickMarkType::Outside,
            minor_tick_mark: TickMarkType::None,
            tick_labels_font: Font::default().with_size(8.0),
            label_format: LabelFormat::Auto,
            text_color: Color::BLACK,
            line_format: LineFormat::default(),
            major_gridlines: None,
            minor_gridlines: None,
        }
    }
}

impl Axis {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn overrides(&self) -> ScaleOverrides {
        ScaleOverrides {
            minimum: self.minimum,
            maximum: self.maximum,
            major_tick: self.major_tick,
            minor_tick: self.minor_tick,
        }
    }
}
