use crate::axis::{Axis, LabelFormat, TickMarkType};
use crate::defaults::{
    DEFAULT_MAJOR_TICK_MARK_WIDTH, DEFAULT_MINOR_TICK_MARK_WIDTH, MAX_AUTO_DECIMALS,
    SPACE_BETWEEN_LABEL_AND_TICKMARK,
};
use crate::scale::{AxisScale, TICK_EPSILON, tick_count};
use folio_style::{Font, LineFormat};
use folio_types::{Color, Matrix, Rect, Size};
use log::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitleInfo {
    pub text: Option<String>,
    pub font: Font,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AxisMode {
    /// Values are taken from the x coordinate of the points.
    Paired,
    /// One slot per value index. Each inner list is a row of labels.
    Categorical {
        count: usize,
        labels: Vec<Vec<String>>,
    },
}

/// Everything one axis needs between initialization and drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRendererInfo {
    pub mode: AxisMode,
    pub minimum_scale: f64,
    pub maximum_scale: f64,
    pub major_tick: f64,
    pub minor_tick: f64,
    pub major_tick_mark: TickMarkType,
    pub minor_tick_mark: TickMarkType,
    pub major_tick_mark_width: f64,
    pub minor_tick_mark_width: f64,
    pub tick_labels_font: Font,
    pub label_format: LabelFormat,
    /// Height of one row of tick labels.
    pub tick_label_row_height: f64,
    pub tick_labels_height: f64,
    pub tick_labels_width: f64,
    pub title: AxisTitleInfo,
    /// Colour of the title and the tick labels.
    pub text_color: Color,
    pub line_format: LineFormat,
    pub major_gridlines: Option<LineFormat>,
    pub minor_gridlines: Option<LineFormat>,
    pub width: f64,
    pub height: f64,
    /// Footprint of the axis below the plot.
    pub rect: Rect,
    /// The plot area the axis belongs to.
    pub inner_rect: Rect,
}

impl AxisRendererInfo {
    pub fn new(axis: &Axis, mode: AxisMode, scale: AxisScale) -> Self {
        Self {
            mode,
            minimum_scale: scale.minimum,
            maximum_scale: scale.maximum,
            major_tick: scale.major_tick,
            minor_tick: scale.minor_tick,
            major_tick_mark: axis.major_tick_mark,
            minor_tick_mark: axis.minor_tick_mark,
            major_tick_mark_width: DEFAULT_MAJOR_TICK_MARK_WIDTH,
            minor_tick_mark_width: DEFAULT_MINOR_TICK_MARK_WIDTH,
            tick_labels_font: axis.tick_labels_font.clone(),
            label_format: axis.label_format,
            tick_label_row_height: 0.0,
            tick_labels_height: 0.0,
            tick_labels_width: 0.0,
            title: AxisTitleInfo {
                text: axis.title.clone(),
                font: axis.title_font.clone(),
                size: Size::zero(),
            },
            text_color: axis.text_color,
            line_format: axis.line_format,
            major_gridlines: axis.major_gridlines,
            minor_gridlines: axis.minor_gridlines,
            width: 0.0,
            height: 0.0,
            rect: Rect::default(),
            inner_rect: Rect::default(),
        }
    }

    /// Places the axis. `rect` is the axis footprint and `inner` the plot area.
    pub fn arrange(&mut self, rect: Rect, inner: Rect) {
        self.rect = rect;
        self.inner_rect = inner;
    }

    /// Maps scale values onto the baseline of the arranged axis. Categorical
    /// slot `i` spans the values `i..i + 1`.
    pub fn data_transform(&self) -> Matrix {
        let span = self.maximum_scale - self.minimum_scale;
        Matrix::translation(-self.minimum_scale, 0.0)
            .then(Matrix::scaling(self.inner_rect.width / span, 1.0))
            .then(Matrix::translation(self.inner_rect.x, self.rect.y))
    }

    /// Distance between the baseline and the top of the tick labels.
    pub fn label_gap(&self) -> f64 {
        if self.major_tick_mark.is_visible() {
            self.major_tick_mark_width
        } else {
            SPACE_BETWEEN_LABEL_AND_TICKMARK
        }
    }

    /// Values of the major ticks, from the minimum up to the maximum.
    pub fn major_tick_values(&self) -> Vec<f64> {
        tick_values(self.minimum_scale, self.maximum_scale, self.major_tick)
    }

    /// Values of the minor ticks strictly between the minimum and the maximum.
    pub fn minor_tick_values(&self) -> Vec<f64> {
        let limit = self.maximum_scale - TICK_EPSILON * self.minor_tick;
        tick_values(self.minimum_scale, self.maximum_scale, self.minor_tick)
            .into_iter()
            .skip(1)
            .filter(|value| *value < limit)
            .collect()
    }

    /// Number of decimals used for tick labels.
    pub fn label_decimals(&self) -> usize {
        match self.label_format {
            LabelFormat::Fixed(decimals) => decimals,
            LabelFormat::Auto => decimals_for(self.major_tick).max(decimals_for(self.minimum_scale)),
        }
    }

    pub fn tick_label(&self, value: f64) -> String {
        format_value(value, self.label_decimals())
    }
}

/// Index-based tick positions, so that rounding errors do not accumulate.
fn tick_values(minimum: f64, maximum: f64, tick: f64) -> Vec<f64> {
    if minimum.is_nan() || maximum.is_nan() || maximum <= minimum {
        return Vec::new();
    }
    match tick_count(maximum - minimum, tick) {
        Some(count) => (0..count).map(|i| minimum + i as f64 * tick).collect(),
        None => {
            warn!("Skipping ticks of {} over [{}, {}]", tick, minimum, maximum);
            Vec::new()
        }
    }
}

/// Smallest number of decimals that shows `value` without loss.
fn decimals_for(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    (0..=MAX_AUTO_DECIMALS)
        .find(|&d| {
            let scaled = value * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0)
        })
        .unwrap_or(MAX_AUTO_DECIMALS)
}

fn format_value(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}
