//! The horizontal axis below the plot area.
//!
//! Rendering runs in phases over one [`AxisRendererInfo`]: `init` resolves the
//! scale, `format` measures the title and labels, the chart arranges the axis
//! and its plot area, and `draw` paints it.

use crate::axis::Axis;
use crate::error::ChartError;
use crate::renderer_info::{AxisMode, AxisRendererInfo};
use crate::scale::{AxisScale, AxisScaler, tick_count};
use crate::series::{Series, x_extent};
use folio_style::LineFormat;
use folio_traits::{DrawingSurface, TextMeasurer};
use folio_types::{Point, Size};
use log::{debug, warn};

/// Name the x axis goes by in errors.
pub const X_AXIS: &str = "x axis";

pub trait AxisRenderer {
    fn init(&self) -> Result<AxisRendererInfo, ChartError>;

    fn format(&self, info: &mut AxisRendererInfo, measurer: &dyn TextMeasurer);

    fn draw(&self, info: &AxisRendererInfo, surface: &mut dyn DrawingSurface)
    -> Result<(), ChartError>;
}

#[derive(Debug, Clone, Copy)]
pub struct XAxisRenderer<'a> {
    axis: Option<&'a Axis>,
    series: &'a [Series],
    x_values: &'a [Vec<String>],
}

impl<'a> XAxisRenderer<'a> {
    pub fn new(axis: Option<&'a Axis>, series: &'a [Series], x_values: &'a [Vec<String>]) -> Self {
        Self {
            axis,
            series,
            x_values,
        }
    }

    fn categorical(&self, axis: &Axis) -> AxisRendererInfo {
        let count = self.series.iter().map(Series::len).max().unwrap_or(0);
        let labels = if self.x_values.is_empty() {
            vec![(1..=count).map(|i| i.to_string()).collect()]
        } else {
            self.x_values.to_vec()
        };
        let scale = AxisScale {
            minimum: 0.0,
            maximum: count as f64,
            major_tick: 1.0,
            minor_tick: 0.5,
        };
        AxisRendererInfo::new(axis, AxisMode::Categorical { count, labels }, scale)
    }

    fn format_paired_labels(&self, info: &mut AxisRendererInfo, measurer: &dyn TextMeasurer) {
        let mut width = 0.0;
        let mut height: f64 = 0.0;
        for value in info.major_tick_values() {
            let size = measurer.measure_string(&info.tick_label(value), &info.tick_labels_font);
            width += size.width + 1.5 * info.major_tick_mark_width;
            height = height.max(size.height);
        }
        info.tick_labels_width = width;
        info.tick_label_row_height = height;
        info.tick_labels_height = height;
    }

    fn format_categorical_labels(
        &self,
        info: &mut AxisRendererInfo,
        labels: &[Vec<String>],
        measurer: &dyn TextMeasurer,
    ) {
        let font = &info.tick_labels_font;
        let first = labels.first().map(Vec::as_slice).unwrap_or_default();
        let (width, height) = if first.is_empty() {
            let metrics = measurer.font_metrics(font);
            (0.0, metrics.x_height_approximation(font.size))
        } else {
            first.iter().fold((0.0, 0.0_f64), |(w, h), label| {
                let size = measurer.measure_string(label, font);
                (w + size.width, h.max(size.height))
            })
        };
        info.tick_labels_width = width;
        info.tick_label_row_height = height;
        info.tick_labels_height = height * labels.len().max(1) as f64;
    }

    fn draw_paired(
        &self,
        info: &AxisRendererInfo,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), ChartError> {
        let baseline = info.rect.y;
        let to_page = info.data_transform();
        let position = |value: f64| to_page.transform_point(Point::new(value, 0.0));

        let minor_positions: Vec<Point> = info.minor_tick_values().into_iter().map(position).collect();
        draw_gridlines(info.minor_gridlines.as_ref(), &minor_positions, info, surface)?;
        if info.minor_tick_mark.is_visible() {
            for at in &minor_positions {
                draw_mark(*at, info.minor_tick_mark.offsets(info.minor_tick_mark_width), info, surface)?;
            }
        }

        let major_values = info.major_tick_values();
        let major_positions: Vec<Point> = major_values.iter().copied().map(position).collect();
        draw_gridlines(info.major_gridlines.as_ref(), &major_positions, info, surface)?;
        let label_top = baseline + info.label_gap();
        for (value, at) in major_values.iter().zip(&major_positions) {
            if info.major_tick_mark.is_visible() {
                draw_mark(*at, info.major_tick_mark.offsets(info.major_tick_mark_width), info, surface)?;
            }
            let label = info.tick_label(*value);
            let size = surface.measure_string(&label, &info.tick_labels_font);
            surface.draw_string(
                &label,
                &info.tick_labels_font,
                info.text_color,
                Point::new(at.x - size.width / 2.0, label_top),
            )?;
        }
        Ok(())
    }

    fn draw_categorical(
        &self,
        info: &AxisRendererInfo,
        count: usize,
        labels: &[Vec<String>],
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), ChartError> {
        let inner = info.inner_rect;
        let baseline = info.rect.y;
        let step = if count == 0 {
            inner.width
        } else {
            inner.width / count as f64
        };
        let at = |slot: f64| Point::new(inner.x + slot * step, baseline);

        let minor_count = tick_count(count as f64, info.minor_tick).unwrap_or(0);
        let minor_positions: Vec<Point> = (0..minor_count)
            .map(|i| at(i as f64 * info.minor_tick))
            .collect();
        draw_gridlines(info.minor_gridlines.as_ref(), &minor_positions, info, surface)?;
        if info.minor_tick_mark.is_visible() {
            for point in &minor_positions {
                draw_mark(*point, info.minor_tick_mark.offsets(info.minor_tick_mark_width), info, surface)?;
            }
        }

        let major_count = tick_count(count as f64, info.major_tick).unwrap_or(0);
        let major_positions: Vec<Point> = (0..major_count)
            .map(|i| at(i as f64 * info.major_tick))
            .collect();
        draw_gridlines(info.major_gridlines.as_ref(), &major_positions, info, surface)?;
        if info.major_tick_mark.is_visible() {
            for point in &major_positions {
                draw_mark(*point, info.major_tick_mark.offsets(info.major_tick_mark_width), info, surface)?;
            }
        }

        let label_top = baseline + info.label_gap();
        for (row, series) in labels.iter().enumerate() {
            if series.len() != count {
                warn!(
                    "Label row {} has {} labels for {} categories",
                    row,
                    series.len(),
                    count
                );
            }
            let top = label_top + row as f64 * info.tick_label_row_height;
            for (slot, label) in series.iter().take(count).enumerate() {
                let size = surface.measure_string(label, &info.tick_labels_font);
                let x = inner.x + slot as f64 * step + (step - size.width) / 2.0;
                surface.draw_string(
                    label,
                    &info.tick_labels_font,
                    info.text_color,
                    Point::new(x, top),
                )?;
            }
        }
        Ok(())
    }

    fn draw_baseline(
        &self,
        info: &AxisRendererInfo,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), ChartError> {
        let line = &info.line_format;
        let overhang = if info.major_tick_mark.is_visible() {
            line.effective_width() / 2.0
        } else {
            0.0
        };
        let y = info.rect.y;
        surface.draw_line(
            Point::new(info.rect.x - overhang, y),
            Point::new(info.rect.right() + overhang, y),
            line,
        )?;
        Ok(())
    }

    fn draw_title(
        &self,
        info: &AxisRendererInfo,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), ChartError> {
        let Some(text) = &info.title.text else {
            return Ok(());
        };
        let size = info.title.size;
        let origin = Point::new(
            info.rect.x + (info.rect.width - size.width) / 2.0,
            info.rect.bottom() - size.height,
        );
        surface.draw_string(text, &info.title.font, info.text_color, origin)?;
        Ok(())
    }
}

impl AxisRenderer for XAxisRenderer<'_> {
    fn init(&self) -> Result<AxisRendererInfo, ChartError> {
        let axis = self.axis.ok_or(ChartError::MissingReference(X_AXIS))?;
        let paired = self.series.first().is_some_and(Series::is_paired);
        let info = if paired {
            let scale = AxisScaler::new(X_AXIS, axis.overrides()).scale(x_extent(self.series))?;
            AxisRendererInfo::new(axis, AxisMode::Paired, scale)
        } else {
            self.categorical(axis)
        };
        debug!(
            "Initialized {} as {:?} over [{}, {}]",
            X_AXIS, info.mode, info.minimum_scale, info.maximum_scale
        );
        Ok(info)
    }

    fn format(&self, info: &mut AxisRendererInfo, measurer: &dyn TextMeasurer) {
        info.title.size = match &info.title.text {
            Some(text) => measurer.measure_string(text, &info.title.font),
            None => Size::zero(),
        };
        match info.mode.clone() {
            AxisMode::Paired => self.format_paired_labels(info, measurer),
            AxisMode::Categorical { labels, .. } => {
                self.format_categorical_labels(info, &labels, measurer)
            }
        }
        info.height = info.title.size.height + info.tick_labels_height + info.label_gap();
        info.width = info.title.size.width.max(info.tick_labels_width);
    }

    fn draw(
        &self,
        info: &AxisRendererInfo,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), ChartError> {
        match &info.mode {
            AxisMode::Paired => self.draw_paired(info, surface)?,
            AxisMode::Categorical { count, labels } => {
                self.draw_categorical(info, *count, labels, surface)?
            }
        }
        self.draw_baseline(info, surface)?;
        self.draw_title(info, surface)
    }
}

fn draw_mark(
    at: Point,
    (from, to): (Point, Point),
    info: &AxisRendererInfo,
    surface: &mut dyn DrawingSurface,
) -> Result<(), ChartError> {
    surface.draw_line(
        at.offset(from.x, from.y),
        at.offset(to.x, to.y),
        &info.line_format,
    )?;
    Ok(())
}

fn draw_gridlines(
    line: Option<&LineFormat>,
    positions: &[Point],
    info: &AxisRendererInfo,
    surface: &mut dyn DrawingSurface,
) -> Result<(), ChartError> {
    let Some(line) = line else {
        return Ok(());
    };
    let inner = info.inner_rect;
    for at in positions {
        surface.draw_line(Point::new(at.x, inner.y), Point::new(at.x, inner.bottom()), line)?;
    }
    Ok(())
}
