use crate::axis::Axis;
use crate::defaults::DEFAULT_PLOT_PADDING;
use crate::error::ChartError;
use crate::renderer_info::{AxisMode, AxisRendererInfo};
use crate::scale::{AxisScale, AxisScaler, ScaleOverrides};
use crate::series::{Series, SeriesData, y_extent};
use crate::x_axis::{AxisRenderer, XAxisRenderer};
use folio_layout::{
    Element, FormatContent, FormatContext, LayoutError, LayoutRequest, Measured, RenderInfo,
    ResumeState,
};
use folio_style::{LineFormat, Margins};
use folio_traits::DrawingSurface;
use folio_types::{Color, Matrix, Point, Rect, Size};
use log::trace;
use std::sync::Arc;

/// Side length of the marker drawn for points with a fill override.
const MARKER_SIZE: f64 = 3.0;

/// Geometry of a formatted chart, relative to its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_axis: AxisRendererInfo,
    pub y_scale: AxisScale,
    pub plot: Rect,
}

impl ChartLayout {
    fn y_position(&self, value: f64) -> f64 {
        let span = self.y_scale.maximum - self.y_scale.minimum;
        self.plot.bottom() - (value - self.y_scale.minimum) / span * self.plot.height
    }
}

/// A line chart of fixed size with an axis along the bottom.
#[derive(Debug, Clone)]
pub struct Chart {
    pub size: Size,
    pub series: Vec<Series>,
    pub x_axis: Option<Axis>,
    /// Rows of category labels. Generated when empty.
    pub x_values: Vec<Vec<String>>,
    pub y_range: ScaleOverrides,
    pub padding: Margins,
    pub plot_border: Option<LineFormat>,
    pub layout: LayoutRequest,
}

impl Chart {
    pub fn new(width: f64, height: f64, series: Vec<Series>) -> Self {
        Self {
            size: Size::new(width, height),
            series,
            x_axis: Some(Axis::default()),
            x_values: Vec::new(),
            y_range: ScaleOverrides::default(),
            padding: Margins::all(DEFAULT_PLOT_PADDING),
            plot_border: Some(LineFormat::default()),
            layout: LayoutRequest::default(),
        }
    }

    fn renderer(&self) -> XAxisRenderer<'_> {
        XAxisRenderer::new(self.x_axis.as_ref(), &self.series, &self.x_values)
    }

    fn lay_out(&self, ctx: &FormatContext<'_>) -> Result<ChartLayout, LayoutError> {
        let renderer = self.renderer();
        let mut x_axis = renderer.init()?;
        renderer.format(&mut x_axis, ctx.measurer);

        let frame = Rect::from_origin_size(Point::default(), self.size);
        let plot_height = frame.height - self.padding.vertical() - x_axis.height;
        if plot_height <= 0.0 {
            return Err(LayoutError::InvalidDimension {
                element: "chart",
                dimension: "height",
                value: self.size.height,
            });
        }
        let plot = Rect::new(
            self.padding.left,
            self.padding.top,
            frame.width - self.padding.horizontal(),
            plot_height,
        );
        x_axis.arrange(
            Rect::new(plot.x, plot.bottom(), plot.width, x_axis.height),
            plot,
        );

        let y_scale = AxisScaler::new("y axis", self.y_range).scale(y_extent(&self.series))?;
        trace!("Chart plot area {:?}, y scale {:?}", plot, y_scale);
        Ok(ChartLayout {
            x_axis,
            y_scale,
            plot,
        })
    }

    fn draw_series(
        &self,
        layout: &ChartLayout,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), ChartError> {
        let to_page = layout.x_axis.data_transform();
        let paired = layout.x_axis.mode == AxisMode::Paired;
        for series in &self.series {
            let points: Vec<(f64, f64, Option<LineFormat>, Option<Color>)> = match &series.data {
                SeriesData::Values(values) => values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64 + 0.5, *v, None, None))
                    .collect(),
                SeriesData::Points(points) => points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let x = if paired { p.x } else { i as f64 + 0.5 };
                        (x, p.y, p.line, p.fill)
                    })
                    .collect(),
            };

            let mut previous: Option<Point> = None;
            for (x, y, line, fill) in points {
                if !x.is_finite() || !y.is_finite() {
                    previous = None;
                    continue;
                }
                let at = Point::new(
                    to_page.transform_point(Point::new(x, 0.0)).x,
                    layout.y_position(y),
                );
                if let Some(from) = previous {
                    surface.draw_line(from, at, line.as_ref().unwrap_or(&series.line))?;
                }
                if let Some(fill) = fill {
                    let half = MARKER_SIZE / 2.0;
                    surface.draw_rect(
                        Rect::new(at.x - half, at.y - half, MARKER_SIZE, MARKER_SIZE),
                        &LineFormat::new(MARKER_SIZE / 2.0, fill),
                    )?;
                }
                previous = Some(at);
            }
        }
        Ok(())
    }

    fn draw_layout(
        &self,
        layout: &ChartLayout,
        surface: &mut dyn DrawingSurface,
    ) -> Result<(), ChartError> {
        if let Some(border) = &self.plot_border {
            surface.draw_rect(layout.plot, border)?;
        }
        self.draw_series(layout, surface)?;
        self.renderer().draw(&layout.x_axis, surface)
    }
}

impl Element for Chart {
    fn kind(&self) -> &'static str {
        "chart"
    }

    fn layout_request(&self) -> LayoutRequest {
        self.layout
    }

    fn format(
        &self,
        ctx: &FormatContext<'_>,
        _resume: Option<ResumeState>,
    ) -> Result<Measured, LayoutError> {
        for (dimension, value) in [("width", self.size.width), ("height", self.size.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidDimension {
                    element: "chart",
                    dimension,
                    value,
                });
            }
        }
        let layout = self.lay_out(ctx)?;
        Ok(Measured {
            size: self.size,
            content: FormatContent::Opaque(Arc::new(layout)),
        })
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, info: &RenderInfo) -> Result<(), LayoutError> {
        let layout = info.content.downcast::<ChartLayout>().ok_or_else(|| {
            ChartError::UnexpectedContent(format!("chart {} has no chart layout", info.element_index))
        })?;
        let origin = info.layout_info.content_area.origin();
        surface.save_state();
        surface.transform(Matrix::translation(origin.x, origin.y));
        self.draw_layout(layout, surface)?;
        surface.restore_state()?;
        Ok(())
    }
}
