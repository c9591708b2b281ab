use crate::element::{Element, FormatContext, Measured, ResumeState};
use crate::formatter::TopDownFormatter;
use crate::layout_info::LayoutRequest;
use crate::providers::TextFrameArea;
use crate::render_info::{FormatContent, RenderInfo};
use crate::LayoutError;
use folio_style::{LineFormat, Margins, TextOrientation};
use folio_traits::DrawingSurface;
use folio_types::{Matrix, Rect, Size, UNBOUNDED};
use log::debug;

/// A nested frame whose children flow through their own formatter.
///
/// The extent along the lines is required (width for horizontal frames,
/// height for rotated ones); the other extent is taken from the content when
/// left out.
#[derive(Debug)]
pub struct TextFrame {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Inner margins between the border and the content.
    pub padding: Margins,
    pub border: Option<LineFormat>,
    pub orientation: TextOrientation,
    pub children: Vec<Box<dyn Element>>,
    pub layout: LayoutRequest,
}

impl TextFrame {
    pub fn new(width: f64, children: Vec<Box<dyn Element>>) -> Self {
        Self {
            width: Some(width),
            height: None,
            padding: Margins::default(),
            border: None,
            orientation: TextOrientation::Horizontal,
            children,
            layout: LayoutRequest::default(),
        }
    }

    fn border_width(&self) -> f64 {
        self.border.map_or(0.0, |b| b.effective_width())
    }

    fn flow_extent(&self) -> Result<f64, LayoutError> {
        let (dimension, value) = if self.orientation.is_rotated() {
            ("height", self.height)
        } else {
            ("width", self.width)
        };
        let value = value.ok_or(LayoutError::MissingDimension {
            element: "text frame",
            dimension,
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(LayoutError::InvalidDimension {
                element: "text frame",
                dimension,
                value,
            });
        }
        Ok(value)
    }

    /// Maps the frame's text coordinates onto the page rect it was placed in.
    fn content_transform(&self, rect: Rect) -> Matrix {
        let local = match self.orientation {
            TextOrientation::Horizontal | TextOrientation::HorizontalRotatedFarEast => {
                Matrix::IDENTITY
            }
            TextOrientation::Upward => Matrix::new(0.0, -1.0, 1.0, 0.0, 0.0, rect.height),
            TextOrientation::Downward => Matrix::new(0.0, 1.0, -1.0, 0.0, rect.width, 0.0),
        };
        local.then(Matrix::translation(rect.x, rect.y))
    }
}

impl Element for TextFrame {
    fn kind(&self) -> &'static str {
        "textFrame"
    }

    fn layout_request(&self) -> LayoutRequest {
        self.layout
    }

    fn format(
        &self,
        ctx: &FormatContext<'_>,
        _resume: Option<ResumeState>,
    ) -> Result<Measured, LayoutError> {
        let flow = self.flow_extent()?;
        let frame = if self.orientation.is_rotated() {
            Size::new(self.width.unwrap_or(UNBOUNDED), flow)
        } else {
            Size::new(flow, self.height.unwrap_or(UNBOUNDED))
        };

        let mut provider = TextFrameArea::new(
            frame,
            &self.padding,
            self.border_width(),
            self.orientation,
            ctx.field_infos,
        );
        let summary = TopDownFormatter::with_config(&mut provider, &self.children, *ctx.config)
            .format_on_areas(ctx.measurer, false)?;
        debug!(
            "Text frame formatted {} of {} children.",
            summary.formatted, summary.total
        );

        let cross = provider.required_cross_extent();
        let size = if self.orientation.is_rotated() {
            Size::new(self.width.unwrap_or(cross), flow)
        } else {
            Size::new(flow, self.height.unwrap_or(cross))
        };
        let content_height = provider.content_height();

        Ok(Measured {
            size,
            content: FormatContent::Frame {
                render_infos: provider.into_render_infos(),
                content_height,
            },
        })
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, info: &RenderInfo) -> Result<(), LayoutError> {
        let FormatContent::Frame { render_infos, .. } = &info.content else {
            return Err(LayoutError::Content(format!(
                "text frame {} has no frame content",
                info.element_index
            )));
        };
        let rect = info.layout_info.content_area;
        if let Some(border) = &self.border {
            surface.draw_rect(rect, border)?;
        }

        surface.save_state();
        surface.transform(self.content_transform(rect));
        for child in render_infos {
            let element = self.children.get(child.element_index).ok_or_else(|| {
                LayoutError::Content(format!(
                    "text frame has no child {} to draw",
                    child.element_index
                ))
            })?;
            element.draw(surface, child)?;
        }
        surface.restore_state()?;
        Ok(())
    }
}
