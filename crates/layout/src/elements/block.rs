use crate::element::{Element, FormatContext, Measured, ResumeState};
use crate::layout_info::LayoutRequest;
use crate::render_info::{FormatContent, RenderInfo};
use crate::LayoutError;
use folio_style::{Font, LineFormat};
use folio_traits::DrawingSurface;
use folio_types::{Color, Size};

/// A fixed-size box with an optional border and a caption centred inside it.
/// Never splits.
#[derive(Debug, Clone)]
pub struct Block {
    pub size: Size,
    pub border: Option<LineFormat>,
    pub caption: Option<String>,
    pub font: Font,
    pub color: Color,
    pub layout: LayoutRequest,
}

impl Block {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            border: None,
            caption: None,
            font: Font::default(),
            color: Color::BLACK,
            layout: LayoutRequest::default(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutRequest) -> Self {
        self.layout = layout;
        self
    }
}

impl Element for Block {
    fn kind(&self) -> &'static str {
        "block"
    }

    fn layout_request(&self) -> LayoutRequest {
        self.layout
    }

    fn format(
        &self,
        _ctx: &FormatContext<'_>,
        _resume: Option<ResumeState>,
    ) -> Result<Measured, LayoutError> {
        for (dimension, value) in [("width", self.size.width), ("height", self.size.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidDimension {
                    element: "block",
                    dimension,
                    value,
                });
            }
        }
        Ok(Measured {
            size: self.size,
            content: FormatContent::Empty,
        })
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, info: &RenderInfo) -> Result<(), LayoutError> {
        let rect = info.layout_info.content_area;
        if let Some(border) = &self.border {
            surface.draw_rect(rect, border)?;
        }
        if let Some(caption) = &self.caption {
            surface.draw_string_in(caption, &self.font, self.color, rect)?;
        }
        Ok(())
    }
}
