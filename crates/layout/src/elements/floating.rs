use crate::element::{Element, FormatContext, Measured, ResumeState};
use crate::formatter::TopDownFormatter;
use crate::layout_info::LayoutRequest;
use crate::providers::FloatingArea;
use crate::render_info::{FormatContent, RenderInfo};
use crate::LayoutError;
use folio_style::{LineFormat, Margins};
use folio_traits::DrawingSurface;
use folio_types::{Matrix, Rect, Size};
use log::{debug, warn};

/// A fixed-size box whose children are laid out like the text of a floating
/// shape: a single area inside the padding, alignment on both axes, and
/// children past the bottom dropped.
#[derive(Debug)]
pub struct FloatingFrame {
    pub width: f64,
    pub height: f64,
    pub padding: Margins,
    pub border: Option<LineFormat>,
    pub children: Vec<Box<dyn Element>>,
    pub layout: LayoutRequest,
}

impl FloatingFrame {
    pub fn new(width: f64, height: f64, children: Vec<Box<dyn Element>>) -> Self {
        Self {
            width,
            height,
            padding: Margins::default(),
            border: None,
            children,
            layout: LayoutRequest::default(),
        }
    }

    fn check(dimension: &'static str, value: f64) -> Result<(), LayoutError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(LayoutError::InvalidDimension {
                element: "floating frame",
                dimension,
                value,
            })
        }
    }

    /// The children's area, relative to the frame's top left corner.
    fn inner_rect(&self) -> Rect {
        let inset = self.border.map_or(0.0, |b| b.effective_width());
        Rect::new(
            self.padding.left + inset,
            self.padding.top + inset,
            self.width - self.padding.horizontal() - 2.0 * inset,
            self.height - self.padding.vertical() - 2.0 * inset,
        )
    }
}

impl Element for FloatingFrame {
    fn kind(&self) -> &'static str {
        "floatingFrame"
    }

    fn layout_request(&self) -> LayoutRequest {
        self.layout
    }

    fn format(
        &self,
        ctx: &FormatContext<'_>,
        _resume: Option<ResumeState>,
    ) -> Result<Measured, LayoutError> {
        Self::check("width", self.width)?;
        Self::check("height", self.height)?;

        let mut provider = FloatingArea::new(self.inner_rect(), ctx.field_infos);
        let summary = TopDownFormatter::with_config(&mut provider, &self.children, *ctx.config)
            .format_on_areas(ctx.measurer, false)?;
        if summary.is_complete() {
            debug!("Floating frame formatted {} children.", summary.total);
        } else {
            warn!(
                "Floating frame dropped {} of {} children past its bottom.",
                summary.dropped, summary.total
            );
        }

        let content_height = provider.content_height();
        Ok(Measured {
            size: Size::new(self.width, self.height),
            content: FormatContent::Frame {
                render_infos: provider.into_render_infos(),
                content_height,
            },
        })
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, info: &RenderInfo) -> Result<(), LayoutError> {
        let FormatContent::Frame { render_infos, .. } = &info.content else {
            return Err(LayoutError::Content(format!(
                "floating frame {} has no frame content",
                info.element_index
            )));
        };
        let rect = info.layout_info.content_area;
        if let Some(border) = &self.border {
            surface.draw_rect(rect, border)?;
        }

        surface.save_state();
        surface.transform(Matrix::translation(rect.x, rect.y));
        for child in render_infos {
            let element = self.children.get(child.element_index).ok_or_else(|| {
                LayoutError::Content(format!(
                    "floating frame has no child {} to draw",
                    child.element_index
                ))
            })?;
            element.draw(surface, child)?;
        }
        surface.restore_state()?;
        Ok(())
    }
}
