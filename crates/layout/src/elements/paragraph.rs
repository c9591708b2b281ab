use crate::element::{Element, FormatContext, Measured, ResumeState};
use crate::layout_info::LayoutRequest;
use crate::render_info::{FormatContent, RenderInfo, TextLine};
use crate::text::wrapper::break_lines;
use crate::LayoutError;
use folio_style::{ElementAlignment, Font};
use folio_traits::DrawingSurface;
use folio_types::{Color, Point, Size};

/// Placeholder replaced by the current page number.
pub const PAGE_FIELD: &str = "{page}";

#[derive(Debug, Clone)]
pub struct Paragraph {
    pub text: String,
    pub font: Font,
    pub color: Color,
    /// Alignment of each line inside the paragraph box.
    pub text_align: ElementAlignment,
    /// Multiplier applied to the font's line height.
    pub line_spacing: f64,
    pub layout: LayoutRequest,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Font::default(),
            color: Color::BLACK,
            text_align: ElementAlignment::Near,
            line_spacing: 1.0,
            layout: LayoutRequest::default(),
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_layout(mut self, layout: LayoutRequest) -> Self {
        self.layout = layout;
        self
    }

    /// The remainder of a split paragraph is wrapped with the page number of
    /// its head, otherwise the line offset would not match the new wrap.
    fn page_number(ctx: &FormatContext<'_>, resume: Option<ResumeState>) -> usize {
        resume
            .and_then(|r| r.page_number)
            .unwrap_or(ctx.field_infos.page_number)
    }

    fn measure_lines(lines: Vec<TextLine>, line_height: f64) -> Measured {
        let width = lines.iter().map(|l| l.width).fold(0.0, f64::max);
        Measured {
            size: Size::new(width, lines.len() as f64 * line_height),
            content: FormatContent::Text { lines, line_height },
        }
    }
}

impl Element for Paragraph {
    fn kind(&self) -> &'static str {
        "paragraph"
    }

    fn layout_request(&self) -> LayoutRequest {
        self.layout
    }

    fn format(
        &self,
        ctx: &FormatContext<'_>,
        resume: Option<ResumeState>,
    ) -> Result<Measured, LayoutError> {
        if self.font.size.is_nan() || self.font.size <= 0.0 {
            return Err(LayoutError::InvalidDimension {
                element: "paragraph",
                dimension: "font size",
                value: self.font.size,
            });
        }
        if !self.line_spacing.is_finite() || self.line_spacing <= 0.0 {
            return Err(LayoutError::InvalidDimension {
                element: "paragraph",
                dimension: "line spacing",
                value: self.line_spacing,
            });
        }
        let text = self
            .text
            .replace(PAGE_FIELD, &Self::page_number(ctx, resume).to_string());
        let line_height =
            ctx.measurer.font_metrics(&self.font).line_height(self.font.size) * self.line_spacing;

        let mut lines = break_lines(&text, &self.font, ctx.available.width, ctx.measurer);
        let offset = resume.map_or(0, |r| r.offset).min(lines.len());
        lines.drain(..offset);

        Ok(Self::measure_lines(lines, line_height))
    }

    fn split(
        &self,
        ctx: &FormatContext<'_>,
        measured: &Measured,
        resume: Option<ResumeState>,
    ) -> Option<(Measured, ResumeState)> {
        let FormatContent::Text { lines, line_height } = &measured.content else {
            return None;
        };
        if *line_height <= 0.0 {
            return None;
        }
        let fitting = ((ctx.available.height + ctx.config.fit_tolerance) / line_height).floor() as usize;
        if fitting >= lines.len() {
            return None;
        }
        // Shorten the head so the tail keeps its minimum too.
        let min_lines = ctx.config.min_split_lines.max(1);
        let head_lines = fitting.min(lines.len().saturating_sub(min_lines));
        if head_lines < min_lines {
            return None;
        }

        let head = Self::measure_lines(lines[..head_lines].to_vec(), *line_height);
        let offset = resume.map_or(0, |r| r.offset) + head_lines;
        Some((
            head,
            ResumeState {
                offset,
                page_number: Some(Self::page_number(ctx, resume)),
            },
        ))
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, info: &RenderInfo) -> Result<(), LayoutError> {
        let FormatContent::Text { lines, line_height } = &info.content else {
            return Err(LayoutError::Content(format!(
                "paragraph {} has no text content",
                info.element_index
            )));
        };
        let area = info.layout_info.content_area;

        for (i, line) in lines.iter().enumerate() {
            if line.text.is_empty() {
                continue;
            }
            let dx = match self.text_align {
                ElementAlignment::Near => 0.0,
                ElementAlignment::Far => area.width - line.width,
                ElementAlignment::Center => (area.width - line.width) / 2.0,
            };
            let origin = Point::new(area.x + dx, area.y + i as f64 * line_height);
            surface.draw_string(&line.text, &self.font, self.color, origin)?;
        }
        Ok(())
    }
}
