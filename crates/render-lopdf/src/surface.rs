// A DrawingSurface that collects PDF content operations per page and writes the
// document with lopdf once drawing is finished.

use crate::error::RenderError;
use crate::fonts::{base_font_name, to_win_ansi};
use folio_style::{DashStyle, Font, LineFormat};
use folio_traits::{
    DrawingSurface, FontMetrics, FontMetricsProvider, MonospaceMetrics, SurfaceError,
    TextMeasurer, measure_with,
};
use folio_types::{Color, Matrix, Point, Rect, Size};
use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, StringFormat, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::Write;

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

fn color_operands(color: Color) -> Vec<Object> {
    color.to_unit_rgb().iter().map(|c| Object::Real(*c)).collect()
}

/// Stroke and fill settings already emitted on the current page.
#[derive(Debug, Default, Clone, PartialEq)]
struct PageRenderState {
    stroke: Option<(f64, Color, DashStyle)>,
    fill: Option<Color>,
}

#[derive(Debug)]
struct PageState {
    size: Size,
    operations: Vec<Operation>,
    state: PageRenderState,
}

#[derive(Debug)]
pub struct PdfSurface {
    metrics: Box<dyn FontMetricsProvider>,
    pages: Vec<PageState>,
    /// Base font name to resource name ("F1", "F2", ...).
    fonts: BTreeMap<&'static str, String>,
    ctm: Matrix,
    saved: Vec<Matrix>,
}

impl Default for PdfSurface {
    fn default() -> Self {
        Self::with_metrics(Box::new(MonospaceMetrics))
    }
}

impl PdfSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: Box<dyn FontMetricsProvider>) -> Self {
        Self {
            metrics,
            pages: Vec::new(),
            fonts: BTreeMap::new(),
            ctm: Matrix::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_mut(&mut self) -> Result<&mut PageState, SurfaceError> {
        self.pages.last_mut().ok_or(SurfaceError::NoPage)
    }

    /// Maps a point through the current transform into PDF space, where the
    /// origin is the bottom-left corner of the page.
    fn to_pdf(&self, point: Point, page_height: f64) -> (f64, f64) {
        let mapped = self.ctm.transform_point(point);
        (mapped.x, page_height - mapped.y)
    }

    fn font_resource(&mut self, font: &Font) -> String {
        let base = base_font_name(font);
        let next = self.fonts.len() + 1;
        self.fonts
            .entry(base)
            .or_insert_with(|| format!("F{}", next))
            .clone()
    }

    fn set_stroke(page: &mut PageState, line: &LineFormat) {
        let wanted = (line.width, line.color, line.dash);
        if page.state.stroke == Some(wanted) {
            return;
        }
        page.operations.push(Operation::new("w", vec![real(line.width)]));
        page.operations.push(Operation::new("RG", color_operands(line.color)));
        let pattern: Vec<Object> = line.dash.pattern(line.width).into_iter().map(real).collect();
        page.operations.push(Operation::new("d", vec![Object::Array(pattern), 0.into()]));
        page.state.stroke = Some(wanted);
    }

    fn set_fill(page: &mut PageState, color: Color) {
        if page.state.fill != Some(color) {
            page.operations.push(Operation::new("rg", color_operands(color)));
            page.state.fill = Some(color);
        }
    }

    /// Strokes a path through `points`, closing it when `close` is set.
    fn stroke_path(
        &mut self,
        points: &[Point],
        close: bool,
        line: &LineFormat,
    ) -> Result<(), SurfaceError> {
        if !line.visible || points.len() < 2 {
            return Ok(());
        }
        let height = self.page_mut()?.size.height;
        let mapped: Vec<(f64, f64)> = points.iter().map(|p| self.to_pdf(*p, height)).collect();
        let page = self.page_mut()?;
        Self::set_stroke(page, line);
        for (i, (x, y)) in mapped.into_iter().enumerate() {
            let op = if i == 0 { "m" } else { "l" };
            page.operations.push(Operation::new(op, vec![real(x), real(y)]));
        }
        if close {
            page.operations.push(Operation::new("h", vec![]));
        }
        page.operations.push(Operation::new("S", vec![]));
        Ok(())
    }

    /// Writes the document to `writer`.
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<(), RenderError> {
        let mut document = self.into_document()?;
        document.save_to(writer)?;
        Ok(())
    }

    /// Serializes the document into memory.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    fn into_document(self) -> Result<Document, RenderError> {
        if self.pages.is_empty() {
            return Err(RenderError::NoPages);
        }
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for (base, resource) in &self.fonts {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => *base,
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(resource.as_str(), font_id);
        }
        let resources_id = document.add_object(dictionary! { "Font" => font_dict });

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in self.pages {
            let content = Content {
                operations: page.operations,
            };
            let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), real(page.size.width), real(page.size.height)],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }
        debug!(
            "Writing PDF with {} pages and {} fonts",
            kids.len(),
            self.fonts.len()
        );

        let count = kids.len() as i64;
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);
        Ok(document)
    }
}

impl TextMeasurer for PdfSurface {
    fn measure_string(&self, text: &str, font: &Font) -> Size {
        measure_with(self.metrics.as_ref(), text, font)
    }

    fn font_metrics(&self, font: &Font) -> FontMetrics {
        self.metrics.metrics(font)
    }
}

impl DrawingSurface for PdfSurface {
    fn begin_page(&mut self, size: Size) -> Result<(), SurfaceError> {
        if !size.width.is_finite() || !size.height.is_finite() || size.width <= 0.0 || size.height <= 0.0 {
            return Err(SurfaceError::Backend(format!(
                "invalid page size {} x {}",
                size.width, size.height
            )));
        }
        self.pages.push(PageState {
            size,
            operations: Vec::new(),
            state: PageRenderState::default(),
        });
        self.ctm = Matrix::IDENTITY;
        self.saved.clear();
        Ok(())
    }

    fn draw_string(
        &mut self,
        text: &str,
        font: &Font,
        color: Color,
        origin: Point,
    ) -> Result<(), SurfaceError> {
        let height = self.page_mut()?.size.height;
        if text.is_empty() {
            return Ok(());
        }
        let resource = self.font_resource(font);
        let ascent = self.metrics.metrics(font).ascent(font.size);
        let baseline = origin.offset(0.0, ascent);
        let (x, y) = self.to_pdf(baseline, height);
        let (ax, ay) = self.to_pdf(baseline.offset(1.0, 0.0), height);
        let (dx, dy) = (ax - x, ay - y);
        let length = dx.hypot(dy);
        let (cos, sin) = if length > 0.0 {
            (dx / length, dy / length)
        } else {
            (1.0, 0.0)
        };

        let page = self.page_mut()?;
        page.operations.push(Operation::new("BT", vec![]));
        page.operations.push(Operation::new(
            "Tf",
            vec![Object::Name(resource.into_bytes()), real(font.size)],
        ));
        Self::set_fill(page, color);
        page.operations.push(Operation::new(
            "Tm",
            vec![real(cos), real(sin), real(-sin), real(cos), real(x), real(y)],
        ));
        page.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        page.operations.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, line: &LineFormat) -> Result<(), SurfaceError> {
        self.stroke_path(&[from, to], false, line)
    }

    fn draw_rect(&mut self, rect: Rect, line: &LineFormat) -> Result<(), SurfaceError> {
        self.stroke_path(&rect.corners(), true, line)
    }

    fn draw_polyline(&mut self, points: &[Point], line: &LineFormat) -> Result<(), SurfaceError> {
        self.stroke_path(points, false, line)
    }

    fn save_state(&mut self) {
        self.saved.push(self.ctm);
    }

    fn restore_state(&mut self) -> Result<(), SurfaceError> {
        self.ctm = self.saved.pop().ok_or(SurfaceError::UnbalancedRestore)?;
        Ok(())
    }

    fn transform(&mut self, matrix: Matrix) {
        self.ctm = matrix.then(self.ctm);
    }
}
