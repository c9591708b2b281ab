//! An in-memory [`DrawingSurface`] that records what was drawn, with every
//! coordinate already mapped to page space.

use crate::metrics::{FontMetrics, FontMetricsProvider, MonospaceMetrics, measure_with};
use crate::surface::{DrawingSurface, SurfaceError, TextMeasurer};
use folio_style::{Font, LineFormat};
use folio_types::{Color, Matrix, Point, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        page: usize,
        text: String,
        font_size: f64,
        color: Color,
        /// Page-space position of the top-left corner of the line box.
        origin: Point,
        /// Page-space direction of the baseline, as a unit vector.
        direction: Point,
    },
    Line {
        page: usize,
        from: Point,
        to: Point,
        width: f64,
    },
    Rect {
        page: usize,
        corners: [Point; 4],
        width: f64,
    },
}

impl DrawCommand {
    pub fn page(&self) -> usize {
        match self {
            DrawCommand::Text { page, .. }
            | DrawCommand::Line { page, .. }
            | DrawCommand::Rect { page, .. } => *page,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    metrics: MonospaceMetrics,
    pages: Vec<Size>,
    commands: Vec<DrawCommand>,
    ctm: Matrix,
    saved: Vec<Matrix>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[Size] {
        &self.pages
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn current_transform(&self) -> Matrix {
        self.ctm
    }

    /// All drawn strings in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Page-space origin of the first drawn string equal to `needle`.
    pub fn text_origin(&self, needle: &str) -> Option<Point> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, origin, .. } if text == needle => Some(*origin),
            _ => None,
        })
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    fn current_page(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }
}

impl TextMeasurer for RecordingSurface {
    fn measure_string(&self, text: &str, font: &Font) -> Size {
        measure_with(&self.metrics, text, font)
    }

    fn font_metrics(&self, font: &Font) -> FontMetrics {
        self.metrics.metrics(font)
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_page(&mut self, size: Size) -> Result<(), SurfaceError> {
        self.pages.push(size);
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
        let start = self.ctm.transform_point(origin);
        let end = self.ctm.transform_point(origin.offset(1.0, 0.0));
        let (dx, dy) = (end.x - start.x, end.y - start.y);
        let length = dx.hypot(dy);
        let direction = if length > 0.0 {
            Point::new(dx / length, dy / length)
        } else {
            Point::new(1.0, 0.0)
        };
        self.commands.push(DrawCommand::Text {
            page: self.current_page(),
            text: text.to_string(),
            font_size: font.size,
            color,
            origin: start,
            direction,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, line: &LineFormat) -> Result<(), SurfaceError> {
        if !line.visible {
            return Ok(());
        }
        self.commands.push(DrawCommand::Line {
            page: self.current_page(),
            from: self.ctm.transform_point(from),
            to: self.ctm.transform_point(to),
            width: line.width,
        });
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, line: &LineFormat) -> Result<(), SurfaceError> {
        if !line.visible {
            return Ok(());
        }
        let mut corners = rect.corners();
        self.ctm.transform_points(&mut corners);
        self.commands.push(DrawCommand::Rect {
            page: self.current_page(),
            corners,
            width: line.width,
        });
        Ok(())
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
