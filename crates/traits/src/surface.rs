//! The measuring and drawing contracts layout and charts are written against.

use crate::metrics::FontMetrics;
use folio_style::{Font, LineFormat};
use folio_types::{Color, Matrix, Point, Rect, Size};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Drawing requested before any page was started")]
    NoPage,

    #[error("restore_state called without a matching save_state")]
    UnbalancedRestore,

    #[error("Surface backend error: {0}")]
    Backend(String),
}

pub trait TextMeasurer {
    /// Size of `text` set on a single line.
    fn measure_string(&self, text: &str, font: &Font) -> Size;

    fn font_metrics(&self, font: &Font) -> FontMetrics;
}

/// A page-based output target. Coordinates are in points with the origin at the
/// top-left of the page and are mapped through the current transform.
pub trait DrawingSurface: TextMeasurer {
    fn begin_page(&mut self, size: Size) -> Result<(), SurfaceError>;

    /// Draws `text` with the top-left corner of its line box at `origin`.
    fn draw_string(
        &mut self,
        text: &str,
        font: &Font,
        color: Color,
        origin: Point,
    ) -> Result<(), SurfaceError>;

    /// Draws `text` centred in `rect`.
    fn draw_string_in(
        &mut self,
        text: &str,
        font: &Font,
        color: Color,
        rect: Rect,
    ) -> Result<(), SurfaceError> {
        let size = self.measure_string(text, font);
        let origin = Point::new(
            rect.x + (rect.width - size.width) / 2.0,
            rect.y + (rect.height - size.height) / 2.0,
        );
        self.draw_string(text, font, color, origin)
    }

    fn draw_line(&mut self, from: Point, to: Point, line: &LineFormat) -> Result<(), SurfaceError>;

    fn draw_rect(&mut self, rect: Rect, line: &LineFormat) -> Result<(), SurfaceError>;

    fn draw_polyline(&mut self, points: &[Point], line: &LineFormat) -> Result<(), SurfaceError> {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], line)?;
        }
        Ok(())
    }

    fn save_state(&mut self);

    fn restore_state(&mut self) -> Result<(), SurfaceError>;

    /// Concatenates `matrix` onto the current transform; it applies before
    /// whatever transform is already in effect.
    fn transform(&mut self, matrix: Matrix);
}
