//! PDF output for folio.
//!
//! [`PdfSurface`] implements the drawing surface on top of `lopdf`, using the
//! standard 14 fonts with WinAnsi encoding.

mod error;
mod fonts;
mod surface;

pub use error::RenderError;
pub use fonts::{base_font_name, to_win_ansi};
pub use surface::PdfSurface;
