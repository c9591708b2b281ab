//! Style values shared by layout, charts and rendering.
pub mod alignment;
pub mod dimension;
pub mod font;
pub mod line;
pub mod parsers;

pub use alignment::{ElementAlignment, TextOrientation};
pub use dimension::{Margins, PageSize};
pub use font::{Font, FontStyle, FontWeight};
pub use line::{DashStyle, LineFormat};
pub use parsers::StyleParseError;
