use folio_traits::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Area {index} has an invalid extent of {width:.2} x {height:.2}.")]
    InvalidArea { index: usize, width: f64, height: f64 },
    #[error("Element {index} ({kind}) failed: {source}")]
    Element {
        index: usize,
        kind: &'static str,
        source: Box<LayoutError>,
    },
    #[error("A {element} requires an explicit {dimension}.")]
    MissingDimension {
        element: &'static str,
        dimension: &'static str,
    },
    #[error("Invalid {dimension} {value:.2} for a {element}.")]
    InvalidDimension {
        element: &'static str,
        dimension: &'static str,
        value: f64,
    },
    #[error("Drawing failed: {0}")]
    Surface(#[from] SurfaceError),
    #[error("Content error: {0}")]
    Content(String),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod area;
pub mod config;
pub mod element;
pub mod elements;
pub mod formatter;
pub mod layout_info;
pub mod provider;
pub mod providers;
pub mod render_info;
pub mod text;

pub use self::area::{Area, FieldInfos};
pub use self::config::LayoutConfig;
pub use self::element::{Element, FormatContext, Measured, ResumeState};
pub use self::elements::{Block, FloatingFrame, Paragraph, TextFrame};
pub use self::formatter::{FormatSummary, FormatterState, TopDownFormatter};
pub use self::layout_info::{LayoutInfo, LayoutRequest};
pub use self::provider::AreaProvider;
pub use self::providers::{AreaContent, FloatingArea, PageContent, PageFlow, TextFrameArea};
pub use self::render_info::{FormatContent, RenderInfo, TextLine, total_height};

#[cfg(test)]
mod test_utils;
