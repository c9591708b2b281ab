use folio_chart::ChartError;
use folio_layout::LayoutError;
use folio_render_lopdf::RenderError;
use folio_traits::SurfaceError;
use thiserror::Error;

/// Errors raised while turning a document description into a PDF.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to parse document JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Chart failed: {0}")]
    Chart(#[from] ChartError),

    #[error("Drawing failed: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline is not configured: {0}")]
    Config(String),
}
