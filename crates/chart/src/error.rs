use folio_layout::LayoutError;
use folio_traits::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Missing required reference: {0}")]
    MissingReference(&'static str),

    #[error("Invalid major tick {value} on the {axis}")]
    InvalidMajorTick { axis: &'static str, value: f64 },

    #[error("Invalid minor tick {value} on the {axis}")]
    InvalidMinorTick { axis: &'static str, value: f64 },

    #[error("Invalid scale [{minimum}, {maximum}] on the {axis}")]
    InvalidScale {
        axis: &'static str,
        minimum: f64,
        maximum: f64,
    },

    #[error("Unexpected content: {0}")]
    UnexpectedContent(String),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl From<ChartError> for LayoutError {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::Surface(e) => LayoutError::Surface(e),
            other => LayoutError::Content(other.to_string()),
        }
    }
}
