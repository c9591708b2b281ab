use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write PDF: {0}")]
    Io(#[from] std::io::Error),

    /// Raised by lopdf while encoding content streams or serializing.
    #[error("PDF encoding failed: {0}")]
    Pdf(String),

    #[error("Cannot write a PDF without pages")]
    NoPages,
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
