pub mod pdf_assertions;

use folio::{PipelineBuilder, PipelineError, RenderReport};
use lopdf::Document as LopdfDocument;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A rendered document reloaded with lopdf for inspection.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub report: RenderReport,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>, report: RenderReport) -> Result<Self, lopdf::Error> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc, report })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs `document` through the pipeline and loads the result.
pub fn generate(document: &Value) -> Result<GeneratedPdf, PipelineError> {
    init_logger();
    let source = serde_json::to_string(document)?;
    let (bytes, report) = PipelineBuilder::new()
        .with_document_source(&source)?
        .build()?
        .generate()?;
    GeneratedPdf::from_bytes(bytes, report)
        .map_err(|e| PipelineError::Config(format!("generated PDF does not load: {}", e)))
}
