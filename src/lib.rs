//! Lays out documents described in JSON and renders them to PDF.
//!
//! ```no_run
//! use folio::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_document_file("report.json")?
//!     .build()?;
//! let report = pipeline.generate_to_file("report.pdf")?;
//! println!("{} pages", report.pages);
//! # Ok::<(), folio::PipelineError>(())
//! ```

pub mod document;
pub mod error;
pub mod pipeline;

pub use document::{DocumentSpec, ElementSpec, PageSpec};
pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, PipelineBuilder, RenderReport, render_document};

pub use folio_chart as chart;
pub use folio_layout as layout;
pub use folio_render_lopdf as render;
pub use folio_style as style;
pub use folio_types as types;
