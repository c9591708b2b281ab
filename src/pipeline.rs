use crate::document::DocumentSpec;
use crate::error::PipelineError;
use folio_layout::{Element, LayoutConfig, LayoutError, PageContent, TopDownFormatter};
use folio_render_lopdf::PdfSurface;
use folio_traits::DrawingSurface;
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// What a run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub pages: usize,
    /// Top-level elements placed completely.
    pub formatted: usize,
    /// Top-level elements lost because no area was left for them.
    pub dropped: usize,
    pub complete: bool,
}

/// Builder for a [`DocumentPipeline`].
#[derive(Default)]
pub struct PipelineBuilder {
    document: Option<DocumentSpec>,
    config: LayoutConfig,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the document description from a JSON file.
    pub fn with_document_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read document from '{}': {}", path.display(), e),
            ))
        })?;
        self.with_document_source(&source)
    }

    pub fn with_document_source(mut self, source: &str) -> Result<Self, PipelineError> {
        self.document = Some(DocumentSpec::from_json(source)?);
        Ok(self)
    }

    pub fn with_document(mut self, document: DocumentSpec) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        let document = self
            .document
            .ok_or_else(|| PipelineError::Config("no document was provided".to_string()))?;
        Ok(DocumentPipeline {
            document,
            config: self.config,
        })
    }
}

/// Formats a document into pages and writes them as PDF.
pub struct DocumentPipeline {
    document: DocumentSpec,
    config: LayoutConfig,
}

impl DocumentPipeline {
    pub fn document(&self) -> &DocumentSpec {
        &self.document
    }

    /// Renders the document into memory.
    pub fn generate(&self) -> Result<(Vec<u8>, RenderReport), PipelineError> {
        let (surface, report) = self.render()?;
        Ok((surface.finish()?, report))
    }

    pub fn generate_to_writer<W: Write>(&self, writer: &mut W) -> Result<RenderReport, PipelineError> {
        let (surface, report) = self.render()?;
        surface.write_to(writer)?;
        Ok(report)
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderReport, PipelineError> {
        let output_path = path.as_ref();
        if let Some(parent_dir) = output_path.parent() {
            fs::create_dir_all(parent_dir)?;
        }
        let file = fs::File::create(output_path)?;
        let mut writer = io::BufWriter::new(file);
        let report = self.generate_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(report)
    }

    fn render(&self) -> Result<(PdfSurface, RenderReport), PipelineError> {
        let page = &self.document.page;
        let page_size = page.dimensions();
        let elements = self.document.build_elements();
        let mut flow = page.page_flow();
        let mut surface = PdfSurface::new();

        let summary = TopDownFormatter::with_config(&mut flow, &elements, self.config)
            .format_on_areas(&surface, true)?;
        if !summary.is_complete() {
            warn!(
                "{} of {} elements did not fit and were dropped.",
                summary.dropped, summary.total
            );
        }

        let pages = flow.pages();
        for content in &pages {
            draw_page(&mut surface, &elements, content)?;
        }
        if pages.is_empty() {
            surface.begin_page(page_size)?;
        }

        let report = RenderReport {
            pages: surface.page_count(),
            formatted: summary.formatted,
            dropped: summary.dropped,
            complete: summary.is_complete(),
        };
        info!(
            "Rendered {} elements onto {} pages.",
            report.formatted, report.pages
        );
        Ok((surface, report))
    }
}

fn draw_page(
    surface: &mut dyn DrawingSurface,
    elements: &[Box<dyn Element>],
    content: &PageContent,
) -> Result<(), PipelineError> {
    debug!("Drawing page {} with {} areas.", content.index + 1, content.areas.len());
    surface.begin_page(content.size)?;
    for area in &content.areas {
        for info in &area.render_infos {
            let element = elements.get(info.element_index).ok_or_else(|| {
                LayoutError::Content(format!("no element {} to draw", info.element_index))
            })?;
            element
                .draw(surface, info)
                .map_err(|source| LayoutError::Element {
                    index: info.element_index,
                    kind: element.kind(),
                    source: Box::new(source),
                })?;
        }
    }
    Ok(())
}

/// Renders a JSON document straight to PDF bytes.
pub fn render_document(source: &str) -> Result<(Vec<u8>, RenderReport), PipelineError> {
    PipelineBuilder::new()
        .with_document_source(source)?
        .build()?
        .generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_layout::{
        AreaContent, Block, FormatContent, LayoutInfo, LayoutRequest, Paragraph, RenderInfo,
    };
    use folio_traits::RecordingSurface;
    use folio_types::{Rect, Size};

    #[test]
    fn building_without_a_document_fails() {
        assert!(matches!(
            PipelineBuilder::new().build(),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn empty_document_still_has_a_page() {
        let (bytes, report) = render_document("{}").unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert_eq!(report.pages, 1);
        assert_eq!(report.formatted, 0);
        assert!(report.complete);
    }

    #[test]
    fn page_limit_drops_the_tail() {
        let (_, report) = render_document(
            r#"{"page": {"size": {"width": 200, "height": 100}, "margins": 0, "maxPages": 2},
                "elements": [{"type": "block", "width": 50, "height": 60},
                             {"type": "block", "width": 50, "height": 60},
                             {"type": "block", "width": 50, "height": 60}]}"#,
        )
        .unwrap();
        assert_eq!(
            report,
            RenderReport {
                pages: 2,
                formatted: 2,
                dropped: 1,
                complete: false,
            }
        );
    }

    #[test]
    fn element_errors_carry_their_index() {
        let err = render_document(
            r#"{"elements": [{"type": "paragraph", "text": "ok"},
                             {"type": "textFrame", "orientation": "upward"}]}"#,
        )
        .unwrap_err();
        match err {
            PipelineError::Layout(folio_layout::LayoutError::Element { index, kind, .. }) => {
                assert_eq!((index, kind), (1, "textFrame"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn draw_errors_carry_the_element_index() {
        let elements: Vec<Box<dyn Element>> = vec![
            Box::new(Block::new(10.0, 10.0)),
            Box::new(Paragraph::new("text")),
        ];
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let info = |element_index: usize, kind: &'static str| RenderInfo {
            element_index,
            kind,
            layout_info: LayoutInfo::new(&LayoutRequest::default(), rect),
            content: FormatContent::Empty,
        };
        let content = PageContent {
            index: 0,
            size: Size::new(100.0, 100.0),
            areas: vec![AreaContent {
                column: 0,
                rect,
                render_infos: vec![info(0, "block"), info(1, "paragraph")],
            }],
        };

        let mut surface = RecordingSurface::new();
        match draw_page(&mut surface, &elements, &content) {
            Err(PipelineError::Layout(LayoutError::Element { index, kind, source })) => {
                assert_eq!((index, kind), (1, "paragraph"));
                assert!(matches!(*source, LayoutError::Content(_)));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
