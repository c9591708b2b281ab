//! JSON description of a document and its conversion into layout elements.
use crate::error::PipelineError;
use folio_chart::{Axis, Chart, ScaleOverrides, Series};
use folio_chart::defaults::DEFAULT_PLOT_PADDING;
use folio_layout::{Block, Element, FloatingFrame, LayoutRequest, PageFlow, Paragraph, TextFrame};
use folio_style::{ElementAlignment, Font, LineFormat, Margins, PageSize, TextOrientation};
use folio_types::{Color, Size};
use serde::Deserialize;

/// Default page margin: half an inch.
pub const DEFAULT_PAGE_MARGIN: f64 = 36.0;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSpec {
    pub size: PageSize,
    pub margins: Margins,
    /// Columns per page. Zero is treated as one.
    pub columns: usize,
    pub column_gap: f64,
    /// Elements that do not fit within this many pages are dropped.
    pub max_pages: Option<usize>,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margins: Margins::all(DEFAULT_PAGE_MARGIN),
            columns: 1,
            column_gap: 12.0,
            max_pages: None,
        }
    }
}

impl PageSpec {
    pub fn dimensions(&self) -> Size {
        self.size.dimensions()
    }

    pub fn page_flow(&self) -> PageFlow {
        let flow = PageFlow::with_columns(self.dimensions(), self.margins, self.columns, self.column_gap);
        match self.max_pages {
            Some(max) => flow.with_max_pages(max),
            None => flow,
        }
    }
}

/// Placement requests shared by every element kind.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSpec {
    pub horizontal_alignment: ElementAlignment,
    pub vertical_alignment: ElementAlignment,
    pub margins: Margins,
    pub break_before: bool,
    pub keep_together: bool,
}

impl From<LayoutSpec> for LayoutRequest {
    fn from(spec: LayoutSpec) -> Self {
        LayoutRequest {
            horizontal_alignment: spec.horizontal_alignment,
            vertical_alignment: spec.vertical_alignment,
            margins: spec.margins,
            break_before: spec.break_before,
            keep_together: spec.keep_together,
        }
    }
}

fn default_line_spacing() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphSpec {
    pub text: String,
    /// Falls back to the document font.
    #[serde(default)]
    pub font: Option<Font>,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub text_align: ElementAlignment,
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f64,
    #[serde(flatten)]
    pub layout: LayoutSpec,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSpec {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub border: Option<LineFormat>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub font: Option<Font>,
    #[serde(default)]
    pub color: Color,
    #[serde(flatten)]
    pub layout: LayoutSpec,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFrameSpec {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub padding: Margins,
    #[serde(default)]
    pub border: Option<LineFormat>,
    #[serde(default)]
    pub orientation: TextOrientation,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
    #[serde(flatten)]
    pub layout: LayoutSpec,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingFrameSpec {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: Margins,
    #[serde(default)]
    pub border: Option<LineFormat>,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
    #[serde(flatten)]
    pub layout: LayoutSpec,
}

fn default_x_axis() -> Option<Axis> {
    Some(Axis::default())
}

fn default_plot_border() -> Option<LineFormat> {
    Some(LineFormat::default())
}

fn default_plot_padding() -> Margins {
    Margins::all(DEFAULT_PLOT_PADDING)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub series: Vec<Series>,
    /// `null` removes the axis, which the chart reports as an error.
    #[serde(default = "default_x_axis")]
    pub x_axis: Option<Axis>,
    #[serde(default)]
    pub x_values: Vec<Vec<String>>,
    #[serde(default)]
    pub y_axis: ScaleOverrides,
    #[serde(default = "default_plot_padding")]
    pub padding: Margins,
    #[serde(default = "default_plot_border")]
    pub plot_border: Option<LineFormat>,
    #[serde(flatten)]
    pub layout: LayoutSpec,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementSpec {
    Paragraph(ParagraphSpec),
    Block(BlockSpec),
    TextFrame(TextFrameSpec),
    FloatingFrame(FloatingFrameSpec),
    Chart(ChartSpec),
}

impl ElementSpec {
    /// Builds the layout element, using `default_font` where no font is given.
    pub fn build(&self, default_font: &Font) -> Box<dyn Element> {
        match self {
            ElementSpec::Paragraph(spec) => {
                let mut paragraph = Paragraph::new(spec.text.clone())
                    .with_font(spec.font.clone().unwrap_or_else(|| default_font.clone()))
                    .with_layout(spec.layout.into());
                paragraph.color = spec.color;
                paragraph.text_align = spec.text_align;
                paragraph.line_spacing = spec.line_spacing;
                Box::new(paragraph)
            }
            ElementSpec::Block(spec) => {
                let mut block = Block::new(spec.width, spec.height).with_layout(spec.layout.into());
                block.border = spec.border;
                block.caption = spec.caption.clone();
                block.font = spec.font.clone().unwrap_or_else(|| default_font.clone());
                block.color = spec.color;
                Box::new(block)
            }
            ElementSpec::TextFrame(spec) => {
                let children = spec.children.iter().map(|c| c.build(default_font)).collect();
                let mut frame = TextFrame::new(0.0, children);
                frame.width = spec.width;
                frame.height = spec.height;
                frame.padding = spec.padding;
                frame.border = spec.border;
                frame.orientation = spec.orientation;
                frame.layout = spec.layout.into();
                Box::new(frame)
            }
            ElementSpec::FloatingFrame(spec) => {
                let children = spec.children.iter().map(|c| c.build(default_font)).collect();
                let mut frame = FloatingFrame::new(spec.width, spec.height, children);
                frame.padding = spec.padding;
                frame.border = spec.border;
                frame.layout = spec.layout.into();
                Box::new(frame)
            }
            ElementSpec::Chart(spec) => {
                let mut chart = Chart::new(spec.width, spec.height, spec.series.clone());
                chart.x_axis = spec.x_axis.clone();
                chart.x_values = spec.x_values.clone();
                chart.y_range = spec.y_axis;
                chart.padding = spec.padding;
                chart.plot_border = spec.plot_border;
                chart.layout = spec.layout.into();
                Box::new(chart)
            }
        }
    }
}

/// Top level of a document file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentSpec {
    pub page: PageSpec,
    pub default_font: Font,
    pub elements: Vec<ElementSpec>,
}

impl DocumentSpec {
    pub fn from_json(source: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn build_elements(&self) -> Vec<Box<dyn Element>> {
        self.elements
            .iter()
            .map(|e| e.build(&self.default_font))
            .collect()
    }
}
