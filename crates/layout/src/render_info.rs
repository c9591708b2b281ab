use crate::layout_info::LayoutInfo;
use std::any::Any;
use std::sync::Arc;

/// A single laid-out line of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f64,
}

/// Element specific result of formatting, carried to the draw pass.
#[derive(Debug, Clone, Default)]
pub enum FormatContent {
    #[default]
    Empty,
    Text {
        lines: Vec<TextLine>,
        line_height: f64,
    },
    /// Content of a nested frame, positioned relative to the frame's own
    /// content rect.
    Frame {
        render_infos: Vec<RenderInfo>,
        content_height: f64,
    },
    /// Data owned by elements defined outside this crate.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl FormatContent {
    pub fn downcast<T: Any>(&self) -> Option<&T> {
        match self {
            FormatContent::Opaque(data) => data.downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// Final placement and measured content of one element.
#[derive(Debug, Clone)]
pub struct RenderInfo {
    /// Position of the element in the formatted sequence.
    pub element_index: usize,
    pub kind: &'static str,
    pub layout_info: LayoutInfo,
    pub content: FormatContent,
}

impl RenderInfo {
    pub fn occupied_height(&self) -> f64 {
        self.layout_info.occupied_height()
    }
}

/// Summed occupied height of a list of render infos.
pub fn total_height(infos: &[RenderInfo]) -> f64 {
    infos.iter().map(RenderInfo::occupied_height).sum()
}
