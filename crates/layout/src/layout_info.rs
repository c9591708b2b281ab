use folio_style::{ElementAlignment, Margins};
use folio_types::Rect;

/// What an element asks of the formatter before it is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutRequest {
    pub horizontal_alignment: ElementAlignment,
    pub vertical_alignment: ElementAlignment,
    pub margins: Margins,
    /// Start a new area before this element unless the current one is empty.
    pub break_before: bool,
    /// Prefer moving the element to the next area over splitting it.
    pub keep_together: bool,
}

/// Placement record of one element during a format pass. Lent to the area
/// provider for positioning, then moved into the element's `RenderInfo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInfo {
    pub content_area: Rect,
    pub horizontal_alignment: ElementAlignment,
    pub vertical_alignment: ElementAlignment,
    pub margins: Margins,
    /// The rect of the area the element was placed in.
    pub area: Rect,
    pub break_before: bool,
    pub keep_together: bool,
}

impl LayoutInfo {
    pub fn new(request: &LayoutRequest, area: Rect) -> Self {
        Self {
            content_area: Rect::new(area.x, area.y, 0.0, 0.0),
            horizontal_alignment: request.horizontal_alignment,
            vertical_alignment: request.vertical_alignment,
            margins: request.margins,
            area,
            break_before: request.break_before,
            keep_together: request.keep_together,
        }
    }

    /// Vertical space taken in the flow: content height plus both margins.
    pub fn occupied_height(&self) -> f64 {
        self.margins.top + self.content_area.height + self.margins.bottom
    }
}
