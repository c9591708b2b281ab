//! The area provider capability and the alignment rules shared by its
//! implementations.
use crate::area::{Area, FieldInfos};
use crate::layout_info::LayoutInfo;
use crate::render_info::RenderInfo;
use folio_style::ElementAlignment;
use folio_types::Rect;

/// Supplies areas to a formatter and decides how content is broken across and
/// positioned within them.
pub trait AreaProvider {
    /// The next region to fill. `None` ends the formatting session.
    fn next_area(&mut self) -> Option<Area>;

    /// The area `next_area` would return, without advancing. `None` when the
    /// provider does not support probing.
    fn probe_next_area(&self) -> Option<Area>;

    /// Whether a break must happen before the element described by `info`.
    fn is_area_break_before(&self, info: &LayoutInfo) -> bool;

    /// Receives the content of one area once it is closed.
    fn store_render_infos(&mut self, infos: Vec<RenderInfo>);

    /// Returns false when the formatter's default vertical position stands.
    fn position_vertically(&self, info: &mut LayoutInfo) -> bool;

    /// Returns false when the formatter's default horizontal position stands.
    fn position_horizontally(&self, info: &mut LayoutInfo) -> bool;

    fn area_field_infos(&self) -> FieldInfos;
}

/// Resolves horizontal alignment against `bounds`. Near only counts as a
/// reposition when there is a left margin to apply.
pub fn align_horizontally(info: &mut LayoutInfo, bounds: Rect) -> bool {
    let width = info.content_area.width;
    match info.horizontal_alignment {
        ElementAlignment::Near => {
            if info.margins.left != 0.0 {
                info.content_area.x = bounds.x + info.margins.left;
                true
            } else {
                false
            }
        }
        ElementAlignment::Far => {
            info.content_area.x = bounds.right() - width - info.margins.right;
            true
        }
        ElementAlignment::Center => {
            info.content_area.x = bounds.x + (bounds.width - width) / 2.0;
            true
        }
    }
}

/// Resolves Far and Center against a bounded `bounds`; Near keeps the flow
/// position.
pub fn align_vertically(info: &mut LayoutInfo, bounds: Rect) -> bool {
    if bounds.has_unbounded_height() {
        return false;
    }
    let height = info.content_area.height;
    match info.vertical_alignment {
        ElementAlignment::Near => false,
        ElementAlignment::Far => {
            info.content_area.y = bounds.bottom() - height - info.margins.bottom;
            true
        }
        ElementAlignment::Center => {
            info.content_area.y = bounds.y + (bounds.height - height) / 2.0;
            true
        }
    }
}
