use crate::area::{Area, FieldInfos};
use crate::layout_info::LayoutInfo;
use crate::provider::{AreaProvider, align_horizontally, align_vertically};
use crate::render_info::RenderInfo;
use folio_types::Rect;

/// One bounded area anchored on the page, such as the inside of a floating
/// shape. Both axes honour the element's alignment; content that does not fit
/// is dropped by the formatter.
#[derive(Debug, Clone)]
pub struct FloatingArea {
    rect: Rect,
    yielded: bool,
    render_infos: Vec<RenderInfo>,
    field_infos: FieldInfos,
}

impl FloatingArea {
    pub fn new(rect: Rect, field_infos: FieldInfos) -> Self {
        Self {
            rect,
            yielded: false,
            render_infos: Vec::new(),
            field_infos,
        }
    }

    /// Distance from the top of the rect to the lowest placed element,
    /// bottom margins included.
    pub fn content_height(&self) -> f64 {
        self.render_infos
            .iter()
            .map(|i| i.layout_info.content_area.bottom() + i.layout_info.margins.bottom - self.rect.y)
            .fold(0.0, f64::max)
    }

    pub fn into_render_infos(self) -> Vec<RenderInfo> {
        self.render_infos
    }
}

impl AreaProvider for FloatingArea {
    fn next_area(&mut self) -> Option<Area> {
        if self.yielded {
            return None;
        }
        self.yielded = true;
        Some(Area::new(self.rect))
    }

    fn probe_next_area(&self) -> Option<Area> {
        None
    }

    fn is_area_break_before(&self, _info: &LayoutInfo) -> bool {
        false
    }

    fn store_render_infos(&mut self, infos: Vec<RenderInfo>) {
        self.render_infos.extend(infos);
    }

    fn position_vertically(&self, info: &mut LayoutInfo) -> bool {
        align_vertically(info, self.rect)
    }

    fn position_horizontally(&self, info: &mut LayoutInfo) -> bool {
        align_horizontally(info, self.rect)
    }

    fn area_field_infos(&self) -> FieldInfos {
        self.field_infos
    }
}
