use crate::area::{Area, FieldInfos};
use crate::layout_info::LayoutInfo;
use crate::provider::{AreaProvider, align_horizontally};
use crate::render_info::{RenderInfo, total_height};
use folio_style::{Margins, TextOrientation};
use folio_types::{Rect, Size, UNBOUNDED};

/// Which frame extent and which margins feed each part of the content rect,
/// in the frame's unrotated text coordinates.
struct MarginMapping {
    /// Extent along which lines run.
    flow_extent: fn(Size) -> f64,
    x_offset: fn(&Margins) -> f64,
    y_offset: fn(&Margins) -> f64,
    trailing: fn(&Margins) -> f64,
    cross_trailing: fn(&Margins) -> f64,
}

const HORIZONTAL: MarginMapping = MarginMapping {
    flow_extent: |s| s.width,
    x_offset: |m| m.left,
    y_offset: |m| m.top,
    trailing: |m| m.right,
    cross_trailing: |m| m.bottom,
};

const UPWARD: MarginMapping = MarginMapping {
    flow_extent: |s| s.height,
    x_offset: |m| m.bottom,
    y_offset: |m| m.left,
    trailing: |m| m.top,
    cross_trailing: |m| m.right,
};

const DOWNWARD: MarginMapping = MarginMapping {
    flow_extent: |s| s.height,
    x_offset: |m| m.top,
    y_offset: |m| m.right,
    trailing: |m| m.bottom,
    cross_trailing: |m| m.left,
};

fn mapping(orientation: TextOrientation) -> &'static MarginMapping {
    match orientation {
        TextOrientation::Horizontal | TextOrientation::HorizontalRotatedFarEast => &HORIZONTAL,
        TextOrientation::Upward => &UPWARD,
        TextOrientation::Downward => &DOWNWARD,
    }
}

/// A single area covering the inside of a text frame. The area grows
/// downwards without limit; the frame sizes itself from the content height.
#[derive(Debug, Clone)]
pub struct TextFrameArea {
    rect: Rect,
    cross_inset: f64,
    yielded: bool,
    render_infos: Vec<RenderInfo>,
    field_infos: FieldInfos,
}

impl TextFrameArea {
    /// `frame` is the declared frame size on the page. Half of `border_width`
    /// is inset on every side since borders are stroked on the frame edge.
    pub fn new(
        frame: Size,
        margins: &Margins,
        border_width: f64,
        orientation: TextOrientation,
        field_infos: FieldInfos,
    ) -> Self {
        let map = mapping(orientation);
        let half_border = border_width / 2.0;
        let x = (map.x_offset)(margins) + half_border;
        let y = (map.y_offset)(margins) + half_border;
        let width = (map.flow_extent)(frame) - x - (map.trailing)(margins) - half_border;
        Self {
            rect: Rect::new(x, y, width, UNBOUNDED),
            cross_inset: y + (map.cross_trailing)(margins) + half_border,
            yielded: false,
            render_infos: Vec::new(),
            field_infos,
        }
    }

    pub fn content_rect(&self) -> Rect {
        self.rect
    }

    /// Sum of the occupied heights of everything stored so far.
    pub fn content_height(&self) -> f64 {
        total_height(&self.render_infos)
    }

    /// Frame extent across the lines needed to show the stored content.
    pub fn required_cross_extent(&self) -> f64 {
        self.content_height() + self.cross_inset
    }

    pub fn render_infos(&self) -> Vec<RenderInfo> {
        self.render_infos.clone()
    }

    pub fn into_render_infos(self) -> Vec<RenderInfo> {
        self.render_infos
    }
}

impl AreaProvider for TextFrameArea {
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

    fn position_vertically(&self, _info: &mut LayoutInfo) -> bool {
        false
    }

    fn position_horizontally(&self, info: &mut LayoutInfo) -> bool {
        align_horizontally(info, self.rect)
    }

    fn area_field_infos(&self) -> FieldInfos {
        self.field_infos
    }
}
