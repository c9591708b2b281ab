use crate::area::{Area, FieldInfos};
use crate::element::{Element, FormatContext, Measured, ResumeState};
use crate::layout_info::{LayoutInfo, LayoutRequest};
use crate::provider::{AreaProvider, align_horizontally};
use crate::render_info::{FormatContent, RenderInfo};
use crate::LayoutError;
use folio_traits::DrawingSurface;
use folio_types::{Rect, Size};
use std::collections::VecDeque;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fixed-size element. With `rows` set it splits into rows of equal height.
#[derive(Debug, Clone, Default)]
pub struct TestElement {
    pub size: Size,
    pub rows: Option<usize>,
    pub request: LayoutRequest,
    pub fail: bool,
}

impl TestElement {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ..Default::default()
        }
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn request(mut self, request: LayoutRequest) -> Self {
        self.request = request;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn row_height(&self) -> f64 {
        self.size.height / self.rows.unwrap_or(1) as f64
    }
}

impl Element for TestElement {
    fn kind(&self) -> &'static str {
        "test"
    }

    fn layout_request(&self) -> LayoutRequest {
        self.request
    }

    fn format(
        &self,
        _ctx: &FormatContext<'_>,
        resume: Option<ResumeState>,
    ) -> Result<Measured, LayoutError> {
        if self.fail {
            return Err(LayoutError::Generic("refusing to format".to_string()));
        }
        let done = resume.map_or(0, |r| r.offset) as f64;
        Ok(Measured {
            size: Size::new(self.size.width, self.size.height - done * self.row_height()),
            content: FormatContent::Empty,
        })
    }

    fn split(
        &self,
        ctx: &FormatContext<'_>,
        measured: &Measured,
        resume: Option<ResumeState>,
    ) -> Option<(Measured, ResumeState)> {
        self.rows?;
        let row = self.row_height();
        let fitting = (ctx.available.height / row).floor() as usize;
        let left = (measured.size.height / row).round() as usize;
        if fitting == 0 || fitting >= left {
            return None;
        }
        let head = Measured {
            size: Size::new(self.size.width, fitting as f64 * row),
            content: FormatContent::Empty,
        };
        Some((
            head,
            ResumeState {
                offset: resume.map_or(0, |r| r.offset) + fitting,
                ..Default::default()
            },
        ))
    }

    fn draw(&self, _surface: &mut dyn DrawingSurface, _info: &RenderInfo) -> Result<(), LayoutError> {
        Ok(())
    }
}

pub fn boxed(elements: Vec<TestElement>) -> Vec<Box<dyn Element>> {
    elements
        .into_iter()
        .map(|e| Box::new(e) as Box<dyn Element>)
        .collect()
}

/// Hands out a fixed list of areas and records what it is given.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    areas: VecDeque<Rect>,
    pub probing: bool,
    pub stored: Vec<Vec<RenderInfo>>,
    pub requests: usize,
}

impl ScriptedProvider {
    pub fn new(areas: Vec<Rect>) -> Self {
        Self {
            areas: areas.into(),
            ..Default::default()
        }
    }

    pub fn with_probing(mut self) -> Self {
        self.probing = true;
        self
    }

    pub fn stored_indices(&self) -> Vec<Vec<usize>> {
        self.stored
            .iter()
            .map(|infos| infos.iter().map(|i| i.element_index).collect())
            .collect()
    }
}

impl AreaProvider for ScriptedProvider {
    fn next_area(&mut self) -> Option<Area> {
        self.requests += 1;
        self.areas.pop_front().map(Area::new)
    }

    fn probe_next_area(&self) -> Option<Area> {
        if self.probing {
            self.areas.front().copied().map(Area::new)
        } else {
            None
        }
    }

    fn is_area_break_before(&self, info: &LayoutInfo) -> bool {
        info.break_before
    }

    fn store_render_infos(&mut self, infos: Vec<RenderInfo>) {
        self.stored.push(infos);
    }

    fn position_vertically(&self, _info: &mut LayoutInfo) -> bool {
        false
    }

    fn position_horizontally(&self, info: &mut LayoutInfo) -> bool {
        let area = info.area;
        align_horizontally(info, area)
    }

    fn area_field_infos(&self) -> FieldInfos {
        FieldInfos {
            page_number: self.stored.len() + 1,
            area_index: self.requests.saturating_sub(1),
        }
    }
}
