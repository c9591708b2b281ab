use crate::area::{Area, FieldInfos};
use crate::layout_info::LayoutInfo;
use crate::provider::{AreaProvider, align_horizontally};
use crate::render_info::RenderInfo;
use folio_style::Margins;
use folio_types::{Rect, Size};
use log::debug;

#[derive(Debug, Clone)]
pub struct AreaContent {
    pub column: usize,
    pub rect: Rect,
    pub render_infos: Vec<RenderInfo>,
}

#[derive(Debug, Clone)]
pub struct PageContent {
    /// Zero-based page index.
    pub index: usize,
    pub size: Size,
    pub areas: Vec<AreaContent>,
}

/// Paginating provider. Every page offers `columns` areas side by side inside
/// the page margins; pages are produced on demand.
#[derive(Debug, Clone)]
pub struct PageFlow {
    page_size: Size,
    margins: Margins,
    columns: usize,
    column_gap: f64,
    max_pages: Option<usize>,
    /// Index of the last area handed out.
    current: Option<usize>,
    pages: Vec<PageContent>,
}

impl PageFlow {
    pub fn new(page_size: Size, margins: Margins) -> Self {
        Self::with_columns(page_size, margins, 1, 0.0)
    }

    /// A column count of zero is treated as one.
    pub fn with_columns(page_size: Size, margins: Margins, columns: usize, column_gap: f64) -> Self {
        Self {
            page_size,
            margins,
            columns: columns.max(1),
            column_gap,
            max_pages: None,
            current: None,
            pages: Vec::new(),
        }
    }

    /// Stops offering areas once `max_pages` pages have been started.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    /// Geometry of area `index`: column `index % columns` of page
    /// `index / columns`, in page coordinates.
    pub fn area_rect(&self, index: usize) -> Rect {
        let column = index % self.columns;
        let body_width = self.page_size.width - self.margins.horizontal();
        let gaps = self.column_gap * (self.columns - 1) as f64;
        let width = (body_width - gaps) / self.columns as f64;
        Rect::new(
            self.margins.left + column as f64 * (width + self.column_gap),
            self.margins.top,
            width,
            self.page_size.height - self.margins.vertical(),
        )
    }

    fn next_index(&self) -> usize {
        self.current.map_or(0, |i| i + 1)
    }

    fn is_within_limit(&self, index: usize) -> bool {
        self.max_pages.is_none_or(|max| index / self.columns < max)
    }

    /// Pages handed out so far. Pages whose areas received no content are
    /// included so that forced breaks keep their blank pages.
    pub fn pages(&self) -> Vec<PageContent> {
        self.pages.clone()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl AreaProvider for PageFlow {
    fn next_area(&mut self) -> Option<Area> {
        let index = self.next_index();
        if !self.is_within_limit(index) {
            debug!("Page limit reached after {} pages", self.pages.len());
            return None;
        }
        let page = index / self.columns;
        if page >= self.pages.len() {
            debug!("Starting page {}", page + 1);
            self.pages.push(PageContent {
                index: page,
                size: self.page_size,
                areas: Vec::new(),
            });
        }
        self.current = Some(index);
        Some(Area::new(self.area_rect(index)))
    }

    fn probe_next_area(&self) -> Option<Area> {
        let index = self.next_index();
        self.is_within_limit(index)
            .then(|| Area::new(self.area_rect(index)))
    }

    fn is_area_break_before(&self, info: &LayoutInfo) -> bool {
        info.break_before
    }

    fn store_render_infos(&mut self, infos: Vec<RenderInfo>) {
        let Some(index) = self.current else {
            return;
        };
        let rect = self.area_rect(index);
        if let Some(page) = self.pages.get_mut(index / self.columns) {
            page.areas.push(AreaContent {
                column: index % self.columns,
                rect,
                render_infos: infos,
            });
        }
    }

    fn position_vertically(&self, _info: &mut LayoutInfo) -> bool {
        false
    }

    fn position_horizontally(&self, info: &mut LayoutInfo) -> bool {
        let column = info.area;
        align_horizontally(info, column)
    }

    fn area_field_infos(&self) -> FieldInfos {
        let index = self.current.unwrap_or(0);
        FieldInfos {
            page_number: index / self.columns + 1,
            area_index: index,
        }
    }
}
