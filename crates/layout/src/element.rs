use crate::area::FieldInfos;
use crate::config::LayoutConfig;
use crate::layout_info::LayoutRequest;
use crate::render_info::{FormatContent, RenderInfo};
use crate::LayoutError;
use folio_traits::{DrawingSurface, TextMeasurer};
use folio_types::Size;
use std::fmt::Debug;

/// Everything an element may consult while measuring itself.
pub struct FormatContext<'a> {
    pub measurer: &'a dyn TextMeasurer,
    /// Width left after the element's margins, and the height budget left in
    /// the current area (margins excluded). Either may be `UNBOUNDED`.
    pub available: Size,
    pub field_infos: FieldInfos,
    pub config: &'a LayoutConfig,
}

/// Result of formatting an element.
#[derive(Debug, Clone, Default)]
pub struct Measured {
    pub size: Size,
    pub content: FormatContent,
}

/// Where a split element picks up in the next area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResumeState {
    pub offset: usize,
    /// Page number the element was first formatted with. Fields keep this
    /// value in later areas so that the remainder lines up with the head.
    pub page_number: Option<usize>,
}

pub trait Element: Debug {
    fn kind(&self) -> &'static str;

    fn layout_request(&self) -> LayoutRequest;

    /// Measures the element, or its remainder when `resume` is set.
    fn format(
        &self,
        ctx: &FormatContext<'_>,
        resume: Option<ResumeState>,
    ) -> Result<Measured, LayoutError>;

    /// Cuts a measured element that does not fit `ctx.available.height` into a
    /// head that does and the state to resume the rest from. `None` means the
    /// element cannot be split here.
    fn split(
        &self,
        _ctx: &FormatContext<'_>,
        _measured: &Measured,
        _resume: Option<ResumeState>,
    ) -> Option<(Measured, ResumeState)> {
        None
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, info: &RenderInfo) -> Result<(), LayoutError>;
}
