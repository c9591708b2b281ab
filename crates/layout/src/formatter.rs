//! Top-down flow formatting of an element sequence into provider areas.
use crate::area::Area;
use crate::config::LayoutConfig;
use crate::element::{Element, FormatContext, Measured, ResumeState};
use crate::layout_info::LayoutInfo;
use crate::provider::AreaProvider;
use crate::render_info::RenderInfo;
use crate::LayoutError;
use folio_traits::TextMeasurer;
use folio_types::{Size, UNBOUNDED};
use log::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterState {
    NotStarted,
    FormattingArea,
    /// The session is over, either because every element was placed or
    /// because the provider ran out of areas.
    Exhausted,
}

/// Outcome of a formatting session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSummary {
    /// Areas requested from the provider.
    pub areas: usize,
    /// Elements placed completely.
    pub formatted: usize,
    pub total: usize,
    /// Elements never placed because the provider ran out of areas. A split
    /// element whose tail was lost counts as dropped.
    pub dropped: usize,
}

impl FormatSummary {
    pub fn is_complete(&self) -> bool {
        self.dropped == 0
    }
}

pub struct TopDownFormatter<'a> {
    provider: &'a mut dyn AreaProvider,
    elements: &'a [Box<dyn Element>],
    config: LayoutConfig,
    state: FormatterState,
    cursor: usize,
    resume: Option<ResumeState>,
}

enum Fit {
    Place(Measured),
    Split(Measured, ResumeState),
    CloseArea,
}

impl<'a> TopDownFormatter<'a> {
    pub fn new(provider: &'a mut dyn AreaProvider, elements: &'a [Box<dyn Element>]) -> Self {
        Self::with_config(provider, elements, LayoutConfig::default())
    }

    pub fn with_config(
        provider: &'a mut dyn AreaProvider,
        elements: &'a [Box<dyn Element>],
        config: LayoutConfig,
    ) -> Self {
        Self {
            provider,
            elements,
            config,
            state: FormatterState::NotStarted,
            cursor: 0,
            resume: None,
        }
    }

    pub fn state(&self) -> FormatterState {
        self.state
    }

    /// Flows every element into the provider's areas.
    ///
    /// With `top_level_breakable` set, elements that overflow an area may be
    /// moved whole (keep-together) or split across areas. Otherwise an element
    /// that does not fit closes the area, unless the area is empty, in which
    /// case it is placed anyway and overflows the bottom.
    pub fn format_on_areas(
        &mut self,
        measurer: &dyn TextMeasurer,
        top_level_breakable: bool,
    ) -> Result<FormatSummary, LayoutError> {
        let total = self.elements.len();
        let mut areas = 0;

        while self.cursor < total {
            let Some(area) = self.provider.next_area() else {
                debug!(
                    "Provider exhausted after {} areas; dropping {} of {} elements.",
                    areas,
                    total - self.cursor,
                    total
                );
                break;
            };
            area.validate(areas)?;
            self.state = FormatterState::FormattingArea;
            debug!("Formatting area {} at {:?}", areas, area.rect);
            areas += 1;

            let infos = self.fill_area(area, measurer, top_level_breakable)?;
            if !infos.is_empty() {
                self.provider.store_render_infos(infos);
            }
        }

        self.state = FormatterState::Exhausted;
        Ok(FormatSummary {
            areas,
            formatted: self.cursor,
            total,
            dropped: total - self.cursor,
        })
    }

    fn fill_area(
        &mut self,
        area: Area,
        measurer: &dyn TextMeasurer,
        breakable: bool,
    ) -> Result<Vec<RenderInfo>, LayoutError> {
        let elements = self.elements;
        let rect = area.rect;
        let unbounded = rect.has_unbounded_height();
        let tolerance = self.config.fit_tolerance;
        let mut infos: Vec<RenderInfo> = Vec::new();
        let mut cursor_y = rect.y;

        while self.cursor < elements.len() {
            let index = self.cursor;
            let element = &elements[index];
            let request = element.layout_request();
            let mut info = LayoutInfo::new(&request, rect);
            let resuming = self.resume.is_some();
            if resuming {
                info.margins.top = 0.0;
            }

            if !infos.is_empty() && !resuming && self.provider.is_area_break_before(&info) {
                debug!("Break requested before element {} ({}).", index, element.kind());
                break;
            }

            let remaining = if unbounded { UNBOUNDED } else { rect.bottom() - cursor_y };
            let available = Size::new(
                (rect.width - info.margins.horizontal()).max(0.0),
                if unbounded {
                    UNBOUNDED
                } else {
                    (remaining - info.margins.vertical()).max(0.0)
                },
            );
            let ctx = FormatContext {
                measurer,
                available,
                field_infos: self.provider.area_field_infos(),
                config: &self.config,
            };
            let measured = element
                .format(&ctx, self.resume)
                .map_err(|e| wrap_element_error(index, element.as_ref(), e))?;
            let needed = info.margins.vertical() + measured.size.height;

            let fit = if unbounded || needed <= remaining + tolerance {
                Fit::Place(measured)
            } else {
                self.resolve_overflow(&ctx, element.as_ref(), measured, needed, breakable, infos.is_empty())
            };

            match fit {
                Fit::Place(measured) => {
                    let oversized = !unbounded && needed > remaining + tolerance;
                    infos.push(self.place(index, element.as_ref(), info, measured, cursor_y));
                    cursor_y += needed;
                    self.cursor += 1;
                    self.resume = None;
                    if oversized {
                        break;
                    }
                }
                Fit::Split(head, resume) => {
                    trace!("Split element {} at offset {}.", index, resume.offset);
                    infos.push(self.place(index, element.as_ref(), info, head, cursor_y));
                    self.resume = Some(resume);
                    break;
                }
                Fit::CloseArea => break,
            }
        }

        Ok(infos)
    }

    fn resolve_overflow(
        &self,
        ctx: &FormatContext<'_>,
        element: &dyn Element,
        measured: Measured,
        needed: f64,
        breakable: bool,
        area_is_empty: bool,
    ) -> Fit {
        if breakable {
            let request = element.layout_request();
            if request.keep_together && !area_is_empty {
                if let Some(next) = self.provider.probe_next_area() {
                    if next.can_hold(needed, self.config.fit_tolerance) {
                        debug!("Moving keep-together element {} to the next area.", self.cursor);
                        return Fit::CloseArea;
                    }
                }
            }
            if let Some((head, resume)) = element.split(ctx, &measured, self.resume) {
                return Fit::Split(head, resume);
            }
        }

        if area_is_empty {
            warn!(
                "Element {} ({}) needs {:.2}pt but the area offers {:.2}pt; placing it oversized.",
                self.cursor,
                element.kind(),
                needed,
                ctx.available.height
            );
            Fit::Place(measured)
        } else {
            Fit::CloseArea
        }
    }

    fn place(
        &self,
        index: usize,
        element: &dyn Element,
        mut info: LayoutInfo,
        measured: Measured,
        cursor_y: f64,
    ) -> RenderInfo {
        info.content_area.x = info.area.x;
        info.content_area.y = cursor_y;
        info.content_area.width = measured.size.width;
        info.content_area.height = measured.size.height;

        if !self.provider.position_horizontally(&mut info) {
            info.content_area.x = info.area.x + info.margins.left;
        }
        if !self.provider.position_vertically(&mut info) {
            info.content_area.y = cursor_y + info.margins.top;
        }
        trace!(
            "Placed element {} ({}) at {:?}",
            index,
            element.kind(),
            info.content_area
        );

        RenderInfo {
            element_index: index,
            kind: element.kind(),
            layout_info: info,
            content: measured.content,
        }
    }
}

fn wrap_element_error(index: usize, element: &dyn Element, source: LayoutError) -> LayoutError {
    LayoutError::Element {
        index,
        kind: element.kind(),
        source: Box::new(source),
    }
}
