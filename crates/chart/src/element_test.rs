#![cfg(test)]

use crate::element::{Chart, ChartLayout};
use crate::series::{PointXY, Series};
use folio_layout::{Element, FormatContent, LayoutError, PageFlow, RenderInfo, TopDownFormatter};
use folio_style::Margins;
use folio_traits::{DrawCommand, DrawingSurface, RecordingSurface};
use folio_types::{Color, Rect, Size};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Formats `chart` alone on a 300pt page with 10pt margins.
fn format_chart(chart: Chart) -> (Vec<Box<dyn Element>>, Result<RenderInfo, LayoutError>) {
    let elements: Vec<Box<dyn Element>> = vec![Box::new(chart)];
    let mut flow = PageFlow::new(Size::new(300.0, 300.0), Margins::all(10.0));
    let summary = TopDownFormatter::new(&mut flow, &elements)
        .format_on_areas(&RecordingSurface::new(), true);
    let result = summary.map(|_| flow.pages()[0].areas[0].render_infos[0].clone());
    (elements, result)
}

#[test]
fn chart_reserves_room_for_the_axis() {
    let chart = Chart::new(200.0, 100.0, vec![Series::values(vec![1.0, f64::NAN, 3.0, 4.0])]);
    let (_, info) = format_chart(chart);
    let info = info.unwrap();
    assert_eq!(info.layout_info.content_area, Rect::new(10.0, 10.0, 200.0, 100.0));

    let layout = info.content.downcast::<ChartLayout>().unwrap();
    // 8pt padding all round and a 12.6pt axis below the plot.
    assert_eq!(layout.plot.x, 8.0);
    assert_eq!(layout.plot.width, 184.0);
    assert_close(layout.plot.height, 100.0 - 16.0 - 12.6);
    assert_close(layout.x_axis.rect.y, layout.plot.bottom());
    assert_eq!((layout.y_scale.minimum, layout.y_scale.maximum), (0.0, 4.5));
}

#[test]
fn series_gaps_break_the_line() {
    let chart = Chart::new(200.0, 100.0, vec![Series::values(vec![1.0, f64::NAN, 3.0, 4.0])]);
    let (elements, info) = format_chart(chart);
    let info = info.unwrap();

    let mut surface = RecordingSurface::new();
    surface.begin_page(Size::new(300.0, 300.0)).unwrap();
    elements[0].draw(&mut surface, &info).unwrap();
    assert!(surface.current_transform().is_identity());

    let lines = surface.lines();
    // One series segment, five major marks and the baseline.
    assert_eq!(lines.len(), 7);
    let (from, to) = lines[0];
    // Slots are 46 wide starting at 18 on the page.
    assert_close(from.x, 10.0 + 8.0 + 2.5 * 46.0);
    assert_close(to.x, 10.0 + 8.0 + 3.5 * 46.0);
    let plot_bottom = 10.0 + 8.0 + 71.4;
    assert_close(from.y, plot_bottom - 3.0 / 4.5 * 71.4);
    assert_close(to.y, plot_bottom - 4.0 / 4.5 * 71.4);
    assert!(lines.iter().all(|(from, _)| (from.x - 41.0).abs() > 1e-6));

    assert_eq!(surface.texts(), vec!["1", "2", "3", "4"]);
}

#[test]
fn paired_chart_draws_point_markers() {
    let mut marked = PointXY::new(10.0, 5.0);
    marked.fill = Some(Color::rgb(200, 0, 0));
    let chart = Chart::new(
        200.0,
        100.0,
        vec![Series::points(vec![PointXY::new(0.0, 0.0), marked])],
    );
    let (elements, info) = format_chart(chart);
    let info = info.unwrap();
    let mut surface = RecordingSurface::new();
    surface.begin_page(Size::new(300.0, 300.0)).unwrap();
    elements[0].draw(&mut surface, &info).unwrap();

    let rects = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Rect { .. }))
        .count();
    assert_eq!(rects, 2);
    assert!(surface.texts().contains(&"10"));
}

#[test]
fn too_small_chart_is_rejected() {
    let chart = Chart::new(200.0, 20.0, vec![Series::values(vec![1.0])]);
    let (_, info) = format_chart(chart);
    match info.unwrap_err() {
        LayoutError::Element { kind, source, .. } => {
            assert_eq!(kind, "chart");
            assert!(matches!(
                *source,
                LayoutError::InvalidDimension {
                    dimension: "height",
                    ..
                }
            ));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn chart_without_x_axis_fails_to_format() {
    let mut chart = Chart::new(200.0, 100.0, vec![Series::values(vec![1.0])]);
    chart.x_axis = None;
    let (_, info) = format_chart(chart);
    match info.unwrap_err() {
        LayoutError::Element { source, .. } => match *source {
            LayoutError::Content(message) => assert!(message.contains("x axis")),
            other => panic!("unexpected source {:?}", other),
        },
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn drawing_foreign_content_is_an_error() {
    let chart = Chart::new(200.0, 100.0, vec![Series::values(vec![1.0])]);
    let (elements, info) = format_chart(chart);
    let mut info = info.unwrap();
    info.content = FormatContent::Empty;

    let mut surface = RecordingSurface::new();
    surface.begin_page(Size::new(300.0, 300.0)).unwrap();
    let err = elements[0].draw(&mut surface, &info).unwrap_err();
    assert!(matches!(err, LayoutError::Content(_)));
    assert!(surface.commands().is_empty());
}
