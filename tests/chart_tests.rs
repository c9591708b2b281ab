mod common;

use common::pdf_assertions::{assert_close, count_operator, find_text, page_texts};
use common::{TestResult, generate};
use folio::PipelineError;
use folio::layout::LayoutError;
use serde_json::json;

const A4_HEIGHT: f32 = 841.89;

fn quarterly_chart() -> serde_json::Value {
    json!({
        "type": "chart", "width": 300, "height": 150,
        "series": [{"name": "revenue", "values": [3, 5, 2]}],
        "xValues": [["Q1", "Q2", "Q3"]],
        "xAxis": {"title": "Quarter"}
    })
}

fn chart_error(chart: serde_json::Value) -> LayoutError {
    match generate(&json!({"elements": [chart]})) {
        Err(PipelineError::Layout(LayoutError::Element { kind, source, .. })) => {
            assert_eq!(kind, "chart");
            *source
        }
        Err(other) => panic!("unexpected error {:?}", other),
        Ok(_) => panic!("chart was rendered"),
    }
}

#[test]
fn category_labels_are_centred_under_their_slots() -> TestResult {
    let pdf = generate(&json!({"elements": [quarterly_chart()]}))?;
    assert_eq!(pdf.page_count(), 1);
    assert_eq!(page_texts(&pdf, 1), vec!["Q1", "Q2", "Q3", "Quarter"]);

    // Plot starts 8pt inside the chart at the 36pt page margin and is 284pt wide.
    let q2 = find_text(&pdf, 1, "Q2");
    assert_close(q2.x(), 44.0 + 142.0 - 4.8);
    // The axis below the plot is 24.6pt tall: title, one label row and the mark gap.
    let baseline = 36.0 + 150.0 - 8.0 - 24.6;
    assert_close(q2.y(), A4_HEIGHT - (baseline + 3.0) - 5.032);

    let title = find_text(&pdf, 1, "Quarter");
    assert_close(title.x(), 44.0 + (284.0 - 42.0) / 2.0);
    assert_close(title.y(), A4_HEIGHT - (baseline + 24.6 - 12.0) - 6.29);
    Ok(())
}

#[test]
fn series_and_axis_are_stroked() -> TestResult {
    let pdf = generate(&json!({"elements": [quarterly_chart()]}))?;
    // Plot border, two series segments, four major marks and the baseline.
    assert_eq!(count_operator(&pdf, 1, "S"), 8);
    assert_eq!(count_operator(&pdf, 1, "h"), 1);
    Ok(())
}

#[test]
fn paired_series_get_a_numeric_axis() -> TestResult {
    let pdf = generate(&json!({"elements": [{
        "type": "chart", "width": 300, "height": 150,
        "series": [{"points": [{"x": 0, "y": 0}, {"x": 10, "y": 5, "fill": "#c80000"}]}]
    }]}))?;
    let texts = page_texts(&pdf, 1);
    assert!(texts.contains(&"0".to_string()));
    assert!(texts.contains(&"10".to_string()));
    assert!(texts.iter().all(|t| t.parse::<f64>().is_ok()));
    Ok(())
}

#[test]
fn chart_without_x_axis_is_rejected() {
    let mut chart = quarterly_chart();
    chart["xAxis"] = serde_json::Value::Null;
    match chart_error(chart) {
        LayoutError::Content(message) => assert!(message.contains("x axis")),
        other => panic!("unexpected source {:?}", other),
    }
}

#[test]
fn invalid_y_override_is_rejected() {
    let mut chart = quarterly_chart();
    chart["yAxis"] = json!({"majorTick": -1});
    match chart_error(chart) {
        LayoutError::Content(message) => assert!(message.contains("y axis")),
        other => panic!("unexpected source {:?}", other),
    }
}
