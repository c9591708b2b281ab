mod common;

use common::pdf_assertions::{assert_close, count_operator, find_text, page_texts, placed_texts};
use common::{TestResult, generate};
use serde_json::json;

/// Courier 10pt ascent; text matrices sit on the baseline.
const ASCENT: f32 = 6.29;

fn small_page(margins: f64) -> serde_json::Value {
    json!({"size": {"width": 200, "height": 100}, "margins": margins})
}

#[test]
fn paragraphs_continue_on_the_next_page() -> TestResult {
    let elements: Vec<_> = (1..=8)
        .map(|i| json!({"type": "paragraph", "text": format!("Line {}", i)}))
        .collect();
    let pdf = generate(&json!({"page": small_page(10.0), "elements": elements}))?;

    assert_eq!(pdf.page_count(), 2);
    assert_eq!(pdf.report.formatted, 8);
    assert!(pdf.report.complete);
    assert_eq!(page_texts(&pdf, 1).len(), 6);
    assert_eq!(page_texts(&pdf, 2), vec!["Line 7", "Line 8"]);

    let moved = find_text(&pdf, 2, "Line 7");
    assert_close(moved.x(), 10.0);
    assert_close(moved.y(), 100.0 - 10.0 - ASCENT);
    Ok(())
}

#[test]
fn long_paragraph_splits_at_line_boundaries() -> TestResult {
    let text = vec!["abcdefghi"; 24].join(" ");
    let pdf = generate(&json!({
        "page": small_page(10.0),
        "elements": [{"type": "paragraph", "text": text}]
    }))?;

    // Three words per 180pt line, six lines per page.
    assert_eq!(pdf.page_count(), 2);
    assert_eq!(page_texts(&pdf, 1).len(), 6);
    assert_eq!(page_texts(&pdf, 2).len(), 2);
    assert!(
        placed_texts(&pdf, 1)
            .iter()
            .all(|t| t.text == "abcdefghi abcdefghi abcdefghi")
    );
    assert_eq!(pdf.report.formatted, 1);
    Ok(())
}

#[test]
fn page_numbers_are_substituted() -> TestResult {
    let pdf = generate(&json!({
        "page": small_page(10.0),
        "elements": [
            {"type": "paragraph", "text": "Page {page}"},
            {"type": "paragraph", "text": "Page {page}", "breakBefore": true}
        ]
    }))?;
    assert_eq!(page_texts(&pdf, 1), vec!["Page 1"]);
    assert_eq!(page_texts(&pdf, 2), vec!["Page 2"]);
    Ok(())
}

#[test]
fn break_before_moves_to_the_next_column() -> TestResult {
    let pdf = generate(&json!({
        "page": {"size": {"width": 200, "height": 100}, "margins": 0, "columns": 2, "columnGap": 0},
        "elements": [
            {"type": "paragraph", "text": "Left"},
            {"type": "paragraph", "text": "Right", "breakBefore": true}
        ]
    }))?;
    assert_eq!(pdf.page_count(), 1);
    let right = find_text(&pdf, 1, "Right");
    assert_close(right.x(), 100.0);
    assert_close(right.y(), 100.0 - ASCENT);
    Ok(())
}

#[test]
fn centred_block_draws_border_and_caption() -> TestResult {
    let pdf = generate(&json!({
        "page": small_page(0.0),
        "elements": [{
            "type": "block", "width": 100, "height": 40, "caption": "Box",
            "border": {"width": 1}, "horizontalAlignment": "center"
        }]
    }))?;
    assert_eq!(count_operator(&pdf, 1, "h"), 1);
    let caption = find_text(&pdf, 1, "Box");
    assert_close(caption.x(), 50.0 + (100.0 - 18.0) / 2.0);
    assert_close(caption.y(), 100.0 - 14.0 - ASCENT);
    Ok(())
}

#[test]
fn upward_text_frame_rotates_its_content() -> TestResult {
    let pdf = generate(&json!({
        "page": small_page(10.0),
        "elements": [{
            "type": "textFrame", "height": 60, "orientation": "upward",
            "border": {"width": 1},
            "children": [{"type": "paragraph", "text": "Up"}]
        }]
    }))?;
    let up = find_text(&pdf, 1, "Up");
    assert_close(up.matrix[0], 0.0);
    assert_close(up.matrix[1].abs(), 1.0);
    Ok(())
}

#[test]
fn page_limit_reports_dropped_elements() -> TestResult {
    let pdf = generate(&json!({
        "page": {"size": {"width": 200, "height": 100}, "margins": 0, "maxPages": 1},
        "elements": [
            {"type": "block", "width": 20, "height": 70},
            {"type": "paragraph", "text": "kept"},
            {"type": "block", "width": 20, "height": 70}
        ]
    }))?;
    assert_eq!(pdf.page_count(), 1);
    assert_eq!(page_texts(&pdf, 1), vec!["kept"]);
    assert_eq!(pdf.report.dropped, 1);
    assert!(!pdf.report.complete);
    Ok(())
}

#[test]
fn floating_frame_anchors_text_and_drops_the_overflow() -> TestResult {
    let pdf = generate(&json!({
        "page": small_page(10.0),
        "elements": [
            {"type": "floatingFrame", "width": 100, "height": 60, "border": {"width": 1},
             "children": [
                {"type": "paragraph", "text": "Bottom", "verticalAlignment": "far"},
                {"type": "paragraph", "text": "Middle", "verticalAlignment": "center",
                 "horizontalAlignment": "center"}
             ]},
            {"type": "floatingFrame", "width": 100, "height": 24,
             "children": [
                {"type": "paragraph", "text": "one"},
                {"type": "paragraph", "text": "two"},
                {"type": "paragraph", "text": "three"}
             ]}
        ]
    }))?;

    // The 1pt border insets the children by one point.
    let bottom = find_text(&pdf, 1, "Bottom");
    assert_close(bottom.x(), 11.0);
    assert_close(bottom.y(), 100.0 - (10.0 + 1.0 + 58.0 - 12.0) - ASCENT);
    let middle = find_text(&pdf, 1, "Middle");
    assert_close(middle.x(), 10.0 + 1.0 + (98.0 - 36.0) / 2.0);
    assert_close(middle.y(), 100.0 - (10.0 + 1.0 + (58.0 - 12.0) / 2.0) - ASCENT);

    assert_eq!(pdf.page_count(), 2);
    assert_eq!(page_texts(&pdf, 2), vec!["one", "two"]);
    assert!(pdf.report.complete);
    Ok(())
}

#[test]
fn negative_line_spacing_is_rejected() {
    let err = generate(&json!({
        "elements": [{"type": "paragraph", "text": "a", "lineSpacing": -2}]
    }))
    .err()
    .expect("negative line spacing was accepted");
    assert!(
        err.to_string().contains("line spacing"),
        "unexpected error: {}",
        err
    );
}
