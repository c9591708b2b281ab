use super::GeneratedPdf;
use lopdf::Object;
use lopdf::content::{Content, Operation};

/// A string shown on a page with the text matrix in effect.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    /// `[a b c d e f]` of the last `Tm`.
    pub matrix: [f32; 6],
}

impl PlacedText {
    pub fn x(&self) -> f32 {
        self.matrix[4]
    }

    pub fn y(&self) -> f32 {
        self.matrix[5]
    }
}

/// Content stream operations of a 1-based page.
pub fn page_operations(pdf: &GeneratedPdf, page: u32) -> Vec<Operation> {
    let pages = pdf.doc.get_pages();
    let id = pages[&page];
    let content = pdf.doc.get_page_content(id).expect("page has no content");
    Content::decode(&content)
        .expect("content stream does not decode")
        .operations
}

pub fn placed_texts(pdf: &GeneratedPdf, page: u32) -> Vec<PlacedText> {
    let mut matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
    let mut placed = Vec::new();
    for op in page_operations(pdf, page) {
        match op.operator.as_str() {
            "Tm" => {
                for (slot, operand) in matrix.iter_mut().zip(&op.operands) {
                    *slot = operand.as_float().expect("Tm operand is not a number");
                }
            }
            "Tj" => {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    placed.push(PlacedText {
                        text: String::from_utf8_lossy(bytes).into_owned(),
                        matrix,
                    });
                }
            }
            _ => {}
        }
    }
    placed
}

pub fn page_texts(pdf: &GeneratedPdf, page: u32) -> Vec<String> {
    placed_texts(pdf, page).into_iter().map(|t| t.text).collect()
}

pub fn find_text(pdf: &GeneratedPdf, page: u32, text: &str) -> PlacedText {
    placed_texts(pdf, page)
        .into_iter()
        .find(|t| t.text == text)
        .unwrap_or_else(|| panic!("'{}' not found on page {}", text, page))
}

pub fn count_operator(pdf: &GeneratedPdf, page: u32, operator: &str) -> usize {
    page_operations(pdf, page)
        .iter()
        .filter(|op| op.operator == operator)
        .count()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-2,
        "expected {}, got {}",
        expected,
        actual
    );
}
