use crate::render_info::TextLine;
use folio_style::Font;
use folio_traits::TextMeasurer;

/// Greedy word wrap. Explicit newlines always break; runs of whitespace
/// collapse to one space. A word wider than `max_width` gets a line of its
/// own and overflows it.
pub fn break_lines(
    text: &str,
    font: &Font,
    max_width: f64,
    measurer: &dyn TextMeasurer,
) -> Vec<TextLine> {
    let mut lines = Vec::new();

    for hard_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in hard_line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                current_width = measurer.measure_string(&current, font).width;
                continue;
            }

            let candidate = format!("{} {}", current, word);
            let candidate_width = measurer.measure_string(&candidate, font).width;
            if candidate_width > max_width {
                lines.push(TextLine {
                    text: std::mem::take(&mut current),
                    width: current_width,
                });
                current.push_str(word);
                current_width = measurer.measure_string(&current, font).width;
            } else {
                current = candidate;
                current_width = candidate_width;
            }
        }

        lines.push(TextLine {
            text: current,
            width: current_width,
        });
    }

    lines
}
