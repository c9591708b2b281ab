//! Mapping of font requests onto the standard 14 PDF fonts.

use folio_style::Font;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Courier,
    Helvetica,
    Times,
}

impl Family {
    fn resolve(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "helvetica" | "arial" | "sans-serif" | "sans" => Family::Helvetica,
            "times" | "times-roman" | "times new roman" | "serif" => Family::Times,
            _ => Family::Courier,
        }
    }
}

/// PostScript name of the standard font closest to `font`. Unknown families
/// fall back to Courier, which matches the built-in metrics.
pub fn base_font_name(font: &Font) -> &'static str {
    let bold = font.weight.is_bold();
    let italic = font.is_italic();
    match (Family::resolve(&font.family), bold, italic) {
        (Family::Courier, false, false) => "Courier",
        (Family::Courier, true, false) => "Courier-Bold",
        (Family::Courier, false, true) => "Courier-Oblique",
        (Family::Courier, true, true) => "Courier-BoldOblique",
        (Family::Helvetica, false, false) => "Helvetica",
        (Family::Helvetica, true, false) => "Helvetica-Bold",
        (Family::Helvetica, false, true) => "Helvetica-Oblique",
        (Family::Helvetica, true, true) => "Helvetica-BoldOblique",
        (Family::Times, false, false) => "Times-Roman",
        (Family::Times, true, false) => "Times-Bold",
        (Family::Times, false, true) => "Times-Italic",
        (Family::Times, true, true) => "Times-BoldItalic",
    }
}

/// Encodes `text` for a font using WinAnsiEncoding. Characters without a code
/// become `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
