//! Font design metrics and the built-in monospace provider.

use folio_style::Font;
use folio_types::Size;
use std::fmt::Debug;

/// Design metrics of one font, in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascent: i16,
    pub descent: i16,
    /// Distance between baselines (the cell height).
    pub line_spacing: u16,
    pub x_height: i16,
}

impl FontMetrics {
    fn scale(&self, value: f64, size: f64) -> f64 {
        value / f64::from(self.units_per_em) * size
    }

    pub fn line_height(&self, size: f64) -> f64 {
        self.scale(f64::from(self.line_spacing), size)
    }

    pub fn ascent(&self, size: f64) -> f64 {
        self.scale(f64::from(self.ascent), size)
    }

    /// Positive distance below the baseline.
    pub fn descent(&self, size: f64) -> f64 {
        self.scale(-f64::from(self.descent), size)
    }

    /// Height of lowercase glyphs estimated from the line height, used when there
    /// is no text to measure.
    pub fn x_height_approximation(&self, size: f64) -> f64 {
        if self.line_spacing == 0 {
            return 0.0;
        }
        self.line_height(size) * f64::from(self.x_height) / f64::from(self.line_spacing)
    }
}

pub trait FontMetricsProvider: Debug {
    fn metrics(&self, font: &Font) -> FontMetrics;

    /// Horizontal advance of `ch` in font units.
    fn char_advance(&self, font: &Font, ch: char) -> u16;
}

/// Measures a single line of text: the sum of advances by one line height.
pub fn measure_with(provider: &dyn FontMetricsProvider, text: &str, font: &Font) -> Size {
    let metrics = provider.metrics(font);
    let units: u32 = text
        .chars()
        .map(|ch| u32::from(provider.char_advance(font, ch)))
        .sum();
    Size::new(
        f64::from(units) / f64::from(metrics.units_per_em) * font.size,
        metrics.line_height(font.size),
    )
}

/// Courier metrics. Every family resolves to it, which keeps measurements
/// deterministic without font files.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMetrics;

impl MonospaceMetrics {
    pub const METRICS: FontMetrics = FontMetrics {
        units_per_em: 1000,
        ascent: 629,
        descent: -157,
        line_spacing: 1200,
        x_height: 426,
    };
    pub const ADVANCE: u16 = 600;
}

impl FontMetricsProvider for MonospaceMetrics {
    fn metrics(&self, _font: &Font) -> FontMetrics {
        Self::METRICS
    }

    fn char_advance(&self, _font: &Font, ch: char) -> u16 {
        if ch.is_control() { 0 } else { Self::ADVANCE }
    }
}
