//! Fixed sizes used when a chart does not say otherwise, in points.

pub const DEFAULT_MAJOR_TICK_MARK_WIDTH: f64 = 3.0;
pub const DEFAULT_MINOR_TICK_MARK_WIDTH: f64 = 1.5;

/// Gap between the baseline and the tick labels when no major marks are drawn.
pub const SPACE_BETWEEN_LABEL_AND_TICKMARK: f64 = 2.0;

/// Padding between the chart frame and the plot area.
pub const DEFAULT_PLOT_PADDING: f64 = 8.0;

/// Largest number of decimals chosen for automatically formatted labels.
pub const MAX_AUTO_DECIMALS: usize = 6;

/// Largest number of tick positions an axis may ask for.
pub const MAX_TICKS: usize = 10_000;
