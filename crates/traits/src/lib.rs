pub mod metrics;
pub mod recording;
pub mod surface;

pub use metrics::{FontMetrics, FontMetricsProvider, MonospaceMetrics, measure_with};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawingSurface, SurfaceError, TextMeasurer};
