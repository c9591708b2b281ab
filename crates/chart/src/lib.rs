//! Axis scaling, the horizontal axis renderer and a chart element that flows
//! like any other element.

pub mod axis;
pub mod defaults;
pub mod element;
pub mod error;
pub mod renderer_info;
pub mod scale;
pub mod series;
pub mod x_axis;

pub use self::axis::{Axis, LabelFormat, TickMarkType};
pub use self::element::{Chart, ChartLayout};
pub use self::error::ChartError;
pub use self::renderer_info::{AxisMode, AxisRendererInfo, AxisTitleInfo};
pub use self::scale::{AxisScale, AxisScaler, ScaleOverrides, widen_degenerate};
pub use self::series::{PointXY, Series, SeriesData, x_extent, y_extent};
pub use self::x_axis::{AxisRenderer, X_AXIS, XAxisRenderer};

#[cfg(test)]
mod element_test;
