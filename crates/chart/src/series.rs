use folio_style::LineFormat;
use folio_types::Color;
use serde::{Deserialize, Serialize};

/// A data point with explicit coordinates. The overrides only affect how the
/// point is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointXY {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub line: Option<LineFormat>,
    #[serde(default)]
    pub fill: Option<Color>,
}

impl PointXY {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            line: None,
            fill: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesData {
    /// Values at implicit index positions.
    Values(Vec<f64>),
    Points(Vec<PointXY>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub data: SeriesData,
    #[serde(default)]
    pub line: LineFormat,
}

impl Series {
    pub fn values(values: Vec<f64>) -> Self {
        Self {
            name: String::new(),
            data: SeriesData::Values(values),
            line: LineFormat::default(),
        }
    }

    pub fn points(points: Vec<PointXY>) -> Self {
        Self {
            name: String::new(),
            data: SeriesData::Points(points),
            line: LineFormat::default(),
        }
    }

    /// Whether the series holds explicit coordinates. An empty point list
    /// counts as categorical.
    pub fn is_paired(&self) -> bool {
        matches!(&self.data, SeriesData::Points(points) if !points.is_empty())
    }

    pub fn len(&self) -> usize {
        match &self.data {
            SeriesData::Values(v) => v.len(),
            SeriesData::Points(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn merge(extent: Option<(f64, f64)>, value: f64) -> Option<(f64, f64)> {
    Some(match extent {
        Some((min, max)) => (min.min(value), max.max(value)),
        None => (value, value),
    })
}

/// Range of x over all paired series. Points with a NaN y or a non-finite x
/// are left out; `None` means no usable point.
pub fn x_extent(series: &[Series]) -> Option<(f64, f64)> {
    series
        .iter()
        .filter_map(|s| match &s.data {
            SeriesData::Points(points) => Some(points),
            SeriesData::Values(_) => None,
        })
        .flatten()
        .filter(|p| !p.y.is_nan() && p.x.is_finite())
        .fold(None, |extent, p| merge(extent, p.x))
}

/// Range of y over all series, skipping non-finite values.
pub fn y_extent(series: &[Series]) -> Option<(f64, f64)> {
    let mut extent = None;
    for s in series {
        match &s.data {
            SeriesData::Values(values) => {
                for v in values.iter().filter(|v| v.is_finite()) {
                    extent = merge(extent, *v);
                }
            }
            SeriesData::Points(points) => {
                for p in points.iter().filter(|p| p.y.is_finite() && p.x.is_finite()) {
                    extent = merge(extent, p.y);
                }
            }
        }
    }
    extent
}
