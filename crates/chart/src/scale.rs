//! "Nice number" axis scales.
use crate::defaults::MAX_TICKS;
use crate::error::ChartError;
use log::trace;
use serde::{Deserialize, Serialize};

/// Range used when there is no data at all.
pub const EMPTY_RANGE: (f64, f64) = (0.0, 0.9);

/// Ratio between the bounds at which the smaller one is snapped to zero.
const ZERO_SNAP_RATIO: f64 = 1.2;

/// Tolerance used when counting ticks, so that a maximum that is an exact
/// multiple of the tick still gets its own mark.
pub const TICK_EPSILON: f64 = 1e-9;

/// User supplied values that replace the computed ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleOverrides {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub major_tick: Option<f64>,
    pub minor_tick: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub minimum: f64,
    pub maximum: f64,
    pub major_tick: f64,
    pub minor_tick: f64,
}

/// Number of tick positions over `span`, both ends included. `None` when
/// `tick` is not positive or the count would exceed [`MAX_TICKS`].
pub fn tick_count(span: f64, tick: f64) -> Option<usize> {
    if tick.is_nan() || tick <= 0.0 || !span.is_finite() || span < 0.0 {
        return None;
    }
    let steps = (span / tick + TICK_EPSILON).floor();
    if !steps.is_finite() || steps >= MAX_TICKS as f64 {
        return None;
    }
    (steps as usize).checked_add(1)
}

/// Widens a zero-width range so that it can be scaled.
pub fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    if min != max {
        (min, max)
    } else if min == 0.0 {
        EMPTY_RANGE
    } else if min < 0.0 {
        (min, 0.0)
    } else {
        (min, min + 1.0)
    }
}

/// Snaps the bound closer to zero onto zero when the other one dominates.
fn snap_to_zero(min: f64, max: f64) -> (f64, f64) {
    if min == 0.0 {
        (min, max)
    } else if min < 0.0 && max < 0.0 {
        if min / max >= ZERO_SNAP_RATIO {
            (min, 0.0)
        } else {
            (min, max)
        }
    } else if max / min >= ZERO_SNAP_RATIO {
        (0.0, max)
    } else {
        (min, max)
    }
}

/// Step of 0.2, 0.5 or 1 times a power of ten, picked from the span.
fn step_width(span: f64) -> f64 {
    let digits = (span.log10() + 1.0).trunc();
    let normed = span / 10f64.powf(digits) * 10.0;
    let multiplier = if normed < 2.0 {
        0.2
    } else if normed < 5.0 {
        0.5
    } else {
        1.0
    };
    multiplier * 10f64.powf(digits - 1.0)
}

fn signum(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value.signum() }
}

#[derive(Debug, Clone, Copy)]
pub struct AxisScaler {
    axis: &'static str,
    overrides: ScaleOverrides,
}

impl AxisScaler {
    /// `axis` names the axis in errors.
    pub fn new(axis: &'static str, overrides: ScaleOverrides) -> Self {
        Self { axis, overrides }
    }

    /// Scales the observed data range `extent`, `None` meaning no data.
    pub fn scale(&self, extent: Option<(f64, f64)>) -> Result<AxisScale, ChartError> {
        let (min, max) = extent.unwrap_or(EMPTY_RANGE);
        let (min, max) = widen_degenerate(min, max);
        let (min, max) = snap_to_zero(min, max);

        let step = step_width(max - min);
        let round = step * 0.5;
        let computed_min = ((min - round) / step).abs() - signum(min);
        let computed_max = ((max + round) / step).abs() + signum(max);

        let major_tick = self.overrides.major_tick.unwrap_or(step);
        let scale = AxisScale {
            minimum: self
                .overrides
                .minimum
                .unwrap_or(computed_min.trunc() * step * signum(min)),
            maximum: self
                .overrides
                .maximum
                .unwrap_or(computed_max.trunc() * step * signum(max)),
            major_tick,
            minor_tick: self.overrides.minor_tick.unwrap_or(major_tick / 5.0),
        };
        trace!("{} scaled [{}, {}] to {:?}", self.axis, min, max, scale);

        self.validate(&scale)?;
        Ok(scale)
    }

    fn validate(&self, scale: &AxisScale) -> Result<(), ChartError> {
        let invalid_major = ChartError::InvalidMajorTick {
            axis: self.axis,
            value: scale.major_tick,
        };
        if !scale.major_tick.is_finite() || scale.major_tick <= 0.0 {
            return Err(invalid_major);
        }
        if !scale.minimum.is_finite() || !scale.maximum.is_finite() || scale.minimum >= scale.maximum {
            return Err(ChartError::InvalidScale {
                axis: self.axis,
                minimum: scale.minimum,
                maximum: scale.maximum,
            });
        }
        let span = scale.maximum - scale.minimum;
        if tick_count(span, scale.major_tick).is_none() {
            return Err(invalid_major);
        }
        if !scale.minor_tick.is_finite() || tick_count(span, scale.minor_tick).is_none() {
            return Err(ChartError::InvalidMinorTick {
                axis: self.axis,
                value: scale.minor_tick,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(min: f64, max: f64) -> AxisScale {
        AxisScaler::new("x axis", ScaleOverrides::default())
            .scale(Some((min, max)))
            .unwrap()
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        assert_eq!(widen_degenerate(0.0, 0.0), (0.0, 0.9));
        assert_eq!(widen_degenerate(5.0, 5.0), (5.0, 6.0));
        assert_eq!(widen_degenerate(-5.0, -5.0), (-5.0, 0.0));
        assert_eq!(widen_degenerate(1.0, 2.0), (1.0, 2.0));
    }

    #[test]
    fn no_data_scales_the_default_range() {
        let s = AxisScaler::new("x axis", ScaleOverrides::default())
            .scale(None)
            .unwrap();
        assert_eq!(s.minimum, 0.0);
        assert!(s.maximum >= 0.9);
        assert!((s.major_tick - 0.2).abs() < 1e-12);
    }

    #[test]
    fn dominant_maximum_snaps_minimum_to_zero() {
        let s = scale(1.0, 100.0);
        assert_eq!(s.minimum, 0.0);
        assert_eq!(s.major_tick, 20.0);
        assert_eq!(s.maximum, 120.0);
    }

    #[test]
    fn dominant_negative_minimum_snaps_maximum_to_zero() {
        let s = scale(-100.0, -10.0);
        assert_eq!(s.maximum, 0.0);
        assert!(s.minimum <= -100.0);
    }

    #[test]
    fn zero_crossing_range() {
        let s = scale(-3.0, 7.0);
        assert_eq!(s.major_tick, 2.0);
        assert_eq!(s.minimum, -6.0);
        assert_eq!(s.maximum, 10.0);
    }

    #[test]
    fn minor_tick_defaults_to_a_fifth() {
        for (min, max) in [(0.0, 1.0), (-3.0, 7.0), (12.5, 13.0), (-1e6, 3e6)] {
            let s = scale(min, max);
            assert_eq!(s.minor_tick, s.major_tick / 5.0);
        }
    }

    #[test]
    fn overrides_win() {
        let overrides = ScaleOverrides {
            minimum: Some(-10.0),
            major_tick: Some(2.0),
            ..Default::default()
        };
        let s = AxisScaler::new("x axis", overrides)
            .scale(Some((-3.0, 7.0)))
            .unwrap();
        assert_eq!(s.major_tick, 2.0);
        assert_eq!(s.minimum, -10.0);
        assert_eq!(s.minor_tick, 0.4);
    }

    #[test]
    fn data_is_contained_and_tick_positive() {
        let ranges = [
            (0.0, 1.0),
            (1.0, 2.0),
            (10.0, 11.0),
            (-11.0, -10.0),
            (0.001, 0.002),
            (-0.5, 0.25),
            (3.0, 1e9),
            (-7.25, -7.0),
            (123.456, 789.012),
            (-1e-3, 5e-4),
        ];
        for (min, max) in ranges {
            let s = scale(min, max);
            assert!(s.minimum <= min, "{:?} does not contain {}", s, min);
            assert!(s.maximum >= max, "{:?} does not contain {}", s, max);
            assert!(s.major_tick > 0.0);
        }
    }

    #[test]
    fn invalid_overrides_are_reported_with_the_axis() {
        let zero_tick = ScaleOverrides {
            major_tick: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            AxisScaler::new("x axis", zero_tick).scale(Some((0.0, 1.0))),
            Err(ChartError::InvalidMajorTick {
                axis: "x axis",
                value: 0.0
            })
        );

        let inverted = ScaleOverrides {
            minimum: Some(5.0),
            maximum: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            AxisScaler::new("y axis", inverted).scale(Some((0.0, 1.0))),
            Err(ChartError::InvalidScale { axis: "y axis", .. })
        ));
    }

    #[test]
    fn minor_tick_override_must_be_positive() {
        for value in [-0.5, 0.0, f64::NAN, f64::INFINITY] {
            let overrides = ScaleOverrides {
                minor_tick: Some(value),
                ..Default::default()
            };
            let err = AxisScaler::new("x axis", overrides)
                .scale(Some((0.0, 10.0)))
                .unwrap_err();
            assert!(
                matches!(err, ChartError::InvalidMinorTick { axis: "x axis", .. }),
                "{} gave {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn tiny_ticks_are_rejected_instead_of_counted() {
        let minor = ScaleOverrides {
            minor_tick: Some(1e-20),
            ..Default::default()
        };
        assert_eq!(
            AxisScaler::new("x axis", minor).scale(Some((0.0, 10.0))),
            Err(ChartError::InvalidMinorTick {
                axis: "x axis",
                value: 1e-20
            })
        );

        let major = ScaleOverrides {
            major_tick: Some(1e-6),
            ..Default::default()
        };
        assert!(matches!(
            AxisScaler::new("x axis", major).scale(Some((0.0, 10.0))),
            Err(ChartError::InvalidMajorTick { axis: "x axis", .. })
        ));
    }

    #[test]
    fn tick_count_is_bounded() {
        assert_eq!(tick_count(16.0, 2.0), Some(9));
        assert_eq!(tick_count(1.0, 0.2), Some(6));
        assert_eq!(tick_count(0.0, 1.0), Some(1));
        assert_eq!(tick_count(10.0, 0.0), None);
        assert_eq!(tick_count(10.0, -1.0), None);
        assert_eq!(tick_count(10.0, 1e-20), None);
        assert_eq!(tick_count(f64::INFINITY, 1.0), None);
        assert_eq!(tick_count(MAX_TICKS as f64 - 1.0, 1.0), Some(MAX_TICKS));
    }
}
