//! Value types for positions and extents. Every coordinate is in points and the
//! y axis grows downwards, matching the order in which content flows.
use serde::{Deserialize, Serialize};

/// Extent sentinel meaning "grow to fit". Used for the height of areas whose
/// vertical extent is decided by their content.
pub const UNBOUNDED: f64 = f64::MAX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn has_unbounded_height(self) -> bool {
        self.height >= UNBOUNDED
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn has_unbounded_height(&self) -> bool {
        self.height >= UNBOUNDED
    }

    pub fn right(&self) -> f64 {
        if self.width >= UNBOUNDED {
            UNBOUNDED
        } else {
            self.x + self.width
        }
    }

    /// The bottom edge. An unbounded rect reports [`UNBOUNDED`] instead of
    /// overflowing into infinity.
    pub fn bottom(&self) -> f64 {
        if self.has_unbounded_height() {
            UNBOUNDED
        } else {
            self.y + self.height
        }
    }

    /// True when both extents are strictly positive (an unbounded extent counts
    /// as positive). NaN extents are rejected.
    pub fn has_positive_extent(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn corners(&self) -> [Point; 4] {
        let right = self.right();
        let bottom = self.bottom();
        [
            Point::new(self.x, self.y),
            Point::new(right, self.y),
            Point::new(right, bottom),
            Point::new(self.x, bottom),
        ]
    }
}

/// A 2-D affine transform using the row-vector convention:
///
/// ```text
/// x' = x * m11 + y * m21 + dx
/// y' = x * m12 + y * m22 + dy
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    pub const fn new(m11: f64, m12: f64, m21: f64, m22: f64, dx: f64, dy: f64) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            dx,
            dy,
        }
    }

    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `degrees`. With the y axis pointing down a positive angle
    /// turns clockwise on the page.
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Composes two transforms: the result applies `self` first, then `next`.
    pub fn then(self, next: Matrix) -> Matrix {
        Matrix {
            m11: self.m11 * next.m11 + self.m12 * next.m21,
            m12: self.m11 * next.m12 + self.m12 * next.m22,
            m21: self.m21 * next.m11 + self.m22 * next.m21,
            m22: self.m21 * next.m12 + self.m22 * next.m22,
            dx: self.dx * next.m11 + self.dy * next.m21 + next.dx,
            dy: self.dx * next.m12 + self.dy * next.m22 + next.dy,
        }
    }

    pub fn transform_point(&self, point: Point) -> Point {
        Point {
            x: point.x * self.m11 + point.y * self.m21 + self.dx,
            y: point.x * self.m12 + point.y * self.m22 + self.dy,
        }
    }

    pub fn transform_points(&self, points: &mut [Point]) {
        for point in points.iter_mut() {
            *point = self.transform_point(*point);
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn unbounded_rect_reports_unbounded_bottom() {
        let rect = Rect::new(10.0, 20.0, 100.0, UNBOUNDED);
        assert!(rect.has_unbounded_height());
        assert_eq!(rect.bottom(), UNBOUNDED);
        assert_eq!(rect.right(), 110.0);
        assert!(rect.has_positive_extent());
    }

    #[test]
    fn degenerate_rect_has_no_positive_extent() {
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).has_positive_extent());
        assert!(!Rect::new(0.0, 0.0, 10.0, -1.0).has_positive_extent());
        assert!(!Rect::new(0.0, 0.0, f64::NAN, 10.0).has_positive_extent());
    }

    #[test]
    fn then_applies_left_matrix_first() {
        let m = Matrix::scaling(2.0, 1.0).then(Matrix::translation(10.0, 5.0));
        assert_point_eq(m.transform_point(Point::new(3.0, 4.0)), Point::new(16.0, 9.0));

        let reversed = Matrix::translation(10.0, 5.0).then(Matrix::scaling(2.0, 1.0));
        assert_point_eq(
            reversed.transform_point(Point::new(3.0, 4.0)),
            Point::new(26.0, 9.0),
        );
    }

    #[test]
    fn quarter_rotation_turns_x_axis_onto_y_axis() {
        let m = Matrix::rotation(90.0);
        assert_point_eq(m.transform_point(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
        assert_point_eq(m.transform_point(Point::new(0.0, 1.0)), Point::new(-1.0, 0.0));
    }

    #[test]
    fn identity_round_trip() {
        let m = Matrix::translation(3.0, 4.0).then(Matrix::translation(-3.0, -4.0));
        assert!(m.is_identity());
    }
}
