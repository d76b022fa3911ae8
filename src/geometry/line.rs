use crate::math::{to_point2, IntPoint, Point2, Vector2};

/// A directed input segment in the fixed-point integer space.
///
/// Closed contours are chains of lines where each line's `b` is the next
/// line's `a`. Outer contours run counter-clockwise, holes clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub a: IntPoint,
    pub b: IntPoint,
}

impl Line {
    /// Creates a new line from `a` to `b`.
    #[must_use]
    pub fn new(a: IntPoint, b: IntPoint) -> Self {
        Self { a, b }
    }

    /// Start point in floating point.
    #[must_use]
    pub fn a_f64(&self) -> Point2 {
        to_point2(&self.a)
    }

    /// End point in floating point.
    #[must_use]
    pub fn b_f64(&self) -> Point2 {
        to_point2(&self.b)
    }

    /// Direction `b - a` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.b_f64() - self.a_f64()
    }

    /// Whether both end points coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}
