use crate::math::polygon_2d::signed_area;
use crate::math::{to_point2, Coord, IntPoint, Point2};

use super::Line;

/// A closed ring of integer points. The last point connects back to the
/// first; the closing point is not repeated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    pub points: Vec<IntPoint>,
}

impl Polygon {
    /// Creates a polygon from its ring of points.
    #[must_use]
    pub fn new(points: Vec<IntPoint>) -> Self {
        Self { points }
    }

    /// Creates a polygon from `(x, y)` coordinate pairs.
    #[must_use]
    pub fn from_coords(coords: &[(Coord, Coord)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| IntPoint::new(x, y)).collect(),
        }
    }

    /// Number of points in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the ring has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The closed chain of lines of this ring, in ring order.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Line::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    /// Signed area, positive for counter-clockwise rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Whether the ring runs counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// The ring's points in floating point.
    #[must_use]
    pub fn to_point2s(&self) -> Vec<Point2> {
        self.points.iter().map(to_point2).collect()
    }
}
