pub mod arc_2d;
pub mod bisector_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// Integer coordinate of the fixed-point input space.
pub type Coord = i64;

/// 2D point in the fixed-point integer space.
pub type IntPoint = nalgebra::Point2<Coord>;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Size of one integer unit in real-world units (1 unit = 1 nm for mm input).
pub const SCALING_FACTOR: f64 = 1e-6;

/// Maximum ULP distance for two floating positions to count as coincident.
pub const MAX_ULPS: u32 = 4;

/// Converts a real-world length into the integer space.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn scaled(value: f64) -> Coord {
    (value / SCALING_FACTOR).round() as Coord
}

/// Converts an integer length back into real-world units.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn unscaled(value: Coord) -> f64 {
    value as f64 * SCALING_FACTOR
}

/// Lifts an integer point into floating point.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_point2(p: &IntPoint) -> Point2 {
    Point2::new(p.x as f64, p.y as f64)
}

/// Rounds a floating point position to the nearest integer point.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_point(p: &Point2) -> IntPoint {
    IntPoint::new(p.x.round() as Coord, p.y.round() as Coord)
}

/// 2D cross product (z component of `a × b`).
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// ULP-aware coincidence of two floating positions.
#[must_use]
pub fn same_position(a: &Point2, b: &Point2) -> bool {
    approx::ulps_eq!(*a, *b, max_ulps = MAX_ULPS)
}
