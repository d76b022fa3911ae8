use super::{Point2, Vector2};

/// Returns the minimum distance from `p` to the segment `a`→`b`.
#[cfg(test)]
#[must_use]
pub(crate) fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}

/// Returns the perpendicular distance from `p` to the infinite line through
/// `a` and `b`.
#[must_use]
pub fn point_to_line_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len = d.norm();
    if len < 1e-10 {
        return (p - a).norm();
    }
    super::cross_2d(&d, &(p - a)).abs() / len
}

/// Returns the foot of the perpendicular dropped from `p` onto the infinite
/// line through `a` and `b`.
#[must_use]
pub fn foot_of_perpendicular(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < 1e-20 {
        return *a;
    }
    a + d * ((p - a).dot(&d) / len_sq)
}

/// Returns the unit normal pointing to the right of the direction `a`→`b`.
///
/// For a counter-clockwise contour this is the outward normal.
#[must_use]
pub fn right_normal(a: &Point2, b: &Point2) -> Vector2 {
    let d = b - a;
    let len = d.norm();
    if len < 1e-10 {
        return Vector2::zeros();
    }
    Vector2::new(d.y / len, -d.x / len)
}

/// Minimum distance from `p` to a closed ring of points.
#[cfg(test)]
#[must_use]
pub(crate) fn point_to_ring_dist(p: &Point2, ring: &[Point2]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| point_to_segment_dist(p, &ring[i], &ring[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}
