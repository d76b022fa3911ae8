use super::{cross_2d, Point2, Vector2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = cross_2d(&da, &db);
    if cross.abs() < TOLERANCE {
        return None;
    }

    let diff = b0 - a0;
    let t = cross_2d(&diff, &db) / cross;
    let u = cross_2d(&diff, &da) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((a0 + da * t_clamped, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Whether two segments cross at a point interior to both of them.
///
/// Touching at an endpoint does not count.
#[must_use]
pub fn segments_cross_properly(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let interior = 1e-9;
    segment_segment_intersect_2d(a0, a1, b0, b1).is_some_and(|(_, t, u)| {
        t > interior && t < 1.0 - interior && u > interior && u < 1.0 - interior
    })
}

/// Far intersection of the ray `origin + t * dir` (`dir` unit length,
/// `t >= 0`) with the circle of `radius` around `center`.
///
/// Returns the larger root, or `None` when the ray misses the circle or the
/// circle lies entirely behind the origin.
#[must_use]
pub fn ray_circle_far_param(
    origin: &Point2,
    dir: &Vector2,
    center: &Point2,
    radius: f64,
) -> Option<f64> {
    let w = origin - center;
    let b = dir.dot(&w);
    let c = w.norm_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b + disc.sqrt();
    (t >= 0.0).then_some(t)
}
