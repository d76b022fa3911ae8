//! 2D arc discretization.
//!
//! Arcs are approximated by chords whose sagitta never exceeds the requested
//! error: for radius `r` and error `e` the chord spans at most
//! `2 * acos(1 - e / r)` radians.
use super::{cross_2d, Point2, Vector2};

/// Angular step of one chord for an arc of `radius` approximated within
/// `max_error`.
///
/// Errors at or above the diameter yield a full turn (one chord per arc).
#[must_use]
pub fn arc_angle_step(radius: f64, max_error: f64) -> f64 {
    2.0 * (1.0 - max_error / radius).clamp(-1.0, 1.0).acos()
}

/// Interior points of the shorter arc around `center` from `p1` to `p2`.
///
/// The arc turns counter-clockwise when `cross(p1 - c, p2 - c) > 0`,
/// clockwise otherwise. The end points themselves are not emitted.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn discretize_arc(center: &Point2, p1: &Point2, p2: &Point2, angle_step: f64) -> Vec<Point2> {
    if angle_step.is_nan() || angle_step <= 0.0 {
        return Vec::new();
    }
    let a1 = p1 - center;
    let a2 = p2 - center;
    let cross = cross_2d(&a1, &a2);
    let angle = cross.abs().atan2(a1.dot(&a2));
    let segments = ((angle / angle_step).ceil() as usize).max(1);
    let delta = angle / segments as f64 * if cross > 0.0 { 1.0 } else { -1.0 };

    (1..segments)
        .map(|i| {
            let (s, c) = (delta * i as f64).sin_cos();
            center + Vector2::new(c * a1.x - s * a1.y, s * a1.x + c * a1.y)
        })
        .collect()
}
