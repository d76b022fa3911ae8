use super::IntPoint;

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The sum is
/// accumulated in `i128` so it is exact for any `i64` input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn signed_area(points: &[IntPoint]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum: i128 = 0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += i128::from(points[i].x) * i128::from(points[j].y)
            - i128::from(points[j].x) * i128::from(points[i].y);
    }
    sum as f64 * 0.5
}

/// Removes consecutive duplicate points of a closed ring, including
/// duplicates across the wrap from the last point back to the first.
pub fn dedup_closed(points: &mut Vec<IntPoint>) {
    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
}

/// Rotates a closed ring so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y.
#[cfg(test)]
#[must_use]
pub(crate) fn rotate_to_canonical_start(points: &[IntPoint]) -> Vec<IntPoint> {
    let Some(best) = points
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.x, p.y))
        .map(|(i, _)| i)
    else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}
