//! Closed-form equal-distance points on curved Voronoi bisectors.
//!
//! A point/point bisector is a straight line whose distance to the two sites
//! dips to half the site separation at the midpoint. A point/line bisector is
//! a parabola with its apex halfway between the point and its foot on the
//! line. In both cases the distance along the bisector has a single minimum,
//! at the *apex*, and the bisector is split into two branches by the *axis*
//! through the point site and the apex.

use super::distance_2d::foot_of_perpendicular;
use super::{cross_2d, Point2, Vector2, TOLERANCE};

#[derive(Debug, Clone, Copy)]
enum Sites {
    Points { p: Point2, q: Point2 },
    PointLine { p: Point2, a: Point2, b: Point2 },
}

/// A curved (non-monotonic) bisector between a point site and either
/// another point site or a line site.
#[derive(Debug, Clone, Copy)]
pub struct CurvedBisector {
    sites: Sites,
    axis: Vector2,
    apex_distance: f64,
}

impl CurvedBisector {
    /// Bisector of two point sites.
    #[must_use]
    pub fn point_point(p: Point2, q: Point2) -> Self {
        let axis = q - p;
        Self {
            sites: Sites::Points { p, q },
            axis,
            apex_distance: axis.norm() * 0.5,
        }
    }

    /// Bisector of the point site `p` and the line through `a` and `b`.
    #[must_use]
    pub fn point_line(p: Point2, a: Point2, b: Point2) -> Self {
        let axis = foot_of_perpendicular(&p, &a, &b) - p;
        Self {
            sites: Sites::PointLine { p, a, b },
            axis,
            apex_distance: axis.norm() * 0.5,
        }
    }

    /// Distance to both sites at the apex (the minimum along the bisector).
    #[must_use]
    pub fn apex_distance(&self) -> f64 {
        self.apex_distance
    }

    /// Whether the two sites are too close together for the axis to separate
    /// the branches.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.apex_distance < TOLERANCE
    }

    /// Signed side of `x` relative to the axis. Points on the same branch of
    /// the bisector share the sign.
    #[must_use]
    pub fn side(&self, x: &Point2) -> f64 {
        cross_2d(&self.axis, &(x - self.point_site()))
    }

    /// Whether the bisector between `x0` and `x1` passes through the apex.
    #[must_use]
    pub fn straddles_apex(&self, x0: &Point2, x1: &Point2) -> bool {
        let s0 = self.side(x0);
        let s1 = self.side(x1);
        (s0 < 0.0 && s1 > 0.0) || (s0 > 0.0 && s1 < 0.0)
    }

    /// Minimum distance to the sites along the piece of bisector running
    /// from `x0` (at distance `d0`) to `x1` (at distance `d1`).
    #[must_use]
    pub fn min_distance_between(&self, x0: &Point2, d0: f64, x1: &Point2, d1: f64) -> f64 {
        if self.straddles_apex(x0, x1) {
            self.apex_distance
        } else {
            d0.min(d1)
        }
    }

    /// Points on the bisector at distance `r` from both sites.
    ///
    /// Returns no point below the apex distance, one point at the apex
    /// (within a relative tolerance), and otherwise one point per branch.
    #[must_use]
    pub fn points_at(&self, r: f64) -> Vec<Point2> {
        match self.sites {
            Sites::Points { p, q } => point_point_points(&p, &q, r),
            Sites::PointLine { p, a, b } => point_line_points(&p, &a, &b, r),
        }
    }

    /// Picks, among `candidates`, the one lying on the same branch as `x`.
    #[must_use]
    pub fn on_branch_of(&self, candidates: &[Point2], x: &Point2) -> Option<Point2> {
        let sx = self.side(x);
        candidates
            .iter()
            .copied()
            .find(|c| (self.side(c) > 0.0) == (sx > 0.0))
            .or_else(|| candidates.first().copied())
    }

    fn point_site(&self) -> Point2 {
        match self.sites {
            Sites::Points { p, .. } | Sites::PointLine { p, .. } => p,
        }
    }
}

fn point_point_points(p: &Point2, q: &Point2, r: f64) -> Vec<Point2> {
    let d = q - p;
    let len = d.norm();
    let h = len * 0.5;
    let mid = p + d * 0.5;
    if len < TOLERANCE {
        return Vec::new();
    }
    if r < h * (1.0 - 1e-12) {
        return Vec::new();
    }
    if r <= h * (1.0 + 1e-12) {
        return vec![mid];
    }
    let n = Vector2::new(-d.y / len, d.x / len);
    let s = (r * r - h * h).max(0.0).sqrt();
    vec![mid + n * s, mid - n * s]
}

fn point_line_points(p: &Point2, a: &Point2, b: &Point2, r: f64) -> Vec<Point2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Vec::new();
    }
    let u = d / len;
    let mut n = Vector2::new(-u.y, u.x);
    let mut h = cross_2d(&u, &(p - a));
    if h < 0.0 {
        n = -n;
        h = -h;
    }
    let foot = a + u * u.dot(&(p - a));
    // At height r above the line: (along)^2 + (r - h)^2 = r^2.
    let along_sq = 2.0 * r * h - h * h;
    let base = foot + n * r;
    if along_sq < -1e-9 * r * r {
        return Vec::new();
    }
    if along_sq <= 1e-9 * r * r {
        return vec![base];
    }
    let along = along_sq.sqrt();
    vec![base + u * along, base - u * along]
}
