use std::f64::consts::FRAC_PI_2;

use crate::annotated::AnnotatedDiagram;
use crate::diagram::{EdgeIndex, VertexIndex};
use crate::error::{OperationError, Result};
use crate::math::bisector_2d::CurvedBisector;
use crate::math::Point2;
use crate::topology::VertexCategory;

/// Part of an interior Voronoi edge that lies in a sharp-corner region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkeletonSpan {
    /// The whole edge.
    Whole,
    /// From `vertex0` up to the clip point.
    Head(Point2),
    /// From the clip point up to `vertex1`.
    Tail(Point2),
    /// Between two clip points, the edge ends excluded.
    Inner(Point2, Point2),
}

/// A skeleton span on the primary half-edge `edge`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonEdge {
    pub edge: EdgeIndex,
    pub span: SkeletonSpan,
}

/// Finds the interior edges where inward offsets turn sharper than a
/// threshold.
///
/// Along a Voronoi edge the offset curves meet at a corner whose half-angle
/// is the rate at which the distance grows per unit of edge length. Where
/// that rate drops below `sin(threshold_alpha)`, offsetting leaves a thin
/// region that no offset loop covers well, and the edge is reported as
/// skeleton.
#[derive(Debug)]
pub struct SkeletonEdges<'a> {
    annotated: &'a AnnotatedDiagram<'a>,
    threshold_alpha: f64,
}

impl<'a> SkeletonEdges<'a> {
    /// Creates a new skeleton classification with the corner half-angle
    /// threshold `threshold_alpha` in radians.
    #[must_use]
    pub fn new(annotated: &'a AnnotatedDiagram<'a>, threshold_alpha: f64) -> Self {
        Self {
            annotated,
            threshold_alpha,
        }
    }

    /// Executes the classification.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `threshold_alpha` is not in
    /// the open range `(0, π/2)`.
    pub fn execute(&self) -> Result<Vec<SkeletonEdge>> {
        let alpha = self.threshold_alpha;
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= FRAC_PI_2 {
            return Err(OperationError::InvalidInput(format!(
                "skeleton angle must be in (0, pi/2), got {alpha}"
            ))
            .into());
        }

        let vd = self.annotated.diagram();
        let annotation = self.annotated.annotation();
        let mut result = Vec::new();
        for edge in vd.primary_halves() {
            let (Some(v0), Some(v1)) = (vd.vertex0(edge), vd.vertex1(edge)) else {
                continue;
            };
            if annotation.vertex(v0) != VertexCategory::Inside
                || annotation.vertex(v1) != VertexCategory::Inside
            {
                continue;
            }
            if let Some(span) = self.classify(edge, v0, v1, alpha) {
                result.push(SkeletonEdge { edge, span });
            }
        }

        tracing::debug!(alpha, edges = result.len(), "classified skeleton edges");
        Ok(result)
    }

    fn classify(
        &self,
        edge: EdgeIndex,
        v0: VertexIndex,
        v1: VertexIndex,
        alpha: f64,
    ) -> Option<SkeletonSpan> {
        let vd = self.annotated.diagram();
        let lines = self.annotated.lines();
        let a = vd.cell(edge);
        let b = vd.cell(vd.twin(edge));

        let bisector = match (vd.contains_point(a), vd.contains_point(b)) {
            (false, false) => {
                let u = vd.source_line(a, lines).direction().normalize();
                let w = vd.source_line(b, lines).direction().normalize();
                let rate = ((1.0 + u.dot(&w)) * 0.5).max(0.0).sqrt();
                return (rate < alpha.sin()).then_some(SkeletonSpan::Whole);
            }
            (true, true) => {
                CurvedBisector::point_point(vd.site_point(a, lines), vd.site_point(b, lines))
            }
            (true, false) | (false, true) => {
                let (point_cell, segment_cell) = if vd.contains_point(a) { (a, b) } else { (b, a) };
                let line = vd.source_line(segment_cell, lines);
                CurvedBisector::point_line(
                    vd.site_point(point_cell, lines),
                    line.a_f64(),
                    line.b_f64(),
                )
            }
        };
        if bisector.is_degenerate() {
            return None;
        }

        // Point/point: h / cos(alpha). Point/line: p / (2 cos^2(alpha)) with
        // p twice the apex distance.
        let cos = alpha.cos();
        let threshold = if vd.contains_point(a) && vd.contains_point(b) {
            bisector.apex_distance() / cos
        } else {
            bisector.apex_distance() / (cos * cos)
        };

        let (p0, p1) = (vd.position(v0), vd.position(v1));
        let d0 = self.annotated.distance(v0).abs();
        let d1 = self.annotated.distance(v1).abs();
        if bisector.min_distance_between(&p0, d0, &p1, d1) >= threshold {
            return None;
        }

        let clips = bisector.points_at(threshold);
        let near0 = bisector.on_branch_of(&clips, &p0);
        let near1 = bisector.on_branch_of(&clips, &p1);
        match (d0 < threshold, d1 < threshold) {
            (true, true) => Some(SkeletonSpan::Whole),
            (true, false) => near1.map(SkeletonSpan::Head),
            (false, true) => near0.map(SkeletonSpan::Tail),
            (false, false) => match (near0, near1) {
                (Some(p), Some(q)) => Some(SkeletonSpan::Inner(p, q)),
                _ => None,
            },
        }
    }
}
