use crate::geometry::Line;
use crate::math::intersect_2d::segments_cross_properly;

use super::{EdgeIndex, VoronoiDiagram};

/// Construction defects of an upstream Voronoi diagram that make the
/// inside/outside annotation unreliable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownIssue {
    /// A finite edge has a vertex with a NaN or infinite coordinate.
    NonFiniteVertex { edge: EdgeIndex },
    /// A finite edge crosses the interior of an input line.
    EdgeCrossesInput { edge: EdgeIndex, line: usize },
}

/// Scans every finite edge of `diagram` for [`KnownIssue`]s.
///
/// Curved edges are checked by their chord.
#[must_use]
pub fn detect_known_issues(diagram: &VoronoiDiagram, lines: &[Line]) -> Vec<KnownIssue> {
    let mut issues = Vec::new();
    for edge in diagram.primary_halves() {
        let (Some(v0), Some(v1)) = (diagram.vertex0(edge), diagram.vertex1(edge)) else {
            continue;
        };
        let p0 = diagram.position(v0);
        let p1 = diagram.position(v1);
        if !(p0.x.is_finite() && p0.y.is_finite() && p1.x.is_finite() && p1.y.is_finite()) {
            issues.push(KnownIssue::NonFiniteVertex { edge });
            continue;
        }
        for (i, line) in lines.iter().enumerate() {
            if segments_cross_properly(&p0, &p1, &line.a_f64(), &line.b_f64()) {
                issues.push(KnownIssue::EdgeCrossesInput { edge, line: i });
            }
        }
    }
    issues
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::diagram::{fixtures, DiagramBuilder, SourceCategory};
    use crate::math::{IntPoint, Point2};

    #[test]
    fn fixtures_are_clean() {
        for fx in fixtures::all() {
            let issues = detect_known_issues(&fx.diagram, &fx.lines);
            assert!(issues.is_empty(), "{}: {issues:?}", fx.name);
        }
    }

    fn crossing_lines() -> Vec<Line> {
        vec![
            Line::new(IntPoint::new(0, 0), IntPoint::new(10, 0)),
            Line::new(IntPoint::new(10, 0), IntPoint::new(0, 0)),
        ]
    }

    #[test]
    fn detects_edge_crossing_an_input_line() {
        let lines = crossing_lines();
        let mut b = DiagramBuilder::new();
        let c0 = b.add_cell(0, SourceCategory::InitialSegment);
        let c1 = b.add_cell(1, SourceCategory::InitialSegment);
        let v0 = b.add_vertex(Point2::new(5.0, -5.0));
        let v1 = b.add_vertex(Point2::new(5.0, 5.0));
        b.add_edge(c0, c1, None, Some(v0));
        b.add_edge(c0, c1, Some(v0), Some(v1));
        b.add_edge(c0, c1, Some(v1), None);
        let vd = b.build(&lines).unwrap();
        let issues = detect_known_issues(&vd, &lines);
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| matches!(i, KnownIssue::EdgeCrossesInput { .. })));
    }

    #[test]
    fn detects_non_finite_vertex() {
        let lines = crossing_lines();
        let mut b = DiagramBuilder::new();
        let c0 = b.add_cell(0, SourceCategory::InitialSegment);
        let c1 = b.add_cell(1, SourceCategory::InitialSegment);
        let v0 = b.add_vertex(Point2::new(5.0, 1.0));
        let v1 = b.add_vertex(Point2::new(f64::NAN, 5.0));
        b.add_edge(c0, c1, None, Some(v0));
        b.add_edge(c0, c1, Some(v0), Some(v1));
        b.add_edge(c0, c1, Some(v1), None);
        let vd = b.build(&lines).unwrap();
        let issues = detect_known_issues(&vd, &lines);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], KnownIssue::NonFiniteVertex { .. }));
    }
}
