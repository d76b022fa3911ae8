use crate::annotated::AnnotatedDiagram;
use crate::diagram::{EdgeIndex, VertexIndex, VoronoiDiagram};
use crate::math::bisector_2d::CurvedBisector;
use crate::math::distance_2d::right_normal;
use crate::math::intersect_2d::ray_circle_far_param;
use crate::math::{cross_2d, Point2, Vector2, TOLERANCE};
use crate::topology::VertexCategory;

/// Per-half-edge crossings of the offset curve at `offset` with the diagram.
///
/// A crossing is stored on the half-edge along which the distance to the
/// contour grows through it, so following `next` inside a cell from one
/// stored point always leads to the point where the curve leaves the cell.
#[must_use]
pub fn edge_offset_intersections(
    annotated: &AnnotatedDiagram<'_>,
    offset: f64,
) -> Vec<Option<Point2>> {
    let vd = annotated.diagram();
    let side = if offset > 0.0 {
        VertexCategory::Outside
    } else {
        VertexCategory::Inside
    };
    let mut table = CrossingTable {
        diagram: vd,
        points: vec![None; vd.num_edges()],
    };
    let finder = Finder {
        annotated,
        radius: offset.abs(),
    };

    for edge in vd.primary_halves() {
        let (v0, v1) = (vd.vertex0(edge), vd.vertex1(edge));
        let c0 = annotated.annotation().vertex_or_outside(v0);
        let c1 = annotated.annotation().vertex_or_outside(v1);
        let on_side = |c: VertexCategory| c == side || c == VertexCategory::OnContour;
        if !on_side(c0) || !on_side(c1) {
            continue;
        }
        if c0 == VertexCategory::OnContour && c1 == VertexCategory::OnContour {
            continue;
        }

        let d0 = finder.magnitude(v0);
        let d1 = finder.magnitude(v1);
        if d0.is_nan() || d1.is_nan() || finder.radius >= d0.max(d1) {
            continue;
        }

        match (v0, v1) {
            (Some(a), Some(b)) => finder.finite_edge(&mut table, edge, (a, d0), (b, d1)),
            (Some(a), None) => finder.ray(&mut table, edge, a, d0),
            (None, Some(b)) => finder.ray(&mut table, vd.twin(edge), b, d1),
            (None, None) => {}
        }
    }

    tracing::debug!(
        offset,
        crossings = table.points.iter().filter(|p| p.is_some()).count(),
        "found offset crossings"
    );
    table.points
}

struct CrossingTable<'a> {
    diagram: &'a VoronoiDiagram,
    points: Vec<Option<Point2>>,
}

impl CrossingTable<'_> {
    /// Stores `point` on `edge` when the distance grows along it, otherwise
    /// on its twin.
    fn store(&mut self, edge: EdgeIndex, growing: bool, point: Point2) {
        let target = if growing {
            edge
        } else {
            self.diagram.twin(edge)
        };
        self.points[target.index()] = Some(point);
    }
}

struct Finder<'a, 'b> {
    annotated: &'b AnnotatedDiagram<'a>,
    radius: f64,
}

impl Finder<'_, '_> {
    fn magnitude(&self, vertex: Option<VertexIndex>) -> f64 {
        vertex.map_or(f64::INFINITY, |v| self.annotated.distance(v).abs())
    }

    fn finite_edge(
        &self,
        table: &mut CrossingTable<'_>,
        edge: EdgeIndex,
        (v0, d0): (VertexIndex, f64),
        (v1, d1): (VertexIndex, f64),
    ) {
        let vd = self.annotated.diagram();
        let (p0, p1) = (vd.position(v0), vd.position(v1));
        if !is_finite_point(&p0) || !is_finite_point(&p1) {
            return;
        }

        // Distance grows linearly only along segment/segment and secondary
        // edges, even though point/point bisectors are straight.
        let bisector = if vd.is_primary(edge) {
            self.curved_bisector(edge).filter(|b| !b.is_degenerate())
        } else {
            None
        };
        let Some(bisector) = bisector else {
            self.linear_crossing(table, edge, (&p0, d0), (&p1, d1));
            return;
        };

        let r = self.radius;
        if r <= bisector.min_distance_between(&p0, d0, &p1, d1) {
            return;
        }
        let candidates = bisector.points_at(r);
        if candidates.is_empty() {
            tracing::warn!(edge = edge.index(), r, "no analytic crossing, using nearest vertex");
            let near = if (d0 - r).abs() < (d1 - r).abs() { p0 } else { p1 };
            table.store(edge, d1 > d0, near);
            return;
        }

        let first = bisector.on_branch_of(&candidates, &p0);
        let second = bisector.on_branch_of(&candidates, &p1);
        if r < d0.min(d1) {
            // The curve dips into the edge: it enters from the v0 side and
            // leaves towards v1.
            if let Some(c) = first {
                table.store(edge, false, c);
            }
            if let Some(c) = second {
                table.store(edge, true, c);
            }
        } else if d0 > d1 {
            if let Some(c) = first {
                table.store(edge, false, c);
            }
        } else if let Some(c) = second {
            table.store(edge, true, c);
        }
    }

    fn linear_crossing(
        &self,
        table: &mut CrossingTable<'_>,
        edge: EdgeIndex,
        (p0, d0): (&Point2, f64),
        (p1, d1): (&Point2, f64),
    ) {
        if self.radius <= d0.min(d1) {
            return;
        }
        let growing = d0 < d1;
        let (lo, dl, hi, dh) = if growing {
            (p0, d0, p1, d1)
        } else {
            (p1, d1, p0, d0)
        };
        let t = if dh - dl > TOLERANCE {
            ((self.radius - dl) / (dh - dl)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        table.store(edge, growing, lo + (hi - lo) * t);
    }

    /// Crossing of the ray half-edge `edge` leaving the finite `vertex`.
    fn ray(&self, table: &mut CrossingTable<'_>, edge: EdgeIndex, vertex: VertexIndex, d: f64) {
        let vd = self.annotated.diagram();
        let lines = self.annotated.lines();
        let origin = vd.position(vertex);
        if !is_finite_point(&origin) {
            return;
        }
        let cell = vd.cell(edge);
        let twin_cell = vd.cell(vd.twin(edge));

        if vd.is_secondary(edge) {
            let (point_cell, segment_cell) = if vd.contains_point(cell) {
                (cell, twin_cell)
            } else {
                (twin_cell, cell)
            };
            let site = vd.site_point(point_cell, lines);
            let line = vd.source_line(segment_cell, lines);
            let (a, b) = (line.a_f64(), line.b_f64());
            let mut normal = right_normal(&a, &b);
            if (site == a) != (cell == segment_cell) {
                normal = -normal;
            }
            table.store(edge, true, site + normal * self.radius);
            return;
        }

        if !(vd.contains_point(cell) && vd.contains_point(twin_cell)) {
            tracing::debug!(edge = edge.index(), "skipping unbounded point/segment edge");
            return;
        }
        if self.radius <= d {
            return;
        }
        let p = vd.site_point(cell, lines);
        let q = vd.site_point(twin_cell, lines);
        let sep = q - p;
        let len = sep.norm();
        if len < TOLERANCE {
            return;
        }
        // Perpendicular to the sites, oriented so that the cell's own site
        // lies on its left.
        let mut dir = Vector2::new(-sep.y, sep.x) / len;
        if cross_2d(&dir, &(p - origin)) < 0.0 {
            dir = -dir;
        }
        if let Some(t) = ray_circle_far_param(&origin, &dir, &p, self.radius) {
            table.store(edge, true, origin + dir * t);
        } else {
            tracing::warn!(edge = edge.index(), "ray misses offset circle, using its vertex");
            table.store(edge, true, origin);
        }
    }

    fn curved_bisector(&self, edge: EdgeIndex) -> Option<CurvedBisector> {
        let vd = self.annotated.diagram();
        let lines = self.annotated.lines();
        let a = vd.cell(edge);
        let b = vd.cell(vd.twin(edge));
        match (vd.contains_point(a), vd.contains_point(b)) {
            (true, true) => Some(CurvedBisector::point_point(
                vd.site_point(a, lines),
                vd.site_point(b, lines),
            )),
            (true, false) | (false, true) => {
                let (point_cell, segment_cell) = if vd.contains_point(a) { (a, b) } else { (b, a) };
                let line = vd.source_line(segment_cell, lines);
                Some(CurvedBisector::point_line(
                    vd.site_point(point_cell, lines),
                    line.a_f64(),
                    line.b_f64(),
                ))
            }
            (false, false) => None,
        }
    }
}

fn is_finite_point(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
