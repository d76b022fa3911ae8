use crate::diagram::{EdgeIndex, VoronoiDiagram};
use crate::geometry::{Line, Polygon};
use crate::math::arc_2d::{arc_angle_step, discretize_arc};
use crate::math::polygon_2d::dedup_closed;
use crate::math::{round_point, IntPoint, Point2};

/// Links the crossings in `points` into closed offset loops.
///
/// Inside a segment cell consecutive crossings are joined by a chord; inside
/// a point cell by an arc around the point, split into chords that deviate
/// at most `discretization_error` from the true arc. Loops keep the winding
/// of the input contour.
#[must_use]
pub fn trace_offset_loops(
    diagram: &VoronoiDiagram,
    lines: &[Line],
    points: &[Option<Point2>],
    offset: f64,
    discretization_error: f64,
) -> Vec<Polygon> {
    let angle_step = arc_angle_step(offset.abs(), discretization_error);
    let mut used = vec![false; diagram.num_edges()];
    let mut loops = Vec::new();
    let mut dropped = 0usize;

    for start in diagram.edges() {
        if used[start.index()] || points[start.index()].is_none() {
            continue;
        }
        used[start.index()] = true;

        let Some(ring) = walk(diagram, lines, points, &mut used, start, angle_step) else {
            dropped += 1;
            continue;
        };
        let mut rounded: Vec<IntPoint> = ring.iter().map(round_point).collect();
        dedup_closed(&mut rounded);
        if rounded.len() < 3 {
            dropped += 1;
            continue;
        }
        if offset < 0.0 {
            rounded.reverse();
        }
        loops.push(Polygon::new(rounded));
    }

    tracing::debug!(loops = loops.len(), dropped, "traced offset loops");
    loops
}

/// Follows crossings from `start` until the walk returns to it.
///
/// Returns `None` when the walk gets stuck.
fn walk(
    diagram: &VoronoiDiagram,
    lines: &[Line],
    points: &[Option<Point2>],
    used: &mut [bool],
    start: EdgeIndex,
    angle_step: f64,
) -> Option<Vec<Point2>> {
    let mut ring = Vec::new();
    let mut edge = start;

    for _ in 0..diagram.num_edges() {
        let p1 = points[edge.index()]?;
        let Some(exit) = find_exit(diagram, points, used, edge, start) else {
            tracing::debug!(edge = edge.index(), "offset walk found no exit");
            return None;
        };
        let entry = diagram.twin(exit);
        let p2 = points[entry.index()]?;

        let cell = diagram.cell(edge);
        if diagram.contains_point(cell) {
            let center = diagram.site_point(cell, lines);
            ring.extend(discretize_arc(&center, &p1, &p2, angle_step));
        }
        ring.push(p2);

        if entry == start {
            return Some(ring);
        }
        used[entry.index()] = true;
        edge = entry;
    }
    None
}

/// First half-edge after `edge` around its cell whose twin carries a crossing
/// that is still free (or closes the loop).
fn find_exit(
    diagram: &VoronoiDiagram,
    points: &[Option<Point2>],
    used: &[bool],
    edge: EdgeIndex,
    start: EdgeIndex,
) -> Option<EdgeIndex> {
    let mut f = diagram.next(edge);
    loop {
        let twin = diagram.twin(f);
        if points[twin.index()].is_some() && (twin == start || !used[twin.index()]) {
            return Some(f);
        }
        if f == edge {
            return None;
        }
        f = diagram.next(f);
    }
}
