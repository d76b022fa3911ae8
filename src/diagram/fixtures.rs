//! Hand-derived Voronoi diagrams of small counter-clockwise contours.
//!
//! Cell `P(i)` is generated by contour point `i` (the start of line `i`),
//! cell `S(i)` by line `i` running from point `i` to point `i + 1`. Vertex
//! indices `0..n` are the contour points themselves, followed by the inner
//! and outer Voronoi vertices. Every edge lists its left cell first.

use crate::geometry::{Line, Polygon};
use crate::math::Point2;

use super::{CellIndex, DiagramBuilder, SourceCategory, VoronoiDiagram};

pub(crate) struct Fixture {
    pub name: &'static str,
    pub polygon: Polygon,
    pub lines: Vec<Line>,
    pub diagram: VoronoiDiagram,
}

#[derive(Clone, Copy)]
enum Site {
    P(usize),
    S(usize),
}

use Site::{P, S};

type EdgeSpec = (Site, Site, usize, Option<usize>);

#[allow(clippy::cast_precision_loss)]
fn assemble(
    name: &'static str,
    coords: &[(i64, i64)],
    extra: &[Point2],
    edges: &[EdgeSpec],
) -> Fixture {
    let polygon = Polygon::from_coords(coords);
    let lines = polygon.lines();
    let n = coords.len();

    let mut b = DiagramBuilder::new();
    let points: Vec<CellIndex> = (0..n)
        .map(|i| b.add_cell(i, SourceCategory::SegmentStartPoint))
        .collect();
    let segments: Vec<CellIndex> = (0..n)
        .map(|i| b.add_cell(i, SourceCategory::InitialSegment))
        .collect();
    let cell = |s: Site| match s {
        P(i) => points[i],
        S(i) => segments[i],
    };

    let mut vertices = Vec::new();
    for &(x, y) in coords {
        vertices.push(b.add_vertex(Point2::new(x as f64, y as f64)));
    }
    for &p in extra {
        vertices.push(b.add_vertex(p));
    }
    for &(left, right, from, to) in edges {
        b.add_edge(cell(left), cell(right), Some(vertices[from]), to.map(|t| vertices[t]));
    }

    let diagram = match b.build(&lines) {
        Ok(d) => d,
        Err(e) => panic!("fixture {name}: {e}"),
    };
    Fixture {
        name,
        polygon,
        lines,
        diagram,
    }
}

/// The square (0,0)-(100,0)-(100,100)-(0,100).
pub(crate) fn square() -> Fixture {
    const C: usize = 4;
    assemble(
        "square",
        &[(0, 0), (100, 0), (100, 100), (0, 100)],
        &[Point2::new(50.0, 50.0)],
        &[
            (S(3), S(0), 0, Some(C)),
            (S(0), S(1), 1, Some(C)),
            (S(1), S(2), 2, Some(C)),
            (S(2), S(3), 3, Some(C)),
            (S(0), P(0), 0, None),
            (P(0), S(3), 0, None),
            (P(1), S(0), 1, None),
            (S(1), P(1), 1, None),
            (P(2), S(1), 2, None),
            (S(2), P(2), 2, None),
            (P(3), S(2), 3, None),
            (S(3), P(3), 3, None),
        ],
    )
}

/// Inradius of the right isosceles triangle with legs of 100.
pub(crate) fn triangle_inradius() -> f64 {
    100.0 / (2.0 + std::f64::consts::SQRT_2)
}

/// The right isosceles triangle (0,0)-(100,0)-(0,100).
pub(crate) fn triangle() -> Fixture {
    const I: usize = 3;
    let r = triangle_inradius();
    assemble(
        "triangle",
        &[(0, 0), (100, 0), (0, 100)],
        &[Point2::new(r, r)],
        &[
            (S(2), S(0), 0, Some(I)),
            (S(0), S(1), 1, Some(I)),
            (S(1), S(2), 2, Some(I)),
            (S(0), P(0), 0, None),
            (P(0), S(2), 0, None),
            (P(1), S(0), 1, None),
            (S(1), P(1), 1, None),
            (P(2), S(1), 2, None),
            (S(2), P(2), 2, None),
        ],
    )
}

/// An L shape: a 300x100 foot with a 100x100 arm on its left end.
///
/// Point 3 at (100,100) is the only reflex corner.
pub(crate) fn lshape() -> Fixture {
    lshape_with_far_vertex(lshape_far_vertex())
}

/// The L's outer vertex between the hull points (300,100) and (100,200).
pub(crate) fn lshape_far_vertex() -> Point2 {
    Point2::new(300.0, 350.0)
}

/// The L shape with its outer vertex moved to `far`, which may be garbage.
pub(crate) fn lshape_with_far_vertex(far: Point2) -> Fixture {
    const A: usize = 6;
    const B: usize = 7;
    const C: usize = 8;
    const D: usize = 9;
    const E: usize = 10;
    const F: usize = 11;
    const G: usize = 12;
    let e = 200.0 - 20_000f64.sqrt();
    assemble(
        "lshape",
        &[(0, 0), (300, 0), (300, 100), (100, 100), (100, 200), (0, 200)],
        &[
            Point2::new(250.0, 50.0),
            Point2::new(100.0, 50.0),
            Point2::new(50.0, 150.0),
            Point2::new(50.0, 100.0),
            Point2::new(e, e),
            Point2::new(200.0, 200.0),
            far,
        ],
        &[
            (S(5), S(0), 0, Some(E)),
            (S(0), S(1), 1, Some(A)),
            (S(1), S(2), 2, Some(A)),
            (S(0), S(2), A, Some(B)),
            (P(3), S(2), B, Some(3)),
            (S(0), P(3), B, Some(E)),
            (S(3), S(4), 4, Some(C)),
            (S(4), S(5), 5, Some(C)),
            (S(3), S(5), C, Some(D)),
            (S(3), P(3), D, Some(3)),
            (P(3), S(5), D, Some(E)),
            (S(3), S(2), 3, Some(F)),
            (P(4), S(3), 4, Some(F)),
            (P(4), S(2), F, Some(G)),
            (S(2), P(2), 2, Some(G)),
            (P(4), P(2), G, None),
            (S(0), P(0), 0, None),
            (P(0), S(5), 0, None),
            (P(1), S(0), 1, None),
            (S(1), P(1), 1, None),
            (P(2), S(1), 2, None),
            (S(4), P(4), 4, None),
            (P(5), S(4), 5, None),
            (S(5), P(5), 5, None),
        ],
    )
}

/// Distance of the bow-tie's side vertices from the left and right edges.
pub(crate) fn bowtie_lobe_radius() -> f64 {
    5000.0 / (40.0 + 100f64.hypot(40.0))
}

/// A bow-tie: two lobes joined by a 20 unit wide neck between the notch
/// points (100,40) and (100,60).
pub(crate) fn bowtie() -> Fixture {
    const L: usize = 6;
    const M1: usize = 7;
    const M2: usize = 8;
    const R: usize = 9;
    const Q1: usize = 10;
    const Q2: usize = 11;
    let l = bowtie_lobe_radius();
    assemble(
        "bowtie",
        &[(0, 0), (100, 40), (200, 0), (200, 100), (100, 60), (0, 100)],
        &[
            Point2::new(l, 50.0),
            Point2::new(96.0, 50.0),
            Point2::new(104.0, 50.0),
            Point2::new(200.0 - l, 50.0),
            Point2::new(100.0, -250.0),
            Point2::new(100.0, 350.0),
        ],
        &[
            (S(5), S(0), 0, Some(L)),
            (S(4), S(5), 5, Some(L)),
            (S(4), S(0), L, Some(M1)),
            (P(1), S(0), M1, Some(1)),
            (S(4), P(4), M1, Some(4)),
            (P(4), P(1), M1, Some(M2)),
            (S(1), P(1), M2, Some(1)),
            (P(4), S(3), M2, Some(4)),
            (S(3), S(1), M2, Some(R)),
            (S(1), S(2), 2, Some(R)),
            (S(2), S(3), 3, Some(R)),
            (S(1), S(0), 1, Some(Q1)),
            (S(0), P(0), 0, Some(Q1)),
            (P(2), S(1), 2, Some(Q1)),
            (P(2), P(0), Q1, None),
            (S(4), S(3), 4, Some(Q2)),
            (S(3), P(3), 3, Some(Q2)),
            (P(5), S(4), 5, Some(Q2)),
            (P(5), P(3), Q2, None),
            (P(0), S(5), 0, None),
            (S(2), P(2), 2, None),
            (P(3), S(2), 3, None),
            (S(5), P(5), 5, None),
        ],
    )
}

pub(crate) fn all() -> Vec<Fixture> {
    vec![square(), triangle(), lshape(), bowtie()]
}
