//! Planar Voronoi diagram over line-segment sites.
//!
//! The diagram is stored as parallel arrays addressed by typed indices.
//! Half-edges come in twin pairs `2k`/`2k + 1`; a missing `vertex0` denotes a
//! point at infinity. Every cell is generated either by one input line
//! (segment cell) or by one end point of an input line (point cell).

mod builder;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod issues;

pub use builder::DiagramBuilder;
pub use issues::{detect_known_issues, KnownIssue};

use crate::geometry::Line;
use crate::math::{to_point2, Point2};

macro_rules! index_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position in the diagram's backing array.
            #[must_use]
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

index_type!(
    /// Handle of a Voronoi cell.
    CellIndex
);
index_type!(
    /// Handle of a Voronoi half-edge.
    EdgeIndex
);
index_type!(
    /// Handle of a Voronoi vertex.
    VertexIndex
);

/// Which part of its source line generated a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceCategory {
    /// The start point `a` of the source line.
    SegmentStartPoint,
    /// The end point `b` of the source line.
    SegmentEndPoint,
    /// The source line itself, in its given direction.
    InitialSegment,
    /// The source line itself, reversed by the construction.
    ReverseSegment,
}

impl SourceCategory {
    /// Whether the generating site is a point.
    #[must_use]
    pub fn is_point(self) -> bool {
        matches!(self, Self::SegmentStartPoint | Self::SegmentEndPoint)
    }
}

#[derive(Debug, Clone)]
struct CellData {
    source_index: usize,
    category: SourceCategory,
    incident_edge: EdgeIndex,
}

#[derive(Debug, Clone)]
struct EdgeData {
    cell: CellIndex,
    vertex0: Option<VertexIndex>,
    next: EdgeIndex,
    prev: EdgeIndex,
    secondary: bool,
    linear: bool,
}

#[derive(Debug, Clone)]
struct VertexData {
    position: Point2,
    incident_edge: EdgeIndex,
}

/// A read-only Voronoi diagram of a set of input lines.
///
/// Built by [`DiagramBuilder`]. All handles returned by the accessors are
/// valid for the diagram that produced them.
#[derive(Debug, Clone)]
pub struct VoronoiDiagram {
    cells: Vec<CellData>,
    edges: Vec<EdgeData>,
    vertices: Vec<VertexData>,
    source_count: usize,
}

impl VoronoiDiagram {
    /// Number of cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Number of half-edges (twice the number of edges).
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of input lines the diagram was built over.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.source_count
    }

    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        (0..self.cells.len()).map(CellIndex)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeIndex> {
        (0..self.edges.len()).map(EdgeIndex)
    }

    /// One half-edge of every twin pair (the even one).
    pub fn primary_halves(&self) -> impl Iterator<Item = EdgeIndex> {
        (0..self.edges.len()).step_by(2).map(EdgeIndex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexIndex> {
        (0..self.vertices.len()).map(VertexIndex)
    }

    // --- Cell accessors ---

    #[must_use]
    pub fn source_index(&self, cell: CellIndex) -> usize {
        self.cells[cell.0].source_index
    }

    #[must_use]
    pub fn source_category(&self, cell: CellIndex) -> SourceCategory {
        self.cells[cell.0].category
    }

    /// Whether the cell is generated by a point site.
    #[must_use]
    pub fn contains_point(&self, cell: CellIndex) -> bool {
        self.cells[cell.0].category.is_point()
    }

    /// Whether the cell is generated by a segment site.
    #[must_use]
    pub fn contains_segment(&self, cell: CellIndex) -> bool {
        !self.contains_point(cell)
    }

    #[must_use]
    pub fn cell_incident_edge(&self, cell: CellIndex) -> EdgeIndex {
        self.cells[cell.0].incident_edge
    }

    /// Walks the boundary of `cell` counter-clockwise, starting at its
    /// incident edge.
    pub fn cell_edges(&self, cell: CellIndex) -> CellEdges<'_> {
        let start = self.cell_incident_edge(cell);
        CellEdges {
            diagram: self,
            start,
            current: Some(start),
        }
    }

    /// The input line generating `cell`, or the line whose end point
    /// generates it.
    #[must_use]
    pub fn source_line<'a>(&self, cell: CellIndex, lines: &'a [Line]) -> &'a Line {
        &lines[self.source_index(cell)]
    }

    /// The contour point generating a point cell.
    ///
    /// For segment cells this is the segment's start point.
    #[must_use]
    pub fn site_point(&self, cell: CellIndex, lines: &[Line]) -> Point2 {
        let line = self.source_line(cell, lines);
        match self.source_category(cell) {
            SourceCategory::SegmentEndPoint => to_point2(&line.b),
            _ => to_point2(&line.a),
        }
    }

    // --- Edge accessors ---

    #[must_use]
    pub fn cell(&self, edge: EdgeIndex) -> CellIndex {
        self.edges[edge.0].cell
    }

    #[must_use]
    pub fn twin(&self, edge: EdgeIndex) -> EdgeIndex {
        EdgeIndex(edge.0 ^ 1)
    }

    #[must_use]
    pub fn next(&self, edge: EdgeIndex) -> EdgeIndex {
        self.edges[edge.0].next
    }

    #[must_use]
    pub fn prev(&self, edge: EdgeIndex) -> EdgeIndex {
        self.edges[edge.0].prev
    }

    /// Next half-edge counter-clockwise around `vertex0` of `edge`.
    #[must_use]
    pub fn rot_next(&self, edge: EdgeIndex) -> EdgeIndex {
        self.twin(self.prev(edge))
    }

    #[must_use]
    pub fn vertex0(&self, edge: EdgeIndex) -> Option<VertexIndex> {
        self.edges[edge.0].vertex0
    }

    #[must_use]
    pub fn vertex1(&self, edge: EdgeIndex) -> Option<VertexIndex> {
        self.edges[edge.0 ^ 1].vertex0
    }

    /// Whether either end lies at infinity.
    #[must_use]
    pub fn is_infinite(&self, edge: EdgeIndex) -> bool {
        self.vertex0(edge).is_none() || self.vertex1(edge).is_none()
    }

    #[must_use]
    pub fn is_finite(&self, edge: EdgeIndex) -> bool {
        !self.is_infinite(edge)
    }

    /// Whether the edge separates a segment from one of its own end points.
    #[must_use]
    pub fn is_secondary(&self, edge: EdgeIndex) -> bool {
        self.edges[edge.0].secondary
    }

    #[must_use]
    pub fn is_primary(&self, edge: EdgeIndex) -> bool {
        !self.is_secondary(edge)
    }

    /// Whether the edge is a straight line (all but point/segment bisectors).
    #[must_use]
    pub fn is_linear(&self, edge: EdgeIndex) -> bool {
        self.edges[edge.0].linear
    }

    // --- Vertex accessors ---

    #[must_use]
    pub fn position(&self, vertex: VertexIndex) -> Point2 {
        self.vertices[vertex.0].position
    }

    #[must_use]
    pub fn vertex_incident_edge(&self, vertex: VertexIndex) -> EdgeIndex {
        self.vertices[vertex.0].incident_edge
    }
}

/// Iterator over the boundary half-edges of one cell.
#[derive(Debug)]
pub struct CellEdges<'a> {
    diagram: &'a VoronoiDiagram,
    start: EdgeIndex,
    current: Option<EdgeIndex>,
}

impl Iterator for CellEdges<'_> {
    type Item = EdgeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.current?;
        let next = self.diagram.next(edge);
        self.current = (next != self.start).then_some(next);
        Some(edge)
    }
}
