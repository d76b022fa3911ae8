mod annotate;
pub mod verify;

pub use annotate::TopologyAnnotator;
pub use verify::{verify_annotation, AnnotationViolation};

use crate::diagram::{CellIndex, EdgeIndex, VertexIndex, VoronoiDiagram};

/// Position of a Voronoi vertex relative to the input contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexCategory {
    #[default]
    Unknown,
    Inside,
    Outside,
    OnContour,
}

/// What a half-edge points to, looking from `vertex0` towards `vertex1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeCategory {
    #[default]
    Unknown,
    PointsInside,
    PointsOutside,
    PointsToContour,
}

impl From<VertexCategory> for EdgeCategory {
    fn from(target: VertexCategory) -> Self {
        match target {
            VertexCategory::Unknown => Self::Unknown,
            VertexCategory::Inside => Self::PointsInside,
            VertexCategory::Outside => Self::PointsOutside,
            VertexCategory::OnContour => Self::PointsToContour,
        }
    }
}

/// Position of a Voronoi cell relative to the input contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellCategory {
    #[default]
    Unknown,
    Inside,
    Outside,
    /// Seen both inside and outside: a segment cell straddling the contour.
    Boundary,
}

impl CellCategory {
    /// Combines two observations of the same cell.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Unknown, x) | (x, Self::Unknown) => x,
            (a, b) if a == b => a,
            _ => Self::Boundary,
        }
    }
}

/// Inside/outside categories of every element of one diagram, stored as
/// side-tables indexed by the diagram's handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    vertices: Vec<VertexCategory>,
    edges: Vec<EdgeCategory>,
    cells: Vec<CellCategory>,
}

impl Annotation {
    /// Creates an all-`Unknown` annotation sized for `diagram`.
    #[must_use]
    pub fn new(diagram: &VoronoiDiagram) -> Self {
        let mut annotation = Self::default();
        annotation.reset(diagram);
        annotation
    }

    /// Resets every category to `Unknown`, resizing for `diagram`.
    pub fn reset(&mut self, diagram: &VoronoiDiagram) {
        self.vertices.clear();
        self.vertices.resize(diagram.num_vertices(), VertexCategory::Unknown);
        self.edges.clear();
        self.edges.resize(diagram.num_edges(), EdgeCategory::Unknown);
        self.cells.clear();
        self.cells.resize(diagram.num_cells(), CellCategory::Unknown);
    }

    /// Whether the table is sized for `diagram`.
    #[must_use]
    pub fn fits(&self, diagram: &VoronoiDiagram) -> bool {
        self.vertices.len() == diagram.num_vertices()
            && self.edges.len() == diagram.num_edges()
            && self.cells.len() == diagram.num_cells()
    }

    #[must_use]
    pub fn vertex(&self, vertex: VertexIndex) -> VertexCategory {
        self.vertices[vertex.index()]
    }

    /// Category of `vertex`, with the point at infinity counted as outside.
    #[must_use]
    pub fn vertex_or_outside(&self, vertex: Option<VertexIndex>) -> VertexCategory {
        vertex.map_or(VertexCategory::Outside, |v| self.vertex(v))
    }

    #[must_use]
    pub fn edge(&self, edge: EdgeIndex) -> EdgeCategory {
        self.edges[edge.index()]
    }

    #[must_use]
    pub fn cell(&self, cell: CellIndex) -> CellCategory {
        self.cells[cell.index()]
    }

    /// Whether no element is left `Unknown`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.vertices.contains(&VertexCategory::Unknown)
            && !self.edges.contains(&EdgeCategory::Unknown)
            && !self.cells.contains(&CellCategory::Unknown)
    }

    pub(crate) fn set_vertex(&mut self, vertex: VertexIndex, category: VertexCategory) {
        self.vertices[vertex.index()] = category;
    }

    pub(crate) fn set_edge(&mut self, edge: EdgeIndex, category: EdgeCategory) {
        self.edges[edge.index()] = category;
    }

    /// Merges `category` into `cell`, returning the previous category.
    pub(crate) fn merge_cell(&mut self, cell: CellIndex, category: CellCategory) -> CellCategory {
        let slot = &mut self.cells[cell.index()];
        let before = *slot;
        *slot = before.merge(category);
        before
    }
}
