use crate::diagram::{CellIndex, EdgeIndex, VertexIndex, VoronoiDiagram};

use super::{Annotation, CellCategory, EdgeCategory, VertexCategory};

/// A broken annotation invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationViolation {
    /// A single edge joins an inside and an outside vertex, i.e. it crosses
    /// the contour without touching it.
    CrossesContour { edge: EdgeIndex },
    /// A half-edge category disagrees with the category of its `vertex1`.
    EdgeMismatch { edge: EdgeIndex },
    UnknownVertex { vertex: VertexIndex },
    UnknownCell { cell: CellIndex },
}

/// Checks `annotation` against the invariants every annotation of a
/// well-formed diagram satisfies.
#[must_use]
pub fn verify_annotation(
    diagram: &VoronoiDiagram,
    annotation: &Annotation,
) -> Vec<AnnotationViolation> {
    let mut violations = Vec::new();

    for vertex in diagram.vertices() {
        if annotation.vertex(vertex) == VertexCategory::Unknown {
            violations.push(AnnotationViolation::UnknownVertex { vertex });
        }
    }
    for cell in diagram.cells() {
        if annotation.cell(cell) == CellCategory::Unknown {
            violations.push(AnnotationViolation::UnknownCell { cell });
        }
    }
    for edge in diagram.edges() {
        let from = annotation.vertex_or_outside(diagram.vertex0(edge));
        let to = annotation.vertex_or_outside(diagram.vertex1(edge));
        if edge.index() % 2 == 0
            && matches!(
                (from, to),
                (VertexCategory::Inside, VertexCategory::Outside)
                    | (VertexCategory::Outside, VertexCategory::Inside)
            )
        {
            violations.push(AnnotationViolation::CrossesContour { edge });
        }
        if annotation.edge(edge) != EdgeCategory::from(to) {
            violations.push(AnnotationViolation::EdgeMismatch { edge });
        }
    }

    violations
}
