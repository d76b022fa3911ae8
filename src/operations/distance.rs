use crate::diagram::{VertexIndex, VoronoiDiagram};
use crate::error::{OperationError, Result};
use crate::geometry::Line;
use crate::math::distance_2d::point_to_line_dist;
use crate::topology::{Annotation, VertexCategory};

/// Computes the signed distance of every Voronoi vertex to the contour.
///
/// Vertices on the contour get `0`, inside vertices a negative and outside
/// vertices a positive distance. The magnitude is the distance to the
/// vertex's generating sites: a point site if any cell around the vertex has
/// one, otherwise the supporting line of a segment site.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if `lines` is not the set of lines
/// the diagram was built over, or if `annotation` was made for another
/// diagram.
pub fn signed_vertex_distances(
    diagram: &VoronoiDiagram,
    lines: &[Line],
    annotation: &Annotation,
) -> Result<Vec<f64>> {
    if lines.len() != diagram.source_count() {
        return Err(OperationError::InvalidInput(format!(
            "diagram was built over {} lines, got {}",
            diagram.source_count(),
            lines.len()
        ))
        .into());
    }
    if !annotation.fits(diagram) {
        return Err(OperationError::InvalidInput(
            "annotation does not belong to this diagram".to_owned(),
        )
        .into());
    }
    Ok(diagram
        .vertices()
        .map(|v| signed_distance(diagram, lines, annotation, v))
        .collect())
}

fn signed_distance(
    diagram: &VoronoiDiagram,
    lines: &[Line],
    annotation: &Annotation,
    vertex: VertexIndex,
) -> f64 {
    let category = annotation.vertex(vertex);
    if category == VertexCategory::OnContour {
        return 0.0;
    }

    let position = diagram.position(vertex);
    let start = diagram.vertex_incident_edge(vertex);
    let mut edge = start;
    let mut segment_cell = None;
    let magnitude = loop {
        let cell = diagram.cell(edge);
        if diagram.contains_point(cell) {
            break (position - diagram.site_point(cell, lines)).norm();
        }
        segment_cell = Some(cell);
        edge = diagram.rot_next(edge);
        if edge == start {
            let Some(cell) = segment_cell else {
                break f64::NAN;
            };
            let line = diagram.source_line(cell, lines);
            break point_to_line_dist(&position, &line.a_f64(), &line.b_f64());
        }
    };

    match category {
        VertexCategory::Inside => -magnitude,
        VertexCategory::Outside => magnitude,
        VertexCategory::Unknown | VertexCategory::OnContour => {
            tracing::debug!(vertex = vertex.index(), "distance of unclassified vertex");
            magnitude
        }
    }
}
