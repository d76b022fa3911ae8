use crate::diagram::{CellIndex, VoronoiDiagram};
use crate::error::{OperationError, Result};
use crate::geometry::Line;
use crate::math::{cross_2d, same_position};

use super::{Annotation, CellCategory, EdgeCategory, VertexCategory};

/// Classifies every vertex, half-edge and cell of a Voronoi diagram as
/// inside, outside or on the input contour.
///
/// Outer contours are expected counter-clockwise and holes clockwise, so
/// that the material lies to the left of every input line.
#[derive(Debug)]
pub struct TopologyAnnotator<'a> {
    diagram: &'a VoronoiDiagram,
    lines: &'a [Line],
}

impl<'a> TopologyAnnotator<'a> {
    /// Creates a new annotation pass over `diagram` built from `lines`.
    #[must_use]
    pub fn new(diagram: &'a VoronoiDiagram, lines: &'a [Line]) -> Self {
        Self { diagram, lines }
    }

    /// Annotates the diagram into a fresh side-table.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `lines` is not the set of
    /// lines the diagram was built over.
    pub fn execute(&self) -> Result<Annotation> {
        let mut annotation = Annotation::new(self.diagram);
        self.annotate_into(&mut annotation)?;
        Ok(annotation)
    }

    /// Resets `annotation` and fills it again. Repeated passes produce
    /// identical tables.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `lines` is not the set of
    /// lines the diagram was built over.
    pub fn annotate_into(&self, annotation: &mut Annotation) -> Result<()> {
        if self.lines.len() != self.diagram.source_count() {
            return Err(OperationError::InvalidInput(format!(
                "diagram was built over {} lines, got {}",
                self.diagram.source_count(),
                self.lines.len()
            ))
            .into());
        }
        annotation.reset(self.diagram);

        // Step 1: Vertices sitting on a contour point.
        self.mark_contour_points(annotation);

        // Step 2: Secondary edges touch the contour at their shared point.
        self.mark_secondary_edges(annotation);

        // Step 3: Infinite edges run away from the contour.
        self.mark_infinite_edges(annotation);

        // Step 4: Sides of edges bounding a segment cell.
        self.classify_segment_sides(annotation);

        // Step 5: Flood the remaining point/point regions.
        self.seed_fill(annotation);

        // Step 6: Half-edges point at their target vertex.
        for edge in self.diagram.edges() {
            let target = annotation.vertex_or_outside(self.diagram.vertex1(edge));
            annotation.set_edge(edge, EdgeCategory::from(target));
        }

        #[cfg(debug_assertions)]
        for violation in super::verify_annotation(self.diagram, annotation) {
            tracing::error!(?violation, "annotation invariant violated");
        }

        tracing::debug!(
            vertices = self.diagram.num_vertices(),
            cells = self.diagram.num_cells(),
            complete = annotation.is_complete(),
            "annotated voronoi diagram"
        );
        Ok(())
    }

    fn mark_contour_points(&self, annotation: &mut Annotation) {
        let vd = self.diagram;
        for cell in vd.cells().filter(|&c| vd.contains_point(c)) {
            let site = vd.site_point(cell, self.lines);
            for edge in vd.cell_edges(cell) {
                if let Some(v) = vd.vertex0(edge) {
                    if same_position(&vd.position(v), &site) {
                        annotation.set_vertex(v, VertexCategory::OnContour);
                    }
                }
            }
        }
    }

    fn mark_secondary_edges(&self, annotation: &mut Annotation) {
        let vd = self.diagram;
        for edge in vd.primary_halves().filter(|&e| vd.is_secondary(e)) {
            let cell = vd.cell(edge);
            let point_cell = if vd.contains_point(cell) {
                cell
            } else {
                vd.cell(vd.twin(edge))
            };
            let site = vd.site_point(point_cell, self.lines);
            for v in [vd.vertex0(edge), vd.vertex1(edge)].into_iter().flatten() {
                if same_position(&vd.position(v), &site) {
                    annotation.set_vertex(v, VertexCategory::OnContour);
                }
            }
        }
    }

    fn mark_infinite_edges(&self, annotation: &mut Annotation) {
        let vd = self.diagram;
        for edge in vd.edges().filter(|&e| vd.vertex1(e).is_none()) {
            if let Some(v) = vd.vertex0(edge) {
                if annotation.vertex(v) == VertexCategory::Unknown {
                    annotation.set_vertex(v, VertexCategory::Outside);
                }
            }
            annotation.merge_cell(vd.cell(edge), CellCategory::Outside);
            annotation.merge_cell(vd.cell(vd.twin(edge)), CellCategory::Outside);
        }
    }

    fn classify_segment_sides(&self, annotation: &mut Annotation) {
        let vd = self.diagram;
        for edge in vd.primary_halves().filter(|&e| vd.is_finite(e)) {
            let cell = vd.cell(edge);
            let twin_cell = vd.cell(vd.twin(edge));
            let segment_cell = if vd.contains_segment(cell) {
                cell
            } else if vd.contains_segment(twin_cell) {
                twin_cell
            } else {
                continue;
            };
            let line = vd.source_line(segment_cell, self.lines);
            let (a, dir) = (line.a_f64(), line.direction());

            let mut side = CellCategory::Unknown;
            for v in [vd.vertex0(edge), vd.vertex1(edge)].into_iter().flatten() {
                let current = annotation.vertex(v);
                if current == VertexCategory::OnContour {
                    continue;
                }
                let cross = cross_2d(&dir, &(vd.position(v) - a));
                let (vertex_side, cell_side) = if cross > 0.0 {
                    (VertexCategory::Inside, CellCategory::Inside)
                } else if cross < 0.0 {
                    (VertexCategory::Outside, CellCategory::Outside)
                } else {
                    continue;
                };
                if current == VertexCategory::Unknown {
                    annotation.set_vertex(v, vertex_side);
                }
                side = cell_side;
            }
            if side != CellCategory::Unknown {
                annotation.merge_cell(cell, side);
                annotation.merge_cell(twin_cell, side);
            }
        }
    }

    fn seed_fill(&self, annotation: &mut Annotation) {
        let vd = self.diagram;
        let mut queue: Vec<CellIndex> = vd
            .cells()
            .filter(|&c| {
                matches!(
                    annotation.cell(c),
                    CellCategory::Inside | CellCategory::Outside
                )
            })
            .collect();

        while let Some(cell) = queue.pop() {
            let (cell_side, vertex_side) = match annotation.cell(cell) {
                CellCategory::Inside => (CellCategory::Inside, VertexCategory::Inside),
                CellCategory::Outside => (CellCategory::Outside, VertexCategory::Outside),
                CellCategory::Unknown | CellCategory::Boundary => continue,
            };
            for edge in vd.cell_edges(cell) {
                if let Some(v) = vd.vertex0(edge) {
                    if annotation.vertex(v) == VertexCategory::Unknown {
                        annotation.set_vertex(v, vertex_side);
                    }
                }
                let neighbor = vd.cell(vd.twin(edge));
                let before = annotation.merge_cell(neighbor, cell_side);
                if before == CellCategory::Unknown {
                    queue.push(neighbor);
                }
            }
        }
    }
}
