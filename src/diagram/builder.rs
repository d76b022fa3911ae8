use std::collections::HashMap;

use crate::error::DiagramError;
use crate::geometry::Line;
use crate::math::Point2;

use super::{
    CellData, CellIndex, EdgeData, EdgeIndex, SourceCategory, VertexData, VertexIndex,
    VoronoiDiagram,
};

/// Assembles a [`VoronoiDiagram`] from cells, vertices and edges produced by
/// an external construction.
///
/// Edges are given as undirected bisectors with the cell on their left; the
/// builder derives the twin pairing, the `next`/`prev` links around every
/// cell, the incident edges and the secondary/linear flags, and rejects
/// inputs whose cell boundaries do not form closed cycles.
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    cells: Vec<(usize, SourceCategory)>,
    vertices: Vec<Point2>,
    halves: Vec<(CellIndex, Option<VertexIndex>)>,
}

impl DiagramBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell generated by (a part of) the input line `source_index`.
    pub fn add_cell(&mut self, source_index: usize, category: SourceCategory) -> CellIndex {
        self.cells.push((source_index, category));
        CellIndex(self.cells.len() - 1)
    }

    /// Adds a Voronoi vertex.
    pub fn add_vertex(&mut self, position: Point2) -> VertexIndex {
        self.vertices.push(position);
        VertexIndex(self.vertices.len() - 1)
    }

    /// Adds the bisector between `cell` and `twin_cell` running from `from`
    /// to `to` (`None` for a point at infinity), with `cell` on its left.
    ///
    /// Returns the half-edge bounding `cell`; its twin bounds `twin_cell`.
    pub fn add_edge(
        &mut self,
        cell: CellIndex,
        twin_cell: CellIndex,
        from: Option<VertexIndex>,
        to: Option<VertexIndex>,
    ) -> EdgeIndex {
        self.halves.push((cell, from));
        self.halves.push((twin_cell, to));
        EdgeIndex(self.halves.len() - 2)
    }

    /// Validates and links the diagram over `lines`.
    ///
    /// # Errors
    ///
    /// Returns a [`DiagramError`] if a cell references a line outside
    /// `lines`, an edge references an unknown cell or vertex, a vertex is
    /// isolated, a cell has no edges, or a cell boundary is not a single
    /// closed cycle.
    pub fn build(self, lines: &[Line]) -> Result<VoronoiDiagram, DiagramError> {
        self.validate_references(lines)?;

        let next = self.link_cells()?;
        let mut prev = vec![EdgeIndex(0); next.len()];
        for (e, n) in next.iter().enumerate() {
            prev[n.0] = EdgeIndex(e);
        }

        let mut cell_first: Vec<Option<EdgeIndex>> = vec![None; self.cells.len()];
        let mut vertex_first: Vec<Option<EdgeIndex>> = vec![None; self.vertices.len()];
        for (e, &(cell, vertex0)) in self.halves.iter().enumerate() {
            cell_first[cell.0].get_or_insert(EdgeIndex(e));
            if let Some(v) = vertex0 {
                vertex_first[v.0].get_or_insert(EdgeIndex(e));
            }
        }

        let mut cells = Vec::with_capacity(self.cells.len());
        for (c, &(source_index, category)) in self.cells.iter().enumerate() {
            let incident_edge = cell_first[c].ok_or(DiagramError::EmptyCell { cell: c })?;
            cells.push(CellData {
                source_index,
                category,
                incident_edge,
            });
        }
        self.check_cycles(&cells, &next)?;

        let mut vertices = Vec::with_capacity(self.vertices.len());
        for (v, &position) in self.vertices.iter().enumerate() {
            let incident_edge = vertex_first[v].ok_or(DiagramError::InvalidReference {
                kind: "isolated vertex",
                index: v,
            })?;
            vertices.push(VertexData {
                position,
                incident_edge,
            });
        }

        let edges = self
            .halves
            .iter()
            .enumerate()
            .map(|(e, &(cell, vertex0))| {
                let twin_cell = self.halves[e ^ 1].0;
                let secondary = self.is_secondary_pair(cell, twin_cell, lines);
                let mixed = self.cells[cell.0].1.is_point() != self.cells[twin_cell.0].1.is_point();
                EdgeData {
                    cell,
                    vertex0,
                    next: next[e],
                    prev: prev[e],
                    secondary,
                    linear: secondary || !mixed,
                }
            })
            .collect();

        Ok(VoronoiDiagram {
            cells,
            edges,
            vertices,
            source_count: lines.len(),
        })
    }

    fn validate_references(&self, lines: &[Line]) -> Result<(), DiagramError> {
        for (c, &(source_index, _)) in self.cells.iter().enumerate() {
            if source_index >= lines.len() {
                return Err(DiagramError::SourceOutOfRange {
                    cell: c,
                    source_index,
                    line_count: lines.len(),
                });
            }
        }
        for &(cell, vertex0) in &self.halves {
            if cell.0 >= self.cells.len() {
                return Err(DiagramError::InvalidReference {
                    kind: "cell",
                    index: cell.0,
                });
            }
            if let Some(v) = vertex0.filter(|v| v.0 >= self.vertices.len()) {
                return Err(DiagramError::InvalidReference {
                    kind: "vertex",
                    index: v.0,
                });
            }
        }
        Ok(())
    }

    /// Links every half-edge to the unique half-edge of the same cell that
    /// starts where it ends.
    fn link_cells(&self) -> Result<Vec<EdgeIndex>, DiagramError> {
        let mut starts: HashMap<(CellIndex, Option<VertexIndex>), Vec<usize>> = HashMap::new();
        for (e, &(cell, vertex0)) in self.halves.iter().enumerate() {
            starts.entry((cell, vertex0)).or_default().push(e);
        }

        let mut next = Vec::with_capacity(self.halves.len());
        for (e, &(cell, _)) in self.halves.iter().enumerate() {
            let vertex1 = self.halves[e ^ 1].1;
            match starts.get(&(cell, vertex1)).map(Vec::as_slice) {
                Some([n]) => next.push(EdgeIndex(*n)),
                Some([_, _, ..]) => {
                    return Err(DiagramError::AmbiguousLink { edge: e, cell: cell.0 })
                }
                _ => return Err(DiagramError::MissingLink { edge: e, cell: cell.0 }),
            }
        }
        Ok(next)
    }

    fn check_cycles(&self, cells: &[CellData], next: &[EdgeIndex]) -> Result<(), DiagramError> {
        let mut sizes = vec![0usize; cells.len()];
        for &(cell, _) in &self.halves {
            sizes[cell.0] += 1;
        }
        for (c, data) in cells.iter().enumerate() {
            let start = data.incident_edge;
            let mut e = next[start.0];
            let mut steps = 1;
            while e != start {
                steps += 1;
                if steps > sizes[c] {
                    return Err(DiagramError::OpenCell { cell: c });
                }
                e = next[e.0];
            }
            if steps != sizes[c] {
                return Err(DiagramError::OpenCell { cell: c });
            }
        }
        Ok(())
    }

    fn is_secondary_pair(&self, a: CellIndex, b: CellIndex, lines: &[Line]) -> bool {
        let (sa, ca) = self.cells[a.0];
        let (sb, cb) = self.cells[b.0];
        let ((point_source, point_category), segment_source) =
            match (ca.is_point(), cb.is_point()) {
                (true, false) => ((sa, ca), sb),
                (false, true) => ((sb, cb), sa),
                _ => return false,
            };
        let point_line = &lines[point_source];
        let point = if point_category == SourceCategory::SegmentEndPoint {
            point_line.b
        } else {
            point_line.a
        };
        let segment = &lines[segment_source];
        point == segment.a || point == segment.b
    }
}
