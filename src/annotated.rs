use crate::diagram::{detect_known_issues, VertexIndex, VoronoiDiagram};
use crate::error::Result;
use crate::geometry::{Line, Polygon};
use crate::operations::distance::signed_vertex_distances;
use crate::operations::offset::{OffsetParams, VoronoiOffset};
use crate::operations::skeleton::{SkeletonEdge, SkeletonEdges};
use crate::topology::{Annotation, TopologyAnnotator};

/// A Voronoi diagram together with its inside/outside annotation and the
/// signed contour distance of every vertex.
///
/// Built once per contour; any number of offsets can then be computed from
/// it, also from several threads at once.
#[derive(Debug, Clone)]
pub struct AnnotatedDiagram<'a> {
    diagram: &'a VoronoiDiagram,
    lines: &'a [Line],
    annotation: Annotation,
    distances: Vec<f64>,
}

impl<'a> AnnotatedDiagram<'a> {
    /// Annotates `diagram` built over `lines` and computes vertex distances.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `lines` is not the set of
    /// lines the diagram was built over.
    pub fn new(diagram: &'a VoronoiDiagram, lines: &'a [Line]) -> Result<Self> {
        for issue in detect_known_issues(diagram, lines) {
            tracing::warn!(?issue, "voronoi diagram has a known defect");
        }
        let annotation = TopologyAnnotator::new(diagram, lines).execute()?;
        let distances = signed_vertex_distances(diagram, lines, &annotation)?;
        Ok(Self {
            diagram,
            lines,
            annotation,
            distances,
        })
    }

    #[must_use]
    pub fn diagram(&self) -> &'a VoronoiDiagram {
        self.diagram
    }

    #[must_use]
    pub fn lines(&self) -> &'a [Line] {
        self.lines
    }

    #[must_use]
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// Signed distances indexed by vertex: negative inside the contour.
    #[must_use]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    #[must_use]
    pub fn distance(&self, vertex: VertexIndex) -> f64 {
        self.distances[vertex.index()]
    }

    /// Offsets the contour by `distance`. See [`VoronoiOffset`].
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`VoronoiOffset::execute`].
    pub fn offset(&self, distance: f64, params: OffsetParams) -> Result<Vec<Polygon>> {
        VoronoiOffset::new(self, distance, params).execute()
    }

    /// Finds the skeleton edges for the corner half-angle `threshold_alpha`.
    /// See [`SkeletonEdges`].
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`SkeletonEdges::execute`].
    pub fn skeleton_edges(&self, threshold_alpha: f64) -> Result<Vec<SkeletonEdge>> {
        SkeletonEdges::new(self, threshold_alpha).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::diagram::fixtures;
    use crate::error::{OffsetError, OperationError};
    use crate::topology::verify_annotation;
    use proptest::prelude::*;

    #[test]
    fn is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnnotatedDiagram<'_>>();
        assert_send_sync::<VoronoiDiagram>();
        assert_send_sync::<Annotation>();
    }

    #[test]
    fn parallel_offsets_match_sequential() {
        let fx = fixtures::lshape();
        let annotated = AnnotatedDiagram::new(&fx.diagram, &fx.lines).unwrap();
        let params = OffsetParams {
            discretization_error: 0.5,
        };
        let distances = [-30.0, -10.0, 10.0, 40.0];
        let sequential: Vec<_> = distances
            .iter()
            .map(|&d| annotated.offset(d, params).unwrap())
            .collect();
        let shared = &annotated;
        let parallel: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = distances
                .iter()
                .map(|&d| s.spawn(move || shared.offset(d, params).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn rejects_mismatched_lines() {
        let fx = fixtures::bowtie();
        let err = AnnotatedDiagram::new(&fx.diagram, &fx.lines[1..]).unwrap_err();
        assert!(matches!(
            err,
            OffsetError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn contour_vertices_have_zero_distance() {
        for fx in fixtures::all() {
            let annotated = AnnotatedDiagram::new(&fx.diagram, &fx.lines).unwrap();
            for p in fx.polygon.to_point2s() {
                let v = fx
                    .diagram
                    .vertices()
                    .find(|&v| fx.diagram.position(v) == p)
                    .unwrap();
                assert!(annotated.distance(v).abs() < 1e-12, "{}", fx.name);
            }
            assert_eq!(annotated.distances().len(), fx.diagram.num_vertices());
        }
    }

    proptest! {
        #[test]
        fn reannotation_is_stable(which in 0usize..4, passes in 1usize..4) {
            let fx = fixtures::all().swap_remove(which);
            let annotated = AnnotatedDiagram::new(&fx.diagram, &fx.lines).unwrap();
            let mut table = annotated.annotation().clone();
            let annotator = TopologyAnnotator::new(&fx.diagram, &fx.lines);
            for _ in 0..passes {
                annotator.annotate_into(&mut table).unwrap();
            }
            prop_assert_eq!(&table, annotated.annotation());
            prop_assert!(verify_annotation(&fx.diagram, &table).is_empty());
        }
    }
}
