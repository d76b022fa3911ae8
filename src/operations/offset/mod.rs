pub mod intersect;
pub mod trace;

pub use intersect::edge_offset_intersections;
pub use trace::trace_offset_loops;

use crate::annotated::AnnotatedDiagram;
use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::SCALING_FACTOR;

/// Parameters controlling offset curve generation.
#[derive(Debug, Clone, Copy)]
pub struct OffsetParams {
    /// Maximum distance between a discretized arc and the true arc, in
    /// integer units.
    pub discretization_error: f64,
}

impl Default for OffsetParams {
    fn default() -> Self {
        Self {
            discretization_error: 0.005 / SCALING_FACTOR,
        }
    }
}

/// Computes the offset curves of an annotated contour at a signed distance.
///
/// Positive distances grow the contour, negative distances shrink it. The
/// result may hold several loops (a shrinking contour can split) or none at
/// all (it can vanish).
#[derive(Debug)]
pub struct VoronoiOffset<'a> {
    annotated: &'a AnnotatedDiagram<'a>,
    distance: f64,
    params: OffsetParams,
}

impl<'a> VoronoiOffset<'a> {
    /// Creates a new offset operation.
    #[must_use]
    pub fn new(annotated: &'a AnnotatedDiagram<'a>, distance: f64, params: OffsetParams) -> Self {
        Self {
            annotated,
            distance,
            params,
        }
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the distance is zero or not
    /// finite, or if the discretization error is not a positive finite
    /// number.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        if !self.distance.is_finite() || self.distance == 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "offset distance must be finite and non-zero, got {}",
                self.distance
            ))
            .into());
        }
        let error = self.params.discretization_error;
        if !error.is_finite() || error <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "discretization error must be positive, got {error}"
            ))
            .into());
        }

        // Step 1: Crossings of the offset curve with the diagram edges.
        let points = edge_offset_intersections(self.annotated, self.distance);

        // Step 2: Link crossings cell by cell into loops.
        let loops = trace_offset_loops(
            self.annotated.diagram(),
            self.annotated.lines(),
            &points,
            self.distance,
            error,
        );

        tracing::debug!(distance = self.distance, loops = loops.len(), "offset done");
        Ok(loops)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::diagram::fixtures;
    use crate::math::distance_2d::point_to_ring_dist;
    use crate::math::polygon_2d::rotate_to_canonical_start;
    use crate::math::{to_point2, IntPoint};
    use proptest::prelude::*;

    const ERR: f64 = 0.5;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn offset(fx: &fixtures::Fixture, d: f64) -> Vec<Polygon> {
        init_tracing();
        let annotated = AnnotatedDiagram::new(&fx.diagram, &fx.lines).unwrap();
        let params = OffsetParams {
            discretization_error: ERR,
        };
        VoronoiOffset::new(&annotated, d, params).execute().unwrap()
    }

    // ── Parameters ──

    #[test]
    fn default_error_is_five_micrometers() {
        let params = OffsetParams::default();
        assert!((params.discretization_error - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_input() {
        let fx = fixtures::square();
        let annotated = AnnotatedDiagram::new(&fx.diagram, &fx.lines).unwrap();
        let params = OffsetParams::default();
        for d in [0.0, f64::NAN, f64::INFINITY] {
            assert!(VoronoiOffset::new(&annotated, d, params).execute().is_err());
        }
        for e in [0.0, -1.0, f64::NAN] {
            let params = OffsetParams {
                discretization_error: e,
            };
            assert!(VoronoiOffset::new(&annotated, 5.0, params).execute().is_err());
        }
    }

    // ── Scenarios ──

    #[test]
    fn square_grows_with_round_corners() {
        let fx = fixtures::square();
        let loops = offset(&fx, 10.0);
        assert_eq!(loops.len(), 1);
        let expected = 120.0 * 120.0 - 4.0 * 100.0 + std::f64::consts::PI * 100.0;
        let area = loops[0].signed_area();
        assert!(area > 0.0);
        // Chords stay within ERR of the four quarter arcs; each rounded arc
        // point moves by at most half a unit.
        let arcs = 4.0 * std::f64::consts::FRAC_PI_2 * 10.0;
        let rounding = 16.0 * 0.5;
        assert!((area - expected).abs() < arcs * ERR + rounding, "area={area}");
    }

    #[test]
    fn square_shrinks_exactly() {
        let fx = fixtures::square();
        let loops = offset(&fx, -10.0);
        assert_eq!(loops.len(), 1);
        let expected: Vec<IntPoint> = [(10, 10), (90, 10), (90, 90), (10, 90)]
            .iter()
            .map(|&(x, y)| IntPoint::new(x, y))
            .collect();
        assert_eq!(rotate_to_canonical_start(&loops[0].points), expected);
    }

    #[test]
    fn square_vanishes() {
        let fx = fixtures::square();
        assert!(offset(&fx, -60.0).is_empty());
    }

    #[test]
    fn triangle_vanishes_past_inradius() {
        let fx = fixtures::triangle();
        assert!(offset(&fx, -30.0).is_empty());
        assert_eq!(offset(&fx, -29.0).len(), 1);
    }

    #[test]
    fn lshape_stays_one_loop() {
        let fx = fixtures::lshape();
        for d in [10.0, 60.0, -10.0, -45.0] {
            let loops = offset(&fx, d);
            assert_eq!(loops.len(), 1, "d={d}");
            assert!(loops[0].is_ccw(), "d={d}");
        }
    }

    #[test]
    fn bowtie_splits_into_lobes() {
        let fx = fixtures::bowtie();
        for d in [-10.5, -15.0] {
            let loops = offset(&fx, d);
            assert_eq!(loops.len(), 2, "d={d}");
            // One lobe on each side of the neck.
            let left = loops.iter().filter(|l| l.points.iter().all(|p| p.x < 100)).count();
            assert_eq!(left, 1, "d={d}");
        }
        for d in [-5.0, 5.0, 300.0] {
            assert_eq!(offset(&fx, d).len(), 1, "d={d}");
        }
    }

    #[test]
    fn grow_and_shrink_match_analytic_areas() {
        let fx = fixtures::square();
        let grown = offset(&fx, 20.0);
        let shrunk = offset(&fx, -20.0);
        assert_eq!(grown.len(), 1);
        assert_eq!(shrunk.len(), 1);
        let pi = std::f64::consts::PI;
        let grown_area = grown[0].signed_area();
        assert!((grown_area - (140.0 * 140.0 - 4.0 * 400.0 + pi * 400.0)).abs() < 100.0);
        assert!((shrunk[0].signed_area() - 60.0 * 60.0).abs() < 1e-9);
    }

    // ── Properties ──

    fn offset_distance() -> impl Strategy<Value = f64> {
        prop_oneof![-45.0..-1.0f64, 1.0..80.0f64]
    }

    proptest! {
        #[test]
        fn output_points_keep_their_distance(d in offset_distance(), which in 0usize..4) {
            let fx = fixtures::all().swap_remove(which);
            let ring = fx.polygon.to_point2s();
            for l in offset(&fx, d) {
                for p in &l.points {
                    let dist = point_to_ring_dist(&to_point2(p), &ring);
                    prop_assert!(
                        (dist - d.abs()).abs() <= ERR + 1.0,
                        "{} d={d} dist={dist}",
                        fx.name
                    );
                }
            }
        }

        #[test]
        fn outputs_keep_input_winding(d in offset_distance(), which in 0usize..4) {
            let fx = fixtures::all().swap_remove(which);
            for l in offset(&fx, d) {
                prop_assert!(l.is_ccw(), "{} d={d}", fx.name);
            }
        }

        #[test]
        fn convex_area_grows_with_distance(a in 1.0..40.0f64, b in 1.0..40.0f64) {
            let fx = fixtures::square();
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assume!(hi - lo > 1.0);
            let small = offset(&fx, lo)[0].signed_area();
            let large = offset(&fx, hi)[0].signed_area();
            prop_assert!(small < large);
            let deep = offset(&fx, -hi);
            let shallow = offset(&fx, -lo)[0].signed_area();
            prop_assert!(deep.first().map_or(0.0, Polygon::signed_area) < shallow);
        }
    }
}
