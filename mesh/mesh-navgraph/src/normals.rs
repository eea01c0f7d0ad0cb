//! Candidate normal estimation.

use mesh_types::{Point3, Vector3};

use crate::pairing::CandidateAdjacency;

/// Estimate an outward-facing normal per candidate.
///
/// The estimate uses a single neighbor, not a neighborhood average: the
/// vector from the lower to the higher endpoint of the candidate's **first**
/// recorded neighbor link, crossed with the lateral (+X) axis. For
/// candidates on a vertically oriented boundary this points away from the
/// surface; it is a known approximation, not a general surface-normal
/// estimator.
///
/// Candidates without neighbors get `None` (nothing to cross against), as
/// do candidates whose first neighbor direction is parallel to the lateral
/// axis — the cross product collapses and a zero "normal" must not leak to
/// consumers that orient against it.
///
/// The result is unnormalized; its magnitude carries the neighbor distance.
///
/// # Example
///
/// ```
/// use mesh_navgraph::{estimate_normals, pair_candidates, ExtractParams, PairingExtents, Point3};
///
/// // Two candidates stacked one cell apart vertically
/// let candidates = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ];
/// let outcome = pair_candidates(
///     &candidates,
///     &PairingExtents::new(5.0, 5.0),
///     &ExtractParams::default(),
/// );
/// let normals = estimate_normals(&candidates, &outcome.adjacency);
///
/// // The up vector crossed with +X points along +Y for both
/// let n = normals[0].unwrap();
/// assert!(n.y > 0.0);
/// ```
#[must_use]
pub fn estimate_normals(
    candidates: &[Point3<f64>],
    adjacency: &CandidateAdjacency,
) -> Vec<Option<Vector3<f64>>> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, position)| {
            let &first = adjacency.neighbors(i).first()?;
            let neighbor = candidates[first];

            // Orient the span toward its higher endpoint before crossing,
            // so the normal never flips with neighbor recording order.
            let toward_upper = if position.z < neighbor.z {
                neighbor - position
            } else {
                position - neighbor
            };

            let normal = toward_upper.cross(&Vector3::x());
            if normal.norm_squared() <= f64::EPSILON {
                return None;
            }
            Some(normal)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::PairingExtents;
    use crate::pairing::pair_candidates;
    use crate::params::ExtractParams;
    use approx::assert_relative_eq;

    fn adjacency_for(candidates: &[Point3<f64>]) -> CandidateAdjacency {
        pair_candidates(
            candidates,
            &PairingExtents::new(100.0, 100.0),
            &ExtractParams::default(),
        )
        .adjacency
    }

    #[test]
    fn vertical_neighbor_yields_depth_normal() {
        let candidates = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)];
        let normals = estimate_normals(&candidates, &adjacency_for(&candidates));

        // (0,0,1) x (1,0,0) = (0,1,0), from either endpoint.
        for normal in normals.iter().flatten() {
            assert_relative_eq!(*normal, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        }
        assert_eq!(normals.iter().flatten().count(), 2);
    }

    #[test]
    fn span_orients_toward_higher_endpoint() {
        // Depth-axis neighbors at equal elevation: the tie falls to the
        // candidate-minus-neighbor branch, flipping sign between the two.
        let candidates = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        let normals = estimate_normals(&candidates, &adjacency_for(&candidates));

        // (0,-1,0) x (1,0,0) = (0,0,1) for the first candidate.
        let first = normals[0];
        assert!(first.is_some());
        assert!(first.map_or(0.0, |n| n.z) > 0.0);
        // (0,1,0) x (1,0,0) = (0,0,-1) for the second.
        assert!(normals[1].map_or(0.0, |n| n.z) < 0.0);
    }

    #[test]
    fn lateral_neighbor_yields_no_normal() {
        // Neighbor direction parallel to +X collapses the cross product.
        let candidates = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let normals = estimate_normals(&candidates, &adjacency_for(&candidates));

        assert!(normals.iter().all(Option::is_none));
    }

    #[test]
    fn neighborless_candidate_has_no_normal() {
        let candidates = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(50.0, 0.0, 0.0),
        ];
        let normals = estimate_normals(&candidates, &adjacency_for(&candidates));

        assert!(normals[0].is_some());
        assert!(normals[2].is_none());
    }

    #[test]
    fn magnitude_carries_neighbor_distance() {
        let candidates = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)];
        let normals = estimate_normals(&candidates, &adjacency_for(&candidates));
        assert_relative_eq!(normals[0].map_or(0.0, |n| n.norm()), 1.0, epsilon = 1e-12);
    }
}
