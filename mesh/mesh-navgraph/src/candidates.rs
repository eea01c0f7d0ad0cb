//! Boundary candidate clustering.

use mesh_types::Point3;
use tracing::debug;

use crate::angle::AngleSums;
use crate::frame::LevelFrame;
use crate::params::ExtractParams;

/// The deduplicated, world-space boundary candidate set.
///
/// Owned by the clustering stage and fixed for the remainder of the
/// pipeline; every later stage refers to candidates by index into
/// `positions`.
#[derive(Debug, Clone)]
pub struct BoundaryCandidates {
    /// Accepted candidate positions in world space, in acceptance order.
    pub positions: Vec<Point3<f64>>,
    /// Number of vertices below the boundary threshold before
    /// deduplication.
    pub boundary_vertices: usize,
}

impl BoundaryCandidates {
    /// Number of accepted candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check whether no candidate was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of boundary vertices merged into an earlier candidate.
    #[must_use]
    pub fn merged(&self) -> usize {
        self.boundary_vertices - self.positions.len()
    }
}

/// Select and deduplicate boundary candidates from accumulated angle sums.
///
/// A position qualifies when its angle sum falls strictly below
/// `params.boundary_angle_threshold`. Qualifying positions are promoted to
/// world space through the frame's transform, then accepted only if no
/// previously accepted candidate lies within
/// `params.min_candidate_separation` — numerically distinct vertices on the
/// same geometric feature collapse onto the first one seen.
///
/// Acceptance follows the angle sums' first-seen order, so the result is
/// deterministic for a given mesh traversal.
///
/// # Example
///
/// ```
/// use mesh_types::IndexedMesh;
/// use mesh_navgraph::{
///     accumulate_vertex_angles, cluster_boundary_candidates, ExtractParams,
///     LevelFrame, PairingExtents, Point3,
/// };
///
/// let mesh = IndexedMesh::from_raw(
///     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0],
///     &[0, 1, 3, 0, 3, 2],
/// );
/// let params = ExtractParams::default();
/// let frame = LevelFrame::axis_aligned(
///     Point3::new(0.5, -2.0, 0.0),
///     PairingExtents::new(1.0, 0.0),
/// );
///
/// let sums = accumulate_vertex_angles(&mesh, &params).unwrap();
/// let candidates = cluster_boundary_candidates(&sums, &frame, &params);
///
/// // All four open-quad corners are boundary features
/// assert_eq!(candidates.len(), 4);
/// ```
#[must_use]
pub fn cluster_boundary_candidates(
    sums: &AngleSums,
    frame: &LevelFrame,
    params: &ExtractParams,
) -> BoundaryCandidates {
    let mut positions: Vec<Point3<f64>> = Vec::new();
    let mut boundary_vertices = 0;

    for entry in sums.iter() {
        if entry.degrees >= params.boundary_angle_threshold {
            continue;
        }
        boundary_vertices += 1;

        let world = frame.local_to_world.transform_point(&entry.position);
        let duplicate = positions
            .iter()
            .any(|accepted| (world - accepted).norm() < params.min_candidate_separation);
        if !duplicate {
            positions.push(world);
        }
    }

    debug!(
        boundary_vertices,
        candidates = positions.len(),
        "clustered boundary candidates"
    );

    BoundaryCandidates {
        positions,
        boundary_vertices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::accumulate_vertex_angles;
    use crate::frame::PairingExtents;
    use mesh_types::IndexedMesh;
    use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};

    fn quad_mesh() -> IndexedMesh {
        IndexedMesh::from_raw(
            &[
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, //
                1.0, 0.0, 1.0, //
            ],
            &[0, 1, 3, 0, 3, 2],
        )
    }

    fn identity_frame() -> LevelFrame {
        LevelFrame::axis_aligned(Point3::new(0.5, -2.0, 0.0), PairingExtents::new(1.0, 0.0))
    }

    #[test]
    fn open_quad_yields_four_candidates() {
        let params = ExtractParams::default();
        let sums = accumulate_vertex_angles(&quad_mesh(), &params).unwrap();
        let candidates = cluster_boundary_candidates(&sums, &identity_frame(), &params);

        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates.merged(), 0);
    }

    #[test]
    fn interior_vertices_are_not_candidates() {
        // 3x3-vertex grid: the center vertex closes a full fan.
        let mut mesh = IndexedMesh::new();
        for z in 0..3 {
            for x in 0..3 {
                mesh.positions
                    .push(Point3::new(f64::from(x), 0.0, f64::from(z)));
            }
        }
        for z in 0..2u32 {
            for x in 0..2u32 {
                let v = z * 3 + x;
                mesh.faces.push([v, v + 1, v + 4]);
                mesh.faces.push([v, v + 4, v + 3]);
            }
        }

        let params = ExtractParams::default();
        let sums = accumulate_vertex_angles(&mesh, &params).unwrap();
        let candidates = cluster_boundary_candidates(&sums, &identity_frame(), &params);

        // 8 rim vertices qualify; the interior one does not.
        assert_eq!(candidates.boundary_vertices, 8);
        assert!(
            !candidates
                .positions
                .iter()
                .any(|p| (p - Point3::new(1.0, 0.0, 1.0)).norm() < 1e-9)
        );
    }

    #[test]
    fn near_coincident_features_merge_first_wins() {
        // Two open triangles whose corners sit 0.2 apart: below the 0.5
        // separation, so the second feature merges into the first.
        let mesh = IndexedMesh::from_raw(
            &[
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, //
                0.2, 0.0, 0.0, //
                1.2, 0.0, 0.0, //
                0.2, 0.0, 1.0, //
            ],
            &[0, 1, 2, 3, 4, 5],
        );
        let params = ExtractParams::default();
        let sums = accumulate_vertex_angles(&mesh, &params).unwrap();
        let candidates = cluster_boundary_candidates(&sums, &identity_frame(), &params);

        assert_eq!(candidates.boundary_vertices, 6);
        assert_eq!(candidates.len(), 3);
        // First-accepted positions survive.
        assert!((candidates.positions[0] - Point3::new(0.0, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn candidates_are_promoted_to_world_space() {
        let params = ExtractParams::default();
        let sums = accumulate_vertex_angles(&quad_mesh(), &params).unwrap();

        let transform = Isometry3::from_parts(
            Translation3::new(10.0, 0.0, -2.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2),
        );
        let frame = LevelFrame::new(
            transform,
            Point3::new(10.0, -2.0, 0.0),
            PairingExtents::new(1.0, 0.0),
        );
        let candidates = cluster_boundary_candidates(&sums, &frame, &params);

        assert_eq!(candidates.len(), 4);
        // Local origin lands on the translation.
        assert!((candidates.positions[0] - Point3::new(10.0, 0.0, -2.0)).norm() < 1e-9);
        // Local +X rotates onto world +Y.
        assert!(
            candidates
                .positions
                .iter()
                .any(|p| (p - Point3::new(10.0, 1.0, -2.0)).norm() < 1e-9)
        );
    }

    #[test]
    fn clustering_is_idempotent() {
        let params = ExtractParams::default();
        let sums = accumulate_vertex_angles(&quad_mesh(), &params).unwrap();
        let frame = identity_frame();

        let first = cluster_boundary_candidates(&sums, &frame, &params);
        let second = cluster_boundary_candidates(&sums, &frame, &params);
        assert_eq!(first.positions, second.positions);
    }
}
