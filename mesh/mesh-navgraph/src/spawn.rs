//! Spawn node selection.

use mesh_types::Point3;

use crate::error::{ExtractError, ExtractResult};

/// The single candidate designated as the traversal entry point.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnNode {
    /// Candidate index of the chosen endpoint.
    pub candidate: usize,
    /// World-space position of the chosen endpoint.
    pub position: Point3<f64>,
}

/// Select the spawn node from the paired edge endpoints.
///
/// Scans the pair list in order and keeps the endpoint with the strictly
/// lowest elevation (`z`); an exact elevation tie falls to the endpoint
/// closer to the reference point. The scan covers pair-list entries, not
/// the deduplicated edge set, so both endpoints of every pair compete.
///
/// # Errors
///
/// Returns [`ExtractError::NoEdges`] for an empty pair list — a missing
/// spawn is reported, never defaulted.
pub fn select_spawn_node(
    candidates: &[Point3<f64>],
    pair_list: &[usize],
    reference_point: &Point3<f64>,
) -> ExtractResult<SpawnNode> {
    let mut best: Option<(usize, f64, f64)> = None;

    for &candidate in pair_list {
        let position = candidates[candidate];
        let reference_distance = (position - reference_point).norm();

        match best {
            None => best = Some((candidate, position.z, reference_distance)),
            Some((_, lowest, closest)) => {
                #[allow(clippy::float_cmp)]
                // Exact equality intended: the tie-break only applies to
                // endpoints at literally the same elevation.
                if position.z < lowest
                    || (position.z == lowest && reference_distance < closest)
                {
                    best = Some((candidate, position.z, reference_distance));
                }
            }
        }
    }

    best.map(|(candidate, _, _)| SpawnNode {
        candidate,
        position: candidates[candidate],
    })
    .ok_or(ExtractError::NoEdges {
        candidates: candidates.len(),
    })
}
