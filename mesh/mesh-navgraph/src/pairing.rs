//! Long-range candidate pairing and short-range adjacency.
//!
//! One all-pairs distance scan feeds two complementary heuristics:
//!
//! - **Long-range pairing** joins candidates that sit on opposite ends of a
//!   macro-scale boundary span. A pair only qualifies when its distance
//!   exceeds both reference extents, which keeps incidental close features
//!   from forming edges. Pairing is greedy and incremental: each first
//!   candidate commits to its closest qualifying partner, and both are
//!   consumed. Greedy matching is an approximation, not a minimum-weight
//!   matching; candidates can stay unpaired.
//! - **Short-range adjacency** records every pair inside a narrow band
//!   around the nominal cell width as mutual neighbors, regardless of
//!   consumption. This fine connectivity graph drives normal estimation
//!   and edge adjacency.

use mesh_types::Point3;
use rayon::prelude::*;
use tracing::debug;

use crate::frame::PairingExtents;
use crate::params::ExtractParams;

/// Short-range neighbor lists per candidate.
///
/// Neighbor lists keep **scan order** and are never deduplicated: the first
/// recorded neighbor is load-bearing for normal estimation. Adjacency is
/// symmetric because the scan visits both orders of every pair.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateAdjacency {
    adjacent: Vec<Vec<usize>>,
}

impl CandidateAdjacency {
    fn with_len(candidate_count: usize) -> Self {
        Self {
            adjacent: vec![Vec::new(); candidate_count],
        }
    }

    /// Get the neighbors of a candidate, in scan order.
    ///
    /// Returns an empty slice for an out-of-range index.
    #[must_use]
    pub fn neighbors(&self, candidate: usize) -> &[usize] {
        self.adjacent.get(candidate).map_or(&[], Vec::as_slice)
    }

    /// Check if two candidates are mutual neighbors.
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Number of candidates covered by this adjacency.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.adjacent.len()
    }

    /// Number of candidates with no neighbor in the band.
    ///
    /// These candidates get no normal and propagate no edge adjacency; the
    /// count is surfaced so callers can judge whether the band matches
    /// their mesh's cell size.
    #[must_use]
    pub fn neighborless_count(&self) -> usize {
        self.adjacent.iter().filter(|list| list.is_empty()).count()
    }

    /// Iterate all directed neighbor links as candidate index pairs.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacent
            .iter()
            .enumerate()
            .flat_map(|(i, list)| list.iter().map(move |&j| (i, j)))
    }
}

/// Output of the all-pairs scan.
#[derive(Debug, Clone)]
pub struct PairingOutcome {
    /// Flat pair list: candidates `(2i, 2i+1)` are the endpoints of one
    /// logical edge. Always even in length; no candidate appears twice.
    pub pair_list: Vec<usize>,
    /// Short-range neighbor graph over all candidates.
    pub adjacency: CandidateAdjacency,
}

impl PairingOutcome {
    /// Number of candidates the greedy pairing never consumed.
    #[must_use]
    pub fn unpaired_count(&self) -> usize {
        self.adjacency.candidate_count() - self.pair_list.len()
    }
}

/// Run the all-pairs scan over the candidate set.
///
/// Distances are computed row by row (optionally on the rayon pool, see
/// [`ExtractParams::parallel`]); the greedy commit pass that consumes
/// candidates is always sequential in candidate order, so the parallel and
/// serial paths produce identical output.
///
/// # Example
///
/// ```
/// use mesh_navgraph::{pair_candidates, ExtractParams, PairingExtents, Point3};
///
/// // Four corners of a unit quad; spans must exceed height 1.0
/// let candidates = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ];
/// let extents = PairingExtents::new(1.0, 0.0);
/// let outcome = pair_candidates(&candidates, &extents, &ExtractParams::default());
///
/// // Both diagonals qualify (sqrt(2) > 1); all sides fall in the
/// // neighbor band instead.
/// assert_eq!(outcome.pair_list, vec![0, 2, 1, 3]);
/// assert_eq!(outcome.adjacency.neighbors(0), &[1, 3]);
/// ```
#[must_use]
pub fn pair_candidates(
    candidates: &[Point3<f64>],
    extents: &PairingExtents,
    params: &ExtractParams,
) -> PairingOutcome {
    let n = candidates.len();
    let rows = distance_rows(candidates, params.parallel);

    let mut adjacency = CandidateAdjacency::with_len(n);
    let mut pair_list: Vec<usize> = Vec::new();
    let mut consumed = vec![false; n];

    for i in 0..n {
        let mut best: Option<(usize, f64)> = None;

        for j in 0..n {
            if j == i {
                continue;
            }
            let distance = rows[i][j];

            if distance > params.neighbor_band_min && distance < params.neighbor_band_max {
                adjacency.adjacent[i].push(j);
            }

            if consumed[i] || consumed[j] {
                continue;
            }
            if distance > extents.height
                && distance > extents.depth
                && best.is_none_or(|(_, closest)| distance < closest)
            {
                best = Some((j, distance));
            }
        }

        // Commit once the full scan for this candidate is done, so the
        // closest qualifying partner wins rather than the first seen.
        if let Some((j, _)) = best {
            pair_list.push(i);
            pair_list.push(j);
            consumed[i] = true;
            consumed[j] = true;
        }
    }

    debug!(
        candidates = n,
        pairs = pair_list.len() / 2,
        neighborless = adjacency.neighborless_count(),
        "paired candidates"
    );

    PairingOutcome {
        pair_list,
        adjacency,
    }
}

/// Compute the full distance matrix, one row per candidate.
fn distance_rows(candidates: &[Point3<f64>], parallel: bool) -> Vec<Vec<f64>> {
    let row = |i: usize| -> Vec<f64> {
        candidates
            .iter()
            .map(|p| (p - candidates[i]).norm())
            .collect()
    };

    if parallel {
        (0..candidates.len()).into_par_iter().map(row).collect()
    } else {
        (0..candidates.len()).map(row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn pair_list_is_even_with_unique_entries() {
        let candidates = unit_quad();
        let outcome = pair_candidates(
            &candidates,
            &PairingExtents::new(1.0, 0.0),
            &ExtractParams::default(),
        );

        assert_eq!(outcome.pair_list.len() % 2, 0);
        let mut seen = outcome.pair_list.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), outcome.pair_list.len());
    }

    #[test]
    fn pairs_span_the_diagonals() {
        let candidates = unit_quad();
        let outcome = pair_candidates(
            &candidates,
            &PairingExtents::new(1.0, 0.0),
            &ExtractParams::default(),
        );

        // Sides (distance 1) fail the strict extent floor; diagonals pair.
        assert_eq!(outcome.pair_list, vec![0, 2, 1, 3]);
        assert_eq!(outcome.unpaired_count(), 0);
    }

    #[test]
    fn closest_qualifying_partner_wins() {
        // Candidate 0 has two qualifying partners; the nearer one (index 2)
        // must win even though index 1 is scanned first.
        let candidates = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(0.0, 0.0, 2.0),
        ];
        let outcome = pair_candidates(
            &candidates,
            &PairingExtents::new(1.5, 0.0),
            &ExtractParams::default(),
        );

        assert_eq!(outcome.pair_list, vec![0, 2]);
        assert_eq!(outcome.unpaired_count(), 1);
    }

    #[test]
    fn consumed_candidates_are_excluded() {
        // Collinear column: 0 pairs with 1 (distance 2); 2 cannot reclaim
        // either consumed endpoint and stays unpaired.
        let candidates = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(0.0, 0.0, 4.0),
        ];
        let outcome = pair_candidates(
            &candidates,
            &PairingExtents::new(1.5, 0.0),
            &ExtractParams::default(),
        );

        assert_eq!(outcome.pair_list, vec![0, 1]);
        assert_eq!(outcome.unpaired_count(), 1);
    }

    #[test]
    fn band_adjacency_is_symmetric_and_ordered() {
        let candidates = unit_quad();
        let outcome = pair_candidates(
            &candidates,
            &PairingExtents::new(1.0, 0.0),
            &ExtractParams::default(),
        );
        let adjacency = &outcome.adjacency;

        // Unit sides are neighbors; diagonals (sqrt 2) are not.
        assert_eq!(adjacency.neighbors(0), &[1, 3]);
        assert_eq!(adjacency.neighbors(1), &[0, 2]);
        assert_eq!(adjacency.neighbors(2), &[1, 3]);
        assert_eq!(adjacency.neighbors(3), &[0, 2]);

        for (i, j) in adjacency.links() {
            assert!(adjacency.are_adjacent(j, i));
        }
    }

    #[test]
    fn band_bounds_are_exclusive() {
        let candidates = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.9, 0.0, 0.0),
            Point3::new(0.0, 1.1, 0.0),
        ];
        let outcome = pair_candidates(
            &candidates,
            &PairingExtents::new(5.0, 5.0),
            &ExtractParams::default(),
        );

        // Distances exactly on the band bounds are excluded.
        assert_eq!(outcome.adjacency.neighborless_count(), 3);
    }

    #[test]
    fn neighborless_candidates_are_counted() {
        let candidates = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ];
        let outcome = pair_candidates(
            &candidates,
            &PairingExtents::new(5.0, 5.0),
            &ExtractParams::default(),
        );

        assert!(outcome.adjacency.are_adjacent(0, 1));
        assert_eq!(outcome.adjacency.neighbors(2), &[] as &[usize]);
        assert_eq!(outcome.adjacency.neighborless_count(), 1);
    }

    #[test]
    fn parallel_path_matches_serial() {
        // Jittered grid cloud large enough to exercise several pairs.
        let mut candidates = Vec::new();
        for i in 0..40 {
            let f = f64::from(i);
            candidates.push(Point3::new(
                (f * 0.37).sin() * 6.0,
                (f * 0.53).cos() * 4.0,
                f * 0.25,
            ));
        }
        let extents = PairingExtents::new(3.0, 2.0);

        let serial = pair_candidates(&candidates, &extents, &ExtractParams::default());
        let parallel = pair_candidates(
            &candidates,
            &extents,
            &ExtractParams::default().with_parallel(true),
        );

        assert_eq!(serial.pair_list, parallel.pair_list);
        for i in 0..candidates.len() {
            assert_eq!(serial.adjacency.neighbors(i), parallel.adjacency.neighbors(i));
        }
    }
}
