//! Pipeline driver: mesh in, edge graph out.

use mesh_types::IndexedMesh;
use tracing::{debug, info};

use crate::angle::accumulate_vertex_angles;
use crate::candidates::cluster_boundary_candidates;
use crate::error::{ExtractError, ExtractResult};
use crate::frame::LevelFrame;
use crate::graph::{EdgeGraph, assemble_edges};
use crate::normals::estimate_normals;
use crate::pairing::pair_candidates;
use crate::params::ExtractParams;
use crate::spawn::select_spawn_node;

/// Counters describing one extraction run.
///
/// The non-fatal heuristic outcomes live here: skipped degenerate faces,
/// candidates merged by deduplication, candidates the pairing never
/// consumed, and candidates that could not carry a normal.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractStats {
    /// Vertices below the boundary angle threshold, before deduplication.
    pub boundary_vertices: usize,
    /// Boundary vertices merged into an earlier candidate.
    pub merged_candidates: usize,
    /// Accepted candidates entering pairing.
    pub candidate_count: usize,
    /// Degenerate faces that contributed no angles.
    pub degenerate_faces: usize,
    /// Edges in the final graph.
    pub edge_count: usize,
    /// Candidates the long-range pairing never consumed.
    pub unpaired_candidates: usize,
    /// Candidates with no short-range neighbor.
    pub neighborless_candidates: usize,
    /// Candidates with neighbors whose normal still collapsed (neighbor
    /// direction parallel to the lateral axis).
    pub degenerate_normals: usize,
}

impl std::fmt::Display for ExtractStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Extraction stats:")?;
        writeln!(f, "  Boundary vertices: {}", self.boundary_vertices)?;
        writeln!(f, "  Candidates: {}", self.candidate_count)?;
        writeln!(f, "  Merged away: {}", self.merged_candidates)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Unpaired candidates: {}", self.unpaired_candidates)?;
        writeln!(
            f,
            "  Neighborless candidates: {}",
            self.neighborless_candidates
        )?;
        writeln!(f, "  Degenerate normals: {}", self.degenerate_normals)?;
        write!(f, "  Degenerate faces skipped: {}", self.degenerate_faces)
    }
}

/// Convert a triangulated surface mesh into a navigable boundary graph.
///
/// Runs the full pipeline once, synchronously:
///
/// 1. accumulate subtended angles per distinct vertex position,
/// 2. cluster boundary candidates (threshold, world space, dedup),
/// 3. pair candidates long-range and record short-range adjacency,
/// 4. estimate per-candidate normals,
/// 5. assemble oriented edges with adjacency links,
/// 6. select the spawn node.
///
/// The function is pure with respect to its inputs: identical mesh, frame
/// and params produce an identical graph, so failures are never worth
/// retrying.
///
/// # Errors
///
/// - [`ExtractError::InvalidParams`] for bad params or frame data.
/// - [`ExtractError::EmptyMesh`] when the mesh has no vertices or faces.
/// - [`ExtractError::InvalidFaceIndex`] for out-of-range face indices.
/// - [`ExtractError::DegenerateTriangle`] in strict-degenerate mode.
/// - [`ExtractError::NoBoundaryCandidates`] when no vertex falls below the
///   boundary threshold.
/// - [`ExtractError::NoEdges`] when long-range pairing consumes nothing.
///
/// # Example
///
/// ```
/// use mesh_types::IndexedMesh;
/// use mesh_navgraph::{
///     extract_edge_graph, ExtractParams, LevelFrame, PairingExtents, Point3,
/// };
///
/// // A vertical unit quad: four boundary corners, two diagonal edges.
/// let mesh = IndexedMesh::from_raw(
///     &[
///         0.0, 0.0, 0.0, //
///         1.0, 0.0, 0.0, //
///         0.0, 0.0, 1.0, //
///         1.0, 0.0, 1.0, //
///     ],
///     &[0, 1, 3, 0, 3, 2],
/// );
/// let frame = LevelFrame::axis_aligned(
///     Point3::new(0.25, -2.0, 0.0),
///     PairingExtents::from_bounds(&mesh.bounds()),
/// );
///
/// let graph = extract_edge_graph(&mesh, &frame, &ExtractParams::default()).unwrap();
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.spawn().position, Point3::new(0.0, 0.0, 0.0));
/// ```
pub fn extract_edge_graph(
    mesh: &IndexedMesh,
    frame: &LevelFrame,
    params: &ExtractParams,
) -> ExtractResult<EdgeGraph> {
    params.validate()?;
    frame.validate()?;

    if mesh.is_empty() {
        return Err(ExtractError::EmptyMesh);
    }

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "starting boundary edge-graph extraction"
    );

    let sums = accumulate_vertex_angles(mesh, params)?;
    debug!(
        distinct_positions = sums.len(),
        degenerate_faces = sums.degenerate_faces(),
        "accumulated vertex angles"
    );

    let candidates = cluster_boundary_candidates(&sums, frame, params);
    if candidates.is_empty() {
        return Err(ExtractError::NoBoundaryCandidates);
    }

    let outcome = pair_candidates(&candidates.positions, &frame.extents, params);
    if outcome.pair_list.is_empty() {
        return Err(ExtractError::NoEdges {
            candidates: candidates.len(),
        });
    }

    let normals = estimate_normals(&candidates.positions, &outcome.adjacency);
    let edges = assemble_edges(
        &candidates.positions,
        &normals,
        &outcome.pair_list,
        &outcome.adjacency,
        &frame.reference_point,
    );
    let spawn = select_spawn_node(
        &candidates.positions,
        &outcome.pair_list,
        &frame.reference_point,
    )?;

    let neighborless = outcome.adjacency.neighborless_count();
    let missing_normals = normals.iter().filter(|n| n.is_none()).count();
    let stats = ExtractStats {
        boundary_vertices: candidates.boundary_vertices,
        merged_candidates: candidates.merged(),
        candidate_count: candidates.len(),
        degenerate_faces: sums.degenerate_faces(),
        edge_count: edges.len(),
        unpaired_candidates: outcome.unpaired_count(),
        neighborless_candidates: neighborless,
        degenerate_normals: missing_normals - neighborless,
    };

    info!(
        edges = stats.edge_count,
        candidates = stats.candidate_count,
        unpaired = stats.unpaired_candidates,
        "boundary edge-graph extraction complete"
    );

    Ok(EdgeGraph::new(
        edges,
        spawn,
        candidates.positions,
        outcome.adjacency,
        normals,
        stats,
    ))
}
