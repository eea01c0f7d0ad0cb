//! Directed edge records and the published edge graph.

use hashbrown::HashMap;
use mesh_types::{Point3, Vector3};

use crate::extract::ExtractStats;
use crate::pairing::CandidateAdjacency;
use crate::spawn::SpawnNode;

/// Index of an [`Edge`] within its [`EdgeGraph`].
pub type EdgeId = usize;

/// A directed, oriented boundary edge between two candidates.
///
/// Not a mesh edge in the triangulation sense: an `Edge` spans a
/// macro-scale boundary segment between two paired candidates. `front` is
/// the endpoint closer to the external reference point, `back` the other;
/// the normal is the front candidate's estimate (absent when the front
/// candidate had no usable neighbor direction).
///
/// Edges are immutable once the graph is built.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// World-space position of the front endpoint.
    pub front: Point3<f64>,
    /// World-space position of the back endpoint.
    pub back: Point3<f64>,
    /// Orientation normal taken from the front candidate, if estimated.
    pub normal: Option<Vector3<f64>>,
    /// Candidate index of the front endpoint.
    pub front_candidate: usize,
    /// Candidate index of the back endpoint.
    pub back_candidate: usize,
    /// Adjacent edges, linked through front-candidate adjacency.
    neighbors: Vec<EdgeId>,
}

impl Edge {
    /// Adjacent edges whose front candidates neighbor this edge's front.
    #[must_use]
    pub fn neighbors(&self) -> &[EdgeId] {
        &self.neighbors
    }

    /// Span length between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.back - self.front).norm()
    }

    /// Midpoint of the span.
    #[must_use]
    pub fn midpoint(&self) -> Point3<f64> {
        nalgebra::center(&self.front, &self.back)
    }
}

/// Build directed edges from the flat pair list and attach adjacency.
///
/// Consumes the pair list two entries at a time. Within each pair the
/// endpoint strictly closer to `reference_point` becomes the front (an
/// exact distance tie falls to the second endpoint). Each edge is
/// registered under its front candidate; afterwards, every short-range
/// neighbor of a front candidate that is itself a registered front
/// contributes one adjacency link. Neighbors that never became a front —
/// unpaired candidates, or back endpoints — contribute nothing.
///
/// # Example
///
/// ```
/// use mesh_navgraph::{
///     assemble_edges, estimate_normals, pair_candidates, ExtractParams,
///     PairingExtents, Point3,
/// };
///
/// let candidates = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ];
/// let outcome = pair_candidates(
///     &candidates,
///     &PairingExtents::new(1.0, 0.0),
///     &ExtractParams::default(),
/// );
/// let normals = estimate_normals(&candidates, &outcome.adjacency);
/// let reference = Point3::new(0.25, -2.0, 0.0);
///
/// let edges = assemble_edges(
///     &candidates,
///     &normals,
///     &outcome.pair_list,
///     &outcome.adjacency,
///     &reference,
/// );
/// assert_eq!(edges.len(), 2);
/// // The low corners are closer to the reference and face front
/// assert!(edges.iter().all(|e| e.front.z < 0.5));
/// ```
#[must_use]
pub fn assemble_edges(
    candidates: &[Point3<f64>],
    normals: &[Option<Vector3<f64>>],
    pair_list: &[usize],
    adjacency: &CandidateAdjacency,
    reference_point: &Point3<f64>,
) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::with_capacity(pair_list.len() / 2);
    let mut front_edge: HashMap<usize, EdgeId> = HashMap::new();

    for pair in pair_list.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);
        let a_dist = (candidates[a] - reference_point).norm();
        let b_dist = (candidates[b] - reference_point).norm();
        let (front, back) = if a_dist < b_dist { (a, b) } else { (b, a) };

        let id = edges.len();
        edges.push(Edge {
            front: candidates[front],
            back: candidates[back],
            normal: normals[front],
            front_candidate: front,
            back_candidate: back,
            neighbors: Vec::new(),
        });
        front_edge.insert(front, id);
    }

    // Propagate candidate adjacency onto the edges, in edge order.
    for id in 0..edges.len() {
        let front = edges[id].front_candidate;
        let links: Vec<EdgeId> = adjacency
            .neighbors(front)
            .iter()
            .filter_map(|neighbor| front_edge.get(neighbor).copied())
            .collect();
        edges[id].neighbors = links;
    }

    edges
}

/// The published result of one extraction run.
///
/// Owns the edge list, the spawn node, and the intermediate geometry the
/// edges were derived from. Everything is read-only; the accessors that
/// expose candidates, neighbor links, and normals exist for external debug
/// rendering and play no part in the computation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeGraph {
    edges: Vec<Edge>,
    spawn: SpawnNode,
    candidates: Vec<Point3<f64>>,
    adjacency: CandidateAdjacency,
    normals: Vec<Option<Vector3<f64>>>,
    stats: ExtractStats,
}

impl EdgeGraph {
    pub(crate) fn new(
        edges: Vec<Edge>,
        spawn: SpawnNode,
        candidates: Vec<Point3<f64>>,
        adjacency: CandidateAdjacency,
        normals: Vec<Option<Vector3<f64>>>,
        stats: ExtractStats,
    ) -> Self {
        Self {
            edges,
            spawn,
            candidates,
            adjacency,
            normals,
            stats,
        }
    }

    /// The ordered, immutable edge list.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up one edge by id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The designated spawn node.
    #[must_use]
    pub const fn spawn(&self) -> &SpawnNode {
        &self.spawn
    }

    /// All boundary candidates, in acceptance order (debug feed).
    #[must_use]
    pub fn candidates(&self) -> &[Point3<f64>] {
        &self.candidates
    }

    /// The short-range candidate adjacency (debug feed).
    #[must_use]
    pub const fn candidate_adjacency(&self) -> &CandidateAdjacency {
        &self.adjacency
    }

    /// Estimated normal of a candidate, if any (debug feed).
    #[must_use]
    pub fn candidate_normal(&self, candidate: usize) -> Option<Vector3<f64>> {
        self.normals.get(candidate).copied().flatten()
    }

    /// World-space segments for every directed neighbor link (debug feed).
    pub fn neighbor_links(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        self.adjacency
            .links()
            .map(|(i, j)| (self.candidates[i], self.candidates[j]))
    }

    /// Counters describing the extraction run.
    #[must_use]
    pub const fn stats(&self) -> &ExtractStats {
        &self.stats
    }
}
