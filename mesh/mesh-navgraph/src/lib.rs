//! Boundary edge-graph extraction for level meshes.
//!
//! This crate converts a raw triangulated surface mesh into a navigable
//! boundary graph: a set of discrete edge records with orientation normals
//! and adjacency, plus a single designated spawn node. It is the one-shot
//! preprocessing step a level runs at load time, before any gameplay
//! interaction begins.
//!
//! # Algorithm
//!
//! The pipeline works on unordered mesh data with no pre-existing topology
//! information:
//!
//! 1. **Angle accumulation** - every triangle corner's subtended angle is
//!    summed per distinct vertex position. An interior vertex on a closed
//!    fan accumulates 360°; a boundary vertex falls short.
//! 2. **Candidate clustering** - positions below the boundary threshold are
//!    promoted to world space and deduplicated by minimum separation.
//! 3. **Pairing** - an all-pairs scan greedily joins candidates across
//!    macro-scale spans (edges) and records a short-range neighbor band
//!    (fine connectivity).
//! 4. **Normals** - per-candidate normals from the first neighbor direction
//!    crossed with the lateral axis.
//! 5. **Graph assembly** - pairs become directed edges oriented front/back
//!    against a reference point, with adjacency propagated between edges
//!    whose front candidates neighbor each other.
//! 6. **Spawn selection** - the lowest-elevation paired endpoint, ties
//!    broken by reference distance.
//!
//! The all-pairs scans are O(n²) over the candidate set; a load-time stall
//! is acceptable at the hundreds-of-candidates scale this targets, and the
//! distance rows can run on the rayon pool (see
//! [`ExtractParams::parallel`]).
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. The host that
//! owns mesh loading, rendering, and object lifecycle calls
//! [`extract_edge_graph`] once and consumes the returned [`EdgeGraph`].
//!
//! # Example
//!
//! ```
//! use mesh_types::IndexedMesh;
//! use mesh_navgraph::{
//!     extract_edge_graph, ExtractParams, LevelFrame, PairingExtents, Point3,
//! };
//!
//! // A vertical wall quad on the unit grid
//! let mesh = IndexedMesh::from_raw(
//!     &[
//!         0.0, 0.0, 0.0, //
//!         1.0, 0.0, 0.0, //
//!         0.0, 0.0, 1.0, //
//!         1.0, 0.0, 1.0, //
//!     ],
//!     &[0, 1, 3, 0, 3, 2],
//! );
//! let frame = LevelFrame::axis_aligned(
//!     Point3::new(0.25, -2.0, 0.0),
//!     PairingExtents::from_bounds(&mesh.bounds()),
//! );
//!
//! let graph = extract_edge_graph(&mesh, &frame, &ExtractParams::default())?;
//!
//! for edge in graph.edges() {
//!     println!("edge {:?} -> {:?}", edge.front, edge.back);
//! }
//! println!("spawn at {:?}", graph.spawn().position);
//! # assert_eq!(graph.edge_count(), 2);
//! # Ok::<(), mesh_navgraph::ExtractError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod angle;
mod candidates;
mod error;
mod extract;
mod frame;
mod graph;
mod normals;
mod pairing;
mod params;
mod spawn;

pub use angle::{AngleEntry, AngleSums, accumulate_vertex_angles};
pub use candidates::{BoundaryCandidates, cluster_boundary_candidates};
pub use error::{ExtractError, ExtractResult};
pub use extract::{ExtractStats, extract_edge_graph};
pub use frame::{LevelFrame, PairingExtents};
pub use graph::{Edge, EdgeGraph, EdgeId, assemble_edges};
pub use normals::estimate_normals;
pub use pairing::{CandidateAdjacency, PairingOutcome, pair_candidates};
pub use params::ExtractParams;
pub use spawn::{SpawnNode, select_spawn_node};

// Re-export the geometry types for convenience
pub use mesh_types::{Point3, Vector3};
