//! Per-vertex subtended-angle accumulation.
//!
//! The boundary test rests on one observation: a vertex whose incident
//! triangles close a full fan around it subtends 360° in total, while a
//! vertex on an open boundary subtends less because part of its fan is
//! missing. This module walks every (triangle, corner) pair and accumulates
//! the corner angle into a running total keyed by the corner's local-space
//! position.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use mesh_types::{IndexedMesh, Point3, PointKey, Triangle};
use tracing::{debug, warn};

use crate::error::{ExtractError, ExtractResult};
use crate::params::ExtractParams;

/// Accumulated angle total for one distinct local-space position.
#[derive(Debug, Clone)]
pub struct AngleEntry {
    /// First-seen representative position for this key, in mesh-local space.
    pub position: Point3<f64>,
    /// Accumulated subtended angle in degrees.
    pub degrees: f64,
}

/// Angle sums keyed by distinct local-space position.
///
/// Iteration yields entries in **first-seen order** of the mesh traversal,
/// independent of hashing. Downstream clustering depends on a stable order:
/// candidate acceptance is first-wins, so an unstable order would make the
/// candidate set differ from run to run.
#[derive(Debug, Clone, Default)]
pub struct AngleSums {
    entries: Vec<AngleEntry>,
    index: HashMap<PointKey, usize>,
    degenerate_faces: usize,
}

impl AngleSums {
    /// Add a corner contribution for a position.
    fn add(&mut self, key: PointKey, position: Point3<f64>, degrees: f64) {
        match self.index.entry(key) {
            Entry::Occupied(slot) => {
                self.entries[*slot.get()].degrees += degrees;
            }
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(AngleEntry { position, degrees });
            }
        }
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &AngleEntry> {
        self.entries.iter()
    }

    /// Number of distinct positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no position was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of degenerate faces skipped during accumulation.
    #[must_use]
    pub const fn degenerate_faces(&self) -> usize {
        self.degenerate_faces
    }

    /// Look up the accumulated angle at a position, quantized on `grid`.
    #[must_use]
    pub fn sum_at(&self, position: &Point3<f64>, grid: f64) -> Option<f64> {
        self.index
            .get(&PointKey::quantize(position, grid))
            .map(|&i| self.entries[i].degrees)
    }
}

/// Accumulate subtended angles per distinct vertex position.
///
/// For every triangle, the interior angle at each of its three corners is
/// added to the total of that corner's position. Positions are grouped with
/// [`PointKey`] quantization so numerically noisy duplicates of the same
/// mesh vertex share one total.
///
/// Degenerate triangles (any edge shorter than `params.min_edge_length`)
/// contribute no angles: they are skipped and counted, or abort extraction
/// when `params.strict_degenerate` is set.
///
/// # Errors
///
/// - [`ExtractError::InvalidFaceIndex`] when a face references a vertex
///   outside the position array.
/// - [`ExtractError::DegenerateTriangle`] in strict mode.
///
/// # Example
///
/// ```
/// use mesh_types::IndexedMesh;
/// use mesh_navgraph::{accumulate_vertex_angles, ExtractParams};
///
/// // Single triangle: every corner subtends its interior angle once
/// let mesh = IndexedMesh::from_raw(
///     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
///     &[0, 1, 2],
/// );
/// let sums = accumulate_vertex_angles(&mesh, &ExtractParams::default()).unwrap();
/// assert_eq!(sums.len(), 3);
/// ```
pub fn accumulate_vertex_angles(
    mesh: &IndexedMesh,
    params: &ExtractParams,
) -> ExtractResult<AngleSums> {
    let vertex_count = mesh.vertex_count();
    let mut sums = AngleSums::default();

    for (face_idx, face) in mesh.faces.iter().enumerate() {
        for &index in face {
            if index as usize >= vertex_count {
                return Err(ExtractError::InvalidFaceIndex {
                    face: face_idx,
                    index,
                    vertex_count,
                });
            }
        }

        let triangle = Triangle::new(
            mesh.positions[face[0] as usize],
            mesh.positions[face[1] as usize],
            mesh.positions[face[2] as usize],
        );

        let angles = if triangle.is_degenerate(params.min_edge_length) {
            None
        } else {
            triangle.corner_angles()
        };

        let Some(angles) = angles else {
            if params.strict_degenerate {
                return Err(ExtractError::DegenerateTriangle { face: face_idx });
            }
            debug!(face = face_idx, "skipping degenerate triangle");
            sums.degenerate_faces += 1;
            continue;
        };

        for (corner, degrees) in triangle.vertices().into_iter().zip(angles) {
            let key = PointKey::quantize(&corner, params.position_grid);
            sums.add(key, corner, degrees);
        }
    }

    if sums.degenerate_faces > 0 {
        warn!(
            skipped = sums.degenerate_faces,
            "degenerate triangles contributed no angles"
        );
    }

    Ok(sums)
}
