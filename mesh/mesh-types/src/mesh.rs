//! Indexed triangle mesh.

use crate::{Aabb, Triangle};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle surface mesh.
///
/// Stores vertex positions and triangle faces separately, with faces
/// referencing positions by index. Positions are **not** required to be
/// unique: several triangle corners may carry the same coordinates, which
/// is exactly the situation position-keyed accumulation (see
/// [`PointKey`](crate::PointKey)) is built for.
///
/// # Memory Layout
///
/// - `positions`: `Vec<Point3<f64>>` - Vertex positions in mesh-local space
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Point3};
///
/// // Create a single triangle
/// let mut mesh = IndexedMesh::new();
/// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(0.0, 0.0, 1.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex positions in mesh-local space.
    pub positions: Vec<Point3<f64>>,

    /// Triangle faces as indices into the position array.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::IndexedMesh;
    ///
    /// let mesh = IndexedMesh::new();
    /// assert!(mesh.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `face_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from positions and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Point3};
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 0.0, 1.0),
    /// ];
    /// let faces = vec![[0, 1, 2]];
    ///
    /// let mesh = IndexedMesh::from_parts(positions, faces);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { positions, faces }
    }

    /// Create a mesh from raw coordinate and index data.
    ///
    /// This is the convenience entry point for callers that hold a flat
    /// vertex buffer and a flat triangle index list.
    ///
    /// # Arguments
    ///
    /// * `coordinates` - Flat array of positions `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat array of face indices `[v0a, v1a, v2a, v0b, v1b, v2b, ...]`
    ///
    /// Returns an empty mesh if either array length is not divisible by three.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::IndexedMesh;
    ///
    /// let coordinates = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = IndexedMesh::from_raw(&coordinates, &indices);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(coordinates: &[f64], indices: &[u32]) -> Self {
        if coordinates.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let positions = coordinates
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        let faces = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();

        Self { positions, faces }
    }

    /// Number of vertices in the mesh.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces in the mesh.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh carries no usable surface.
    ///
    /// A mesh with vertices but no faces (or vice versa) is still empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Get the triangle at a face index.
    ///
    /// Returns `None` if the face index is out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if the face references a position index outside the position
    /// array; validate untrusted input with the pipeline's index check first.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| Triangle {
            v0: self.positions[i0 as usize],
            v1: self.positions[i1 as usize],
            v2: self.positions[i2 as usize],
        })
    }

    /// Iterate over all faces as concrete triangles.
    ///
    /// # Panics
    ///
    /// Panics on faces referencing positions outside the position array,
    /// as with [`IndexedMesh::triangle`].
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.positions[i0 as usize],
            v1: self.positions[i1 as usize],
            v2: self.positions[i2 as usize],
        })
    }

    /// Compute the axis-aligned bounding box of all positions.
    ///
    /// Returns an empty [`Aabb`] for a mesh with no vertices.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Point3};
    ///
    /// let mut mesh = IndexedMesh::new();
    /// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
    /// mesh.positions.push(Point3::new(2.0, 0.0, 1.0));
    ///
    /// let size = mesh.bounds().size();
    /// assert!((size.x - 2.0).abs() < 1e-12);
    /// assert!((size.z - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_is_empty() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());

        let mut mesh2 = IndexedMesh::new();
        mesh2.positions.push(Point3::new(0.0, 0.0, 0.0));
        assert!(mesh2.is_empty()); // no faces

        mesh2.faces.push([0, 0, 0]);
        assert!(!mesh2.is_empty());
    }

    #[test]
    fn mesh_from_raw() {
        let coordinates = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        let indices = [0, 1, 2];

        let mesh = IndexedMesh::from_raw(&coordinates, &indices);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn mesh_from_raw_rejects_ragged_input() {
        let mesh = IndexedMesh::from_raw(&[0.0, 1.0], &[0, 1, 2]);
        assert!(mesh.is_empty());

        let mesh = IndexedMesh::from_raw(&[0.0, 0.0, 0.0], &[0, 1]);
        assert!(mesh.is_empty());
    }

    #[test]
    fn mesh_triangles() {
        let mesh = IndexedMesh::from_raw(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
            &[0, 1, 2],
        );

        let tris: Vec<Triangle> = mesh.triangles().collect();
        assert_eq!(tris.len(), 1);
        assert!((tris[0].v1.x - 1.0).abs() < f64::EPSILON);

        assert!(mesh.triangle(0).is_some());
        assert!(mesh.triangle(1).is_none());
    }

    #[test]
    fn mesh_bounds() {
        let mut mesh = IndexedMesh::new();
        mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(10.0, 5.0, 3.0));
        mesh.positions.push(Point3::new(-2.0, 8.0, 1.0));

        let bounds = mesh.bounds();
        assert!((bounds.min.x - (-2.0)).abs() < f64::EPSILON);
        assert!((bounds.max.x - 10.0).abs() < f64::EPSILON);
        assert!((bounds.max.y - 8.0).abs() < f64::EPSILON);
        assert!((bounds.max.z - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_mesh_bounds() {
        let mesh = IndexedMesh::new();
        assert!(mesh.bounds().is_empty());
    }
}
