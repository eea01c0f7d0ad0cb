//! Core geometry types for boundary edge-graph extraction.
//!
//! This crate provides the foundational types consumed by the
//! `mesh-navgraph` pipeline:
//!
//! - [`IndexedMesh`] - A triangle surface mesh with indexed positions
//! - [`Triangle`] - A concrete triangle with corner-angle queries
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`PointKey`] - Quantized position key for position-keyed maps
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used
//! in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Game engines via thin adapters
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! The `mesh-navgraph` defaults assume unit-cell level meshes.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, Point3};
//!
//! // Create a simple triangle mesh
//! let mut mesh = IndexedMesh::new();
//! mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(0.5, 0.0, 1.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod key;
mod mesh;
mod triangle;

// Re-export core types
pub use bounds::Aabb;
pub use key::PointKey;
pub use mesh::IndexedMesh;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
