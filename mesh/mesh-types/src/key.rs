//! Quantized position keys.

use nalgebra::Point3;

/// A hashable key for grouping `f64` positions.
///
/// Floating-point coordinates make fragile map keys: two triangle corners
/// that are geometrically the same point can differ in the last bits after
/// independent arithmetic, and a map keyed on raw bits would split their
/// entries. `PointKey` canonicalizes a position onto a fixed decimal grid
/// before hashing, so coincident corners land on the same key.
///
/// The grid cell must be chosen well below the mesh feature scale; the
/// pipeline defaults to `1e-4` for unit-cell meshes.
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, PointKey};
///
/// let a = PointKey::quantize(&Point3::new(1.0, 2.0, 3.0), 1e-4);
/// let b = PointKey::quantize(&Point3::new(1.0 + 1e-9, 2.0, 3.0), 1e-4);
/// let c = PointKey::quantize(&Point3::new(1.1, 2.0, 3.0), 1e-4);
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointKey {
    /// Quantized X coordinate (grid cells).
    pub x: i64,
    /// Quantized Y coordinate (grid cells).
    pub y: i64,
    /// Quantized Z coordinate (grid cells).
    pub z: i64,
}

impl PointKey {
    /// Create a key directly from grid-cell coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Quantize a position onto a decimal grid with the given cell size.
    ///
    /// Coordinates are divided by `grid` and rounded to the nearest cell.
    /// `grid` must be positive and finite; the pipeline validates this
    /// before any keys are built.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: quantized coordinates stay far inside i64 range for any
    // mesh-scale input and grid above ~1e-10.
    pub fn quantize(point: &Point3<f64>, grid: f64) -> Self {
        Self {
            x: (point.x / grid).round() as i64,
            y: (point.y / grid).round() as i64,
            z: (point.z / grid).round() as i64,
        }
    }
}
