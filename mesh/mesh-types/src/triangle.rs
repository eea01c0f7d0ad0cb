//! Triangle type for geometric calculations.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// This is a utility type for geometric calculations. It stores the actual
/// vertex positions rather than indices.
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// // Interior angles of a right isoceles triangle
/// let angles = tri.corner_angles().unwrap();
/// assert!((angles[0] - 90.0).abs() < 1e-10);
/// assert!((angles[1] - 45.0).abs() < 1e-10);
/// assert!((angles[2] - 45.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Triangle;
    ///
    /// let tri = Triangle::from_arrays(
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    /// );
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// Get vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Compute the interior angle at each corner, in degrees.
    ///
    /// Entry `i` is the angle subtended at vertex `i` between the edges to
    /// the other two corners. For a non-degenerate triangle the entries sum
    /// to 180°.
    ///
    /// Returns `None` when any edge has (near-)zero length — the angle at a
    /// collapsed corner is undefined and must never leak into angle sums as
    /// NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Triangle, Point3};
    ///
    /// // Degenerate: two coincident corners
    /// let degen = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    /// );
    /// assert!(degen.corner_angles().is_none());
    /// ```
    #[must_use]
    pub fn corner_angles(&self) -> Option<[f64; 3]> {
        Some([
            corner_angle(&self.v0, &self.v1, &self.v2)?,
            corner_angle(&self.v1, &self.v0, &self.v2)?,
            corner_angle(&self.v2, &self.v0, &self.v1)?,
        ])
    }

    /// Compute the lengths of the three edges.
    ///
    /// Returns `[len01, len12, len20]` where `lenXY` is the distance from vX to vY.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Triangle, Point3};
    ///
    /// // 3-4-5 right triangle
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(3.0, 0.0, 0.0),
    ///     Point3::new(0.0, 4.0, 0.0),
    /// );
    /// let lengths = tri.edge_lengths();
    /// assert!((lengths[0] - 3.0).abs() < 1e-10);  // v0 -> v1
    /// assert!((lengths[1] - 5.0).abs() < 1e-10);  // v1 -> v2 (hypotenuse)
    /// assert!((lengths[2] - 4.0).abs() < 1e-10);  // v2 -> v0
    /// ```
    #[inline]
    #[must_use]
    pub fn edge_lengths(&self) -> [f64; 3] {
        [
            (self.v1 - self.v0).norm(),
            (self.v2 - self.v1).norm(),
            (self.v0 - self.v2).norm(),
        ]
    }

    /// Get the length of the shortest edge.
    #[inline]
    #[must_use]
    pub fn min_edge_length(&self) -> f64 {
        let [a, b, c] = self.edge_lengths();
        a.min(b).min(c)
    }

    /// Check if the triangle is degenerate (an edge shorter than `epsilon`).
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Edge length below which the triangle is degenerate.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.min_edge_length() < epsilon
    }
}

/// Interior angle in degrees at `at`, between the edges toward `a` and `b`.
///
/// `None` when either edge is too short to carry a direction.
fn corner_angle(at: &Point3<f64>, a: &Point3<f64>, b: &Point3<f64>) -> Option<f64> {
    let d1 = a - at;
    let d2 = b - at;
    if d1.norm_squared() <= f64::EPSILON || d2.norm_squared() <= f64::EPSILON {
        return None;
    }
    Some(d1.angle(&d2).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_angles_sum_to_half_turn() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.7, 2.1, 0.0),
        );
        let angles = tri.corner_angles();
        assert!(angles.is_some());
        let total: f64 = angles.map_or(0.0, |a| a.iter().sum());
        assert!((total - 180.0).abs() < 1e-9);
    }

    #[test]
    fn equilateral_corner_angles() {
        let sqrt3 = 3.0_f64.sqrt();
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, sqrt3, 0.0),
        );
        let angles = tri.corner_angles();
        assert!(angles.is_some());
        for angle in angles.iter().flatten() {
            assert!((angle - 60.0).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_corner_angles() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        );
        assert!(tri.corner_angles().is_none());
    }

    #[test]
    fn triangle_edge_lengths() {
        // 3-4-5 right triangle
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        );
        let lengths = tri.edge_lengths();
        assert!((lengths[0] - 3.0).abs() < 1e-10);
        assert!((lengths[1] - 5.0).abs() < 1e-10);
        assert!((lengths[2] - 4.0).abs() < 1e-10);
        assert!((tri.min_edge_length() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn degenerate_by_edge_length() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1e-12, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert!(tri.is_degenerate(1e-9));
        assert!(!tri.is_degenerate(1e-15));
    }

    #[test]
    fn vertices_roundtrip() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let [a, b, c] = tri.vertices();
        assert_eq!(a, tri.v0);
        assert_eq!(b, tri.v1);
        assert_eq!(c, tri.v2);
    }
}
