//! World-space context supplied by the level host.

use mesh_types::{Aabb, Point3};
use nalgebra::Isometry3;

use crate::error::{ExtractError, ExtractResult};

/// Reference extents that gate long-range pairing.
///
/// A candidate pair only forms an edge when its distance exceeds **both**
/// extents, so only spans crossing the macro scale of the object qualify.
/// Callers usually read these off the object's bounds: height is the
/// bounds' extent along Z, depth along Y.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairingExtents {
    /// Object extent along the height (Z) axis.
    pub height: f64,
    /// Object extent along the depth (Y) axis.
    pub depth: f64,
}

impl PairingExtents {
    /// Create extents from explicit scalars.
    #[inline]
    #[must_use]
    pub const fn new(height: f64, depth: f64) -> Self {
        Self { height, depth }
    }

    /// Read extents off a bounding box (height = size.z, depth = size.y).
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    /// use mesh_navgraph::PairingExtents;
    ///
    /// let bounds = Aabb::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(4.0, 2.0, 3.0),
    /// );
    /// let extents = PairingExtents::from_bounds(&bounds);
    /// assert!((extents.height - 3.0).abs() < 1e-12);
    /// assert!((extents.depth - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_bounds(bounds: &Aabb) -> Self {
        let size = bounds.size();
        Self {
            height: size.z,
            depth: size.y,
        }
    }
}

/// World-space inputs for one extraction run.
///
/// The frame is what the host level object knows and the mesh does not:
/// where the mesh sits in the world, where the level's "front" reference
/// object is, and the macro extents that gate long-range pairing.
#[derive(Debug, Clone)]
pub struct LevelFrame {
    /// Transform from mesh-local space into world space.
    pub local_to_world: Isometry3<f64>,
    /// World-space reference point ("front") for edge orientation and
    /// spawn tie-breaking.
    pub reference_point: Point3<f64>,
    /// Reference extents gating long-range pairing.
    pub extents: PairingExtents,
}

impl LevelFrame {
    /// Create a frame from its parts.
    #[inline]
    #[must_use]
    pub const fn new(
        local_to_world: Isometry3<f64>,
        reference_point: Point3<f64>,
        extents: PairingExtents,
    ) -> Self {
        Self {
            local_to_world,
            reference_point,
            extents,
        }
    }

    /// Create a frame with an identity transform.
    ///
    /// For meshes already expressed in world space.
    #[inline]
    #[must_use]
    pub fn axis_aligned(reference_point: Point3<f64>, extents: PairingExtents) -> Self {
        Self::new(Isometry3::identity(), reference_point, extents)
    }

    /// Validate frame data.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidParams`] for non-finite extents or
    /// reference coordinates.
    pub fn validate(&self) -> ExtractResult<()> {
        if !self.extents.height.is_finite()
            || !self.extents.depth.is_finite()
            || self.extents.height < 0.0
            || self.extents.depth < 0.0
        {
            return Err(ExtractError::invalid_params(
                "pairing extents must be finite and non-negative",
            ));
        }
        if !self.reference_point.coords.iter().all(|c| c.is_finite()) {
            return Err(ExtractError::invalid_params(
                "reference point must be finite",
            ));
        }
        Ok(())
    }
}
