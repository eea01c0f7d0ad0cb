//! Parameters for edge-graph extraction.

use crate::error::{ExtractError, ExtractResult};

/// Configuration parameters for edge-graph extraction.
///
/// All distance thresholds are in world units. The defaults assume level
/// meshes built on a unit cell grid; scale them together with the mesh.
///
/// # Example
///
/// ```
/// use mesh_navgraph::ExtractParams;
///
/// // Defaults match the unit-cell tuning
/// let params = ExtractParams::default();
/// assert!((params.boundary_angle_threshold - 358.0).abs() < 1e-10);
///
/// // Or customize for a coarser mesh
/// let params = ExtractParams::default()
///     .with_min_candidate_separation(1.0)
///     .with_neighbor_band(1.8, 2.2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractParams {
    /// Angle sum (degrees) below which a vertex counts as boundary.
    ///
    /// An interior vertex on a closed triangle fan accumulates 360°; the
    /// threshold sits just below to absorb floating-point slack.
    /// Default: `358.0`
    pub boundary_angle_threshold: f64,

    /// Minimum world-space separation between accepted candidates.
    ///
    /// Boundary vertices closer than this to an already accepted candidate
    /// are treated as the same feature point and merged away.
    /// Default: `0.5`
    pub min_candidate_separation: f64,

    /// Lower bound (exclusive) of the short-range neighbor distance band.
    /// Default: `0.9`
    pub neighbor_band_min: f64,

    /// Upper bound (exclusive) of the short-range neighbor distance band.
    ///
    /// The band brackets the nominal mesh cell width; candidates one cell
    /// apart become mutual neighbors.
    /// Default: `1.1`
    pub neighbor_band_max: f64,

    /// Cell size of the decimal grid used to key positions.
    ///
    /// See [`PointKey`](mesh_types::PointKey). Must sit well below the mesh
    /// feature scale.
    /// Default: `1e-4`
    pub position_grid: f64,

    /// Edge length below which a triangle is degenerate.
    /// Default: `1e-9`
    pub min_edge_length: f64,

    /// Fail on degenerate triangles instead of skipping them.
    /// Default: `false`
    pub strict_degenerate: bool,

    /// Compute the all-pairs distance rows on the rayon thread pool.
    ///
    /// The greedy pairing commit pass stays sequential either way, so the
    /// output is identical; worthwhile from a few hundred candidates up.
    /// Default: `false`
    pub parallel: bool,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            boundary_angle_threshold: 358.0,
            min_candidate_separation: 0.5,
            neighbor_band_min: 0.9,
            neighbor_band_max: 1.1,
            position_grid: 1e-4,
            min_edge_length: 1e-9,
            strict_degenerate: false,
            parallel: false,
        }
    }
}

impl ExtractParams {
    /// Set the boundary angle threshold in degrees.
    #[must_use]
    pub fn with_boundary_angle_threshold(mut self, degrees: f64) -> Self {
        self.boundary_angle_threshold = degrees;
        self
    }

    /// Set the minimum candidate separation.
    #[must_use]
    pub fn with_min_candidate_separation(mut self, separation: f64) -> Self {
        self.min_candidate_separation = separation;
        self
    }

    /// Set the short-range neighbor distance band (exclusive bounds).
    #[must_use]
    pub fn with_neighbor_band(mut self, min: f64, max: f64) -> Self {
        self.neighbor_band_min = min;
        self.neighbor_band_max = max;
        self
    }

    /// Set the position quantization grid cell size.
    #[must_use]
    pub fn with_position_grid(mut self, grid: f64) -> Self {
        self.position_grid = grid;
        self
    }

    /// Set whether degenerate triangles abort extraction.
    #[must_use]
    pub fn with_strict_degenerate(mut self, strict: bool) -> Self {
        self.strict_degenerate = strict;
        self
    }

    /// Set whether distance rows are computed in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidParams`] for non-finite, negative,
    /// or inverted values.
    pub fn validate(&self) -> ExtractResult<()> {
        if !self.boundary_angle_threshold.is_finite()
            || self.boundary_angle_threshold <= 0.0
            || self.boundary_angle_threshold > 360.0
        {
            return Err(ExtractError::invalid_params(
                "boundary angle threshold must be in (0, 360] degrees",
            ));
        }
        if !self.min_candidate_separation.is_finite() || self.min_candidate_separation < 0.0 {
            return Err(ExtractError::invalid_params(
                "minimum candidate separation must be finite and non-negative",
            ));
        }
        if !self.neighbor_band_min.is_finite()
            || !self.neighbor_band_max.is_finite()
            || self.neighbor_band_min < 0.0
            || self.neighbor_band_min >= self.neighbor_band_max
        {
            return Err(ExtractError::invalid_params(
                "neighbor band bounds must be finite with min < max",
            ));
        }
        if !self.position_grid.is_finite() || self.position_grid <= 0.0 {
            return Err(ExtractError::invalid_params(
                "position grid must be finite and positive",
            ));
        }
        if !self.min_edge_length.is_finite() || self.min_edge_length < 0.0 {
            return Err(ExtractError::invalid_params(
                "minimum edge length must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(ExtractParams::default().validate().is_ok());
    }

    #[test]
    fn builder_setters() {
        let params = ExtractParams::default()
            .with_boundary_angle_threshold(300.0)
            .with_neighbor_band(1.8, 2.2)
            .with_parallel(true);
        assert!((params.boundary_angle_threshold - 300.0).abs() < f64::EPSILON);
        assert!((params.neighbor_band_min - 1.8).abs() < f64::EPSILON);
        assert!(params.parallel);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn inverted_band_rejected() {
        let params = ExtractParams::default().with_neighbor_band(1.1, 0.9);
        assert!(params.validate().is_err());
    }

    #[test]
    fn non_finite_threshold_rejected() {
        let params = ExtractParams::default().with_boundary_angle_threshold(f64::NAN);
        assert!(params.validate().is_err());

        let params = ExtractParams::default().with_boundary_angle_threshold(400.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn negative_separation_rejected() {
        let params = ExtractParams::default().with_min_candidate_separation(-1.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn zero_grid_rejected() {
        let params = ExtractParams::default().with_position_grid(0.0);
        assert!(params.validate().is_err());
    }
}
