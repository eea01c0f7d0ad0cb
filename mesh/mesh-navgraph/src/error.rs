//! Error types for edge-graph extraction.

use thiserror::Error;

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur during edge-graph extraction.
///
/// Two conditions from the extraction heuristics are deliberately *not*
/// errors: candidates the long-range pairing never consumes are excluded
/// from the edge set, and candidates without short-range neighbors carry no
/// normal and no adjacency. Both are surfaced through
/// [`ExtractStats`](crate::ExtractStats) counters instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input mesh carries no usable surface.
    #[error("input mesh has no vertices or faces")]
    EmptyMesh,

    /// A face references a vertex outside the position array.
    #[error("face {face} references vertex {index} (mesh has {vertex_count} vertices)")]
    InvalidFaceIndex {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Extraction parameters or frame data failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A degenerate triangle was encountered in strict mode.
    ///
    /// Outside strict mode degenerate triangles are skipped and counted;
    /// they never contribute undefined angles either way.
    #[error("face {face} is degenerate (zero-length edge)")]
    DegenerateTriangle {
        /// Index of the degenerate face.
        face: usize,
    },

    /// No vertex fell below the boundary angle threshold.
    #[error("no boundary candidates found")]
    NoBoundaryCandidates,

    /// Long-range pairing produced no edges.
    #[error("no edges could be paired from {candidates} candidates")]
    NoEdges {
        /// Number of boundary candidates that entered pairing.
        candidates: usize,
    },
}

impl ExtractError {
    /// Create an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ExtractError::EmptyMesh;
        assert_eq!(err.to_string(), "input mesh has no vertices or faces");

        let err = ExtractError::InvalidFaceIndex {
            face: 3,
            index: 12,
            vertex_count: 9,
        };
        assert!(err.to_string().contains("face 3"));
        assert!(err.to_string().contains("12"));

        let err = ExtractError::invalid_params("neighbor band inverted");
        assert!(err.to_string().contains("neighbor band inverted"));
    }
}
