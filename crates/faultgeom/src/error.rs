use thiserror::Error;

/// Geometry errors reported by trace operations.
///
/// Bearing arithmetic is total and never fails; only polylines can be
/// too short, non-finite, or directionless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error("a polyline needs at least 2 vertices, got {got}")]
    TooFewVertices { got: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("degenerate geometry: {0}")]
    Degenerate(&'static str),
}

impl GeomError {
    /// True for inputs that are well-formed but carry no usable direction.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, GeomError::Degenerate(_))
    }
}
