/// Error types for session and source construction.
///
/// Every fault here is fatal to the construction that raised it: no
/// partial source or partial session is ever handed back. Runtime
/// tolerances (missing cell data, non-positive glyph scales) are
/// handled as no-ops by the controller and never reach this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Explicit data range override with a lower bound above its upper bound.
    InvalidRange { low: f64, high: f64 },
    /// Sample counts do not line up with the geometry they describe.
    InvalidPointCount { expected: usize, actual: usize },
    /// Field data with a component count the session cannot bind.
    UnsupportedComponentCount(usize),
    /// Mesh input that is not a triangular surface.
    UnsupportedTopology { vertices_per_element: usize },
    /// Mixed component counts within one source or one session.
    ComponentCountMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidRange { low, high } => {
                write!(f, "invalid data range: lower bound {} exceeds upper bound {}", low, high)
            }
            SessionError::InvalidPointCount { expected, actual } => {
                write!(f, "point count mismatch: expected {} data values, got {}", expected, actual)
            }
            SessionError::UnsupportedComponentCount(count) => {
                write!(f, "unsupported component count {} (only 1 and 3 are accepted)", count)
            }
            SessionError::UnsupportedTopology { vertices_per_element } => {
                write!(
                    f,
                    "unsupported mesh topology: {} vertices per element (only triangular surfaces are accepted)",
                    vertices_per_element
                )
            }
            SessionError::ComponentCountMismatch { expected, found } => {
                write!(f, "component count mismatch: session holds {}-component data, got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for SessionError {}
