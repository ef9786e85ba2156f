//! Rule-engine errors.
//!
//! Every invalid input gets a named error; an apply with an empty origin is
//! a failure, never a silent no-op the caller would have to detect by state
//! comparison. The search itself never errors: a position without legal
//! moves is a terminal result, not a failure.

use thiserror::Error;

use super::vertex::VertexId;

/// Errors raised by state construction and move application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A vertex id outside the fixed 22-vertex set.
    #[error("unknown vertex id {0}")]
    UnknownVertex(VertexId),

    /// A move whose origin vertex holds no piece.
    #[error("no piece on origin vertex {0}")]
    EmptyOrigin(VertexId),

    /// A placement onto an already occupied vertex.
    #[error("vertex {0} is already occupied")]
    Occupied(VertexId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let v = VertexId::new(22);
        assert_eq!(
            RuleError::UnknownVertex(v).to_string(),
            "unknown vertex id v22"
        );
        assert_eq!(
            RuleError::EmptyOrigin(VertexId::new(3)).to_string(),
            "no piece on origin vertex v3"
        );
    }
}
