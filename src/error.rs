//! Error type shared by the graph components.
//!
//! Only edge insertion and shortest-path queries can fail. Every other
//! degenerate input (empty catalog, zero budget, empty tree or list,
//! unreachable target) has a defined empty result instead of an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// Dijkstra's label-setting invariant needs every weight to be non-negative.
    #[error("negative weight {weight} on edge {from} -> {to}")]
    InvalidWeight { from: usize, to: usize, weight: i64 },

    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },
}

pub type Result<T> = std::result::Result<T, AlgoError>;

#[cfg(test)]
mod tests {
    use super::AlgoError;

    #[test]
    fn messages_name_the_offending_input() {
        let err = AlgoError::InvalidWeight {
            from: 1,
            to: 2,
            weight: -3,
        };
        assert_eq!(err.to_string(), "negative weight -3 on edge 1 -> 2");

        let err = AlgoError::OutOfRange {
            vertex: 9,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "vertex 9 out of range for a graph with 4 vertices"
        );
    }
}
