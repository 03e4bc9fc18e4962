//!
//! Errors raised while building or solving a flow network
//!
use super::Cost;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Vertex {vertex} out of range for a graph with {n_vertices} vertices")]
    VertexOutOfRange { vertex: usize, n_vertices: usize },

    #[error("Negative capacity {capacity} on edge {from} -> {to}")]
    NegativeCapacity {
        from: usize,
        to: usize,
        capacity: Cost,
    },

    #[error("Negative cost cycle reachable from source {0}")]
    NegativeCycle(usize),

    #[error("Total cost overflowed after pushing {flow} units")]
    CostOverflow { flow: Cost },

    #[error("Total flow overflowed the flow type at augmentation #{n_augmentations}")]
    FlowOverflow { n_augmentations: usize },

    #[error("Path cost to vertex {vertex} overflowed")]
    DistanceOverflow { vertex: usize },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
