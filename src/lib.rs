//! Weighted Paths - mutable weighted graphs and Dijkstra shortest paths
//!
//! This library provides a directed (and mirrored undirected) weighted graph keyed
//! by arbitrary hashable vertices, a binary heap ordered by an injected relation,
//! a priority queue with arbitrary priority updates built on that heap, and a
//! single-source shortest path solver composing the two.
//!
//! All edge weights are expected to be non-negative real numbers. The solver does
//! not check this unless asked to.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, QueueKind},
    ShortestPathAlgorithm, ShortestPathSolution, ShortestPaths,
};
/// Re-export main types for convenient use
pub use graph::{directed::DirectedGraph, undirected::UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex not present: {0}")]
    UnknownVertex(String),

    #[error("No edge from {from} to {to}")]
    MissingEdge { from: String, to: String },

    #[error("Got {weights} weights for {vertices} adjacent vertices")]
    WeightCountMismatch { vertices: usize, weights: usize },

    #[error("Negative edge weight from {from} to {to}")]
    NegativeWeight { from: String, to: String },

    #[error("The heap is empty")]
    EmptyHeap,

    #[error("Heap index {index} out of bounds for length {len}")]
    HeapIndexOutOfBounds { index: usize, len: usize },

    #[error("Item not present in the heap")]
    NotInHeap,

    #[error("The priority queue is empty")]
    EmptyQueue,

    #[error("Value not present in the priority queue: {0}")]
    NotQueued(String),
}

impl Error {
    pub(crate) fn unknown_vertex<K: std::fmt::Debug>(vertex: &K) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }

    pub(crate) fn missing_edge<K: std::fmt::Debug>(from: &K, to: &K) -> Self {
        Error::MissingEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
