pub mod traits;
pub mod directed;
pub mod undirected;
pub mod traversal;
pub mod generators;

pub use traits::{Graph, MutableGraph, Vertex};
pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;
pub use traversal::{breadth_first, depth_first, reachable_from};
