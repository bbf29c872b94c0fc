use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::{Error, Result};

/// Anything usable as a vertex key: identity is by equality
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<K, W>: Debug
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed arcs in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex, in no particular order
    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: &K) -> Result<Box<dyn Iterator<Item = (&K, W)> + '_>>;

    /// Returns an iterator over the incoming edges to a vertex
    fn incoming_edges(&self, vertex: &K) -> Result<Box<dyn Iterator<Item = (&K, W)> + '_>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &K) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &K, to: &K) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &K, to: &K) -> Option<W>;

    /// Weight of the arc `from -> to`, failing if either vertex or the arc is missing
    fn weight_of(&self, from: &K, to: &K) -> Result<W> {
        for vertex in [from, to] {
            if !self.has_vertex(vertex) {
                return Err(Error::unknown_vertex(vertex));
            }
        }
        self.get_edge_weight(from, to)
            .ok_or_else(|| Error::missing_edge(from, to))
    }

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Every vertex `vertex` has an arc to. O(out-degree)
    fn successors(&self, vertex: &K) -> Result<Vec<K>> {
        Ok(self
            .outgoing_edges(vertex)?
            .map(|(target, _)| target.clone())
            .collect())
    }

    /// Every vertex with an arc into `vertex`
    fn predecessors(&self, vertex: &K) -> Result<Vec<K>> {
        Ok(self
            .incoming_edges(vertex)?
            .map(|(source, _)| source.clone())
            .collect())
    }

    fn out_degree(&self, vertex: &K) -> Result<usize> {
        Ok(self.outgoing_edges(vertex)?.count())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<K, W>: Graph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex, returning false if it was already present
    fn add_vertex(&mut self, vertex: K) -> bool;

    /// Creates the arc `from -> to` or overwrites its weight.
    ///
    /// Both vertices must exist. An arc from a vertex to itself is ignored.
    fn connect(&mut self, from: &K, to: &K, weight: W) -> Result<()>;

    /// Removes the arc `from -> to` if present, returning whether it existed
    fn disconnect(&mut self, from: &K, to: &K) -> Result<bool>;

    /// Removes a vertex and every arc touching it
    fn remove_vertex(&mut self, vertex: &K) -> Result<()>;

    /// Connects with the default weight of one
    fn add_edge(&mut self, from: &K, to: &K) -> Result<()> {
        self.connect(from, to, W::one())
    }

    /// Adds `vertex` and connects it to each of `adjacent`, creating missing ones.
    ///
    /// `weights`, when given, pairs up with `adjacent` by position; otherwise every
    /// new arc weighs one. Nothing is changed if the two lengths disagree.
    fn add_vertex_adjacent(&mut self, vertex: K, adjacent: &[K], weights: Option<&[W]>) -> Result<()> {
        if let Some(weights) = weights {
            if weights.len() != adjacent.len() {
                return Err(Error::WeightCountMismatch {
                    vertices: adjacent.len(),
                    weights: weights.len(),
                });
            }
        }

        self.add_vertex(vertex.clone());
        for (i, neighbor) in adjacent.iter().enumerate() {
            if *neighbor == vertex {
                continue;
            }
            self.add_vertex(neighbor.clone());
            let weight = weights.map_or(W::one(), |weights| weights[i]);
            self.connect(&vertex, neighbor, weight)?;
        }
        Ok(())
    }
}
