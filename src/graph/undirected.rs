use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, MutableGraph, Vertex};
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt::{self, Debug, Display};

/// An undirected graph stored as a directed graph with mirrored arcs.
///
/// Every logical edge is held as two arcs of equal weight, so `edge_count`
/// is twice the number of logical edges; `unique_edge_count` halves it.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    arcs: DirectedGraph<K, W>,
}

impl<K, W> Default for UndirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> UndirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            arcs: DirectedGraph::new(),
        }
    }

    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            arcs: DirectedGraph::with_capacity(vertices),
        }
    }

    /// Number of logical edges, counting each mirrored pair once. O(1)
    pub fn unique_edge_count(&self) -> usize {
        self.arcs.edge_count() / 2
    }

    /// The vertices sharing an edge with `vertex`. O(degree)
    pub fn neighbors(&self, vertex: &K) -> Result<Vec<K>> {
        self.arcs.successors(vertex)
    }

    /// The underlying arc storage
    pub fn as_directed(&self) -> &DirectedGraph<K, W> {
        &self.arcs
    }

    pub fn validate_non_negative(&self) -> bool {
        self.arcs.validate_non_negative()
    }
}

impl<K, W> Graph<K, W> for UndirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.arcs.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.arcs.edge_count()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        self.arcs.vertices()
    }

    fn outgoing_edges(&self, vertex: &K) -> Result<Box<dyn Iterator<Item = (&K, W)> + '_>> {
        self.arcs.outgoing_edges(vertex)
    }

    // Mirrored arcs make incoming and outgoing the same set, without the full scan
    fn incoming_edges(&self, vertex: &K) -> Result<Box<dyn Iterator<Item = (&K, W)> + '_>> {
        self.arcs.outgoing_edges(vertex)
    }

    fn has_vertex(&self, vertex: &K) -> bool {
        self.arcs.has_vertex(vertex)
    }

    fn has_edge(&self, from: &K, to: &K) -> bool {
        self.arcs.has_edge(from, to)
    }

    fn get_edge_weight(&self, from: &K, to: &K) -> Option<W> {
        self.arcs.get_edge_weight(from, to)
    }
}

impl<K, W> MutableGraph<K, W> for UndirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: K) -> bool {
        self.arcs.add_vertex(vertex)
    }

    fn connect(&mut self, from: &K, to: &K, weight: W) -> Result<()> {
        // Validate both ends first so the pair of writes cannot be split
        self.arcs.require(from)?;
        self.arcs.require(to)?;
        self.arcs.insert_arc(from, to, weight);
        self.arcs.insert_arc(to, from, weight);
        Ok(())
    }

    fn disconnect(&mut self, from: &K, to: &K) -> Result<bool> {
        self.arcs.require(from)?;
        self.arcs.require(to)?;
        let forward = self.arcs.remove_arc(from, to);
        let backward = self.arcs.remove_arc(to, from);
        Ok(forward || backward)
    }

    fn remove_vertex(&mut self, vertex: &K) -> Result<()> {
        self.arcs.remove_vertex(vertex)
    }
}

impl<K, W> Display for UndirectedGraph<K, W>
where
    K: Vertex + Display,
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<< Undirected graph; |V| = {}; |E| = {};",
            self.vertex_count(),
            self.unique_edge_count()
        )?;
        self.arcs.write_adjacency(f)?;
        f.write_str("\n>>")
    }
}
