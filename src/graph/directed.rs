use crate::graph::traits::{Graph, MutableGraph, Vertex};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};

/// A directed graph implementation using nested adjacency maps
#[derive(Debug, Clone)]
pub struct DirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing arcs for each vertex: vertex -> {target -> weight}
    adjacency: HashMap<K, HashMap<K, W>>,

    /// Number of vertices in the graph
    vertex_count: usize,

    /// Number of directed arcs in the graph
    edge_count: usize,
}

impl<K, W> Default for DirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> DirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: HashMap::new(),
            vertex_count: 0,
            edge_count: 0,
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: HashMap::with_capacity(vertices),
            vertex_count: 0,
            edge_count: 0,
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        for targets in self.adjacency.values() {
            for weight in targets.values() {
                if *weight < W::zero() {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn require(&self, vertex: &K) -> Result<()> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(Error::unknown_vertex(vertex))
        }
    }

    /// Sets the arc weight; both vertices must already be present
    pub(crate) fn insert_arc(&mut self, from: &K, to: &K, weight: W) {
        if from == to {
            return;
        }
        if let Some(targets) = self.adjacency.get_mut(from) {
            if targets.insert(to.clone(), weight).is_none() {
                self.edge_count += 1;
            }
        }
    }

    pub(crate) fn remove_arc(&mut self, from: &K, to: &K) -> bool {
        let removed = self
            .adjacency
            .get_mut(from)
            .map_or(false, |targets| targets.remove(to).is_some());
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    pub(crate) fn write_adjacency(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        K: Display,
    {
        for (vertex, targets) in &self.adjacency {
            write!(f, "\n  {} → [", vertex)?;
            for (i, target) in targets.keys().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", target)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl<K, W> Graph<K, W> for DirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn outgoing_edges(&self, vertex: &K) -> Result<Box<dyn Iterator<Item = (&K, W)> + '_>> {
        let targets = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| Error::unknown_vertex(vertex))?;
        Ok(Box::new(targets.iter().map(|(target, weight)| (target, *weight))))
    }

    fn incoming_edges(&self, vertex: &K) -> Result<Box<dyn Iterator<Item = (&K, W)> + '_>> {
        self.require(vertex)?;

        // No reverse index, so this walks every vertex: O(V + E)
        let sources: Vec<(&K, W)> = self
            .adjacency
            .iter()
            .filter_map(|(source, targets)| targets.get(vertex).map(|weight| (source, *weight)))
            .collect();
        Ok(Box::new(sources.into_iter()))
    }

    fn has_vertex(&self, vertex: &K) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, from: &K, to: &K) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: &K, to: &K) -> Option<W> {
        self.adjacency
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
    }
}

impl<K, W> MutableGraph<K, W> for DirectedGraph<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: K) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, HashMap::new());
        self.vertex_count += 1;
        true
    }

    fn connect(&mut self, from: &K, to: &K, weight: W) -> Result<()> {
        self.require(from)?;
        self.require(to)?;
        self.insert_arc(from, to, weight);
        Ok(())
    }

    fn disconnect(&mut self, from: &K, to: &K) -> Result<bool> {
        self.require(from)?;
        self.require(to)?;
        Ok(self.remove_arc(from, to))
    }

    fn remove_vertex(&mut self, vertex: &K) -> Result<()> {
        for source in self.predecessors(vertex)? {
            self.remove_arc(&source, vertex);
        }

        if let Some(targets) = self.adjacency.remove(vertex) {
            self.edge_count -= targets.len();
            self.vertex_count -= 1;
        }
        Ok(())
    }
}

impl<K, W> Display for DirectedGraph<K, W>
where
    K: Vertex + Display,
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<< Graph:")?;
        self.write_adjacency(f)?;
        f.write_str("\n>>")
    }
}
