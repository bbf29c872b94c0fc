use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution.
///
/// Read-only once produced. It describes the graph as it was when solved; after
/// the graph is mutated the solver has to be run again.
#[derive(Debug, Clone)]
pub struct ShortestPathSolution<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex
    source: K,

    /// Distance from source to each vertex; infinite when unreached
    distances: HashMap<K, W>,

    /// Previous vertex on the shortest path; absent for the source and unreached vertices
    predecessors: HashMap<K, K>,
}

impl<K, W> ShortestPathSolution<K, W>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(source: K, distances: HashMap<K, W>, predecessors: HashMap<K, K>) -> Self {
        ShortestPathSolution {
            source,
            distances,
            predecessors,
        }
    }

    /// The vertex distances are measured from
    pub fn source(&self) -> &K {
        &self.source
    }

    /// Number of vertices covered by the solution
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Shortest distance from the source to `vertex`, infinite if unreachable
    pub fn distance(&self, vertex: &K) -> Result<W> {
        self.distances
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::unknown_vertex(vertex))
    }

    pub fn is_reachable(&self, vertex: &K) -> bool {
        self.distances
            .get(vertex)
            .map_or(false, |distance| distance.is_finite())
    }

    /// The vertex preceding `vertex` on its shortest path
    pub fn predecessor(&self, vertex: &K) -> Option<&K> {
        self.predecessors.get(vertex)
    }

    /// Shortest path from the source to `target`, both ends included.
    ///
    /// Empty when `target` is unreachable; just `[source]` when `target` is the source.
    pub fn path(&self, target: &K) -> Result<Vec<K>> {
        if !self.distances.contains_key(target) {
            return Err(Error::unknown_vertex(target));
        }

        let mut path = Vec::new();
        if *target == self.source || self.predecessors.contains_key(target) {
            let mut current = Some(target);
            while let Some(vertex) = current {
                path.push(vertex.clone());
                current = self.predecessors.get(vertex);
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Reached vertices ordered from nearest to farthest
    pub fn by_distance(&self) -> Vec<(&K, W)> {
        let mut reached: Vec<(&K, W)> = self
            .distances
            .iter()
            .filter(|(_, distance)| distance.is_finite())
            .map(|(vertex, distance)| (vertex, *distance))
            .collect();
        reached.sort_by_key(|(_, distance)| OrderedFloat(*distance));
        reached
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<K, W, G>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathSolution<K, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from `from` to `to` as a sequence of vertices
    fn shortest_path(&self, graph: &G, from: &K, to: &K) -> Result<Vec<K>> {
        self.compute_shortest_paths(graph, from)?.path(to)
    }
}

/// Shortest path queries available on every graph, using [`Dijkstra`] defaults
pub trait ShortestPaths<K, W>: Graph<K, W> + Sized
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Solves for every vertex at once. Call this when several targets are needed.
    fn dijkstra(&self, source: &K) -> Result<ShortestPathSolution<K, W>> {
        Dijkstra::new().compute_shortest_paths(self, source)
    }

    /// Solves for a single target, stopping as soon as it is settled
    fn shortest_path(&self, from: &K, to: &K) -> Result<Vec<K>> {
        ShortestPathAlgorithm::shortest_path(&Dijkstra::new(), self, from, to)
    }
}

impl<K, W, G> ShortestPaths<K, W> for G
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
{
}
