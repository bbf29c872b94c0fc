use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathSolution};
use crate::data_structures::{IndexedPriorityQueue, KeyedQueue, MinOrder, PriorityQueue};
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Which priority queue drives the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueKind {
    /// Value -> heap index map, O(log n) priority changes
    #[default]
    Indexed,
    /// Linear scan to find the value, then remove and reinsert: O(n) priority changes
    Scan,
}

/// Classic Dijkstra's algorithm implementation.
///
/// Every edge weight must be non-negative. This is not checked unless
/// [`with_weight_check`](Dijkstra::with_weight_check) is enabled; negative arcs
/// otherwise produce wrong distances, not an error.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    /// Priority queue strategy
    queue: QueueKind,
    /// Reject graphs holding a negative arc before solving
    check_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set the priority queue strategy
    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.queue = queue;
        self
    }

    /// Enable or disable the negative weight check
    pub fn with_weight_check(mut self, check: bool) -> Self {
        self.check_weights = check;
        self
    }

    pub fn queue_kind(&self) -> QueueKind {
        self.queue
    }

    fn solve<K, W, G>(&self, graph: &G, source: &K, target: Option<&K>) -> Result<ShortestPathSolution<K, W>>
    where
        K: Vertex,
        W: Float + Zero + Debug + Copy,
        G: Graph<K, W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::unknown_vertex(source));
        }
        if let Some(target) = target {
            if !graph.has_vertex(target) {
                return Err(Error::unknown_vertex(target));
            }
        }
        if self.check_weights {
            reject_negative_weights(graph)?;
        }

        debug!(
            "Dijkstra from {:?} over {} vertices and {} edges ({:?} queue)",
            source,
            graph.vertex_count(),
            graph.edge_count(),
            self.queue
        );

        match self.queue {
            QueueKind::Indexed => run(graph, source, target, IndexedPriorityQueue::<K, W, MinOrder>::min()),
            QueueKind::Scan => run(graph, source, target, PriorityQueue::<K, W, MinOrder>::min()),
        }
    }
}

/// Main loop shared by both queue strategies.
///
/// Every vertex starts queued at its tentative distance; the closest one is
/// settled and its outgoing arcs relaxed until the queue drains or `target`
/// is settled.
fn run<K, W, G, Q>(graph: &G, source: &K, target: Option<&K>, mut queue: Q) -> Result<ShortestPathSolution<K, W>>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
    Q: KeyedQueue<K, W>,
{
    let mut distances: HashMap<K, W> = HashMap::with_capacity(graph.vertex_count());
    let mut predecessors: HashMap<K, K> = HashMap::new();
    let mut settled: HashSet<K> = HashSet::with_capacity(graph.vertex_count());

    for vertex in graph.vertices() {
        let initial = if vertex == source { W::zero() } else { W::infinity() };
        distances.insert(vertex.clone(), initial);
        queue.enqueue(vertex.clone(), initial);
    }

    let mut relaxations = 0usize;
    while !queue.is_empty() {
        let u = queue.dequeue()?;
        if target == Some(&u) {
            debug!("Reached target {:?} after settling {} vertices", u, settled.len());
            break;
        }
        settled.insert(u.clone());

        let dist_u = distances.get(&u).copied().unwrap_or_else(W::infinity);
        for (v, weight) in graph.outgoing_edges(&u)? {
            // A settled vertex is final and no longer queued
            if settled.contains(v) {
                continue;
            }
            let alt = dist_u + weight;
            let current = distances.get(v).copied().unwrap_or_else(W::infinity);
            if alt < current {
                trace!("Relaxed {:?} -> {:?}: {:?} -> {:?}", u, v, current, alt);
                distances.insert(v.clone(), alt);
                predecessors.insert(v.clone(), u.clone());
                queue.change_priority(v, alt)?;
                relaxations += 1;
            }
        }
    }

    debug!(
        "Dijkstra settled {} vertices with {} relaxations",
        settled.len(),
        relaxations
    );

    Ok(ShortestPathSolution::new(source.clone(), distances, predecessors))
}

fn reject_negative_weights<K, W, G>(graph: &G) -> Result<()>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
{
    for from in graph.vertices() {
        for (to, weight) in graph.outgoing_edges(from)? {
            if weight < W::zero() {
                warn!("Negative weight {:?} on {:?} -> {:?}", weight, from, to);
                return Err(Error::NegativeWeight {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                });
            }
        }
    }
    Ok(())
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for Dijkstra
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &K) -> Result<ShortestPathSolution<K, W>> {
        self.solve(graph, source, None)
    }

    /// Stops as soon as `to` is settled, then walks the partial predecessor table
    fn shortest_path(&self, graph: &G, from: &K, to: &K) -> Result<Vec<K>> {
        self.solve(graph, from, Some(to))?.path(to)
    }
}
