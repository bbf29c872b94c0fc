//! Breadth-first and depth-first traversal over any [`Graph`].
//!
//! Both visit every vertex reachable from the start exactly once, in discovery
//! order. Neighbour order follows the graph's own iteration order.

use std::collections::HashSet;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::data_structures::Queue;
use crate::graph::traits::{Graph, Vertex};
use crate::{Error, Result};

/// Visits vertices level by level from `start`, using a FIFO frontier
pub fn breadth_first<K, W, G, F>(graph: &G, start: &K, mut visit: F) -> Result<()>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
    F: FnMut(&K),
{
    if !graph.has_vertex(start) {
        return Err(Error::unknown_vertex(start));
    }

    let mut discovered = HashSet::new();
    let mut frontier = Queue::new();
    discovered.insert(start.clone());
    frontier.enqueue(start.clone());

    while !frontier.is_empty() {
        let vertex = frontier.dequeue()?;
        visit(&vertex);
        for (next, _) in graph.outgoing_edges(&vertex)? {
            if discovered.insert(next.clone()) {
                frontier.enqueue(next.clone());
            }
        }
    }
    Ok(())
}

/// Visits vertices depth first from `start`.
///
/// A vertex is marked and visited before any of its successors are explored.
/// Uses an explicit stack of pending successor lists instead of recursion, so
/// long chains cannot overflow the call stack.
pub fn depth_first<K, W, G, F>(graph: &G, start: &K, mut visit: F) -> Result<()>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
    F: FnMut(&K),
{
    let mut pending = vec![graph.successors(start)?.into_iter()];
    let mut discovered = HashSet::new();
    discovered.insert(start.clone());
    visit(start);

    loop {
        let next = match pending.last_mut() {
            Some(successors) => successors.next(),
            None => break,
        };
        match next {
            Some(vertex) => {
                if discovered.insert(vertex.clone()) {
                    visit(&vertex);
                    pending.push(graph.successors(&vertex)?.into_iter());
                }
            }
            None => {
                pending.pop();
            }
        }
    }
    Ok(())
}

/// Every vertex reachable from `start`, in breadth-first order
pub fn reachable_from<K, W, G>(graph: &G, start: &K) -> Result<Vec<K>>
where
    K: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
{
    let mut order = Vec::new();
    breadth_first(graph, start, |vertex| order.push(vertex.clone()))?;
    Ok(order)
}
