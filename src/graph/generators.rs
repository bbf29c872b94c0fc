use crate::graph::{DirectedGraph, MutableGraph, UndirectedGraph};
use rand::Rng;

/// Generates a random directed graph on vertices `0..n` with about
/// `edge_factor * n` arcs of weight in `[1, 100)`.
///
/// Self-loops and repeated pairs are skipped, so the arc count can fall short.
pub fn random_graph<R: Rng>(n: usize, edge_factor: f64, rng: &mut R) -> DirectedGraph<usize, f64> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            // both endpoints were added above
            let _ = graph.connect(&u, &v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-weight edges between
/// horizontal and vertical neighbours. Vertex `(x, y)` is `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> UndirectedGraph<usize, f64> {
    let mut graph = UndirectedGraph::with_capacity(width * height);
    for v in 0..width * height {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                let _ = graph.connect(&vertex, &(vertex + 1), 1.0);
            }
            if y + 1 < height {
                let _ = graph.connect(&vertex, &(vertex + width), 1.0);
            }
        }
    }

    graph
}
