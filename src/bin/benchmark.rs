use std::env;
use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use weighted_paths::graph::generators::random_graph;
use weighted_paths::graph::{DirectedGraph, Graph};
use weighted_paths::{Dijkstra, QueueKind, ShortestPathAlgorithm};

// Function to benchmark one queue strategy on a graph
fn benchmark_queue(kind: QueueKind, graph: &DirectedGraph<usize, f64>, source: usize) -> Duration {
    println!("Running {:?} queue on graph with {} vertices...", kind, graph.vertex_count());

    let dijkstra = Dijkstra::new().with_queue(kind);
    let start = Instant::now();
    let solution = match dijkstra.compute_shortest_paths(graph, &source) {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("  - Failed: {}", err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    // Count reachable vertices
    let reachable = solution.by_distance().len();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    // Usage: benchmark [edge_factor] [sizes...]
    let args: Vec<String> = env::args().collect();
    let edge_factor = args
        .get(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(2.0);
    let mut graph_sizes: Vec<usize> = args
        .iter()
        .skip(2)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    if graph_sizes.is_empty() {
        // The scan queue is quadratic, keep the defaults modest
        graph_sizes = vec![500, 1_000, 2_000, 5_000];
    }

    println!("=====================================================");
    println!("Benchmark: indexed vs scanning priority queue");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_graph(size, edge_factor, &mut rng);
        let source = 0;

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let indexed_time = benchmark_queue(QueueKind::Indexed, &graph, source);
        let scan_time = benchmark_queue(QueueKind::Scan, &graph, source);
        results.push((size, indexed_time, scan_time));

        let speedup = scan_time.as_secs_f64() / indexed_time.as_secs_f64();
        println!("Speedup - Indexed vs Scan: {:.2}x", speedup);
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Indexed (ms)", "Scan (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, indexed_time, scan_time) in &results {
        let speedup = scan_time.as_secs_f64() / indexed_time.as_secs_f64();
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<10.2}",
            size,
            indexed_time.as_secs_f64() * 1000.0,
            scan_time.as_secs_f64() * 1000.0,
            speedup
        );
    }
}
