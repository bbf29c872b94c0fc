use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use weighted_paths::graph::{
    breadth_first, depth_first, reachable_from, DirectedGraph, Graph, MutableGraph, UndirectedGraph,
};
use weighted_paths::Error;

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
    assert!(graph.is_empty());
    assert!(graph.add_vertex("A"));
    assert!(!graph.add_vertex("A"));
    assert_eq!(graph.vertex_count(), 1);
    assert!(graph.has_vertex(&"A"));
    assert!(!graph.has_vertex(&"B"));
}

#[test]
fn test_connect_requires_both_vertices() {
    let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
    graph.add_vertex("A");
    assert_eq!(
        graph.connect(&"A", &"B", 2.0),
        Err(Error::UnknownVertex("\"B\"".to_string()))
    );
    assert!(graph.disconnect(&"Z", &"A").is_err());
    assert!(graph.remove_vertex(&"Z").is_err());
    assert!(graph.successors(&"Z").is_err());
    assert!(graph.predecessors(&"Z").is_err());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_reconnect_overwrites_weight_without_counting_twice() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.connect(&1, &2, 4.0).unwrap();
    graph.connect(&1, &2, 7.5).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight_of(&1, &2), Ok(7.5));
    assert!(!graph.has_edge(&2, &1));
    assert_eq!(
        graph.weight_of(&2, &1),
        Err(Error::MissingEdge { from: "2".to_string(), to: "1".to_string() })
    );
}

#[test]
fn test_self_loops_are_ignored() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex('v');
    graph.connect(&'v', &'v', 3.0).unwrap();
    graph.add_edge(&'v', &'v').unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.has_edge(&'v', &'v'));

    let mut undirected = UndirectedGraph::new();
    undirected.add_vertex('v');
    undirected.connect(&'v', &'v', 3.0).unwrap();
    assert_eq!(undirected.edge_count(), 0);
}

#[test]
fn test_disconnect_is_idempotent() {
    let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
    graph.add_vertex_adjacent("u", &["v", "w"], None).unwrap();
    assert_eq!(graph.edge_count(), 2);

    assert_eq!(graph.disconnect(&"u", &"v"), Ok(true));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.disconnect(&"u", &"v"), Ok(false));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_vertex_adjacent_with_weights() {
    let mut graph = DirectedGraph::new();
    graph
        .add_vertex_adjacent("hub", &["a", "hub", "b"], Some(&[2.0, 9.0, 3.0]))
        .unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.weight_of(&"hub", &"a"), Ok(2.0));
    assert_eq!(graph.weight_of(&"hub", &"b"), Ok(3.0));

    graph.add_vertex_adjacent("c", &["hub"], None).unwrap();
    assert_eq!(graph.weight_of(&"c", &"hub"), Ok(1.0));
}

#[test]
fn test_weight_count_mismatch_changes_nothing() {
    let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
    let result = graph.add_vertex_adjacent("x", &["y", "z"], Some(&[1.0]));
    assert_eq!(result, Err(Error::WeightCountMismatch { vertices: 2, weights: 1 }));
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_predecessors_and_successors() {
    let mut graph: DirectedGraph<i32, f64> = DirectedGraph::new();
    graph.add_vertex_adjacent(1, &[2, 3], None).unwrap();
    graph.add_vertex_adjacent(4, &[3], None).unwrap();
    graph.add_vertex_adjacent(3, &[1], None).unwrap();

    assert_eq!(sorted(graph.successors(&1).unwrap()), vec![2, 3]);
    assert_eq!(sorted(graph.predecessors(&3).unwrap()), vec![1, 4]);
    assert_eq!(graph.predecessors(&4).unwrap(), Vec::<i32>::new());
    assert_eq!(graph.out_degree(&1), Ok(2));
    assert_eq!(sorted(graph.vertices().copied().collect()), vec![1, 2, 3, 4]);
}

#[test]
fn test_remove_vertex_detaches_incident_arcs() {
    let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
    graph.add_vertex_adjacent("a", &["b", "c"], None).unwrap();
    graph.add_vertex_adjacent("b", &["c", "a"], None).unwrap();
    graph.add_vertex_adjacent("c", &["a"], None).unwrap();
    assert_eq!(graph.edge_count(), 5);

    graph.remove_vertex(&"a").unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(&"b", &"c"));
    assert!(!graph.has_vertex(&"a"));
    assert!(!graph.has_edge(&"c", &"a"));
    assert_eq!(graph.successors(&"c").unwrap(), Vec::<&str>::new());
}

#[test]
fn test_validate_non_negative() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex_adjacent(0, &[1], Some(&[0.0])).unwrap();
    assert!(graph.validate_non_negative());
    graph.connect(&1, &0, -1.0).unwrap();
    assert!(!graph.validate_non_negative());
}

#[test]
fn test_undirected_edges_are_mirrored() {
    let mut graph = UndirectedGraph::new();
    graph.add_vertex_adjacent("a", &["b", "c"], Some(&[2.0, 5.0])).unwrap();

    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.unique_edge_count(), 2);
    assert_eq!(graph.weight_of(&"b", &"a"), Ok(2.0));
    assert_eq!(sorted(graph.neighbors(&"a").unwrap()), vec!["b", "c"]);
    assert_eq!(graph.predecessors(&"a").unwrap().len(), 2);

    graph.connect(&"c", &"a", 1.0).unwrap();
    assert_eq!(graph.weight_of(&"a", &"c"), Ok(1.0));
    assert_eq!(graph.unique_edge_count(), 2);

    assert_eq!(graph.disconnect(&"b", &"a"), Ok(true));
    assert!(!graph.has_edge(&"a", &"b"));
    assert_eq!(graph.disconnect(&"b", &"a"), Ok(false));
    assert_eq!(graph.unique_edge_count(), 1);

    graph.remove_vertex(&"c").unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_undirected_symmetry_under_random_mutation() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut graph: UndirectedGraph<u8, f64> = UndirectedGraph::new();
    for v in 0..8u8 {
        graph.add_vertex(v);
    }

    for _ in 0..500 {
        let u = rng.gen_range(0..8u8);
        let v = rng.gen_range(0..8u8);
        if rng.gen_bool(0.6) {
            graph.connect(&u, &v, rng.gen_range(0.0..10.0)).unwrap();
        } else {
            graph.disconnect(&u, &v).unwrap();
        }

        for a in 0..8u8 {
            for b in 0..8u8 {
                assert_eq!(graph.has_edge(&a, &b), graph.has_edge(&b, &a));
                assert_eq!(graph.get_edge_weight(&a, &b), graph.get_edge_weight(&b, &a));
            }
        }
        assert_eq!(graph.edge_count(), 2 * graph.unique_edge_count());
    }
}

#[test]
fn test_breadth_first_visits_by_level() {
    let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
    graph.add_vertex_adjacent("A", &["B", "C"], None).unwrap();
    graph.add_vertex_adjacent("B", &["D"], None).unwrap();
    graph.add_vertex_adjacent("C", &["E", "A"], None).unwrap();
    graph.add_vertex("F");

    let mut order = Vec::new();
    breadth_first(&graph, &"A", |v| order.push(*v)).unwrap();

    assert_eq!(order.len(), 5);
    assert_eq!(order[0], "A");
    assert_eq!(sorted(order[1..3].to_vec()), vec!["B", "C"]);
    assert_eq!(sorted(order[3..5].to_vec()), vec!["D", "E"]);

    assert_eq!(sorted(reachable_from(&graph, &"B").unwrap()), vec!["B", "D"]);
    assert!(breadth_first(&graph, &"Q", |_| {}).is_err());
}

#[test]
fn test_depth_first_follows_branches() {
    let mut chain: DirectedGraph<i32, f64> = DirectedGraph::new();
    chain.add_vertex_adjacent(1, &[2], None).unwrap();
    chain.add_vertex_adjacent(2, &[3], None).unwrap();
    chain.add_vertex_adjacent(3, &[4, 1], None).unwrap();

    let mut order = Vec::new();
    depth_first(&chain, &1, |v| order.push(*v)).unwrap();
    assert_eq!(order, vec![1, 2, 3, 4]);

    let mut tree: DirectedGraph<&str, f64> = DirectedGraph::new();
    tree.add_vertex_adjacent("A", &["B", "C"], None).unwrap();
    tree.add_vertex_adjacent("B", &["D"], None).unwrap();

    let mut order = Vec::new();
    depth_first(&tree, &"A", |v| order.push(*v)).unwrap();
    assert!(
        order == vec!["A", "B", "D", "C"] || order == vec!["A", "C", "B", "D"],
        "unexpected order {:?}",
        order
    );
    assert!(depth_first(&tree, &"Q", |_| {}).is_err());
}

#[test]
fn test_depth_first_handles_long_chains() {
    let mut graph: DirectedGraph<u32, f64> = DirectedGraph::new();
    graph.add_vertex(0);
    for v in 1..50_000u32 {
        graph.add_vertex(v);
        graph.add_edge(&(v - 1), &v).unwrap();
    }

    let mut count = 0;
    depth_first(&graph, &0, |_| count += 1).unwrap();
    assert_eq!(count, 50_000);
}

#[test]
fn test_display_lists_adjacency() {
    let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
    graph.add_vertex_adjacent("A", &["B"], None).unwrap();
    let rendered: String = graph.to_string();
    assert!(rendered.starts_with("<< Graph:"));
    assert!(rendered.contains("\n  A → [B]"));
    assert!(rendered.contains("\n  B → []"));
    assert!(rendered.ends_with("\n>>"));

    let mut undirected: UndirectedGraph<&str, f64> = UndirectedGraph::new();
    undirected.add_vertex_adjacent("A", &["B"], None).unwrap();
    assert!(undirected.to_string().starts_with("<< Undirected graph; |V| = 2; |E| = 1;"));
}
