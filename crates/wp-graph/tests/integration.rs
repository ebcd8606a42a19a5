//! Integration tests for wp-graph.

use proptest::prelude::*;
use wp_core::WpError;
use wp_graph::{Graph, GraphBuilder, generators};

#[test]
fn build_small_graph_from_edge_list() {
    // Triangle {1, 2, 3} plus a tail 3-4-5-6 through 2-4
    let graph =
        Graph::from_edges([(1, 2), (1, 3), (2, 3), (2, 4), (3, 4), (4, 5), (5, 6)]).unwrap();

    assert_eq!(graph.vertices(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(graph.edge_count(), 7);

    assert_eq!(graph.degree(&1).unwrap(), 2);
    assert_eq!(graph.degree(&2).unwrap(), 3);
    assert_eq!(graph.degree(&3).unwrap(), 3);
    assert_eq!(graph.degree(&4).unwrap(), 3);
    assert_eq!(graph.degree(&5).unwrap(), 2);
    assert_eq!(graph.degree(&6).unwrap(), 1);

    assert_eq!(graph.neighbors(&4).unwrap(), vec![&2, &3, &5]);
}

#[test]
fn string_vertices() {
    let mut builder = GraphBuilder::new();
    for city in ["Oslo", "Bergen", "Trondheim"] {
        builder.add_vertex(city.to_string());
    }
    builder.add_edge("Oslo".to_string(), "Bergen".to_string());
    builder.add_edge("Oslo".to_string(), "Trondheim".to_string());
    let graph = builder.build().unwrap();

    assert_eq!(graph.degree(&"Oslo".to_string()).unwrap(), 2);
    let err = graph.degree(&"Stavanger".to_string()).unwrap_err();
    assert_eq!(err.to_string(), "Vertex \"Stavanger\" is not in the graph");
}

#[test]
fn edges_are_reported_once_in_insertion_order() {
    let graph = Graph::from_edges([(3, 1), (1, 2), (2, 3), (1, 3)]).unwrap();
    let edges: Vec<(u32, u32)> = graph.edges().map(|(u, v)| (*u, *v)).collect();
    assert_eq!(edges, vec![(3, 1), (1, 2), (2, 3)]);
}

#[test]
fn malformed_graph_rejected_at_construction() {
    let mut builder = GraphBuilder::new();
    builder.add_vertex(0_u32);
    builder.add_vertex(1);
    builder.add_edges([(0, 1), (1, 2)]);

    assert!(matches!(
        builder.build().unwrap_err(),
        WpError::MalformedGraph { .. }
    ));
}

#[test]
fn cycle_with_chords() {
    let base = generators::cycle(10).unwrap();
    let mut builder = GraphBuilder::new();
    for &v in base.vertices() {
        builder.add_vertex(v);
    }
    builder.add_edges(base.edges().map(|(u, v)| (*u, *v)));
    builder.add_edges([(0, 5), (2, 7)]);
    let graph = builder.build().unwrap();

    assert_eq!(graph.edge_count(), 12);
    for v in [0, 2, 5, 7] {
        assert_eq!(graph.degree(&v).unwrap(), 3);
    }
}

#[test]
fn large_path() {
    let graph = generators::path(500).unwrap();
    assert_eq!(graph.vertex_count(), 500);
    assert_eq!(graph.edge_count(), 499);
    for (i, v) in graph.vertices().iter().take(10).enumerate() {
        assert_eq!(graph.index_of(v), Some(i));
    }
}

fn arb_edges() -> impl Strategy<Value = (u32, Vec<(u32, u32)>)> {
    (2_u32..16).prop_flat_map(|n| {
        let edge = (0..n, 0..n).prop_filter("no self loops", |(u, v)| u != v);
        (Just(n), prop::collection::vec(edge, 0..40))
    })
}

proptest! {
    #[test]
    fn degree_sum_is_twice_edge_count((n, edges) in arb_edges()) {
        let mut builder = GraphBuilder::new();
        for v in 0..n {
            builder.add_vertex(v);
        }
        builder.add_edges(edges);
        let graph = builder.build().unwrap();

        let degree_sum: usize = graph
            .vertices()
            .iter()
            .map(|v| graph.degree(v).unwrap())
            .sum();
        prop_assert_eq!(degree_sum, 2 * graph.edge_count());
    }

    #[test]
    fn adjacency_is_symmetric((n, edges) in arb_edges()) {
        let mut builder = GraphBuilder::new();
        for v in 0..n {
            builder.add_vertex(v);
        }
        builder.add_edges(edges);
        let graph = builder.build().unwrap();

        for (u, v) in graph.edges() {
            prop_assert!(graph.neighbors(u).unwrap().contains(&v));
            prop_assert!(graph.neighbors(v).unwrap().contains(&u));
        }
    }
}
