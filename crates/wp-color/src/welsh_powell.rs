//! Welsh–Powell greedy coloring.
//!
//! Vertices are visited once, highest degree first, and each takes the smallest
//! color not already held by a colored neighbor. The result is always proper;
//! the degree ordering only tends to keep the color count low, it does not
//! minimize it.

use std::cmp::Reverse;
use std::collections::HashSet;

use tracing::{debug, trace};
use wp_core::{Color, VertexKey};
use wp_graph::Graph;

use crate::assignment::ColorAssignment;

/// Vertex indices sorted by descending degree.
///
/// The sort is stable: equal-degree vertices keep their `vertices()` order.
fn order_indices<V: VertexKey>(graph: &Graph<V>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.vertex_count()).collect();
    order.sort_by_key(|&idx| Reverse(graph.degree_at(idx)));
    order
}

/// The Welsh–Powell visiting order: descending degree, ties in `vertices()` order.
pub fn welsh_powell_order<V: VertexKey>(graph: &Graph<V>) -> Vec<&V> {
    order_indices(graph)
        .into_iter()
        .map(|idx| graph.vertex_at(idx))
        .collect()
}

/// Smallest color not in `used`.
fn first_free_color(used: &HashSet<Color>) -> Color {
    let mut color = 0;
    while used.contains(&color) {
        color += 1;
    }
    color
}

/// Color `graph` with the Welsh–Powell heuristic.
///
/// Returns a total assignment: every vertex gets exactly one color, and no two
/// adjacent vertices share one. Isolated vertices always get color 0; an empty
/// graph yields an empty assignment. Runs in O(V + E) after the sort.
pub fn color<V: VertexKey>(graph: &Graph<V>) -> ColorAssignment<V> {
    let order = order_indices(graph);
    let mut colors: Vec<Option<Color>> = vec![None; graph.vertex_count()];
    let mut assignment = ColorAssignment::with_capacity(graph.vertex_count());

    for idx in order {
        // Only neighbors colored earlier in the pass constrain this vertex
        let used: HashSet<Color> = graph
            .neighbor_indices(idx)
            .iter()
            .filter_map(|&n| colors[n])
            .collect();
        let chosen = first_free_color(&used);

        trace!(
            vertex = ?graph.vertex_at(idx),
            degree = graph.degree_at(idx),
            color = chosen,
            "colored vertex"
        );

        colors[idx] = Some(chosen);
        assignment.insert(graph.vertex_at(idx).clone(), chosen);
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        colors = assignment.colors_used(),
        "welsh-powell coloring complete"
    );

    assignment
}
