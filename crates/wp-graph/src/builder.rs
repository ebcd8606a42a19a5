//! Incremental graph builder.

use wp_core::{VertexKey, WpResult};

use crate::graph::Graph;
use crate::indexing::VertexIndex;
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Declare vertices with `add_vertex`, connect them with `add_edge`,
/// then call `build()` to validate and freeze the result into an immutable `Graph`.
/// Edges may only join declared vertices; anything else is rejected by `build()`.
#[derive(Debug)]
pub struct GraphBuilder<V> {
    index: VertexIndex<V>,
    edges: Vec<(V, V)>,
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self {
            index: VertexIndex::default(),
            edges: Vec::new(),
        }
    }
}

impl<V: VertexKey> GraphBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a vertex and return its index. Declaring it again is a no-op.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.index.insert(vertex)
    }

    /// Record an undirected edge between two vertices.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.edges.push((u, v));
    }

    /// Record several edges at once.
    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        self.edges.extend(edges);
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// Rejects edges touching undeclared vertices and self loops.
    /// Repeated edges, in either direction, collapse to one.
    pub fn build(self) -> WpResult<Graph<V>> {
        let edges = validate::resolve_edges(&self.index, &self.edges)?;

        let (adjacency_offsets, adjacency) = Self::build_adjacency(self.index.len(), &edges);

        Ok(Graph {
            index: self.index,
            edges,
            adjacency_offsets,
            adjacency,
        })
    }

    /// Build compact adjacency lists: for each vertex, its neighbors in edge order.
    fn build_adjacency(vertex_count: usize, edges: &[(usize, usize)]) -> (Vec<usize>, Vec<usize>) {
        let mut per_vertex: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
        for &(u, v) in edges {
            per_vertex[u].push(v);
            per_vertex[v].push(u);
        }

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut flat = Vec::with_capacity(edges.len() * 2);
        offsets.push(0);

        for neighbors in &per_vertex {
            flat.extend_from_slice(neighbors);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_core::WpError;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("a");
        let b = builder.add_vertex("b");
        builder.add_edge("a", "b");

        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(builder.vertex_count(), 2);

        let graph = builder.build().unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&"a").unwrap(), vec![&"b"]);
    }

    #[test]
    fn isolated_vertices_survive_build() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex(1_u32);
        builder.add_vertex(2);
        builder.add_vertex(3);
        builder.add_edge(1, 2);

        let graph = builder.build().unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.degree(&3).unwrap(), 0);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex(1_u32);
        builder.add_vertex(2);
        builder.add_edges([(1, 2), (2, 1), (1, 2)]);

        let graph = builder.build().unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(&1).unwrap(), 1);
        assert_eq!(graph.degree(&2).unwrap(), 1);
    }

    #[test]
    fn adjacency_lists_mirror_edges() {
        let (offsets, flat) = GraphBuilder::<u32>::build_adjacency(4, &[(0, 1), (2, 1), (3, 0)]);
        assert_eq!(offsets, vec![0, 2, 4, 5, 6]);
        assert_eq!(flat, vec![1, 3, 0, 2, 1, 0]);
    }

    #[test]
    fn edge_to_undeclared_vertex_is_malformed() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex(1_u32);
        builder.add_edge(1, 7);

        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            WpError::MalformedGraph {
                what: "Edge (1, 7) refers to non-existent vertex 7".into()
            }
        );
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex(4_u32);
        builder.add_edge(4, 4);

        assert_eq!(
            builder.build().unwrap_err(),
            WpError::SelfLoop { vertex: "4".into() }
        );
    }
}
