//! Core graph data structure.

use wp_core::{VertexKey, WpResult};

use crate::builder::GraphBuilder;
use crate::indexing::VertexIndex;

/// An undirected simple graph: a validated, immutable vertex set plus edge set.
///
/// The graph stores:
/// - All vertices in insertion order (the `vertices()` enumeration order).
/// - Each undirected edge once, as a pair of vertex indices, in insertion order.
/// - Compact adjacency: for each vertex, its neighbors in edge insertion order.
///
/// Nothing is cached or mutated after construction, so a `Graph` can be shared
/// freely between readers.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    pub(crate) index: VertexIndex<V>,

    /// Undirected edges as (index, index), deduplicated.
    pub(crate) edges: Vec<(usize, usize)>,

    /// Offsets for vertex->neighbor adjacency: vertex i's neighbors are in
    /// adjacency[adjacency_offsets[i]..adjacency_offsets[i+1]].
    pub(crate) adjacency_offsets: Vec<usize>,

    /// Flat list of neighbor indices.
    pub(crate) adjacency: Vec<usize>,
}

impl<V: VertexKey> Graph<V> {
    /// The graph with no vertices and no edges.
    pub fn empty() -> Self {
        Self {
            index: VertexIndex::new(),
            edges: Vec::new(),
            adjacency_offsets: vec![0],
            adjacency: Vec::new(),
        }
    }

    /// Build a graph from a literal edge list.
    ///
    /// Endpoints are declared implicitly in order of first appearance.
    pub fn from_edges<I>(edges: I) -> WpResult<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut builder = GraphBuilder::new();
        for (u, v) in edges {
            builder.add_vertex(u.clone());
            builder.add_vertex(v.clone());
            builder.add_edge(u, v);
        }
        builder.build()
    }

    /// All vertices, in stable insertion order.
    pub fn vertices(&self) -> &[V] {
        self.index.vertices()
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.get(vertex).is_some()
    }

    /// Vertices adjacent to `vertex`, in edge insertion order.
    ///
    /// Fails with `UnknownVertex` if `vertex` is not in the graph.
    pub fn neighbors(&self, vertex: &V) -> WpResult<Vec<&V>> {
        let idx = self.index.idx(vertex)?;
        Ok(self
            .neighbor_indices(idx)
            .iter()
            .map(|&n| self.index.vertex(n))
            .collect())
    }

    /// Number of neighbors of `vertex`.
    ///
    /// Fails with `UnknownVertex` if `vertex` is not in the graph.
    pub fn degree(&self, vertex: &V) -> WpResult<usize> {
        let idx = self.index.idx(vertex)?;
        Ok(self.degree_at(idx))
    }

    /// Each undirected edge once, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.edges
            .iter()
            .map(|&(u, v)| (self.index.vertex(u), self.index.vertex(v)))
    }

    /// Contiguous index of a vertex.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex)
    }

    /// Vertex at a contiguous index (panics if out of bounds).
    pub fn vertex_at(&self, idx: usize) -> &V {
        self.index.vertex(idx)
    }

    /// Neighbor indices of the vertex at `idx` (empty if out of bounds).
    pub fn neighbor_indices(&self, idx: usize) -> &[usize] {
        if idx >= self.index.len() {
            return &[];
        }
        let start = self.adjacency_offsets[idx];
        let end = self.adjacency_offsets[idx + 1];
        &self.adjacency[start..end]
    }

    pub fn degree_at(&self, idx: usize) -> usize {
        self.neighbor_indices(idx).len()
    }

    /// Edges as index pairs, in insertion order.
    pub fn edge_indices(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

impl<V: VertexKey> Default for Graph<V> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_core::WpError;

    fn triangle_with_tail() -> Graph<u32> {
        Graph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]).unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph: Graph<u32> = Graph::empty();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn from_edges_declares_endpoints_in_first_appearance_order() {
        let graph = Graph::from_edges([(5, 2), (2, 9), (9, 5)]).unwrap();
        assert_eq!(graph.vertices(), &[5, 2, 9]);
    }

    #[test]
    fn neighbors_follow_edge_order() {
        let graph = triangle_with_tail();
        assert_eq!(graph.neighbors(&3).unwrap(), vec![&2, &1, &4]);
        assert_eq!(graph.neighbors(&4).unwrap(), vec![&3]);
    }

    #[test]
    fn degree_counts_neighbors() {
        let graph = triangle_with_tail();
        assert_eq!(graph.degree(&1).unwrap(), 2);
        assert_eq!(graph.degree(&3).unwrap(), 3);
        assert_eq!(graph.degree(&4).unwrap(), 1);
    }

    #[test]
    fn queries_on_unknown_vertex_fail() {
        let graph = triangle_with_tail();
        assert!(!graph.contains(&42));
        assert_eq!(
            graph.neighbors(&42).unwrap_err(),
            WpError::UnknownVertex {
                vertex: "42".into()
            }
        );
        assert!(graph.degree(&42).is_err());
    }

    #[test]
    fn index_accessors_agree_with_vertex_queries() {
        let graph = triangle_with_tail();
        for v in graph.vertices() {
            let idx = graph.index_of(v).unwrap();
            assert_eq!(graph.vertex_at(idx), v);
            assert_eq!(graph.degree_at(idx), graph.degree(v).unwrap());
        }
        assert!(graph.neighbor_indices(99).is_empty());
    }

    #[test]
    fn vertices_enumeration_is_stable() {
        let graph = triangle_with_tail();
        let first: Vec<u32> = graph.vertices().to_vec();
        let second: Vec<u32> = graph.vertices().to_vec();
        assert_eq!(first, second);
    }
}
