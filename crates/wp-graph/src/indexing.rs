//! Stable vertex indexing.
//!
//! Maps vertex identifiers to contiguous indices (0..N) in insertion order,
//! which is also the enumeration order of `Graph::vertices`.

use std::collections::HashMap;

use wp_core::{VertexKey, WpError, WpResult};

use crate::error::GraphError;

/// Bidirectional map between vertex identifiers and contiguous indices.
#[derive(Debug, Clone)]
pub struct VertexIndex<V> {
    /// Contiguous list of vertices (index -> vertex).
    vertices: Vec<V>,

    /// Reverse lookup: vertex -> index.
    lookup: HashMap<V, usize>,
}

impl<V> Default for VertexIndex<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            lookup: HashMap::new(),
        }
    }
}

impl<V: VertexKey> VertexIndex<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, returning its index. Re-inserting keeps the first index.
    pub fn insert(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.lookup.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.lookup.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        idx
    }

    pub fn get(&self, vertex: &V) -> Option<usize> {
        self.lookup.get(vertex).copied()
    }

    /// Index of a vertex, or `UnknownVertex`.
    pub fn idx(&self, vertex: &V) -> WpResult<usize> {
        self.get(vertex).ok_or_else(|| {
            GraphError::UnknownVertex {
                vertex: WpError::vertex_label(vertex),
            }
            .into()
        })
    }

    /// Vertex at a contiguous index (panics if out of bounds).
    pub fn vertex(&self, idx: usize) -> &V {
        &self.vertices[idx]
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
