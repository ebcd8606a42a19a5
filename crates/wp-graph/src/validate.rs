//! Graph validation logic.

use std::collections::HashSet;

use wp_core::{VertexKey, WpError, WpResult};

use crate::error::GraphError;
use crate::indexing::VertexIndex;

/// Resolve edges to index pairs, rejecting dangling endpoints and self loops.
///
/// Duplicates (in either direction) are dropped; first occurrence wins.
pub(crate) fn resolve_edges<V: VertexKey>(
    index: &VertexIndex<V>,
    edges: &[(V, V)],
) -> WpResult<Vec<(usize, usize)>> {
    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(edges.len());
    let mut resolved = Vec::with_capacity(edges.len());

    for (u, v) in edges {
        if u == v {
            return Err(GraphError::SelfLoop {
                vertex: WpError::vertex_label(u),
            }
            .into());
        }

        let ui = endpoint(index, u, u, v)?;
        let vi = endpoint(index, v, u, v)?;

        let key = (ui.min(vi), ui.max(vi));
        if seen.insert(key) {
            resolved.push((ui, vi));
        }
    }

    Ok(resolved)
}

fn endpoint<V: VertexKey>(index: &VertexIndex<V>, vertex: &V, u: &V, v: &V) -> WpResult<usize> {
    index.get(vertex).ok_or_else(|| {
        GraphError::DanglingEdge {
            u: WpError::vertex_label(u),
            v: WpError::vertex_label(v),
            missing: WpError::vertex_label(vertex),
        }
        .into()
    })
}
