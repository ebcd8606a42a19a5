//! Named graph generators.
//!
//! All generators produce `Graph<u32>` with vertices `0..n` declared in
//! ascending order, so `vertices()` enumeration is predictable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wp_core::WpResult;

use crate::builder::GraphBuilder;
use crate::error::GraphError;
use crate::graph::Graph;

fn with_vertices(n: u32) -> GraphBuilder<u32> {
    let mut builder = GraphBuilder::new();
    for v in 0..n {
        builder.add_vertex(v);
    }
    builder
}

/// Cycle on `n` vertices: 0-1, 1-2, ..., (n-1)-0.
///
/// `n = 1` is a single vertex and `n = 2` a single edge (no self loops, no multi-edges).
pub fn cycle(n: u32) -> WpResult<Graph<u32>> {
    let mut builder = with_vertices(n);
    for v in 1..n {
        builder.add_edge(v - 1, v);
    }
    if n > 2 {
        builder.add_edge(n - 1, 0);
    }
    builder.build()
}

/// Path on `n` vertices: 0-1, 1-2, ..., (n-2)-(n-1).
pub fn path(n: u32) -> WpResult<Graph<u32>> {
    let mut builder = with_vertices(n);
    for v in 1..n {
        builder.add_edge(v - 1, v);
    }
    builder.build()
}

/// Star with center 0 and leaves `1..=leaves`.
///
/// Fails with `InvalidArg` if `leaves + 1` does not fit in a `u32`.
pub fn star(leaves: u32) -> WpResult<Graph<u32>> {
    let vertex_count = leaves
        .checked_add(1)
        .ok_or(GraphError::TooManyVertices { what: "star" })?;
    let mut builder = with_vertices(vertex_count);
    for leaf in 1..=leaves {
        builder.add_edge(0, leaf);
    }
    builder.build()
}

/// Complete graph on `n` vertices.
pub fn complete(n: u32) -> WpResult<Graph<u32>> {
    let mut builder = with_vertices(n);
    for u in 0..n {
        for v in (u + 1)..n {
            builder.add_edge(u, v);
        }
    }
    builder.build()
}

/// Random G(n, p) graph: each unordered pair is joined independently with
/// probability `p`. The same `seed` always yields the same graph.
pub fn random(n: u32, p: f64, seed: u64) -> WpResult<Graph<u32>> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidProbability { p }.into());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = with_vertices(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                builder.add_edge(u, v);
            }
        }
    }
    builder.build()
}
