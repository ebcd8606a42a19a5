//! wp-graph: undirected graph model for the coloring engine.
//!
//! Provides:
//! - Immutable undirected simple graph (`Graph`) with compact adjacency
//! - Incremental graph builder with validation
//! - Stable vertex indexing (insertion order)
//! - Named generators (cycle, path, star, complete, seeded random)
//!
//! # Example
//!
//! ```
//! use wp_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_vertex("a");
//! builder.add_vertex("b");
//! builder.add_vertex("c");
//! builder.add_edge("a", "b");
//! builder.add_edge("b", "c");
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.vertices(), &["a", "b", "c"]);
//! assert_eq!(graph.degree(&"b").unwrap(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod generators;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::Graph;
pub use indexing::VertexIndex;
