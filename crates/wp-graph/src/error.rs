//! Graph-specific error types.

use wp_core::WpError;

/// Graph construction and query errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A query named a vertex that isn't in the graph.
    UnknownVertex { vertex: String },

    /// An edge refers to a vertex that was never declared.
    DanglingEdge {
        u: String,
        v: String,
        missing: String,
    },

    /// An edge connects a vertex to itself.
    SelfLoop { vertex: String },

    /// A generator was asked for more vertices than `u32` can number.
    TooManyVertices { what: &'static str },

    /// Edge probability for a random graph outside [0, 1].
    InvalidProbability { p: f64 },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownVertex { vertex } => {
                write!(f, "Vertex {} is not in the graph", vertex)
            }
            GraphError::DanglingEdge { u, v, missing } => {
                write!(
                    f,
                    "Edge ({}, {}) refers to non-existent vertex {}",
                    u, v, missing
                )
            }
            GraphError::SelfLoop { vertex } => {
                write!(f, "Edge ({0}, {0}) is a self loop", vertex)
            }
            GraphError::TooManyVertices { what } => {
                write!(f, "Too many vertices requested for {}", what)
            }
            GraphError::InvalidProbability { p } => {
                write!(f, "Edge probability {} is outside [0, 1]", p)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for WpError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownVertex { vertex } => WpError::UnknownVertex { vertex },
            GraphError::SelfLoop { vertex } => WpError::SelfLoop { vertex },
            GraphError::InvalidProbability { .. } => WpError::InvalidArg {
                what: "edge probability must lie in [0, 1]",
            },
            GraphError::TooManyVertices { .. } => WpError::InvalidArg {
                what: "vertex count exceeds u32 range",
            },
            other @ GraphError::DanglingEdge { .. } => WpError::MalformedGraph {
                what: other.to_string(),
            },
        }
    }
}
