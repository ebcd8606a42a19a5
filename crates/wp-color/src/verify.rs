//! Coloring verification.

use std::fmt;

use tracing::debug;
use wp_core::{Color, VertexKey, WpError, WpResult};
use wp_graph::Graph;

use crate::assignment::ColorAssignment;

/// Outcome of checking an assignment against a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult<V> {
    /// No edge joins two vertices of the same color.
    Valid { colors_used: usize },

    /// An edge whose endpoints share `color`. One witness, not every conflict.
    Conflict { u: V, v: V, color: Color },
}

impl<V> VerificationResult<V> {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationResult::Valid { .. })
    }

    /// Distinct colors in the assignment, when valid.
    pub fn colors_used(&self) -> Option<usize> {
        match self {
            VerificationResult::Valid { colors_used } => Some(*colors_used),
            VerificationResult::Conflict { .. } => None,
        }
    }
}

impl<V: fmt::Debug> fmt::Display for VerificationResult<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationResult::Valid { colors_used } => {
                write!(f, "Vertex coloring is valid. Used {} colors.", colors_used)
            }
            VerificationResult::Conflict { u, v, color } => write!(
                f,
                "Adjacent vertices {:?} and {:?} have the same color {}",
                u, v, color
            ),
        }
    }
}

/// Check that `assignment` is a proper coloring of `graph`.
///
/// The assignment must color every vertex of the graph; a missing vertex is
/// reported as `WpError::Uncolored` rather than treated as valid. Edges are
/// checked in `Graph::edges()` order and the first conflict found is returned.
/// If there is none, the result carries the number of distinct colors used.
pub fn verify<V: VertexKey>(
    graph: &Graph<V>,
    assignment: &ColorAssignment<V>,
) -> WpResult<VerificationResult<V>> {
    if let Some(missing) = graph.vertices().iter().find(|v| !assignment.contains(v)) {
        return Err(WpError::Uncolored {
            vertex: WpError::vertex_label(missing),
        });
    }

    for (u, v) in graph.edges() {
        if let (Some(cu), Some(cv)) = (assignment.get(u), assignment.get(v)) {
            if cu == cv {
                debug!(u = ?u, v = ?v, color = cu, "coloring conflict");
                return Ok(VerificationResult::Conflict {
                    u: u.clone(),
                    v: v.clone(),
                    color: cu,
                });
            }
        }
    }

    Ok(VerificationResult::Valid {
        colors_used: assignment.colors_used(),
    })
}
