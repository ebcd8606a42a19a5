//! Build, color, and verify a graph definition in one step.

use tracing::{info, warn};
use wp_color::{ColorAssignment, VerificationResult, color, verify};
use wp_graph::Graph;

use crate::error::{AppError, AppResult};
use crate::graph_service::build_graph;
use crate::schema::GraphDef;

/// Everything produced by coloring one definition.
#[derive(Debug, Clone)]
pub struct ColoringRun {
    pub name: String,
    pub graph: Graph<i64>,
    pub assignment: ColorAssignment<i64>,
    pub verification: VerificationResult<i64>,
}

impl ColoringRun {
    /// Turn a conflict into an error.
    pub fn ensure_valid(&self) -> AppResult<()> {
        if self.verification.is_valid() {
            Ok(())
        } else {
            Err(AppError::Conflict(self.verification.to_string()))
        }
    }
}

/// Build the graph for `def`, color it, and verify the result.
pub fn color_definition(def: &GraphDef) -> AppResult<ColoringRun> {
    let graph = build_graph(def)?;
    let assignment = color(&graph);
    let verification = verify(&graph, &assignment)?;

    if verification.is_valid() {
        info!(name = %def.name, result = %verification, "colored graph");
    } else {
        warn!(name = %def.name, result = %verification, "coloring failed verification");
    }

    Ok(ColoringRun {
        name: def.name.clone(),
        graph,
        assignment,
        verification,
    })
}
