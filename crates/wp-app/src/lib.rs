//! Application layer around the coloring engine.
//!
//! Graph definition files, the built-in demo scenarios, and renderers that
//! turn a colored graph into text or Graphviz DOT. Shared by the CLI.

pub mod coloring_service;
pub mod error;
pub mod graph_service;
pub mod palette;
pub mod render;
pub mod scenarios;
pub mod schema;

// Re-export key types for convenience
pub use coloring_service::{ColoringRun, color_definition};
pub use error::{AppError, AppResult};
pub use graph_service::{GraphSummary, build_graph, load_graph_def, save_graph_def, summarize};
pub use render::{DotRenderer, RenderFormat, Renderer, TextRenderer};
pub use scenarios::{
    Scenario, builtin_scenarios, coloring_title, find_scenario, select_scenarios,
};
pub use schema::{GeneratorDef, GraphDef};
