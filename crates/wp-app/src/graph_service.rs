//! Graph definition loading, saving, and construction.

use std::path::Path;

use tracing::info;
use wp_graph::{Graph, GraphBuilder, generators};

use crate::error::{AppError, AppResult};
use crate::schema::{GeneratorDef, GraphDef};

/// Summary of a built graph for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub name: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub max_degree: usize,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a graph definition. `.json` files are read as JSON, anything else as YAML.
pub fn load_graph_def(path: &Path) -> AppResult<GraphDef> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::GraphFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let parsed: Result<GraphDef, String> = if is_json(path) {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    let def = parsed.map_err(|message| AppError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    info!(path = %path.display(), name = %def.name, "loaded graph definition");
    Ok(def)
}

/// Save a graph definition, format chosen by extension as in `load_graph_def`.
pub fn save_graph_def(path: &Path, def: &GraphDef) -> AppResult<()> {
    let serialized: Result<String, String> = if is_json(path) {
        serde_json::to_string_pretty(def).map_err(|e| e.to_string())
    } else {
        serde_yaml::to_string(def).map_err(|e| e.to_string())
    };
    let content = serialized.map_err(|message| AppError::Serialize {
        path: path.to_path_buf(),
        message,
    })?;

    std::fs::write(path, content).map_err(|e| AppError::GraphFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn generate(generator: &GeneratorDef) -> AppResult<Graph<u32>> {
    let graph = match *generator {
        GeneratorDef::Cycle { n } => generators::cycle(n)?,
        GeneratorDef::Path { n } => generators::path(n)?,
        GeneratorDef::Star { leaves } => generators::star(leaves)?,
        GeneratorDef::Complete { n } => generators::complete(n)?,
        GeneratorDef::Random { n, p, seed } => generators::random(n, p, seed)?,
    };
    Ok(graph)
}

/// Build the graph a definition describes.
pub fn build_graph(def: &GraphDef) -> AppResult<Graph<i64>> {
    if def.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Graph definition must have a name".to_string(),
        ));
    }

    let mut builder = GraphBuilder::new();

    if let Some(generator) = &def.generator {
        let generated = generate(generator)?;
        for &v in generated.vertices() {
            builder.add_vertex(i64::from(v));
        }
        builder.add_edges(
            generated
                .edges()
                .map(|(u, v)| (i64::from(*u), i64::from(*v))),
        );
    }

    for &v in &def.vertices {
        builder.add_vertex(v);
    }

    for &[u, v] in &def.edges {
        builder.add_vertex(u);
        builder.add_vertex(v);
        builder.add_edge(u, v);
    }

    Ok(builder.build()?)
}

/// Summarize a built graph.
pub fn summarize(name: &str, graph: &Graph<i64>) -> GraphSummary {
    let max_degree = (0..graph.vertex_count())
        .map(|idx| graph.degree_at(idx))
        .max()
        .unwrap_or(0);

    GraphSummary {
        name: name.to_string(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        max_degree,
    }
}
