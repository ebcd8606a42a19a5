//! Graph definition file schema.

use serde::{Deserialize, Serialize};

/// A graph as written in a YAML or JSON definition file.
///
/// Vertices are declared in this order: generator vertices, then `vertices`,
/// then edge endpoints in order of first appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeneratorDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<[i64; 2]>,
}

impl GraphDef {
    /// A definition holding only a literal edge list.
    pub fn from_edges(name: impl Into<String>, edges: &[(i64, i64)]) -> Self {
        Self {
            name: name.into(),
            generator: None,
            vertices: Vec::new(),
            edges: edges.iter().map(|&(u, v)| [u, v]).collect(),
        }
    }
}

/// A named generator producing vertices `0..n`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorDef {
    Cycle { n: u32 },
    Path { n: u32 },
    Star { leaves: u32 },
    Complete { n: u32 },
    Random { n: u32, p: f64, seed: u64 },
}
