//! Built-in demo graphs.

use crate::error::{AppError, AppResult};
use crate::schema::{GeneratorDef, GraphDef};

/// A named demo graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Short key used on the command line.
    pub key: &'static str,
    pub def: GraphDef,
}

impl Scenario {
    pub fn title(&self) -> String {
        coloring_title(&self.def.name)
    }
}

/// Display title for a colored graph.
pub fn coloring_title(name: &str) -> String {
    format!("{} - Vertex Coloring", name)
}

/// The five demo graphs, in presentation order.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            key: "small",
            def: GraphDef::from_edges(
                "Small Graph",
                &[(1, 2), (1, 3), (2, 3), (2, 4), (3, 4), (4, 5), (5, 6)],
            ),
        },
        Scenario {
            key: "cycle",
            def: GraphDef {
                name: "Cycle Graph".to_string(),
                generator: Some(GeneratorDef::Cycle { n: 10 }),
                vertices: Vec::new(),
                edges: vec![[0, 5], [2, 7]],
            },
        },
        Scenario {
            key: "star",
            def: GraphDef {
                name: "Star Graph".to_string(),
                generator: Some(GeneratorDef::Star { leaves: 9 }),
                vertices: Vec::new(),
                edges: vec![[1, 2], [2, 3], [3, 4]],
            },
        },
        Scenario {
            key: "mixed",
            def: GraphDef::from_edges(
                "Mixed Degree Graph",
                &[
                    (1, 2),
                    (1, 3),
                    (1, 4),
                    (2, 3),
                    (2, 5),
                    (3, 6),
                    (4, 7),
                    (5, 8),
                    (6, 8),
                    (7, 8),
                ],
            ),
        },
        Scenario {
            key: "random",
            def: GraphDef {
                name: "Random Graph".to_string(),
                generator: Some(GeneratorDef::Random {
                    n: 12,
                    p: 0.3,
                    seed: 42,
                }),
                vertices: Vec::new(),
                edges: Vec::new(),
            },
        },
    ]
}

/// Look up a built-in scenario by key.
pub fn find_scenario(key: &str) -> AppResult<Scenario> {
    builtin_scenarios()
        .into_iter()
        .find(|s| s.key == key)
        .ok_or_else(|| AppError::ScenarioNotFound(key.to_string()))
}

/// Scenarios to run with their 1-based position in the built-in list.
///
/// `None` selects all of them; an unknown key is an error.
pub fn select_scenarios(only: Option<&str>) -> AppResult<Vec<(usize, Scenario)>> {
    let numbered = builtin_scenarios()
        .into_iter()
        .enumerate()
        .map(|(i, s)| (i + 1, s));

    match only {
        None => Ok(numbered.collect()),
        Some(key) => numbered
            .filter(|(_, s)| s.key == key)
            .map(|entry| vec![entry])
            .next()
            .ok_or_else(|| AppError::ScenarioNotFound(key.to_string())),
    }
}
