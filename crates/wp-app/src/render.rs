//! Renderers for colored graphs.
//!
//! Rendering only reads the graph and assignment; it has no say in the coloring.

use std::fmt::Write;

use wp_color::ColorAssignment;
use wp_core::VertexKey;
use wp_graph::Graph;

use crate::error::AppResult;
use crate::palette::display_color;

/// Something that can present a colored graph.
pub trait Renderer<V: VertexKey> {
    fn render(
        &self,
        title: &str,
        graph: &Graph<V>,
        assignment: &ColorAssignment<V>,
    ) -> AppResult<String>;
}

/// Output formats understood by `RenderFormat::render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Text,
    Dot,
}

impl RenderFormat {
    pub fn render<V: VertexKey>(
        self,
        title: &str,
        graph: &Graph<V>,
        assignment: &ColorAssignment<V>,
    ) -> AppResult<String> {
        match self {
            RenderFormat::Text => TextRenderer.render(title, graph, assignment),
            RenderFormat::Dot => DotRenderer.render(title, graph, assignment),
        }
    }
}

/// Display label of a vertex: its `Debug` form without surrounding quotes.
fn vertex_label<V: VertexKey>(vertex: &V) -> String {
    let raw = format!("{:?}", vertex);
    match raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner.to_string(),
        None => raw,
    }
}

/// Plain-text listing: summary line, color classes, then each vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl<V: VertexKey> Renderer<V> for TextRenderer {
    fn render(
        &self,
        title: &str,
        graph: &Graph<V>,
        assignment: &ColorAssignment<V>,
    ) -> AppResult<String> {
        let mut out = String::new();
        writeln!(out, "{}", title)?;
        writeln!(
            out,
            "  {} vertices, {} edges, {} colors",
            graph.vertex_count(),
            graph.edge_count(),
            assignment.colors_used()
        )?;

        for (color, members) in assignment.color_classes() {
            let names: Vec<String> = members.into_iter().map(vertex_label).collect();
            writeln!(
                out,
                "  color {} ({}): {}",
                color,
                display_color(color),
                names.join(", ")
            )?;
        }

        for v in graph.vertices() {
            match assignment.get(v) {
                Some(color) => writeln!(out, "  {} -> {}", vertex_label(v), color)?,
                None => writeln!(out, "  {} -> (uncolored)", vertex_label(v))?,
            }
        }

        Ok(out)
    }
}

/// Graphviz DOT output with palette fill colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

fn dot_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<V: VertexKey> Renderer<V> for DotRenderer {
    fn render(
        &self,
        title: &str,
        graph: &Graph<V>,
        assignment: &ColorAssignment<V>,
    ) -> AppResult<String> {
        let title = dot_escape(title);
        let mut out = String::new();
        writeln!(out, "graph \"{}\" {{", title)?;
        writeln!(out, "  label=\"{}\";", title)?;
        writeln!(out, "  node [shape=circle, style=filled, fontcolor=white];")?;

        for v in graph.vertices() {
            let label = dot_escape(&vertex_label(v));
            match assignment.get(v) {
                Some(color) => writeln!(
                    out,
                    "  \"{0}\" [label=\"{0}\", fillcolor=\"{1}\"];",
                    label,
                    display_color(color)
                )?,
                None => writeln!(out, "  \"{0}\" [label=\"{0}\", fillcolor=\"black\"];", label)?,
            }
        }

        for (u, v) in graph.edges() {
            writeln!(
                out,
                "  \"{}\" -- \"{}\";",
                dot_escape(&vertex_label(u)),
                dot_escape(&vertex_label(v))
            )?;
        }

        writeln!(out, "}}")?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_color::color;

    fn path_graph() -> Graph<i64> {
        Graph::from_edges([(1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn text_lists_classes_and_vertices() {
        let graph = path_graph();
        let assignment = color(&graph);
        let text = TextRenderer.render("Path", &graph, &assignment).unwrap();

        assert!(text.starts_with("Path\n"));
        assert!(text.contains("3 vertices, 2 edges, 2 colors"));
        assert!(text.contains("color 0 (#1f77b4): 2"));
        assert!(text.contains("color 1 (#aec7e8): 1, 3"));
        assert!(text.contains("  1 -> 1\n"));
        assert!(text.contains("  2 -> 0\n"));
    }

    #[test]
    fn dot_has_every_vertex_and_edge() {
        let graph = path_graph();
        let assignment = color(&graph);
        let dot = RenderFormat::Dot
            .render("Path", &graph, &assignment)
            .unwrap();

        assert!(dot.starts_with("graph \"Path\" {\n"));
        assert!(dot.contains("\"2\" [label=\"2\", fillcolor=\"#1f77b4\"];"));
        assert!(dot.contains("\"1\" [label=\"1\", fillcolor=\"#aec7e8\"];"));
        assert!(dot.contains("\"1\" -- \"2\";"));
        assert!(dot.contains("\"2\" -- \"3\";"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn string_labels_are_unquoted_and_escaped() {
        assert_eq!(vertex_label(&"hub".to_string()), "hub");
        assert_eq!(vertex_label(&7_i64), "7");
        assert_eq!(dot_escape("a \"b\""), "a \\\"b\\\"");
    }
}
