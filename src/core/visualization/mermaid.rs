//! Mermaid flowchart generator for hierarchy graphs
//!
//! Emits a top-down flowchart laid out by ELK, with node declarations and
//! edges in encounter order followed by per-level fill styles.

use crate::core::models::{HierarchyGraph, Statement};
use std::fmt::Write;

/// Fixed front matter and diagram type line
pub const FLOWCHART_HEADER: &str = "---
config:
  layout: elk
  theme: redux
---
flowchart TD
";

const INDENT: &str = "    ";

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate the full flowchart for a graph
    ///
    /// Output is the header, then declarations and edges interleaved as
    /// they were first seen, then one `style` line for every node on
    /// levels 1-3. Every line ends with a newline.
    #[must_use]
    pub fn generate(graph: &HierarchyGraph) -> String {
        let mut output = String::from(FLOWCHART_HEADER);

        for statement in graph.statements() {
            match statement {
                Statement::Declare(node) => {
                    let _ = writeln!(output, "{INDENT}{}[\"{}\"]", node.id, node.label());
                }
                Statement::Link(edge) => {
                    let _ = writeln!(output, "{INDENT}{edge}");
                }
            }
        }

        for node in graph.nodes() {
            if let Some(style) = node.style() {
                let _ = writeln!(output, "{INDENT}style {} fill:{}", node.id, style.fill());
            }
        }

        output
    }

    /// Wrap markup in a Markdown mermaid code fence
    #[must_use]
    pub fn fence(markup: &str) -> String {
        let mut output = String::from("```mermaid\n");
        output.push_str(markup);
        if !markup.ends_with('\n') {
            output.push('\n');
        }
        output.push_str("```\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_is_header_only() {
        let diagram = MermaidGenerator::generate(&HierarchyGraph::new());
        assert_eq!(diagram, FLOWCHART_HEADER);
    }

    #[test]
    fn test_mermaid_generation() {
        let mut graph = HierarchyGraph::new();
        graph.add_chain(&["Root", "ChildA"]);

        let diagram = MermaidGenerator::generate(&graph);
        let expected = format!(
            "{FLOWCHART_HEADER}    Root[\"Root\"]\n    ChildA[\"ChildA\"]\n    Root --> ChildA\n    style Root fill:#00C853\n    style ChildA fill:#FFC107\n"
        );
        assert_eq!(diagram, expected);
    }

    #[test]
    fn test_styles_follow_all_edges() {
        let mut graph = HierarchyGraph::new();
        graph.add_chain(&["R", "A"]);
        graph.add_chain(&["R", "B"]);

        let diagram = MermaidGenerator::generate(&graph);
        let last_edge = diagram.rfind("-->").unwrap();
        let first_style = diagram.find("style ").unwrap();
        assert!(last_edge < first_style);
    }

    #[test]
    fn test_deep_levels_are_unstyled() {
        let mut graph = HierarchyGraph::new();
        graph.add_chain(&["L1", "L2", "L3", "L4", "L5"]);

        let diagram = MermaidGenerator::generate(&graph);
        assert!(diagram.contains("style L3 fill:#F44336"));
        assert!(!diagram.contains("style L4"));
        assert!(!diagram.contains("style L5"));
    }

    #[test]
    fn test_quotes_escaped_in_label_only() {
        let mut graph = HierarchyGraph::new();
        graph.add_chain(&["Say \"Hi\"", "Next"]);

        let diagram = MermaidGenerator::generate(&graph);
        assert!(diagram.contains("    Say \"Hi\"[\"Say \\\"Hi\\\"\"]\n"));
        assert!(diagram.contains("    Say \"Hi\" --> Next\n"));
        assert!(diagram.contains("    style Say \"Hi\" fill:#00C853\n"));
    }

    #[test]
    fn test_fence() {
        assert_eq!(
            MermaidGenerator::fence("flowchart TD\n"),
            "```mermaid\nflowchart TD\n```\n"
        );
        assert_eq!(
            MermaidGenerator::fence("flowchart TD"),
            "```mermaid\nflowchart TD\n```\n"
        );
    }
}
