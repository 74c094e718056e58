//! Export-to-diagram pipeline
//!
//! Reads an export, folds its chains into a [`HierarchyGraph`] and renders
//! the result. All accumulation state lives in the graph built for one call.

use crate::core::error::DiagramError;
use crate::core::models::HierarchyGraph;
use crate::core::parser::{parse_export_csv, parse_export_str};
use crate::core::visualization::MermaidGenerator;
use crate::info;
use std::path::Path;

/// Fold row chains into a graph, in order
#[must_use]
pub fn build_graph<I>(chains: I) -> HierarchyGraph
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut graph = HierarchyGraph::new();
    graph.extend(chains);
    graph
}

/// Parse an export file and build its graph
///
/// # Errors
/// Returns [`DiagramError::NotFound`] for a missing file and
/// [`DiagramError::Unexpected`] for any other read or parse failure.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<HierarchyGraph, DiagramError> {
    let path = path.as_ref();
    let chains = parse_export_csv(path)?;
    info!("Read {} row chains from {}", chains.len(), path.display());

    let graph = build_graph(chains);
    info!(
        "Built hierarchy with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Generate Mermaid markup from an export file
///
/// # Errors
/// See [`load_graph`]. No partial markup is produced on error.
pub fn generate_mermaid_from_csv<P: AsRef<Path>>(path: P) -> Result<String, DiagramError> {
    load_graph(path).map(|graph| MermaidGenerator::generate(&graph))
}

/// Generate Mermaid markup from in-memory export text
///
/// # Errors
/// Returns [`DiagramError::Unexpected`] if the text has no header line or
/// contains an empty data line.
pub fn generate_mermaid_from_str(text: &str) -> Result<String, DiagramError> {
    let chains = parse_export_str(text)?;
    Ok(MermaidGenerator::generate(&build_graph(chains)))
}

/// Render either outcome as the plain text shown to the user
#[must_use]
pub fn render_outcome(result: Result<String, DiagramError>) -> String {
    result.unwrap_or_else(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_graph_preserves_row_order() {
        let graph = build_graph(vec![
            vec!["B".to_string(), "C".to_string()],
            vec!["A".to_string(), "B".to_string()],
        ]);
        let ids: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C", "A"]);
        assert_eq!(graph.node("B").map(|n| n.level), Some(1));
    }

    #[test]
    fn test_render_outcome_error() {
        let rendered = render_outcome(Err(DiagramError::Unexpected("boom".to_string())));
        assert_eq!(rendered, "An error occurred: boom");
    }

    #[test]
    fn test_render_outcome_success() {
        assert_eq!(render_outcome(Ok("flowchart TD\n".to_string())), "flowchart TD\n");
    }

    #[test]
    fn test_generate_from_str_header_only() {
        let markup = generate_mermaid_from_str("Root;Unused;Child\n").unwrap();
        assert_eq!(markup, crate::core::visualization::FLOWCHART_HEADER);
    }
}
