//! Diagram markup generation
//!
//! Renders a [`HierarchyGraph`](crate::core::models::HierarchyGraph) as a
//! Mermaid flowchart.

pub mod mermaid;

pub use mermaid::{MermaidGenerator, FLOWCHART_HEADER};
