//! Data models for `addi-mermaid`

pub mod edge;
pub mod graph;
pub mod node;

pub use edge::Edge;
pub use graph::{HierarchyGraph, Statement};
pub use node::{LevelStyle, Node};
