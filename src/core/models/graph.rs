//! Ordered hierarchy graph built from row chains

use super::{Edge, Node};
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// Position of a declaration or edge in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Node(usize),
    Edge(usize),
}

/// One emitted statement, in the order it was first encountered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// A node seen for the first time
    Declare(&'a Node),
    /// A directed pair seen for the first time
    Link(&'a Edge),
}

/// Deduplicated nodes and edges of one export
///
/// Nodes keep first-seen order and the level they were first given.
/// Declarations and edges are recorded interleaved, row by row, so the
/// renderer can reproduce the encounter order exactly.
#[derive(Debug, Clone, Default)]
pub struct HierarchyGraph {
    nodes: IndexMap<String, Node>,
    edges: IndexSet<Edge>,
    order: Vec<Entry>,
}

impl HierarchyGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row chain (root first)
    ///
    /// Unseen nodes get `level = position + 1` within this chain; nodes
    /// already present keep their level. Unseen consecutive pairs become
    /// edges. All declarations for the chain are recorded before its edges.
    pub fn add_chain<S: AsRef<str>>(&mut self, chain: &[S]) {
        for (position, name) in chain.iter().enumerate() {
            let name = name.as_ref();
            if self.nodes.contains_key(name) {
                continue;
            }
            let (index, _) = self
                .nodes
                .insert_full(name.to_string(), Node::new(name.to_string(), position + 1));
            self.order.push(Entry::Node(index));
        }

        for pair in chain.windows(2) {
            let (index, inserted) = self
                .edges
                .insert_full(Edge::new(pair[0].as_ref(), pair[1].as_ref()));
            if inserted {
                self.order.push(Entry::Edge(index));
            }
        }
    }

    /// Look up a node by identifier
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in first-seen order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Declarations and edges interleaved in encounter order
    pub fn statements(&self) -> impl Iterator<Item = Statement<'_>> {
        self.order.iter().filter_map(|entry| match *entry {
            Entry::Node(i) => self.nodes.get_index(i).map(|(_, node)| Statement::Declare(node)),
            Entry::Edge(i) => self.edges.get_index(i).map(Statement::Link),
        })
    }

    /// Check whether the directed pair was recorded
    #[must_use]
    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        self.edges.contains(&Edge::new(source, target))
    }

    /// Number of unique nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of unique edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when no chain contributed anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: AsRef<str>> Extend<Vec<S>> for HierarchyGraph {
    fn extend<I: IntoIterator<Item = Vec<S>>>(&mut self, chains: I) {
        for chain in chains {
            self.add_chain(&chain);
        }
    }
}

impl fmt::Display for HierarchyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Hierarchy ({} nodes, {} edges):",
            self.node_count(),
            self.edge_count()
        )?;
        for node in self.nodes() {
            writeln!(f, "  [{}] {}", node.level, node.id)?;
        }
        Ok(())
    }
}
