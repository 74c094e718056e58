//! Directed edges between consecutive chain entries

use std::fmt;

/// "source leads to target" within one row's chain
///
/// Identity is the exact directional pair, so `A --> B` and `B --> A`
/// are different edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Node identifier the edge starts from
    pub source: String,
    /// Node identifier the edge points to
    pub target: String,
}

impl Edge {
    /// Create a new edge
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new("Root", "ChildA").to_string(), "Root --> ChildA");
    }

    #[test]
    fn test_edge_direction_matters() {
        assert_ne!(Edge::new("A", "B"), Edge::new("B", "A"));
    }
}
