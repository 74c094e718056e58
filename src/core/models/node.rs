//! Hierarchy nodes and their level-based styling

/// A unique entity in the hierarchy
///
/// The trimmed text doubles as the Mermaid identifier. `level` is the
/// 1-based position in the first chain the node appeared in and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Trimmed entity text, used verbatim as the diagram identifier
    pub id: String,
    /// 1-based depth of first occurrence (1 = root)
    pub level: usize,
}

impl Node {
    /// Create a new node
    #[must_use]
    pub const fn new(id: String, level: usize) -> Self {
        Self { id, level }
    }

    /// Display label: the node text with `"` escaped as `\"`
    #[must_use]
    pub fn label(&self) -> String {
        self.id.replace('"', "\\\"")
    }

    /// Fill style for this node's level, if it has one
    #[must_use]
    pub const fn style(&self) -> Option<LevelStyle> {
        LevelStyle::for_level(self.level)
    }
}

/// Fill colors assigned to the top three hierarchy levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStyle {
    /// Level 1 (roots)
    Green,
    /// Level 2
    Amber,
    /// Level 3
    Red,
}

impl LevelStyle {
    /// Style for a level; levels other than 1-3 are unstyled
    #[must_use]
    pub const fn for_level(level: usize) -> Option<Self> {
        match level {
            1 => Some(Self::Green),
            2 => Some(Self::Amber),
            3 => Some(Self::Red),
            _ => None,
        }
    }

    /// Hex fill color
    #[must_use]
    pub const fn fill(self) -> &'static str {
        match self {
            Self::Green => "#00C853",
            Self::Amber => "#FFC107",
            Self::Red => "#F44336",
        }
    }
}
