//! Labeled arcs for the auxiliary head layers.
//!
//! An arc is stored on the node it points *from* (the dependent or argument)
//! and names the head it points *to*.

use super::{NodeId, TagMatch};

/// Shared view over the arc types, used by filtering and rendering.
pub trait HeadArc {
    /// The node this arc points to.
    fn head(&self) -> NodeId;

    /// The relation name.
    fn label(&self) -> &str;

    fn is_head(&self, head: NodeId) -> bool {
        self.head() == head
    }

    fn is_label(&self, m: TagMatch<'_>) -> bool {
        m.matches(Some(self.label()))
    }
}

/// A secondary head arc (DAG overlay on the primary tree).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DepArc {
    pub head: NodeId,
    pub label: String,
}

impl DepArc {
    pub fn new(head: NodeId, label: impl Into<String>) -> Self {
        Self {
            head,
            label: label.into(),
        }
    }
}

impl HeadArc for DepArc {
    fn head(&self) -> NodeId {
        self.head
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// A semantic role arc from an argument to its predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SrlArc {
    /// The predicate.
    pub head: NodeId,
    /// The role (e.g. `A0`, `AM-TMP`).
    pub label: String,
}

impl SrlArc {
    pub fn new(head: NodeId, label: impl Into<String>) -> Self {
        Self {
            head,
            label: label.into(),
        }
    }
}

impl HeadArc for SrlArc {
    fn head(&self) -> NodeId {
        self.head
    }

    fn label(&self) -> &str {
        &self.label
    }
}
