//! Secondary heads: extra labeled heads that turn the primary tree into a DAG.
//!
//! The layer is independent of the primary tree; a secondary head may repeat
//! the primary head or point anywhere else. It must be initialized with
//! [`DepTree::init_secondary_heads`] before use.

use super::{DepArc, DepTree, HeadArc, NodeId, TagMatch};
use crate::{ArcLayer, DepError, DepResult};

impl DepTree {
    /// Start (or restart) an empty secondary head list on `node`.
    pub fn init_secondary_heads(&mut self, node: NodeId) {
        self.node_mut(node).secondary_heads = Some(Vec::new());
    }

    /// Replace the secondary heads of `node`, initializing the layer.
    pub fn set_secondary_heads(&mut self, node: NodeId, arcs: Vec<DepArc>) {
        self.node_mut(node).secondary_heads = Some(arcs);
    }

    pub fn add_secondary_head(
        &mut self,
        node: NodeId,
        head: NodeId,
        label: impl Into<String>,
    ) -> DepResult<()> {
        self.add_secondary_arc(node, DepArc::new(head, label))
    }

    pub fn add_secondary_arc(&mut self, node: NodeId, arc: DepArc) -> DepResult<()> {
        self.secondary_mut(node)?.push(arc);
        Ok(())
    }

    /// All secondary arcs of `node`, in insertion order.
    pub fn secondary_heads(&self, node: NodeId) -> DepResult<&[DepArc]> {
        let n = &self.nodes[node.0];
        n.secondary_heads
            .as_deref()
            .ok_or(DepError::LayerUninitialized {
                layer: ArcLayer::Secondary,
                node: n.id,
            })
    }

    pub fn secondary_heads_by_label(
        &self,
        node: NodeId,
        label: TagMatch<'_>,
    ) -> DepResult<Vec<&DepArc>> {
        Ok(self
            .secondary_heads(node)?
            .iter()
            .filter(|arc| arc.is_label(label))
            .collect())
    }

    fn secondary_mut(&mut self, node: NodeId) -> DepResult<&mut Vec<DepArc>> {
        let n = &mut self.nodes[node.0];
        let id = n.id;
        n.secondary_heads
            .as_mut()
            .ok_or(DepError::LayerUninitialized {
                layer: ArcLayer::Secondary,
                node: id,
            })
    }
}
