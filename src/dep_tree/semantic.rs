//! Semantic role layer: predicate → argument arcs.
//!
//! Arcs are stored on the argument and point at the predicate. A predicate is
//! marked by a roleset id kept in its feature map under [`FEAT_ROLESET`].
//! The arc list must be initialized with [`DepTree::init_semantic_heads`]
//! before use.

use std::collections::HashSet;

use super::{DepTree, HeadArc, NodeId, SrlArc, TagMatch, FEAT_ROLESET};
use crate::{ArcLayer, DepError, DepResult};

impl DepTree {
    /// Mark `node` as a predicate, returning the roleset id it replaced.
    pub fn set_roleset_id(&mut self, node: NodeId, roleset_id: impl Into<String>) -> Option<String> {
        self.attrs_mut(node).feats.put(FEAT_ROLESET, roleset_id)
    }

    pub fn clear_roleset_id(&mut self, node: NodeId) -> Option<String> {
        self.attrs_mut(node).feats.remove(FEAT_ROLESET)
    }

    /// Start (or restart) an empty semantic head list on `node`.
    pub fn init_semantic_heads(&mut self, node: NodeId) {
        self.node_mut(node).semantic_heads = Some(Vec::new());
    }

    /// Replace the semantic heads of `node`, initializing the layer.
    pub fn set_semantic_heads(&mut self, node: NodeId, arcs: Vec<SrlArc>) {
        self.node_mut(node).semantic_heads = Some(arcs);
    }

    pub fn add_semantic_head(
        &mut self,
        node: NodeId,
        predicate: NodeId,
        label: impl Into<String>,
    ) -> DepResult<()> {
        self.add_semantic_arcs(node, Some(SrlArc::new(predicate, label)))
    }

    pub fn add_semantic_arcs(
        &mut self,
        node: NodeId,
        arcs: impl IntoIterator<Item = SrlArc>,
    ) -> DepResult<()> {
        self.semantic_mut(node)?.extend(arcs);
        Ok(())
    }

    /// All semantic arcs of `node`, in insertion order.
    pub fn semantic_heads(&self, node: NodeId) -> DepResult<&[SrlArc]> {
        let n = &self.nodes[node.0];
        n.semantic_heads
            .as_deref()
            .ok_or(DepError::LayerUninitialized {
                layer: ArcLayer::Semantic,
                node: n.id,
            })
    }

    pub fn semantic_heads_by_label(
        &self,
        node: NodeId,
        label: TagMatch<'_>,
    ) -> DepResult<Vec<&SrlArc>> {
        Ok(self
            .semantic_heads(node)?
            .iter()
            .filter(|arc| arc.is_label(label))
            .collect())
    }

    /// Predicates of `node` whose role label matches.
    pub fn semantic_head_set(&self, node: NodeId, label: TagMatch<'_>) -> DepResult<HashSet<NodeId>> {
        Ok(self
            .semantic_heads(node)?
            .iter()
            .filter(|arc| arc.is_label(label))
            .map(|arc| arc.head)
            .collect())
    }

    /// The first arc of `node` pointing at `predicate` with a matching label.
    pub fn semantic_head_arc(
        &self,
        node: NodeId,
        predicate: NodeId,
        label: TagMatch<'_>,
    ) -> DepResult<Option<&SrlArc>> {
        Ok(self
            .semantic_heads(node)?
            .iter()
            .find(|arc| arc.is_head(predicate) && arc.is_label(label)))
    }

    /// The role `node` plays for `predicate`.
    pub fn semantic_label(&self, node: NodeId, predicate: NodeId) -> DepResult<Option<&str>> {
        Ok(self
            .semantic_head_arc(node, predicate, TagMatch::Any)?
            .map(|arc| arc.label.as_str()))
    }

    /// The first predicate of `node` whose role label matches.
    pub fn first_semantic_head(&self, node: NodeId, label: TagMatch<'_>) -> DepResult<Option<NodeId>> {
        Ok(self
            .semantic_heads(node)?
            .iter()
            .find(|arc| arc.is_label(label))
            .map(|arc| arc.head))
    }

    /// True if `node` is an argument of `predicate` with a matching role.
    pub fn is_argument_of(
        &self,
        node: NodeId,
        predicate: NodeId,
        label: TagMatch<'_>,
    ) -> DepResult<bool> {
        Ok(self.semantic_head_arc(node, predicate, label)?.is_some())
    }

    /// True if `node` is an argument of any predicate with a matching role.
    pub fn is_argument_of_label(&self, node: NodeId, label: TagMatch<'_>) -> DepResult<bool> {
        Ok(self.first_semantic_head(node, label)?.is_some())
    }

    /// Remove the first arc pointing at `predicate`. Returns whether one was removed.
    pub fn remove_semantic_head(&mut self, node: NodeId, predicate: NodeId) -> DepResult<bool> {
        let arcs = self.semantic_mut(node)?;
        match arcs.iter().position(|arc| arc.is_head(predicate)) {
            Some(pos) => {
                arcs.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the first arc equal to `arc`. Returns whether one was removed.
    pub fn remove_semantic_arc(&mut self, node: NodeId, arc: &SrlArc) -> DepResult<bool> {
        let arcs = self.semantic_mut(node)?;
        match arcs.iter().position(|a| a == arc) {
            Some(pos) => {
                arcs.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every arc equal to any of `remove`.
    pub fn remove_semantic_arcs(&mut self, node: NodeId, remove: &[SrlArc]) -> DepResult<()> {
        self.semantic_mut(node)?.retain(|arc| !remove.contains(arc));
        Ok(())
    }

    /// Remove every arc whose role label matches.
    pub fn remove_semantic_heads_by_label(&mut self, node: NodeId, label: TagMatch<'_>) -> DepResult<()> {
        self.semantic_mut(node)?.retain(|arc| !arc.is_label(label));
        Ok(())
    }

    pub fn clear_semantic_heads(&mut self, node: NodeId) -> DepResult<()> {
        self.semantic_mut(node)?.clear();
        Ok(())
    }

    /// Candidate arguments of a predicate at `node`.
    ///
    /// The union of the descendants of `node` down to `depth` levels and, for
    /// every ancestor up to the root, the ancestor and its dependents.
    pub fn argument_candidates(&self, node: NodeId, depth: usize, include_self: bool) -> HashSet<NodeId> {
        let mut set: HashSet<NodeId> = self.descendants(node, depth).into_iter().collect();

        for head in self.ancestors(node) {
            set.insert(head);
            set.extend(self.nodes[head.0].dependents.iter().copied());
        }

        if include_self {
            set.insert(node);
        } else {
            set.remove(&node);
        }

        set
    }

    fn semantic_mut(&mut self, node: NodeId) -> DepResult<&mut Vec<SrlArc>> {
        let n = &mut self.nodes[node.0];
        let id = n.id;
        n.semantic_heads
            .as_mut()
            .ok_or(DepError::LayerUninitialized {
                layer: ArcLayer::Semantic,
                node: id,
            })
    }
}
