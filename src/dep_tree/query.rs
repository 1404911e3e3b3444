//! Positional and structural queries over the primary tree.
//!
//! Positional queries read the sorted dependents directly; nothing is
//! re-scanned or re-sorted. Recursive traversals assume the primary heads form
//! a tree. They carry a step budget equal to the arena size, so a cycle ends
//! the traversal early with a warning instead of looping forever.

use std::collections::HashSet;

use super::{DepTree, NodeId, TagMatch};
use crate::{DepError, DepResult};

impl DepTree {
    /// Head of the head, if both exist.
    pub fn grand_head(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].head.and_then(|h| self.nodes[h.0].head)
    }

    /// The dependent at `index` in `id` order.
    pub fn dependent(&self, node: NodeId, index: usize) -> DepResult<NodeId> {
        let n = &self.nodes[node.0];
        n.dependents
            .get(index)
            .copied()
            .ok_or(DepError::DependentOutOfRange {
                node: n.id,
                index,
                len: n.dependents.len(),
            })
    }

    /// Position of `dependent` among the dependents of `node`.
    pub fn dependent_index(&self, node: NodeId, dependent: NodeId) -> Option<usize> {
        self.nodes[node.0]
            .dependents
            .iter()
            .position(|d| *d == dependent)
    }

    /// The `order`-th sibling to the left (0 = adjacent).
    pub fn left_nearest_sibling(&self, node: NodeId, order: usize) -> Option<NodeId> {
        let n = &self.nodes[node.0];
        let head = n.head?;
        let index = n.sibling_index.checked_sub(order.checked_add(1)?)?;
        self.nodes[head.0].dependents.get(index).copied()
    }

    /// The `order`-th sibling to the right (0 = adjacent).
    pub fn right_nearest_sibling(&self, node: NodeId, order: usize) -> Option<NodeId> {
        let n = &self.nodes[node.0];
        let head = n.head?;
        self.nodes[head.0]
            .dependents
            .get(n.sibling_index.checked_add(order)?.checked_add(1)?)
            .copied()
    }

    /// The `order`-th dependent from the left end (0 = leftmost).
    ///
    /// Returns `None` unless that dependent lies left of `node`.
    pub fn left_most_dependent(&self, node: NodeId, order: usize) -> Option<NodeId> {
        let n = &self.nodes[node.0];
        let dep = *n.dependents.get(order)?;
        (self.nodes[dep.0].id < n.id).then(|| dep)
    }

    /// The `order`-th dependent from the right end (0 = rightmost).
    ///
    /// Returns `None` unless that dependent lies right of `node`.
    pub fn right_most_dependent(&self, node: NodeId, order: usize) -> Option<NodeId> {
        let n = &self.nodes[node.0];
        let index = n.dependents.len().checked_sub(order.checked_add(1)?)?;
        let dep = n.dependents[index];
        (self.nodes[dep.0].id > n.id).then(|| dep)
    }

    /// The `order`-th closest dependent on the left (0 = nearest).
    pub fn left_nearest_dependent(&self, node: NodeId, order: usize) -> Option<NodeId> {
        let split = self.insert_position(node, self.nodes[node.0].id);
        let index = split.checked_sub(order.checked_add(1)?)?;
        self.nodes[node.0].dependents.get(index).copied()
    }

    /// The `order`-th closest dependent on the right (0 = nearest).
    pub fn right_nearest_dependent(&self, node: NodeId, order: usize) -> Option<NodeId> {
        let split = self.insert_position(node, self.nodes[node.0].id);
        self.nodes[node.0].dependents.get(split.checked_add(order)?).copied()
    }

    pub fn first_dependent_by_label(&self, node: NodeId, label: TagMatch<'_>) -> Option<NodeId> {
        self.nodes[node.0]
            .dependents
            .iter()
            .copied()
            .find(|d| self.nodes[d.0].is_label(label))
    }

    pub fn contains_dependent_label(&self, node: NodeId, label: TagMatch<'_>) -> bool {
        self.first_dependent_by_label(node, label).is_some()
    }

    pub fn dependents_by_label(&self, node: NodeId, label: TagMatch<'_>) -> Vec<NodeId> {
        self.nodes[node.0]
            .dependents
            .iter()
            .copied()
            .filter(|d| self.nodes[d.0].is_label(label))
            .collect()
    }

    /// Dependents left of `node` whose label matches, in `id` order.
    pub fn left_dependents_by_label(&self, node: NodeId, label: TagMatch<'_>) -> Vec<NodeId> {
        let id = self.nodes[node.0].id;
        self.nodes[node.0]
            .dependents
            .iter()
            .copied()
            .take_while(|d| self.nodes[d.0].id <= id)
            .filter(|d| self.nodes[d.0].is_label(label))
            .collect()
    }

    /// Dependents right of `node` whose label matches, in `id` order.
    pub fn right_dependents_by_label(&self, node: NodeId, label: TagMatch<'_>) -> Vec<NodeId> {
        let id = self.nodes[node.0].id;
        self.nodes[node.0]
            .dependents
            .iter()
            .copied()
            .skip_while(|d| self.nodes[d.0].id < id)
            .filter(|d| self.nodes[d.0].is_label(label))
            .collect()
    }

    pub fn left_dependents(&self, node: NodeId) -> Vec<NodeId> {
        self.left_dependents_by_label(node, TagMatch::Any)
    }

    pub fn right_dependents(&self, node: NodeId) -> Vec<NodeId> {
        self.right_dependents_by_label(node, TagMatch::Any)
    }

    /// Number of dependents with an id below the node's own id.
    ///
    /// The split with [`right_valency`](Self::right_valency) is asymmetric:
    /// an id equal to the node's own counts on the right.
    pub fn left_valency(&self, node: NodeId) -> usize {
        let id = self.nodes[node.0].id;
        self.nodes[node.0]
            .dependents
            .iter()
            .take_while(|d| self.nodes[d.0].id < id)
            .count()
    }

    /// Number of dependents with an id at or above the node's own id.
    ///
    /// Uses `>=` rather than `>`: a dependent sharing the node's own id (only
    /// possible through a self attachment) is counted here, never in the left
    /// valency, so the two always sum to the dependent count.
    pub fn right_valency(&self, node: NodeId) -> usize {
        let id = self.nodes[node.0].id;
        self.nodes[node.0]
            .dependents
            .iter()
            .rev()
            .take_while(|d| self.nodes[d.0].id >= id)
            .count()
    }

    /// Dependents of dependents, grouped by dependent (not sorted).
    pub fn grand_dependents(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node.0]
            .dependents
            .iter()
            .flat_map(|d| self.nodes[d.0].dependents.iter().copied())
            .collect()
    }

    /// Descendants of `node` up to `height` levels down (not sorted).
    ///
    /// `height == 1` gives the dependents, `height == 0` nothing.
    pub fn descendants(&self, node: NodeId, height: usize) -> Vec<NodeId> {
        let mut out = Vec::new();
        if height > 0 {
            self.collect_descendants(node, height - 1, &mut out);
        }
        out
    }

    fn collect_descendants(&self, node: NodeId, height: usize, out: &mut Vec<NodeId>) -> bool {
        let deps = &self.nodes[node.0].dependents;
        out.extend_from_slice(deps);

        if out.len() >= self.nodes.len() {
            tracing::warn!(node = self.nodes[node.0].id, "cycle in primary heads, descendant walk cut short");
            return false;
        }

        if height > 0 {
            for &dep in deps {
                if !self.collect_descendants(dep, height - 1, out) {
                    return false;
                }
            }
        }

        true
    }

    /// First descendant in pre-order whose POS tag matches.
    pub fn any_descendant_by_pos_tag(&self, node: NodeId, tag: TagMatch<'_>) -> Option<NodeId> {
        self.sub_nodes(node)
            .into_iter()
            .skip(1)
            .find(|d| self.nodes[d.0].is_pos_tag(tag))
    }

    /// The subtree of `node`, itself included, in depth-first pre-order.
    pub fn sub_nodes(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            if out.len() == self.nodes.len() {
                tracing::warn!(node = self.nodes[node.0].id, "cycle in primary heads, subtree walk cut short");
                break;
            }
            out.push(current);
            stack.extend(self.nodes[current.0].dependents.iter().rev());
        }

        out
    }

    /// The subtree of `node`, itself included, sorted by `id`.
    pub fn sub_nodes_sorted(&self, node: NodeId) -> Vec<NodeId> {
        let mut nodes = self.sub_nodes(node);
        nodes.sort_by_key(|n| self.nodes[n.0].id);
        nodes
    }

    pub fn sub_node_set(&self, node: NodeId) -> HashSet<NodeId> {
        self.sub_nodes(node).into_iter().collect()
    }

    pub fn sub_node_id_set(&self, node: NodeId) -> HashSet<i32> {
        self.sub_nodes(node)
            .into_iter()
            .map(|n| self.nodes[n.0].id)
            .collect()
    }

    pub fn sub_node_ids_sorted(&self, node: NodeId) -> Vec<i32> {
        let mut ids: Vec<i32> = self
            .sub_nodes(node)
            .into_iter()
            .map(|n| self.nodes[n.0].id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Heads of `node` walking up to the root, nearest first.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.nodes[node.0].head;

        while let Some(head) = current {
            if out.len() == self.nodes.len() {
                tracing::warn!(node = self.nodes[node.0].id, "cycle in primary heads, ancestor walk cut short");
                break;
            }
            out.push(head);
            current = self.nodes[head.0].head;
        }

        out
    }

    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(node).contains(&ancestor)
    }

    /// True if both nodes are attached to the same head.
    pub fn is_sibling_of(&self, node: NodeId, other: NodeId) -> bool {
        match self.nodes[node.0].head {
            Some(head) => self.nodes[other.0].head == Some(head),
            None => false,
        }
    }
}
