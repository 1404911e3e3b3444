//! Primary head assignment.
//!
//! The dependent's head pointer is the authority for every primary link:
//! attaching always goes through [`DepTree::set_head`], which detaches from the
//! old head and attaches to the new one in a single call, so the head's
//! dependents and the dependent's head never disagree between calls.

use super::{DepTree, NodeId};

impl DepTree {
    /// Attach `node` to `head`, or make it rootless when `head` is `None`.
    ///
    /// The label is left untouched.
    pub fn set_head(&mut self, node: NodeId, head: Option<NodeId>) {
        if let Some(old_head) = self.nodes[node.0].head.take() {
            self.detach(old_head, node);
        }

        if let Some(new_head) = head {
            self.attach(new_head, node);
        }

        tracing::trace!(
            node = self.id_of(node),
            head = ?head.map(|h| self.id_of(h)),
            "set head"
        );
    }

    /// Attach `node` to `head` and set its label in one step.
    pub fn set_head_with_label(
        &mut self,
        node: NodeId,
        head: Option<NodeId>,
        label: impl Into<String>,
    ) {
        self.set_head(node, head);
        self.node_mut(node).label = Some(label.into());
    }

    /// Make `node` rootless and drop its label.
    pub fn clear_head(&mut self, node: NodeId) {
        self.set_head(node, None);
        self.node_mut(node).label = None;
    }

    /// Same as `set_head(dependent, Some(head))`.
    pub fn add_dependent(&mut self, head: NodeId, dependent: NodeId) {
        self.set_head(dependent, Some(head));
    }

    /// Same as `set_head_with_label(dependent, Some(head), label)`.
    pub fn add_dependent_with_label(
        &mut self,
        head: NodeId,
        dependent: NodeId,
        label: impl Into<String>,
    ) {
        self.set_head_with_label(dependent, Some(head), label);
    }

    /// Slot in `head`'s dependents where a node with `id` belongs.
    pub(crate) fn insert_position(&self, head: NodeId, id: i32) -> usize {
        self.nodes[head.0]
            .dependents
            .partition_point(|d| self.nodes[d.0].id < id)
    }

    fn attach(&mut self, head: NodeId, node: NodeId) {
        let id = self.id_of(node);
        let pos = self.insert_position(head, id);
        self.nodes[head.0].dependents.insert(pos, node);
        self.nodes[node.0].head = Some(head);
        self.reindex_siblings(head, pos);
    }

    fn detach(&mut self, head: NodeId, node: NodeId) {
        let id = self.id_of(node);
        let found = self.nodes[head.0]
            .dependents
            .binary_search_by_key(&id, |d| self.nodes[d.0].id);

        match found {
            Ok(pos) => {
                self.nodes[head.0].dependents.remove(pos);
                self.reindex_siblings(head, pos);
            }
            Err(_) => {
                tracing::warn!(
                    node = id,
                    head = self.id_of(head),
                    "node was not among its head's dependents"
                );
            }
        }
    }

    /// Rewrite `sibling_index` for every dependent of `head` from `from` on.
    fn reindex_siblings(&mut self, head: NodeId, from: usize) {
        for i in from..self.nodes[head.0].dependents.len() {
            let dep = self.nodes[head.0].dependents[i];
            self.nodes[dep.0].sibling_index = i;
        }
    }
}
