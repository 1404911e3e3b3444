//! The sentence arena and its three edge layers.
//!
//! A [`DepTree`] owns every node of one sentence. Nodes refer to each other by
//! [`NodeId`], so the primary tree, the secondary (DAG) overlay and the
//! semantic-role layer all live side by side over the same node set without
//! any ownership cycles.
//!
//! ```
//! use layered_dependency::{DepTree, NodeAttrs, NodeId};
//!
//! let mut tree = DepTree::new();
//! let john = tree.add_node(1, NodeAttrs::new("John").with_pos_tag("NNP"));
//! let runs = tree.add_node(2, NodeAttrs::new("runs").with_pos_tag("VBZ"));
//!
//! tree.set_head_with_label(runs, Some(NodeId::ROOT), "root");
//! tree.set_head_with_label(john, Some(runs), "nsubj");
//!
//! assert_eq!(tree.left_most_dependent(runs, 0), Some(john));
//! assert_eq!(tree[john].label(), Some("nsubj"));
//! ```

mod arc;
mod display;
mod feats;
mod head;
mod node;
mod query;
mod secondary;
mod semantic;
mod tag_match;
mod validate;

use std::ops::Index;

pub use arc::{DepArc, HeadArc, SrlArc};
pub use display::{render_feats, Column, ColumnLayout, ColumnStyle, DepTreeDisplay};
pub use feats::FeatureMap;
pub use node::{DepNode, NodeAttrs, NodeId, FEAT_ROLESET, NULL_ID, ROOT_ID, ROOT_TAG};
pub use tag_match::TagMatch;

/// All nodes of one sentence, rooted at an artificial root node.
#[derive(Debug, Clone)]
pub struct DepTree {
    nodes: Vec<DepNode>,
}

impl Default for DepTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DepTree {
    /// Create a tree holding only the artificial root ([`NodeId::ROOT`]).
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a tree with room for `words` nodes besides the root.
    pub fn with_capacity(words: usize) -> Self {
        let mut nodes = Vec::with_capacity(words + 1);
        nodes.push(DepNode::new(ROOT_ID, NodeAttrs::root()));
        Self { nodes }
    }

    /// Add a rootless node with the given sentence position.
    ///
    /// Ids must be unique within the tree; this is not re-validated.
    pub fn add_node(&mut self, id: i32, attrs: NodeAttrs) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(DepNode::new(id, attrs));
        node
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn get(&self, node: NodeId) -> Option<&DepNode> {
        self.nodes.get(node.0)
    }

    /// Handles of every node, root first, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Handles of every node except the root, in insertion order.
    pub fn word_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..self.nodes.len()).map(NodeId)
    }

    /// Find the node at sentence position `id`.
    pub fn find_by_id(&self, id: i32) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.id == id).map(NodeId)
    }

    /// Mutable access to the linguistic attributes of a node.
    pub fn attrs_mut(&mut self, node: NodeId) -> &mut NodeAttrs {
        &mut self.nodes[node.0].attrs
    }

    pub fn set_label(&mut self, node: NodeId, label: Option<String>) {
        self.nodes[node.0].label = label;
    }

    /// Basic fields of a node (id and attributes) without any links.
    pub fn detached_copy(&self, node: NodeId) -> (i32, NodeAttrs) {
        let node = &self.nodes[node.0];
        (node.id, node.attrs.clone())
    }

    pub(crate) fn id_of(&self, node: NodeId) -> i32 {
        self.nodes[node.0].id
    }

    fn node_mut(&mut self, node: NodeId) -> &mut DepNode {
        &mut self.nodes[node.0]
    }
}

impl Index<NodeId> for DepTree {
    type Output = DepNode;

    fn index(&self, node: NodeId) -> &DepNode {
        &self.nodes[node.0]
    }
}
