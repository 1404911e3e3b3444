use super::{DepArc, FeatureMap, SrlArc, TagMatch};

/// Id of the artificial root node.
pub const ROOT_ID: i32 = 0;
/// Id of a node that has not been given a position.
pub const NULL_ID: i32 = -1;
/// Form, lemma and tags of the artificial root node.
pub const ROOT_TAG: &str = "@#r$%";
/// Feature key holding the PropBank roleset id of a predicate.
pub const FEAT_ROLESET: &str = "pb";

/// Handle to a node inside its [`DepTree`](super::DepTree).
///
/// Handles are arena indices; they are only meaningful for the tree that
/// created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The artificial root is always the first node of a tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in its tree's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Linguistic attributes of a node.
///
/// These carry no structural meaning, so they are freely mutable through
/// [`DepTree::attrs_mut`](super::DepTree::attrs_mut).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeAttrs {
    pub form: Option<String>,
    pub lemma: Option<String>,
    pub pos_tag: Option<String>,
    pub named_entity_tag: Option<String>,
    pub feats: FeatureMap,
}

impl NodeAttrs {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: Some(form.into()),
            ..Self::default()
        }
    }

    /// Attributes of the artificial root.
    pub fn root() -> Self {
        Self {
            form: Some(ROOT_TAG.to_string()),
            lemma: Some(ROOT_TAG.to_string()),
            pos_tag: Some(ROOT_TAG.to_string()),
            named_entity_tag: Some(ROOT_TAG.to_string()),
            feats: FeatureMap::new(),
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    pub fn with_pos_tag(mut self, pos_tag: impl Into<String>) -> Self {
        self.pos_tag = Some(pos_tag.into());
        self
    }

    pub fn with_named_entity_tag(mut self, tag: impl Into<String>) -> Self {
        self.named_entity_tag = Some(tag.into());
        self
    }

    pub fn with_feats(mut self, feats: FeatureMap) -> Self {
        self.feats = feats;
        self
    }

    pub fn with_feat(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.feats.put(key, value);
        self
    }
}

/// A vertex of the dependency graph.
///
/// Structural fields are private: the head, dependents and sibling index are
/// only changed by the head-assignment operations on the owning tree, which
/// keep both ends of every link in agreement.
#[derive(Debug, Clone)]
pub struct DepNode {
    pub(crate) id: i32,
    pub(crate) attrs: NodeAttrs,
    pub(crate) label: Option<String>,
    pub(crate) head: Option<NodeId>,
    /// Sorted by `id`.
    pub(crate) dependents: Vec<NodeId>,
    /// Position among the head's dependents; stale while rootless.
    pub(crate) sibling_index: usize,
    pub(crate) secondary_heads: Option<Vec<DepArc>>,
    pub(crate) semantic_heads: Option<Vec<SrlArc>>,
}

impl DepNode {
    pub(crate) fn new(id: i32, attrs: NodeAttrs) -> Self {
        Self {
            id,
            attrs,
            label: None,
            head: None,
            dependents: Vec::new(),
            sibling_index: 0,
            secondary_heads: None,
            semantic_heads: None,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn attrs(&self) -> &NodeAttrs {
        &self.attrs
    }

    pub fn form(&self) -> Option<&str> {
        self.attrs.form.as_deref()
    }

    pub fn lemma(&self) -> Option<&str> {
        self.attrs.lemma.as_deref()
    }

    pub fn pos_tag(&self) -> Option<&str> {
        self.attrs.pos_tag.as_deref()
    }

    pub fn named_entity_tag(&self) -> Option<&str> {
        self.attrs.named_entity_tag.as_deref()
    }

    pub fn feats(&self) -> &FeatureMap {
        &self.attrs.feats
    }

    pub fn feat(&self, key: &str) -> Option<&str> {
        self.attrs.feats.get(key)
    }

    /// The dependency label towards the primary head.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn has_head(&self) -> bool {
        self.head.is_some()
    }

    /// Position of this node among its head's dependents, if attached.
    pub fn sibling_index(&self) -> Option<usize> {
        self.head.map(|_| self.sibling_index)
    }

    /// Dependents in ascending `id` order.
    pub fn dependents(&self) -> &[NodeId] {
        &self.dependents
    }

    pub fn dependent_count(&self) -> usize {
        self.dependents.len()
    }

    pub fn contains_dependent(&self, node: NodeId) -> bool {
        self.dependents.contains(&node)
    }

    pub fn is_dependent_of(&self, head: NodeId) -> bool {
        self.head == Some(head)
    }

    pub fn is_dependent_of_with_label(&self, head: NodeId, label: TagMatch<'_>) -> bool {
        self.is_dependent_of(head) && self.is_label(label)
    }

    pub fn is_form(&self, form: &str) -> bool {
        self.form() == Some(form)
    }

    pub fn is_lemma(&self, lemma: &str) -> bool {
        self.lemma() == Some(lemma)
    }

    pub fn is_pos_tag(&self, tag: TagMatch<'_>) -> bool {
        tag.matches(self.pos_tag())
    }

    pub fn is_named_entity_tag(&self, tag: TagMatch<'_>) -> bool {
        tag.matches(self.named_entity_tag())
    }

    pub fn is_label(&self, label: TagMatch<'_>) -> bool {
        label.matches(self.label())
    }

    /// The PropBank roleset id, present only on predicates.
    pub fn roleset_id(&self) -> Option<&str> {
        self.feat(FEAT_ROLESET)
    }

    /// True if this node carries a roleset id, i.e. heads semantic arcs.
    pub fn is_predicate(&self) -> bool {
        self.attrs.feats.contains(FEAT_ROLESET)
    }

    pub fn is_secondary_initialized(&self) -> bool {
        self.secondary_heads.is_some()
    }

    pub fn is_semantic_initialized(&self) -> bool {
        self.semantic_heads.is_some()
    }
}
