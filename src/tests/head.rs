//! Tests for primary head assignment.

use crate::{DepError, DepTree, NodeAttrs, NodeId};

fn words(tree: &mut DepTree, forms: &[&str]) -> Vec<NodeId> {
    forms
        .iter()
        .enumerate()
        .map(|(i, form)| tree.add_node(i as i32 + 1, NodeAttrs::new(*form)))
        .collect()
}

fn dependent_ids(tree: &DepTree, node: NodeId) -> Vec<i32> {
    tree[node].dependents().iter().map(|d| tree[*d].id()).collect()
}

#[test]
fn test_dependents_sorted_regardless_of_attach_order() {
    let mut tree = DepTree::new();
    let w = words(&mut tree, &["a", "b", "c", "d", "e"]);

    tree.add_dependent(w[2], w[4]);
    tree.add_dependent(w[2], w[0]);
    tree.add_dependent(w[2], w[3]);
    tree.add_dependent(w[2], w[1]);

    assert_eq!(dependent_ids(&tree, w[2]), vec![1, 2, 4, 5]);
    assert!(tree.validate().is_ok());
}

#[test]
fn test_sibling_index_tracks_insertions_and_removals() {
    let mut tree = DepTree::new();
    let w = words(&mut tree, &["a", "b", "c", "d", "e"]);

    tree.add_dependent(w[2], w[0]);
    tree.add_dependent(w[2], w[4]);
    assert_eq!(tree[w[4]].sibling_index(), Some(1));

    // Inserting between shifts everything to the right.
    tree.add_dependent(w[2], w[3]);
    assert_eq!(tree[w[0]].sibling_index(), Some(0));
    assert_eq!(tree[w[3]].sibling_index(), Some(1));
    assert_eq!(tree[w[4]].sibling_index(), Some(2));

    // Removing the first shifts everything back.
    tree.clear_head(w[0]);
    assert_eq!(tree[w[0]].sibling_index(), None);
    assert_eq!(tree[w[3]].sibling_index(), Some(0));
    assert_eq!(tree[w[4]].sibling_index(), Some(1));

    for dep in tree[w[2]].dependents() {
        let index = tree[*dep].sibling_index().unwrap();
        assert_eq!(tree[w[2]].dependents()[index], *dep);
    }
}

#[test]
fn test_reattaching_moves_between_heads() {
    let mut tree = DepTree::new();
    let w = words(&mut tree, &["a", "b", "c"]);

    tree.set_head_with_label(w[0], Some(w[1]), "amod");
    assert!(tree[w[1]].contains_dependent(w[0]));

    tree.set_head_with_label(w[0], Some(w[2]), "det");
    assert!(!tree[w[1]].contains_dependent(w[0]));
    assert!(tree[w[2]].contains_dependent(w[0]));
    assert_eq!(tree[w[0]].head(), Some(w[2]));
    assert_eq!(tree[w[0]].label(), Some("det"));
    assert!(tree.validate().is_ok());
}

#[test]
fn test_set_head_keeps_label() {
    let mut tree = DepTree::new();
    let w = words(&mut tree, &["a", "b"]);

    tree.set_head_with_label(w[0], Some(w[1]), "nsubj");
    tree.set_head(w[0], Some(NodeId::ROOT));
    assert_eq!(tree[w[0]].label(), Some("nsubj"));

    tree.clear_head(w[0]);
    assert_eq!(tree[w[0]].label(), None);
    assert!(!tree[w[0]].has_head());
}

#[test]
fn test_detaching_rootless_node_is_noop() {
    let mut tree = DepTree::new();
    let w = words(&mut tree, &["a", "b"]);
    tree.add_dependent(w[1], w[0]);

    tree.set_head(w[1], None);
    tree.set_head(w[1], None);

    assert!(!tree[w[1]].has_head());
    assert_eq!(tree[w[1]].dependents(), &[w[0]]);
    assert!(tree[NodeId::ROOT].dependents().is_empty());
}

#[test]
fn test_add_dependent_is_dependent_side_assignment() {
    let mut tree = DepTree::new();
    let w = words(&mut tree, &["a", "b"]);

    tree.add_dependent_with_label(w[1], w[0], "det");
    assert_eq!(tree[w[0]].head(), Some(w[1]));
    assert!(tree[w[0]].is_dependent_of_with_label(w[1], "det".into()));
    assert!(!tree[w[0]].is_dependent_of_with_label(w[1], "amod".into()));
}

#[test]
fn test_root_is_initialized() {
    let tree = DepTree::new();
    let root = &tree[tree.root()];

    assert_eq!(root.id(), crate::ROOT_ID);
    assert_eq!(root.form(), Some(crate::ROOT_TAG));
    assert_eq!(root.pos_tag(), Some(crate::ROOT_TAG));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_validate_reports_cycle() {
    let mut tree = DepTree::new();
    let w = words(&mut tree, &["a", "b"]);

    tree.add_dependent(w[0], w[1]);
    tree.add_dependent(w[1], w[0]);

    assert!(matches!(tree.validate(), Err(DepError::Cycle { .. })));
}

#[test]
fn test_traversals_terminate_on_cycle() {
    let mut tree = DepTree::new();
    let w = words(&mut tree, &["a", "b", "c"]);

    tree.add_dependent(w[0], w[1]);
    tree.add_dependent(w[1], w[2]);
    tree.add_dependent(w[2], w[0]);

    assert!(tree.sub_nodes(w[0]).len() <= tree.len());
    assert!(tree.descendants(w[0], usize::MAX).len() <= tree.len());
    assert!(tree.ancestors(w[0]).len() <= tree.len());
    assert!(tree.is_descendant_of(w[0], w[1]));
}

#[test]
fn test_detached_copy_drops_links() {
    let mut tree = DepTree::new();
    let w = words(&mut tree, &["a", "b"]);
    tree.attrs_mut(w[0]).lemma = Some("an".to_string());
    tree.attrs_mut(w[0]).feats.put("Definite", "Ind");
    tree.set_head_with_label(w[0], Some(w[1]), "det");

    let (id, attrs) = tree.detached_copy(w[0]);
    let mut other = DepTree::new();
    let copy = other.add_node(id, attrs);

    assert_eq!(other[copy].id(), 1);
    assert_eq!(other[copy].lemma(), Some("an"));
    assert_eq!(other[copy].feat("Definite"), Some("Ind"));
    assert!(!other[copy].has_head());
    assert_eq!(other[copy].label(), None);
}
