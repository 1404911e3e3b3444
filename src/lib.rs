#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Multi-layer dependency graphs for layered-nlp.
//!
//! A sentence is a [`DepTree`]: an arena of [`DepNode`]s with three edge
//! layers over the same nodes.
//!
//! - **Primary tree**: exactly one head per node, dependents kept sorted by
//!   sentence position. Set incrementally with [`DepTree::set_head`].
//! - **Secondary heads**: optional extra labeled heads making the tree a DAG.
//! - **Semantic heads**: optional predicate → argument arcs, independent of
//!   the syntax.
//!
//! Queries (nearest/leftmost/rightmost dependents, valency, subtrees,
//! argument candidates) read the maintained structure rather than rebuilding
//! it. [`WeightedGraph`] is the scored edge container used by tree search.
//!
//! ## Example
//!
//! ```
//! use layered_dependency::{ColumnLayout, DepTree, NodeAttrs, NodeId, TagMatch};
//!
//! let mut tree = DepTree::new();
//! let he = tree.add_node(1, NodeAttrs::new("He").with_pos_tag("PRP"));
//! let bought = tree.add_node(2, NodeAttrs::new("bought").with_pos_tag("VBD"));
//! let car = tree.add_node(3, NodeAttrs::new("car").with_pos_tag("NN"));
//!
//! tree.set_head_with_label(bought, Some(NodeId::ROOT), "root");
//! tree.set_head_with_label(he, Some(bought), "nsubj");
//! tree.set_head_with_label(car, Some(bought), "dobj");
//!
//! assert_eq!(tree.left_valency(bought), 1);
//! assert_eq!(tree.first_dependent_by_label(bought, TagMatch::Exact("dobj")), Some(car));
//!
//! tree.set_roleset_id(bought, "buy.01");
//! tree.init_semantic_heads(he);
//! tree.add_semantic_head(he, bought, "A0").unwrap();
//! assert!(tree.is_argument_of(he, bought, "A0".into()).unwrap());
//!
//! let rows = tree.display(ColumnLayout::Dep).to_string();
//! assert_eq!(rows.lines().count(), 3);
//! ```

mod dep_tree;
mod errors;
mod weighted_graph;

pub use dep_tree::{
    render_feats, Column, ColumnLayout, ColumnStyle, DepArc, DepNode, DepTree, DepTreeDisplay,
    FeatureMap, HeadArc, NodeAttrs, NodeId, SrlArc, TagMatch, FEAT_ROLESET, NULL_ID, ROOT_ID,
    ROOT_TAG,
};
pub use errors::{ArcLayer, DepError, DepResult};
pub use weighted_graph::{Edge, WeightedGraph};
