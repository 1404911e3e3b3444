//! Round trips between the writer and the reader.

use layered_dependency::{ColumnLayout, ColumnStyle, DepTree, NodeAttrs, NodeId, SrlArc, TagMatch};

use crate::{ColumnReader, ColumnWriter, FormatConfig};

/// root -> A (nsubj) -> B (dobj) -> C (amod)
fn chain() -> DepTree {
    let mut tree = DepTree::new();
    let a = tree.add_node(1, NodeAttrs::new("A").with_lemma("a").with_pos_tag("NN"));
    let b = tree.add_node(
        2,
        NodeAttrs::new("B")
            .with_lemma("b")
            .with_pos_tag("VB")
            .with_named_entity_tag("O")
            .with_feat("pb", "b.01"),
    );
    let c = tree.add_node(3, NodeAttrs::new("C").with_pos_tag("JJ").with_feat("Degree", "Pos"));

    tree.set_head_with_label(a, Some(NodeId::ROOT), "nsubj");
    tree.set_head_with_label(b, Some(a), "dobj");
    tree.set_head_with_label(c, Some(b), "amod");

    for node in [a, b, c] {
        tree.init_secondary_heads(node);
        tree.init_semantic_heads(node);
    }
    tree.add_semantic_head(c, b, "A1").unwrap();
    tree.add_secondary_head(c, a, "ref").unwrap();
    tree
}

fn assert_same_tree(left: &DepTree, right: &DepTree) {
    assert_eq!(left.len(), right.len());
    for node in left.word_ids() {
        let id = left[node].id();
        let other = right.find_by_id(id).unwrap();

        assert_eq!(left[node].attrs(), right[other].attrs());
        assert_eq!(left[node].label(), right[other].label());
        assert_eq!(
            left[node].head().map(|h| left[h].id()),
            right[other].head().map(|h| right[h].id())
        );
    }
}

#[test]
fn test_full_layout_round_trip() {
    let config = FormatConfig::default();
    let writer = ColumnWriter::new(config.clone());
    let reader = ColumnReader::new(config);

    let tree = chain();
    let text = writer.write_sentence(&tree);
    let read = reader.read_sentence(&text).unwrap();

    assert_same_tree(&tree, &read);
    assert_eq!(writer.write_sentence(&read), text);

    let b = read.find_by_id(2).unwrap();
    let c = read.find_by_id(3).unwrap();
    assert!(read.is_argument_of(c, b, TagMatch::Exact("A1")).unwrap());
    assert!(read.validate().is_ok());
}

#[test]
fn test_write_sentences_snapshot() {
    let writer = ColumnWriter::new(FormatConfig::new(ColumnLayout::Srl));
    let mut second = DepTree::new();
    let hi = second.add_node(1, NodeAttrs::new("Hi").with_pos_tag("UH"));
    second.set_head_with_label(hi, Some(NodeId::ROOT), "root");

    insta::assert_snapshot!(writer.write_sentences(&[chain(), second]), @r###"
    1	A	a	NN	_	0	nsubj	_
    2	B	b	VB	pb=b.01	1	dobj	_
    3	C	_	JJ	Degree=Pos	2	amod	2:A1

    1	Hi	_	UH	_	0	root	_
    "###);
}

#[test]
fn test_custom_style_round_trip() {
    let style = ColumnStyle::default()
        .with_column(" ")
        .with_blank("-")
        .with_arcs(",", "/")
        .with_feats(";", ":");
    let config = FormatConfig::new(ColumnLayout::Full).with_style(style);
    config.validate().unwrap();

    let writer = ColumnWriter::new(config.clone());
    let text = writer.write_sentence(&chain());
    assert!(text.contains("3 C - JJ - Degree:Pos 2 amod 1/ref 2/A1"));

    let read = ColumnReader::new(config).read_sentence(&text).unwrap();
    assert_same_tree(&chain(), &read);
}

#[test]
fn test_many_sentences_round_trip() {
    let config = FormatConfig::default();
    let writer = ColumnWriter::new(config.clone());
    let trees = vec![chain(), chain()];

    let text = writer.write_sentences(&trees);
    let read = ColumnReader::new(config).read_sentences(&text).unwrap();

    assert_eq!(read.len(), 2);
    for (left, right) in trees.iter().zip(&read) {
        assert_same_tree(left, right);
    }
    let a = read[1].find_by_id(1).unwrap();
    let c = read[1].find_by_id(3).unwrap();
    assert_eq!(read[1].secondary_heads(c).unwrap().len(), 1);
    assert!(read[1].secondary_heads(a).unwrap().is_empty());
}

#[test]
fn test_semantic_argument_lookup_after_read() {
    let reader = ColumnReader::new(FormatConfig::new(ColumnLayout::Srl));
    let tree = reader
        .read_sentence(
            "1\tJohn\t_\tNNP\t_\t2\tnsubj\t2:A0\n\
             2\tsold\tsell\tVBD\tpb=sell.01\t0\troot\t_\n\
             3\tcars\tcar\tNNS\t_\t2\tdobj\t2:A1",
        )
        .unwrap();

    let sold = tree.find_by_id(2).unwrap();
    let cars = tree.find_by_id(3).unwrap();
    assert!(tree[sold].is_predicate());
    assert_eq!(
        tree.semantic_heads(cars).unwrap(),
        &[SrlArc::new(sold, "A1")]
    );
    assert!(tree.argument_candidates(sold, 1, false).contains(&cars));
}

#[test]
fn test_hash_token_round_trip_without_ids() {
    for layout in [ColumnLayout::Pos, ColumnLayout::Morph] {
        let mut tree = DepTree::new();
        tree.add_node(1, NodeAttrs::new("#").with_lemma("#").with_pos_tag("#"));
        tree.add_node(2, NodeAttrs::new("5").with_lemma("5").with_pos_tag("CD"));

        let config = FormatConfig::new(layout);
        let writer = ColumnWriter::new(config.clone());
        let text = writer.write_sentence(&tree);
        let read = ColumnReader::new(config).read_sentence(&text).unwrap();

        assert_eq!(read.len(), tree.len());
        assert_eq!(read[read.find_by_id(1).unwrap()].form(), Some("#"));
        assert_eq!(writer.write_sentence(&read), text);
    }
}

#[test]
fn test_form_equal_to_blank_token() {
    let mut tree = DepTree::new();
    tree.add_node(1, NodeAttrs::new("_").with_pos_tag("SYM"));

    let config = FormatConfig::new(ColumnLayout::Pos);
    let text = ColumnWriter::new(config.clone()).write_sentence(&tree);
    let read = ColumnReader::new(config).read_sentence(&text).unwrap();
    assert_eq!(read[read.find_by_id(1).unwrap()].form(), None);

    let config = FormatConfig::new(ColumnLayout::Pos)
        .with_style(ColumnStyle::default().with_blank("<none>"));
    let text = ColumnWriter::new(config.clone()).write_sentence(&tree);
    let read = ColumnReader::new(config).read_sentence(&text).unwrap();
    assert_eq!(read[read.find_by_id(1).unwrap()].form(), Some("_"));
}
