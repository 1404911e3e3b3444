//! Column-format reader.
//!
//! Rows are read in two passes: every row first becomes a node, then heads and
//! arcs are attached by id, so a row may point at a row that comes after it.

use std::collections::HashMap;

use layered_dependency::{
    Column, ColumnStyle, DepArc, DepTree, FeatureMap, NodeAttrs, NodeId, SrlArc, ROOT_ID,
};

use crate::{FormatConfig, FormatError, FormatResult};

/// Reads sentences written in a [`FormatConfig`]'s layout.
#[derive(Debug, Clone, Default)]
pub struct ColumnReader {
    config: FormatConfig,
}

/// The link columns of one row, held until every node exists.
struct PendingLinks<'t> {
    line: usize,
    node: NodeId,
    head: Option<&'t str>,
    label: Option<&'t str>,
    secondary: Option<&'t str>,
    semantic: Option<&'t str>,
}

impl ColumnReader {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Read one sentence. Blank lines are skipped, and so are `#` comment
    /// lines in layouts with an id column.
    ///
    /// Layouts without an id column start with the form, so a `#` line there
    /// is the `#` token.
    pub fn read_sentence(&self, text: &str) -> FormatResult<DepTree> {
        let rows: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !self.is_skipped(line))
            .collect();
        self.read_rows(&rows)
    }

    /// Read every sentence; sentences are separated by blank lines.
    pub fn read_sentences(&self, text: &str) -> FormatResult<Vec<DepTree>> {
        let mut sentences = Vec::new();
        let mut rows = Vec::new();

        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                if !rows.is_empty() {
                    sentences.push(self.read_rows(&rows)?);
                    rows.clear();
                }
            } else if !self.is_skipped(line) {
                rows.push((i + 1, line));
            }
        }

        if !rows.is_empty() {
            sentences.push(self.read_rows(&rows)?);
        }

        Ok(sentences)
    }

    fn is_skipped(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }
        self.config.layout.has(Column::Id) && line.trim_start().starts_with('#')
    }

    fn read_rows(&self, rows: &[(usize, &str)]) -> FormatResult<DepTree> {
        let style = &self.config.style;
        let columns = self.config.layout.columns();

        let mut tree = DepTree::with_capacity(rows.len());
        let mut by_id: HashMap<i32, NodeId> = HashMap::new();
        by_id.insert(ROOT_ID, tree.root());
        let mut pending = Vec::with_capacity(rows.len());

        for (position, &(line, row)) in rows.iter().enumerate() {
            let cells: Vec<&str> = row.trim_end_matches('\r').split(style.column.as_str()).collect();
            if cells.len() < columns.len() {
                return Err(FormatError::MissingColumns {
                    line,
                    expected: columns.len(),
                    found: cells.len(),
                });
            }

            let mut id = position as i32 + 1;
            let mut attrs = NodeAttrs::default();
            let mut links = (None, None, None, None);

            for (column, &cell) in columns.iter().zip(&cells) {
                let value = non_blank(cell, style);
                match column {
                    Column::Id => {
                        id = cell.trim().parse().map_err(|_| FormatError::InvalidId {
                            line,
                            value: cell.to_string(),
                        })?;
                    }
                    Column::Form => attrs.form = value.map(String::from),
                    Column::Lemma => attrs.lemma = value.map(String::from),
                    Column::PosTag => attrs.pos_tag = value.map(String::from),
                    Column::NamedEntityTag => attrs.named_entity_tag = value.map(String::from),
                    Column::Feats => attrs.feats = parse_feats(value, style, line)?,
                    Column::Head => links.0 = value,
                    Column::Label => links.1 = value,
                    Column::SecondaryHeads => links.2 = Some(cell),
                    Column::SemanticHeads => links.3 = Some(cell),
                    Column::Unused => {}
                }
            }

            if by_id.contains_key(&id) {
                return Err(FormatError::DuplicateId { line, id });
            }
            let node = tree.add_node(id, attrs);
            by_id.insert(id, node);

            pending.push(PendingLinks {
                line,
                node,
                head: links.0,
                label: links.1,
                secondary: links.2,
                semantic: links.3,
            });
        }

        for links in pending {
            self.attach(&mut tree, &by_id, links)?;
        }

        tracing::debug!(nodes = tree.len() - 1, layout = ?self.config.layout, "read sentence");
        Ok(tree)
    }

    fn attach(
        &self,
        tree: &mut DepTree,
        by_id: &HashMap<i32, NodeId>,
        links: PendingLinks<'_>,
    ) -> FormatResult<()> {
        let style = &self.config.style;
        let line = links.line;

        if let Some(head) = links.head {
            let head = lookup(head, by_id, line)?;
            match links.label {
                Some(label) => tree.set_head_with_label(links.node, Some(head), label),
                None => tree.set_head(links.node, Some(head)),
            }
        }

        if let Some(cell) = links.secondary {
            tree.init_secondary_heads(links.node);
            for (head, label) in parse_arcs(cell, style, by_id, line)? {
                tree.add_secondary_arc(links.node, DepArc::new(head, label))?;
            }
        }

        if let Some(cell) = links.semantic {
            tree.init_semantic_heads(links.node);
            let arcs = parse_arcs(cell, style, by_id, line)?
                .into_iter()
                .map(|(head, label)| SrlArc::new(head, label));
            tree.add_semantic_arcs(links.node, arcs)?;
        }

        Ok(())
    }
}

fn non_blank<'t>(cell: &'t str, style: &ColumnStyle) -> Option<&'t str> {
    if cell == style.blank {
        None
    } else {
        Some(cell)
    }
}

fn lookup(value: &str, by_id: &HashMap<i32, NodeId>, line: usize) -> FormatResult<NodeId> {
    let id: i32 = value.trim().parse().map_err(|_| FormatError::InvalidId {
        line,
        value: value.to_string(),
    })?;
    by_id
        .get(&id)
        .copied()
        .ok_or(FormatError::UnknownHead { line, head: id })
}

fn parse_feats(value: Option<&str>, style: &ColumnStyle, line: usize) -> FormatResult<FeatureMap> {
    let mut feats = FeatureMap::new();
    let value = match value {
        Some(value) => value,
        None => return Ok(feats),
    };

    for pair in value.split(style.feats.as_str()) {
        let (key, val) = pair
            .split_once(style.feat_value.as_str())
            .ok_or_else(|| FormatError::MalformedFeature {
                line,
                value: pair.to_string(),
            })?;
        feats.put(key, val);
    }

    Ok(feats)
}

fn parse_arcs<'t>(
    cell: &'t str,
    style: &ColumnStyle,
    by_id: &HashMap<i32, NodeId>,
    line: usize,
) -> FormatResult<Vec<(NodeId, &'t str)>> {
    if cell == style.blank {
        return Ok(Vec::new());
    }

    cell.split(style.arcs.as_str())
        .map(|arc| -> FormatResult<(NodeId, &'t str)> {
            let (head, label) = arc
                .split_once(style.arc_label.as_str())
                .filter(|(head, label)| head.trim().parse::<i32>().is_ok() && !label.is_empty())
                .ok_or_else(|| FormatError::MalformedArc {
                    line,
                    value: arc.to_string(),
                })?;
            Ok((lookup(head, by_id, line)?, label))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_dependency::{ColumnLayout, TagMatch};

    fn full_reader() -> ColumnReader {
        ColumnReader::new(FormatConfig::default())
    }

    #[test]
    fn test_read_full_layout() {
        let text = "1\tHe\the\tPRP\t_\t_\t2\tnsubj\t_\t2:A0\n\
                    2\tbought\tbuy\tVBD\t_\tpb=buy.01\t0\troot\t_\t_\n\
                    3\tcars\tcar\tNNS\t_\tNumber=Plur\t2\tdobj\t1:ref;2:x\t2:A1";
        let tree = full_reader().read_sentence(text).unwrap();

        let he = tree.find_by_id(1).unwrap();
        let bought = tree.find_by_id(2).unwrap();
        let cars = tree.find_by_id(3).unwrap();

        assert_eq!(tree[bought].head(), Some(tree.root()));
        assert_eq!(tree[bought].roleset_id(), Some("buy.01"));
        assert_eq!(tree[he].named_entity_tag(), None);
        assert_eq!(tree[cars].feat("Number"), Some("Plur"));
        assert_eq!(tree.left_most_dependent(bought, 0), Some(he));
        assert_eq!(tree.semantic_label(he, bought).unwrap(), Some("A0"));
        assert!(tree.semantic_heads(bought).unwrap().is_empty());
        assert_eq!(
            tree.secondary_heads(cars).unwrap(),
            &[DepArc::new(he, "ref"), DepArc::new(bought, "x")]
        );
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_heads_may_point_forward() {
        let reader = ColumnReader::new(FormatConfig::new(ColumnLayout::Dep));
        let tree = reader
            .read_sentence("1\tthe\t_\tDT\t_\t2\tdet\n2\tdog\t_\tNN\t_\t0\troot")
            .unwrap();

        let dog = tree.find_by_id(2).unwrap();
        assert_eq!(tree.dependents_by_label(dog, TagMatch::Exact("det")).len(), 1);
        // Layouts without arc columns leave the layers uninitialized.
        assert!(!tree[dog].is_secondary_initialized());
    }

    #[test]
    fn test_blank_head_leaves_node_rootless() {
        let reader = ColumnReader::new(FormatConfig::new(ColumnLayout::Dep));
        let tree = reader.read_sentence("1\tHi\t_\tUH\t_\t_\t_").unwrap();
        let hi = tree.find_by_id(1).unwrap();

        assert!(!tree[hi].has_head());
        assert_eq!(tree[hi].label(), None);
        assert_eq!(tree[hi].lemma(), None);
    }

    #[test]
    fn test_pos_layout_numbers_rows() {
        let reader = ColumnReader::new(FormatConfig::new(ColumnLayout::Pos));
        let tree = reader
            .read_sentence("The\tDT\t_\ndog\tNN\t_\n")
            .unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree[tree.find_by_id(2).unwrap()].form(), Some("dog"));
    }

    #[test]
    fn test_comments_only_in_layouts_with_ids() {
        let reader = ColumnReader::new(FormatConfig::new(ColumnLayout::Dep));
        let tree = reader
            .read_sentence("# sent_id = 1\n1\tdog\t_\tNN\t_\t0\troot")
            .unwrap();
        assert_eq!(tree.len(), 2);

        let reader = ColumnReader::new(FormatConfig::new(ColumnLayout::Pos));
        let tree = reader.read_sentence("#\t#\t_\n5\tCD\t_").unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree[tree.find_by_id(1).unwrap()].form(), Some("#"));
        assert_eq!(tree[tree.find_by_id(2).unwrap()].form(), Some("5"));
    }

    #[test]
    fn test_read_sentences_splits_on_blank_lines() {
        let reader = ColumnReader::new(FormatConfig::new(ColumnLayout::Pos));
        let trees = reader
            .read_sentences("A\tDT\t_\nB\tNN\t_\n\n\nC\tVB\t_\n\n")
            .unwrap();

        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].len(), 3);
        assert_eq!(trees[1].len(), 2);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let reader = ColumnReader::new(FormatConfig::new(ColumnLayout::Dep));

        let err = reader.read_sentences("1\ta\t_\tDT\t_\t0\troot\n\n1\tb\t_").unwrap_err();
        assert!(matches!(
            err,
            FormatError::MissingColumns {
                line: 3,
                expected: 7,
                found: 3
            }
        ));

        let err = reader.read_sentence("x\ta\t_\tDT\t_\t0\troot").unwrap_err();
        assert!(matches!(err, FormatError::InvalidId { line: 1, .. }));

        let err = reader
            .read_sentence("1\ta\t_\tDT\t_\t0\troot\n1\tb\t_\tNN\t_\t1\tdep")
            .unwrap_err();
        assert!(matches!(err, FormatError::DuplicateId { line: 2, id: 1 }));

        let err = reader.read_sentence("1\ta\t_\tDT\t_\t7\troot").unwrap_err();
        assert!(matches!(err, FormatError::UnknownHead { line: 1, head: 7 }));

        let err = reader.read_sentence("1\ta\t_\tDT\tbroken\t0\troot").unwrap_err();
        assert!(matches!(err, FormatError::MalformedFeature { line: 1, .. }));
    }

    #[test]
    fn test_malformed_arcs() {
        let reader = ColumnReader::new(FormatConfig::new(ColumnLayout::Srl));

        let err = reader.read_sentence("1\ta\t_\tDT\t_\t0\troot\tA0").unwrap_err();
        assert!(matches!(err, FormatError::MalformedArc { .. }));

        let err = reader.read_sentence("1\ta\t_\tDT\t_\t0\troot\t3:A0").unwrap_err();
        assert!(matches!(err, FormatError::UnknownHead { head: 3, .. }));
    }
}
