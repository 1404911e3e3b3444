//! Column rendering of nodes and sentences.
//!
//! One node renders to one row of delimited columns. The set and order of
//! columns is a [`ColumnLayout`]; the delimiters and blank token are a
//! [`ColumnStyle`]. Arc lists are sorted by head id before rendering so the
//! output does not depend on the order arcs were added.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use super::{DepTree, FeatureMap, HeadArc, NodeId};

/// A single column of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Form,
    Lemma,
    PosTag,
    NamedEntityTag,
    Feats,
    Head,
    Label,
    SecondaryHeads,
    SemanticHeads,
    /// Always blank (e.g. the projective head columns of CoNLL-X).
    Unused,
}

/// Which columns a row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnLayout {
    /// form, pos, feats
    Pos,
    /// form, lemma, pos, feats
    Morph,
    /// id, form, lemma, pos, feats, head, label
    Dep,
    /// `Dep` plus secondary heads
    Dag,
    /// `Dep` plus semantic heads
    Srl,
    /// The ten CoNLL-X columns
    ConllX,
    /// id, form, lemma, pos, ne, feats, head, label, secondary, semantic
    Full,
}

impl ColumnLayout {
    pub fn columns(self) -> &'static [Column] {
        use Column::*;
        match self {
            ColumnLayout::Pos => &[Form, PosTag, Feats],
            ColumnLayout::Morph => &[Form, Lemma, PosTag, Feats],
            ColumnLayout::Dep => &[Id, Form, Lemma, PosTag, Feats, Head, Label],
            ColumnLayout::Dag => &[Id, Form, Lemma, PosTag, Feats, Head, Label, SecondaryHeads],
            ColumnLayout::Srl => &[Id, Form, Lemma, PosTag, Feats, Head, Label, SemanticHeads],
            ColumnLayout::ConllX => &[
                Id, Form, Lemma, PosTag, PosTag, Feats, Head, Label, Unused, Unused,
            ],
            ColumnLayout::Full => &[
                Id,
                Form,
                Lemma,
                PosTag,
                NamedEntityTag,
                Feats,
                Head,
                Label,
                SecondaryHeads,
                SemanticHeads,
            ],
        }
    }

    pub fn has(self, column: Column) -> bool {
        self.columns().contains(&column)
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        ColumnLayout::Full
    }
}

/// Delimiters and the blank token used in rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnStyle {
    /// Between columns.
    pub column: String,
    /// Stands in for an absent value.
    ///
    /// A present value equal to the blank token renders the same as an
    /// absent one and reads back as absent. Corpora with literal `_` tokens
    /// need a different blank token.
    pub blank: String,
    /// Between arcs in an arc list.
    pub arcs: String,
    /// Between the head id and the label of an arc.
    pub arc_label: String,
    /// Between features.
    pub feats: String,
    /// Between a feature key and its value.
    pub feat_value: String,
}

impl Default for ColumnStyle {
    fn default() -> Self {
        Self {
            column: "\t".to_string(),
            blank: "_".to_string(),
            arcs: ";".to_string(),
            arc_label: ":".to_string(),
            feats: "|".to_string(),
            feat_value: "=".to_string(),
        }
    }
}

impl ColumnStyle {
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn with_blank(mut self, blank: impl Into<String>) -> Self {
        self.blank = blank.into();
        self
    }

    pub fn with_arcs(mut self, arcs: impl Into<String>, arc_label: impl Into<String>) -> Self {
        self.arcs = arcs.into();
        self.arc_label = arc_label.into();
        self
    }

    pub fn with_feats(mut self, feats: impl Into<String>, feat_value: impl Into<String>) -> Self {
        self.feats = feats.into();
        self.feat_value = feat_value.into();
        self
    }
}

impl DepTree {
    /// Render one node as a single row.
    pub fn render_node(&self, node: NodeId, layout: ColumnLayout, style: &ColumnStyle) -> String {
        self.render_cells(node, layout, style).join(&style.column)
    }

    /// Render one node as its list of cells.
    pub fn render_cells(&self, node: NodeId, layout: ColumnLayout, style: &ColumnStyle) -> Vec<String> {
        let n = &self.nodes[node.0];
        let text = |value: Option<&str>| value.unwrap_or(&style.blank).to_string();

        layout
            .columns()
            .iter()
            .map(|column| match column {
                Column::Id => n.id.to_string(),
                Column::Form => text(n.form()),
                Column::Lemma => text(n.lemma()),
                Column::PosTag => text(n.pos_tag()),
                Column::NamedEntityTag => text(n.named_entity_tag()),
                Column::Feats => render_feats(n.feats(), style),
                Column::Head => match n.head {
                    Some(head) => self.nodes[head.0].id.to_string(),
                    None => style.blank.clone(),
                },
                Column::Label => match n.head {
                    Some(_) => text(n.label()),
                    None => style.blank.clone(),
                },
                Column::SecondaryHeads => self.render_arcs(n.secondary_heads.as_deref(), style),
                Column::SemanticHeads => self.render_arcs(n.semantic_heads.as_deref(), style),
                Column::Unused => style.blank.clone(),
            })
            .collect()
    }

    /// Render an arc list sorted by head id, then label.
    ///
    /// An empty or uninitialized list renders as the blank token.
    pub fn render_arcs<A: HeadArc>(&self, arcs: Option<&[A]>, style: &ColumnStyle) -> String {
        let arcs = match arcs {
            Some(arcs) if !arcs.is_empty() => arcs,
            _ => return style.blank.clone(),
        };

        let mut sorted: Vec<(i32, &str)> = arcs
            .iter()
            .map(|arc| (self.nodes[arc.head().0].id, arc.label()))
            .collect();
        sorted.sort_unstable();

        let mut out = String::new();
        for (i, (head, label)) in sorted.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&style.arcs);
            }
            // Writing to a String cannot fail.
            let _ = write!(out, "{}{}{}", head, style.arc_label, label);
        }
        out
    }

    /// A displayable view of every word row, in `id` order.
    pub fn display(&self, layout: ColumnLayout) -> DepTreeDisplay<'_> {
        DepTreeDisplay {
            tree: self,
            layout,
            style: ColumnStyle::default(),
            aligned: false,
        }
    }
}

/// Render a feature map as `key=value` pairs in key order, blank when empty.
pub fn render_feats(feats: &FeatureMap, style: &ColumnStyle) -> String {
    if feats.is_empty() {
        return style.blank.clone();
    }

    feats
        .iter()
        .map(|(k, v)| format!("{}{}{}", k, style.feat_value, v))
        .collect::<Vec<_>>()
        .join(&style.feats)
}

/// Sentence rendering produced by [`DepTree::display`].
pub struct DepTreeDisplay<'a> {
    tree: &'a DepTree,
    layout: ColumnLayout,
    style: ColumnStyle,
    aligned: bool,
}

impl<'a> DepTreeDisplay<'a> {
    pub fn with_style(mut self, style: ColumnStyle) -> Self {
        self.style = style;
        self
    }

    /// Pad every column to the display width of its widest cell.
    pub fn aligned(mut self) -> Self {
        self.aligned = true;
        self
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut words: Vec<NodeId> = self.tree.word_ids().collect();
        words.sort_by_key(|w| self.tree.id_of(*w));
        words
            .into_iter()
            .map(|w| self.tree.render_cells(w, self.layout, &self.style))
            .collect()
    }
}

impl<'a> fmt::Display for DepTreeDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();

        let mut widths = vec![0; self.layout.columns().len()];
        if self.aligned {
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }

        for (r, row) in rows.iter().enumerate() {
            if r > 0 {
                f.write_char('\n')?;
            }
            for (c, cell) in row.iter().enumerate() {
                f.write_str(cell)?;
                if c + 1 == row.len() {
                    break;
                }
                let pad = widths[c].saturating_sub(UnicodeWidthStr::width(cell.as_str()));
                for _ in 0..pad {
                    f.write_char(' ')?;
                }
                f.write_str(&self.style.column)?;
            }
        }

        Ok(())
    }
}
