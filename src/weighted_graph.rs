//! Fixed-size directed graph with weighted edges.
//!
//! Used by tree search algorithms (e.g. maximum spanning tree decoding) that
//! score every candidate head/dependent pair before any tree exists.

use crate::{DepError, DepResult};

/// A directed edge `source -> target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// Adjacency lists of outgoing edges over vertices `0..size`.
///
/// Self-loops and parallel edges are kept as given.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    outgoing: Vec<Vec<Edge>>,
}

impl WeightedGraph {
    pub fn new(size: usize) -> Self {
        Self {
            outgoing: vec![Vec::new(); size],
        }
    }

    /// Append an edge to the outgoing list of `source`.
    pub fn set_edge(&mut self, source: usize, target: usize, weight: f64) -> DepResult<()> {
        self.check(target)?;
        self.check(source)?;
        self.outgoing[source].push(Edge::new(source, target, weight));
        Ok(())
    }

    /// Outgoing edges of `source`, in insertion order.
    pub fn outgoing_edges(&self, source: usize) -> DepResult<&[Edge]> {
        self.check(source)?;
        Ok(&self.outgoing[source])
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    /// Every edge, grouped by source vertex, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.outgoing.iter().flatten()
    }

    fn check(&self, vertex: usize) -> DepResult<()> {
        if vertex < self.outgoing.len() {
            Ok(())
        } else {
            Err(DepError::VertexOutOfRange {
                vertex,
                size: self.outgoing.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outgoing_edges_keep_insertion_order() {
        let mut graph = WeightedGraph::new(3);
        graph.set_edge(0, 1, 2.5).unwrap();
        graph.set_edge(0, 2, 1.0).unwrap();

        assert_eq!(
            graph.outgoing_edges(0).unwrap(),
            &[Edge::new(0, 1, 2.5), Edge::new(0, 2, 1.0)]
        );
        assert!(graph.outgoing_edges(1).unwrap().is_empty());
        assert_eq!(graph.size(), 3);
    }

    #[test]
    fn self_loops_and_parallel_edges_are_kept() {
        let mut graph = WeightedGraph::new(2);
        graph.set_edge(1, 1, 0.5).unwrap();
        graph.set_edge(0, 1, 1.0).unwrap();
        graph.set_edge(0, 1, 1.0).unwrap();

        assert_eq!(graph.outgoing_edges(0).unwrap().len(), 2);
        assert_eq!(graph.outgoing_edges(1).unwrap(), &[Edge::new(1, 1, 0.5)]);
        assert_eq!(graph.edge_count(), 3);

        let sources: Vec<usize> = graph.edges().map(|e| e.source).collect();
        assert_eq!(sources, vec![0, 0, 1]);
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let mut graph = WeightedGraph::new(2);

        assert_eq!(
            graph.set_edge(0, 2, 1.0),
            Err(DepError::VertexOutOfRange { vertex: 2, size: 2 })
        );
        assert_eq!(
            graph.outgoing_edges(5).unwrap_err(),
            DepError::VertexOutOfRange { vertex: 5, size: 2 }
        );
        assert_eq!(graph.edge_count(), 0);
    }
}
