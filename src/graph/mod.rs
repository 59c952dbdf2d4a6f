use crate::error::SccError;
use scc_api::{DirectedGraph, SimpleEdge, VertexId};
use std::convert::TryFrom;

pub mod generator;
pub mod loader;

/// Immutable adjacency-list digraph over the dense vertex ids `0..n`.
///
/// Every id stored in an adjacency list has been checked against `n` on insertion, so the engines
/// can index their per-vertex state without bounds logic of their own. Parallel edges and
/// self-loops are kept as given.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GraphModel {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl GraphModel {
    /// Creates `vertex_count` vertices without edges.
    pub fn new(vertex_count: usize) -> Self {
        Self { adjacency: vec![Vec::new(); vertex_count], edge_count: 0 }
    }

    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = SimpleEdge>,
    ) -> Result<Self, SccError> {
        let mut graph = Self::new(vertex_count);
        for (src, dst) in edges {
            graph.add_edge(src, dst)?;
        }
        Ok(graph)
    }

    pub fn from_adjacency(adjacency: Vec<Vec<VertexId>>) -> Result<Self, SccError> {
        let vertex_count = adjacency.len();
        if let Some(&invalid) =
            adjacency.iter().flatten().find(|&&dst| dst as usize >= vertex_count)
        {
            return Err(SccError::VertexOutOfRange(invalid, vertex_count));
        }
        let edge_count = adjacency.iter().map(Vec::len).sum();
        Ok(Self { adjacency, edge_count })
    }

    /// Appends `dst` to the successors of `src`. Duplicates are not collapsed.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<(), SccError> {
        let vertex_count = self.adjacency.len();
        if dst as usize >= vertex_count {
            return Err(SccError::VertexOutOfRange(dst, vertex_count));
        }
        let successors = self
            .adjacency
            .get_mut(src as usize)
            .ok_or(SccError::VertexOutOfRange(src, vertex_count))?;
        successors.push(dst);
        self.edge_count += 1;
        Ok(())
    }

    pub fn vertex_count(&self) -> VertexId {
        VertexId::try_from(self.adjacency.len()).expect("Overflow")
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All edges in adjacency order.
    pub fn edges(&self) -> impl Iterator<Item = SimpleEdge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(src, successors)| {
            let src = VertexId::try_from(src).expect("Overflow");
            successors.iter().map(move |&dst| (src, dst))
        })
    }

    /// Builds the graph with every edge reversed. For every `u -> w` the result has `w -> u`,
    /// with predecessors listed in increasing order of `u`.
    pub fn transpose<G: DirectedGraph + ?Sized>(graph: &G) -> Self {
        let vertex_count = graph.size();
        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut edge_count = 0;
        for src in 0..vertex_count {
            let src_id = VertexId::try_from(src).expect("Overflow");
            for &dst in graph.successors(src_id) {
                adjacency[dst as usize].push(src_id);
                edge_count += 1;
            }
        }
        Self { adjacency, edge_count }
    }
}

impl DirectedGraph for GraphModel {
    #[inline(always)]
    fn size(&self) -> usize {
        self.adjacency.len()
    }

    #[inline(always)]
    fn successors(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v as usize]
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SccError;
    use crate::graph::GraphModel;
    use scc_api::DirectedGraph;

    #[test]
    fn add_edge_keeps_order_and_duplicates() {
        let mut graph = GraphModel::new(3);
        graph.add_edge(0, 2).expect("Valid edge");
        graph.add_edge(0, 1).expect("Valid edge");
        graph.add_edge(0, 2).expect("Valid edge");
        graph.add_edge(1, 1).expect("Valid edge");
        assert_eq!(graph.successors(0), &[2, 1, 2]);
        assert_eq!(graph.successors(1), &[1]);
        assert!(graph.successors(2).is_empty());
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        let mut graph = GraphModel::new(2);
        assert!(matches!(graph.add_edge(0, 2), Err(SccError::VertexOutOfRange(2, 2))));
        assert!(matches!(graph.add_edge(5, 0), Err(SccError::VertexOutOfRange(5, 2))));
        assert_eq!(graph.edge_count(), 0);

        assert!(matches!(
            GraphModel::from_adjacency(vec![vec![1], vec![3]]),
            Err(SccError::VertexOutOfRange(3, 2))
        ));
        assert!(GraphModel::from_edges(1, vec![(0, 1)]).is_err());
    }

    #[test]
    fn transpose_reverses_every_edge() {
        let graph = GraphModel::from_edges(4, vec![(0, 1), (1, 2), (2, 0), (2, 3), (2, 3)])
            .expect("Valid graph");
        let transposed = GraphModel::transpose(&graph);
        assert_eq!(transposed.successors(0), &[2]);
        assert_eq!(transposed.successors(1), &[0]);
        assert_eq!(transposed.successors(2), &[1]);
        assert_eq!(transposed.successors(3), &[2, 2]);
        assert_eq!(transposed.edge_count(), graph.edge_count());
        assert_eq!(GraphModel::transpose(&transposed), graph);
    }

    #[test]
    fn edges_follow_adjacency_order() {
        let graph =
            GraphModel::from_adjacency(vec![vec![1, 0], vec![], vec![0]]).expect("Valid graph");
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 0), (2, 0)]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn empty_graph() {
        let graph = GraphModel::default();
        assert!(graph.is_empty());
        assert_eq!(graph.edges().count(), 0);
    }
}
