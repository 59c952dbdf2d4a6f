use crate::computations::SccEngine;
use crate::error::SccError;
use crate::graph::GraphModel;
use crate::util::timer::{GsDuration, GsTimer};
use log::debug;
use scc_api::{Component, DirectedGraph, SccDecomposition, VertexId};
use std::convert::TryFrom;

/// Path position given to vertices whose component has been emitted. It compares greater than
/// every live position, so edges into finished components never contract root candidates.
const CLOSED: usize = usize::MAX;

/// Gabow's path-based algorithm. `dfs_path` holds the vertices not yet assigned to a component and
/// `contracted_path` the positions in `dfs_path` of the candidate component roots. An edge to a
/// vertex still on the path merges every candidate pushed after that vertex.
pub struct GabowScc<'a, G: DirectedGraph = GraphModel> {
    graph: &'a G,
    is_visited: Vec<bool>,
    index: Vec<usize>,
    dfs_path: Vec<VertexId>,
    contracted_path: Vec<usize>,
    components: Vec<Component>,
    elapsed: Option<GsDuration>,
}

impl<'a, G: DirectedGraph> GabowScc<'a, G> {
    pub const NAME: &'static str = "Gabow";

    fn dfs(&mut self, root: VertexId) {
        let graph = self.graph;
        let mut frames = vec![(root, 0)];
        self.enter(root);

        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            if let Some(&w) = graph.successors(v).get(frame.1) {
                frame.1 += 1;
                if self.is_visited[w as usize] {
                    self.contract(w);
                } else {
                    self.enter(w);
                    frames.push((w, 0));
                }
            } else {
                frames.pop();
                self.close(v);
            }
        }
    }

    fn enter(&mut self, v: VertexId) {
        self.is_visited[v as usize] = true;
        self.dfs_path.push(v);
        let position = self.dfs_path.len() - 1;
        self.index[v as usize] = position;
        self.contracted_path.push(position);
    }

    fn contract(&mut self, w: VertexId) {
        let w_position = self.index[w as usize];
        while let Some(&top) = self.contracted_path.last() {
            if w_position < top {
                self.contracted_path.pop();
            } else {
                break;
            }
        }
    }

    fn close(&mut self, v: VertexId) {
        let v_position = self.index[v as usize];
        if self.contracted_path.last() != Some(&v_position) {
            return;
        }
        self.contracted_path.pop();
        let component = self.dfs_path.split_off(v_position);
        for &w in &component {
            self.index[w as usize] = CLOSED;
        }
        self.components.push(component);
    }
}

impl<'a, G: DirectedGraph> SccEngine<'a, G> for GabowScc<'a, G> {
    fn construct(graph: &'a G) -> Self {
        let vertex_count = graph.size();
        Self {
            graph,
            is_visited: vec![false; vertex_count],
            index: vec![0; vertex_count],
            dfs_path: Vec::new(),
            contracted_path: Vec::new(),
            components: Vec::new(),
            elapsed: None,
        }
    }

    fn run(&mut self) -> Result<(), SccError> {
        if self.elapsed.is_some() {
            return Err(SccError::AlreadyRun(Self::NAME));
        }
        let timer = GsTimer::now();
        for v in 0..self.graph.size() {
            if !self.is_visited[v] {
                self.dfs(VertexId::try_from(v).expect("Overflow"));
            }
        }
        let elapsed = timer.elapsed();
        self.elapsed = Some(elapsed);
        debug!(
            "{} found {} components in {}",
            Self::NAME,
            self.components.len(),
            elapsed.to_seconds_string()
        );
        Ok(())
    }

    fn elapsed(&self) -> GsDuration {
        self.elapsed.unwrap_or_default()
    }

    fn into_components(self) -> Vec<Component> {
        self.components
    }
}

impl<'a, G: DirectedGraph> SccDecomposition for GabowScc<'a, G> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn components(&self) -> &[Component] {
        &self.components
    }

    fn elapsed_seconds(&self) -> f64 {
        self.elapsed().to_seconds()
    }
}

#[cfg(test)]
mod tests {
    use crate::computations::gabow::GabowScc;
    use crate::computations::SccEngine;
    use crate::error::SccError;
    use crate::graph::GraphModel;

    fn run(vertex_count: usize, edges: Vec<(u32, u32)>) -> Vec<Vec<u32>> {
        let graph = GraphModel::from_edges(vertex_count, edges).expect("Valid graph");
        let mut engine = GabowScc::construct(&graph);
        engine.run().expect("First run");
        engine.into_components()
    }

    #[test]
    fn cycle_with_tail() {
        let components = run(4, vec![(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert_eq!(components, vec![vec![3], vec![0, 1, 2]]);
    }

    #[test]
    fn edge_into_closed_component_does_not_contract() {
        // 0 -> 1 -> 2 closes {2} and {1}; then 0 -> 3 -> 4 -> 1 reuses path position 1 for 3.
        let components = run(5, vec![(0, 1), (1, 2), (0, 3), (3, 4), (4, 1)]);
        assert_eq!(components, vec![vec![2], vec![1], vec![4], vec![3], vec![0]]);
    }

    #[test]
    fn nested_cycles_merge_into_one_component() {
        let components = run(5, vec![(0, 1), (1, 2), (2, 1), (2, 3), (3, 4), (4, 0)]);
        assert_eq!(components, vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn second_run_is_rejected() {
        let graph = GraphModel::new(3);
        let mut engine = GabowScc::construct(&graph);
        engine.run().expect("First run");
        assert!(matches!(engine.run(), Err(SccError::AlreadyRun("Gabow"))));
        assert_eq!(engine.into_components(), vec![vec![0], vec![1], vec![2]]);
    }
}
