use crate::computations::SccEngine;
use crate::error::SccError;
use crate::graph::GraphModel;
use crate::util::timer::{GsDuration, GsTimer};
use log::debug;
use scc_api::{Component, DirectedGraph, SccDecomposition, VertexId};
use std::cmp::min;
use std::convert::TryFrom;

/// Tarjan's single-pass algorithm: a vertex is the root of a component when no vertex reachable
/// from it and still on the stack was discovered earlier (`lowlink == discovery index`).
pub struct TarjanScc<'a, G: DirectedGraph = GraphModel> {
    graph: &'a G,
    time_stamp: usize,
    is_visited: Vec<bool>,
    is_on_stack: Vec<bool>,
    num: Vec<usize>,
    lowlink: Vec<usize>,
    dfs_path: Vec<VertexId>,
    components: Vec<Component>,
    elapsed: Option<GsDuration>,
}

impl<'a, G: DirectedGraph> TarjanScc<'a, G> {
    pub const NAME: &'static str = "Tarjan";

    fn dfs(&mut self, root: VertexId) {
        let graph = self.graph;
        // Simulated call stack of `(vertex, next successor position)`.
        let mut frames = vec![(root, 0)];
        self.enter(root);

        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            if let Some(&w) = graph.successors(v).get(frame.1) {
                frame.1 += 1;
                let (v_index, w_index) = (v as usize, w as usize);
                if !self.is_visited[w_index] {
                    self.enter(w);
                    frames.push((w, 0));
                } else if self.num[w_index] < self.num[v_index] && self.is_on_stack[w_index] {
                    self.lowlink[v_index] = min(self.lowlink[v_index], self.num[w_index]);
                }
            } else {
                frames.pop();
                self.close(v);
                if let Some(&(parent, _)) = frames.last() {
                    let parent_index = parent as usize;
                    self.lowlink[parent_index] =
                        min(self.lowlink[parent_index], self.lowlink[v as usize]);
                }
            }
        }
    }

    fn enter(&mut self, v: VertexId) {
        let v_index = v as usize;
        self.num[v_index] = self.time_stamp;
        self.lowlink[v_index] = self.time_stamp;
        self.time_stamp += 1;
        self.dfs_path.push(v);
        self.is_visited[v_index] = true;
        self.is_on_stack[v_index] = true;
    }

    /// Emits the component rooted at `v` once all its successors are done, if `v` is a root.
    fn close(&mut self, v: VertexId) {
        let v_num = self.num[v as usize];
        if v_num != self.lowlink[v as usize] {
            return;
        }
        let mut component = Vec::new();
        while let Some(&top) = self.dfs_path.last() {
            if self.num[top as usize] < v_num {
                break;
            }
            self.dfs_path.pop();
            self.is_on_stack[top as usize] = false;
            component.push(top);
        }
        self.components.push(component);
    }
}

impl<'a, G: DirectedGraph> SccEngine<'a, G> for TarjanScc<'a, G> {
    fn construct(graph: &'a G) -> Self {
        let vertex_count = graph.size();
        Self {
            graph,
            time_stamp: 0,
            is_visited: vec![false; vertex_count],
            is_on_stack: vec![false; vertex_count],
            num: vec![0; vertex_count],
            lowlink: vec![0; vertex_count],
            dfs_path: Vec::new(),
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

impl<'a, G: DirectedGraph> SccDecomposition for TarjanScc<'a, G> {
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
    use crate::computations::tarjan::TarjanScc;
    use crate::computations::SccEngine;
    use crate::error::SccError;
    use crate::graph::GraphModel;
    use scc_api::SccDecomposition;

    fn run(vertex_count: usize, edges: Vec<(u32, u32)>) -> Vec<Vec<u32>> {
        let graph = GraphModel::from_edges(vertex_count, edges).expect("Valid graph");
        let mut engine = TarjanScc::construct(&graph);
        engine.run().expect("First run");
        engine.into_components()
    }

    #[test]
    fn emits_components_in_reverse_topological_order() {
        // 0 -> 1 -> 2 -> 0 and 2 -> 3: the sink {3} closes first.
        let components = run(4, vec![(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert_eq!(components, vec![vec![3], vec![2, 1, 0]]);

        let components = run(4, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(components, vec![vec![3], vec![2], vec![1], vec![0]]);
    }

    #[test]
    fn back_edge_to_ancestor_outside_tree_path() {
        // 3 -> 1 points into the still open cycle 0 -> 1 -> 2 -> 0, so 3 joins it.
        let components = run(4, vec![(0, 1), (0, 3), (1, 2), (2, 0), (3, 1)]);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 4);
    }

    #[test]
    fn self_loops_and_parallel_edges() {
        let components = run(3, vec![(0, 0), (0, 1), (0, 1), (1, 1), (2, 2), (2, 2)]);
        assert_eq!(components, vec![vec![1], vec![0], vec![2]]);
    }

    #[test]
    fn second_run_is_rejected() {
        let graph = GraphModel::from_edges(2, vec![(0, 1), (1, 0)]).expect("Valid graph");
        let mut engine = TarjanScc::construct(&graph);
        assert_eq!(engine.elapsed_seconds(), 0.0);
        assert!(engine.components().is_empty());
        engine.run().expect("First run");
        assert!(matches!(engine.run(), Err(SccError::AlreadyRun("Tarjan"))));
        assert_eq!(engine.components(), &[vec![1, 0]]);
        assert!(engine.elapsed_seconds() >= 0.0);
    }
}
