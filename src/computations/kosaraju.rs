use crate::computations::SccEngine;
use crate::error::SccError;
use crate::graph::GraphModel;
use crate::util::timer::{GsDuration, GsTimer};
use log::debug;
use scc_api::{Component, DirectedGraph, SccDecomposition, VertexId};
use std::convert::TryFrom;

/// The Kosaraju-Sharir two-pass algorithm.
///
/// The first pass records vertices of the original graph in DFS finishing order. The second pass
/// takes them latest-finished first and collects everything reachable in the transposed graph that
/// is not yet part of a component. Each such search stays inside exactly one component, which only
/// holds for that pop order.
pub struct KosarajuScc<'a, G: DirectedGraph = GraphModel> {
    graph: &'a G,
    is_visited: Vec<bool>,
    is_in_component: Vec<bool>,
    dfs_path: Vec<VertexId>,
    components: Vec<Component>,
    elapsed: Option<GsDuration>,
}

impl<'a, G: DirectedGraph> KosarajuScc<'a, G> {
    pub const NAME: &'static str = "KS";

    /// First pass: post-order DFS on the original graph, pushing finished vertices on `dfs_path`.
    fn dfs(&mut self, root: VertexId) {
        let graph = self.graph;
        let mut frames = vec![(root, 0)];
        self.is_visited[root as usize] = true;

        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            if let Some(&w) = graph.successors(v).get(frame.1) {
                frame.1 += 1;
                if !self.is_visited[w as usize] {
                    self.is_visited[w as usize] = true;
                    frames.push((w, 0));
                }
            } else {
                frames.pop();
                self.dfs_path.push(v);
            }
        }
    }

    /// Second pass: pre-order DFS on the reversed graph, collecting one component.
    fn reversed_dfs(&mut self, reversed_graph: &GraphModel, root: VertexId) -> Component {
        let mut component = Vec::new();
        let mut frames = vec![(root, 0)];
        self.assign(root, &mut component);

        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            if let Some(&w) = reversed_graph.successors(v).get(frame.1) {
                frame.1 += 1;
                if !self.is_visited[w as usize] {
                    self.assign(w, &mut component);
                    frames.push((w, 0));
                }
            } else {
                frames.pop();
            }
        }
        component
    }

    fn assign(&mut self, v: VertexId, component: &mut Component) {
        self.is_visited[v as usize] = true;
        self.is_in_component[v as usize] = true;
        component.push(v);
    }
}

impl<'a, G: DirectedGraph> SccEngine<'a, G> for KosarajuScc<'a, G> {
    fn construct(graph: &'a G) -> Self {
        let vertex_count = graph.size();
        Self {
            graph,
            is_visited: vec![false; vertex_count],
            is_in_component: vec![false; vertex_count],
            dfs_path: Vec::with_capacity(vertex_count),
            components: Vec::new(),
            elapsed: None,
        }
    }

    fn run(&mut self) -> Result<(), SccError> {
        if self.elapsed.is_some() {
            return Err(SccError::AlreadyRun(Self::NAME));
        }
        let timer = GsTimer::now();
        let vertex_count = self.graph.size();
        for v in 0..vertex_count {
            if !self.is_visited[v] {
                self.dfs(VertexId::try_from(v).expect("Overflow"));
            }
        }

        let reversed_graph = GraphModel::transpose(self.graph);
        self.is_visited = vec![false; vertex_count];

        while let Some(w) = self.dfs_path.pop() {
            if !self.is_visited[w as usize] && !self.is_in_component[w as usize] {
                let component = self.reversed_dfs(&reversed_graph, w);
                self.components.push(component);
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

impl<'a, G: DirectedGraph> SccDecomposition for KosarajuScc<'a, G> {
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
