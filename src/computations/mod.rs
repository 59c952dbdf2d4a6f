use crate::computations::gabow::GabowScc;
use crate::computations::kosaraju::KosarajuScc;
use crate::computations::tarjan::TarjanScc;
use crate::error::SccError;
use crate::graph::GraphModel;
use crate::util::timer::GsDuration;
use scc_api::{Component, DirectedGraph, SccDecomposition};

pub mod gabow;
pub mod kosaraju;
pub mod tarjan;
pub mod verify;


/// A single-use decomposition engine: construct it against a graph, run it once, read the result.
///
/// Construction allocates all per-vertex state. `run` brackets exactly the decomposition with a
/// timer, and a second call fails with `SccError::AlreadyRun` leaving the first result in place.
pub trait SccEngine<'a, G: DirectedGraph>: SccDecomposition + Sized {
    fn construct(graph: &'a G) -> Self;

    fn run(&mut self) -> Result<(), SccError>;

    fn elapsed(&self) -> GsDuration;

    fn into_components(self) -> Vec<Component>;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EngineKind {
    Tarjan,
    Gabow,
    Kosaraju,
}

impl EngineKind {
    /// Every engine, in the order the benchmark runs them.
    pub fn all() -> [EngineKind; 3] {
        [EngineKind::Tarjan, EngineKind::Gabow, EngineKind::Kosaraju]
    }

    pub fn description(self) -> &'static str {
        match self {
            EngineKind::Tarjan => TarjanScc::<GraphModel>::NAME,
            EngineKind::Gabow => GabowScc::<GraphModel>::NAME,
            EngineKind::Kosaraju => KosarajuScc::<GraphModel>::NAME,
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.description())
    }
}

/// Components and running time of one engine run.
#[derive(new, Debug, Clone)]
pub struct EngineResult {
    pub kind: EngineKind,
    pub components: Vec<Component>,
    pub elapsed: GsDuration,
}

impl EngineResult {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.to_seconds()
    }
}

/// Constructs the engine of the given kind against `graph` and runs it once.
pub fn run_engine<G: DirectedGraph>(kind: EngineKind, graph: &G) -> Result<EngineResult, SccError> {
    match kind {
        EngineKind::Tarjan => execute::<G, _>(kind, TarjanScc::<G>::construct(graph)),
        EngineKind::Gabow => execute::<G, _>(kind, GabowScc::<G>::construct(graph)),
        EngineKind::Kosaraju => execute::<G, _>(kind, KosarajuScc::<G>::construct(graph)),
    }
}

fn execute<'a, G: DirectedGraph + 'a, E: SccEngine<'a, G>>(
    kind: EngineKind,
    mut engine: E,
) -> Result<EngineResult, SccError> {
    engine.run()?;
    let elapsed = engine.elapsed();
    Ok(EngineResult::new(kind, engine.into_components(), elapsed))
}
