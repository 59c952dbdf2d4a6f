//! Runs every engine against the same graph and collects their timings. Graph construction and
//! loading always finish before any engine timer starts.

use crate::benchmark::report::{GraphSource, ReportCase, ReportTable};
use crate::computations::verify::compare_results;
use crate::computations::{run_engine, EngineKind, EngineResult};
use crate::error::SccError;
use crate::graph::loader::{load_graph, EdgeFileFormat};
use crate::graph::GraphModel;
use crate::util::io::GsWriter;
use crossbeam_utils::thread;
use crossbeam_utils::thread::ScopedJoinHandle;
use log::info;
use scc_api::DirectedGraph;

pub mod report;

#[derive(new, Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    /// Check that all engines produce the same partition after each graph.
    pub verify: bool,
    /// Run the engines on separate threads instead of one after the other.
    pub parallel: bool,
}

pub enum BenchmarkTarget {
    File { path: String, vertex_count: Option<usize>, format: EdgeFileFormat },
    Report { case: ReportCase, source: GraphSource },
}

#[derive(new)]
pub struct BenchmarkRequest {
    pub target: BenchmarkTarget,
    pub config: BenchmarkConfig,
    pub output: Option<String>,
}

/// Results of all engines on one graph.
#[derive(new, Debug)]
pub struct BenchmarkRow {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub results: Vec<EngineResult>,
}

impl BenchmarkRow {
    pub fn result(&self, kind: EngineKind) -> Option<&EngineResult> {
        self.results.iter().find(|result| result.kind == kind)
    }
}

pub fn execute_request(request: &BenchmarkRequest) -> Result<Vec<ReportTable>, SccError> {
    let tables = match &request.target {
        BenchmarkTarget::File { path, vertex_count, format } => {
            let graph = load_graph(path, *vertex_count, *format)?;
            let row = benchmark_graph(&graph, request.config)?;
            for result in &row.results {
                info!(
                    "{}: {} components in {}",
                    result.kind,
                    result.components.len(),
                    result.elapsed.to_seconds_string()
                );
            }
            vec![ReportTable::from_rows(format!("Graph: {} (unit: sec)", path), &[row])]
        }
        BenchmarkTarget::Report { case, source } => {
            report::run_report(*case, source, &report::VERTICES_SPECTRUM, request.config)?
        }
    };
    if let Some(output) = &request.output {
        write_tables(output, &tables)?;
        info!("Report written to '{}'", output);
    }
    Ok(tables)
}

/// Runs every engine once against `graph`, in Tarjan, Gabow, KS order.
pub fn benchmark_graph(
    graph: &GraphModel,
    config: BenchmarkConfig,
) -> Result<BenchmarkRow, SccError> {
    let results = if config.parallel {
        run_parallel(graph)?
    } else {
        EngineKind::all().iter().map(|&kind| run_engine(kind, graph)).collect::<Result<_, _>>()?
    };
    if config.verify {
        compare_results(graph.size(), &results)?;
    }
    Ok(BenchmarkRow::new(graph.size(), graph.edge_count(), results))
}

/// Engines never mutate the graph, so they can share it across threads.
fn run_parallel(graph: &GraphModel) -> Result<Vec<EngineResult>, SccError> {
    thread::scope(|s| {
        let threads: Vec<ScopedJoinHandle<Result<EngineResult, SccError>>> = EngineKind::all()
            .iter()
            .map(|&kind| s.spawn(move |_| run_engine(kind, graph)))
            .collect();
        threads
            .into_iter()
            .map(|thread| thread.join().unwrap_or_else(|_| panic!("Error joining engine thread")))
            .collect()
    })
    .expect("Error ending engine scope")
}

pub fn write_tables(file_path: &str, tables: &[ReportTable]) -> Result<(), SccError> {
    let mut writer = GsWriter::new(file_path.to_string())?;
    writer.write_file_lines(tables.iter().flat_map(ReportTable::lines))?;
    writer.flush()
}
