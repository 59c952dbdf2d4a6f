//! The two comparison reports: case A keeps the number of edges fixed while the number of
//! vertices grows, case B sweeps the edge density.

use crate::benchmark::{benchmark_graph, BenchmarkConfig, BenchmarkRow};
use crate::computations::EngineKind;
use crate::error::SccError;
use crate::graph::generator::{random_with_density, random_with_edges};
use crate::graph::loader::{load_graph, EdgeFileFormat};
use crate::graph::GraphModel;
use crate::util::timer::{GsDuration, GsTimer};
use itertools::Itertools;
use log::info;
use std::path::Path;
use std::str::FromStr;

pub const VERTICES_SPECTRUM: [usize; 8] = [500, 1000, 1500, 2000, 2500, 3000, 3500, 4000];
const EDGE_MULTIPLES: [usize; 3] = [1, 4, 9];
/// Edges in a complete digraph on 1000 vertices. A `kX` series has `k` times as many edges.
const EDGE_UNIT: usize = 1000 * 999;
const DENSITIES: [(&str, f64); 7] = [
    ("0.01", 0.01),
    ("0.05", 0.05),
    ("0.1", 0.1),
    ("0.2", 0.2),
    ("0.5", 0.5),
    ("0.8", 0.8),
    ("1.0", 1.0),
];
const FILE_SUFFIX: &str = ".csv";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReportCase {
    ConstantEdges,
    Density,
}

impl FromStr for ReportCase {
    type Err = SccError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(ReportCase::ConstantEdges),
            "b" => Ok(ReportCase::Density),
            _ => Err(SccError::Generic(format!("Unknown report case '{}'", s))),
        }
    }
}

/// Where the graphs of a report come from.
#[derive(Debug, Clone)]
pub enum GraphSource {
    /// Pre-generated edge files named `1X_at_500.csv` (case A) or `0.01at500.csv` (case B).
    Directory(String),
    Generated { seed: u64 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GraphShape {
    Edges(usize),
    Density(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphSpec {
    pub vertex_count: usize,
    pub file_name: String,
    pub shape: GraphShape,
}

/// The graphs that make up one table of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSeries {
    pub title: String,
    pub graphs: Vec<GraphSpec>,
}

impl ReportCase {
    pub fn plan(self, spectrum: &[usize]) -> Vec<ReportSeries> {
        match self {
            ReportCase::ConstantEdges => EDGE_MULTIPLES
                .iter()
                .enumerate()
                .map(|(index, &multiple)| {
                    let prefix = format!("{}X_at_", multiple);
                    // A series starts at the first size that can hold its edges without repeats.
                    let graphs = spectrum
                        .iter()
                        .skip(2 * index + 1)
                        .map(|&vertex_count| GraphSpec {
                            vertex_count,
                            file_name: format!("{}{}{}", prefix, vertex_count, FILE_SUFFIX),
                            shape: GraphShape::Edges(multiple * EDGE_UNIT),
                        })
                        .collect();
                    ReportSeries {
                        title: format!("Number of edges: {}X (unit: sec)", multiple),
                        graphs,
                    }
                })
                .collect(),
            ReportCase::Density => DENSITIES
                .iter()
                .map(|&(name, density)| ReportSeries {
                    title: format!("Density: {} (unit: sec)", name),
                    graphs: spectrum
                        .iter()
                        .map(|&vertex_count| GraphSpec {
                            vertex_count,
                            file_name: format!("{}at{}{}", name, vertex_count, FILE_SUFFIX),
                            shape: GraphShape::Density(density),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl GraphSource {
    pub fn validate(&self) -> Result<(), SccError> {
        match self {
            GraphSource::Directory(dir) if !Path::new(dir).is_dir() => {
                Err(SccError::NotDirectory(dir.clone()))
            }
            _ => Ok(()),
        }
    }

    pub fn load(&self, spec: &GraphSpec) -> Result<GraphModel, SccError> {
        match self {
            GraphSource::Directory(dir) => load_graph(
                &format!("{}/{}", dir, spec.file_name),
                Some(spec.vertex_count),
                EdgeFileFormat::default(),
            ),
            GraphSource::Generated { seed } => match spec.shape {
                GraphShape::Edges(edge_count) => {
                    random_with_edges(spec.vertex_count, edge_count, *seed)
                }
                GraphShape::Density(density) => {
                    random_with_density(spec.vertex_count, density, *seed)
                }
            },
        }
    }
}

/// Running times of each engine over a series of graphs.
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub title: String,
    pub vertex_counts: Vec<usize>,
    pub timings: Vec<(EngineKind, Vec<GsDuration>)>,
}

impl ReportTable {
    pub fn from_rows(title: String, rows: &[BenchmarkRow]) -> Self {
        let timings = EngineKind::all()
            .iter()
            .map(|&kind| {
                let durations = rows
                    .iter()
                    .map(|row| row.result(kind).map(|result| result.elapsed).unwrap_or_default())
                    .collect();
                (kind, durations)
            })
            .collect();
        Self { title, vertex_counts: rows.iter().map(|row| row.vertex_count).collect(), timings }
    }

    /// Tab separated lines: the title, the vertex counts, one line per engine and a blank line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.title.clone(),
            format!("Vertices:\t{}", self.vertex_counts.iter().map(|n| format!("{}\t", n)).join("")),
        ];
        lines.extend(self.timings.iter().map(|(kind, durations)| {
            format!(
                "{}:\t{}",
                kind,
                durations.iter().map(|d| format!("{}\t", d.to_report_string())).join("")
            )
        }));
        lines.push(String::new());
        lines
    }
}

pub fn run_report(
    case: ReportCase,
    source: &GraphSource,
    spectrum: &[usize],
    config: BenchmarkConfig,
) -> Result<Vec<ReportTable>, SccError> {
    source.validate()?;
    let mut tables = Vec::new();
    for series in case.plan(spectrum) {
        let mut rows = Vec::with_capacity(series.graphs.len());
        for spec in &series.graphs {
            let timer = GsTimer::now();
            let graph = source.load(spec)?;
            info!(
                "Prepared {} with {} edges in {}",
                spec.file_name,
                graph.edge_count(),
                timer.elapsed().to_seconds_string()
            );
            rows.push(benchmark_graph(&graph, config)?);
        }
        let table = ReportTable::from_rows(series.title, &rows);
        for line in table.lines() {
            info!("{}", line);
        }
        tables.push(table);
    }
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use crate::benchmark::report::{
        run_report, GraphShape, GraphSource, ReportCase, ReportTable, VERTICES_SPECTRUM,
    };
    use crate::benchmark::{BenchmarkConfig, BenchmarkRow};
    use crate::computations::{EngineKind, EngineResult};
    use crate::error::SccError;
    use crate::util::timer::GsDuration;
    use std::time::Duration;

    #[test]
    fn constant_edges_plan() {
        let plan = ReportCase::ConstantEdges.plan(&VERTICES_SPECTRUM);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].title, "Number of edges: 1X (unit: sec)");
        assert_eq!(plan[0].graphs.len(), 7);
        assert_eq!(plan[0].graphs[0].file_name, "1X_at_1000.csv");
        assert_eq!(plan[1].graphs[0].file_name, "4X_at_2000.csv");
        assert_eq!(plan[2].graphs.len(), 3);
        assert_eq!(plan[2].graphs[0].vertex_count, 3000);
        assert_eq!(plan[2].graphs[0].shape, GraphShape::Edges(9 * 999_000));
    }

    #[test]
    fn density_plan() {
        let plan = ReportCase::Density.plan(&VERTICES_SPECTRUM);
        assert_eq!(plan.len(), 7);
        assert_eq!(plan[2].title, "Density: 0.1 (unit: sec)");
        assert_eq!(plan[2].graphs.len(), 8);
        assert_eq!(plan[2].graphs[7].file_name, "0.1at4000.csv");
        assert_eq!(plan[6].graphs[0].shape, GraphShape::Density(1.0));
    }

    #[test]
    fn case_names() {
        assert_eq!("a".parse::<ReportCase>().expect("Known case"), ReportCase::ConstantEdges);
        assert_eq!("B".parse::<ReportCase>().expect("Known case"), ReportCase::Density);
        assert!("q".parse::<ReportCase>().is_err());
    }

    #[test]
    fn table_lines() {
        let row = |vertex_count, millis: Vec<u64>| {
            BenchmarkRow::new(
                vertex_count,
                0,
                EngineKind::all()
                    .iter()
                    .zip(millis)
                    .map(|(&kind, ms)| {
                        EngineResult::new(
                            kind,
                            Vec::new(),
                            GsDuration::from_duration(Duration::from_millis(ms)),
                        )
                    })
                    .collect(),
            )
        };
        let table = ReportTable::from_rows(
            "Density: 0.5 (unit: sec)".to_string(),
            &[row(500, vec![1, 2, 3]), row(1000, vec![1500, 20, 31])],
        );
        assert_eq!(
            table.lines(),
            vec![
                "Density: 0.5 (unit: sec)",
                "Vertices:\t500\t1000\t",
                "Tarjan:\t0.001\t1.500\t",
                "Gabow:\t0.002\t0.020\t",
                "KS:\t0.003\t0.031\t",
                "",
            ]
        );
    }

    #[test]
    fn generated_density_report_on_small_spectrum() {
        let tables = run_report(
            ReportCase::Density,
            &GraphSource::Generated { seed: 3 },
            &[20, 40],
            BenchmarkConfig::new(true, false),
        )
        .expect("Report should run");
        assert_eq!(tables.len(), 7);
        for table in &tables {
            assert_eq!(table.vertex_counts, vec![20, 40]);
            assert_eq!(table.timings.len(), 3);
            assert!(table.timings.iter().all(|(_, durations)| durations.len() == 2));
        }
    }

    #[test]
    fn missing_directory_is_rejected() {
        let result = run_report(
            ReportCase::ConstantEdges,
            &GraphSource::Directory("data/no_such_directory".to_string()),
            &VERTICES_SPECTRUM,
            BenchmarkConfig::default(),
        );
        assert!(matches!(result, Err(SccError::NotDirectory(_))));
    }
}
