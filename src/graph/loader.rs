use crate::error::{load_graph_error, SccError};
use crate::graph::GraphModel;
use crate::util::io::get_buf_reader;
use crate::util::timer::GsTimer;
use csv::Reader;
use log::{debug, info};
use scc_api::{SimpleEdge, VertexId};
use std::fs::File;
use std::io::BufReader;

pub const DEFAULT_SEPARATOR: u8 = b',';
pub const DEFAULT_HAS_HEADERS: bool = false;
/// Destination value marking a vertex that has no outgoing edge.
const NO_EDGE_MARKER: &str = "NULL";

/// Layout of a delimited edge file.
#[derive(new, Debug, Clone, Copy)]
pub struct EdgeFileFormat {
    pub separator: u8,
    pub has_headers: bool,
}

impl Default for EdgeFileFormat {
    fn default() -> Self {
        Self { separator: DEFAULT_SEPARATOR, has_headers: DEFAULT_HAS_HEADERS }
    }
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    src: String,
    dst: String,
}

/// Loads a graph from a file of `src,dst` records.
///
/// With `vertex_count` given, every id must be below it. Without it, the vertex count is one more
/// than the largest id found in the file (sources of `NULL` records included).
pub fn load_graph(
    file_path: &str,
    vertex_count: Option<usize>,
    format: EdgeFileFormat,
) -> Result<GraphModel, SccError> {
    info!("Loading edges from file '{}'", file_path);
    let timer = GsTimer::now();
    let mut reader = get_csv_reader(file_path, format)?;

    let mut edges: Vec<SimpleEdge> = Vec::new();
    let mut max_vertex_id: Option<VertexId> = None;
    let mut null_count = 0;
    for (index, record) in reader.deserialize::<EdgeRecord>().enumerate() {
        let line = index + 1;
        let record = record.map_err(|e| {
            load_graph_error(format!(
                "Could not read record at line {} in file '{}': {}",
                line, file_path, e
            ))
        })?;

        let src = parse_vertex_id(&record.src, line, file_path, vertex_count)?;
        max_vertex_id = max_vertex_id.max(Some(src));
        if record.dst == NO_EDGE_MARKER {
            null_count += 1;
            continue;
        }
        let dst = parse_vertex_id(&record.dst, line, file_path, vertex_count)?;
        max_vertex_id = max_vertex_id.max(Some(dst));
        edges.push((src, dst));
    }
    if null_count > 0 {
        debug!("Skipped {} records without a destination in '{}'", null_count, file_path);
    }

    let vertex_count =
        vertex_count.unwrap_or_else(|| max_vertex_id.map_or(0, |max_id| max_id as usize + 1));
    let graph = GraphModel::from_edges(vertex_count, edges)?;
    info!(
        "{} vertices and {} edges loaded in {}",
        vertex_count,
        graph.edge_count(),
        timer.elapsed().to_seconds_string()
    );
    Ok(graph)
}

fn parse_vertex_id(
    id_string: &str,
    line: usize,
    file_path: &str,
    vertex_count: Option<usize>,
) -> Result<VertexId, SccError> {
    if id_string.is_empty() {
        return Err(load_graph_error(format!(
            "Vertex id is empty at line {} in file '{}'",
            line, file_path
        )));
    }
    let vertex_id: VertexId = id_string.parse().map_err(|_| {
        load_graph_error(format!(
            "Could not parse vertex id '{}' at line {} in file '{}'",
            id_string, line, file_path
        ))
    })?;
    if let Some(vertex_count) = vertex_count {
        if vertex_id as usize >= vertex_count {
            return Err(load_graph_error(format!(
                "Vertex id {} at line {} in file '{}' is not below the vertex count {}",
                vertex_id, line, file_path, vertex_count
            )));
        }
    }
    Ok(vertex_id)
}

fn get_csv_reader(
    file_path: &str,
    format: EdgeFileFormat,
) -> Result<Reader<BufReader<File>>, SccError> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(format.has_headers)
        .delimiter(format.separator)
        .double_quote(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(get_buf_reader(file_path)?))
}

#[cfg(test)]
mod tests {
    use crate::error::SccError;
    use crate::graph::loader::{load_graph, EdgeFileFormat};
    use scc_api::DirectedGraph;

    #[test]
    fn loads_edges_with_given_vertex_count() {
        let graph = load_graph("data/test_data/cycle_with_tail.csv", Some(4), EdgeFileFormat::default())
            .expect("Graph should load");
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0), (2, 3)]);
    }

    #[test]
    fn null_destination_adds_vertex_but_no_edge() {
        let graph = load_graph("data/test_data/null_destinations.csv", None, EdgeFileFormat::default())
            .expect("Graph should load");
        assert_eq!(graph.size(), 6);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.successors(5).is_empty());
    }

    #[test]
    fn infers_vertex_count_from_largest_id() {
        let graph = load_graph("data/test_data/cycle_with_tail.csv", None, EdgeFileFormat::default())
            .expect("Graph should load");
        assert_eq!(graph.size(), 4);
    }

    #[test]
    fn custom_separator_and_headers() {
        let graph = load_graph(
            "data/test_data/two_cycles.tsv",
            Some(4),
            EdgeFileFormat::new(b'\t', true),
        )
        .expect("Graph should load");
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.successors(1), &[0, 2]);
    }

    #[test]
    fn rejects_malformed_input() {
        for (file, vertex_count) in vec![
            ("data/test_data/non_numeric.csv", None),
            ("data/test_data/missing_field.csv", None),
            ("data/test_data/cycle_with_tail.csv", Some(3)),
        ] {
            match load_graph(file, vertex_count, EdgeFileFormat::default()) {
                Err(SccError::LoadGraph(_)) => (),
                other => panic!("Expected a load error for '{}', got {:?}", file, other),
            }
        }
        assert!(matches!(
            load_graph("data/test_data/does_not_exist.csv", None, EdgeFileFormat::default()),
            Err(SccError::ReadFile(_, _))
        ));
    }
}
