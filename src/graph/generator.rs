//! Seeded random digraphs for benchmark runs that do not come with graph files.

use crate::error::{generic_error, SccError};
use crate::graph::GraphModel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scc_api::VertexId;
use std::convert::TryFrom;

/// `edge_count` edges with uniformly random endpoints. Self-loops and parallel edges may occur.
pub fn random_with_edges(
    vertex_count: usize,
    edge_count: usize,
    seed: u64,
) -> Result<GraphModel, SccError> {
    if vertex_count == 0 && edge_count > 0 {
        return Err(generic_error(format!("Cannot place {} edges on an empty graph", edge_count)));
    }
    let upper = to_vertex_id(vertex_count)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = GraphModel::new(vertex_count);
    for _ in 0..edge_count {
        graph.add_edge(rng.gen_range(0..upper), rng.gen_range(0..upper))?;
    }
    Ok(graph)
}

/// Every ordered pair of distinct vertices becomes an edge with probability `density`.
pub fn random_with_density(
    vertex_count: usize,
    density: f64,
    seed: u64,
) -> Result<GraphModel, SccError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(generic_error(format!("Density {} is not within [0, 1]", density)));
    }
    let upper = to_vertex_id(vertex_count)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = GraphModel::new(vertex_count);
    for src in 0..upper {
        for dst in (0..upper).filter(|&dst| dst != src) {
            if rng.gen_bool(density) {
                graph.add_edge(src, dst)?;
            }
        }
    }
    Ok(graph)
}

fn to_vertex_id(vertex_count: usize) -> Result<VertexId, SccError> {
    VertexId::try_from(vertex_count)
        .map_err(|_| generic_error(format!("Vertex count {} is too large", vertex_count)))
}

#[cfg(test)]
mod tests {
    use crate::graph::generator::{random_with_density, random_with_edges};

    #[test]
    fn edge_count_is_exact_and_seeded() {
        let graph = random_with_edges(50, 300, 7).expect("Valid parameters");
        assert_eq!(graph.edge_count(), 300);
        assert_eq!(graph.vertex_count(), 50);
        assert_eq!(graph, random_with_edges(50, 300, 7).expect("Valid parameters"));
        assert!(random_with_edges(0, 1, 7).is_err());
        assert_eq!(random_with_edges(0, 0, 7).expect("Valid parameters").edge_count(), 0);
    }

    #[test]
    fn density_extremes() {
        assert_eq!(random_with_density(20, 0.0, 1).expect("Valid density").edge_count(), 0);
        let complete = random_with_density(20, 1.0, 1).expect("Valid density");
        assert_eq!(complete.edge_count(), 20 * 19);
        assert!(complete.edges().all(|(src, dst)| src != dst));
    }

    #[test]
    fn invalid_density_is_rejected() {
        assert!(random_with_density(10, -0.1, 1).is_err());
        assert!(random_with_density(10, 1.5, 1).is_err());
        assert!(random_with_density(10, f64::NAN, 1).is_err());
    }
}
