use crate::computations::EngineResult;
use crate::error::SccError;
use hashbrown::HashSet;
use itertools::Itertools;
use log::info;
use scc_api::{Component, VertexId};

const PRINT_COUNT: usize = 3;

/// Sorts every component and then the list of components, so that two decompositions into the
/// same vertex sets compare equal regardless of emission order.
pub fn canonical_partition(components: &[Component]) -> Vec<Component> {
    components
        .iter()
        .map(|component| component.iter().copied().sorted().collect::<Vec<_>>())
        .sorted()
        .collect()
}

/// Checks that `components` put every vertex of `0..vertex_count` into exactly one non-empty
/// component.
pub fn check_partition(
    engine: &'static str,
    vertex_count: usize,
    components: &[Component],
) -> Result<(), SccError> {
    let mut seen = vec![false; vertex_count];
    for component in components {
        if component.is_empty() {
            return Err(SccError::InvalidPartition(engine, "empty component".to_string()));
        }
        for &vertex in component {
            match seen.get_mut(vertex as usize) {
                None => {
                    return Err(SccError::InvalidPartition(
                        engine,
                        format!("vertex {} is not in the graph", vertex),
                    ))
                }
                Some(true) => {
                    return Err(SccError::InvalidPartition(
                        engine,
                        format!("vertex {} appears more than once", vertex),
                    ))
                }
                Some(flag) => *flag = true,
            }
        }
    }
    if let Some(missing) = seen.iter().position(|&flag| !flag) {
        return Err(SccError::InvalidPartition(
            engine,
            format!("vertex {} is missing", missing),
        ));
    }
    Ok(())
}

/// Checks that all results partition the graph identically, reporting the first disagreeing pair.
pub fn compare_results(vertex_count: usize, results: &[EngineResult]) -> Result<(), SccError> {
    for result in results {
        check_partition(result.kind.description(), vertex_count, &result.components)?;
    }
    let mut canonical = results.iter().map(|result| {
        let components: HashSet<Vec<VertexId>> =
            canonical_partition(&result.components).into_iter().collect();
        (result.kind, components)
    });
    let (first_kind, first_components) = match canonical.next() {
        Some(first) => first,
        None => return Ok(()),
    };
    for (kind, components) in canonical {
        let missing = first_components.difference(&components).sorted().collect_vec();
        let extra = components.difference(&first_components).sorted().collect_vec();
        if missing.is_empty() && extra.is_empty() {
            continue;
        }
        info!(
            "{} components [e.g.: {:?}] of {} not present in {}",
            missing.len(),
            missing.iter().take(PRINT_COUNT).collect_vec(),
            first_kind,
            kind
        );
        info!(
            "{} components [e.g.: {:?}] of {} not present in {}",
            extra.len(),
            extra.iter().take(PRINT_COUNT).collect_vec(),
            kind,
            first_kind
        );
        return Err(SccError::ResultsMismatch(first_kind.description(), kind.description()));
    }
    Ok(())
}
