//! Types and traits shared between the strongly connected component engines and their callers.

// Universally used types.
pub type VertexId = u32;
pub type SimpleEdge = (VertexId, VertexId);

/// One maximal strongly connected subset of vertices. The order of vertices inside a component is
/// an artifact of the algorithm that produced it and carries no meaning.
pub type Component = Vec<VertexId>;

/// Read-only view of a directed graph whose vertices are the dense ids `0..size()`.
///
/// Implementors guarantee that every id returned by `successors` is `< size()`. Engines rely on
/// this and index their per-vertex state with it directly.
///
/// # Examples
/// ```notest
/// impl DirectedGraph for AdjacencyList {
///     fn size(&self) -> usize { self.0.len() }
///     fn successors(&self, v: VertexId) -> &[VertexId] { &self.0[v as usize] }
/// }
/// ```
pub trait DirectedGraph {
    /// The number of vertices `n`.
    fn size(&self) -> usize;

    /// The successors of `v`, in insertion order, duplicates and self-loops included.
    ///
    /// Calling this with `v >= size()` is a contract violation and may panic.
    fn successors(&self, v: VertexId) -> &[VertexId];

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// The outcome of running one decomposition algorithm once.
pub trait SccDecomposition {
    /// Short human readable name of the algorithm.
    fn name(&self) -> &'static str;

    /// The components in the order the algorithm emitted them. Empty before the algorithm has
    /// been run.
    fn components(&self) -> &[Component];

    /// Wall-clock time spent inside the decomposition, in seconds. Zero before the algorithm has
    /// been run.
    fn elapsed_seconds(&self) -> f64;
}
