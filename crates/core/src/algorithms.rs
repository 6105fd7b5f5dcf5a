//! String and boolean boundary of the algorithm suite.
//!
//! Every function here delegates to the typed implementation in its own
//! module and renders the outcome to the textual contract callers rely on:
//! `"0"` / `"1"` indicators, `"-1"` for a missing path, and the bipartition
//! and negative cycle sentences.

use tracing::info;

use super::matrix::AdjacencyMatrix;
use super::solver::BellmanFordSolver;
use super::traits::{CycleObserver, GraphSolver};
use super::{bipartite, connectivity, cycle};
use common::{error::Error, types::NegativeCycleOutcome};

/// `true` iff every vertex is reachable from vertex 0 (empty graph: `true`).
pub fn is_connected(graph: &AdjacencyMatrix) -> bool {
    connectivity::is_connected(graph)
}

/// Shortest path `source -> target` rendered as `"0->2->3"`, or `"-1"` when
/// the target is unreachable or the graph holds a negative cycle.
///
/// # Errors
/// Returns `Error::VertexOutOfRange` if either index is not a vertex.
pub fn shortest_path(graph: &AdjacencyMatrix, source: usize, target: usize) -> Result<String, Error> {
    BellmanFordSolver
        .shortest_path(graph, source, target)
        .map(|outcome| outcome.to_string())
}

/// `"1"` if the graph contains a directed cycle, `"0"` otherwise.
///
/// The first cycle found is reported on the diagnostic log.
pub fn is_contains_cycle(graph: &AdjacencyMatrix) -> String {
    is_contains_cycle_with(graph, &mut |cycle: &[usize]| {
        info!(cycle = %render_cycle(cycle), "cycle found");
    })
}

/// Like [`is_contains_cycle`], with the found cycle handed to `observer`.
pub fn is_contains_cycle_with<O>(graph: &AdjacencyMatrix, observer: &mut O) -> String
where
    O: CycleObserver + ?Sized,
{
    cycle::find_cycle_with(graph, observer).indicator().to_string()
}

/// `"The graph is bipartite: A={..}, B={..}"` or `"0"`.
pub fn is_bipartite(graph: &AdjacencyMatrix) -> String {
    bipartite::compute_bipartition(graph).to_string()
}

/// `"Negative cycle detected: ..."` or `"No negative cycle detected"`, searching from vertex 0.
///
/// Graphs with fewer than two vertices cannot hold a cycle and return early.
///
/// # Errors
/// Returns `Error::CycleReconstructionFailed` if the predecessor chain breaks.
pub fn negative_cycle(graph: &AdjacencyMatrix) -> Result<String, Error> {
    if graph.vertex_count() < 2 {
        return Ok(NegativeCycleOutcome::NotDetected.to_string());
    }

    BellmanFordSolver
        .find_negative_cycle(graph, 0)
        .map(|outcome| outcome.to_string())
}

/// `0->1->2->0`
pub fn render_cycle(cycle: &[usize]) -> String {
    cycle
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("->")
}
