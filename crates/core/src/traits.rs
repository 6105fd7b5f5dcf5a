use super::matrix::AdjacencyMatrix;
use common::{
    error::Error,
    types::{NegativeCycleOutcome, PathOutcome},
};

/// Trait for weighted-graph solvers supporting negative edge weights.
pub trait GraphSolver {
    /// Shortest path from `source` to `target`.
    ///
    /// Returns `Ok(PathOutcome::Found(path))` with the vertex sequence,
    /// `Ok(PathOutcome::Unreachable)` if `target` cannot be reached,
    /// `Ok(PathOutcome::NegativeCycle)` if the graph holds a negative cycle,
    /// or `Err(e)` if an index is out of range.
    fn shortest_path(
        &self,
        graph: &AdjacencyMatrix,
        source: usize,
        target: usize,
    ) -> Result<PathOutcome, Error>;

    /// Detects a negative cycle reachable from `source`.
    fn find_negative_cycle(
        &self,
        graph: &AdjacencyMatrix,
        source: usize,
    ) -> Result<NegativeCycleOutcome, Error>;
}

/// Hook receiving the cycle found by directed cycle detection.
///
/// The cycle is passed closed, e.g. `[0, 1, 2, 0]`.
pub trait CycleObserver {
    fn on_cycle(&mut self, cycle: &[usize]);
}

impl<F> CycleObserver for F
where
    F: FnMut(&[usize]),
{
    fn on_cycle(&mut self, cycle: &[usize]) {
        self(cycle)
    }
}
