use super::matrix::AdjacencyMatrix;
use super::traits::GraphSolver;
use common::{
    error::Error,
    types::{Distance, NegativeCycleOutcome, PathOutcome, Weight},
};
use tracing::{debug, trace};

/// Where Bellman-Ford starts its distance propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A single source vertex at distance 0; every other vertex starts unreached.
    Vertex(usize),
    /// Every vertex starts at distance 0. This simulates a virtual zero-weight
    /// source connected to all vertices, so cycles in any component are found.
    Everywhere,
}

/// Per-invocation distance and predecessor vectors.
///
/// `None` in `distance` stands for "not reached yet" and replaces the usual
/// infinity sentinel, so no addition is ever performed on an unreached vertex.
#[derive(Debug, Clone)]
pub struct Relaxation {
    pub distance: Vec<Option<Distance>>,
    pub predecessor: Vec<Option<usize>>,
}

impl Relaxation {
    fn new(num_vertices: usize, origin: Origin) -> Self {
        let mut distance = vec![None; num_vertices];
        match origin {
            Origin::Vertex(source) => distance[source] = Some(0),
            Origin::Everywhere => distance.iter_mut().for_each(|d| *d = Some(0)),
        }

        Self {
            distance,
            predecessor: vec![None; num_vertices],
        }
    }

    /// Distance `u -> v` would give `v`, if it beats the current one.
    fn improvement(&self, u: usize, v: usize, weight: Weight) -> Option<Distance> {
        let candidate = self.distance[u]?.saturating_add(Distance::from(weight));
        self.distance[v]
            .is_none_or(|current| candidate < current)
            .then_some(candidate)
    }

    fn try_relax(&mut self, u: usize, v: usize, weight: Weight) -> bool {
        match self.improvement(u, v, weight) {
            Some(candidate) => {
                self.distance[v] = Some(candidate);
                self.predecessor[v] = Some(u);
                true
            }
            None => false,
        }
    }
}

/// Solver implementing Bellman-Ford over the dense adjacency matrix for
/// single-source shortest paths and negative cycle detection.
pub struct BellmanFordSolver;

impl BellmanFordSolver {
    /// Runs `V - 1` relaxation passes over every edge of the matrix.
    ///
    /// A pass that changes nothing ends the loop early. Graphs with fewer
    /// than two vertices get no pass at all.
    ///
    /// # Errors
    /// Returns `Error::VertexOutOfRange` if `origin` names a vertex outside the graph.
    pub fn relax(&self, graph: &AdjacencyMatrix, origin: Origin) -> Result<Relaxation, Error> {
        if let Origin::Vertex(source) = origin {
            graph.check_vertex(source)?;
        }

        let num_vertices = graph.vertex_count();
        let mut state = Relaxation::new(num_vertices, origin);

        for pass in 1..num_vertices {
            let mut updated = false;
            for u in 0..num_vertices {
                for (v, weight) in graph.out_neighbors(u) {
                    updated |= state.try_relax(u, v, weight);
                }
            }

            if !updated {
                trace!(pass, "relaxation converged");
                break;
            }
        }

        Ok(state)
    }

    /// First edge `(u, v, weight)` that can still be relaxed, in row-major order.
    ///
    /// After [`BellmanFordSolver::relax`] such an edge proves a negative cycle.
    pub fn find_relaxable_edge(
        &self,
        graph: &AdjacencyMatrix,
        state: &Relaxation,
    ) -> Option<(usize, usize, Weight)> {
        (0..graph.vertex_count()).find_map(|u| {
            graph
                .out_neighbors(u)
                .find(|&(v, weight)| state.improvement(u, v, weight).is_some())
                .map(|(v, weight)| (u, v, weight))
        })
    }

    /// True if any negative cycle exists anywhere in the graph.
    pub fn contains_negative_cycle(&self, graph: &AdjacencyMatrix) -> Result<bool, Error> {
        let state = self.relax(graph, Origin::Everywhere)?;
        Ok(self.find_relaxable_edge(graph, &state).is_some())
    }

    /// Reconstructs a negative cycle from the predecessor vector.
    ///
    /// `start` is the vertex relaxed by the extra pass. It may sit downstream
    /// of the cycle, so predecessors are walked `V` times first to land on a
    /// vertex inside the cycle. The cycle is then collected backwards and
    /// returned in edge order (each vertex is the predecessor of the next,
    /// the last one closing back to the first).
    ///
    /// # Errors
    /// Returns `Error::VertexOutOfRange` if `start` is out of bounds, or
    /// `Error::CycleReconstructionFailed` if the predecessor chain breaks.
    pub fn reconstruct_cycle(
        &self,
        start: usize,
        predecessor: &[Option<usize>],
    ) -> Result<Vec<usize>, Error> {
        let num_vertices = predecessor.len();
        if start >= num_vertices {
            return Err(Error::VertexOutOfRange {
                index: start,
                vertices: num_vertices,
            });
        }

        let mut trace_vertex = start;
        for _ in 0..num_vertices {
            trace_vertex = predecessor[trace_vertex].ok_or(Error::CycleReconstructionFailed)?;
        }

        let cycle_start = trace_vertex;
        let mut collected = Vec::new();
        let mut current = cycle_start;

        loop {
            collected.push(current);
            current = predecessor[current].ok_or(Error::CycleReconstructionFailed)?;

            if current == cycle_start {
                break;
            }
            if collected.len() > num_vertices {
                return Err(Error::CycleReconstructionFailed);
            }
        }

        collected.reverse();
        Ok(collected)
    }

    /// Walks predecessors back from `target` to `source`.
    fn trace_path(&self, state: &Relaxation, source: usize, target: usize) -> PathOutcome {
        let mut path = vec![target];
        let mut current = target;

        while current != source {
            match state.predecessor[current] {
                Some(prev) if path.len() <= state.predecessor.len() => {
                    path.push(prev);
                    current = prev;
                }
                _ => return PathOutcome::Unreachable,
            }
        }

        path.reverse();
        PathOutcome::Found(path)
    }
}

impl GraphSolver for BellmanFordSolver {
    /// Bellman-Ford from `source`, then predecessor walk from `target`.
    ///
    /// A negative cycle anywhere in the graph makes every query
    /// `PathOutcome::NegativeCycle`.
    fn shortest_path(
        &self,
        graph: &AdjacencyMatrix,
        source: usize,
        target: usize,
    ) -> Result<PathOutcome, Error> {
        graph.check_vertex(source)?;
        graph.check_vertex(target)?;

        if self.contains_negative_cycle(graph)? {
            debug!(source, target, "negative cycle present, no shortest path");
            return Ok(PathOutcome::NegativeCycle);
        }

        let state = self.relax(graph, Origin::Vertex(source))?;
        Ok(self.trace_path(&state, source, target))
    }

    /// Bellman-Ford from `source` followed by one extra pass; the first edge
    /// that still relaxes is relaxed once more and its target is handed to
    /// [`BellmanFordSolver::reconstruct_cycle`].
    fn find_negative_cycle(
        &self,
        graph: &AdjacencyMatrix,
        source: usize,
    ) -> Result<NegativeCycleOutcome, Error> {
        let mut state = self.relax(graph, Origin::Vertex(source))?;

        let Some((u, v, weight)) = self.find_relaxable_edge(graph, &state) else {
            return Ok(NegativeCycleOutcome::NotDetected);
        };

        state.try_relax(u, v, weight);
        let cycle = self.reconstruct_cycle(v, &state.predecessor)?;
        debug!(?cycle, "negative cycle detected");

        Ok(NegativeCycleOutcome::Detected(cycle))
    }
}
