/*!
# Bipartiteness

2-coloring by breadth-first search. Direction is ignored: `u` and `w` are
adjacent if either `u -> w` or `w -> u` carries a non-zero weight.
*/

use std::collections::VecDeque;

use super::matrix::AdjacencyMatrix;
use common::types::{BipartiteOutcome, Bipartition};

/// Side of the bipartition a vertex has been colored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Undirected view of the matrix.
fn adjacent(graph: &AdjacencyMatrix, u: usize, w: usize) -> bool {
    graph.has_edge(u, w) || graph.has_edge(w, u)
}

/// Computes a bipartition of the graph, if one exists.
///
/// Every uncolored vertex, in ascending order, starts a BFS on the left side;
/// neighbors take the opposite side. A neighbor already on the current
/// vertex's side proves the graph is not bipartite and ends the search.
pub fn compute_bipartition(graph: &AdjacencyMatrix) -> BipartiteOutcome {
    let num_vertices = graph.vertex_count();
    let mut side: Vec<Option<Side>> = vec![None; num_vertices];
    let mut queue = VecDeque::with_capacity(num_vertices);

    for start in 0..num_vertices {
        if side[start].is_some() {
            continue;
        }

        side[start] = Some(Side::Left);
        queue.push_back((start, Side::Left));

        // Queued vertices carry the side they were colored with.
        while let Some((vertex, current)) = queue.pop_front() {
            for adj in (0..num_vertices).filter(|&adj| adjacent(graph, vertex, adj)) {
                match side[adj] {
                    None => {
                        side[adj] = Some(current.opposite());
                        queue.push_back((adj, current.opposite()));
                    }
                    Some(other) if other == current => return BipartiteOutcome::NotBipartite,
                    Some(_) => {}
                }
            }
        }
    }

    let (left, right): (Vec<usize>, Vec<usize>) =
        (0..num_vertices).partition(|&v| side[v] == Some(Side::Left));

    BipartiteOutcome::Bipartite(Bipartition { left, right })
}

/// Tests whether the graph is bipartite.
pub fn is_bipartite(graph: &AdjacencyMatrix) -> bool {
    compute_bipartition(graph).is_bipartite()
}
