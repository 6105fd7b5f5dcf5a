use common::types::{BipartiteOutcome, CycleOutcome, NegativeCycleOutcome, PathOutcome};
use matrix_graph_core::AdjacencyMatrix;
use matrix_graph_core::algorithms;
use matrix_graph_core::bipartite::compute_bipartition;
use matrix_graph_core::cycle::find_cycle;
use matrix_graph_core::solver::BellmanFordSolver;
use matrix_graph_core::traits::GraphSolver;
use proptest::prelude::*;
use proptest::strategy::Strategy;

const NUM_VERTICES_STRATEGY: std::ops::Range<usize> = 0usize..8;

/// Square matrices with a zero diagonal and roughly half of the cells empty.
fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<i32>>> {
    NUM_VERTICES_STRATEGY.prop_flat_map(|n| {
        let cell = prop_oneof![Just(0i32), -5i32..10];
        prop::collection::vec(prop::collection::vec(cell, n), n).prop_map(|mut rows| {
            for (i, row) in rows.iter_mut().enumerate() {
                row[i] = 0;
            }
            rows
        })
    })
}

/// Graph plus a valid (source, target) pair.
fn query_strategy() -> impl Strategy<Value = (Vec<Vec<i32>>, usize, usize)> {
    matrix_strategy()
        .prop_filter("needs at least one vertex", |rows| !rows.is_empty())
        .prop_flat_map(|rows| {
            let n = rows.len();
            (Just(rows), 0..n, 0..n)
        })
}

fn assert_follows_edges(graph: &AdjacencyMatrix, walk: &[usize]) -> Result<i64, TestCaseError> {
    let mut total = 0i64;
    for pair in walk.windows(2) {
        let weight = graph.edge_weight(pair[0], pair[1]).unwrap();
        prop_assert_ne!(weight, 0, "walk uses missing edge {} -> {}", pair[0], pair[1]);
        total += i64::from(weight);
    }
    Ok(total)
}

proptest! {
    /// Property: every square zero-diagonal matrix loads
    #[test]
    fn square_zero_diagonal_loads(rows in matrix_strategy()) {
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();
        prop_assert_eq!(graph.vertex_count(), rows.len());
        prop_assert_eq!(graph.rows(), rows);
    }

    /// Property: a non-zero diagonal entry is rejected
    #[test]
    fn self_loop_rejected(
        (rows, v, _) in query_strategy(),
        weight in prop_oneof![-5i32..0, 1i32..10],
    ) {
        let mut rows = rows;
        rows[v][v] = weight;
        prop_assert!(AdjacencyMatrix::from_rows(&rows).is_err());
    }

    /// Property: a row of the wrong length is rejected
    #[test]
    fn ragged_row_rejected((rows, v, _) in query_strategy(), grow in any::<bool>()) {
        let mut rows = rows;
        if grow { rows[v].push(1) } else { rows[v].pop(); }
        prop_assert!(AdjacencyMatrix::from_rows(&rows).is_err());
    }

    /// Property: edge count equals the number of non-zero cells
    #[test]
    fn edge_count_matches_cells(rows in matrix_strategy()) {
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();
        let expected = rows.iter().flatten().filter(|&&w| w != 0).count();
        prop_assert_eq!(graph.edge_count(), expected);
        let summary = format!("Graph with {} vertices and {} edges.\n", rows.len(), expected);
        prop_assert!(graph.describe().ends_with(&summary));
    }

    /// Property: every algorithm gives the same answer twice
    #[test]
    fn algorithms_are_idempotent((rows, s, v) in query_strategy()) {
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();

        prop_assert_eq!(algorithms::is_connected(&graph), algorithms::is_connected(&graph));
        prop_assert_eq!(
            algorithms::shortest_path(&graph, s, v),
            algorithms::shortest_path(&graph, s, v)
        );
        prop_assert_eq!(algorithms::is_contains_cycle(&graph), algorithms::is_contains_cycle(&graph));
        prop_assert_eq!(algorithms::is_bipartite(&graph), algorithms::is_bipartite(&graph));
        prop_assert_eq!(algorithms::negative_cycle(&graph), algorithms::negative_cycle(&graph));
    }

    /// Property: a found path runs from source to target along existing edges
    #[test]
    fn found_paths_are_walks((rows, s, v) in query_strategy()) {
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();

        if let PathOutcome::Found(path) = BellmanFordSolver.shortest_path(&graph, s, v).unwrap() {
            prop_assert_eq!(path.first(), Some(&s));
            prop_assert_eq!(path.last(), Some(&v));
            prop_assert!(path.len() <= graph.vertex_count());
            assert_follows_edges(&graph, &path)?;
        }
    }

    /// Property: the path is at least as short as every direct edge
    #[test]
    fn path_beats_direct_edge((rows, s, v) in query_strategy()) {
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();
        let direct = graph.edge_weight(s, v).unwrap();

        if let PathOutcome::Found(path) = BellmanFordSolver.shortest_path(&graph, s, v).unwrap() {
            let total = assert_follows_edges(&graph, &path)?;
            if direct != 0 {
                prop_assert!(total <= i64::from(direct));
            }
        }
    }

    /// Property: a directed cycle closes and follows existing edges
    #[test]
    fn found_cycles_are_closed(rows in matrix_strategy()) {
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();

        if let CycleOutcome::Found(cycle) = find_cycle(&graph) {
            prop_assert!(cycle.len() >= 3);
            prop_assert_eq!(cycle.first(), cycle.last());
            assert_follows_edges(&graph, &cycle)?;
        }
    }

    /// Property: upper-triangular matrices are acyclic
    #[test]
    fn upper_triangular_is_acyclic(rows in matrix_strategy()) {
        let mut rows = rows;
        for (i, row) in rows.iter_mut().enumerate() {
            for cell in row.iter_mut().take(i) {
                *cell = 0;
            }
        }
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();

        prop_assert_eq!(find_cycle(&graph), CycleOutcome::NotFound);
        prop_assert_eq!(
            algorithms::negative_cycle(&graph).unwrap(),
            "No negative cycle detected"
        );
    }

    /// Property: a bipartition covers every vertex once with no edge inside a side
    #[test]
    fn bipartitions_are_proper(rows in matrix_strategy()) {
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();

        if let BipartiteOutcome::Bipartite(parts) = compute_bipartition(&graph) {
            let mut all: Vec<usize> = parts.left.iter().chain(&parts.right).copied().collect();
            all.sort_unstable();
            prop_assert_eq!(all, (0..graph.vertex_count()).collect::<Vec<_>>());

            for side in [&parts.left, &parts.right] {
                prop_assert!(side.windows(2).all(|w| w[0] < w[1]));
                for &a in side.iter() {
                    for &b in side.iter() {
                        prop_assert_eq!(graph.edge_weight(a, b).unwrap(), 0);
                    }
                }
            }
        }
    }

    /// Property: a reported negative cycle follows existing edges with a negative total
    #[test]
    fn negative_cycles_are_negative(rows in matrix_strategy()) {
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();
        prop_assume!(graph.vertex_count() >= 2);

        let outcome = BellmanFordSolver.find_negative_cycle(&graph, 0).unwrap();
        if let NegativeCycleOutcome::Detected(cycle) = outcome {
            let mut closed = cycle.clone();
            closed.push(cycle[0]);
            let total = assert_follows_edges(&graph, &closed)?;
            prop_assert!(total < 0);

            // Any negative cycle also poisons shortest paths.
            prop_assert_eq!(
                BellmanFordSolver.shortest_path(&graph, 0, 0).unwrap(),
                PathOutcome::NegativeCycle
            );
        }
    }
}
