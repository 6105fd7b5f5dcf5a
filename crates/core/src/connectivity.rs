use super::matrix::AdjacencyMatrix;

/// Vertices reachable from `start` along outgoing edges, as a visited mask.
///
/// Depth-first with an explicit stack.
pub fn reachable_from(graph: &AdjacencyMatrix, start: usize) -> Vec<bool> {
    let num_vertices = graph.vertex_count();
    let mut visited = vec![false; num_vertices];
    if start >= num_vertices {
        return visited;
    }

    let mut stack = vec![start];
    while let Some(vertex) = stack.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;

        stack.extend(
            graph
                .out_neighbors(vertex)
                .map(|(adj, _)| adj)
                .filter(|&adj| !visited[adj]),
        );
    }

    visited
}

/// True iff every vertex can be reached from vertex 0 by following directed edges.
///
/// This is forward reachability from vertex 0, not strong connectivity: in
/// `0 -> 1` vertex 0 is unreachable from 1, yet the graph counts as connected.
/// The empty graph is connected.
pub fn is_connected(graph: &AdjacencyMatrix) -> bool {
    if graph.is_empty() {
        return true;
    }

    reachable_from(graph, 0).into_iter().all(|seen| seen)
}

#[cfg(test)]
mod connectivity_tests {
    use super::*;

    fn build_graph(rows: &[Vec<i32>]) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn empty_graph_is_connected() {
        assert!(is_connected(&AdjacencyMatrix::new()));
    }

    #[test]
    fn single_vertex_is_connected() {
        assert!(is_connected(&build_graph(&[vec![0]])));
    }

    #[test]
    fn two_isolated_vertices() {
        assert!(!is_connected(&build_graph(&[vec![0, 0], vec![0, 0]])));
    }

    #[test]
    fn undirected_path() {
        let graph = build_graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        assert!(is_connected(&graph));
    }

    #[test]
    fn forward_reachability_from_vertex_zero_only() {
        // 0 -> 1 -> 2, nothing comes back.
        let graph = build_graph(&[vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
        assert!(is_connected(&graph));

        // 1 -> 0 -> 2: vertex 1 cannot be reached from 0.
        let graph = build_graph(&[vec![0, 0, 1], vec![1, 0, 0], vec![0, 0, 0]]);
        assert!(!is_connected(&graph));
    }

    #[test]
    fn negative_weights_count_as_edges() {
        let graph = build_graph(&[vec![0, -2], vec![0, 0]]);
        assert!(is_connected(&graph));
    }

    #[test]
    fn disconnected_component() {
        let graph = build_graph(&[
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 1, 0],
        ]);
        assert!(!is_connected(&graph));
        assert_eq!(reachable_from(&graph, 2), vec![false, false, true, true]);
    }

    #[test]
    fn reachable_from_out_of_range_start() {
        let graph = build_graph(&[vec![0, 1], vec![1, 0]]);
        assert_eq!(reachable_from(&graph, 5), vec![false, false]);
    }
}
