use super::matrix::AdjacencyMatrix;
use super::traits::CycleObserver;
use common::types::CycleOutcome;

/// Traversal state of a vertex during depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Finds the first directed cycle, if any.
///
/// Iterative DFS with three-color marking, started from every unvisited vertex
/// in ascending order. An edge into an `InProgress` vertex closes a cycle,
/// which is rebuilt through the parent links. The search stops at the first
/// cycle found.
pub fn find_cycle(graph: &AdjacencyMatrix) -> CycleOutcome {
    let num_vertices = graph.vertex_count();
    let mut color = vec![Color::Unvisited; num_vertices];
    let mut parent: Vec<Option<usize>> = vec![None; num_vertices];

    for start in 0..num_vertices {
        if color[start] != Color::Unvisited {
            continue;
        }

        // Each frame is (vertex, next neighbor to scan).
        let mut stack = vec![(start, 0usize)];
        color[start] = Color::InProgress;

        while let Some(frame) = stack.last_mut() {
            let (u, next) = *frame;

            let Some(v) = (next..num_vertices).find(|&v| graph.has_edge(u, v)) else {
                color[u] = Color::Done;
                stack.pop();
                continue;
            };
            frame.1 = v + 1;

            match color[v] {
                Color::Unvisited => {
                    parent[v] = Some(u);
                    color[v] = Color::InProgress;
                    stack.push((v, 0));
                }
                Color::InProgress => return CycleOutcome::Found(trace_cycle(&parent, u, v)),
                Color::Done => {}
            }
        }
    }

    CycleOutcome::NotFound
}

/// Cycle closed by the back edge `from -> to`: `to ... from to`.
fn trace_cycle(parent: &[Option<usize>], from: usize, to: usize) -> Vec<usize> {
    let mut cycle = vec![to];
    let mut current = from;
    while current != to {
        cycle.push(current);
        match parent[current] {
            Some(p) => current = p,
            None => break,
        }
    }
    cycle.push(to);

    // Collected backwards from `from`; keep `to` at both ends.
    cycle.reverse();
    cycle
}

/// Runs [`find_cycle`] and hands any cycle found to `observer`.
pub fn find_cycle_with<O>(graph: &AdjacencyMatrix, observer: &mut O) -> CycleOutcome
where
    O: CycleObserver + ?Sized,
{
    let outcome = find_cycle(graph);
    if let CycleOutcome::Found(cycle) = &outcome {
        observer.on_cycle(cycle);
    }
    outcome
}
