use std::fmt;

/// Weight stored in a single adjacency-matrix cell. `0` means "no edge".
pub type Weight = i32;

/// Accumulated path length. Wider than [`Weight`] so that summing edge
/// weights along a path cannot overflow.
pub type Distance = i64;

/// Rendering shared by every "not found" style outcome at the string boundary.
pub const UNREACHABLE: &str = "-1";

/// Result of a single-source-to-target shortest path query.
///
/// Internally the three cases are kept apart; at the string boundary both
/// `Unreachable` and `NegativeCycle` render as `"-1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Vertices from source to target, both inclusive.
    Found(Vec<usize>),
    Unreachable,
    NegativeCycle,
}

impl PathOutcome {
    pub fn path(&self) -> Option<&[usize]> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for PathOutcome {
    /// Renders `"0->2->3"` for a found path and `"-1"` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathOutcome::Found(path) => f.write_str(&join(path, "->")),
            PathOutcome::Unreachable | PathOutcome::NegativeCycle => f.write_str(UNREACHABLE),
        }
    }
}

/// Result of directed cycle detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The first cycle found, closed by repeating its first vertex
    /// (e.g. `[0, 1, 2, 0]`).
    Found(Vec<usize>),
    NotFound,
}

impl CycleOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, CycleOutcome::Found(_))
    }

    /// Textual indicator used at the boundary: `"1"` when a cycle exists, `"0"` otherwise.
    pub fn indicator(&self) -> &'static str {
        if self.is_found() { "1" } else { "0" }
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.indicator())
    }
}

/// Two-coloring of the vertex set. Both sides are kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bipartition {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

/// Result of the bipartiteness test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BipartiteOutcome {
    Bipartite(Bipartition),
    NotBipartite,
}

impl BipartiteOutcome {
    pub fn is_bipartite(&self) -> bool {
        matches!(self, BipartiteOutcome::Bipartite(_))
    }
}

impl fmt::Display for BipartiteOutcome {
    /// Renders `"The graph is bipartite: A={0, 2}, B={1, 3}"` or `"0"`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BipartiteOutcome::Bipartite(parts) => write!(
                f,
                "The graph is bipartite: A={{{}}}, B={{{}}}",
                join(&parts.left, ", "),
                join(&parts.right, ", ")
            ),
            BipartiteOutcome::NotBipartite => f.write_str("0"),
        }
    }
}

/// Result of negative cycle detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegativeCycleOutcome {
    /// Cycle vertices in edge order. The closing repeat is added when rendering.
    Detected(Vec<usize>),
    NotDetected,
}

impl NegativeCycleOutcome {
    pub fn cycle(&self) -> Option<&[usize]> {
        match self {
            NegativeCycleOutcome::Detected(cycle) => Some(cycle),
            NegativeCycleOutcome::NotDetected => None,
        }
    }
}

impl fmt::Display for NegativeCycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NegativeCycleOutcome::Detected(cycle) => {
                write!(f, "Negative cycle detected: {}", join(cycle, " "))?;
                if let Some(first) = cycle.first() {
                    write!(f, " {}", first)?;
                }
                Ok(())
            }
            NegativeCycleOutcome::NotDetected => f.write_str("No negative cycle detected"),
        }
    }
}

fn join(vertices: &[usize], separator: &str) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
