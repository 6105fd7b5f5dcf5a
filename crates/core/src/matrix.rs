use std::fmt;

use common::error::Error;
use common::types::Weight;
use tracing::{debug, warn};

/// Dense directed graph stored as a V×V adjacency matrix.
///
/// The matrix is kept in a single row-major buffer:
/// - `weights[u * num_vertices + v]` → weight of edge `u -> v`
/// - a weight of `0` means the edge is absent
///
/// The diagonal is always zero (no self-loops). Algorithms borrow the matrix
/// read-only; the only mutation is a wholesale [`AdjacencyMatrix::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    num_vertices: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Creates an empty graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from nested rows (`rows[i][j]` is the weight of `i -> j`).
    ///
    /// # Errors
    /// Same as [`AdjacencyMatrix::load`].
    pub fn from_rows<R: AsRef<[Weight]>>(rows: &[R]) -> Result<Self, Error> {
        let mut graph = Self::new();
        graph.load(rows)?;
        Ok(graph)
    }

    /// Replaces the whole matrix with `rows`.
    ///
    /// Validation runs before anything is touched, so on error the previous
    /// contents are kept as they were.
    ///
    /// # Errors
    /// - `Error::NotSquare` if any row length differs from the row count.
    /// - `Error::SelfLoop(i)` if `rows[i][i]` is non-zero.
    pub fn load<R: AsRef<[Weight]>>(&mut self, rows: &[R]) -> Result<(), Error> {
        let n = rows.len();

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                warn!(row = i, columns = row.len(), rows = n, "rejected non-square matrix");
                return Err(Error::NotSquare {
                    rows: n,
                    row: i,
                    columns: row.len(),
                });
            }
            if row[i] != 0 {
                warn!(vertex = i, "rejected matrix with a self-loop");
                return Err(Error::SelfLoop(i));
            }
        }

        let mut weights = Vec::with_capacity(n * n);
        for row in rows {
            weights.extend_from_slice(row.as_ref());
        }

        self.num_vertices = n;
        self.weights = weights;

        debug!(vertices = n, edges = self.edge_count(), "graph loaded");
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.num_vertices
    }

    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    /// Number of non-zero cells. Edges are directed, so an undirected pair counts twice.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0).count()
    }

    /// Bounds-checked lookup of the weight of `from -> to` (`0` = no edge).
    ///
    /// # Errors
    /// Returns `Error::VertexOutOfRange` if either index is `>= vertex_count()`.
    pub fn edge_weight(&self, from: usize, to: usize) -> Result<Weight, Error> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.weight(from, to))
    }

    /// Fails with `Error::VertexOutOfRange` unless `v` names a vertex of this graph.
    pub fn check_vertex(&self, v: usize) -> Result<(), Error> {
        if v < self.num_vertices {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                index: v,
                vertices: self.num_vertices,
            })
        }
    }

    /// Unchecked weight lookup for the algorithm hot loops. Callers keep
    /// indices below `vertex_count()`.
    #[inline]
    pub(crate) fn weight(&self, from: usize, to: usize) -> Weight {
        self.weights[from * self.num_vertices + to]
    }

    #[inline]
    pub(crate) fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to) != 0
    }

    /// Outgoing edges of `u` as `(target, weight)`, in ascending target order.
    /// Callers keep `u` below `vertex_count()`.
    pub(crate) fn out_neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let start = u * self.num_vertices;
        self.weights[start..start + self.num_vertices]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(v, &w)| (v, w))
    }

    /// Copy of the matrix as nested rows.
    pub fn rows(&self) -> Vec<Vec<Weight>> {
        if self.num_vertices == 0 {
            return Vec::new();
        }
        self.weights
            .chunks(self.num_vertices)
            .map(<[Weight]>::to_vec)
            .collect()
    }

    /// Human-readable dump: one space-separated line per row followed by
    /// `Graph with V vertices and E edges.`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        writeln!(
            f,
            "Graph with {} vertices and {} edges.",
            self.num_vertices,
            self.edge_count()
        )
    }
}
