use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input rows do not form a square matrix: `row` has `columns` entries
    /// while the matrix has `rows` rows.
    NotSquare {
        rows: usize,
        row: usize,
        columns: usize,
    },

    /// A non-zero diagonal entry, i.e. an edge from a vertex to itself.
    SelfLoop(usize),

    /// Indicates an attempt to access a vertex index that exceeds the graph size (V).
    VertexOutOfRange { index: usize, vertices: usize },

    /// Failed to trace the full cycle path, usually due to broken predecessor chains.
    CycleReconstructionFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotSquare { rows, row, columns } => write!(
                f,
                "Invalid graph: not a square matrix (row {} has {} columns, expected {}).",
                row, columns, rows
            ),

            Error::SelfLoop(v) => write!(
                f,
                "Invalid graph: self-loop present at vertex {}.",
                v
            ),

            Error::VertexOutOfRange { index, vertices } => write!(
                f,
                "Vertex index {} is out of range for a graph with {} vertices.",
                index, vertices
            ),

            Error::CycleReconstructionFailed => write!(
                f,
                "Cycle path reconstruction failed due to broken predecessor chain."
            ),
        }
    }
}

impl std::error::Error for Error {}
