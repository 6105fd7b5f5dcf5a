use clap::ValueEnum;

use super::error::Error;
use matrix_graph_core::AdjacencyMatrix;

/// A contract for anything that supplies graphs to the report.
///
/// Decouples the reporting loop from where the matrices come from
/// (inline configuration vs. random generation).
pub trait GraphSource {
    fn graphs(&self) -> Result<Vec<NamedGraph>, Error>;
}

/// A validated graph with the shortest path queries to run on it.
#[derive(Debug, Clone)]
pub struct NamedGraph {
    pub name: String,
    pub graph: AdjacencyMatrix,
    pub paths: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Graphs listed under `[[graphs]]` in the configuration file
    Config,
    /// A single graph generated from the `[random]` section
    Random,
}
