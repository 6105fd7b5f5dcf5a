use tracing::debug;

use super::config::GraphConfig;
use super::error::Error;
use super::types::{GraphSource, NamedGraph};
use matrix_graph_core::AdjacencyMatrix;

/// Serves the graphs written inline in the configuration file.
pub struct ConfigSource {
    graphs: Vec<GraphConfig>,
}

impl ConfigSource {
    pub fn new(graphs: Vec<GraphConfig>) -> Self {
        ConfigSource { graphs }
    }

    /// Loads one entry, checking that every path query names existing vertices.
    fn build(entry: &GraphConfig) -> Result<NamedGraph, Error> {
        let invalid = |source| Error::InvalidGraph {
            name: entry.name.clone(),
            source,
        };

        let graph = AdjacencyMatrix::from_rows(&entry.matrix).map_err(invalid)?;

        for &(s, v) in &entry.paths {
            graph.check_vertex(s).map_err(invalid)?;
            graph.check_vertex(v).map_err(invalid)?;
        }

        debug!(
            name = %entry.name,
            vertices = graph.vertex_count(),
            queries = entry.paths.len(),
            "graph built from configuration"
        );

        Ok(NamedGraph {
            name: entry.name.clone(),
            graph,
            paths: entry.paths.clone(),
        })
    }
}

impl GraphSource for ConfigSource {
    fn graphs(&self) -> Result<Vec<NamedGraph>, Error> {
        if self.graphs.is_empty() {
            return Err(Error::InvalidSource(
                "no [[graphs]] entries in configuration".to_string(),
            ));
        }

        self.graphs.iter().map(Self::build).collect()
    }
}
