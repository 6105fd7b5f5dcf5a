use tracing::info;

use super::config::ReportConfig;
use super::error::Error;
use super::types::NamedGraph;
use matrix_graph_core::algorithms;

/// Runs the whole algorithm suite on a graph and renders the results.
pub struct Reporter {
    describe_graphs: bool,
    default_queries: bool,
}

impl Reporter {
    pub fn new(config: &ReportConfig) -> Self {
        Reporter {
            describe_graphs: config.describe_graphs,
            default_queries: config.default_queries,
        }
    }

    /// Path queries for `named`: its own list, or `0 -> V-1` when it has none
    /// and default queries are enabled.
    fn queries(&self, named: &NamedGraph) -> Vec<(usize, usize)> {
        let n = named.graph.vertex_count();
        if !named.paths.is_empty() || !self.default_queries || n == 0 {
            return named.paths.clone();
        }
        vec![(0, n - 1)]
    }

    /// Text block for one graph, ending with a newline.
    pub fn report(&self, named: &NamedGraph) -> Result<String, Error> {
        let graph = &named.graph;
        let mut lines = vec![format!("== {} ==", named.name)];

        if self.describe_graphs {
            lines.push(graph.describe().trim_end().to_string());
        }

        lines.push(format!("connected: {}", algorithms::is_connected(graph)));

        for (s, v) in self.queries(named) {
            let path = algorithms::shortest_path(graph, s, v)?;
            lines.push(format!("shortest path {} -> {}: {}", s, v, path));
        }

        let contains_cycle = algorithms::is_contains_cycle_with(graph, &mut |cycle: &[usize]| {
            info!(
                graph = %named.name,
                cycle = %algorithms::render_cycle(cycle),
                "cycle found"
            );
        });
        lines.push(format!("contains cycle: {}", contains_cycle));

        lines.push(format!("bipartite: {}", algorithms::is_bipartite(graph)));
        lines.push(algorithms::negative_cycle(graph)?);

        let mut block = lines.join("\n");
        block.push('\n');
        Ok(block)
    }
}
