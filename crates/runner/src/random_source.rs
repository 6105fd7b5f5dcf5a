use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::RandomConfig;
use super::error::Error;
use super::types::{GraphSource, NamedGraph};
use matrix_graph_core::AdjacencyMatrix;

/// Produces a single random graph for exploration.
///
/// Every off-diagonal cell holds an edge with probability `edge_probability`;
/// edge weights are drawn uniformly from `[min_weight, max_weight]` with zero
/// excluded, since zero would mean "no edge".
pub struct RandomSource {
    pub config: RandomConfig,
}

impl RandomSource {
    /// Validates the generator settings. `seed` overrides the configured seed.
    pub fn new(mut config: RandomConfig, seed: Option<u64>) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&config.edge_probability) {
            return Err(Error::InvalidSource(format!(
                "edge_probability must be within [0, 1], got {}",
                config.edge_probability
            )));
        }

        if config.min_weight > config.max_weight {
            return Err(Error::InvalidSource(format!(
                "min_weight {} exceeds max_weight {}",
                config.min_weight, config.max_weight
            )));
        }

        if config.min_weight == 0 && config.max_weight == 0 {
            return Err(Error::InvalidSource(
                "weight range [0, 0] cannot produce an edge".to_string(),
            ));
        }

        if seed.is_some() {
            config.seed = seed;
        }

        Ok(RandomSource { config })
    }

    /// Generates the matrix rows with the given generator.
    pub fn generate_rows<R: Rng>(&self, rng: &mut R) -> Vec<Vec<i32>> {
        let n = self.config.vertices;
        let weight_range = self.config.min_weight..=self.config.max_weight;

        (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j || !rng.random_bool(self.config.edge_probability) {
                            return 0;
                        }
                        loop {
                            let weight = rng.random_range(weight_range.clone());
                            if weight != 0 {
                                break weight;
                            }
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl GraphSource for RandomSource {
    fn graphs(&self) -> Result<Vec<NamedGraph>, Error> {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let rows = self.generate_rows(&mut rng);
        let graph = AdjacencyMatrix::from_rows(&rows)?;

        match self.config.seed {
            Some(seed) => info!(seed, vertices = graph.vertex_count(), "generated random graph"),
            None => debug!(vertices = graph.vertex_count(), "generated unseeded random graph"),
        }

        let paths = match graph.vertex_count() {
            0 => Vec::new(),
            n => vec![(0, n - 1)],
        };

        Ok(vec![NamedGraph {
            name: "random".to_string(),
            graph,
            paths,
        }])
    }
}
