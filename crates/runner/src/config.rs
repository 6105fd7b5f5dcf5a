use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Print the matrix dump before the algorithm results.
    pub describe_graphs: bool,
    /// Query `0 -> V-1` for graphs that list no paths of their own.
    pub default_queries: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RandomConfig {
    pub vertices: usize,
    pub edge_probability: f64,
    pub min_weight: i32,
    pub max_weight: i32,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphConfig {
    pub name: String,
    pub matrix: Vec<Vec<i32>>,
    /// Shortest path queries as `[source, target]` pairs.
    #[serde(default)]
    pub paths: Vec<(usize, usize)>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub report: ReportConfig,
    pub random: RandomConfig,
    #[serde(default)]
    pub graphs: Vec<GraphConfig>,
}

/// `crates/runner/Config.toml` under the current directory.
pub fn default_config_path() -> Result<PathBuf, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    Ok(base_path.join("crates").join("runner").join("Config.toml"))
}

/// Loads configuration from a file and environment variables.
///
/// Variables prefixed with `RUNNER__` override file values, with `__`
/// separating nested keys (e.g. `RUNNER__RANDOM__SEED=7`).
pub fn load_config(config_file_path: &Path) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path).required(true))
        .add_source(
            Environment::with_prefix("RUNNER")
                .try_parsing(true)
                .separator("__"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
