use thiserror::Error;

use common::error::Error as GraphError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("Invalid graph source: {0}")]
    InvalidSource(String),

    #[error("Graph '{name}' is invalid: {source}")]
    InvalidGraph { name: String, source: GraphError },

    #[error("Graph processing error: {0}")]
    GraphError(#[from] GraphError),
}
