pub mod algorithms;
pub mod bipartite;
pub mod connectivity;
pub mod cycle;
pub mod matrix;
pub mod solver;
pub mod traits;

pub use matrix::AdjacencyMatrix;
