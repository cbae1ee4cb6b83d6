use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of bounds for a graph with {vertex_count} vertices")]
    VertexOutOfBounds { vertex: usize, vertex_count: usize },

    #[error("adjacency storage could not grow: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
