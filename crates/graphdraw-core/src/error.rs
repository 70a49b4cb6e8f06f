use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex index {index} out of range (graph has {count} vertices)")]
    VertexOutOfRange { index: usize, count: usize },
    #[error("Edge index {index} out of range (graph has {count} edges)")]
    EdgeOutOfRange { index: usize, count: usize },
}
