use crate::core::ids::VertexId;
use crate::core::tree::Edge;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("a spanning tree needs at least one vertex")]
    EmptyVertexSet,

    #[error("{0} vertices do not fit in the vertex id space")]
    TooManyVertices(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeDefect {
    #[error("expected {expected} edges, found {found}")]
    EdgeCount { expected: usize, found: usize },

    #[error("self loop on vertex {0}")]
    SelfLoop(VertexId),

    #[error("edge {edge:?} leaves the vertex range [0, {vertex_count})")]
    OutOfRange { edge: Edge, vertex_count: usize },

    #[error("vertex {0} is attached more than once")]
    DuplicateParent(VertexId),

    #[error("root vertex {0} has an incoming edge")]
    RootAttached(VertexId),

    #[error("edge {0:?} closes a cycle")]
    Cycle(Edge),
}
