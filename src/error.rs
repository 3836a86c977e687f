use crate::graph::{Category, Handle};
use thiserror::Error;

/// Errors raised when a candidate connection violates a graph-shape rule.
///
/// These are returned synchronously by [`Graph::try_connect`](crate::graph::Graph::try_connect);
/// the graph is left unchanged whenever one is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("node '{node_id}' cannot connect to itself")]
    SelfConnection { node_id: String },

    #[error(
        "connecting '{source_id}' to '{target_id}' would create a cycle; use a loop block to repeat actions"
    )]
    CycleDetected {
        source_id: String,
        target_id: String,
    },

    #[error("node '{source_id}' is not a branch block and cannot tag a connection with handle '{handle}'")]
    UnsupportedHandle { source_id: String, handle: Handle },

    #[error("every connection out of node '{source_id}' must be tagged with a handle")]
    HandleRequired { source_id: String },

    #[error("handle '{handle}' of node '{source_id}' already has an outgoing connection")]
    HandleAlreadyConnected { source_id: String, handle: Handle },

    #[error(
        "node '{source_id}' already has an outgoing {category} connection; concurrent actions must be of different categories"
    )]
    DuplicateCategoryFanout {
        source_id: String,
        category: Category,
    },
}

/// Errors that can occur while compiling a graph into program text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("the graph has no start node")]
    MissingStartNode,

    #[error("the graph has {count} start nodes, expected exactly one")]
    MultipleStartNodes { count: usize },

    #[error(
        "node '{node_id}' references hardware device '{device}', which is not in the hardware configuration"
    )]
    UnknownDevice { node_id: String, device: String },
}

/// Errors that can occur when converting a custom editor format into a `Graph`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("invalid editor data: {0}")]
    ValidationError(String),
}

/// Errors raised while persisting or loading a compiled artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("serialization failed: {0}")]
    Encode(String),

    #[error("deserialization failed: {0}")]
    Decode(String),

    #[error("could not access '{path}': {message}")]
    Io { path: String, message: String },
}
