use thiserror::Error;

/// Errors that can occur during graph traversal operations.
#[derive(Error, Debug)]
pub enum GraphWalkError {
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `GraphWalkError`.
pub type Result<T> = std::result::Result<T, GraphWalkError>;
