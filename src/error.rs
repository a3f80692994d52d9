//! Error types for render-tree and settings operations
//!
//! The draggable item itself never fails; these cover the ambient layers
//! around it (tree lookups, settings I/O, file watching).

use crate::tree::NodeId;
use thiserror::Error;

/// Errors that can occur outside the pure item presentation
#[derive(Error, Debug)]
pub enum PageboardError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher error from notify
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Node id does not refer to a live node in the render tree
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeId),

    /// No config directory could be resolved on this platform
    #[error("No config directory available")]
    NoConfigDir,

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for pageboard operations
pub type Result<T> = std::result::Result<T, PageboardError>;

impl From<String> for PageboardError {
    fn from(s: String) -> Self {
        PageboardError::Other(s)
    }
}

impl From<&str> for PageboardError {
    fn from(s: &str) -> Self {
        PageboardError::Other(s.to_string())
    }
}
