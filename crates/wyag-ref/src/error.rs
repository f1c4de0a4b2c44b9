use std::path::PathBuf;

/// Errors from reference operations.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("no such reference: {0}")]
    NotFound(String),

    #[error("symbolic reference cycle starting at {0}")]
    Cycle(String),

    #[error("malformed reference {name}: {reason}")]
    Parse { name: String, reason: String },

    #[error("cannot access {path}: {source}")]
    IoPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
