use std::path::PathBuf;

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("not a git repository (or any of the parent directories): {0}")]
    NotFound(PathBuf),

    #[error("unsupported repositoryformatversion {0}")]
    UnsupportedFormatVersion(i64),

    #[error("malformed config at {path} line {line}: {message}")]
    ConfigParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("checkout destination {0} is not a directory")]
    DestinationNotADirectory(PathBuf),

    #[error("checkout destination {0} is not empty")]
    DestinationNotEmpty(PathBuf),

    #[error("cannot check out a {0} entry")]
    UncheckoutableObject(wyag_object::ObjectType),

    #[error(transparent)]
    Loose(#[from] wyag_loose::LooseError),

    #[error(transparent)]
    Ref(#[from] wyag_ref::RefError),

    #[error(transparent)]
    Object(#[from] wyag_object::ObjectError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
