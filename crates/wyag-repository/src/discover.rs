use std::path::{Path, PathBuf};

use crate::RepoError;

/// Walk up from `start` until a directory containing a `.git` directory
/// is found. Reaching the filesystem root without one is an error.
pub(crate) fn find_worktree_root(start: &Path) -> Result<PathBuf, RepoError> {
    let start = std::fs::canonicalize(start).map_err(|_| RepoError::NotFound(start.to_path_buf()))?;

    let mut current = start.clone();
    loop {
        if current.join(".git").is_dir() {
            return Ok(current);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return Err(RepoError::NotFound(start)),
        }
    }
}
