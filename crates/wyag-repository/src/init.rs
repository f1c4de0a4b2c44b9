use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::RepoError;

const DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

const DEFAULT_HEAD: &str = "ref: refs/heads/master\n";

/// Create the on-disk skeleton of a fresh repository:
///
/// - `objects/` (empty)
/// - `refs/heads/`, `refs/tags/` (empty)
/// - `description` with the stock phrase
/// - `HEAD` pointing at `refs/heads/master`
/// - `config` with the version-0 core section
///
/// Re-running init on an existing repository leaves the seeded files
/// alone.
pub(crate) fn create_skeleton(path: &Path) -> Result<(), RepoError> {
    let git_dir = path.join(".git");

    if git_dir.join("HEAD").is_file() {
        // Already a repository; do not clobber it.
        return Ok(());
    }

    fs::create_dir_all(git_dir.join("objects"))?;
    fs::create_dir_all(git_dir.join("refs").join("heads"))?;
    fs::create_dir_all(git_dir.join("refs").join("tags"))?;

    fs::write(git_dir.join("description"), DESCRIPTION)?;
    fs::write(git_dir.join("HEAD"), DEFAULT_HEAD)?;
    Config::repository_defaults().save(&git_dir.join("config"))?;

    Ok(())
}
