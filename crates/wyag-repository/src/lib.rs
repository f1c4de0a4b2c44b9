//! Repository discovery, initialization, and access to the object and
//! reference stores.

mod checkout;
mod config;
mod discover;
mod error;
mod init;
mod tag;

pub use config::Config;
pub use error::RepoError;

use std::path::{Path, PathBuf};

use wyag_loose::LooseObjectStore;
use wyag_ref::RefStore;

/// An opened repository: a working tree plus its `.git` directory.
///
/// One handle is created per command invocation and dropped at exit;
/// nothing is cached across invocations.
pub struct Repository {
    worktree: PathBuf,
    git_dir: PathBuf,
    config: Config,
    objects: LooseObjectStore,
    refs: RefStore,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("worktree", &self.worktree)
            .field("git_dir", &self.git_dir)
            .finish_non_exhaustive()
    }
}

impl Repository {
    /// Open an existing repository whose working tree root is `path`.
    ///
    /// Fails if `<path>/.git` is not a directory, if the config cannot be
    /// loaded, or if `core.repositoryformatversion` is not 0.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let worktree = path.as_ref().to_path_buf();
        let git_dir = worktree.join(".git");
        if !git_dir.is_dir() {
            return Err(RepoError::NotFound(worktree));
        }

        let config = Config::load(&git_dir.join("config"))?;
        // A missing key defaults to version 0, matching repositories
        // created before the key existed.
        let version = config.get_int("core", "repositoryformatversion").unwrap_or(0);
        if version != 0 {
            return Err(RepoError::UnsupportedFormatVersion(version));
        }

        let objects = LooseObjectStore::open(git_dir.join("objects"));
        let refs = RefStore::open(&git_dir);

        Ok(Self {
            worktree,
            git_dir,
            config,
            objects,
            refs,
        })
    }

    /// Create a repository at `path` (seeding the `.git` skeleton), then
    /// open it.
    pub fn init(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        init::create_skeleton(path.as_ref())?;
        Self::open(path)
    }

    /// Find the repository containing `start` by walking up the directory
    /// tree, then open it.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, RepoError> {
        let root = discover::find_worktree_root(start.as_ref())?;
        Self::open(root)
    }

    /// The working tree root.
    pub fn worktree(&self) -> &Path {
        &self.worktree
    }

    /// The `.git` directory.
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// The loose object store.
    pub fn objects(&self) -> &LooseObjectStore {
        &self.objects
    }

    /// The reference store.
    pub fn refs(&self) -> &RefStore {
        &self.refs
    }

    /// The loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
