use std::fs;
use std::path::{Path, PathBuf};

use bstr::ByteSlice;
use wyag_hash::ObjectId;

use crate::{RefError, MAX_SYMREF_DEPTH};

/// The parsed content of one ref file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// A 40-hex object id.
    Direct(ObjectId),
    /// An indirection to another ref, named relative to the repository
    /// directory.
    Symbolic(String),
}

/// Loose reference store rooted at a repository directory.
pub struct RefStore {
    git_dir: PathBuf,
}

impl RefStore {
    pub fn open(git_dir: impl AsRef<Path>) -> Self {
        Self {
            git_dir: git_dir.as_ref().to_path_buf(),
        }
    }

    fn ref_path(&self, name: &str) -> PathBuf {
        self.git_dir.join(name)
    }

    /// Read and parse a single ref file. `Ok(None)` if the file is absent.
    pub fn read(&self, name: &str) -> Result<Option<Reference>, RefError> {
        let path = self.ref_path(name);
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RefError::IoPath { path, source: e }),
        };

        let trimmed = contents.trim();
        if let Some(target) = trimmed.strip_prefix(b"ref: ") {
            let target = std::str::from_utf8(target.trim()).map_err(|_| RefError::Parse {
                name: name.to_string(),
                reason: "symbolic target is not valid UTF-8".into(),
            })?;
            return Ok(Some(Reference::Symbolic(target.to_string())));
        }

        let hex = std::str::from_utf8(trimmed).map_err(|_| RefError::Parse {
            name: name.to_string(),
            reason: "object id is not valid UTF-8".into(),
        })?;
        let oid = ObjectId::from_hex(hex).map_err(|e| RefError::Parse {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(Reference::Direct(oid)))
    }

    /// Resolve a ref to an object id, following symbolic indirections.
    ///
    /// The chain length is bounded; a chain that does not terminate within
    /// [`MAX_SYMREF_DEPTH`] steps is reported as a cycle.
    pub fn resolve(&self, name: &str) -> Result<ObjectId, RefError> {
        let mut current = name.to_string();
        for _ in 0..MAX_SYMREF_DEPTH {
            match self.read(&current)? {
                None => return Err(RefError::NotFound(current)),
                Some(Reference::Direct(oid)) => return Ok(oid),
                Some(Reference::Symbolic(target)) => current = target,
            }
        }
        Err(RefError::Cycle(name.to_string()))
    }

    /// List every ref under `refs/`, resolved, sorted by full name.
    pub fn list(&self) -> Result<Vec<(String, ObjectId)>, RefError> {
        let mut names = Vec::new();
        let refs_dir = self.git_dir.join("refs");
        if refs_dir.is_dir() {
            collect_ref_names(&self.git_dir, &refs_dir, &mut names)?;
        }
        names.sort();

        let mut out = Vec::with_capacity(names.len());
        for name in names {
            let oid = self.resolve(&name)?;
            out.push((name, oid));
        }
        Ok(out)
    }

    /// Write a direct ref, creating parent directories as needed.
    /// Overwriting an existing ref is allowed.
    pub fn create(&self, name: &str, oid: &ObjectId) -> Result<(), RefError> {
        let path = self.ref_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| RefError::IoPath {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&path, format!("{}\n", oid.to_hex()))
            .map_err(|e| RefError::IoPath { path, source: e })
    }
}

fn collect_ref_names(
    git_dir: &Path,
    dir: &Path,
    out: &mut Vec<String>,
) -> Result<(), RefError> {
    let entries = fs::read_dir(dir).map_err(|e| RefError::IoPath {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| RefError::IoPath {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_ref_names(git_dir, &path, out)?;
        } else if path.is_file() {
            let rel = path.strip_prefix(git_dir).map_err(|_| RefError::Parse {
                name: path.display().to_string(),
                reason: "ref path escapes the repository directory".into(),
            })?;
            let Some(name) = rel.to_str() else { continue };
            out.push(name.to_string());
        }
    }
    Ok(())
}
